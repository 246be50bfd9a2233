use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown feature type '{value}'")]
pub struct UnknownFeatureType {
    pub value: String,
}

/// Category tag of a tracked structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureType {
    Overbridge,
    Underbridge,
    Underpass,
    Viaduct,
    BoxStructure,
    Tunnel,
    CutAndCover,
    Embankment,
    Cutting,
    Shaft,
    Station,
    Culvert,
}

impl FeatureType {
    pub const ALL: [FeatureType; 12] = [
        Self::Overbridge,
        Self::Underbridge,
        Self::Underpass,
        Self::Viaduct,
        Self::BoxStructure,
        Self::Tunnel,
        Self::CutAndCover,
        Self::Embankment,
        Self::Cutting,
        Self::Shaft,
        Self::Station,
        Self::Culvert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overbridge => "overbridge",
            Self::Underbridge => "underbridge",
            Self::Underpass => "underpass",
            Self::Viaduct => "viaduct",
            Self::BoxStructure => "box_structure",
            Self::Tunnel => "tunnel",
            Self::CutAndCover => "cut_and_cover",
            Self::Embankment => "embankment",
            Self::Cutting => "cutting",
            Self::Shaft => "shaft",
            Self::Station => "station",
            Self::Culvert => "culvert",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overbridge => "Overbridge",
            Self::Underbridge => "Underbridge",
            Self::Underpass => "Underpass",
            Self::Viaduct => "Viaduct",
            Self::BoxStructure => "Box Structure",
            Self::Tunnel => "Tunnel",
            Self::CutAndCover => "Cut and Cover",
            Self::Embankment => "Embankment",
            Self::Cutting => "Cutting",
            Self::Shaft => "Shaft",
            Self::Station => "Station",
            Self::Culvert => "Culvert",
        }
    }

    /// Color token for icons and type badges.
    pub fn color(self) -> &'static str {
        match self {
            Self::Overbridge => "yellow.600",
            Self::Underbridge | Self::Underpass => "red.600",
            Self::Viaduct | Self::BoxStructure => "purple.500",
            Self::Tunnel => "gray.700",
            Self::CutAndCover => "green.600",
            Self::Embankment => "brown.500",
            Self::Cutting => "orange.500",
            Self::Shaft => "gray.500",
            Self::Station => "fg",
            Self::Culvert => "blue.500",
        }
    }

    /// Minor works that are left out of the structures overview.
    pub fn is_minor_work(self) -> bool {
        matches!(self, Self::Culvert | Self::Shaft)
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureType {
    type Err = UnknownFeatureType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|feature_type| feature_type.as_str() == value)
            .ok_or_else(|| UnknownFeatureType {
                value: value.to_string(),
            })
    }
}
