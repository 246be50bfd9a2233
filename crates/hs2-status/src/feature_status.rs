use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status assumed for any feature whose database row carries no status.
pub const DEFAULT_FEATURE_STATUS: FeatureStatus = FeatureStatus::NotStarted;

/// Error returned when a raw status string is not a known construction phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown feature status '{value}'")]
pub struct UnknownFeatureStatus {
    pub value: String,
}

/// Construction phase attached to a tracked feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureStatus {
    NotStarted,
    PrepWork,
    Foundations,
    Digging,
    SegmentInstallation,
    Piers,
    SideTunnels,
    Deck,
    Parapet,
    SurfaceBuildings,
    Landscaping,
    Civils,
    Completed,
}

impl FeatureStatus {
    /// Every status in display order.
    pub const ALL: [FeatureStatus; 13] = [
        Self::NotStarted,
        Self::PrepWork,
        Self::Foundations,
        Self::Digging,
        Self::SegmentInstallation,
        Self::Piers,
        Self::SideTunnels,
        Self::Deck,
        Self::Parapet,
        Self::SurfaceBuildings,
        Self::Landscaping,
        Self::Civils,
        Self::Completed,
    ];

    /// Database representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::PrepWork => "PREP_WORK",
            Self::Foundations => "FOUNDATIONS",
            Self::Digging => "DIGGING",
            Self::SegmentInstallation => "SEGMENT_INSTALLATION",
            Self::Piers => "PIERS",
            Self::SideTunnels => "SIDE_TUNNELS",
            Self::Deck => "DECK",
            Self::Parapet => "PARAPET",
            Self::SurfaceBuildings => "SURFACE_BUILDINGS",
            Self::Landscaping => "LANDSCAPING",
            Self::Civils => "CIVILS",
            Self::Completed => "COMPLETED",
        }
    }

    /// Resolves a nullable status to a concrete one.
    pub fn or_default_status(status: Option<Self>) -> Self {
        status.unwrap_or(DEFAULT_FEATURE_STATUS)
    }
}

impl fmt::Display for FeatureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureStatus {
    type Err = UnknownFeatureStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == trimmed)
            .ok_or_else(|| UnknownFeatureStatus {
                value: value.to_string(),
            })
    }
}
