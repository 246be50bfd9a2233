use std::collections::BTreeSet;
use std::sync::OnceLock;

use thiserror::Error;

use crate::chart_series::ChartSeries;
use crate::feature_status::FeatureStatus;
use crate::status_counts::StatusCounts;

/// Error returned when a status display table is not exhaustive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusTableError {
    #[error("status display table has no entry for {status}")]
    Missing { status: FeatureStatus },
    #[error("status display table lists {status} more than once")]
    Duplicate { status: FeatureStatus },
}

/// Label and color used when a status is shown in a badge or chart legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    pub status: FeatureStatus,
    pub label: String,
    pub label_short: Option<String>,
    pub color: String,
}

impl StatusDisplay {
    pub fn new(status: FeatureStatus, label: &str, color: &str) -> Self {
        Self {
            status,
            label: label.to_string(),
            label_short: None,
            color: color.to_string(),
        }
    }

    pub fn with_short_label(mut self, label_short: &str) -> Self {
        self.label_short = Some(label_short.to_string());
        self
    }

    /// Label for a status badge; narrow layouts prefer the short form.
    pub fn badge_label(&self, compact: bool) -> &str {
        match (&self.label_short, compact) {
            (Some(short), true) => short,
            _ => &self.label,
        }
    }
}

/// Ordered status display table. Iteration order defines chart order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTable {
    entries: Vec<StatusDisplay>,
}

impl StatusTable {
    /// Builds a table, rejecting any that misses or repeats a status.
    pub fn from_entries(entries: Vec<StatusDisplay>) -> Result<Self, StatusTableError> {
        let mut seen = BTreeSet::new();
        for entry in &entries {
            if !seen.insert(entry.status) {
                return Err(StatusTableError::Duplicate {
                    status: entry.status,
                });
            }
        }
        if let Some(status) = FeatureStatus::ALL
            .into_iter()
            .find(|status| !seen.contains(status))
        {
            return Err(StatusTableError::Missing { status });
        }
        Ok(Self { entries })
    }

    /// Process-wide built-in table.
    pub fn builtin() -> &'static StatusTable {
        static TABLE: OnceLock<StatusTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let entries = builtin_entries();
            match Self::from_entries(entries.clone()) {
                Ok(table) => table,
                Err(error) => {
                    debug_assert!(false, "{error}");
                    tracing::error!(%error, "built-in status table failed validation");
                    Self { entries }
                }
            }
        })
    }

    pub fn entries(&self) -> &[StatusDisplay] {
        &self.entries
    }

    pub fn get(&self, status: FeatureStatus) -> Option<&StatusDisplay> {
        self.entries.iter().find(|entry| entry.status == status)
    }

    pub fn label(&self, status: FeatureStatus) -> &str {
        self.get(status)
            .map(|entry| entry.label.as_str())
            .unwrap_or_else(|| status.as_str())
    }

    pub fn color(&self, status: FeatureStatus) -> &str {
        self.get(status)
            .map(|entry| entry.color.as_str())
            .unwrap_or("gray.500")
    }

    /// One series entry per status in table order, zero counts dropped.
    pub fn fine_series(&self, counts: Option<&StatusCounts>) -> Vec<ChartSeries> {
        let Some(counts) = counts else {
            return Vec::new();
        };
        self.entries
            .iter()
            .map(|entry| ChartSeries::new(&entry.label, counts.get(entry.status), &entry.color))
            .filter(|series| series.value > 0)
            .collect()
    }
}

fn builtin_entries() -> Vec<StatusDisplay> {
    vec![
        StatusDisplay::new(FeatureStatus::NotStarted, "Not Started", "red.600"),
        StatusDisplay::new(FeatureStatus::PrepWork, "Prep Work", "red.500"),
        StatusDisplay::new(FeatureStatus::Foundations, "Foundations", "yellow.600"),
        StatusDisplay::new(FeatureStatus::Digging, "Digging", "yellow.600"),
        StatusDisplay::new(
            FeatureStatus::SegmentInstallation,
            "Segment Installation",
            "yellow.500",
        )
        .with_short_label("Segments"),
        StatusDisplay::new(FeatureStatus::Piers, "Piers", "yellow.500"),
        StatusDisplay::new(FeatureStatus::SideTunnels, "Side Tunnels", "blue.500"),
        StatusDisplay::new(FeatureStatus::Deck, "Deck", "blue.500"),
        StatusDisplay::new(FeatureStatus::Parapet, "Parapet", "blue.600"),
        StatusDisplay::new(
            FeatureStatus::SurfaceBuildings,
            "Surface Buildings",
            "blue.600",
        )
        .with_short_label("Buildings"),
        StatusDisplay::new(FeatureStatus::Landscaping, "Landscaping", "green.500"),
        StatusDisplay::new(FeatureStatus::Civils, "Civils", "green.500"),
        StatusDisplay::new(FeatureStatus::Completed, "Completed", "green.600"),
    ]
}

/// Fine-grained progress series over the built-in table.
pub fn fine_series(counts: Option<&StatusCounts>) -> Vec<ChartSeries> {
    StatusTable::builtin().fine_series(counts)
}
