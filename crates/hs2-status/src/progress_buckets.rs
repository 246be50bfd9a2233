//! Coarse progress buckets for overview charts.
//!
//! Each bucket sums a fixed set of raw statuses. The bucket table must place
//! every status in exactly one bucket so coarse totals match fine totals.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use thiserror::Error;

use crate::chart_series::ChartSeries;
use crate::feature_status::FeatureStatus;
use crate::status_counts::StatusCounts;
use crate::status_table::StatusTable;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BucketTableError {
    #[error("status {status} is not assigned to any progress bucket")]
    Unassigned { status: FeatureStatus },
    #[error("status {status} is assigned to both '{first}' and '{second}'")]
    Overlap {
        status: FeatureStatus,
        first: String,
        second: String,
    },
}

/// Named group of raw statuses. `color_from` picks the legend color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBucket {
    pub name: String,
    pub members: Vec<FeatureStatus>,
    pub color_from: FeatureStatus,
}

impl ProgressBucket {
    pub fn new(name: &str, members: &[FeatureStatus], color_from: FeatureStatus) -> Self {
        Self {
            name: name.to_string(),
            members: members.to_vec(),
            color_from,
        }
    }

    pub fn total(&self, counts: &StatusCounts) -> u64 {
        self.members
            .iter()
            .map(|status| counts.get(*status))
            .fold(0, u64::saturating_add)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketTable {
    buckets: Vec<ProgressBucket>,
}

impl BucketTable {
    /// Builds a table, rejecting unassigned or doubly assigned statuses.
    pub fn from_buckets(buckets: Vec<ProgressBucket>) -> Result<Self, BucketTableError> {
        let mut owners: BTreeMap<FeatureStatus, &str> = BTreeMap::new();
        for bucket in &buckets {
            for status in &bucket.members {
                if let Some(first) = owners.insert(*status, &bucket.name) {
                    return Err(BucketTableError::Overlap {
                        status: *status,
                        first: first.to_string(),
                        second: bucket.name.clone(),
                    });
                }
            }
        }
        if let Some(status) = FeatureStatus::ALL
            .into_iter()
            .find(|status| !owners.contains_key(status))
        {
            return Err(BucketTableError::Unassigned { status });
        }
        Ok(Self { buckets })
    }

    /// Process-wide six-bucket table.
    pub fn builtin() -> &'static BucketTable {
        static TABLE: OnceLock<BucketTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let buckets = builtin_buckets();
            match Self::from_buckets(buckets.clone()) {
                Ok(table) => table,
                Err(error) => {
                    debug_assert!(false, "{error}");
                    tracing::error!(%error, "built-in progress buckets failed validation");
                    Self { buckets }
                }
            }
        })
    }

    pub fn buckets(&self) -> &[ProgressBucket] {
        &self.buckets
    }

    /// Bucketed series in table order, zero buckets dropped.
    pub fn coarse_series(
        &self,
        counts: Option<&StatusCounts>,
        statuses: &StatusTable,
    ) -> Vec<ChartSeries> {
        let Some(counts) = counts else {
            return Vec::new();
        };
        self.buckets
            .iter()
            .map(|bucket| {
                ChartSeries::new(
                    &bucket.name,
                    bucket.total(counts),
                    statuses.color(bucket.color_from),
                )
            })
            .filter(|series| series.value > 0)
            .collect()
    }
}

fn builtin_buckets() -> Vec<ProgressBucket> {
    use FeatureStatus::*;

    vec![
        ProgressBucket::new("Not Started", &[NotStarted], NotStarted),
        ProgressBucket::new("Prep Work", &[PrepWork], PrepWork),
        ProgressBucket::new(
            "Foundations",
            &[Digging, SegmentInstallation, Foundations, Piers],
            Piers,
        ),
        ProgressBucket::new(
            "Superstructure",
            &[Deck, Parapet, SideTunnels, SurfaceBuildings],
            Deck,
        ),
        ProgressBucket::new("Civils", &[Civils, Landscaping], Civils),
        ProgressBucket::new("Completed", &[Completed], Completed),
    ]
}

/// Six-bucket overview series over the built-in tables.
pub fn coarse_series(counts: Option<&StatusCounts>) -> Vec<ChartSeries> {
    BucketTable::builtin().coarse_series(counts, StatusTable::builtin())
}
