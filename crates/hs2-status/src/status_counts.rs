use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::feature_status::FeatureStatus;

/// Anything that carries an optional construction status.
pub trait HasFeatureStatus {
    fn feature_status(&self) -> Option<FeatureStatus>;
}

impl HasFeatureStatus for Option<FeatureStatus> {
    fn feature_status(&self) -> Option<FeatureStatus> {
        *self
    }
}

impl HasFeatureStatus for FeatureStatus {
    fn feature_status(&self) -> Option<FeatureStatus> {
        Some(*self)
    }
}

impl<T: HasFeatureStatus + ?Sized> HasFeatureStatus for &T {
    fn feature_status(&self) -> Option<FeatureStatus> {
        (**self).feature_status()
    }
}

/// Per-status feature counts. Statuses never seen are absent and read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatusCounts {
    counts: BTreeMap<FeatureStatus, u64>,
}

impl StatusCounts {
    pub fn get(&self, status: FeatureStatus) -> u64 {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, status: FeatureStatus) {
        self.add(status, 1);
    }

    pub fn add(&mut self, status: FeatureStatus, count: u64) {
        let entry = self.counts.entry(status).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().copied().fold(0, u64::saturating_add)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in status display order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureStatus, u64)> + '_ {
        self.counts.iter().map(|(status, count)| (*status, *count))
    }
}

impl FromIterator<(FeatureStatus, u64)> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = (FeatureStatus, u64)>>(iter: I) -> Self {
        let mut counts = Self::default();
        for (status, count) in iter {
            counts.add(status, count);
        }
        counts
    }
}

/// Counts entities by status, treating a missing status as not started.
pub fn count_by_status<I>(entities: I) -> StatusCounts
where
    I: IntoIterator,
    I::Item: HasFeatureStatus,
{
    let mut counts = StatusCounts::default();
    for entity in entities {
        counts.increment(FeatureStatus::or_default_status(entity.feature_status()));
    }
    counts
}

/// Counts raw database status strings.
///
/// Null or blank values count as not started. Values outside the status
/// enumeration are excluded from the result and reported once each.
pub fn count_by_raw_status<'a, I>(values: I) -> StatusCounts
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts = StatusCounts::default();
    let mut unknown: BTreeMap<&'a str, u64> = BTreeMap::new();
    for value in values {
        let status = match value.map(str::trim) {
            None | Some("") => FeatureStatus::or_default_status(None),
            Some(raw) => match raw.parse::<FeatureStatus>() {
                Ok(status) => status,
                Err(_) => {
                    *unknown.entry(raw).or_insert(0) += 1;
                    continue;
                }
            },
        };
        counts.increment(status);
    }
    for (value, occurrences) in unknown {
        warn!(
            status = value,
            occurrences, "excluding unrecognized feature status from progress counts"
        );
    }
    counts
}
