//! Construction-status aggregation for HS2 progress charts.
//!
//! Counts features by construction phase and turns those counts into
//! ordered chart series, either one segment per phase or grouped into the
//! six overview buckets.

pub mod chart_series;
pub mod feature_status;
pub mod progress_buckets;
pub mod status_counts;
pub mod status_table;

pub use chart_series::{series_total, ChartSeries};
pub use feature_status::{FeatureStatus, UnknownFeatureStatus, DEFAULT_FEATURE_STATUS};
pub use progress_buckets::{coarse_series, BucketTable, BucketTableError, ProgressBucket};
pub use status_counts::{count_by_raw_status, count_by_status, HasFeatureStatus, StatusCounts};
pub use status_table::{fine_series, StatusDisplay, StatusTable, StatusTableError};
