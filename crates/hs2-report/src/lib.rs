//! Operator report for exported HS2 feature rows.
//!
//! Reads the `features` export, aggregates construction statuses into chart
//! series, and resolves each feature's detail-page link.

pub mod bootstrap_helpers;
pub mod cli_args;
pub mod report;

pub use bootstrap_helpers::init_tracing;
pub use cli_args::{Cli, CliGranularity};
pub use report::{
    build_report, parse_feature_rows, run_report, FeatureLink, FeatureRow, ProgressReport,
};
