use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliGranularity {
    /// One series entry per construction status.
    Fine,
    /// Six overview buckets.
    Coarse,
}

#[derive(Debug, Parser)]
#[command(
    name = "hs2-report",
    about = "Summarize exported HS2 feature rows into progress series and page links",
    version
)]
pub struct Cli {
    #[arg(
        long,
        env = "HS2_REPORT_INPUT",
        default_value = "-",
        help = "JSON array of {id, type, status} feature rows; '-' reads stdin"
    )]
    pub input: PathBuf,

    #[arg(
        long = "routing-config",
        env = "HS2_REPORT_ROUTING_CONFIG",
        help = "Optional TOML routing table replacing the built-in category routes"
    )]
    pub routing_config: Option<PathBuf>,

    #[arg(
        long,
        env = "HS2_REPORT_GRANULARITY",
        value_enum,
        default_value_t = CliGranularity::Coarse,
        help = "Progress series granularity"
    )]
    pub granularity: CliGranularity,

    #[arg(long, default_value_t = false, help = "Pretty-print the JSON report")]
    pub pretty: bool,
}

impl Cli {
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}
