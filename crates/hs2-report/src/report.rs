use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use hs2_routing::{RoutingTable, StructureTotals};
use hs2_status::{count_by_raw_status, BucketTable, ChartSeries, StatusCounts, StatusTable};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli_args::{Cli, CliGranularity};

/// One exported row of the `features` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeatureRow {
    pub id: String,
    #[serde(rename = "type")]
    pub feature_type: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureLink {
    pub id: String,
    #[serde(rename = "type")]
    pub feature_type: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub rows: usize,
    pub total: u64,
    pub counts: StatusCounts,
    pub series: Vec<ChartSeries>,
    pub totals: StructureTotals,
    pub links: Vec<FeatureLink>,
}

pub fn parse_feature_rows(raw: &str) -> Result<Vec<FeatureRow>> {
    serde_json::from_str(raw).context("input must be a JSON array of {id, type, status} rows")
}

pub fn build_report(
    rows: &[FeatureRow],
    routing: &RoutingTable,
    granularity: CliGranularity,
) -> ProgressReport {
    let counts = count_by_raw_status(rows.iter().map(|row| row.status.as_deref()));
    let series = match granularity {
        CliGranularity::Fine => StatusTable::builtin().fine_series(Some(&counts)),
        CliGranularity::Coarse => {
            BucketTable::builtin().coarse_series(Some(&counts), StatusTable::builtin())
        }
    };
    let totals = routing.structure_totals(rows.iter().map(|row| row.feature_type.as_str()));
    let links = rows
        .iter()
        .map(|row| FeatureLink {
            id: row.id.clone(),
            feature_type: row.feature_type.clone(),
            href: routing.resolve_href(&row.feature_type, &row.id),
        })
        .collect();
    ProgressReport {
        rows: rows.len(),
        total: counts.total(),
        counts,
        series,
        totals,
        links,
    }
}

fn read_input(cli: &Cli) -> Result<String> {
    if cli.reads_stdin() {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read feature rows from stdin")?;
        return Ok(raw);
    }
    std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))
}

fn load_routing_table(path: Option<&Path>) -> Result<RoutingTable> {
    match path {
        Some(path) => RoutingTable::from_toml_path(path)
            .with_context(|| format!("invalid routing config {}", path.display())),
        None => Ok(RoutingTable::builtin().clone()),
    }
}

/// Runs one report and returns the rendered JSON document.
pub fn run_report(cli: &Cli) -> Result<String> {
    let routing = load_routing_table(cli.routing_config.as_deref())?;
    let rows = parse_feature_rows(&read_input(cli)?)?;
    debug!(
        rows = rows.len(),
        section_root = routing.section_root(),
        "building progress report"
    );
    let report = build_report(&rows, &routing, cli.granularity);
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    rendered.context("failed to encode progress report")
}
