use anyhow::Result;
use clap::Parser;
use hs2_report::{init_tracing, run_report, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    let rendered = run_report(&cli)?;
    println!("{rendered}");
    Ok(())
}
