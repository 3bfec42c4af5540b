//! Evaluation CLI: score every configured retrieval method and write the
//! rank-based score report.

use anyhow::Context;
use clap::Parser;
use rankeval::{report, runner, Config};
use std::path::PathBuf;

/// Score retrieval methods by ranking each publication against queries
/// derived from its own tags and title.
#[derive(Parser, Debug)]
#[command(name = "rankeval")]
struct Args {
    /// Path to the configuration file (default: $RANKEVAL_CONFIG, then ./config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured report output path.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = match args.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let reports = runner::run(&config).context("evaluation failed")?;

    let output = args.output.as_deref().unwrap_or_else(|| config.report_path());
    report::write_report(&reports, output)
        .with_context(|| format!("failed to write report to {}", output.display()))?;

    println!("Wrote {} score blocks to {}", reports.len(), output.display());
    for entry in &reports {
        println!(
            "  {} / {}: top 1% {:.2}, top 5% {:.2}, average {:.2}",
            entry.method,
            entry.query_type.label(),
            entry.summary.top_one,
            entry.summary.top_five,
            entry.summary.average_rank
        );
    }

    Ok(())
}
