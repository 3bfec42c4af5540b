//! Rendering of score summaries and the final report sink.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::aggregate::ScoreSummary;
use crate::error::{RankevalError, Result};
use crate::rank::QueryMode;

const SEPARATOR: &str = "===========================================================";

/// One evaluation outcome: a method, a query type, and its scores.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub method: String,
    pub query_type: QueryMode,
    pub summary: ScoreSummary,
}

/// Render one report block as human-readable text.
pub fn format_summary(report: &ScoreReport) -> String {
    format!(
        "{}\n{} Scores\nPercentage in Top 1%: {}\nPercentage in Top 5%: {}\nAverage: {}",
        report.method,
        report.query_type.label(),
        report.summary.top_one,
        report.summary.top_five,
        report.summary.average_rank
    )
}

/// Write every report block to `path`, each preceded by a separator line.
pub fn write_report(reports: &[ScoreReport], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| RankevalError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    for report in reports {
        writeln!(writer, "{}", SEPARATOR)?;
        writeln!(writer, "{}", format_summary(report))?;
    }
    writer.flush()?;

    log::info!("Wrote {} score blocks to {}", reports.len(), path.display());
    Ok(())
}
