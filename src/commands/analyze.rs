use anyhow::Result;
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;

use crate::advisor::advise;
use crate::config::WearmapConfig;
use crate::io::input::load_snapshot;
use crate::io::output::{create_writer, AnalysisReport, OutputFormat};
use crate::stats::compute_statistics;

pub struct AnalyzeOptions {
    pub export: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub as_of: Option<NaiveDate>,
    pub config: Option<PathBuf>,
}

pub fn handle_analyze(options: AnalyzeOptions) -> Result<()> {
    let config = WearmapConfig::load(options.config.as_deref())?;
    let snapshot = load_snapshot(&options.export)?;

    // The analysis core never reads the clock; the reference date is fixed
    // here, at the boundary.
    let today = options.as_of.unwrap_or_else(|| Utc::now().date_naive());
    log::info!(
        "analyzing wardrobe `{}` as of {today}",
        snapshot.wardrobe_id
    );

    let mut statistics = compute_statistics(&snapshot, today);
    let advisories = advise(&snapshot, &statistics, today, &config.thresholds);

    if let Some(top) = options.top {
        statistics.top_clothings.truncate(top);
        statistics.brand_stats.truncate(top);
        statistics.idle_clothings.truncate(top);
    }

    let report = AnalysisReport {
        wardrobe_id: snapshot.wardrobe_id.clone(),
        generated_at: Utc::now(),
        statistics,
        advisories,
    };

    let destination = super::open_destination(options.output.as_deref())?;
    create_writer(options.format, destination).write_analysis(&report)
}
