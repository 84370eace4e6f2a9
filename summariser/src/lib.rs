use std::path::Path;

use anyhow::Context;

use crate::model::ResultSummary;

pub mod aggregator;
mod analyze;
pub mod model;
pub mod report;

/// Summarise one result file.
///
/// Loads the file's job records and aggregates them into a [ResultSummary]
/// whose identifier is the path as given. Unreadable files and malformed
/// lines are errors; statistics that are undefined for the input come out as
/// NaN instead.
pub fn summarize_result_file<P: AsRef<Path>>(path: P) -> anyhow::Result<ResultSummary> {
    let path = path.as_ref();
    let records = gridsim_result_model::load_job_records(path)
        .with_context(|| format!("Failed to load job records from {}", path.display()))?;
    log::debug!("Loaded {} job records from {}", records.len(), path.display());

    Ok(aggregator::summarize(&path.display().to_string(), &records))
}
