//! Fixed-format report output.

use std::fs::File;
use std::path::Path;

use crate::model::ResultSummary;

/// The column header printed once before any per-file line.
///
/// The column order here does not match the per-file line layout; downstream
/// tooling relies on both formats staying exactly as they are.
pub const REPORT_HEADER: &str = "identifier makespan num_tasks mean_task_num mean_job_latency p99_job_latency std_job_latency total_delay mean_delay std_delay mean_duration std_duration mean_arrival std_arrival";

impl ResultSummary {
    /// Render the per-file summary line, space-separated.
    ///
    /// NaN statistics render as `NaN`.
    pub fn to_line(&self) -> String {
        format!(
            "{} {} {} {} {} {} {} {} {} {} {} {} {} {}",
            self.identifier,
            self.makespan,
            self.num_tasks,
            self.mean_task_count,
            self.mean_latency,
            self.p99_latency,
            self.std_task_count,
            self.total_delay,
            self.mean_delay,
            self.std_delay,
            self.mean_duration,
            self.std_duration,
            self.mean_arrival,
            self.std_arrival,
        )
    }
}

/// Write all summaries to `path` as a pretty-printed JSON report.
pub fn write_json_report<P: AsRef<Path>>(
    path: P,
    summaries: &[ResultSummary],
) -> anyhow::Result<()> {
    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, summaries)?;
    Ok(())
}
