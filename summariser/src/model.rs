use serde::{Deserialize, Serialize};

/// Summary statistics for one result file.
///
/// Field order mirrors the per-file report line, which does not match the
/// column order of [crate::report::REPORT_HEADER].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// The identifier printed at the front of the line
    ///
    /// This is the input path exactly as it was given on the command line.
    pub identifier: String,
    /// Latest task end minus earliest task start
    pub makespan: f64,
    /// Total number of tasks across all jobs
    pub num_tasks: u64,
    /// Mean number of tasks per job
    pub mean_task_count: f64,
    /// Mean job latency
    ///
    /// A job's latency is its latest task end minus its submission time, or
    /// zero when no task outlasts the submission.
    pub mean_latency: f64,
    /// 99th-percentile job latency, by linear interpolation
    pub p99_latency: f64,
    /// Population standard deviation of tasks per job
    pub std_task_count: f64,
    /// Sum of task delays (actual start minus expected start)
    pub total_delay: f64,
    /// Mean task delay
    pub mean_delay: f64,
    /// Population standard deviation of task delays
    pub std_delay: f64,
    /// Mean task duration (end minus start)
    pub mean_duration: f64,
    /// Population standard deviation of task durations
    pub std_duration: f64,
    /// Mean gap between consecutive task starts, in start order
    pub mean_arrival: f64,
    /// Population standard deviation of the start gaps
    pub std_arrival: f64,
}
