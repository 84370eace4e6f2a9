//! Aggregation of job records into per-file summary statistics.

use gridsim_result_model::JobRecord;
use itertools::Itertools;

use crate::analyze::{mean, percentile, population_std};
use crate::model::ResultSummary;

/// A task observation in the shape the statistics need.
#[derive(Debug, Clone, Copy)]
struct TaskSample {
    /// Actual start time
    start: f64,
    /// Expected start time, the owning job's submission
    expected: f64,
    /// End time
    end: f64,
}

/// Compute the summary statistics for one result file.
///
/// Pure function of the records; the identifier is carried through to the
/// output unchanged. Statistics that are undefined for the input, such as
/// inter-arrival moments with fewer than two tasks, come out as NaN.
pub fn summarize(identifier: &str, records: &[JobRecord]) -> ResultSummary {
    let mut samples = Vec::new();
    let mut task_counts = Vec::with_capacity(records.len());
    let mut latencies = Vec::with_capacity(records.len());

    for record in records {
        task_counts.push(record.tasks.len() as f64);

        // A job's latency tracks the latest end seen among its tasks, falling
        // back to the submission time when no task outlasts it.
        let mut last = record.submission;
        for task in &record.tasks {
            samples.push(TaskSample {
                start: task.start,
                expected: record.submission,
                end: task.end,
            });
            if task.end > last {
                last = task.end;
            }
        }
        latencies.push(last - record.submission);
    }

    // Sorted once by start time; this order is shared by the makespan and the
    // inter-arrival gaps, so arrivals reflect temporal order, not file order.
    samples.sort_by(|a, b| {
        a.start
            .total_cmp(&b.start)
            .then(a.expected.total_cmp(&b.expected))
            .then(a.end.total_cmp(&b.end))
    });

    let makespan = match samples.first() {
        Some(first) => {
            let latest_end = samples.iter().map(|s| s.end).fold(f64::NEG_INFINITY, f64::max);
            latest_end - first.start
        }
        None => f64::NAN,
    };

    let delays = samples
        .iter()
        .map(|s| s.start - s.expected)
        .collect::<Vec<_>>();
    let durations = samples.iter().map(|s| s.end - s.start).collect::<Vec<_>>();
    let arrivals = samples
        .iter()
        .map(|s| s.start)
        .tuple_windows()
        .map(|(previous, next)| next - previous)
        .collect::<Vec<_>>();

    ResultSummary {
        identifier: identifier.to_string(),
        makespan,
        num_tasks: records.iter().map(|r| r.tasks.len() as u64).sum(),
        mean_task_count: mean(&task_counts),
        mean_latency: mean(&latencies),
        p99_latency: percentile(&latencies, 99.0),
        std_task_count: population_std(&task_counts),
        total_delay: delays.iter().sum(),
        mean_delay: mean(&delays),
        std_delay: population_std(&delays),
        mean_duration: mean(&durations),
        std_duration: population_std(&durations),
        mean_arrival: mean(&arrivals),
        std_arrival: population_std(&arrivals),
    }
}
