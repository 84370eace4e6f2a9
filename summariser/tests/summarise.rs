use gridsim_summariser::model::ResultSummary;
use gridsim_summariser::report::{write_json_report, REPORT_HEADER};
use gridsim_summariser::summarize_result_file;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn write_result_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write result file");
    path
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{what}: expected {expected}, got {actual}"
    );
}

#[test]
fn minimal_file_matches_hand_computed_line() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_result_file(
        &dir,
        "minimal.log",
        "id submission tasks\n\
         j0 8 [('f1', 'DC0', 8, 10, 15)]\n",
    );

    let summary = summarize_result_file(&path).expect("Failed to summarise");

    // One task starting at 10, expected at 8, ending at 15: makespan 5,
    // delay 2, duration 5, latency 7, no inter-arrival gaps.
    assert_eq!(
        summary.to_line(),
        format!("{} 5 1 1 7 7 0 2 2 0 5 0 NaN NaN", path.display())
    );
}

#[test]
fn statistics_match_hand_computed_values() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_result_file(
        &dir,
        "results.log",
        "id submission tasks\n\
         j0 0 [('f1', 'DC0', 0, 2, 5), ('f1', 'DC1', 0, 4, 6)]\n\
         j1 3 [('f2', 'DC0', 3, 5, 9)]\n",
    );

    let summary = summarize_result_file(&path).expect("Failed to summarise");

    // Task samples sorted by start: (2, 0, 5), (4, 0, 6), (5, 3, 9).
    assert_eq!(summary.num_tasks, 3);
    assert_close(summary.makespan, 7.0, "makespan");
    assert_close(summary.mean_task_count, 1.5, "mean task count");
    assert_close(summary.std_task_count, 0.5, "std task count");
    assert_close(summary.total_delay, 8.0, "total delay");
    assert_close(summary.mean_delay, 8.0 / 3.0, "mean delay");
    assert_close(summary.std_delay, (8.0_f64 / 9.0).sqrt(), "std delay");
    assert_close(summary.mean_duration, 3.0, "mean duration");
    assert_close(summary.std_duration, (2.0_f64 / 3.0).sqrt(), "std duration");
    assert_close(summary.mean_arrival, 1.5, "mean arrival");
    assert_close(summary.std_arrival, 0.5, "std arrival");
    // Both jobs finish 6 after submission.
    assert_close(summary.mean_latency, 6.0, "mean latency");
    assert_close(summary.p99_latency, 6.0, "p99 latency");
}

#[test]
fn line_permutation_leaves_statistics_unchanged() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let forward = write_result_file(
        &dir,
        "forward.log",
        "id submission tasks\n\
         j0 0 [('f1', 'DC0', 0, 2, 5), ('f1', 'DC1', 0, 4, 6)]\n\
         j1 3 [('f2', 'DC0', 3, 5, 9)]\n",
    );
    let reversed = write_result_file(
        &dir,
        "reversed.log",
        "id submission tasks\n\
         j1 3 [('f2', 'DC0', 3, 5, 9)]\n\
         j0 0 [('f1', 'DC0', 0, 2, 5), ('f1', 'DC1', 0, 4, 6)]\n",
    );

    let mut a = summarize_result_file(&forward).expect("Failed to summarise");
    let mut b = summarize_result_file(&reversed).expect("Failed to summarise");
    a.identifier = String::new();
    b.identifier = String::new();

    assert_eq!(a, b);
}

#[test]
fn header_only_file_summarises_to_nan_statistics() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_result_file(&dir, "empty.log", "id submission tasks\n");

    let summary = summarize_result_file(&path).expect("Failed to summarise");

    assert_eq!(summary.num_tasks, 0);
    assert_eq!(summary.total_delay, 0.0);
    assert!(summary.makespan.is_nan());
    assert!(summary.mean_latency.is_nan());
    assert!(summary.p99_latency.is_nan());
}

#[test]
fn malformed_line_fails_with_file_context() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_result_file(
        &dir,
        "broken.log",
        "id submission tasks\n\
         j0 0 [('f1', 'DC0', 0, 2)]\n",
    );

    let err = summarize_result_file(&path).expect_err("Expected a failure");
    assert!(format!("{err:#}").contains("broken.log"));
}

#[test]
fn missing_file_fails() {
    assert!(summarize_result_file("does/not/exist.log").is_err());
}

#[test]
fn json_report_round_trips() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_result_file(
        &dir,
        "results.log",
        "id submission tasks\n\
         j0 0 [('f1', 'DC0', 0, 2, 5), ('f1', 'DC1', 0, 4, 6)]\n\
         j1 3 [('f2', 'DC0', 3, 5, 9)]\n",
    );
    let summary = summarize_result_file(&path).expect("Failed to summarise");

    let report_path = dir.path().join("report.json");
    write_json_report(&report_path, std::slice::from_ref(&summary))
        .expect("Failed to write report");

    let restored: Vec<ResultSummary> = serde_json::from_reader(
        std::fs::File::open(&report_path).expect("Failed to open report"),
    )
    .expect("Failed to read report back");

    assert_eq!(restored, vec![summary]);
}

#[test]
fn header_names_all_columns() {
    assert_eq!(REPORT_HEADER.split(' ').count(), 14);
}
