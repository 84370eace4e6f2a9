use serde::{Deserialize, Serialize};
use std::io::{BufRead, Read};
use std::path::Path;

mod parse;

pub use parse::ParseError;

/// One scheduled task execution decoded from a result line.
///
/// The simulator prints each task as a 5-field tuple
/// `('<file id>', '<location>', <submission>, <start>, <end>)`. The first two
/// fields identify the input file and the datacenter the task ran in; the
/// last three are timestamps. Only `start` and `end` feed the summary
/// statistics, but the full tuple is decoded and validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Identifier of the file the task read
    pub file_id: String,
    /// Datacenter the task was placed in
    pub location: String,
    /// Submission time of the owning job
    pub submission: f64,
    /// Time the task actually started
    pub start: f64,
    /// Time the task finished
    pub end: f64,
}

/// One job execution record, parsed from one result-file line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// The job id chosen by the simulator
    pub job_id: String,
    /// The time the job was submitted
    ///
    /// This doubles as the expected start time of the job's tasks.
    pub submission: f64,
    /// The tasks that were scheduled for this job, in file order
    pub tasks: Vec<ScheduledTask>,
}

/// Parse one result-file data line into a [JobRecord].
///
/// A line is `<job_id> <submission> <task list literal>` with the first two
/// fields whitespace-delimited and the remainder holding the bracketed tuple
/// list. Lines with fewer than three fields are rejected.
pub fn parse_job_record(line: &str) -> Result<JobRecord, ParseError> {
    let (job_id, rest) = split_field(line).ok_or(ParseError::MissingFields)?;
    let (submission, rest) = split_field(rest).ok_or(ParseError::MissingFields)?;
    if rest.trim().is_empty() {
        return Err(ParseError::MissingFields);
    }

    let submission = submission
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidTimestamp(submission.to_string()))?;
    let tasks = parse::parse_task_list(rest)?;

    Ok(JobRecord {
        job_id: job_id.to_string(),
        submission,
        tasks,
    })
}

/// Split one whitespace-delimited field off the front of `input`.
fn split_field(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        Some(at) => Some((&input[..at], &input[at..])),
        None => Some((input, "")),
    }
}

/// An error type for [read_job_records] and [load_job_records].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Parse { line: usize, source: ParseError },
}

/// Read job records from a reader.
///
/// The first line is a column header and is skipped without validation. Every
/// following line must parse as a [JobRecord]; the first malformed line stops
/// reading and is reported with its 1-based line number.
pub fn read_job_records<R: Read>(reader: R) -> Result<Vec<JobRecord>, LoadError> {
    let mut lines = std::io::BufReader::new(reader).lines();
    if let Some(header) = lines.next() {
        header?;
    }

    let mut records = Vec::new();
    for (offset, line) in lines.enumerate() {
        let line = line?;
        let record = parse_job_record(&line).map_err(|source| LoadError::Parse {
            line: offset + 2,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Read job records from a result file at the given path.
pub fn load_job_records<P: AsRef<Path>>(path: P) -> Result<Vec<JobRecord>, LoadError> {
    let file = std::fs::File::open(path)?;
    read_job_records(file)
}
