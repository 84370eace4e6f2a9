#[macro_use]
extern crate log;

use clap::Parser as _;

use gridsim_summariser::report::{write_json_report, REPORT_HEADER};

mod cli;

const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    env_logger::try_init()?;

    let args = cli::CliArgs::try_parse()?;
    info!("{CRATE_NAME} {CRATE_VERSION}");

    // The header always comes first, even when there is nothing to summarise.
    println!("{REPORT_HEADER}");

    let mut summaries = Vec::with_capacity(args.files.len());
    for path in &args.files {
        debug!("Summarising result file: {}", path.display());
        let summary = gridsim_summariser::summarize_result_file(path)?;
        println!("{}", summary.to_line());
        summaries.push(summary);
    }

    if let Some(report) = &args.report {
        debug!("Writing JSON report to: {}", report.display());
        write_json_report(report, &summaries)?;
        info!("Wrote {} summaries to {}", summaries.len(), report.display());
    }

    Ok(())
}
