use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(about, long_about = None)]
pub struct CliArgs {
    /// Result files to summarise, processed in the order given.
    pub files: Vec<PathBuf>,

    /// Also write the summaries to this path as pretty-printed JSON.
    #[arg(long)]
    pub report: Option<PathBuf>,
}
