//! Command-line flags.

use clap::{ArgAction, Parser};
use tracing_subscriber::filter::LevelFilter;

/// Interactive in-memory todo list.
#[derive(Debug, Parser)]
#[command(name = "todo", version)]
pub struct CliArgs {
    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// No diagnostics at all.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CliArgs {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::OFF;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
