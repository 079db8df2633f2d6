//! `todo` - interactive in-memory todo list.

mod args;
mod logging;
mod terminal;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use todo_core::Session;

use crate::args::CliArgs;
use crate::terminal::LineConsole;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init(args.log_level());

    let mut session = Session::new(LineConsole::stdio());
    let end = session.run().await.context("terminal I/O failed")?;
    debug!(?end, "exiting");
    Ok(())
}
