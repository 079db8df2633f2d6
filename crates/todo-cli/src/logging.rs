//! Diagnostics go to stderr so they never mix with the menu on stdout.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

pub fn init(level: LevelFilter) {
    let filter = EnvFilter::default().add_directive(level.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
