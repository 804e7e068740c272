use anyhow::Context;
use clap::Parser;
use reversi_cli::{Session, SessionConfig};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = SessionConfig::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();

    Session::new(config, stdin.lock(), stdout.lock())
        .run()
        .context("terminal session failed")?;
    Ok(())
}
