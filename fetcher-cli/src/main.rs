//! Binary crate for the `weather-fetcher` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Logging setup and console output

use clap::Parser;

mod cli;
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    logging::init(cmd.verbose);

    // Failures are reported on the console; the exit status stays 0.
    if let Err(err) = cmd.run().await {
        tracing::debug!(error = ?err, "command failed");
        println!("Error: {err:#}");
    }

    Ok(())
}
