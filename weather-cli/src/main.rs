//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Prompting for a location
//! - Printing the report (or the reason there is none)

use clap::Parser;

mod cli;
mod logging;
mod lookup;
mod prompt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
