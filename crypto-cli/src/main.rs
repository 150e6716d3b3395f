//! Binary crate for the `crypto` console.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Reading menu choices and follow-up answers
//! - Running the menu loop against a market-data provider

use clap::Parser;

mod cli;
mod console;
mod logging;
mod prompt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
