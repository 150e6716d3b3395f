use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use crypto_core::{Config, provider_from_config};

use crate::{console::Console, logging, prompt::InquirePrompt};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "crypto", version, about = "Cryptocurrency prices, trends and search")]
pub struct Cli {
    /// Read configuration from this file instead of the platform config dir.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log requests and failures to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        logging::init(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        tracing::debug!(?config, "configuration loaded");

        let provider =
            provider_from_config(&config).context("Failed to set up the market data service")?;

        let mut console = Console::new(
            provider.as_ref(),
            InquirePrompt,
            io::stdout(),
            config.default_currency,
        );
        console.run().await
    }
}
