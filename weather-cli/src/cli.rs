use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use weather_core::{Config, provider_from_config, report};

use crate::{logging, lookup, prompt};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for any city or location")]
pub struct Cli {
    /// City, postal code or "city,country". Prompted for when omitted.
    pub location: Option<String>,

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

        println!("{}", report::render_welcome());

        let location = match self.location {
            Some(location) => location,
            // No answer at all is validated like an empty one.
            None => prompt::ask("Enter a city or location:")?.unwrap_or_default(),
        };

        let provider =
            provider_from_config(&config).context("Failed to set up the weather service")?;

        let mut stdout = io::stdout().lock();
        let outcome = lookup::run(provider.as_ref(), &location, &mut stdout).await?;
        tracing::debug!(?outcome, "lookup finished");

        Ok(())
    }
}
