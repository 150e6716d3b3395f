use std::io::Write;

use crypto_core::{
    MarketDataProvider, MenuChoice,
    render::{self, Operation},
};
use tracing::{debug, warn};

use crate::prompt::Prompt;

/// The menu loop. Runs until the user picks Exit or backs out of the menu prompt.
pub struct Console<'a, P, W> {
    provider: &'a dyn MarketDataProvider,
    prompt: P,
    out: W,
    default_currency: String,
}

impl<'a, P: Prompt, W: Write> Console<'a, P, W> {
    pub fn new(
        provider: &'a dyn MarketDataProvider,
        prompt: P,
        out: W,
        default_currency: String,
    ) -> Self {
        Self { provider, prompt, out, default_currency }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "{}", render::welcome())?;

        loop {
            writeln!(self.out, "{}", render::menu())?;

            let choice = match self.prompt.ask("Enter your choice (1-4):")? {
                Some(raw) => MenuChoice::parse(&raw),
                None => MenuChoice::Exit,
            };
            debug!(?choice, "menu selection");

            match choice {
                MenuChoice::Price => self.price().await?,
                MenuChoice::Trending => self.trending().await?,
                MenuChoice::Search => self.search().await?,
                MenuChoice::Exit => {
                    writeln!(self.out, "{}", render::farewell())?;
                    break;
                }
                MenuChoice::Invalid(_) => writeln!(self.out, "{}", render::invalid_choice())?,
            }
        }

        self.out.flush()?;
        Ok(())
    }

    async fn price(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "\n📊 Popular cryptocurrencies: {}", render::POPULAR_IDS)?;

        let Some(id) = self.prompt.ask("Enter cryptocurrency ID:")? else {
            return Ok(());
        };
        let id = id.trim().to_lowercase();
        if id.is_empty() {
            writeln!(self.out, "❌ Please enter a valid cryptocurrency name.\n")?;
            return Ok(());
        }

        let question =
            format!("Enter currency (usd, eur, gbp) [default: {}]:", self.default_currency);
        let Some(currency) = self.prompt.ask(&question)? else {
            return Ok(());
        };
        let currency = match currency.trim().to_lowercase() {
            c if c.is_empty() => self.default_currency.clone(),
            c => c,
        };

        let block = match self.provider.price(&id, &currency).await {
            Ok(Some(quote)) => render::quote(&quote),
            Ok(None) => render::not_found(&id),
            Err(err) => {
                warn!(error = %err, %id, %currency, "price lookup failed");
                render::failure(Operation::Price, &err)
            }
        };
        writeln!(self.out, "{block}")?;
        Ok(())
    }

    async fn trending(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "\n🔥 Fetching trending cryptocurrencies...")?;

        let block = match self.provider.trending().await {
            Ok(coins) => render::trending(&coins),
            Err(err) => {
                warn!(error = %err, "trending lookup failed");
                render::failure(Operation::Trending, &err)
            }
        };
        writeln!(self.out, "{block}")?;
        Ok(())
    }

    async fn search(&mut self) -> anyhow::Result<()> {
        let Some(term) = self.prompt.ask("Enter cryptocurrency name or symbol to search:")? else {
            return Ok(());
        };
        let term = term.trim();
        if term.is_empty() {
            writeln!(self.out, "❌ Please enter a valid search term.\n")?;
            return Ok(());
        }

        let block = match self.provider.search(term).await {
            Ok(results) => render::search_results(term, &results),
            Err(err) => {
                warn!(error = %err, term, "search failed");
                render::failure(Operation::Search, &err)
            }
        };
        writeln!(self.out, "{block}")?;
        Ok(())
    }
}
