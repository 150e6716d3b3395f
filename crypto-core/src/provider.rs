use crate::{
    Config, CryptoQuote, FetchError, SearchResult, TrendingCoin,
    provider::coingecko::CoinGeckoProvider,
};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

pub mod coingecko;

/// Market-data operations behind the console menu.
#[async_trait]
pub trait MarketDataProvider: Send + Sync + Debug {
    /// `Ok(None)` when the service does not know `id`.
    async fn price(&self, id: &str, currency: &str) -> Result<Option<CryptoQuote>, FetchError>;

    /// Provider-curated trending list, in the provider's order.
    async fn trending(&self) -> Result<Vec<TrendingCoin>, FetchError>;

    /// Every coin matching `term`; the caller decides how many to show.
    async fn search(&self, term: &str) -> Result<Vec<SearchResult>, FetchError>;
}

/// Build the HTTP client used by providers, applying the configured timeout.
pub fn http_client(config: &Config) -> Result<Client, FetchError> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

pub fn provider_from_config(config: &Config) -> Result<Box<dyn MarketDataProvider>, FetchError> {
    let http = http_client(config)?;
    Ok(Box::new(CoinGeckoProvider::new(http, &config.base_url)?))
}
