use crate::{Config, FetchError, WeatherReading, provider::wttr::WttrProvider};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

pub mod wttr;

/// Source of current conditions for a free-text location.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, location: &str) -> Result<WeatherReading, FetchError>;
}

/// Build the HTTP client used by providers, applying the configured timeout.
pub fn http_client(config: &Config) -> Result<Client, FetchError> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, FetchError> {
    let http = http_client(config)?;
    let provider = WttrProvider::new(http, &config.base_url)?;
    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_default_config() {
        let cfg = Config::default();
        assert!(provider_from_config(&cfg).is_ok());
    }

    #[test]
    fn provider_from_config_rejects_bad_base_url() {
        let cfg = Config { base_url: "not a url".into(), ..Config::default() };
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
        assert!(err.to_string().contains("not a url"));
    }
}
