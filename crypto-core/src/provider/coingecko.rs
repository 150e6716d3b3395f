use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{CryptoQuote, FetchError, PriceValue, SearchResult, TrendingCoin};

use super::MarketDataProvider;

/// CoinGecko public API (v3), no authentication.
#[derive(Debug, Clone)]
pub struct CoinGeckoProvider {
    http: Client,
    base_url: Url,
}

impl CoinGeckoProvider {
    pub fn new(http: Client, base_url: &str) -> Result<Self, FetchError> {
        let base_url =
            Url::parse(base_url).map_err(|_| FetchError::InvalidUrl(base_url.to_string()))?;

        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = self.endpoint(segments)?;
        debug!(%url, ?query, "requesting market data");

        let res = self.http.get(url).query(query).send().await?;

        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().await.unwrap_or_default();
            warn!(%status, body = %truncate_body(&body), "market data request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = res.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct TrendingItem {
    item: TrendingCoin,
}

#[derive(Debug, Deserialize)]
struct TrendingResponse {
    coins: Vec<TrendingItem>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    coins: Vec<SearchResult>,
}

type PriceResponse = HashMap<String, Map<String, Value>>;

fn quote_from_fields(id: &str, currency: &str, fields: &Map<String, Value>) -> CryptoQuote {
    let price = match fields.get(currency) {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(price) => PriceValue::Number(price),
            None => PriceValue::Raw(n.to_string()),
        },
        Some(Value::String(s)) => PriceValue::Raw(s.clone()),
        Some(other) => PriceValue::Raw(other.to_string()),
        None => PriceValue::Raw("N/A".to_string()),
    };

    let number = |key: String| fields.get(&key).and_then(Value::as_f64);

    CryptoQuote {
        id: id.to_string(),
        currency: currency.to_string(),
        price,
        change_24h: number(format!("{currency}_24h_change")),
        market_cap: number(format!("{currency}_market_cap")),
    }
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    async fn price(&self, id: &str, currency: &str) -> Result<Option<CryptoQuote>, FetchError> {
        let data: PriceResponse = self
            .get_json(
                &["simple", "price"],
                &[
                    ("ids", id),
                    ("vs_currencies", currency),
                    ("include_24hr_change", "true"),
                    ("include_market_cap", "true"),
                ],
            )
            .await?;

        Ok(data.get(id).map(|fields| quote_from_fields(id, currency, fields)))
    }

    async fn trending(&self) -> Result<Vec<TrendingCoin>, FetchError> {
        let data: TrendingResponse = self.get_json(&["search", "trending"], &[]).await?;
        Ok(data.coins.into_iter().map(|c| c.item).collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<SearchResult>, FetchError> {
        let data: SearchResponse = self.get_json(&["search"], &[("query", term)]).await?;
        Ok(data.coins)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
