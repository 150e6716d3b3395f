use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{FetchError, WeatherReading};

use super::WeatherProvider;

/// Current conditions from a wttr.in compatible service (`/<location>?format=j1`).
#[derive(Debug, Clone)]
pub struct WttrProvider {
    http: Client,
    base_url: Url,
}

impl WttrProvider {
    pub fn new(http: Client, base_url: &str) -> Result<Self, FetchError> {
        let base_url =
            Url::parse(base_url).map_err(|_| FetchError::InvalidUrl(base_url.to_string()))?;

        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self { http, base_url })
    }

    /// The location becomes a single, percent-encoded path segment.
    fn location_url(&self, location: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(location);
        url.query_pairs_mut().append_pair("format", "j1");

        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct WttrText {
    value: String,
}

#[derive(Debug, Deserialize)]
struct WttrCondition {
    #[serde(rename = "temp_C")]
    temp_c: String,
    #[serde(rename = "temp_F")]
    temp_f: String,
    #[serde(rename = "weatherDesc")]
    weather_desc: Vec<WttrText>,
    humidity: String,
    #[serde(rename = "windspeedKmph")]
    windspeed_kmph: String,
    visibility: String,
}

#[derive(Debug, Deserialize)]
struct WttrResponse {
    current_condition: Vec<WttrCondition>,
}

impl WttrResponse {
    fn into_reading(self) -> Result<WeatherReading, FetchError> {
        let current = self
            .current_condition
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::malformed("response contained no current conditions"))?;

        let description = current
            .weather_desc
            .into_iter()
            .next()
            .map(|d| d.value)
            .ok_or_else(|| FetchError::malformed("current conditions had no description"))?;

        Ok(WeatherReading {
            temp_c: current.temp_c,
            temp_f: current.temp_f,
            description,
            humidity_pct: current.humidity,
            wind_speed_kmph: current.windspeed_kmph,
            visibility_km: current.visibility,
        })
    }
}

#[async_trait]
impl WeatherProvider for WttrProvider {
    async fn current(&self, location: &str) -> Result<WeatherReading, FetchError> {
        let url = self.location_url(location)?;
        debug!(%url, "requesting current conditions");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().await.unwrap_or_default();
            warn!(%status, body = %truncate_body(&body), "weather request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = res.text().await?;
        let parsed: WttrResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::malformed(e.to_string()))?;

        parsed.into_reading()
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
