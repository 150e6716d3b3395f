use std::io::{self, Write};

use tracing::warn;
use weather_core::{WeatherProvider, report};

/// How a single lookup ended. Every variant is a normal program exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Shown,
    InvalidInput,
    Failed,
}

/// Validate the location, fetch once, and print the report or the failure.
pub async fn run<W: Write>(
    provider: &dyn WeatherProvider,
    raw_location: &str,
    out: &mut W,
) -> io::Result<Outcome> {
    let location = raw_location.trim();
    if location.is_empty() {
        writeln!(out, "Error: Please enter a valid location.")?;
        return Ok(Outcome::InvalidInput);
    }

    writeln!(out, "\nFetching weather data for '{location}'...")?;

    match provider.current(location).await {
        Ok(reading) => {
            writeln!(out, "{}", report::render_report(location, &reading))?;
            Ok(Outcome::Shown)
        }
        Err(err) => {
            warn!(error = %err, location, "weather lookup failed");
            writeln!(out, "{}", report::render_failure(&err))?;
            writeln!(out, "Unable to retrieve weather information. Please try again.")?;
            Ok(Outcome::Failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use weather_core::{FetchError, WeatherReading};

    #[derive(Debug)]
    enum Canned {
        Reading(WeatherReading),
        Status(u16),
        Malformed(&'static str),
    }

    #[derive(Debug)]
    struct FakeProvider {
        canned: Canned,
        seen: Mutex<Vec<String>>,
    }

    impl FakeProvider {
        fn new(canned: Canned) -> Self {
            Self { canned, seen: Mutex::new(Vec::new()) }
        }

        fn calls(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        async fn current(&self, location: &str) -> Result<WeatherReading, FetchError> {
            self.seen.lock().unwrap().push(location.to_string());
            match &self.canned {
                Canned::Reading(r) => Ok(r.clone()),
                Canned::Status(code) => Err(FetchError::Status(*code)),
                Canned::Malformed(detail) => Err(FetchError::Malformed(detail.to_string())),
            }
        }
    }

    fn drizzle() -> WeatherReading {
        WeatherReading {
            temp_c: "9".into(),
            temp_f: "48".into(),
            description: "Light drizzle".into(),
            humidity_pct: "93".into(),
            wind_speed_kmph: "20".into(),
            visibility_km: "5".into(),
        }
    }

    async fn run_with(provider: &FakeProvider, input: &str) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run(provider, input, &mut out).await.unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn blank_location_never_reaches_the_provider() {
        let provider = FakeProvider::new(Canned::Reading(drizzle()));

        for input in ["", "   ", "\t\n"] {
            let (outcome, out) = run_with(&provider, input).await;
            assert_eq!(outcome, Outcome::InvalidInput);
            assert_eq!(out, "Error: Please enter a valid location.\n");
        }
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn trimmed_location_is_fetched_and_reported() {
        let provider = FakeProvider::new(Canned::Reading(drizzle()));

        let (outcome, out) = run_with(&provider, "  san francisco ").await;

        assert_eq!(outcome, Outcome::Shown);
        assert_eq!(provider.calls(), vec!["san francisco".to_string()]);
        assert!(out.contains("Fetching weather data for 'san francisco'..."));
        assert!(out.contains("🌍 Weather for: San Francisco"));
        assert!(out.contains("🌧️  Weather Conditions: Light drizzle"));
    }

    #[tokio::test]
    async fn http_status_is_reported_with_its_code() {
        for code in [404, 500] {
            let provider = FakeProvider::new(Canned::Status(code));
            let (outcome, out) = run_with(&provider, "nowhere").await;

            assert_eq!(outcome, Outcome::Failed);
            assert!(out.contains(&format!("(Status code: {code})")));
            assert!(out.contains("Unable to retrieve weather information. Please try again."));
        }
    }

    #[tokio::test]
    async fn malformed_response_is_reported_not_panicked_on() {
        let provider = FakeProvider::new(Canned::Malformed("missing field `temp_C`"));
        let (outcome, out) = run_with(&provider, "paris").await;

        assert_eq!(outcome, Outcome::Failed);
        assert!(out.contains("Error: Malformed response: missing field `temp_C`"));
    }

    #[tokio::test]
    async fn piped_blank_line_gets_the_validation_message() {
        let provider = FakeProvider::new(Canned::Reading(drizzle()));
        let mut input = std::io::Cursor::new("   \n");
        let location = crate::prompt::read_answer(&mut input).unwrap().unwrap_or_default();

        let (outcome, out) = run_with(&provider, &location).await;

        assert_eq!(outcome, Outcome::InvalidInput);
        assert_eq!(out, "Error: Please enter a valid location.\n");
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn piped_location_is_looked_up() {
        let provider = FakeProvider::new(Canned::Reading(drizzle()));
        let mut input = std::io::Cursor::new("reykjavik\n");
        let location = crate::prompt::read_answer(&mut input).unwrap().unwrap_or_default();

        let (outcome, _) = run_with(&provider, &location).await;

        assert_eq!(outcome, Outcome::Shown);
        assert_eq!(provider.calls(), vec!["reykjavik".to_string()]);
    }
}
