//! Human-readable output for a single lookup.

use crate::{FetchError, indicator::indicator_for, model::WeatherReading};

const RULE_WIDTH: usize = 50;

pub fn separator() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Title-case a location for display: a cased letter is upper-cased when it does not
/// follow another cased letter, every other cased letter is lower-cased. Uncased
/// characters (digits, punctuation, CJK) pass through and start a new word.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_cased = false;

    for ch in input.chars() {
        let is_cased = ch.is_lowercase() || ch.is_uppercase();
        if is_cased && prev_is_cased {
            out.extend(ch.to_lowercase());
        } else if is_cased {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_cased = is_cased;
    }

    out
}

pub fn render_welcome() -> String {
    let rule = separator();
    format!("{rule}\n     Welcome to the Weather Information App!\n{rule}")
}

/// The fixed-format block printed after a successful lookup.
pub fn render_report(location: &str, reading: &WeatherReading) -> String {
    let rule = separator();
    let indicator = indicator_for(&reading.description);

    format!(
        "\n{rule}\n\
         🌍 Weather for: {location}\n\
         {rule}\n\
         \n\
         {indicator}  Weather Conditions: {description}\n\
         🌡️  Temperature: {temp_c}°C / {temp_f}°F\n\
         💧 Humidity: {humidity}%\n\
         💨 Wind Speed: {wind} km/h\n\
         👁️  Visibility: {visibility} km\n\
         {rule}\n",
        location = title_case(location),
        description = reading.description,
        temp_c = reading.temp_c,
        temp_f = reading.temp_f,
        humidity = reading.humidity_pct,
        wind = reading.wind_speed_kmph,
        visibility = reading.visibility_km,
    )
}

/// User-facing line for a failed lookup.
pub fn render_failure(err: &FetchError) -> String {
    match err {
        FetchError::Status(code) => {
            format!("Error: Unable to fetch weather data (Status code: {code})")
        }
        FetchError::Transport(e) => format!("Error: Connection problem - {e}"),
        FetchError::Malformed(_) | FetchError::InvalidUrl(_) => format!("Error: {err}"),
    }
}
