use serde::{Deserialize, Serialize};

/// Current conditions for one location, exactly as the service reported them.
///
/// Values are kept as the provider's strings; no unit conversion happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temp_c: String,
    pub temp_f: String,
    pub description: String,
    pub humidity_pct: String,
    pub wind_speed_kmph: String,
    pub visibility_km: String,
}
