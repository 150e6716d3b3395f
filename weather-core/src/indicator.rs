use std::fmt;

/// Decorative marker for a condition category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Sun,
    PartlyCloudy,
    Cloudy,
    Rain,
    Snow,
    Storm,
    Fog,
    Wind,
    Fallback,
}

impl Indicator {
    pub fn emoji(&self) -> &'static str {
        match self {
            Indicator::Sun => "☀️",
            Indicator::PartlyCloudy => "⛅",
            Indicator::Cloudy => "☁️",
            Indicator::Rain => "🌧️",
            Indicator::Snow => "🌨️",
            Indicator::Storm => "⛈️",
            Indicator::Fog => "🌫️",
            Indicator::Wind => "💨",
            Indicator::Fallback => "🌤️",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.emoji())
    }
}

struct Rule {
    matches: fn(&str) -> bool,
    indicator: Indicator,
}

// Order is significant: the first matching rule wins, so the compound
// partly-cloudy check has to sit above the plain cloud one.
const RULES: &[Rule] = &[
    Rule {
        matches: |d: &str| d.contains("sunny") || d.contains("clear"),
        indicator: Indicator::Sun,
    },
    Rule {
        matches: |d: &str| d.contains("cloud") && d.contains("partly"),
        indicator: Indicator::PartlyCloudy,
    },
    Rule {
        matches: |d: &str| d.contains("cloud") || d.contains("overcast"),
        indicator: Indicator::Cloudy,
    },
    Rule {
        matches: |d: &str| d.contains("rain") || d.contains("drizzle"),
        indicator: Indicator::Rain,
    },
    Rule {
        matches: |d: &str| d.contains("snow"),
        indicator: Indicator::Snow,
    },
    Rule {
        matches: |d: &str| d.contains("storm") || d.contains("thunder"),
        indicator: Indicator::Storm,
    },
    Rule {
        matches: |d: &str| d.contains("fog") || d.contains("mist"),
        indicator: Indicator::Fog,
    },
    Rule {
        matches: |d: &str| d.contains("wind"),
        indicator: Indicator::Wind,
    },
];

/// Pick the indicator for a free-text condition description (case-insensitive).
pub fn indicator_for(description: &str) -> Indicator {
    let lower = description.to_lowercase();

    RULES
        .iter()
        .find(|rule| (rule.matches)(&lower))
        .map(|rule| rule.indicator)
        .unwrap_or(Indicator::Fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partly_cloudy_never_resolves_to_plain_cloud() {
        for desc in ["Partly cloudy", "PARTLY CLOUDY", "cloudy, partly", "Partly Cloudy with fog"] {
            assert_eq!(indicator_for(desc), Indicator::PartlyCloudy, "{desc}");
        }
    }

    #[test]
    fn plain_cloud_and_overcast() {
        assert_eq!(indicator_for("Cloudy"), Indicator::Cloudy);
        assert_eq!(indicator_for("Overcast"), Indicator::Cloudy);
    }

    #[test]
    fn sun_beats_everything_below_it() {
        assert_eq!(indicator_for("Sunny"), Indicator::Sun);
        assert_eq!(indicator_for("Clear"), Indicator::Sun);
        assert_eq!(indicator_for("Clearing, partly cloudy"), Indicator::Sun);
    }

    #[test]
    fn remaining_categories() {
        assert_eq!(indicator_for("Light drizzle"), Indicator::Rain);
        assert_eq!(indicator_for("Patchy rain possible"), Indicator::Rain);
        assert_eq!(indicator_for("Heavy snow"), Indicator::Snow);
        assert_eq!(indicator_for("Thundery outbreaks possible"), Indicator::Storm);
        assert_eq!(indicator_for("Storm"), Indicator::Storm);
        assert_eq!(indicator_for("Freezing fog"), Indicator::Fog);
        assert_eq!(indicator_for("Mist"), Indicator::Fog);
        assert_eq!(indicator_for("Windy"), Indicator::Wind);
    }

    #[test]
    fn rain_is_checked_before_snow() {
        assert_eq!(indicator_for("Light sleet showers, rain and snow"), Indicator::Rain);
    }

    #[test]
    fn unknown_descriptions_fall_back() {
        for desc in ["", "Haze", "Blowing dust", "Smoke"] {
            assert_eq!(indicator_for(desc), Indicator::Fallback, "{desc:?}");
        }
        assert_eq!(Indicator::Fallback.to_string(), "🌤️");
    }
}
