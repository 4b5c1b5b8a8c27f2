use fids_types::WeatherPayload;

/// Condition keywords, first match wins
const CONDITION_POLICY: &[(&[&str], WeatherCondition)] = &[
    (&["cloudy", "overcast"], WeatherCondition::Cloudy),
    (&["rain", "shower"], WeatherCondition::Rain),
    (&["storm"], WeatherCondition::Storm),
    (&["snow"], WeatherCondition::Snow),
    (&["fog", "mist"], WeatherCondition::Fog),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Rain,
    Storm,
    Snow,
    Fog,
}

impl WeatherCondition {
    /// Case-insensitive keyword match against an observation summary
    pub fn from_summary(summary: &str) -> Self {
        let lower = summary.to_lowercase();
        CONDITION_POLICY
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(_, condition)| *condition)
            .unwrap_or(WeatherCondition::Clear)
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "☀",
            WeatherCondition::Cloudy => "☁",
            WeatherCondition::Rain => "🌧",
            WeatherCondition::Storm => "⛈",
            WeatherCondition::Snow => "❄",
            WeatherCondition::Fog => "🌫",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "CLEAR",
            WeatherCondition::Cloudy => "CLOUDY",
            WeatherCondition::Rain => "RAIN",
            WeatherCondition::Storm => "STORM",
            WeatherCondition::Snow => "SNOW",
            WeatherCondition::Fog => "FOG",
        }
    }
}

/// Weather as displayed on the board
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temp_celsius: f64,
    pub temp_fahrenheit: i32,
    pub wind_mph: i32,
    pub summary: String,
    pub condition: WeatherCondition,
}

impl WeatherReport {
    /// Build a report from a payload; `None` when temperature or wind is missing.
    pub fn from_payload(payload: &WeatherPayload) -> Option<Self> {
        if !payload.is_complete() {
            return None;
        }
        let temp_celsius = payload.temp?;
        let wind = payload.wind_speed?;
        let summary = payload.summary.clone().unwrap_or_default();

        Some(Self {
            temp_celsius,
            temp_fahrenheit: celsius_to_fahrenheit(temp_celsius),
            wind_mph: round_half_up(wind),
            condition: WeatherCondition::from_summary(&summary),
            summary,
        })
    }
}

/// `round(c * 9/5 + 32)`, halves rounding up
pub fn celsius_to_fahrenheit(celsius: f64) -> i32 {
    round_half_up(celsius * 9.0 / 5.0 + 32.0)
}

fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fahrenheit_conversion() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32);
        assert_eq!(celsius_to_fahrenheit(20.0), 68);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40);
        assert_eq!(celsius_to_fahrenheit(21.7), 71);
    }

    #[test]
    fn test_report_from_payload() {
        let report = WeatherReport::from_payload(&WeatherPayload {
            temp: Some(0.0),
            wind_speed: Some(10.0),
            summary: Some("Light Snow".to_string()),
            error: None,
        })
        .unwrap();
        assert_eq!(report.temp_fahrenheit, 32);
        assert_eq!(report.wind_mph, 10);
        assert_eq!(report.condition, WeatherCondition::Snow);

        let report = WeatherReport::from_payload(&WeatherPayload {
            temp: Some(20.0),
            wind_speed: Some(5.0),
            summary: None,
            error: None,
        })
        .unwrap();
        assert_eq!(report.temp_fahrenheit, 68);
        assert_eq!(report.condition, WeatherCondition::Clear);
    }

    #[test]
    fn test_incomplete_payload_yields_nothing() {
        let payload = WeatherPayload {
            temp: Some(12.0),
            ..Default::default()
        };
        assert!(WeatherReport::from_payload(&payload).is_none());
    }

    #[test]
    fn test_condition_first_keyword_wins() {
        assert_eq!(WeatherCondition::from_summary("Mostly Cloudy"), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_summary("OVERCAST"), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_summary("Light Rain"), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_summary("Showers"), WeatherCondition::Rain);
        assert_eq!(
            WeatherCondition::from_summary("Thunderstorms and Rain"),
            WeatherCondition::Rain
        );
        assert_eq!(WeatherCondition::from_summary("Thunderstorm"), WeatherCondition::Storm);
        assert_eq!(WeatherCondition::from_summary("Cloudy with snow"), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_summary("Mist"), WeatherCondition::Fog);
        assert_eq!(WeatherCondition::from_summary("Fair"), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_summary(""), WeatherCondition::Clear);
    }
}
