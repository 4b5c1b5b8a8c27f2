use serde::{Deserialize, Serialize};

use crate::Result;

/// Raw `/api/weather` body.
///
/// The server answers `{ "error": ... }` when the airport is closed or the
/// upstream observation is incomplete, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherPayload {
    /// Degrees Celsius
    #[serde(default)]
    pub temp: Option<f64>,

    /// Miles per hour
    #[serde(default)]
    pub wind_speed: Option<f64>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

impl WeatherPayload {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// True when the payload carries enough to replace the displayed weather
    pub fn is_complete(&self) -> bool {
        self.temp.is_some_and(f64::is_finite) && self.wind_speed.is_some_and(f64::is_finite)
    }
}
