use crate::{Error, Result};
use chrono::NaiveTime;
use fids_engine::BoardSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DAILY_REFRESH_FORMAT: &str = "%H:%M";

/// Resolve the directory holding `config.toml`:
/// 1. XDG config directory
/// 2. ~/.config (fallback for systems without XDG)
pub fn resolve_config_dir() -> Result<PathBuf> {
    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("fids"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".config").join("fids"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Server hosting `/api/flights` and `/api/weather`
    pub base_url: String,

    /// Local wall-clock time of the forced daily flight refresh, `HH:MM`
    pub daily_refresh: String,

    pub request_timeout_secs: u64,

    pub polling: PollingConfig,
    pub timing: TimingConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub flights_secs: u64,
    pub weather_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub empty_skip_ms: u64,
    pub weather_dwell_secs: u64,
    pub override_fallback_secs: u64,
    pub scroll_pause_secs: u64,
    pub scroll_tick_ms: u64,
    pub scroll_step: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub scroll_units_per_row: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<usize>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            daily_refresh: "06:00".to_string(),
            request_timeout_secs: 20,
            polling: PollingConfig::default(),
            timing: TimingConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            flights_secs: 30 * 60,
            weather_secs: 10 * 60,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            empty_skip_ms: 1000,
            weather_dwell_secs: 30,
            override_fallback_secs: 30,
            scroll_pause_secs: 8,
            scroll_tick_ms: 50,
            scroll_step: 1,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scroll_units_per_row: 8,
            max_rows: None,
        }
    }
}

/// Poll cadence and the daily refresh time, validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub flights_every: Duration,
    pub weather_every: Duration,
    pub daily_refresh: NaiveTime,
}

impl BoardConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    /// Missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: BoardConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_config_dir()?.join("config.toml"))
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn daily_refresh_time(&self) -> Result<NaiveTime> {
        NaiveTime::parse_from_str(self.daily_refresh.trim(), DAILY_REFRESH_FORMAT).map_err(|e| {
            Error::Config(format!(
                "daily_refresh must be HH:MM, got '{}': {}",
                self.daily_refresh, e
            ))
        })
    }

    /// Reject values that would stall the board or spin it
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("base_url must not be empty".to_string()));
        }
        if self.polling.flights_secs == 0 || self.polling.weather_secs == 0 {
            return Err(Error::Config(
                "polling intervals must be at least one second".to_string(),
            ));
        }
        let timing = &self.timing;
        for (name, value) in [
            ("empty_skip_ms", timing.empty_skip_ms),
            ("weather_dwell_secs", timing.weather_dwell_secs),
            ("override_fallback_secs", timing.override_fallback_secs),
            ("scroll_pause_secs", timing.scroll_pause_secs),
            ("scroll_tick_ms", timing.scroll_tick_ms),
        ] {
            if value == 0 {
                return Err(Error::Config(format!("timing.{} must be positive", name)));
            }
        }
        if self.display.scroll_units_per_row == 0 {
            return Err(Error::Config(
                "display.scroll_units_per_row must be positive".to_string(),
            ));
        }
        self.daily_refresh_time()?;
        Ok(())
    }

    pub fn poll_settings(&self) -> Result<PollSettings> {
        self.validate()?;
        Ok(PollSettings {
            flights_every: Duration::from_secs(self.polling.flights_secs),
            weather_every: Duration::from_secs(self.polling.weather_secs),
            daily_refresh: self.daily_refresh_time()?,
        })
    }

    pub fn board_settings(&self) -> BoardSettings {
        let timing = &self.timing;
        BoardSettings {
            empty_skip: Duration::from_millis(timing.empty_skip_ms),
            weather_dwell: Duration::from_secs(timing.weather_dwell_secs),
            override_fallback: Duration::from_secs(timing.override_fallback_secs),
            scroll_pause: Duration::from_secs(timing.scroll_pause_secs),
            scroll_tick: Duration::from_millis(timing.scroll_tick_ms),
            scroll_step: timing.scroll_step.max(1),
            units_per_row: self.display.scroll_units_per_row.max(1),
            max_rows: self.display.max_rows,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
