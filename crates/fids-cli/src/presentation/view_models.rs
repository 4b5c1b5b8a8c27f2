//! Screen view models.
//!
//! Plain data computed from the runtime once per frame. Views only map these
//! onto widgets.

use fids_engine::{FlightTable, WeatherCondition};

#[derive(Debug, Clone, PartialEq)]
pub struct BoardScreenViewModel {
    pub header: HeaderViewModel,
    pub body: BoardBodyViewModel,
    pub footer: FooterViewModel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderViewModel {
    pub title: String,
    pub clock: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardBodyViewModel {
    /// No flight response yet
    Loading,
    Table(TableViewModel),
    Weather(Option<WeatherViewModel>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableViewModel {
    pub table: FlightTable,
    /// First visible row
    pub scroll_offset: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherViewModel {
    pub condition: WeatherCondition,
    pub glyph: &'static str,
    pub label: &'static str,
    pub temperature: String,
    pub wind: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterViewModel {
    pub flights_age: Option<String>,
    pub weather_age: Option<String>,
    /// Short live weather line, e.g. `68°F CLEAR`
    pub weather_brief: Option<String>,
}
