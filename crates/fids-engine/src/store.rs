//! Last-known-good board data.
//!
//! Written only when a fetch completes, read at view entry and by the
//! renderer. A failed fetch never reaches the store, so stale data stays up.

use chrono::{DateTime, Utc};
use fids_types::{FlightLists, FlightResponse, TaggedFlight, WeatherPayload};

use crate::table::TableKind;
use crate::weather::WeatherReport;

#[derive(Debug, Clone, Default)]
pub struct DataStore {
    lists: FlightLists,
    status_override: Option<String>,
    weather: Option<WeatherReport>,
    flights_updated_at: Option<DateTime<Utc>>,
    weather_updated_at: Option<DateTime<Utc>>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists replace the previous lists wholesale and clear any override.
    /// An override keeps the lists but hides them until the next list response.
    pub fn apply_flights(&mut self, response: FlightResponse, at: DateTime<Utc>) {
        match response {
            FlightResponse::Lists(lists) => {
                self.lists = lists;
                self.status_override = None;
            }
            FlightResponse::Override(text) => {
                self.status_override = Some(text);
            }
        }
        self.flights_updated_at = Some(at);
    }

    /// Returns false (and keeps the previous report) when the payload lacks
    /// temperature or wind.
    pub fn apply_weather(&mut self, payload: &WeatherPayload, at: DateTime<Utc>) -> bool {
        match WeatherReport::from_payload(payload) {
            Some(report) => {
                self.weather = Some(report);
                self.weather_updated_at = Some(at);
                true
            }
            None => false,
        }
    }

    pub fn status_override(&self) -> Option<&str> {
        self.status_override.as_deref()
    }

    /// Lists currently shown on the board; `None` while an override is active
    pub fn visible_lists(&self) -> Option<&FlightLists> {
        match self.status_override {
            Some(_) => None,
            None => Some(&self.lists),
        }
    }

    pub fn has_departures(&self) -> bool {
        self.visible_lists().is_some_and(FlightLists::has_departures)
    }

    pub fn has_scheduled(&self) -> bool {
        self.visible_lists().is_some_and(FlightLists::has_scheduled)
    }

    pub fn flights_for(&self, kind: TableKind) -> Vec<TaggedFlight> {
        let Some(lists) = self.visible_lists() else {
            return Vec::new();
        };
        match kind {
            TableKind::Departures => lists.departures_tagged(),
            TableKind::Scheduled => lists.scheduled_tagged(),
        }
    }

    pub fn weather(&self) -> Option<&WeatherReport> {
        self.weather.as_ref()
    }

    pub fn flights_updated_at(&self) -> Option<DateTime<Utc>> {
        self.flights_updated_at
    }

    pub fn weather_updated_at(&self) -> Option<DateTime<Utc>> {
        self.weather_updated_at
    }
}
