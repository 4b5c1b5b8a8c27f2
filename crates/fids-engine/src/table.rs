//! Flight table rendering.
//!
//! Rows are ordered by a status bucket first and flight time second, then
//! each field is turned into split-flap text. Nothing here aborts a table:
//! a bad field degrades to its own placeholder.

use std::cmp::Ordering;
use std::fmt::Display;

use chrono::TimeZone;
use fids_types::{FlightKind, TaggedFlight};

use crate::clock::format_time;
use crate::text::{FlipText, flip_text};

/// Status keywords in priority order. Anything unmatched lands in [`UNKNOWN_BUCKET`].
const STATUS_POLICY: &[(&[&str], u8)] = &[
    (&["planned", "future"], 1),
    (&["en-route", "en route"], 2),
    (&["eta", "estimated"], 3),
    (&["scheduled"], 4),
    (&["arrived", "departed", "landed"], 6),
];

const UNKNOWN_BUCKET: u8 = 5;

/// Which board a table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Departures,
    Scheduled,
}

impl TableKind {
    pub fn placeholder(&self) -> &'static str {
        match self {
            TableKind::Departures => "No departure data available.",
            TableKind::Scheduled => "No scheduled flight data available.",
        }
    }

    pub fn place_heading(&self) -> &'static str {
        match self {
            TableKind::Departures => "DESTINATION",
            TableKind::Scheduled => "FROM / TO",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightRow {
    pub kind: FlightKind,
    pub ident: FlipText,
    pub place: FlipText,
    pub aircraft: FlipText,
    pub status: FlipText,
    pub time: FlipText,
    /// Presentation hook, e.g. `status-en-route`
    pub status_class: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableRows {
    Flights(Vec<FlightRow>),
    /// Single row spanning every column
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightTable {
    pub kind: TableKind,
    pub rows: TableRows,
}

impl FlightTable {
    pub fn placeholder(kind: TableKind) -> Self {
        Self {
            kind,
            rows: TableRows::Placeholder(kind.placeholder().to_string()),
        }
    }

    /// Number of rendered rows, counting a placeholder as one
    pub fn row_count(&self) -> usize {
        match &self.rows {
            TableRows::Flights(rows) => rows.len(),
            TableRows::Placeholder(_) => 1,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.rows, TableRows::Placeholder(_))
    }
}

/// Priority bucket for a status string (lower sorts first)
pub fn status_bucket(status: &str) -> u8 {
    let lower = status.to_lowercase();
    STATUS_POLICY
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, bucket)| *bucket)
        .unwrap_or(UNKNOWN_BUCKET)
}

/// Order flights in place: bucket ascending, then time.
///
/// Flights whose status says "planned" run soonest-first and lead their
/// bucket; every other flight shows the most recently changed first. Flights
/// without a usable time trail their group. The sort is stable, so sorting
/// twice changes nothing.
pub fn sort_flights(flights: &mut [TaggedFlight]) {
    flights.sort_by(compare_flights);
}

fn is_planned(status: &str) -> bool {
    status.to_lowercase().contains("planned")
}

fn compare_flights(a: &TaggedFlight, b: &TaggedFlight) -> Ordering {
    let (status_a, status_b) = (a.record.status(), b.record.status());
    let planned_a = is_planned(status_a);
    let planned_b = is_planned(status_b);

    status_bucket(status_a)
        .cmp(&status_bucket(status_b))
        .then_with(|| planned_b.cmp(&planned_a))
        .then_with(|| match (a.record.parsed_time(), b.record.parsed_time()) {
            (Some(ta), Some(tb)) if planned_a => ta.cmp(&tb),
            (Some(ta), Some(tb)) => tb.cmp(&ta),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Status text as shown on the board
pub fn display_status(raw: &str) -> String {
    let status = raw.trim();
    if status.is_empty() {
        "Unknown".to_string()
    } else if status.eq_ignore_ascii_case("estimated arrival") {
        "ETA".to_string()
    } else {
        status.to_string()
    }
}

/// `status-` followed by the lower-cased status with whitespace runs collapsed to `-`
pub fn status_class(status: &str) -> String {
    let slug = status
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("status-{}", slug)
}

/// Sort and render a table. `max_rows` caps the rendered rows after sorting.
pub fn render_table<Tz>(
    kind: TableKind,
    mut flights: Vec<TaggedFlight>,
    tz: &Tz,
    max_rows: Option<usize>,
) -> FlightTable
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if flights.is_empty() {
        return FlightTable::placeholder(kind);
    }

    sort_flights(&mut flights);

    let limit = max_rows.unwrap_or(usize::MAX);
    let rows = flights
        .iter()
        .take(limit)
        .map(|flight| render_row(flight, tz))
        .collect();

    FlightTable {
        kind,
        rows: TableRows::Flights(rows),
    }
}

fn render_row<Tz>(flight: &TaggedFlight, tz: &Tz) -> FlightRow
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let record = &flight.record;
    let status = display_status(record.status());
    let time = record.parsed_time().map(|ts| format_time(ts, tz));

    FlightRow {
        kind: flight.kind,
        ident: flip_text(record.ident.as_deref()),
        place: flip_text(flight.place()),
        aircraft: flip_text(record.aircraft_type.as_deref()),
        status_class: status_class(&status),
        status: flip_text(Some(&status)),
        time: flip_text(time.as_deref()),
    }
}
