use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One flight as served by `/api/flights`.
///
/// Every field is optional on the wire. Missing or malformed values degrade
/// to per-field placeholders at render time instead of rejecting the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    #[serde(default)]
    pub ident: Option<String>,

    #[serde(default)]
    pub origin: Option<String>,

    #[serde(default)]
    pub destination: Option<String>,

    #[serde(default)]
    pub aircraft_type: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    /// ISO-8601 timestamp, kept raw so an unparseable value can still be shown as a placeholder
    #[serde(default)]
    pub time: Option<String>,
}

impl FlightRecord {
    pub fn ident(&self) -> &str {
        self.ident.as_deref().unwrap_or_default()
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or_default()
    }

    /// Parse `time` as an RFC 3339 instant.
    ///
    /// Offsets (including `Z`) are honoured; a timestamp without an offset is
    /// read as UTC, which is what the board API emits.
    pub fn parsed_time(&self) -> Option<DateTime<Utc>> {
        let raw = self.time.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }

        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// Direction of a flight relative to the board's airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightKind {
    Arrival,
    Departure,
}

/// A record tagged with its direction, as used by the combined scheduled view.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedFlight {
    pub kind: FlightKind,
    pub record: FlightRecord,
}

impl TaggedFlight {
    pub fn new(kind: FlightKind, record: FlightRecord) -> Self {
        Self { kind, record }
    }

    /// Origin for arrivals, destination for departures
    pub fn place(&self) -> Option<&str> {
        match self.kind {
            FlightKind::Arrival => self.record.origin.as_deref(),
            FlightKind::Departure => self.record.destination.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record_with_time(time: &str) -> FlightRecord {
        FlightRecord {
            time: Some(time.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_parsed_time_zulu() {
        let record = record_with_time("2025-03-14T15:30:00Z");
        assert_eq!(
            record.parsed_time(),
            Some(Utc.with_ymd_and_hms(2025, 3, 14, 15, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_parsed_time_with_offset() {
        let record = record_with_time("2025-03-14T10:30:00-05:00");
        assert_eq!(
            record.parsed_time(),
            Some(Utc.with_ymd_and_hms(2025, 3, 14, 15, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_parsed_time_without_offset_is_utc() {
        let record = record_with_time("2025-03-14T15:30:00");
        assert_eq!(
            record.parsed_time(),
            Some(Utc.with_ymd_and_hms(2025, 3, 14, 15, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_parsed_time_garbage() {
        assert_eq!(record_with_time("soon").parsed_time(), None);
        assert_eq!(record_with_time("  ").parsed_time(), None);
        assert_eq!(FlightRecord::default().parsed_time(), None);
    }

    #[test]
    fn test_place_follows_kind() {
        let record = FlightRecord {
            origin: Some("KDFW".to_string()),
            destination: Some("KORD".to_string()),
            ..Default::default()
        };

        let arrival = TaggedFlight::new(FlightKind::Arrival, record.clone());
        let departure = TaggedFlight::new(FlightKind::Departure, record);

        assert_eq!(arrival.place(), Some("KDFW"));
        assert_eq!(departure.place(), Some("KORD"));
    }
}
