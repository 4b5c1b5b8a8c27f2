use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::flight::{FlightKind, FlightRecord, TaggedFlight};
use crate::{Error, Result};

/// Raw `/api/flights` body.
///
/// Lists are optional because "key absent" and "key present but empty" mean
/// different things to the board (see [`FlightPayload::into_response`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightPayload {
    #[serde(default, deserialize_with = "lenient_records")]
    pub departures: Option<Vec<FlightRecord>>,

    #[serde(default, deserialize_with = "lenient_records")]
    pub arrivals: Option<Vec<FlightRecord>>,

    #[serde(default, deserialize_with = "lenient_records")]
    pub scheduled_arrivals: Option<Vec<FlightRecord>>,

    #[serde(default, deserialize_with = "lenient_records")]
    pub scheduled_departures: Option<Vec<FlightRecord>>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

/// What a flight fetch means for the board
#[derive(Debug, Clone, PartialEq)]
pub enum FlightResponse {
    Lists(FlightLists),
    /// Board-wide status text (`message` or `error`), e.g. "AIRPORT IS CURRENTLY CLOSED"
    Override(String),
}

/// The lists the board actually displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightLists {
    pub departures: Vec<FlightRecord>,
    pub scheduled_arrivals: Vec<FlightRecord>,
    pub scheduled_departures: Vec<FlightRecord>,
}

impl FlightPayload {
    /// Parse a body, which must be a JSON object. Any other shape is an
    /// error so it can never be mistaken for "no flights".
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(Error::Decode(serde::de::Error::custom(
                "flights body must be a JSON object",
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Resolve the payload into lists or an override.
    ///
    /// A non-empty `message` wins over `error`, and either wins over any lists.
    /// Servers that only send live `arrivals` (no `scheduled_arrivals` key)
    /// get those arrivals on the scheduled board instead.
    pub fn into_response(self) -> FlightResponse {
        let status = [self.message, self.error]
            .into_iter()
            .flatten()
            .map(|text| text.trim().to_string())
            .find(|text| !text.is_empty());

        if let Some(text) = status {
            return FlightResponse::Override(text);
        }

        let scheduled_arrivals = match self.scheduled_arrivals {
            Some(list) => list,
            None => self.arrivals.unwrap_or_default(),
        };

        FlightResponse::Lists(FlightLists {
            departures: self.departures.unwrap_or_default(),
            scheduled_arrivals,
            scheduled_departures: self.scheduled_departures.unwrap_or_default(),
        })
    }
}

impl FlightLists {
    pub fn has_departures(&self) -> bool {
        !self.departures.is_empty()
    }

    pub fn has_scheduled(&self) -> bool {
        !self.scheduled_arrivals.is_empty() || !self.scheduled_departures.is_empty()
    }

    pub fn departures_tagged(&self) -> Vec<TaggedFlight> {
        tag(FlightKind::Departure, &self.departures).collect()
    }

    /// Scheduled arrivals followed by scheduled departures, each tagged with its direction
    pub fn scheduled_tagged(&self) -> Vec<TaggedFlight> {
        tag(FlightKind::Arrival, &self.scheduled_arrivals)
            .chain(tag(FlightKind::Departure, &self.scheduled_departures))
            .collect()
    }
}

fn tag(kind: FlightKind, records: &[FlightRecord]) -> impl Iterator<Item = TaggedFlight> + '_ {
    records
        .iter()
        .cloned()
        .map(move |record| TaggedFlight::new(kind, record))
}

/// Accept a list whose entries may be `null` or otherwise malformed, keeping the valid records.
fn lenient_records<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<FlightRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|values| {
        values
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect()
    }))
}
