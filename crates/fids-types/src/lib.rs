pub mod error;
pub mod flight;
pub mod payload;
pub mod weather;

pub use error::{Error, Result};
pub use flight::{FlightKind, FlightRecord, TaggedFlight};
pub use payload::{FlightLists, FlightPayload, FlightResponse};
pub use weather::WeatherPayload;
