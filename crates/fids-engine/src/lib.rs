pub mod alarm;
pub mod board;
pub mod clock;
pub mod scroll;
pub mod store;
pub mod table;
pub mod text;
pub mod timer;
pub mod weather;

pub use alarm::DailyAlarm;
pub use board::{Board, BoardEvent, BoardSettings, View};
pub use clock::{format_age, format_clock, format_time};
pub use scroll::{ScrollState, ScrollStep};
pub use store::DataStore;
pub use table::{FlightRow, FlightTable, TableKind, TableRows, render_table, sort_flights};
pub use text::{FlapCell, FlipText, flip_text};
pub use timer::{Scheduler, TimerId, TimerQueue};
pub use weather::{WeatherCondition, WeatherReport, celsius_to_fahrenheit};
