//! Board widgets.
//!
//! Each view is a thin wrapper around a view model implementing ratatui's
//! `Widget`. Colour decisions live here; text decisions live in the
//! presenter.

pub mod board;
pub mod flight_table;
pub mod footer;
pub mod header;
pub mod weather;

pub use board::{BoardLayout, BoardScreenView};
pub use flight_table::FlightTableView;
pub use footer::FooterView;
pub use header::HeaderView;
pub use weather::WeatherView;

use ratatui::style::Color;

/// Flap background
pub(crate) const FLAP_BG: Color = Color::Rgb(28, 28, 28);
/// Default flap lettering
pub(crate) const FLAP_FG: Color = Color::Rgb(255, 204, 0);

/// Colour for a row's `status-*` class
pub(crate) fn status_class_to_color(class: &str) -> Color {
    let slug = class.strip_prefix("status-").unwrap_or(class);
    if slug.contains("cancel") || slug.contains("divert") || slug.contains("delay") {
        Color::Red
    } else if slug.contains("en-route") {
        Color::Green
    } else if slug.contains("eta") || slug.contains("estimated") {
        Color::Cyan
    } else if slug.contains("arrived") || slug.contains("landed") || slug.contains("departed") {
        Color::Gray
    } else {
        FLAP_FG
    }
}
