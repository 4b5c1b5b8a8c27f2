pub mod text;
pub mod tui;

pub use text::render_to_string;
pub use tui::TuiRenderer;
