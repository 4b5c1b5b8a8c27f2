use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::FLAP_FG;
use crate::presentation::view_models::WeatherViewModel;

pub struct WeatherView<'a> {
    model: Option<&'a WeatherViewModel>,
}

impl<'a> WeatherView<'a> {
    pub fn new(model: Option<&'a WeatherViewModel>) -> Self {
        Self { model }
    }
}

impl<'a> Widget for WeatherView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);

        let lines = match self.model {
            Some(weather) => vec![
                Line::from(""),
                Line::styled(
                    format!("{}  {}", weather.glyph, weather.label),
                    Style::default().fg(FLAP_FG).add_modifier(Modifier::BOLD),
                ),
                Line::from(""),
                Line::from(weather.temperature.as_str()),
                Line::from(weather.wind.as_str()),
                Line::from(""),
                Line::from(weather.summary.as_str()),
            ],
            None => vec![Line::from(""), Line::from("Weather data unavailable.")],
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
