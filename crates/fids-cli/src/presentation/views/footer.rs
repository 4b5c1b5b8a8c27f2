use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::FooterViewModel;

/// Data ages on the left, key hint on the right
pub struct FooterView<'a> {
    model: &'a FooterViewModel,
}

impl<'a> FooterView<'a> {
    pub fn new(model: &'a FooterViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for FooterView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Min(20), Constraint::Length(8)]).split(inner);

        let age = |label: &str, value: &Option<String>| match value {
            Some(age) => format!("{} {} ago", label, age),
            None => format!("{} --", label),
        };

        let mut spans = vec![
            Span::raw(age("FLIGHTS", &self.model.flights_age)),
            Span::raw(" | "),
            Span::raw(age("WEATHER", &self.model.weather_age)),
        ];
        if let Some(brief) = &self.model.weather_brief {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(brief.as_str()));
        }
        Paragraph::new(Line::from(spans))
            .style(Style::default().fg(Color::DarkGray))
            .render(chunks[0], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("[q]", Style::default().fg(Color::Yellow)),
            Span::raw("uit"),
        ]))
        .render(chunks[1], buf);
    }
}
