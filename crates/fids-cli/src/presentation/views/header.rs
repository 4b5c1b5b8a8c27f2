use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::FLAP_FG;
use crate::presentation::view_models::HeaderViewModel;

/// Board title on the left, local time on the right
pub struct HeaderView<'a> {
    model: &'a HeaderViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a HeaderViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Min(10), Constraint::Length(18)]).split(inner);

        Paragraph::new(self.model.title.as_str())
            .style(Style::default().fg(FLAP_FG).add_modifier(Modifier::BOLD))
            .render(chunks[0], buf);

        Paragraph::new(self.model.clock.as_str())
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
