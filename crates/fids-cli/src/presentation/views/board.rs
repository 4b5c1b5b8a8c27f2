use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{FLAP_FG, FlightTableView, FooterView, HeaderView, WeatherView};
use crate::presentation::view_models::{BoardBodyViewModel, BoardScreenViewModel};

/// Header, body and footer areas of a board frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl BoardLayout {
    pub fn split(area: Rect) -> Self {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);
        Self {
            header: chunks[0],
            body: chunks[1],
            footer: chunks[2],
        }
    }

    /// Table rows visible in the body; fed back to the scroll manager
    pub fn table_viewport_rows(area: Rect) -> u32 {
        FlightTableView::visible_rows(Self::split(area).body)
    }
}

/// The whole board frame
pub struct BoardScreenView<'a> {
    model: &'a BoardScreenViewModel,
}

impl<'a> BoardScreenView<'a> {
    pub fn new(model: &'a BoardScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for BoardScreenView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = BoardLayout::split(area);

        HeaderView::new(&self.model.header).render(layout.header, buf);

        match &self.model.body {
            BoardBodyViewModel::Loading => {
                Paragraph::new("LOADING…")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(FLAP_FG).add_modifier(Modifier::BOLD))
                    .block(Block::default().borders(Borders::ALL))
                    .render(layout.body, buf);
            }
            BoardBodyViewModel::Table(table) => {
                FlightTableView::new(table).render(layout.body, buf);
            }
            BoardBodyViewModel::Weather(weather) => {
                WeatherView::new(weather.as_ref()).render(layout.body, buf);
            }
        }

        FooterView::new(&self.model.footer).render(layout.footer, buf);
    }
}
