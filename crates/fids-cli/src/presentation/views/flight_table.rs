use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Widget},
};

use fids_engine::{FlapCell, FlightRow, FlipText, TableRows};

use super::{FLAP_BG, FLAP_FG, status_class_to_color};
use crate::presentation::view_models::TableViewModel;

/// Border top and bottom plus the heading row
const TABLE_CHROME_ROWS: u16 = 3;

/// Flight table with one flap per character
pub struct FlightTableView<'a> {
    model: &'a TableViewModel,
}

impl<'a> FlightTableView<'a> {
    pub fn new(model: &'a TableViewModel) -> Self {
        Self { model }
    }

    /// Flight rows that fit in `area` once borders and headings are drawn
    pub fn visible_rows(area: Rect) -> u32 {
        u32::from(area.height.saturating_sub(TABLE_CHROME_ROWS)).max(1)
    }
}

impl<'a> Widget for FlightTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let table = &self.model.table;

        let rows = match &table.rows {
            TableRows::Placeholder(text) => {
                Paragraph::new(text.as_str())
                    .alignment(Alignment::Center)
                    .block(block)
                    .render(area, buf);
                return;
            }
            TableRows::Flights(rows) => rows,
        };

        let heading = Row::new(vec![
            "FLIGHT",
            table.kind.place_heading(),
            "AIRCRAFT",
            "STATUS",
            "TIME",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let body = rows
            .iter()
            .skip(self.model.scroll_offset)
            .map(flight_row);

        let widths = [
            Constraint::Length(9),
            Constraint::Min(12),
            Constraint::Length(9),
            Constraint::Min(12),
            Constraint::Length(6),
        ];

        Table::new(body, widths)
            .header(heading)
            .block(block)
            .column_spacing(2)
            .render(area, buf);
    }
}

fn flight_row(row: &FlightRow) -> Row<'static> {
    let status_color = status_class_to_color(&row.status_class);
    Row::new(vec![
        flaps(&row.ident, Style::default().fg(FLAP_FG)),
        flaps(&row.place, Style::default().fg(FLAP_FG)),
        flaps(&row.aircraft, Style::default().fg(FLAP_FG)),
        flaps(&row.status, Style::default().fg(status_color)),
        flaps(&row.time, Style::default().fg(FLAP_FG)),
    ])
}

fn flaps(text: &FlipText, style: Style) -> Line<'static> {
    let style = style.bg(FLAP_BG);
    let spans: Vec<Span<'static>> = text
        .cells()
        .iter()
        .map(|cell| match cell {
            FlapCell::Glyph(c) => Span::styled(c.to_string(), style),
            FlapCell::Blank => Span::styled(" ", style),
        })
        .collect();
    Line::from(spans)
}
