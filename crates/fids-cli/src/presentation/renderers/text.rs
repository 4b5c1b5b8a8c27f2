//! Off-screen rendering for `fids preview`.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::presentation::view_models::BoardScreenViewModel;
use crate::presentation::views::BoardScreenView;

/// Draw one board frame into a `width` x `height` buffer and return its
/// characters, one line per row with trailing blanks trimmed.
pub fn render_to_string(model: &BoardScreenViewModel, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    BoardScreenView::new(model).render(area, &mut buf);

    let mut out = String::new();
    for y in 0..area.height {
        let line: String = (0..area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{
        BoardBodyViewModel, FooterViewModel, HeaderViewModel, TableViewModel,
    };
    use fids_engine::{FlightTable, TableKind, render_table};
    use fids_types::{FlightKind, FlightRecord, TaggedFlight};

    fn model(body: BoardBodyViewModel) -> BoardScreenViewModel {
        BoardScreenViewModel {
            header: HeaderViewModel {
                title: "DEPARTURES".to_string(),
                clock: "LOCAL TIME: 09:15".to_string(),
            },
            body,
            footer: FooterViewModel {
                flights_age: Some("12s".to_string()),
                weather_age: None,
                weather_brief: None,
            },
        }
    }

    #[test]
    fn test_loading_frame() {
        let text = render_to_string(&model(BoardBodyViewModel::Loading), 60, 12);
        assert!(text.contains("DEPARTURES"));
        assert!(text.contains("LOCAL TIME: 09:15"));
        assert!(text.contains("LOADING…"));
        assert!(text.contains("FLIGHTS 12s ago"));
        assert!(text.contains("WEATHER --"));
        assert_eq!(text.lines().count(), 12);
    }

    #[test]
    fn test_placeholder_table() {
        let body = BoardBodyViewModel::Table(TableViewModel {
            table: FlightTable::placeholder(TableKind::Departures),
            scroll_offset: 0,
        });
        let text = render_to_string(&model(body), 60, 12);
        assert!(text.contains("No departure data available."));
    }

    #[test]
    fn test_scroll_offset_hides_leading_rows() {
        let flights = (0..6)
            .map(|i| {
                TaggedFlight::new(
                    FlightKind::Departure,
                    FlightRecord {
                        ident: Some(format!("ZZ{}", i)),
                        status: Some("Scheduled".to_string()),
                        ..Default::default()
                    },
                )
            })
            .collect();
        let table = render_table(TableKind::Departures, flights, &chrono::Utc, None);

        let body = BoardBodyViewModel::Table(TableViewModel {
            table,
            scroll_offset: 2,
        });
        let text = render_to_string(&model(body), 80, 20);
        assert!(text.contains("FLIGHT"));
        assert!(text.contains("DESTINATION"));
        assert!(!text.contains("ZZ0"));
        assert!(!text.contains("ZZ1"));
        assert!(text.contains("ZZ2"));
        assert!(text.contains("ZZ5"));
    }
}
