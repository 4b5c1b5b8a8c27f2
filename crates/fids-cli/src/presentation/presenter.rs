use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use fids_engine::{View, WeatherReport, format_age};
use fids_runtime::BoardRuntime;

use super::view_models::{
    BoardBodyViewModel, BoardScreenViewModel, FooterViewModel, HeaderViewModel, TableViewModel,
    WeatherViewModel,
};

pub fn present_board<Tz>(runtime: &BoardRuntime<Tz>, now: DateTime<Utc>) -> BoardScreenViewModel
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let board = runtime.board();
    let store = runtime.store();

    let body = if !board.is_started() {
        BoardBodyViewModel::Loading
    } else {
        match (board.view(), board.table()) {
            (View::Weather, _) => BoardBodyViewModel::Weather(board.weather().map(present_weather)),
            (_, Some(table)) => BoardBodyViewModel::Table(TableViewModel {
                table: table.clone(),
                scroll_offset: board.scroll_offset_rows(),
            }),
            (_, None) => BoardBodyViewModel::Loading,
        }
    };

    BoardScreenViewModel {
        header: HeaderViewModel {
            title: board.title().to_string(),
            clock: runtime.clock().to_string(),
        },
        body,
        footer: FooterViewModel {
            flights_age: store.flights_updated_at().map(|at| format_age(at, now)),
            weather_age: store.weather_updated_at().map(|at| format_age(at, now)),
            weather_brief: store
                .weather()
                .map(|w| format!("{}°F {}", w.temp_fahrenheit, w.condition.label())),
        },
    }
}

fn present_weather(report: &WeatherReport) -> WeatherViewModel {
    WeatherViewModel {
        condition: report.condition,
        glyph: report.condition.glyph(),
        label: report.condition.label(),
        temperature: format!(
            "{}°F / {:.0}°C",
            report.temp_fahrenheit, report.temp_celsius
        ),
        wind: format!("WIND {} MPH", report.wind_mph),
        summary: report.summary.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fids_runtime::{BoardConfig, FetchOutcome};
    use fids_types::{FlightLists, FlightRecord, FlightResponse, WeatherPayload};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn runtime() -> BoardRuntime<Utc> {
        let mut rt = BoardRuntime::new(&BoardConfig::default(), Utc).unwrap();
        rt.start(now());
        rt
    }

    #[test]
    fn test_loading_until_first_response() {
        let rt = runtime();
        let model = present_board(&rt, now());
        assert_eq!(model.body, BoardBodyViewModel::Loading);
        assert_eq!(model.header.clock, "LOCAL TIME: 12:00");
        assert!(model.footer.flights_age.is_none());
    }

    #[test]
    fn test_table_and_footer_ages() {
        let mut rt = runtime();
        rt.apply(
            FetchOutcome::Flights(Ok(FlightResponse::Lists(FlightLists {
                departures: vec![FlightRecord {
                    ident: Some("SWA12".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }))),
            now(),
        );

        let later = now() + chrono::Duration::seconds(250);
        let model = present_board(&rt, later);
        assert_eq!(model.header.title, "DEPARTURES");
        let BoardBodyViewModel::Table(table) = &model.body else {
            panic!("expected a table");
        };
        assert_eq!(table.table.row_count(), 1);
        assert_eq!(table.scroll_offset, 0);
        assert_eq!(model.footer.flights_age.as_deref(), Some("4m 10s"));
    }

    #[test]
    fn test_weather_panel() {
        let mut rt = runtime();
        rt.apply(
            FetchOutcome::Flights(Ok(FlightResponse::Lists(FlightLists::default()))),
            now(),
        );
        rt.apply(
            FetchOutcome::Weather(Ok(WeatherPayload {
                temp: Some(20.0),
                wind_speed: Some(7.4),
                summary: Some("Partly Cloudy".to_string()),
                error: None,
            })),
            now(),
        );
        rt.show(View::Weather);

        let model = present_board(&rt, now());
        assert_eq!(model.header.title, "LOCAL WEATHER");
        let BoardBodyViewModel::Weather(Some(weather)) = &model.body else {
            panic!("expected weather");
        };
        assert_eq!(weather.temperature, "68°F / 20°C");
        assert_eq!(weather.wind, "WIND 7 MPH");
        assert_eq!(weather.label, "CLOUDY");
        assert_eq!(model.footer.weather_brief.as_deref(), Some("68°F CLOUDY"));
    }
}
