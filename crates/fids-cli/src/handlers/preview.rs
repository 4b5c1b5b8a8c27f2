use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use fids_engine::View;
use fids_runtime::{BoardConfig, BoardRuntime, FetchOutcome};
use fids_types::{FlightPayload, WeatherPayload};
use ratatui::layout::Rect;

use crate::presentation::presenter::present_board;
use crate::presentation::renderers::render_to_string;
use crate::presentation::views::BoardLayout;

pub struct PreviewOptions {
    pub flights: PathBuf,
    pub weather: Option<PathBuf>,
    pub view: View,
    pub width: u16,
    pub height: u16,
}

/// Render one frame from saved API responses, without touching the network
pub fn handle(config: &BoardConfig, options: PreviewOptions) -> Result<()> {
    let flights_body = std::fs::read_to_string(&options.flights)
        .with_context(|| format!("Failed to read {}", options.flights.display()))?;
    let flights = FlightPayload::from_json(&flights_body)
        .with_context(|| format!("Invalid flights JSON in {}", options.flights.display()))?;

    let weather = match &options.weather {
        Some(path) => {
            let body = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Some(
                WeatherPayload::from_json(&body)
                    .with_context(|| format!("Invalid weather JSON in {}", path.display()))?,
            )
        }
        None => None,
    };

    let now = Utc::now();
    let mut runtime = BoardRuntime::new(config, Local)?;
    runtime.start(now);
    runtime.set_viewport_rows(BoardLayout::table_viewport_rows(Rect::new(
        0,
        0,
        options.width,
        options.height,
    )));

    if let Some(payload) = weather {
        runtime.apply(FetchOutcome::Weather(Ok(payload)), now);
    }
    runtime.apply(FetchOutcome::Flights(Ok(flights.into_response())), now);
    runtime.show(options.view);

    let model = present_board(&runtime, now);
    print!("{}", render_to_string(&model, options.width, options.height));
    Ok(())
}
