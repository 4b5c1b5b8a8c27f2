//! One logical timeline for the whole board.
//!
//! [`BoardRuntime`] owns the timer queue, the display state machine, the
//! poller and the data store. The event loop feeds it elapsed time and fetch
//! outcomes; everything else (view switches, scrolling, polls, the clock)
//! happens inside [`BoardRuntime::advance`].

use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use fids_engine::{Board, BoardEvent, DataStore, TimerQueue, View, format_clock};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::Result;
use crate::client::FeedClient;
use crate::config::{BoardConfig, PollSettings};
use crate::poller::{Feed, FetchOutcome, FetchScheduler, PollEvent};

const CLOCK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEvent {
    Board(BoardEvent),
    Poll(PollEvent),
    ClockTick,
}

impl From<BoardEvent> for RuntimeEvent {
    fn from(event: BoardEvent) -> Self {
        RuntimeEvent::Board(event)
    }
}

impl From<PollEvent> for RuntimeEvent {
    fn from(event: PollEvent) -> Self {
        RuntimeEvent::Poll(event)
    }
}

#[derive(Debug)]
pub struct BoardRuntime<Tz: TimeZone> {
    queue: TimerQueue<RuntimeEvent>,
    board: Board<Tz>,
    poller: FetchScheduler,
    store: DataStore,
    tz: Tz,
    clock: String,
}

impl<Tz> BoardRuntime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn new(config: &BoardConfig, tz: Tz) -> Result<Self> {
        Ok(Self::with_settings(config, config.poll_settings()?, tz))
    }

    fn with_settings(config: &BoardConfig, poll: PollSettings, tz: Tz) -> Self {
        Self {
            queue: TimerQueue::new(),
            board: Board::new(config.board_settings(), tz.clone()),
            poller: FetchScheduler::new(poll),
            store: DataStore::new(),
            tz,
            clock: String::new(),
        }
    }

    /// Arm the polls, the daily refresh and the clock. Call once.
    pub fn start(&mut self, wall_now: DateTime<Utc>) {
        self.clock = format_clock(wall_now, &self.tz);
        self.poller.start(&mut self.queue, wall_now, &self.tz);
        fids_engine::Scheduler::<RuntimeEvent>::schedule_repeating(
            &mut self.queue,
            CLOCK_PERIOD,
            CLOCK_PERIOD,
            RuntimeEvent::ClockTick,
        );
        info!(
            next_daily_refresh = ?self.poller.next_daily_refresh(),
            "board runtime started"
        );
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.next_deadline()
    }

    /// Fire every timer due up to `now` (virtual time since start), in
    /// deadline order. Returns the feeds that should be requested.
    pub fn advance(&mut self, now: Duration, wall_now: DateTime<Utc>) -> Vec<Feed> {
        let mut feeds = Vec::new();
        while let Some(deadline) = self.queue.next_deadline().filter(|d| *d <= now) {
            self.queue.advance_to(deadline);
            while let Some(fired) = self.queue.pop_due() {
                match fired.event {
                    RuntimeEvent::Board(event) => {
                        self.board.handle(fired.id, event, &mut self.queue, &self.store);
                    }
                    RuntimeEvent::Poll(event) => {
                        let requested = self.poller.on_timer(
                            fired.id,
                            event,
                            &mut self.queue,
                            wall_now,
                            &self.tz,
                        );
                        feeds.extend(requested);
                    }
                    RuntimeEvent::ClockTick => {
                        self.clock = format_clock(wall_now, &self.tz);
                    }
                }
            }
        }
        self.queue.advance_to(now);
        feeds
    }

    /// Merge a finished request into the store. The first flight response of
    /// any kind brings the board up.
    pub fn apply(&mut self, outcome: FetchOutcome, wall_now: DateTime<Utc>) {
        self.poller.complete(outcome.feed());

        match outcome {
            FetchOutcome::Flights(Ok(response)) => {
                self.store.apply_flights(response, wall_now);
                if let Some(text) = self.store.status_override() {
                    info!(status = text, "board status override");
                }
                if self.board.start(&mut self.queue, &self.store) {
                    info!("first flight data received, board started");
                }
            }
            FetchOutcome::Flights(Err(e)) => {
                warn!(error = %e, "flight fetch failed, keeping previous data");
            }
            FetchOutcome::Weather(Ok(payload)) => {
                if !self.store.apply_weather(&payload, wall_now) {
                    warn!(
                        error = payload.error.as_deref().unwrap_or("missing temp or wind_speed"),
                        "weather unusable, keeping previous report"
                    );
                }
            }
            FetchOutcome::Weather(Err(e)) => {
                warn!(error = %e, "weather fetch failed, keeping previous report");
            }
        }
    }

    /// Jump straight to `view`, restarting its timers
    pub fn show(&mut self, view: View) {
        self.board.enter_view(view, &mut self.queue, &self.store);
    }

    /// Latest number of table rows the terminal can show
    pub fn set_viewport_rows(&mut self, rows: u32) {
        self.board.set_viewport_rows(rows);
    }

    pub fn board(&self) -> &Board<Tz> {
        &self.board
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn clock(&self) -> &str {
        &self.clock
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    pub fn poller(&self) -> &FetchScheduler {
        &self.poller
    }
}

/// Run one request per feed on the current runtime, reporting each outcome
/// on `tx`. A closed channel means the loop is shutting down.
pub fn spawn_fetches<C>(
    client: &Arc<C>,
    feeds: Vec<Feed>,
    tx: &mpsc::UnboundedSender<FetchOutcome>,
) where
    C: FeedClient + ?Sized + 'static,
{
    for feed in feeds {
        let client = Arc::clone(client);
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = fetch(client.as_ref(), feed).await;
            let _ = tx.send(outcome);
        });
    }
}

pub async fn fetch<C>(client: &C, feed: Feed) -> FetchOutcome
where
    C: FeedClient + ?Sized,
{
    match feed {
        Feed::Flights => FetchOutcome::Flights(client.fetch_flights().await),
        Feed::Weather => FetchOutcome::Weather(client.fetch_weather().await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use async_trait::async_trait;
    use fids_types::{FlightLists, FlightRecord, FlightResponse, WeatherPayload};
    use std::sync::Mutex;

    fn wall() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn lists(departures: usize) -> FlightResponse {
        FlightResponse::Lists(FlightLists {
            departures: (0..departures)
                .map(|i| FlightRecord {
                    ident: Some(format!("DAL{}", i)),
                    status: Some("En Route".to_string()),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        })
    }

    fn runtime() -> BoardRuntime<Utc> {
        let mut rt = BoardRuntime::new(&BoardConfig::default(), Utc).unwrap();
        rt.start(wall());
        rt
    }

    #[test]
    fn test_startup_requests_both_feeds_and_waits_for_data() {
        let mut rt = runtime();
        let feeds = rt.advance(Duration::ZERO, wall());
        assert_eq!(feeds, vec![Feed::Flights, Feed::Weather]);
        assert!(!rt.board().is_started());
        assert_eq!(rt.clock(), "LOCAL TIME: 12:00");
    }

    #[test]
    fn test_first_flight_response_starts_board_once() {
        let mut rt = runtime();
        rt.advance(Duration::ZERO, wall());

        rt.apply(FetchOutcome::Flights(Ok(lists(2))), wall());
        assert!(rt.board().is_started());
        assert_eq!(rt.board().view(), View::Departures);
        assert_eq!(rt.board().table().map(|t| t.row_count()), Some(2));

        rt.apply(FetchOutcome::Flights(Ok(lists(5))), wall());
        assert_eq!(rt.board().view(), View::Departures);
        assert_eq!(rt.board().table().map(|t| t.row_count()), Some(2));
        assert!(rt.store().has_departures());
    }

    #[test]
    fn test_override_response_also_starts_board() {
        let mut rt = runtime();
        rt.advance(Duration::ZERO, wall());
        rt.apply(
            FetchOutcome::Flights(Ok(FlightResponse::Override("Airport Closed".to_string()))),
            wall(),
        );
        assert!(rt.board().is_started());
        assert_eq!(rt.board().title(), "Airport Closed");
    }

    #[test]
    fn test_failure_keeps_stale_data() {
        let mut rt = runtime();
        rt.advance(Duration::ZERO, wall());
        rt.apply(FetchOutcome::Flights(Ok(lists(3))), wall());
        rt.apply(
            FetchOutcome::Weather(Ok(WeatherPayload {
                temp: Some(20.0),
                wind_speed: Some(4.0),
                summary: None,
                error: None,
            })),
            wall(),
        );

        rt.advance(Duration::from_secs(1800), wall());
        rt.apply(FetchOutcome::Flights(Err(Error::Status(503))), wall());
        rt.apply(FetchOutcome::Weather(Err(Error::Status(400))), wall());

        assert!(rt.store().has_departures());
        assert_eq!(rt.store().weather().map(|w| w.temp_fahrenheit), Some(68));
        assert!(!rt.poller().is_in_flight(Feed::Flights));
    }

    #[test]
    fn test_failed_first_fetch_keeps_loading() {
        let mut rt = runtime();
        rt.advance(Duration::ZERO, wall());
        rt.apply(FetchOutcome::Flights(Err(Error::Status(500))), wall());
        assert!(!rt.board().is_started());

        let feeds = rt.advance(Duration::from_secs(1800), wall());
        assert!(feeds.contains(&Feed::Flights));
    }

    #[test]
    fn test_zero_weather_dwell_is_refused_at_startup() {
        let mut config = BoardConfig::default();
        config.timing.weather_dwell_secs = 0;
        assert!(matches!(BoardRuntime::new(&config, Utc), Err(Error::Config(_))));
    }

    #[test]
    fn test_all_empty_lists_keep_advancing() {
        let mut rt = runtime();
        rt.advance(Duration::ZERO, wall());
        rt.apply(FetchOutcome::Flights(Ok(FlightResponse::Lists(FlightLists::default()))), wall());

        rt.advance(Duration::from_secs(120), wall());
        assert_eq!(rt.board().view(), View::Weather);
        assert!(rt.next_deadline().is_some_and(|d| d > Duration::from_secs(120)));
    }

    #[test]
    fn test_clock_ticks_every_second() {
        let mut rt = runtime();
        rt.advance(Duration::from_secs(61), wall() + chrono::Duration::seconds(61));
        assert_eq!(rt.clock(), "LOCAL TIME: 12:01");
    }

    struct FakeClient {
        flights: Mutex<Vec<FlightResponse>>,
    }

    #[async_trait]
    impl FeedClient for FakeClient {
        async fn fetch_flights(&self) -> Result<FlightResponse> {
            let mut flights = self.flights.lock().unwrap();
            Ok(flights.pop().unwrap_or_else(|| lists(0)))
        }

        async fn fetch_weather(&self) -> Result<WeatherPayload> {
            Err(Error::Status(500))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_fetches_report_back() {
        let client = Arc::new(FakeClient {
            flights: Mutex::new(vec![lists(4)]),
        });
        let (tx, mut rx) = mpsc::unbounded_channel();

        let mut rt = runtime();
        let feeds = rt.advance(Duration::ZERO, wall());
        spawn_fetches(&client, feeds, &tx);

        for _ in 0..2 {
            let outcome = rx.recv().await.unwrap();
            rt.apply(outcome, wall());
        }

        assert!(rt.board().is_started());
        assert_eq!(rt.board().table().map(|t| t.row_count()), Some(4));
        assert!(rt.store().weather().is_none());
    }
}
