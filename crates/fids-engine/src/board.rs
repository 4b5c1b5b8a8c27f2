//! The display state machine.
//!
//! The board cycles Departures → Scheduled → Weather → Departures, skipping
//! list views that have nothing to show. List views scroll when their table
//! is taller than the viewport. Every transition and scroll step is driven by
//! timers the board owns: at most one view timer and one scroll timer are
//! pending, and entering any view cancels both first.

use std::fmt::Display;
use std::time::Duration;

use chrono::TimeZone;
use tracing::debug;

use crate::scroll::{ScrollState, ScrollStep};
use crate::store::DataStore;
use crate::table::{FlightTable, TableKind, render_table};
use crate::timer::{Scheduler, TimerId};
use crate::weather::WeatherReport;

/// Table rows assumed visible before the renderer reports a measurement
const DEFAULT_VIEWPORT_ROWS: u32 = 10;
/// Floor for every board delay; a zero delay would re-fire at the same instant forever
const MIN_DELAY: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Departures,
    /// Scheduled arrivals and departures merged into one table
    Scheduled,
    Weather,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Departures => "DEPARTURES",
            View::Scheduled => "ARRIVALS & SCHEDULED",
            View::Weather => "LOCAL WEATHER",
        }
    }

    pub fn table_kind(&self) -> Option<TableKind> {
        match self {
            View::Departures => Some(TableKind::Departures),
            View::Scheduled => Some(TableKind::Scheduled),
            View::Weather => None,
        }
    }
}

/// Timer events owned by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    SwitchView,
    /// Top pause elapsed; start ticking
    BeginScroll,
    ScrollTick,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardSettings {
    /// Delay before leaving a list view that has no rows
    pub empty_skip: Duration,
    pub weather_dwell: Duration,
    /// Delay before leaving a list view while a status override is shown
    pub override_fallback: Duration,
    /// Pause at the top before scrolling and at the bottom before switching
    pub scroll_pause: Duration,
    pub scroll_tick: Duration,
    /// Scroll units advanced per tick
    pub scroll_step: u32,
    pub units_per_row: u32,
    pub max_rows: Option<usize>,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            empty_skip: Duration::from_secs(1),
            weather_dwell: Duration::from_secs(30),
            override_fallback: Duration::from_secs(30),
            scroll_pause: Duration::from_secs(8),
            scroll_tick: Duration::from_millis(50),
            scroll_step: 1,
            units_per_row: 8,
            max_rows: None,
        }
    }
}

#[derive(Debug)]
pub struct Board<Tz: TimeZone> {
    settings: BoardSettings,
    tz: Tz,
    view: View,
    started: bool,
    view_timer: Option<TimerId>,
    scroll_timer: Option<TimerId>,
    scroll: ScrollState,
    viewport_rows: u32,
    title: String,
    table: Option<FlightTable>,
    weather: Option<WeatherReport>,
}

impl<Tz> Board<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn new(mut settings: BoardSettings, tz: Tz) -> Self {
        for delay in [
            &mut settings.empty_skip,
            &mut settings.weather_dwell,
            &mut settings.override_fallback,
            &mut settings.scroll_pause,
            &mut settings.scroll_tick,
        ] {
            *delay = (*delay).max(MIN_DELAY);
        }
        settings.scroll_step = settings.scroll_step.max(1);
        settings.units_per_row = settings.units_per_row.max(1);

        Self {
            settings,
            tz,
            view: View::Departures,
            started: false,
            view_timer: None,
            scroll_timer: None,
            scroll: ScrollState::default(),
            viewport_rows: DEFAULT_VIEWPORT_ROWS,
            title: View::Departures.title().to_string(),
            table: None,
            weather: None,
        }
    }

    /// Enter the initial view. Only the first call does anything.
    pub fn start<S>(&mut self, sched: &mut S, store: &DataStore) -> bool
    where
        S: Scheduler<BoardEvent>,
    {
        if self.started {
            return false;
        }
        self.started = true;
        self.enter_view(View::Departures, sched, store);
        true
    }

    /// Advance to the next view that has something to show
    pub fn switch_view<S>(&mut self, sched: &mut S, store: &DataStore)
    where
        S: Scheduler<BoardEvent>,
    {
        let next = match self.view {
            View::Departures if store.has_scheduled() => View::Scheduled,
            View::Departures => View::Weather,
            View::Scheduled => View::Weather,
            View::Weather if store.has_departures() => View::Departures,
            View::Weather => View::Weather,
        };
        self.enter_view(next, sched, store);
    }

    pub fn enter_view<S>(&mut self, view: View, sched: &mut S, store: &DataStore)
    where
        S: Scheduler<BoardEvent>,
    {
        self.cancel_timers(sched);
        self.scroll = ScrollState::default();
        self.view = view;
        self.title = store
            .status_override()
            .map_or_else(|| view.title().to_string(), str::to_string);

        debug!(view = view.title(), title = %self.title, "entering view");

        let Some(kind) = view.table_kind() else {
            self.table = None;
            self.weather = store.weather().cloned();
            self.view_timer =
                Some(sched.schedule_after(self.settings.weather_dwell, BoardEvent::SwitchView));
            return;
        };

        let table = render_table(kind, store.flights_for(kind), &self.tz, self.settings.max_rows);

        if store.status_override().is_some() {
            self.view_timer =
                Some(sched.schedule_after(self.settings.override_fallback, BoardEvent::SwitchView));
        } else if table.is_placeholder() {
            self.view_timer =
                Some(sched.schedule_after(self.settings.empty_skip, BoardEvent::SwitchView));
        } else {
            self.begin_scroll_cycle(table.row_count(), sched);
        }
        self.table = Some(table);
    }

    /// React to a fired board timer. Events from timers the board no longer
    /// owns are dropped.
    pub fn handle<S>(&mut self, id: TimerId, event: BoardEvent, sched: &mut S, store: &DataStore)
    where
        S: Scheduler<BoardEvent>,
    {
        match event {
            BoardEvent::SwitchView => {
                if self.view_timer != Some(id) {
                    debug!(?id, "ignoring stale view timer");
                    return;
                }
                self.view_timer = None;
                self.switch_view(sched, store);
            }
            BoardEvent::BeginScroll => {
                if self.scroll_timer != Some(id) {
                    debug!(?id, "ignoring stale scroll start");
                    return;
                }
                let tick = self.settings.scroll_tick;
                self.scroll_timer =
                    Some(sched.schedule_repeating(tick, tick, BoardEvent::ScrollTick));
            }
            BoardEvent::ScrollTick => {
                if self.scroll_timer != Some(id) {
                    debug!(?id, "ignoring stale scroll tick");
                    return;
                }
                let moved = self.scroll.step(self.settings.scroll_step) == ScrollStep::Advanced;
                if moved && !self.scroll.at_bottom() {
                    return;
                }
                if let Some(timer) = self.scroll_timer.take() {
                    sched.cancel(timer);
                }
                self.view_timer =
                    Some(sched.schedule_after(self.settings.scroll_pause, BoardEvent::SwitchView));
            }
        }
    }

    /// Latest measurement of how many table rows fit on screen; read at the
    /// next view entry.
    pub fn set_viewport_rows(&mut self, rows: u32) {
        self.viewport_rows = rows.max(1);
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Table rendered at the last list-view entry; `None` on the weather view
    pub fn table(&self) -> Option<&FlightTable> {
        self.table.as_ref()
    }

    /// Weather captured at the last weather-view entry
    pub fn weather(&self) -> Option<&WeatherReport> {
        self.weather.as_ref()
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Scroll position converted to whole table rows
    pub fn scroll_offset_rows(&self) -> usize {
        (self.scroll.position() / self.settings.units_per_row) as usize
    }

    pub fn view_timer(&self) -> Option<TimerId> {
        self.view_timer
    }

    pub fn scroll_timer(&self) -> Option<TimerId> {
        self.scroll_timer
    }

    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    fn begin_scroll_cycle<S>(&mut self, rows: usize, sched: &mut S)
    where
        S: Scheduler<BoardEvent>,
    {
        let unit = self.settings.units_per_row;
        let content = u32::try_from(rows).unwrap_or(u32::MAX).saturating_mul(unit);
        let viewport = self.viewport_rows.saturating_mul(unit);
        self.scroll = ScrollState::new(content, viewport);

        if self.scroll.overflows() {
            self.scroll_timer =
                Some(sched.schedule_after(self.settings.scroll_pause, BoardEvent::BeginScroll));
        } else {
            self.view_timer =
                Some(sched.schedule_after(self.settings.scroll_pause, BoardEvent::SwitchView));
        }
    }

    fn cancel_timers<S>(&mut self, sched: &mut S)
    where
        S: Scheduler<BoardEvent>,
    {
        if let Some(id) = self.view_timer.take() {
            sched.cancel(id);
        }
        if let Some(id) = self.scroll_timer.take() {
            sched.cancel(id);
        }
    }
}
