//! Fetch scheduling.
//!
//! Flights and weather are polled on independent repeating timers that fire
//! once at start. A wall-clock alarm forces one extra flight fetch a day. The
//! poller only decides *when* to fetch; the request itself runs elsewhere and
//! reports back through [`FetchScheduler::complete`].

use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use fids_engine::{DailyAlarm, Scheduler, TimerId};
use fids_types::{FlightResponse, WeatherPayload};
use tracing::{debug, info};

use crate::Result;
use crate::config::PollSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    Flights,
    Weather,
}

impl Feed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feed::Flights => "flights",
            Feed::Weather => "weather",
        }
    }
}

/// Timer events owned by the poller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollEvent {
    Due(Feed),
    DailyRefresh,
}

/// Result of one request, handed back to the event loop
#[derive(Debug)]
pub enum FetchOutcome {
    Flights(Result<FlightResponse>),
    Weather(Result<WeatherPayload>),
}

impl FetchOutcome {
    pub fn feed(&self) -> Feed {
        match self {
            FetchOutcome::Flights(_) => Feed::Flights,
            FetchOutcome::Weather(_) => Feed::Weather,
        }
    }
}

#[derive(Debug)]
pub struct FetchScheduler {
    settings: PollSettings,
    alarm: DailyAlarm,
    alarm_timer: Option<(TimerId, DateTime<Utc>)>,
    flights_timer: Option<TimerId>,
    weather_timer: Option<TimerId>,
    flights_in_flight: bool,
    weather_in_flight: bool,
}

impl FetchScheduler {
    pub fn new(settings: PollSettings) -> Self {
        Self {
            alarm: DailyAlarm::new(settings.daily_refresh),
            settings,
            alarm_timer: None,
            flights_timer: None,
            weather_timer: None,
            flights_in_flight: false,
            weather_in_flight: false,
        }
    }

    /// Arm both polls (due immediately) and the daily alarm
    pub fn start<S, Tz>(&mut self, sched: &mut S, wall_now: DateTime<Utc>, tz: &Tz)
    where
        S: Scheduler<PollEvent>,
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        for id in [self.flights_timer.take(), self.weather_timer.take()]
            .into_iter()
            .flatten()
        {
            sched.cancel(id);
        }

        self.flights_timer = Some(sched.schedule_repeating(
            Duration::ZERO,
            self.settings.flights_every,
            PollEvent::Due(Feed::Flights),
        ));
        self.weather_timer = Some(sched.schedule_repeating(
            Duration::ZERO,
            self.settings.weather_every,
            PollEvent::Due(Feed::Weather),
        ));
        self.arm_alarm(sched, wall_now, tz);
    }

    /// React to a fired poll timer; returns the feed to request, if any.
    pub fn on_timer<S, Tz>(
        &mut self,
        id: TimerId,
        event: PollEvent,
        sched: &mut S,
        wall_now: DateTime<Utc>,
        tz: &Tz,
    ) -> Option<Feed>
    where
        S: Scheduler<PollEvent>,
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match event {
            PollEvent::Due(feed) => self.request(feed),
            PollEvent::DailyRefresh => {
                let target = match self.alarm_timer {
                    Some((armed, target)) if armed == id => target,
                    _ => {
                        debug!(?id, "ignoring stale daily refresh");
                        return None;
                    }
                };
                self.alarm_timer = None;
                self.alarm.fired(target);
                info!(%target, "daily flight refresh");
                self.arm_alarm(sched, wall_now, tz);
                self.request(Feed::Flights)
            }
        }
    }

    /// Mark a request finished so the next poll may go out
    pub fn complete(&mut self, feed: Feed) {
        *self.in_flight_mut(feed) = false;
    }

    pub fn is_in_flight(&self, feed: Feed) -> bool {
        match feed {
            Feed::Flights => self.flights_in_flight,
            Feed::Weather => self.weather_in_flight,
        }
    }

    /// Wall-clock instant the daily refresh is armed for
    pub fn next_daily_refresh(&self) -> Option<DateTime<Utc>> {
        self.alarm_timer.map(|(_, target)| target)
    }

    fn request(&mut self, feed: Feed) -> Option<Feed> {
        let in_flight = self.in_flight_mut(feed);
        if *in_flight {
            debug!(feed = feed.as_str(), "previous request still pending, skipping poll");
            return None;
        }
        *in_flight = true;
        Some(feed)
    }

    fn in_flight_mut(&mut self, feed: Feed) -> &mut bool {
        match feed {
            Feed::Flights => &mut self.flights_in_flight,
            Feed::Weather => &mut self.weather_in_flight,
        }
    }

    fn arm_alarm<S, Tz>(&mut self, sched: &mut S, wall_now: DateTime<Utc>, tz: &Tz)
    where
        S: Scheduler<PollEvent>,
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if let Some((id, _)) = self.alarm_timer.take() {
            sched.cancel(id);
        }
        let target = self.alarm.next_after(wall_now, tz);
        let delay = (target - wall_now).to_std().unwrap_or(Duration::ZERO);
        let id = sched.schedule_after(delay, PollEvent::DailyRefresh);
        debug!(%target, ?delay, "daily refresh armed");
        self.alarm_timer = Some((id, target));
    }
}
