use std::fmt::Display;

use chrono::{DateTime, Duration, LocalResult, NaiveTime, TimeZone, Utc};

/// Days searched ahead before giving up on a wall-clock time
const SEARCH_DAYS: i64 = 4;

/// Once-a-day wall-clock alarm, e.g. the 06:00 forced refresh.
///
/// The next target is always computed from the calendar, never by adding
/// 24 hours, so DST changes keep the alarm on the wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyAlarm {
    at: NaiveTime,
    last_fired: Option<DateTime<Utc>>,
}

impl DailyAlarm {
    pub fn new(at: NaiveTime) -> Self {
        Self {
            at,
            last_fired: None,
        }
    }

    /// Record that the alarm for `target` went off
    pub fn fired(&mut self, target: DateTime<Utc>) {
        self.last_fired = Some(self.last_fired.map_or(target, |last| last.max(target)));
    }

    /// Next occurrence strictly after both `now` and the last fired target.
    ///
    /// An ambiguous local time (clocks going back) resolves to the earlier
    /// instant; a day where the time does not exist (clocks going forward)
    /// is skipped.
    pub fn next_after<Tz>(&self, now: DateTime<Utc>, tz: &Tz) -> DateTime<Utc>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let base = self.last_fired.map_or(now, |last| last.max(now));
        let start = base.with_timezone(tz).date_naive();

        (0..SEARCH_DAYS)
            .filter_map(|offset| start.checked_add_signed(Duration::days(offset)))
            .filter_map(|day| match tz.from_local_datetime(&day.and_time(self.at)) {
                LocalResult::Single(t) => Some(t.with_timezone(&Utc)),
                LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
                LocalResult::None => None,
            })
            .find(|candidate| *candidate > base)
            .unwrap_or_else(|| base + Duration::days(1))
    }
}
