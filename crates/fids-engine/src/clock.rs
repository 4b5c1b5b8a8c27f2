use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

/// Header clock text, e.g. `LOCAL TIME: 14:05`
pub fn format_clock<Tz>(now: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("LOCAL TIME: {}", format_time(now, tz))
}

/// 24-hour `HH:MM` in the board's timezone
pub fn format_time<Tz>(ts: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.with_timezone(tz).format("%H:%M").to_string()
}

/// Age of a piece of data relative to `now`, e.g. `4m 10s`
pub fn format_age(since: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(since);

    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;
    let seconds = duration.num_seconds().max(0) % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 4, h, m, s).unwrap()
    }

    #[test]
    fn test_clock_uses_board_timezone() {
        let central = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_clock(at(19, 7, 42), &central), "LOCAL TIME: 14:07");
    }

    #[test]
    fn test_time_is_24_hour() {
        assert_eq!(format_time(at(23, 59, 0), &Utc), "23:59");
        assert_eq!(format_time(at(0, 5, 0), &Utc), "00:05");
    }

    #[test]
    fn test_format_age() {
        let now = at(12, 0, 0);
        assert_eq!(format_age(now - Duration::seconds(42), now), "42s");
        assert_eq!(format_age(now - Duration::seconds(250), now), "4m 10s");
        assert_eq!(format_age(now - Duration::minutes(135), now), "2h 15m");
    }
}
