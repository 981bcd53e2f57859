//! Calendar-day arithmetic shared by the chart geometry and the resolver.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

/// Midnight (UTC) of the calendar day containing `dt`.
pub fn start_of_day(dt: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&dt.date_naive().and_time(NaiveTime::MIN))
}

/// Whole days from `start` to `end`, truncated toward zero.
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_days()
}

/// `dt` shifted by `days`, or `None` past the calendar chrono can represent.
pub fn checked_add_days(dt: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    Duration::try_days(days).and_then(|delta| dt.checked_add_signed(delta))
}

/// Saturating form of [`checked_add_days`]: clamps to the first or last
/// representable instant.
pub fn add_days(dt: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    checked_add_days(dt, days).unwrap_or(if days < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(d: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, h, m, 0).unwrap()
    }

    #[test]
    fn start_of_day_strips_time() {
        assert_eq!(start_of_day(at(10, 17, 45)), at(10, 0, 0));
        assert_eq!(start_of_day(at(10, 0, 0)), at(10, 0, 0));
    }

    #[test]
    fn days_between_truncates_partial_days() {
        assert_eq!(days_between(at(1, 0, 0), at(3, 0, 0)), 2);
        assert_eq!(days_between(at(1, 12, 0), at(3, 6, 0)), 1);
        assert_eq!(days_between(at(3, 0, 0), at(1, 0, 0)), -2);
        assert_eq!(days_between(at(1, 9, 0), at(1, 18, 0)), 0);
    }

    #[test]
    fn add_days_crosses_month_boundary() {
        let jan_30 = at(30, 8, 0);
        let feb_2 = Utc.with_ymd_and_hms(2024, 2, 2, 8, 0, 0).unwrap();
        assert_eq!(add_days(jan_30, 3), feb_2);
        assert_eq!(add_days(feb_2, -3), jan_30);
    }

    #[test]
    fn add_days_saturates_at_calendar_limits() {
        assert_eq!(checked_add_days(at(1, 0, 0), i64::MAX), None);
        assert_eq!(checked_add_days(at(1, 0, 0), 400_000_000), None);
        assert_eq!(add_days(at(1, 0, 0), i64::MAX), DateTime::<Utc>::MAX_UTC);
        assert_eq!(add_days(at(1, 0, 0), i64::MIN), DateTime::<Utc>::MIN_UTC);
    }
}
