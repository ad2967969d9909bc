use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Stored millis to `DateTime<Utc>`; out-of-range values clamp to the epoch
pub fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Midnight of `date` in `tz`
///
/// DST gap fallback: a midnight that does not exist locally is read as UTC.
fn local_midnight(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    naive
        .and_local_timezone(tz)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

/// `[start, end)` of the calendar day containing `now` in `tz`
pub fn day_bounds(now: DateTime<Utc>, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let today = now.with_timezone(&tz).date_naive();
    let tomorrow = today.succ_opt().unwrap_or(today);
    (local_midnight(today, tz), local_midnight(tomorrow, tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_millis_round_trip() {
        let dt = millis_to_datetime(1_760_000_000_123);
        assert_eq!(dt.timestamp_millis(), 1_760_000_000_123);
        assert_eq!(millis_to_datetime(i64::MAX), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_day_bounds_in_zone() {
        // 2025-10-16 20:00 UTC is already 2025-10-17 01:30 in Kolkata
        let now = Utc.with_ymd_and_hms(2025, 10, 16, 20, 0, 0).unwrap();
        let (start, end) = day_bounds(now, chrono_tz::Asia::Kolkata);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 10, 16, 18, 30, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 10, 17, 18, 30, 0).unwrap());
        assert!(start <= now && now < end);
    }

    #[test]
    fn test_day_bounds_across_dst_change() {
        // Madrid leaves summer time on 2025-10-26: that day lasts 25 hours
        let now = Utc.with_ymd_and_hms(2025, 10, 26, 12, 0, 0).unwrap();
        let (start, end) = day_bounds(now, chrono_tz::Europe::Madrid);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 10, 25, 22, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 10, 26, 23, 0, 0).unwrap());
    }
}
