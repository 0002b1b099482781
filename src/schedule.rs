//!
//! # Schedule Normalization
//!
//! Clients submit task schedules as free-form date/time strings (the mobile
//! frontend sends `Date.toISOString()`, i.e. RFC 3339 in UTC, but other
//! clients have sent offset-bearing and naive variants). This module parses
//! those strings, converts them to the application's fixed civil timezone
//! (JST, UTC+9), and splits the result into a calendar date plus a
//! time-of-day.
//!
//! A time-of-day of exactly 00:00:00 is collapsed to "absent", meaning the
//! task is all-day or the client gave no time. Known limitation: a client
//! that genuinely means a midnight appointment cannot express it; the input
//! is ambiguous and this module does not guess.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::error::AppError;

/// The single civil timezone all schedules are expressed in. Not derived from
/// the client locale.
const JST_OFFSET_SECS: i32 = 9 * 3600;

fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).expect("static +09:00 offset is in range")
}

/// A schedule endpoint after normalization: a calendar date and, unless the
/// input landed on the midnight sentinel, a time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalStamp {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

impl LocalStamp {
    /// Renders the time-of-day for API responses: zero-padded 24-hour
    /// `HH:MM`, no seconds. `None` when the time is absent.
    pub fn time_string(&self) -> Option<String> {
        self.time.map(|t| t.format("%H:%M").to_string())
    }
}

/// Parses `raw` into an absolute instant, converts it to JST, and splits it
/// into date and time-of-day. Exactly-midnight collapses to `time: None`.
///
/// Accepted grammars, tried in order:
/// - RFC 3339 with offset or `Z` (`2024-03-10T14:30:00+09:00`)
/// - naive date-time, `T` or space separated (`2024-03-10T14:30:00`),
///   interpreted as already being JST
/// - bare date (`2024-03-10`), interpreted as all-day
pub fn normalize(field: &str, raw: &str) -> Result<LocalStamp, AppError> {
    let raw = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(split(instant.with_timezone(&jst())));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            // No offset given: the wall-clock value is taken as JST as-is.
            let local = jst()
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| AppError::UnparsableDateTime(field.to_string()))?;
            return Ok(split(local));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(LocalStamp { date, time: None });
    }

    Err(AppError::UnparsableDateTime(field.to_string()))
}

/// Normalizes both endpoints of a range independently. The endpoints are not
/// checked against each other; end-before-start passes through unvalidated.
pub fn normalize_range(
    start_field: &str,
    start_raw: &str,
    end_field: &str,
    end_raw: &str,
) -> Result<(LocalStamp, LocalStamp), AppError> {
    let start = normalize(start_field, start_raw)?;
    let end = normalize(end_field, end_raw)?;
    Ok((start, end))
}

fn split(local: DateTime<FixedOffset>) -> LocalStamp {
    let time = local.time();
    LocalStamp {
        date: local.date_naive(),
        // Sentinel midnight: 00:00:00 means "no time given".
        time: if time == NaiveTime::MIN { None } else { Some(time) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_midnight_collapses_to_absent_time() {
        let stamp = normalize("date", "2024-03-10T00:00:00+09:00").unwrap();
        assert_eq!(stamp.date, date(2024, 3, 10));
        assert_eq!(stamp.time, None);
        assert_eq!(stamp.time_string(), None);
    }

    #[test]
    fn test_afternoon_time_is_kept() {
        let stamp = normalize("date", "2024-03-10T14:30:00+09:00").unwrap();
        assert_eq!(stamp.date, date(2024, 3, 10));
        assert_eq!(stamp.time_string().as_deref(), Some("14:30"));
    }

    #[test]
    fn test_utc_instant_converts_to_jst() {
        // 15:00 UTC on the 9th is exactly midnight JST on the 10th, so the
        // converted value hits the sentinel and the time is absent.
        let stamp = normalize("date", "2024-03-09T15:00:00Z").unwrap();
        assert_eq!(stamp.date, date(2024, 3, 10));
        assert_eq!(stamp.time, None);

        // One hour later lands at 01:00 JST on the 10th.
        let stamp = normalize("date", "2024-03-09T16:00:00Z").unwrap();
        assert_eq!(stamp.date, date(2024, 3, 10));
        assert_eq!(stamp.time_string().as_deref(), Some("01:00"));
    }

    #[test]
    fn test_fractional_seconds_from_to_iso_string() {
        // JS Date.toISOString() emits milliseconds.
        let stamp = normalize("startdate", "2024-05-01T00:00:00.000Z").unwrap();
        assert_eq!(stamp.date, date(2024, 5, 1));
        assert_eq!(stamp.time_string().as_deref(), Some("09:00"));
    }

    #[test]
    fn test_naive_datetime_is_taken_as_jst() {
        let stamp = normalize("date", "2024-03-10T09:15:00").unwrap();
        assert_eq!(stamp.date, date(2024, 3, 10));
        assert_eq!(stamp.time_string().as_deref(), Some("09:15"));

        let stamp = normalize("date", "2024-03-10 09:15:00").unwrap();
        assert_eq!(stamp.time_string().as_deref(), Some("09:15"));
    }

    #[test]
    fn test_bare_date_means_all_day() {
        let stamp = normalize("date", "2024-12-31").unwrap();
        assert_eq!(stamp.date, date(2024, 12, 31));
        assert_eq!(stamp.time, None);
    }

    #[test]
    fn test_unparsable_input_names_the_field() {
        for bad in ["", "tomorrow", "2024/03/10", "2024-13-40T00:00:00Z"] {
            match normalize("enddate", bad) {
                Err(AppError::UnparsableDateTime(field)) => assert_eq!(field, "enddate"),
                other => panic!("expected UnparsableDateTime for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_range_normalizes_endpoints_independently() {
        let (start, end) = normalize_range(
            "startdate",
            "2024-05-01T09:00:00+09:00",
            "enddate",
            "2024-05-01T00:00:00+09:00",
        )
        .unwrap();
        assert_eq!(start.time_string().as_deref(), Some("09:00"));
        // End before start is accepted; endpoints are independent.
        assert_eq!(end.date, date(2024, 5, 1));
        assert_eq!(end.time, None);
    }

    #[test]
    fn test_time_string_zero_pads() {
        let stamp = normalize("date", "2024-03-10T07:05:00+09:00").unwrap();
        assert_eq!(stamp.time_string().as_deref(), Some("07:05"));
    }
}
