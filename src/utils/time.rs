//! Time helpers for feed timestamps.
//!
//! Feeds report publication times in RFC 2822 (classic RSS) or RFC 3339
//! (Atom and most JSON feeds). Items are shown with a compact relative
//! timestamp that degrades to an absolute date for old entries.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;

/// Parse a feed timestamp.
///
/// Tries RFC 2822 first (RSS `pubDate`), then RFC 3339.
///
/// # Arguments
/// * `raw` - The timestamp text as it appeared in the feed
///
/// # Returns
/// The parsed instant in UTC, or `None` when the text matches neither
/// format.
pub fn parse_feed_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    None
}

/// Render the distance between two instants as compact relative text.
///
/// Durations under a minute read "Ns ago", under an hour "Nm ago", under a
/// day "Nh ago", and under thirty days "Nd ago". Anything older falls back
/// to the absolute date. Instants in the future read "just now" rather than
/// a negative count, since feeds occasionally post-date items.
///
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < 0 {
        return "just now".to_string();
    }
    if seconds < MINUTE {
        format!("{}s ago", seconds)
    } else if seconds < HOUR {
        format!("{}m ago", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{}h ago", seconds / HOUR)
    } else if seconds < MONTH {
        format!("{}d ago", seconds / DAY)
    } else {
        then.format("%Y-%m-%d").to_string()
    }
}

/// Humanize a raw feed timestamp relative to `now`.
///
/// Unparseable input passes through untouched so the item still shows
/// whatever the feed sent.
///
/// # Arguments
/// * `raw` - The timestamp text as it appeared in the feed
/// * `now` - The instant to measure against
///
pub fn humanize_pub_date(raw: &str, now: DateTime<Utc>) -> String {
    match parse_feed_date(raw) {
        Some(then) => format_relative(then, now),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_feed_date_rfc_2822() {
        let parsed = parse_feed_date("Fri, 10 May 2024 09:30:00 GMT").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 10, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_feed_date_rfc_3339() {
        let parsed = parse_feed_date("2024-05-10T09:30:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 10, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_feed_date_normalizes_offsets() {
        let parsed = parse_feed_date("2024-05-10T11:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 10, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_feed_date_rejects_garbage() {
        assert!(parse_feed_date("last thursday").is_none());
        assert!(parse_feed_date("").is_none());
    }

    #[test]
    fn test_format_relative_seconds() {
        let now = reference_now();
        assert_eq!(format_relative(now, now), "0s ago");
        assert_eq!(format_relative(now - Duration::seconds(59), now), "59s ago");
    }

    #[test]
    fn test_format_relative_minutes() {
        let now = reference_now();
        assert_eq!(format_relative(now - Duration::seconds(60), now), "1m ago");
        assert_eq!(format_relative(now - Duration::minutes(59), now), "59m ago");
    }

    #[test]
    fn test_format_relative_hours() {
        let now = reference_now();
        assert_eq!(format_relative(now - Duration::minutes(60), now), "1h ago");
        assert_eq!(format_relative(now - Duration::hours(23), now), "23h ago");
    }

    #[test]
    fn test_format_relative_days() {
        let now = reference_now();
        assert_eq!(format_relative(now - Duration::hours(24), now), "1d ago");
        assert_eq!(format_relative(now - Duration::days(29), now), "29d ago");
    }

    #[test]
    fn test_format_relative_falls_back_to_absolute_date() {
        let now = reference_now();
        assert_eq!(format_relative(now - Duration::days(30), now), "2024-04-10");
        assert_eq!(format_relative(now - Duration::days(400), now), "2023-04-06");
    }

    #[test]
    fn test_format_relative_future_reads_just_now() {
        let now = reference_now();
        assert_eq!(format_relative(now + Duration::seconds(90), now), "just now");
    }

    #[test]
    fn test_humanize_pub_date_parses_and_formats() {
        let now = reference_now();
        assert_eq!(
            humanize_pub_date("Fri, 10 May 2024 10:00:00 GMT", now),
            "2h ago"
        );
    }

    #[test]
    fn test_humanize_pub_date_passes_garbage_through() {
        let now = reference_now();
        assert_eq!(humanize_pub_date("sometime soon", now), "sometime soon");
    }
}
