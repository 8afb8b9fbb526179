use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::models::Event;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// An event is past once its end lies strictly before `now`.
pub fn is_past(event: &Event, now: DateTime<Utc>) -> bool {
    event.end_date < now
}

/// Compact "3h ago" style label. The largest non-zero bucket wins.
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds();

    let buckets = [
        (YEAR, "y"),
        (MONTH, "mo"),
        (DAY, "d"),
        (HOUR, "h"),
        (MINUTE, "m"),
    ];

    for (size, unit) in buckets {
        let count = seconds / size;
        if count >= 1 {
            return format!("{}{} ago", count, unit);
        }
    }

    "just now".to_string()
}

/// "Oct 18, 07:00 PM"
pub fn format_stamp(dt: DateTime<Utc>) -> String {
    dt.format("%b %-d, %I:%M %p").to_string()
}

/// "Oct 18"
pub fn format_short_date(dt: DateTime<Utc>) -> String {
    dt.format("%b %-d").to_string()
}

/// "Sat, Oct 25"
pub fn format_card_date(dt: DateTime<Utc>) -> String {
    dt.format("%a, %b %-d").to_string()
}

/// "Saturday, October 25"
pub fn format_long_date(dt: DateTime<Utc>) -> String {
    dt.format("%A, %B %-d").to_string()
}

/// "07:00 PM"
pub fn format_clock(dt: DateTime<Utc>) -> String {
    dt.format("%I:%M %p").to_string()
}

pub fn format_time_range(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!("{} - {}", format_clock(start), format_clock(end))
}

/// "April 2023"
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Combine the `YYYY-MM-DD` and `HH:MM[:SS]` values an HTML date/time input submits.
pub fn parse_form_datetime(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let time = time.trim();
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()?;
    Some(date.and_time(time).and_utc())
}
