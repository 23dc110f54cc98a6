//! Minute-of-day and day-of-week primitives.
//!
//! Minutes are counted from local midnight in whatever frame the caller is
//! working in. Days of the week use the Sunday = 0 convention shared with
//! the stored schedule records.

use chrono::{NaiveTime, Timelike, Weekday};

use crate::error::WindowError;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Days in one week.
pub const DAYS_PER_WEEK: u8 = 7;

/// Add `delta` minutes to `base`, wrapping around midnight.
///
/// The result is always in `0..1440`, also for negative `delta`.
///
/// # Examples
///
/// ```
/// use weekly_window::minutes::add_minutes;
///
/// assert_eq!(add_minutes(1410, 60), 30);
/// assert_eq!(add_minutes(30, -60), 1410);
/// ```
pub fn add_minutes(base: u16, delta: i32) -> u16 {
    (i32::from(base) + delta).rem_euclid(i32::from(MINUTES_PER_DAY)) as u16
}

/// Minute of day of a wall-clock time. Seconds are dropped.
pub fn minute_of_day<T: Timelike>(t: &T) -> u16 {
    (t.hour() * 60 + t.minute()) as u16
}

/// Wall-clock time for a minute of day, or `None` past the end of the day.
pub fn time_of_day(minute: u16) -> Option<NaiveTime> {
    if minute >= MINUTES_PER_DAY {
        return None;
    }
    NaiveTime::from_hms_opt(u32::from(minute / 60), u32::from(minute % 60), 0)
}

/// Format a minute of day as `HH:MM`. Values past midnight wrap.
pub fn format_time_of_day(minute: u16) -> String {
    let minute = minute % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Parse a time of day into minutes since midnight.
///
/// Accepts 24-hour `"14:30"` and 12-hour `"2:30pm"`, `"2pm"`, `"12am"`.
///
/// # Errors
///
/// Returns [`WindowError::InvalidTimeOfDay`] for anything else.
pub fn parse_time_of_day(s: &str) -> Result<u16, WindowError> {
    parse_time(s)
        .map(|t| minute_of_day(&t))
        .ok_or_else(|| WindowError::InvalidTimeOfDay(format!("'{}'", s.trim())))
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim().to_lowercase();

    if let Ok(t) = NaiveTime::parse_from_str(&s, "%H:%M") {
        return Some(t);
    }

    let s = s.replace(' ', "");
    let (time_part, is_pm) = if let Some(rest) = s.strip_suffix("pm") {
        (rest, true)
    } else if let Some(rest) = s.strip_suffix("am") {
        (rest, false)
    } else {
        return None;
    };

    let (hour, minute) = match time_part.split_once(':') {
        Some((h, m)) => (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?),
        None => (time_part.parse::<u32>().ok()?, 0),
    };
    if !(1..=12).contains(&hour) {
        return None;
    }

    let hour24 = match (hour, is_pm) {
        (12, true) => 12,
        (12, false) => 0,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour24, minute, 0)
}

/// Weekday for a day index, Sunday = 0.
pub fn weekday_from_index(day: u8) -> Option<Weekday> {
    match day {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Day index of a weekday, Sunday = 0.
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}
