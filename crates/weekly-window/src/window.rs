//! The weekly window value type and its stored-record form.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::WindowError;
use crate::minutes::{format_time_of_day, weekday_from_index, DAYS_PER_WEEK, MINUTES_PER_DAY};

/// A recurring weekly window: a day of the week plus start and end minutes.
///
/// The same shape describes a window in the viewer's local frame and in UTC.
/// Which frame a value belongs to is a naming convention at the boundary.
///
/// A window whose end is at or before its start *wraps*: the end falls on the
/// calendar day after the start (`23:00-01:00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeeklyWindow {
    /// Day of the week of the start, 0 = Sunday through 6 = Saturday.
    pub day_of_week: u8,
    /// Start, in minutes after midnight (0-1439).
    pub start_minute: u16,
    /// End, in minutes after midnight (0-1439).
    pub end_minute: u16,
}

impl WeeklyWindow {
    /// Build a window without checking it.
    pub const fn new(day_of_week: u8, start_minute: u16, end_minute: u16) -> Self {
        Self {
            day_of_week,
            start_minute,
            end_minute,
        }
    }

    /// Build a window, rejecting anything [`validate`](Self::validate) rejects.
    pub fn try_new(day_of_week: u8, start_minute: u16, end_minute: u16) -> Result<Self, WindowError> {
        let window = Self::new(day_of_week, start_minute, end_minute);
        window.validate()?;
        Ok(window)
    }

    /// Check the window before handing it to a conversion.
    ///
    /// # Errors
    ///
    /// - [`WindowError::InvalidDayOfWeek`] if the day is outside 0-6
    /// - [`WindowError::InvalidMinuteOfDay`] if start or end is outside 0-1439
    ///   (start is reported first)
    /// - [`WindowError::ZeroDurationWindow`] if start equals end
    pub fn validate(&self) -> Result<(), WindowError> {
        if self.day_of_week >= DAYS_PER_WEEK {
            return Err(WindowError::InvalidDayOfWeek(self.day_of_week));
        }
        for minute in [self.start_minute, self.end_minute] {
            if minute >= MINUTES_PER_DAY {
                return Err(WindowError::InvalidMinuteOfDay(minute));
            }
        }
        if self.start_minute == self.end_minute {
            return Err(WindowError::ZeroDurationWindow(self.start_minute));
        }
        Ok(())
    }

    /// Whether the end falls on the day after the start.
    pub fn wraps(&self) -> bool {
        self.end_minute <= self.start_minute
    }

    /// Length in minutes, counted across midnight for wrapping windows.
    pub fn duration_minutes(&self) -> u16 {
        let span = i32::from(self.end_minute) - i32::from(self.start_minute);
        span.rem_euclid(i32::from(MINUTES_PER_DAY)) as u16
    }

    /// The start weekday, if `day_of_week` is in range.
    pub fn weekday(&self) -> Option<Weekday> {
        weekday_from_index(self.day_of_week)
    }
}

impl fmt::Display for WeeklyWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weekday() {
            Some(weekday) => write!(f, "{weekday}")?,
            None => write!(f, "day {}", self.day_of_week)?,
        }
        write!(
            f,
            " {}-{}",
            format_time_of_day(self.start_minute),
            format_time_of_day(self.end_minute)
        )
    }
}

/// A schedule window as persisted and exchanged with the schedules API.
///
/// Always in the UTC frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcScheduleRecord {
    pub day_of_week_utc: u8,
    pub start_minutes_utc: u16,
    pub end_minutes_utc: u16,
}

impl From<WeeklyWindow> for UtcScheduleRecord {
    fn from(w: WeeklyWindow) -> Self {
        Self {
            day_of_week_utc: w.day_of_week,
            start_minutes_utc: w.start_minute,
            end_minutes_utc: w.end_minute,
        }
    }
}

impl From<UtcScheduleRecord> for WeeklyWindow {
    fn from(r: UtcScheduleRecord) -> Self {
        Self::new(r.day_of_week_utc, r.start_minutes_utc, r.end_minutes_utc)
    }
}
