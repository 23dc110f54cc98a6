//! Error types for weekly-window operations.
//!
//! The conversions themselves never fail. These errors come from the
//! validation layer callers run before converting, and from timezone lookup.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Invalid day of week: {0} (expected 0-6, 0 = Sunday)")]
    InvalidDayOfWeek(u8),

    #[error("Invalid minute of day: {0} (expected 0-1439)")]
    InvalidMinuteOfDay(u16),

    #[error("Zero-duration window: start and end are both {0}")]
    ZeroDurationWindow(u16),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid UTC offset: {0} minutes")]
    InvalidOffset(i32),

    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),
}

pub type Result<T> = std::result::Result<T, WindowError>;
