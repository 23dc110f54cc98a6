//! Time-picker helpers for schedule entry forms.
//!
//! Optional layer on top of [`crate::minutes`]: it snaps picked times to the
//! form's granularity and fills in a default end time. Nothing in
//! [`crate::normalize`] depends on it.

use serde::Serialize;

use crate::minutes::{add_minutes, format_time_of_day, MINUTES_PER_DAY};

/// Picker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOptions {
    /// Step between selectable times, in minutes. Zero is treated as one.
    pub granularity_minutes: u16,
    /// Length of a new window when only its start has been picked.
    pub default_duration_minutes: u16,
}

impl Default for SlotOptions {
    fn default() -> Self {
        Self {
            granularity_minutes: 30,
            default_duration_minutes: 60,
        }
    }
}

impl SlotOptions {
    fn step(&self) -> u16 {
        self.granularity_minutes.max(1)
    }
}

/// A selectable time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeOption {
    pub minute: u16,
    /// `HH:MM`
    pub label: String,
}

/// Round `minute` down to the nearest slot boundary, wrapping past midnight.
pub fn snap_to_slot(minute: u16, options: &SlotOptions) -> u16 {
    let minute = minute % MINUTES_PER_DAY;
    minute - minute % options.step()
}

/// End time for a window starting at `start`, wrapping past midnight.
pub fn default_end(start: u16, options: &SlotOptions) -> u16 {
    add_minutes(start, i32::from(options.default_duration_minutes))
}

/// Every selectable time of day, earliest first.
pub fn time_options(options: &SlotOptions) -> Vec<TimeOption> {
    (0..MINUTES_PER_DAY)
        .step_by(usize::from(options.step()))
        .map(|minute| TimeOption {
            minute,
            label: format_time_of_day(minute),
        })
        .collect()
}
