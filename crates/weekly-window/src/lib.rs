//! # weekly-window
//!
//! Normalization of recurring weekly schedule windows.
//!
//! Activity schedules are entered as "every Tuesday 23:00-01:00" in the
//! organizer's local timezone and stored canonically as a UTC day of week
//! plus UTC minutes of day. Converting between the two is not a plain
//! timestamp conversion: an evening class can move to the next UTC day, and
//! a Saturday-night class can move into Sunday, across the week boundary.
//!
//! ## Modules
//!
//! - [`window`] — [`WeeklyWindow`], caller-side validation, stored record form
//! - [`normalize`] — [`to_utc`] / [`to_local`], anchor dates, [`Normalizer`]
//! - [`minutes`] — minute-of-day and day-of-week primitives
//! - [`slots`] — optional time-picker helpers for entry forms
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use weekly_window::{Normalizer, WeeklyWindow};
//!
//! let now = Utc.with_ymd_and_hms(2026, 7, 15, 12, 0, 0).unwrap();
//! let normalizer = Normalizer::for_timezone("America/New_York", now).unwrap();
//!
//! let local = WeeklyWindow::try_new(2, 23 * 60, 60).unwrap();
//! let utc = normalizer.to_utc(local);
//! assert_eq!(utc, WeeklyWindow::new(3, 3 * 60, 5 * 60));
//! assert_eq!(normalizer.to_local(utc), local);
//! ```

pub mod error;
pub mod minutes;
pub mod normalize;
pub mod slots;
pub mod window;

pub use error::{Result, WindowError};
pub use minutes::add_minutes;
pub use normalize::{
    anchor_date, occurrence, offset_from_minutes, resolve_offset, to_local, to_utc, Normalizer,
    Occurrence,
};
pub use slots::{default_end, snap_to_slot, time_options, SlotOptions, TimeOption};
pub use window::{UtcScheduleRecord, WeeklyWindow};
