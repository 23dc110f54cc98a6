//! Conversion of weekly windows between a local frame and UTC.
//!
//! A weekly window has no date, so it cannot be handed to an instant-based
//! timezone conversion directly. Each conversion first picks an *anchor
//! date*: a concrete date in the source frame carrying the window's weekday,
//! taken from the week that contains the reference instant. The start and end
//! are placed on that date (the end on the following day when the window
//! wraps), both instants are moved into the target frame, and the weekday and
//! minutes of day are read back off them. The anchor date itself is thrown
//! away.
//!
//! All functions take the reference instant explicitly; nothing here reads
//! the system clock.
//!
//! # Daylight saving
//!
//! The local frame is a single fixed UTC offset per call. When a
//! [`Normalizer`] is built from an IANA timezone, the offset is the one in
//! effect at the reference instant. Stored schedules are therefore **not**
//! DST-aware: a window saved in UTC during summer time reads one hour off
//! when converted back with a winter reference. Converting with the same
//! offset in both directions always round-trips exactly.
//!
//! Offsets are used in whole minutes. Seconds in an offset (the local mean
//! time some IANA zones carry for historical instants) are truncated toward
//! zero before any conversion.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::debug;

use crate::error::WindowError;
use crate::minutes::{minute_of_day, weekday_index};
use crate::window::WeeklyWindow;

// ── Anchor dates ────────────────────────────────────────────────────────────

/// A date falling on `day_of_week` (Sunday = 0) in the week containing `now`.
///
/// Both "today" and the current weekday are read from `now` in its own
/// timezone, so the frame of the result is the frame of `now`. The result may
/// lie in the past; only its weekday matters. Near the ends of the
/// representable date range the result moves one week toward the middle.
///
/// # Examples
///
/// ```
/// use chrono::{Datelike, TimeZone, Utc, Weekday};
/// use weekly_window::normalize::anchor_date;
///
/// // Wednesday, February 18 2026
/// let now = Utc.with_ymd_and_hms(2026, 2, 18, 15, 0, 0).unwrap();
/// let monday = anchor_date(1, &now);
/// assert_eq!(monday.weekday(), Weekday::Mon);
/// assert_eq!(monday.day(), 16);
/// ```
pub fn anchor_date<Z: TimeZone>(day_of_week: u8, now: &DateTime<Z>) -> NaiveDate {
    let today = now.date_naive();
    let delta = i64::from(day_of_week) - i64::from(weekday_index(now.weekday()));
    [delta, delta - 7, delta + 7]
        .into_iter()
        .find_map(|days| today.checked_add_signed(Duration::days(days)))
        .unwrap_or(today)
}

// ── Conversions ─────────────────────────────────────────────────────────────

/// Convert a window entered in the local frame to its UTC form.
///
/// `offset` is the local frame's offset from UTC, `reference` picks the
/// anchor week. Never fails and performs no validation; run
/// [`WeeklyWindow::validate`] on user input first.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use weekly_window::{to_utc, WeeklyWindow};
///
/// let reference = Utc.with_ymd_and_hms(2026, 2, 18, 15, 0, 0).unwrap();
/// let eastern_daylight = FixedOffset::west_opt(4 * 3600).unwrap();
///
/// // Tuesday 23:00-01:00 at UTC-4 is Wednesday 03:00-05:00 UTC.
/// let utc = to_utc(WeeklyWindow::new(2, 1380, 60), eastern_daylight, reference);
/// assert_eq!(utc, WeeklyWindow::new(3, 180, 300));
/// ```
pub fn to_utc(local: WeeklyWindow, offset: FixedOffset, reference: DateTime<Utc>) -> WeeklyWindow {
    let utc = convert(local, offset, Utc.fix(), reference);
    debug!(%local, %utc, %offset, "converted local window to UTC");
    utc
}

/// Convert a stored UTC window to the local frame.
///
/// The inverse of [`to_utc`]: for any valid local window `w`,
/// `to_local(to_utc(w, offset, r), offset, r) == w`.
pub fn to_local(utc: WeeklyWindow, offset: FixedOffset, reference: DateTime<Utc>) -> WeeklyWindow {
    let local = convert(utc, Utc.fix(), offset, reference);
    debug!(%utc, %local, %offset, "converted UTC window to local");
    local
}

/// Move a window from one frame to another through its anchored occurrence.
fn convert(
    window: WeeklyWindow,
    from: FixedOffset,
    to: FixedOffset,
    reference: DateTime<Utc>,
) -> WeeklyWindow {
    let to = whole_minutes(to);
    let Occurrence { start, end } = occurrence(window, from, reference);
    let start = start.with_timezone(&to);
    let end = end.with_timezone(&to);

    WeeklyWindow {
        day_of_week: weekday_index(start.weekday()),
        start_minute: minute_of_day(&start),
        end_minute: minute_of_day(&end),
    }
}

// ── Occurrences ─────────────────────────────────────────────────────────────

/// One concrete meeting of a weekly window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// Start instant, expressed in the window's frame.
    pub start: DateTime<FixedOffset>,
    /// End instant, on the day after `start` when the window wraps.
    pub end: DateTime<FixedOffset>,
}

impl Occurrence {
    /// Length of this occurrence.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// The occurrence of `window` in the week containing `reference`.
///
/// `frame` is the offset the window's day and minutes are expressed in (use
/// UTC's zero offset for stored windows), truncated to whole minutes.
/// References within a year of the representable range are pulled in by
/// that year, so the occurrence may fall in a different week.
pub fn occurrence(
    window: WeeklyWindow,
    frame: FixedOffset,
    reference: DateTime<Utc>,
) -> Occurrence {
    let frame = whole_minutes(frame);
    let wraps = window.start_minute > window.end_minute;
    let reference = clamp_reference(reference);
    let base = anchor_date(window.day_of_week, &reference.with_timezone(&frame));

    Occurrence {
        start: at_minute(base, 0, window.start_minute, frame),
        end: at_minute(base, i64::from(wraps), window.end_minute, frame),
    }
}

/// The instant `minute` minutes into the day `days` after `base`, in `frame`.
fn at_minute(base: NaiveDate, days: i64, minute: u16, frame: FixedOffset) -> DateTime<FixedOffset> {
    let local = base.and_time(NaiveTime::default())
        + Duration::days(days)
        + Duration::minutes(i64::from(minute));
    let utc = local - Duration::seconds(i64::from(frame.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc, frame)
}

/// Keep `reference` far enough from the representable range that every
/// instant built from it (up to 255 days of anchor shift, 45 days of minutes,
/// one wrap day and one day of offset) stays in range.
fn clamp_reference(reference: DateTime<Utc>) -> DateTime<Utc> {
    let margin = Duration::days(366);
    match (
        DateTime::<Utc>::MIN_UTC.checked_add_signed(margin),
        DateTime::<Utc>::MAX_UTC.checked_sub_signed(margin),
    ) {
        (Some(earliest), Some(latest)) => reference.clamp(earliest, latest),
        _ => reference,
    }
}

// ── Offsets ─────────────────────────────────────────────────────────────────

/// A fixed offset from a count of minutes east of UTC (`-240` is UTC-4).
///
/// # Errors
///
/// Returns [`WindowError::InvalidOffset`] unless the offset is strictly
/// within one day of UTC.
pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, WindowError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(WindowError::InvalidOffset(minutes))
}

/// The UTC offset an IANA timezone has at the instant `at`, in whole minutes.
///
/// Local mean time offsets such as New York's `-04:56:02` before 1883 are
/// truncated toward zero (`-04:56`).
///
/// # Errors
///
/// Returns [`WindowError::InvalidTimezone`] if `timezone` is not a known
/// IANA timezone name.
pub fn resolve_offset(timezone: &str, at: DateTime<Utc>) -> Result<FixedOffset, WindowError> {
    let tz = parse_timezone(timezone)?;
    let offset = whole_minutes(tz.offset_from_utc_datetime(&at.naive_utc()).fix());
    debug!(timezone, %offset, %at, "resolved timezone offset");
    Ok(offset)
}

/// `offset` with its seconds dropped, truncating toward zero.
fn whole_minutes(offset: FixedOffset) -> FixedOffset {
    let seconds = offset.local_minus_utc();
    FixedOffset::east_opt(seconds - seconds % 60).unwrap_or(offset)
}

fn parse_timezone(s: &str) -> Result<Tz, WindowError> {
    s.parse::<Tz>()
        .map_err(|_| WindowError::InvalidTimezone(format!("'{}'", s)))
}

// ── Normalizer ──────────────────────────────────────────────────────────────

/// A local frame and reference instant, bundled for repeated conversions.
///
/// Servers build one per request from the viewer's timezone and the request
/// time; the conversions then work the same no matter which zone the process
/// itself runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    offset: FixedOffset,
    reference: DateTime<Utc>,
}

impl Normalizer {
    /// A normalizer for `offset`, truncated to whole minutes.
    pub fn new(offset: FixedOffset, reference: DateTime<Utc>) -> Self {
        Self {
            offset: whole_minutes(offset),
            reference,
        }
    }

    /// A normalizer for a fixed offset given in minutes east of UTC.
    pub fn fixed(offset_minutes: i32, reference: DateTime<Utc>) -> Result<Self, WindowError> {
        Ok(Self::new(offset_from_minutes(offset_minutes)?, reference))
    }

    /// A normalizer for an IANA timezone, using its offset at `reference`.
    pub fn for_timezone(timezone: &str, reference: DateTime<Utc>) -> Result<Self, WindowError> {
        Ok(Self::new(resolve_offset(timezone, reference)?, reference))
    }

    /// The local frame's offset from UTC.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The instant whose week anchors every conversion.
    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    /// See [`to_utc`](fn@to_utc).
    pub fn to_utc(&self, local: WeeklyWindow) -> WeeklyWindow {
        to_utc(local, self.offset, self.reference)
    }

    /// See [`to_local`](fn@to_local).
    pub fn to_local(&self, utc: WeeklyWindow) -> WeeklyWindow {
        to_local(utc, self.offset, self.reference)
    }

    /// Validate a user-entered local window, then convert it.
    pub fn to_utc_checked(&self, local: WeeklyWindow) -> Result<WeeklyWindow, WindowError> {
        local.validate()?;
        Ok(self.to_utc(local))
    }

    /// Validate a stored UTC window, then convert it.
    pub fn to_local_checked(&self, utc: WeeklyWindow) -> Result<WeeklyWindow, WindowError> {
        utc.validate()?;
        Ok(self.to_local(utc))
    }

    /// The reference week's occurrence of a local window.
    pub fn local_occurrence(&self, local: WeeklyWindow) -> Occurrence {
        occurrence(local, self.offset, self.reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    /// Wednesday, February 18 2026, 15:00 UTC.
    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 18, 15, 0, 0).unwrap()
    }

    fn offset(minutes: i32) -> FixedOffset {
        offset_from_minutes(minutes).unwrap()
    }

    // ── anchor_date ─────────────────────────────────────────────────────

    #[test]
    fn test_anchor_date_same_week() {
        let now = reference();
        assert_eq!(anchor_date(3, &now), NaiveDate::from_ymd_opt(2026, 2, 18).unwrap());
        assert_eq!(anchor_date(0, &now), NaiveDate::from_ymd_opt(2026, 2, 15).unwrap());
        assert_eq!(anchor_date(6, &now), NaiveDate::from_ymd_opt(2026, 2, 21).unwrap());
    }

    #[test]
    fn test_anchor_date_reads_today_in_own_frame() {
        // 02:00 UTC Thursday is still Wednesday 22:00 at UTC-4.
        let utc_now = Utc.with_ymd_and_hms(2026, 2, 19, 2, 0, 0).unwrap();
        let local_now = utc_now.with_timezone(&offset(-240));

        assert_eq!(anchor_date(4, &utc_now), NaiveDate::from_ymd_opt(2026, 2, 19).unwrap());
        assert_eq!(anchor_date(4, &local_now), NaiveDate::from_ymd_opt(2026, 2, 19).unwrap());
        assert_eq!(anchor_date(3, &local_now), NaiveDate::from_ymd_opt(2026, 2, 18).unwrap());
    }

    #[test]
    fn test_anchor_date_always_has_target_weekday() {
        let frames = [offset(-600), offset(-240), offset(0), offset(330), offset(600)];
        for hour in 0..(24 * 7) {
            let now = reference() + Duration::hours(hour);
            for frame in frames {
                let now = now.with_timezone(&frame);
                for day in 0..7u8 {
                    let date = anchor_date(day, &now);
                    assert_eq!(weekday_index(date.weekday()), day, "now={now} day={day}");
                }
            }
        }
    }

    // ── to_utc ──────────────────────────────────────────────────────────

    #[test]
    fn test_to_utc_same_day_no_wrap() {
        let utc = to_utc(WeeklyWindow::new(1, 540, 600), offset(-240), reference());
        assert_eq!(utc, WeeklyWindow::new(1, 780, 840));
    }

    #[test]
    fn test_to_utc_overnight_wrap() {
        let utc = to_utc(WeeklyWindow::new(2, 1380, 60), offset(-240), reference());
        assert_eq!(utc, WeeklyWindow::new(3, 180, 300));
    }

    #[test]
    fn test_to_utc_week_rollover_saturday_to_sunday() {
        // Saturday 23:30 at UTC-10 is Sunday 09:30 UTC.
        let utc = to_utc(WeeklyWindow::new(6, 1410, 30), offset(-600), reference());
        assert_eq!(utc, WeeklyWindow::new(0, 570, 630));
    }

    #[test]
    fn test_to_utc_week_rollover_sunday_to_saturday() {
        // Sunday 00:30 at UTC+10 is Saturday 14:30 UTC.
        let utc = to_utc(WeeklyWindow::new(0, 30, 90), offset(600), reference());
        assert_eq!(utc, WeeklyWindow::new(6, 870, 930));
    }

    #[test]
    fn test_to_utc_local_wrap_can_become_plain_utc_window() {
        // Saturday 23:30-00:30 at UTC+10 is Saturday 13:30-14:30 UTC.
        let utc = to_utc(WeeklyWindow::new(6, 1410, 30), offset(600), reference());
        assert_eq!(utc, WeeklyWindow::new(6, 810, 870));
        assert!(!utc.wraps());
    }

    #[test]
    fn test_to_utc_zero_offset_is_identity() {
        let w = WeeklyWindow::new(4, 1000, 200);
        assert_eq!(to_utc(w, offset(0), reference()), w);
    }

    #[test]
    fn test_to_utc_half_hour_offset() {
        // India, UTC+5:30: Monday 03:00 local is Sunday 21:30 UTC.
        let utc = to_utc(WeeklyWindow::new(1, 180, 240), offset(330), reference());
        assert_eq!(utc, WeeklyWindow::new(0, 1290, 1350));
    }

    #[test]
    fn test_to_utc_independent_of_reference_time_of_day() {
        let local = WeeklyWindow::new(2, 1380, 60);
        for hour in 0..(24 * 7) {
            let reference = reference() + Duration::hours(hour);
            assert_eq!(
                to_utc(local, offset(-240), reference),
                WeeklyWindow::new(3, 180, 300),
                "reference={reference}"
            );
        }
    }

    // ── to_local ────────────────────────────────────────────────────────

    #[test]
    fn test_to_local_inverts_examples() {
        let cases = [
            (WeeklyWindow::new(1, 540, 600), -240),
            (WeeklyWindow::new(2, 1380, 60), -240),
            (WeeklyWindow::new(6, 1410, 30), -600),
            (WeeklyWindow::new(0, 30, 90), 600),
            (WeeklyWindow::new(6, 1410, 30), 600),
        ];
        for (local, minutes) in cases {
            let utc = to_utc(local, offset(minutes), reference());
            assert_eq!(to_local(utc, offset(minutes), reference()), local, "{local}");
        }
    }

    #[test]
    fn test_to_local_utc_wrap() {
        // Saturday 22:00-02:00 UTC is Sunday 08:00-12:00 at UTC+10.
        let local = to_local(WeeklyWindow::new(6, 1320, 120), offset(600), reference());
        assert_eq!(local, WeeklyWindow::new(0, 480, 720));
    }

    #[test]
    fn test_round_trip_with_different_references() {
        let local = WeeklyWindow::new(5, 1200, 30);
        let later = reference() + Duration::days(40) + Duration::hours(7);
        let utc = to_utc(local, offset(-420), reference());
        assert_eq!(to_local(utc, offset(-420), later), local);
    }

    // ── occurrence ──────────────────────────────────────────────────────

    #[test]
    fn test_occurrence_places_end_on_next_day_when_wrapping() {
        let frame = offset(-240);
        let occ = occurrence(WeeklyWindow::new(2, 1380, 60), frame, reference());
        let expected_start = frame.with_ymd_and_hms(2026, 2, 17, 23, 0, 0).unwrap();
        let expected_end = frame.with_ymd_and_hms(2026, 2, 18, 1, 0, 0).unwrap();
        assert_eq!(occ.start, expected_start);
        assert_eq!(occ.end, expected_end);
        assert_eq!(occ.duration(), Duration::hours(2));
    }

    #[test]
    fn test_occurrence_plain_window_same_day() {
        let occ = occurrence(WeeklyWindow::new(1, 540, 600), Utc.fix(), reference());
        assert_eq!(occ.start.weekday(), Weekday::Mon);
        assert_eq!(occ.end.date_naive(), occ.start.date_naive());
        assert_eq!(occ.duration(), Duration::minutes(60));
    }

    // ── offsets ─────────────────────────────────────────────────────────

    #[test]
    fn test_offset_from_minutes() {
        assert_eq!(offset_from_minutes(-240).unwrap().local_minus_utc(), -4 * 3600);
        assert_eq!(offset_from_minutes(1439).unwrap().local_minus_utc(), 1439 * 60);
    }

    #[test]
    fn test_offset_from_minutes_rejects_out_of_range() {
        assert_eq!(offset_from_minutes(1440), Err(WindowError::InvalidOffset(1440)));
        assert_eq!(offset_from_minutes(-1440), Err(WindowError::InvalidOffset(-1440)));
        assert_eq!(
            offset_from_minutes(i32::MAX),
            Err(WindowError::InvalidOffset(i32::MAX))
        );
    }

    #[test]
    fn test_resolve_offset_follows_dst() {
        let summer = Utc.with_ymd_and_hms(2026, 7, 15, 12, 0, 0).unwrap();
        let winter = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(
            resolve_offset("America/New_York", summer).unwrap(),
            offset(-240)
        );
        assert_eq!(
            resolve_offset("America/New_York", winter).unwrap(),
            offset(-300)
        );
    }

    #[test]
    fn test_resolve_offset_invalid_timezone() {
        let err = resolve_offset("Invalid/Zone", reference()).unwrap_err();
        assert!(err.to_string().contains("Invalid timezone"), "got: {err}");
    }

    // ── Normalizer ──────────────────────────────────────────────────────

    #[test]
    fn test_normalizer_for_timezone() {
        let summer = Utc.with_ymd_and_hms(2026, 7, 15, 12, 0, 0).unwrap();
        let n = Normalizer::for_timezone("America/New_York", summer).unwrap();
        assert_eq!(n.offset(), offset(-240));
        assert_eq!(n.reference(), summer);
        assert_eq!(
            n.to_utc(WeeklyWindow::new(2, 1380, 60)),
            WeeklyWindow::new(3, 180, 300)
        );
    }

    #[test]
    fn test_normalizer_is_not_dst_aware() {
        let summer = Utc.with_ymd_and_hms(2026, 7, 15, 12, 0, 0).unwrap();
        let winter = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let local = WeeklyWindow::new(1, 540, 600);

        let stored = Normalizer::for_timezone("America/New_York", summer)
            .unwrap()
            .to_utc(local);
        let shown = Normalizer::for_timezone("America/New_York", winter)
            .unwrap()
            .to_local(stored);
        assert_eq!(shown, WeeklyWindow::new(1, 480, 540));
    }

    #[test]
    fn test_normalizer_fixed_rejects_bad_offset() {
        assert!(Normalizer::fixed(2000, reference()).is_err());
    }

    #[test]
    fn test_normalizer_checked_rejects_zero_duration() {
        let n = Normalizer::fixed(-240, reference()).unwrap();
        for day in 0..7 {
            assert_eq!(
                n.to_utc_checked(WeeklyWindow::new(day, 600, 600)),
                Err(WindowError::ZeroDurationWindow(600))
            );
        }
        assert_eq!(
            n.to_local_checked(WeeklyWindow::new(8, 0, 60)),
            Err(WindowError::InvalidDayOfWeek(8))
        );
    }

    #[test]
    fn test_normalizer_checked_converts_valid_input() {
        let n = Normalizer::fixed(-240, reference()).unwrap();
        let utc = n.to_utc_checked(WeeklyWindow::new(1, 540, 600)).unwrap();
        assert_eq!(utc, WeeklyWindow::new(1, 780, 840));
        assert_eq!(n.to_local_checked(utc).unwrap(), WeeklyWindow::new(1, 540, 600));
    }

    #[test]
    fn test_normalizer_local_occurrence() {
        let n = Normalizer::fixed(-240, reference()).unwrap();
        let occ = n.local_occurrence(WeeklyWindow::new(1, 540, 600));
        assert_eq!(occ.start.offset().local_minus_utc(), -4 * 3600);
        assert_eq!(occ.start.weekday(), Weekday::Mon);
    }

    // ── offsets with seconds ────────────────────────────────────────────

    /// New York local mean time, -04:56:02.
    fn new_york_lmt() -> FixedOffset {
        FixedOffset::west_opt(4 * 3600 + 56 * 60 + 2).unwrap()
    }

    #[test]
    fn test_offset_seconds_truncated_toward_zero() {
        assert_eq!(whole_minutes(new_york_lmt()), offset(-296));
        assert_eq!(whole_minutes(FixedOffset::east_opt(5 * 3600 + 59).unwrap()), offset(300));
        assert_eq!(whole_minutes(offset(330)), offset(330));
    }

    #[test]
    fn test_round_trip_with_seconds_in_offset() {
        let local = WeeklyWindow::new(1, 540, 600);
        let utc = to_utc(local, new_york_lmt(), reference());
        assert_eq!(utc, WeeklyWindow::new(1, 836, 896));
        assert_eq!(to_local(utc, new_york_lmt(), reference()), local);
    }

    #[test]
    fn test_normalizer_new_truncates_offset() {
        let n = Normalizer::new(new_york_lmt(), reference());
        assert_eq!(n.offset(), offset(-296));
    }

    #[test]
    fn test_for_timezone_local_mean_time_round_trips() {
        let at = Utc.with_ymd_and_hms(1880, 6, 1, 12, 0, 0).unwrap();
        let n = Normalizer::for_timezone("America/New_York", at).unwrap();
        assert_eq!(n.offset(), offset(-296));

        let local = WeeklyWindow::new(1, 540, 600);
        assert_eq!(n.to_local(n.to_utc(local)), local);
    }

    // ── extreme reference instants ──────────────────────────────────────

    #[test]
    fn test_anchor_date_at_range_ends() {
        let latest = DateTime::<Utc>::MAX_UTC;
        let earliest = DateTime::<Utc>::MIN_UTC;
        for day in 0..7u8 {
            assert_eq!(weekday_index(anchor_date(day, &latest).weekday()), day);
            assert_eq!(weekday_index(anchor_date(day, &earliest).weekday()), day);
        }
    }

    #[test]
    fn test_conversion_at_latest_reference() {
        let latest = DateTime::<Utc>::MAX_UTC;
        let local = WeeklyWindow::new(6, 1410, 30);
        let utc = to_utc(local, offset(600), latest);
        assert_eq!(utc, WeeklyWindow::new(6, 810, 870));
        assert_eq!(to_local(utc, offset(600), latest), local);
    }

    #[test]
    fn test_conversion_at_earliest_reference() {
        let earliest = DateTime::<Utc>::MIN_UTC;
        let local = WeeklyWindow::new(6, 1410, 30);
        let utc = to_utc(local, offset(-600), earliest);
        assert_eq!(utc, WeeklyWindow::new(0, 570, 630));
        assert_eq!(to_local(utc, offset(-600), earliest), local);
    }

    #[test]
    fn test_out_of_range_input_at_range_ends_does_not_panic() {
        let junk = WeeklyWindow::new(u8::MAX, u16::MAX, 0);
        for reference in [DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC] {
            for minutes in [-1439, 0, 1439] {
                to_utc(junk, offset(minutes), reference);
                to_local(junk, offset(minutes), reference);
            }
        }
    }

    #[test]
    fn test_occurrence_at_latest_reference() {
        let occ = occurrence(
            WeeklyWindow::new(2, 1380, 60),
            offset(600),
            DateTime::<Utc>::MAX_UTC,
        );
        assert_eq!(occ.start.weekday(), Weekday::Tue);
        assert_eq!(occ.duration(), Duration::hours(2));
    }
}
