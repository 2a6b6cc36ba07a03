//! Parsing and formatting of the `"<day> <month> <hh>:<mm>"` expressions users
//! type when proposing or excluding a time slot.
//!
//! Month names come from a single table of Russian genitive forms
//! (`января`, `февраля`, ...). Years are never typed: a date is placed in the
//! current year, or in the next one if it has already passed.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Month words in calendar order; index `i` is month `i + 1`.
pub const MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// How far in the past a date may lie and still be read as this year's.
pub const PAST_GRACE_MINUTES: i64 = 10;

/// A calendar date and time of day with minute precision.
///
/// Ordering and hashing follow `(year, month, day, hour, minute)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePoint(NaiveDateTime);

impl TimePoint {
    /// Builds a point from calendar fields, `None` if they do not name a real
    /// date and time.
    pub fn from_fields(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hour, minute, 0)
            .map(TimePoint)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time_point(self))
    }
}

/// Source of "now" for year disambiguation.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Host local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one moment, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[allow(clippy::expect_used)]
fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{1,2})\s+([а-яё]+)\s+([0-9]{1,2}):([0-9]{2})")
            .expect("date pattern is a valid literal")
    })
}

/// Looks up a month word, returning its calendar number.
pub fn month_number(word: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == word)
        .map(|i| i as u32 + 1)
}

/// Reverse of [`month_number`].
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTHS.get(index).copied()
}

/// Parses `text` relative to the host clock.
pub fn parse_time_point(text: &str) -> Option<TimePoint> {
    parse_time_point_at(text, SystemClock.now())
}

/// Parses `text` as `"<day> <month> <hh>:<mm>"`, treating `now` as the current
/// moment.
///
/// The year is `now`'s year unless the result would lie more than
/// [`PAST_GRACE_MINUTES`] before `now`, in which case the next year is used.
/// Returns `None` for a wrong shape, an unknown month word, or fields that
/// do not form a real date and time in the chosen year.
pub fn parse_time_point_at(text: &str, now: NaiveDateTime) -> Option<TimePoint> {
    let normalized = text.trim().to_lowercase();
    let caps = pattern().captures(&normalized)?;

    let day: u32 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let hour: u32 = caps[3].parse().ok()?;
    let minute: u32 = caps[4].parse().ok()?;

    let year = now.year();
    let point = TimePoint::from_fields(year, month, day, hour, minute)?;
    if point.0 < now - Duration::minutes(PAST_GRACE_MINUTES) {
        return TimePoint::from_fields(year + 1, month, day, hour, minute);
    }
    Some(point)
}

/// Renders a point as `"<day> <month> <hh>:<mm>"`, e.g. `"1 февраля 08:05"`.
pub fn format_time_point(point: &TimePoint) -> String {
    let month = month_name(point.month()).unwrap_or_default();
    format!(
        "{} {} {:02}:{:02}",
        point.day(),
        month,
        point.hour(),
        point.minute()
    )
}
