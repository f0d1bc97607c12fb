use std::sync::LazyLock;

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;

use crate::constants::{REFERENCE_DATE, SHAPE_PATTERN};

static SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SHAPE_PATTERN).expect("shape pattern is a valid regex"));

/// Whether `text` is laid out as `HH:MM` or `HH:MM:SS` with two ASCII digits per field
///
/// This says nothing about whether the numbers form a real time.
#[must_use]
pub fn matches_shape(text: &str) -> bool {
    // `\d` is Unicode-aware, so non-ASCII digits are filtered out first
    text.is_ascii() && SHAPE.is_match(text)
}

/// Place a time of day on `REFERENCE_DATE`
#[must_use]
pub fn on_reference_date(time: NaiveTime) -> NaiveDateTime {
    REFERENCE_DATE.and_time(time)
}

/// Hour, minute and second of a time, ignoring its date
#[must_use]
pub fn hms<T: Timelike>(time: &T) -> (u32, u32, u32) {
    (time.hour(), time.minute(), time.second())
}
