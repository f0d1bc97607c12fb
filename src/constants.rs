use chrono::NaiveDate;

/// Date every parsed time is anchored to, so only the time of day matters
///
/// This is the day a JavaScript `new Date(1990, 0, 0)` denotes.
pub const REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1989, 12, 31) {
    Some(date) => date,
    None => panic!("Invalid reference date"),
};

/// Format pattern used when the caller does not supply one
pub const DEFAULT_FORMAT: &str = "HH:mm:ss";

/// CSS class prefix for the input wrap and its modifiers
pub const DEFAULT_PREFIX_CLS: &str = "rc-time-picker-panel";

/// Two-digit hour and minute, optional two-digit second
pub const SHAPE_PATTERN: &str = r"^\d{2}:\d{2}(:\d{2})?$";

/// Key reported by `KeyboardEvent::key` for the cancel key
pub const ESCAPE_KEY: &str = "Escape";
