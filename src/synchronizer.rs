use chrono::NaiveDateTime;

use crate::disabled::DisabledOptions;
use crate::error::TimeTextError;
use crate::format::FormatPattern;
use crate::log;
use crate::time::{matches_shape, on_reference_date};

/// A change the input reports to its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeChange {
    /// The text was emptied
    Cleared,
    /// The text denotes an enabled time, anchored on the reference date
    Selected(NaiveDateTime),
}

impl TimeChange {
    #[must_use]
    pub const fn value(self) -> Option<NaiveDateTime> {
        match self {
            Self::Cleared => None,
            Self::Selected(value) => Some(value),
        }
    }
}

/// Check typed text against the format, the strict shape and the disabled rules
///
/// Returns `Ok(None)` for empty text.
///
/// # Errors
///
/// Returns the reason the text cannot be accepted. The generic parse and the
/// shape check must both pass before disabled components are looked up.
pub fn validate_text(
    text: &str,
    format: &FormatPattern,
    disabled: &DisabledOptions,
) -> Result<Option<NaiveDateTime>, TimeTextError> {
    if text.is_empty() {
        return Ok(None);
    }

    let parsed = format.parse_time(text);
    if !matches_shape(text) {
        return Err(TimeTextError::Malformed(text.to_string()));
    }
    let time = parsed?;

    if let Some((component, value)) = disabled.disabled_component(&time) {
        return Err(TimeTextError::Disabled { component, value });
    }

    Ok(Some(on_reference_date(time)))
}

/// The value a freshly opened panel starts from
#[must_use]
pub fn proto_value(
    value: Option<NaiveDateTime>,
    default_open_value: Option<NaiveDateTime>,
) -> Option<NaiveDateTime> {
    value.or(default_open_value)
}

/// Keeps the text of a time input in step with the time value it edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSynchronizer {
    format: FormatPattern,
    text: String,
    invalid: bool,
}

impl TextSynchronizer {
    #[must_use]
    pub fn new(value: Option<NaiveDateTime>, format: FormatPattern) -> Self {
        let text = display_text_for(value.as_ref(), &format);
        Self {
            format,
            text,
            invalid: false,
        }
    }

    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.invalid
    }

    #[must_use]
    pub const fn format(&self) -> &FormatPattern {
        &self.format
    }

    /// The owner replaced the value; discard whatever was typed
    pub fn on_external_value_change(&mut self, value: Option<NaiveDateTime>) {
        self.text = display_text_for(value.as_ref(), &self.format);
        self.invalid = false;
    }

    /// The user edited the text
    ///
    /// The text is always kept as typed. Returns the change to report, or
    /// `None` when the text was rejected.
    pub fn on_text_edit(&mut self, raw: &str, disabled: &DisabledOptions) -> Option<TimeChange> {
        raw.clone_into(&mut self.text);

        match validate_text(raw, &self.format, disabled) {
            Ok(value) => {
                self.invalid = false;
                Some(value.map_or(TimeChange::Cleared, TimeChange::Selected))
            }
            Err(err) => {
                log!("Rejected time text: {}", err);
                self.invalid = true;
                None
            }
        }
    }
}

fn display_text_for(value: Option<&NaiveDateTime>, format: &FormatPattern) -> String {
    value.map_or_else(String::new, |v| format.format(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REFERENCE_DATE;
    use crate::disabled::TimeComponent;
    use crate::time::hms;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        REFERENCE_DATE.and_hms_opt(h, m, s).expect("valid time")
    }

    fn hour_minute() -> TextSynchronizer {
        TextSynchronizer::new(None, FormatPattern::new("HH:mm"))
    }

    #[test]
    fn test_initialize_without_value() {
        let sync = hour_minute();
        assert_eq!(sync.display_text(), "");
        assert!(!sync.is_invalid());
    }

    #[test]
    fn test_initialize_with_value() {
        let value = chrono::NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|d| d.and_hms_opt(7, 5, 9))
            .expect("valid datetime");
        let sync = TextSynchronizer::new(Some(value), FormatPattern::new("HH:mm:ss"));
        assert_eq!(sync.display_text(), "07:05:09");
    }

    #[test]
    fn test_scenario_hour_minute_format() {
        let mut sync = hour_minute();
        let none = DisabledOptions::new();

        let change = sync.on_text_edit("09:30", &none).expect("should emit");
        let value = change.value().expect("should carry a time");
        assert_eq!(hms(&value), (9, 30, 0));
        assert!(!sync.is_invalid());

        assert_eq!(sync.on_text_edit("9:30", &none), None);
        assert!(sync.is_invalid());
        assert_eq!(sync.display_text(), "9:30");

        assert_eq!(sync.on_text_edit("", &none), Some(TimeChange::Cleared));
        assert!(!sync.is_invalid());

        assert_eq!(sync.on_text_edit("23:61", &none), None);
        assert!(sync.is_invalid());
    }

    #[test]
    fn test_scenario_disabled_minute() {
        let mut sync = hour_minute();
        let disabled = DisabledOptions::new()
            .with_disabled_minutes(|hour| if hour == 9 { vec![30] } else { Vec::new() });

        assert_eq!(sync.on_text_edit("09:30", &disabled), None);
        assert!(sync.is_invalid());
        assert_eq!(sync.display_text(), "09:30");

        assert!(sync.on_text_edit("10:30", &disabled).is_some());
        assert!(!sync.is_invalid());
    }

    #[test]
    fn test_disabled_hour_rejects_well_formed_text() {
        let mut sync = TextSynchronizer::new(None, FormatPattern::default());
        let disabled = DisabledOptions::new().with_disabled_hours(|| vec![13]);
        assert_eq!(sync.on_text_edit("13:00:00", &disabled), None);
        assert!(sync.is_invalid());
    }

    #[test]
    fn test_disabled_second_rejects() {
        let mut sync = TextSynchronizer::new(None, FormatPattern::default());
        let disabled = DisabledOptions::new().with_disabled_seconds(|_, _| vec![0]);
        assert_eq!(sync.on_text_edit("13:00", &disabled), None);
        assert!(sync.on_text_edit("13:00:01", &disabled).is_some());
    }

    #[test]
    fn test_empty_text_clears_even_with_everything_disabled() {
        let mut sync = hour_minute();
        let disabled = DisabledOptions::new()
            .with_disabled_hours(|| (0..24).collect())
            .with_disabled_minutes(|_| (0..60).collect());
        sync.on_text_edit("xx", &disabled);
        assert!(sync.is_invalid());

        assert_eq!(sync.on_text_edit("", &disabled), Some(TimeChange::Cleared));
        assert!(!sync.is_invalid());
    }

    #[test]
    fn test_well_formed_times_are_accepted() {
        let mut sync = TextSynchronizer::new(None, FormatPattern::default());
        let none = DisabledOptions::new();
        for (h, m, s) in [(0, 0, 0), (23, 59, 59), (12, 34, 56), (1, 2, 3)] {
            let text = format!("{h:02}:{m:02}:{s:02}");
            let change = sync.on_text_edit(&text, &none);
            assert_eq!(change, Some(TimeChange::Selected(at(h, m, s))), "{text}");
            assert!(!sync.is_invalid());

            let short = format!("{h:02}:{m:02}");
            let change = sync.on_text_edit(&short, &none);
            assert_eq!(change, Some(TimeChange::Selected(at(h, m, 0))), "{short}");
        }
    }

    #[test]
    fn test_bad_shapes_rejected_regardless_of_rules() {
        let mut sync = TextSynchronizer::new(None, FormatPattern::new("H:m:s"));
        let none = DisabledOptions::new();
        for text in ["9:30", "9:3:1", "0", "12:", "12:3", "123:45", "12:34:5", "ab:cd", "12-34"] {
            assert_eq!(sync.on_text_edit(text, &none), None, "{text}");
            assert!(sync.is_invalid(), "{text}");
        }
    }

    #[test]
    fn test_twelve_hour_pattern_accepts_its_own_text() {
        let mut sync = TextSynchronizer::new(Some(at(21, 30, 0)), FormatPattern::new("hh:mm"));
        assert_eq!(sync.display_text(), "09:30");

        let shown = sync.display_text().to_string();
        let change = sync.on_text_edit(&shown, &DisabledOptions::new());
        assert_eq!(change, Some(TimeChange::Selected(at(9, 30, 0))));
        assert!(!sync.is_invalid());
    }

    #[test]
    fn test_external_change_resets_invalid_text() {
        let mut sync = hour_minute();
        sync.on_text_edit("9:3", &DisabledOptions::new());
        assert!(sync.is_invalid());

        sync.on_external_value_change(Some(at(18, 0, 0)));
        assert_eq!(sync.display_text(), "18:00");
        assert!(!sync.is_invalid());
    }

    #[test]
    fn test_external_change_is_idempotent() {
        let mut sync = hour_minute();
        sync.on_external_value_change(Some(at(6, 15, 0)));
        let first = sync.clone();
        sync.on_external_value_change(Some(at(6, 15, 0)));
        assert_eq!(sync, first);
        assert!(!sync.is_invalid());
    }

    #[test]
    fn test_external_change_to_none() {
        let mut sync = TextSynchronizer::new(Some(at(6, 15, 0)), FormatPattern::new("HH:mm"));
        sync.on_external_value_change(None);
        assert_eq!(sync.display_text(), "");
    }

    #[test]
    fn test_validate_text_reports_reason() {
        let format = FormatPattern::new("HH:mm");
        let disabled = DisabledOptions::new().with_disabled_hours(|| vec![9]);

        assert!(matches!(
            validate_text("9:30", &format, &disabled),
            Err(TimeTextError::Malformed(_))
        ));
        assert!(matches!(
            validate_text("25:00", &format, &disabled),
            Err(TimeTextError::Unparseable { .. })
        ));
        assert_eq!(
            validate_text("09:00", &format, &disabled),
            Err(TimeTextError::Disabled { component: TimeComponent::Hour, value: 9 })
        );
        assert_eq!(validate_text("", &format, &disabled), Ok(None));
    }

    #[test]
    fn test_selected_time_is_on_reference_date() {
        let format = FormatPattern::new("HH:mm");
        let value = validate_text("10:20", &format, &DisabledOptions::new())
            .expect("should validate")
            .expect("should carry a time");
        assert_eq!(value.date(), REFERENCE_DATE);
    }

    #[test]
    fn test_proto_value_prefers_value() {
        assert_eq!(proto_value(Some(at(1, 0, 0)), Some(at(2, 0, 0))), Some(at(1, 0, 0)));
        assert_eq!(proto_value(None, Some(at(2, 0, 0))), Some(at(2, 0, 0)));
        assert_eq!(proto_value(None, None), None);
    }
}
