use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FORMAT, DEFAULT_PREFIX_CLS};
use crate::format::FormatPattern;

/// Caller configuration for a time picker header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderConfig {
    /// date-fns style pattern, e.g. `HH:mm` or `HH:mm:ss`
    pub format: String,
    pub prefix_cls: String,
    pub placeholder: Option<String>,
    /// Label of the clear button; no button is shown without one
    pub clear_text: Option<String>,
    pub input_read_only: bool,
    /// Focus the input and select its text one frame after it is shown
    pub focus_on_open: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            prefix_cls: DEFAULT_PREFIX_CLS.to_string(),
            placeholder: None,
            clear_text: None,
            input_read_only: false,
            focus_on_open: false,
        }
    }
}

impl HeaderConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or a field has the wrong type
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse header config: {e}"))
    }

    #[must_use]
    pub fn format_pattern(&self) -> FormatPattern {
        FormatPattern::new(&self.format)
    }

    #[must_use]
    pub fn input_class(&self, invalid: bool) -> String {
        if invalid {
            format!("{0}-input {0}-input-invalid", self.prefix_cls)
        } else {
            format!("{}-input", self.prefix_cls)
        }
    }

    #[must_use]
    pub fn wrap_class(&self) -> String {
        format!("{}-input-wrap", self.prefix_cls)
    }

    #[must_use]
    pub fn clear_class(&self) -> String {
        format!("{}-clear-btn", self.prefix_cls)
    }
}
