use thiserror::Error;

use crate::disabled::TimeComponent;

/// Why a piece of typed text was not accepted as a time
///
/// Rejections are an expected outcome of editing, they only ever turn into the
/// invalid flag on the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeTextError {
    #[error("text {0:?} does not match the HH:MM[:SS] shape")]
    Malformed(String),

    #[error("text {text:?} does not parse as {pattern:?}: {source}")]
    Unparseable {
        text: String,
        pattern: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("text {0:?} is a leap second")]
    LeapSecond(String),

    #[error("{component} {value} is disabled")]
    Disabled { component: TimeComponent, value: u32 },
}
