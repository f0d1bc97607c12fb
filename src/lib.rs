pub mod components;
pub mod config;
pub mod constants;
pub mod disabled;
pub mod error;
pub mod format;
pub mod logging;
pub mod synchronizer;
pub mod time;

pub use components::app::App;
pub use components::time_picker_header::TimePickerHeader;
pub use config::HeaderConfig;
pub use disabled::{DisabledOptions, TimeComponent};
pub use error::TimeTextError;
pub use format::{FormatPattern, TimeComponents};
pub use synchronizer::{TextSynchronizer, TimeChange};
