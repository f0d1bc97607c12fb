/// Conditional logging module for development builds
///
/// The `log!` macro provides informational logging that is compiled out in
/// production (release) builds by default. In the browser it writes to the
/// console; on native targets (unit tests, benches) it writes to stderr.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```rust
/// use time_picker::log;
///
/// let text = "9:30";
/// log!("Rejected time text {:?}", text);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {{
        #[cfg(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging")))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
        #[cfg(all(not(target_arch = "wasm32"), any(debug_assertions, feature = "console_logging")))]
        {
            eprintln!($($arg),+);
        }
    }};
}

pub use log;
