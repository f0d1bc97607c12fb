pub mod app;
pub mod deferred_focus;
pub mod time_picker_header;
