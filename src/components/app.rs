use chrono::{Local, NaiveDateTime};
use leptos::{component, create_signal, view, IntoView, SignalGet, SignalSet, SignalUpdate};
use leptos_meta::{provide_meta_context, Title};

use crate::components::time_picker_header::TimePickerHeader;
use crate::config::HeaderConfig;
use crate::disabled::DisabledOptions;
use crate::log;

const DEMO_CONFIG: &str = r#"{
    "format": "HH:mm",
    "placeholder": "HH:mm",
    "clearText": "clear",
    "focusOnOpen": true
}"#;

/// Only every fifth minute can be picked
const MINUTE_STEP: u32 = 5;

fn describe(value: Option<NaiveDateTime>) -> String {
    value.map_or_else(|| "No time selected".to_string(), |v| v.format("%H:%M:%S").to_string())
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = HeaderConfig::from_json(DEMO_CONFIG).unwrap_or_else(|e| {
        web_sys::console::warn_1(&e.into());
        HeaderConfig::default()
    });
    let disabled = DisabledOptions::new()
        .with_disabled_minutes(|_| (0..60).filter(|m| m % MINUTE_STEP != 0).collect());

    let now = Local::now().naive_local();
    let (value, set_value) = create_signal(Some(now));
    let (escapes, set_escapes) = create_signal(0u32);

    let on_change = move |v: Option<NaiveDateTime>| {
        log!("Time changed: {}", describe(v));
        set_value.set(v);
    };

    view! {
        <Title text="Time Picker"/>

        <div class="app">
            <TimePickerHeader
                value=value
                on_change=on_change
                config=config
                disabled=disabled
                default_open_value=now
                on_esc=move |()| set_escapes.update(|n| *n += 1)
            />
            <p class="selected-time">{move || describe(value.get())}</p>
            <p class="escape-count">{move || format!("Escape pressed {} times", escapes.get())}</p>
        </div>
    }
}
