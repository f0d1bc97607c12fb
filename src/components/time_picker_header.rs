use chrono::NaiveDateTime;
use leptos::html::Input;
use leptos::{
    component, create_effect, create_node_ref, create_signal, event_target_value, store_value, view,
    Callable, Callback, IntoView, Signal, SignalGet, SignalGetUntracked, SignalUpdate, SignalWith,
};
use web_sys::KeyboardEvent;

use super::deferred_focus::focus_and_select_next_frame;
use crate::config::HeaderConfig;
use crate::constants::ESCAPE_KEY;
use crate::disabled::DisabledOptions;
use crate::log;
use crate::synchronizer::{proto_value, TextSynchronizer};

/// Text entry for a time value, the header of a time picker panel
///
/// Shows `value` formatted per `config.format`. Every keystroke is checked
/// against the format and the `disabled` rules: accepted text is reported
/// through `on_change` (`None` when emptied), rejected text stays visible and
/// marks the input invalid. Replacing `value` discards whatever was typed.
#[allow(clippy::needless_pass_by_value)]
#[component]
#[must_use]
pub fn TimePickerHeader(
    #[prop(into)] value: Signal<Option<NaiveDateTime>>,
    #[prop(into)] on_change: Callback<Option<NaiveDateTime>>,
    #[prop(optional)] config: HeaderConfig,
    #[prop(optional)] disabled: DisabledOptions,
    /// Value the panel opens on when there is none; also the fallback placeholder
    #[prop(optional)]
    default_open_value: Option<NaiveDateTime>,
    #[prop(optional, into)] on_esc: Option<Callback<()>>,
    #[prop(optional, into)] on_key_down: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    let input_ref = create_node_ref::<Input>();
    let pattern = config.format_pattern();
    let (sync, set_sync) = create_signal(TextSynchronizer::new(
        value.get_untracked(),
        pattern.clone(),
    ));
    let disabled = store_value(disabled);

    // Runs on every replacement of the value, equal or not
    create_effect(move |_| {
        let next = value.get();
        set_sync.update(|s| s.on_external_value_change(next));
    });

    let apply_edit = move |raw: &str| {
        let rules = disabled.get_value();
        let change = set_sync.try_update(|s| s.on_text_edit(raw, &rules)).flatten();
        // Reported after the update so the owner may replace the value right away
        if let Some(change) = change {
            on_change.call(change.value());
        }
    };

    if config.focus_on_open {
        log!("Focusing time input on next frame");
        focus_and_select_next_frame(input_ref);
    }

    let placeholder = {
        let placeholder = config.placeholder.clone();
        move || {
            placeholder.clone().or_else(|| {
                proto_value(value.get(), default_open_value).map(|v| pattern.format(&v))
            })
        }
    };

    let input_class = {
        let config = config.clone();
        move || config.input_class(sync.with(TextSynchronizer::is_invalid))
    };

    let clear_button = config
        .clear_text
        .clone()
        .filter(|_| !config.input_read_only)
        .map(|text| {
            view! {
                <a
                    role="button"
                    class=config.clear_class()
                    title=text.clone()
                    on:click=move |_| apply_edit("")
                >
                    {text}
                </a>
            }
        });

    view! {
        <div class=config.wrap_class()>
            <input
                type="text"
                class=input_class
                node_ref=input_ref
                prop:value=move || sync.with(|s| s.display_text().to_string())
                placeholder=placeholder
                readonly=config.input_read_only
                on:input=move |ev| apply_edit(&event_target_value(&ev))
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == ESCAPE_KEY {
                        if let Some(on_esc) = on_esc {
                            on_esc.call(());
                        }
                    }
                    if let Some(on_key_down) = on_key_down {
                        on_key_down.call(ev);
                    }
                }
            />
            {clear_button}
        </div>
    }
}
