use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::html::Input;
use leptos::leptos_dom::helpers::{
    request_animation_frame_with_handle, set_timeout_with_handle, AnimationFrameRequestHandle,
    TimeoutHandle,
};
use leptos::{on_cleanup, NodeRef};

use crate::log;

/// A callback waiting for the next frame
#[derive(Debug, Clone, Copy)]
pub enum PendingFrame {
    Frame(AnimationFrameRequestHandle),
    Timeout(TimeoutHandle),
}

impl PendingFrame {
    pub fn cancel(self) {
        match self {
            Self::Frame(handle) => handle.cancel(),
            Self::Timeout(handle) => handle.clear(),
        }
    }
}

/// Run `f` once on the next animation frame
///
/// Falls back to a zero-delay timeout when animation frames are unavailable.
/// Returns `None` if neither could be scheduled, in which case `f` never runs.
pub fn next_frame<F>(f: F) -> Option<PendingFrame>
where
    F: FnOnce() + 'static,
{
    let slot = Rc::new(Cell::new(Some(f)));

    let frame_slot = slot.clone();
    let frame = request_animation_frame_with_handle(move || {
        if let Some(f) = frame_slot.take() {
            f();
        }
    });
    if let Ok(handle) = frame {
        return Some(PendingFrame::Frame(handle));
    }

    set_timeout_with_handle(
        move || {
            if let Some(f) = slot.take() {
                f();
            }
        },
        Duration::ZERO,
    )
    .ok()
    .map(PendingFrame::Timeout)
}

/// Focus `input` and select its contents once the current render has been painted
///
/// The request is cancelled if the owning component is disposed first.
pub fn focus_and_select_next_frame(input: NodeRef<Input>) {
    let pending = next_frame(move || {
        if let Some(input) = input.get_untracked() {
            if let Err(err) = input.focus() {
                log!("Could not focus time input: {:?}", err);
            }
            input.select();
        }
    });

    match pending {
        Some(pending) => on_cleanup(move || pending.cancel()),
        None => log!("Could not schedule focus for time input"),
    }
}
