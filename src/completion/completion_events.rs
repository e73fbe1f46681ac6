//! Completion event handling
//!
//! Wires keystrokes, the debounce timer and worker responses to the
//! controller state:
//! - key event or paste → Escape dismisses, skip keys are ignored, anything else
//!   restarts the debounce timer unless suggestions are suppressed
//! - timer expiry → clear suppression → fetch step
//! - response → cache update → editor shows ghost text

use crossterm::event::KeyCode;
use std::sync::mpsc::TryRecvError;

use super::completion_state::{CompletionState, FetchOutcome};
use super::host::CompletionHost;

/// How the controller treats a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Escape: dismiss and suppress suggestions
    Dismiss,
    /// Space, Backspace and Tab leave the timer untouched
    Skip,
    /// Any other key restarts the debounce timer
    Trigger,
}

pub fn classify_key(code: KeyCode) -> KeyDisposition {
    match code {
        KeyCode::Esc => KeyDisposition::Dismiss,
        KeyCode::Char(' ') | KeyCode::Backspace | KeyCode::Tab | KeyCode::BackTab => {
            KeyDisposition::Skip
        }
        _ => KeyDisposition::Trigger,
    }
}

/// Handle a key after the editor has processed it
///
/// Returns what the controller did with the key.
pub fn handle_key_up<H: CompletionHost + ?Sized>(
    state: &mut CompletionState,
    host: &mut H,
    code: KeyCode,
) -> KeyDisposition {
    let disposition = classify_key(code);
    if !state.enabled {
        return disposition;
    }

    match disposition {
        KeyDisposition::Dismiss => {
            state.suppress();
            host.hide_inline_suggestions();
        }
        KeyDisposition::Skip => {}
        KeyDisposition::Trigger if state.suppressed => {}
        KeyDisposition::Trigger => state.debouncer.schedule(),
    }

    disposition
}

/// Restart the debounce timer after a paste
pub fn handle_paste(state: &mut CompletionState) {
    if state.enabled && !state.suppressed {
        state.debouncer.schedule();
    }
}

/// Fire the fetch step if the debounce delay has elapsed
///
/// Returns `None` when the timer has not expired.
pub fn fire_debounced<H: CompletionHost + ?Sized>(
    state: &mut CompletionState,
    host: &H,
) -> Option<FetchOutcome> {
    if !state.debouncer.is_ready() {
        return None;
    }

    state.debouncer.mark_complete();
    state.suppressed = false;
    Some(state.request_suggestion(host))
}

/// Drain the response channel and apply every response
///
/// Uses `try_recv()` so the event loop never blocks. When the cache changed
/// and holds suggestions, the host is asked to show them. Returns true if the
/// cache changed.
pub fn poll_response_channel<H: CompletionHost + ?Sized>(
    state: &mut CompletionState,
    host: &mut H,
) -> bool {
    let Some(rx) = &state.response_rx else {
        return false;
    };

    let mut responses = Vec::new();
    let mut disconnected = false;

    loop {
        match rx.try_recv() {
            Ok(response) => responses.push(response),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                disconnected = true;
                break;
            }
        }
    }

    let mut changed = false;
    for response in responses {
        changed |= state.apply_response(response);
    }

    if disconnected {
        log::error!("Completion worker disconnected unexpectedly");
        state.response_rx = None;
        state.request_tx = None;
        state.in_flight = 0;
    }

    if changed && !state.cache.is_empty() {
        host.show_inline_suggestions();
    }

    changed
}

#[cfg(test)]
#[path = "completion_events_tests.rs"]
mod completion_events_tests;
