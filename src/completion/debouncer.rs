//! Debouncer for completion requests
//!
//! Delays requests until the user pauses typing. The delay (default 2000ms)
//! is much longer than a keystroke interval so a burst of typing produces a
//! single request.

use std::time::{Duration, Instant};

/// Manages debounced completion request timing.
///
/// Tracks when the last qualifying keystroke occurred and whether a request is
/// waiting for the quiet period to expire. The event loop polls `is_ready`;
/// there is no background timer.
#[derive(Debug)]
pub struct CompletionDebouncer {
    /// Debounce delay in milliseconds
    delay_ms: u64,
    /// Timestamp of the last keystroke that (re)started the timer
    last_input_time: Option<Instant>,
    /// Whether a request is waiting for the delay to expire
    pending: bool,
}

impl CompletionDebouncer {
    /// Creates a new debouncer with the specified delay.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            last_input_time: None,
            pending: false,
        }
    }

    /// Start or restart the timer.
    ///
    /// Each call pushes the expiry back to `delay_ms` from now.
    pub fn schedule(&mut self) {
        self.last_input_time = Some(Instant::now());
        self.pending = true;
    }

    /// Drop any pending expiry.
    pub fn cancel(&mut self) {
        self.pending = false;
        self.last_input_time = None;
    }

    /// Check if the quiet period has elapsed for a pending request.
    pub fn is_ready(&self) -> bool {
        if !self.pending {
            return false;
        }

        match self.last_input_time {
            Some(last_time) => last_time.elapsed() >= Duration::from_millis(self.delay_ms),
            None => false,
        }
    }

    /// Mark the pending expiry as handled.
    ///
    /// Should be called right before the request is issued.
    pub fn mark_complete(&mut self) {
        self.pending = false;
        self.last_input_time = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

impl Default for CompletionDebouncer {
    fn default() -> Self {
        Self::new(2000)
    }
}
