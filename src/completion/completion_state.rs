//! Completion controller state
//!
//! Owns everything the inline-completion controller mutates: the bounded
//! suggestion cache, the suppression flag, the debounce timer and the channel
//! handles to the worker thread. All of it lives on the UI thread.

use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use super::cache::SuggestionCache;
use super::debouncer::CompletionDebouncer;
use super::host::CompletionHost;
use super::suggestion::Suggestion;
use crate::config::CompletionConfig;
use crate::editor::Position;

/// Request messages sent to the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionRequest {
    /// Generate a completion for the text before the cursor
    Generate {
        prompt: String,
        /// Cursor position when the request was made
        anchor: Position,
        request_id: u64,
    },
}

/// Response messages received from the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResponse {
    /// The service returned completion text
    Generated {
        text: String,
        anchor: Position,
        request_id: u64,
    },
    /// The service replied without usable completion text
    Discarded { request_id: u64 },
    /// The request failed (network error, HTTP error status)
    Failed { message: String, request_id: u64 },
}

impl CompletionResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            CompletionResponse::Generated { request_id, .. }
            | CompletionResponse::Discarded { request_id }
            | CompletionResponse::Failed { request_id, .. } => *request_id,
        }
    }
}

/// What the fetch step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A request was handed to the worker
    Sent { request_id: u64 },
    /// Suggestions are suppressed; nothing was sent
    Suppressed,
    /// Buffer or text before the cursor is empty; cache was cleared
    EmptyPrompt,
    /// No worker is connected (completions disabled)
    Unavailable,
}

pub struct CompletionState {
    /// Whether completions are requested at all (from config)
    pub enabled: bool,
    /// Set by Escape, cleared when the debounce timer next fires
    pub suppressed: bool,
    /// Most recent suggestions, oldest first
    pub cache: SuggestionCache,
    pub debouncer: CompletionDebouncer,
    /// Channel to send requests to the worker thread
    pub request_tx: Option<Sender<CompletionRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<CompletionResponse>>,
    /// ID of the last request sent, incremented per request
    pub request_id: u64,
    /// Requests sent whose response has not arrived yet
    pub in_flight: usize,
    shutdown: CancellationToken,
}

impl CompletionState {
    pub fn new(config: &CompletionConfig) -> Self {
        Self {
            enabled: config.enabled,
            suppressed: false,
            cache: SuggestionCache::new(config.cache_size),
            debouncer: CompletionDebouncer::new(config.debounce_ms),
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight: 0,
            shutdown: CancellationToken::new(),
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<CompletionRequest>,
        response_rx: Receiver<CompletionResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Token the worker watches to abort in-flight requests on exit
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub fn is_connected(&self) -> bool {
        self.request_tx.is_some()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    /// Dismiss suggestions (Escape)
    ///
    /// Clears the cache and blocks requests until the timer next fires. A
    /// pending debounce expiry is kept; in-flight requests are left alone.
    pub fn suppress(&mut self) {
        self.suppressed = true;
        self.cache.clear();
        log::debug!("Suggestions suppressed");
    }

    /// Fetch step: request a completion for the text before the cursor
    pub fn request_suggestion<H: CompletionHost + ?Sized>(&mut self, host: &H) -> FetchOutcome {
        if self.suppressed {
            log::debug!("Suggestions suppressed, skipping request");
            return FetchOutcome::Suppressed;
        }

        let text = host.full_text();
        if text.is_empty() {
            self.cache.clear();
            return FetchOutcome::EmptyPrompt;
        }

        let position = host.cursor_position();
        let offset = host.offset_at(position);
        let prompt: String = text.chars().take(offset).collect();

        if prompt.is_empty() {
            self.cache.clear();
            return FetchOutcome::EmptyPrompt;
        }

        self.send_request(prompt, position)
    }

    fn send_request(&mut self, prompt: String, anchor: Position) -> FetchOutcome {
        let Some(tx) = &self.request_tx else {
            return FetchOutcome::Unavailable;
        };

        let request_id = self.request_id.wrapping_add(1);
        log::debug!(
            "Sending completion request {} at {} ({} chars)",
            request_id,
            anchor,
            prompt.chars().count()
        );

        match tx.send(CompletionRequest::Generate {
            prompt,
            anchor,
            request_id,
        }) {
            Ok(()) => {
                self.request_id = request_id;
                self.in_flight += 1;
                FetchOutcome::Sent { request_id }
            }
            Err(_) => {
                log::error!("Completion worker is gone, request {} dropped", request_id);
                self.request_tx = None;
                FetchOutcome::Unavailable
            }
        }
    }

    /// Apply a worker response. Returns true if the cache changed.
    ///
    /// Responses are applied in arrival order regardless of request ID, so a
    /// reply that arrives after Escape is still cached.
    pub fn apply_response(&mut self, response: CompletionResponse) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        match response {
            CompletionResponse::Generated {
                text,
                anchor,
                request_id,
            } => {
                if text.is_empty() {
                    return false;
                }
                log::debug!("Caching suggestion from request {} at {}", request_id, anchor);
                if let Some(evicted) = self.cache.push(Suggestion::anchored_at(text, anchor)) {
                    log::debug!("Evicted suggestion anchored at {}", evicted.range().start());
                }
                true
            }
            CompletionResponse::Discarded { request_id } => {
                log::debug!("Request {} returned no usable completion text", request_id);
                false
            }
            CompletionResponse::Failed {
                message,
                request_id,
            } => {
                log::error!("Completion request {} failed: {}", request_id, message);
                false
            }
        }
    }

    /// Tear down on editor exit: stop the timer and abort worker requests
    pub fn shutdown(&mut self) {
        self.debouncer.cancel();
        self.shutdown.cancel();
        self.request_tx = None;
        self.response_rx = None;
    }
}

impl Drop for CompletionState {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

#[cfg(test)]
#[path = "completion_state_tests.rs"]
mod completion_state_tests;
