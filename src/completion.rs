//! Debounced AI inline completions
//!
//! Watches keystrokes in the editor, waits for a pause in typing, sends the
//! text before the cursor to the generate endpoint and keeps the most recent
//! replies as inline suggestions for the editor to show.

mod cache;
pub mod client;
pub mod completion_events;
pub mod completion_state;
mod debouncer;
mod formatter;
mod host;
pub mod suggestion;
mod supplier;
pub mod worker;

pub use cache::SuggestionCache;
pub use completion_state::{CompletionRequest, CompletionResponse, CompletionState, FetchOutcome};
pub use host::CompletionHost;
pub use suggestion::{SUGGESTION_LABEL, Suggestion, SuggestionRange};
