//! Host editor
//!
//! Wraps a `tui_textarea::TextArea` buffer with file IO, a scrolling viewport,
//! Verilog highlighting and ghost-text display of inline completions.

pub mod editor_render;
pub mod editor_state;
pub mod inline;
pub mod position;

pub use editor_state::{DEFAULT_TEXT, EditorState};
pub use inline::{GhostText, InlineCompletion, InlineCompletionSupplier, InlineSuggestState};
pub use position::{Position, offset_at};
