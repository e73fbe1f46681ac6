//! Inline completion supplier backed by the suggestion cache

use super::completion_state::CompletionState;
use super::formatter::CompletionFormatter;
use crate::editor::{InlineCompletion, InlineCompletionSupplier, Position};

impl InlineCompletionSupplier for CompletionState {
    /// Every cached suggestion, formatted for the editor. The position is not
    /// used for filtering; the editor decides what applies at the cursor.
    fn provide_inline_completions(
        &self,
        lines: &[String],
        _position: Position,
    ) -> Vec<InlineCompletion> {
        self.cache
            .iter()
            .filter_map(|suggestion| {
                let range = suggestion.range();
                let text =
                    CompletionFormatter::new(lines, range.start()).format(suggestion.insert_text());
                if text.is_empty() {
                    return None;
                }
                Some(InlineCompletion {
                    text,
                    start: range.start(),
                    end: range.end(),
                })
            })
            .collect()
    }
}
