//! Suggestions produced by the completion service

use crate::editor::Position;

/// Label attached to every generated suggestion
pub const SUGGESTION_LABEL: &str = "AI Suggestion";

/// Range in the buffer a suggestion replaces (1-based, inclusive start,
/// exclusive end). Generated suggestions always use an empty range, which
/// means "insert at this position".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionRange {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl SuggestionRange {
    /// Zero-width range at `position`
    pub fn empty_at(position: Position) -> Self {
        Self {
            start_line: position.line,
            start_column: position.column,
            end_line: position.line,
            end_column: position.column,
        }
    }

    pub fn start(&self) -> Position {
        Position::new(self.start_line, self.start_column)
    }

    pub fn end(&self) -> Position {
        Position::new(self.end_line, self.end_column)
    }

    pub fn is_empty(&self) -> bool {
        self.start() == self.end()
    }
}

/// A completion returned by the service, anchored where the request was made
///
/// Suggestions are immutable once created; the cache drops them on eviction
/// or when suggestions are dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    insert_text: String,
    range: SuggestionRange,
    label: String,
}

impl Suggestion {
    /// Creates a suggestion inserting `insert_text` at `position`
    pub fn anchored_at(insert_text: impl Into<String>, position: Position) -> Self {
        Self {
            insert_text: insert_text.into(),
            range: SuggestionRange::empty_at(position),
            label: SUGGESTION_LABEL.to_string(),
        }
    }

    pub fn insert_text(&self) -> &str {
        &self.insert_text
    }

    pub fn range(&self) -> SuggestionRange {
        self.range
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
