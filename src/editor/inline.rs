//! Inline completion API of the host editor
//!
//! Anything that can produce inline completions implements
//! [`InlineCompletionSupplier`]. The editor asks the supplier for completions
//! at the cursor and decides itself which of them can be shown as ghost text.

use super::position::Position;

/// A completion in the shape the editor renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineCompletion {
    pub text: String,
    pub start: Position,
    pub end: Position,
}

/// Source of inline completions for the editor
pub trait InlineCompletionSupplier {
    /// Completions available at `position`, oldest first.
    fn provide_inline_completions(&self, lines: &[String], position: Position)
    -> Vec<InlineCompletion>;
}

/// Ghost-text display state owned by the editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineSuggestState {
    /// Whether ghost text is currently triggered
    pub visible: bool,
    /// Index into the applicable completions, most recent first
    pub selected: usize,
}

/// Ghost text the editor can show at the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GhostText {
    /// Text that accepting would insert at the cursor
    pub text: String,
    /// Position of this ghost among the applicable ones (0-based)
    pub index: usize,
    pub total: usize,
}

impl GhostText {
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }
}

/// Remaining text of each completion that applies at `cursor`, most recent
/// first, without duplicates.
///
/// A completion applies when it starts on the cursor line at or before the
/// cursor and everything typed since its start is a prefix of its text.
pub fn applicable_remainders(
    completions: &[InlineCompletion],
    lines: &[String],
    cursor: Position,
) -> Vec<String> {
    let Some(line) = lines.get(cursor.line.saturating_sub(1)) else {
        return Vec::new();
    };

    let mut remainders: Vec<String> = Vec::new();

    for completion in completions.iter().rev() {
        if completion.start.line != cursor.line || completion.start.column > cursor.column {
            continue;
        }

        let typed: String = line
            .chars()
            .skip(completion.start.column.saturating_sub(1))
            .take(cursor.column - completion.start.column)
            .collect();

        let Some(remainder) = completion.text.strip_prefix(typed.as_str()) else {
            continue;
        };

        if remainder.is_empty() || remainders.iter().any(|r| r == remainder) {
            continue;
        }
        remainders.push(remainder.to_string());
    }

    remainders
}
