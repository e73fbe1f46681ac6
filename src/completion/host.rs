//! Editor integration points used by the completion controller

use crate::editor::Position;

/// What the controller needs from the editor it augments
pub trait CompletionHost {
    /// Whole buffer, lines joined with `\n`
    fn full_text(&self) -> String;

    fn cursor_position(&self) -> Position;

    /// Character offset of `position` within [`full_text`](Self::full_text)
    fn offset_at(&self, position: Position) -> usize;

    /// Ask the editor to (re)query the supplier and show ghost text
    fn show_inline_suggestions(&mut self);

    /// Hide any visible ghost text
    fn hide_inline_suggestions(&mut self);
}
