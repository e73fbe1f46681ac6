//! Cursor positions in the host editor
//!
//! Positions are 1-based (`line 1, column 1` is the first character of the
//! buffer), matching the inline-completion API the editor exposes. The
//! underlying `TextArea` cursor is 0-based; conversion happens here.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Converts a 0-based `(row, col)` cursor from `TextArea`
    pub fn from_cursor((row, col): (usize, usize)) -> Self {
        Self {
            line: row + 1,
            column: col + 1,
        }
    }

    /// 0-based `(row, col)` suitable for `TextArea`
    pub fn to_cursor(self) -> (usize, usize) {
        (self.line.saturating_sub(1), self.column.saturating_sub(1))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Character offset of `position` within `lines` joined by `\n`
///
/// Lines past the end clamp to the end of the buffer and columns past the end
/// of a line clamp to the end of that line.
pub fn offset_at(lines: &[String], position: Position) -> usize {
    if lines.is_empty() {
        return 0;
    }

    let (row, col) = position.to_cursor();
    let row = row.min(lines.len() - 1);

    let preceding: usize = lines[..row].iter().map(|l| l.chars().count() + 1).sum();
    let line_len = lines[row].chars().count();

    preceding + col.min(line_len)
}
