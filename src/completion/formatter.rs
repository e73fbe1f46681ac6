//! Formatting of raw service replies into insertable text
//!
//! The generate endpoint forwards a chat model reply verbatim, so the text
//! often arrives wrapped in a Markdown fence or repeating what is already in
//! the buffer. The formatter reduces it to what should be inserted at the
//! suggestion's anchor.

use crate::editor::Position;

const FENCE: &str = "```";

pub struct CompletionFormatter {
    /// Buffer text before the anchor
    before_anchor: String,
    /// Text on the anchor line before the anchor
    line_prefix: String,
}

impl CompletionFormatter {
    pub fn new(lines: &[String], anchor: Position) -> Self {
        let row = anchor.line.saturating_sub(1);
        let col = anchor.column.saturating_sub(1);

        let line_prefix: String = lines
            .get(row)
            .map(|line| line.chars().take(col).collect())
            .unwrap_or_default();

        let mut before_anchor = String::new();
        for line in lines.iter().take(row) {
            before_anchor.push_str(line);
            before_anchor.push('\n');
        }
        before_anchor.push_str(&line_prefix);

        Self {
            before_anchor,
            line_prefix,
        }
    }

    pub fn format(&self, insert_text: &str) -> String {
        let text = normalize_line_endings(insert_text);
        let text = strip_code_fence(&text);
        let text = self.strip_echo(text);
        text.trim_end().to_string()
    }

    /// Drop text the model repeated from the buffer
    fn strip_echo<'t>(&self, text: &'t str) -> &'t str {
        if !self.before_anchor.is_empty()
            && let Some(rest) = text.strip_prefix(self.before_anchor.as_str())
        {
            return rest;
        }

        let typed = self.line_prefix.trim_start();
        if !typed.is_empty()
            && let Some(rest) = text.strip_prefix(typed)
        {
            return rest;
        }

        text
    }
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Contents of the first fenced block, or the text unchanged if there is none
fn strip_code_fence(text: &str) -> &str {
    let Some(open) = text.find(FENCE) else {
        return text;
    };

    let after_open = &text[open + FENCE.len()..];
    // Skip the info string ("verilog", "systemverilog", ...)
    let body = match after_open.find('\n') {
        Some(newline) => &after_open[newline + 1..],
        None => return text,
    };

    match body.find(FENCE) {
        Some(close) => &body[..close],
        None => body,
    }
}
