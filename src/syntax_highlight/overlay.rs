//! Overlay utilities for syntax-highlighted lines in the editor viewport.
//!
//! This module provides functions for:
//! - Extracting the visible portion of styled spans when horizontally scrolled
//! - Splicing ghost text (inline suggestions) into a line
//! - Inserting a cursor indicator into styled spans

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Style of inline suggestion text
pub fn ghost_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Extracts the visible portion of spans for a scrolled viewport.
///
/// # Parameters
/// - `spans`: Complete styled text spans of one line
/// - `scroll_offset`: Horizontal scroll position (characters from left)
/// - `viewport_width`: Width of visible area in characters
///
/// # Example
/// For text "Hello World" with scroll_offset=3 and viewport_width=5,
/// returns spans for "lo Wo".
pub fn extract_visible_spans(
    spans: &[Span<'static>],
    scroll_offset: usize,
    viewport_width: usize,
) -> Vec<Span<'static>> {
    let mut result = Vec::new();
    let mut current_col = 0;
    let end_col = scroll_offset + viewport_width;

    for span in spans {
        let span_len = span.content.chars().count();
        let span_end = current_col + span_len;

        if span_end <= scroll_offset {
            current_col = span_end;
            continue;
        }
        if current_col >= end_col {
            break;
        }

        let start_in_span = scroll_offset.saturating_sub(current_col);
        let end_in_span = (end_col - current_col).min(span_len);
        if start_in_span < end_in_span {
            let visible: String = span
                .content
                .chars()
                .skip(start_in_span)
                .take(end_in_span - start_in_span)
                .collect();
            result.push(Span::styled(visible, span.style));
        }

        current_col = span_end;
    }

    result
}

/// Splits spans at character column `col`, keeping styles on both halves.
pub fn split_spans_at(
    spans: &[Span<'static>],
    col: usize,
) -> (Vec<Span<'static>>, Vec<Span<'static>>) {
    let mut before = Vec::new();
    let mut after = Vec::new();
    let mut current_col = 0;

    for span in spans {
        let span_len = span.content.chars().count();
        let span_end = current_col + span_len;

        if span_end <= col {
            before.push(span.clone());
        } else if current_col >= col {
            after.push(span.clone());
        } else {
            let split = col - current_col;
            let head: String = span.content.chars().take(split).collect();
            let tail: String = span.content.chars().skip(split).collect();
            before.push(Span::styled(head, span.style));
            after.push(Span::styled(tail, span.style));
        }

        current_col = span_end;
    }

    (before, after)
}

/// Splices ghost text into a line at `col`.
///
/// The first ghost line continues the buffer line; further ghost lines become
/// virtual lines below it. The rest of the buffer line follows the last ghost
/// line. Returns one span list per rendered line.
pub fn overlay_ghost_text(
    spans: &[Span<'static>],
    col: usize,
    ghost_lines: &[&str],
) -> Vec<Vec<Span<'static>>> {
    let (before, after) = split_spans_at(spans, col);
    if ghost_lines.is_empty() {
        let mut line = before;
        line.extend(after);
        return vec![line];
    }

    let mut rendered: Vec<Vec<Span<'static>>> = Vec::with_capacity(ghost_lines.len());
    for (i, ghost) in ghost_lines.iter().enumerate() {
        let mut line = if i == 0 { before.clone() } else { Vec::new() };
        if !ghost.is_empty() {
            line.push(Span::styled(ghost.to_string(), ghost_style()));
        }
        rendered.push(line);
    }
    if let Some(last) = rendered.last_mut() {
        last.extend(after);
    }

    rendered
}

/// Inserts a cursor indicator at the specified position within spans.
///
/// Splits the span containing the cursor and applies a REVERSED style modifier
/// to the cursor character. If `cursor_pos` is beyond the text, appends a
/// reversed space at the end.
pub fn insert_cursor_into_spans(
    spans: Vec<Span<'static>>,
    cursor_pos: usize,
) -> Vec<Span<'static>> {
    let (before, after) = split_spans_at(&spans, cursor_pos);
    let mut result = before;

    let mut rest = after.into_iter().filter(|span| !span.content.is_empty());
    let Some(first) = rest.next() else {
        result.push(Span::styled(
            " ",
            Style::default().add_modifier(Modifier::REVERSED),
        ));
        return result;
    };

    let mut chars = first.content.chars();
    if let Some(cursor_char) = chars.next() {
        result.push(Span::styled(
            cursor_char.to_string(),
            first.style.add_modifier(Modifier::REVERSED),
        ));
    }
    let tail: String = chars.collect();
    if !tail.is_empty() {
        result.push(Span::styled(tail, first.style));
    }
    result.extend(rest);

    result
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod overlay_tests;
