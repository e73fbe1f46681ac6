use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::editor_state::EditorState;
use super::inline::GhostText;
use crate::syntax_highlight::VerilogHighlighter;
use crate::syntax_highlight::overlay::{
    extract_visible_spans, insert_cursor_into_spans, overlay_ghost_text,
};

/// Minimum digits reserved for line numbers
const MIN_NUMBER_WIDTH: usize = 3;

/// Width of the line-number gutter, including the separating space
pub fn gutter_width(line_count: usize) -> usize {
    line_count.to_string().len().max(MIN_NUMBER_WIDTH) + 1
}

/// Render the buffer with line numbers, highlighting, ghost text and cursor
pub fn render_editor(
    editor: &mut EditorState,
    ghost: Option<&GhostText>,
    frame: &mut Frame,
    area: Rect,
) {
    let lines = build_lines(editor, ghost, area.width as usize, area.height as usize);
    frame.render_widget(Paragraph::new(lines), area);
}

/// Lines of the viewport; scrolls the editor to keep the cursor visible
pub fn build_lines(
    editor: &mut EditorState,
    ghost: Option<&GhostText>,
    width: usize,
    height: usize,
) -> Vec<Line<'static>> {
    let gutter = gutter_width(editor.lines().len());
    let text_width = width.saturating_sub(gutter);
    editor.scroll_to_cursor(height, text_width);

    let (cursor_row, cursor_col) = editor.textarea.cursor();
    let col_offset = editor.col_offset;
    let highlighted = VerilogHighlighter::highlight_lines(editor.lines());
    let ghost_lines: Vec<&str> = ghost.map(GhostText::lines).unwrap_or_default();

    let mut rendered = Vec::with_capacity(height);

    for (row, spans) in highlighted.iter().enumerate().skip(editor.row_offset) {
        if rendered.len() >= height {
            break;
        }

        let number = format!("{:>w$} ", row + 1, w = gutter - 1);
        if row != cursor_row {
            let mut line = vec![Span::styled(number, Style::default().fg(Color::DarkGray))];
            line.extend(extract_visible_spans(spans, col_offset, text_width));
            rendered.push(Line::from(line));
            continue;
        }

        let composed = overlay_ghost_text(spans, cursor_col, &ghost_lines);
        for (i, spans) in composed.iter().enumerate() {
            if rendered.len() >= height {
                break;
            }

            let mut visible = extract_visible_spans(spans, col_offset, text_width);
            let gutter_span = if i == 0 {
                visible = insert_cursor_into_spans(visible, cursor_col - col_offset);
                Span::styled(number.clone(), Style::default().fg(Color::Yellow))
            } else {
                Span::raw(" ".repeat(gutter))
            };

            let mut line = vec![gutter_span];
            line.extend(visible);
            rendered.push(Line::from(line));
        }
    }

    rendered
}

#[cfg(test)]
#[path = "editor_render_tests.rs"]
mod editor_render_tests;
