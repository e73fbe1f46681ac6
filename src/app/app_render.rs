use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use super::app_state::App;
use crate::editor::GhostText;
use crate::editor::editor_render::render_editor;
use crate::notification::render_notification;

const SEPARATOR: &str = " │ ";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());

        let ghost = self.ghost_text();
        render_editor(&mut self.editor, ghost.as_ref(), frame, layout[0]);
        self.render_status_line(ghost.as_ref(), frame, layout[1]);

        render_notification(frame, &mut self.notification);
    }

    fn render_status_line(&self, ghost: Option<&GhostText>, frame: &mut Frame, area: Rect) {
        let line = Line::from(self.status_text(ghost));
        let status = Paragraph::new(line).style(Style::default().fg(Color::White).bg(Color::DarkGray));
        frame.render_widget(status, area);
    }

    /// Language, file, cursor and completion state, separated by bars
    pub fn status_text(&self, ghost: Option<&GhostText>) -> String {
        let cursor = self.editor.cursor_position();
        let modified = if self.editor.modified { " [+]" } else { "" };

        let mut parts = vec![
            self.editor.language.name().to_string(),
            format!("{}{}", self.editor.file_name(), modified),
            format!("Ln {}, Col {}", cursor.line, cursor.column),
            format!(
                "cache {}/{}",
                self.completion.cache.len(),
                self.completion.cache.capacity()
            ),
            self.completion_status().to_string(),
        ];
        if let Some(ghost) = ghost {
            parts.push(format!("suggestion {}/{}", ghost.index + 1, ghost.total));
        }

        format!(" {}", parts.join(SEPARATOR))
    }
}
