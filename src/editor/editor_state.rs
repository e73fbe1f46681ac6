//! Editor buffer state: file IO, viewport scrolling and ghost-text selection

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::TextArea;

use super::inline::{GhostText, InlineCompletionSupplier, InlineSuggestState, applicable_remainders};
use super::position::{self, Position};
use crate::completion::CompletionHost;
use crate::config::{EditorConfig, Language};
use crate::error::HdlpadError;

/// Buffer contents when no file is given
pub const DEFAULT_TEXT: &str = "// Enter code";

pub struct EditorState {
    pub textarea: TextArea<'static>,
    pub language: Language,
    /// File the buffer is saved to
    pub path: Option<PathBuf>,
    /// Unsaved changes
    pub modified: bool,
    /// First buffer row shown in the viewport
    pub row_offset: usize,
    /// First buffer column shown in the viewport
    pub col_offset: usize,
    pub inline: InlineSuggestState,
}

impl EditorState {
    pub fn new(config: &EditorConfig) -> Self {
        Self::with_text(DEFAULT_TEXT, config)
    }

    pub fn with_text(text: &str, config: &EditorConfig) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        let mut textarea = if lines.is_empty() {
            TextArea::default()
        } else {
            TextArea::new(lines)
        };
        textarea.set_tab_length(config.tab_width);
        textarea.set_cursor_line_style(Style::default());

        Self {
            textarea,
            language: config.language,
            path: None,
            modified: false,
            row_offset: 0,
            col_offset: 0,
            inline: InlineSuggestState::default(),
        }
    }

    /// Load `path` into a new buffer
    ///
    /// A file that does not exist yet gives an empty buffer bound to `path`.
    pub fn open(config: &EditorConfig, path: &Path) -> Result<Self, HdlpadError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} does not exist, starting empty buffer", path.display());
                String::new()
            }
            Err(source) => {
                return Err(HdlpadError::ReadFile {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut editor = Self::with_text(&text, config);
        editor.path = Some(path.to_path_buf());
        Ok(editor)
    }

    /// Write the buffer to its file
    ///
    /// Returns the path written.
    pub fn save(&mut self) -> Result<PathBuf, HdlpadError> {
        let path = self.path.clone().ok_or(HdlpadError::NoFilePath)?;

        let mut contents = self.text();
        contents.push('\n');
        fs::write(&path, contents).map_err(|source| HdlpadError::WriteFile {
            path: path.clone(),
            source,
        })?;

        self.modified = false;
        log::debug!("Saved {}", path.display());
        Ok(path)
    }

    pub fn lines(&self) -> &[String] {
        self.textarea.lines()
    }

    pub fn text(&self) -> String {
        self.lines().join("\n")
    }

    pub fn cursor_position(&self) -> Position {
        Position::from_cursor(self.textarea.cursor())
    }

    pub fn file_name(&self) -> String {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "[No Name]".to_string())
    }

    /// Pass a key to the text area. Returns true if the buffer changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let changed = self.textarea.input(key);
        if changed {
            self.modified = true;
        }
        changed
    }

    /// Insert text at the cursor (paste, accepted suggestions)
    pub fn insert_str(&mut self, text: &str) -> bool {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let changed = self.textarea.insert_str(text);
        if changed {
            self.modified = true;
        }
        changed
    }

    /// Ghost text to show at the cursor, if any
    pub fn ghost_text(&self, supplier: &dyn InlineCompletionSupplier) -> Option<GhostText> {
        if !self.inline.visible {
            return None;
        }

        let cursor = self.cursor_position();
        let completions = supplier.provide_inline_completions(self.lines(), cursor);
        let remainders = applicable_remainders(&completions, self.lines(), cursor);
        if remainders.is_empty() {
            return None;
        }

        let total = remainders.len();
        let index = self.inline.selected % total;
        remainders.into_iter().nth(index).map(|text| GhostText { text, index, total })
    }

    /// Insert the visible ghost text. Returns false if nothing was shown.
    pub fn accept_inline(&mut self, supplier: &dyn InlineCompletionSupplier) -> bool {
        let Some(ghost) = self.ghost_text(supplier) else {
            return false;
        };

        log::debug!("Accepting suggestion ({} chars)", ghost.text.chars().count());
        self.insert_str(&ghost.text);
        self.inline.selected = 0;
        true
    }

    /// Show the next (or previous) applicable suggestion
    pub fn cycle_inline(&mut self, supplier: &dyn InlineCompletionSupplier, forward: bool) -> bool {
        let Some(ghost) = self.ghost_text(supplier) else {
            return false;
        };

        self.inline.selected = if forward {
            (ghost.index + 1) % ghost.total
        } else {
            (ghost.index + ghost.total - 1) % ghost.total
        };
        true
    }

    /// Scroll so the cursor stays inside a `height` x `width` viewport
    pub fn scroll_to_cursor(&mut self, height: usize, width: usize) {
        let (row, col) = self.textarea.cursor();

        if row < self.row_offset {
            self.row_offset = row;
        } else if height > 0 && row >= self.row_offset + height {
            self.row_offset = row + 1 - height;
        }

        if col < self.col_offset {
            self.col_offset = col;
        } else if width > 0 && col >= self.col_offset + width {
            self.col_offset = col + 1 - width;
        }
    }
}

impl CompletionHost for EditorState {
    fn full_text(&self) -> String {
        self.text()
    }

    fn cursor_position(&self) -> Position {
        EditorState::cursor_position(self)
    }

    fn offset_at(&self, position: Position) -> usize {
        position::offset_at(self.lines(), position)
    }

    fn show_inline_suggestions(&mut self) {
        self.inline.visible = true;
        self.inline.selected = 0;
    }

    fn hide_inline_suggestions(&mut self) {
        self.inline.visible = false;
        self.inline.selected = 0;
    }
}

#[cfg(test)]
#[path = "editor_state_tests.rs"]
mod editor_state_tests;
