//! Shared test utilities for hdlpad
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::completion::CompletionHost;
    use crate::config::Config;
    use crate::editor::{Position, offset_at};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// A small Verilog module used as editor content
    pub const TEST_VERILOG: &str = "module top(\n  input a,\n  output y\n);\n";

    /// Helper to create App with default config for tests
    pub fn test_app(text: &str) -> App {
        App::with_text(text, &Config::default())
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// In-memory editor standing in for the real one in controller tests
    #[derive(Debug, Clone)]
    pub struct FakeHost {
        pub text: String,
        pub cursor: Position,
        /// Times the controller asked to show ghost text
        pub shown: usize,
        /// Times the controller asked to hide ghost text
        pub hidden: usize,
    }

    impl FakeHost {
        pub fn new(text: &str, cursor: Position) -> Self {
            Self {
                text: text.to_string(),
                cursor,
                shown: 0,
                hidden: 0,
            }
        }

        pub fn lines(&self) -> Vec<String> {
            self.text.split('\n').map(str::to_string).collect()
        }
    }

    impl CompletionHost for FakeHost {
        fn full_text(&self) -> String {
            self.text.clone()
        }

        fn cursor_position(&self) -> Position {
            self.cursor
        }

        fn offset_at(&self, position: Position) -> usize {
            offset_at(&self.lines(), position)
        }

        fn show_inline_suggestions(&mut self) {
            self.shown += 1;
        }

        fn hide_inline_suggestions(&mut self) {
            self.hidden += 1;
        }
    }
}
