use crate::completion::CompletionState;
use crate::config::Config;
use crate::editor::{EditorState, GhostText};
use crate::notification::NotificationState;

pub struct App {
    pub editor: EditorState,
    pub completion: CompletionState,
    pub notification: NotificationState,
    pub should_quit: bool,
}

impl App {
    pub fn new(editor: EditorState, config: &Config) -> Self {
        Self {
            editor,
            completion: CompletionState::new(&config.completion),
            notification: NotificationState::new(),
            should_quit: false,
        }
    }

    pub fn with_text(text: &str, config: &Config) -> Self {
        Self::new(EditorState::with_text(text, &config.editor), config)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Ghost text currently shown at the cursor
    pub fn ghost_text(&self) -> Option<GhostText> {
        self.editor.ghost_text(&self.completion)
    }

    /// Controller state shown in the status line
    pub fn completion_status(&self) -> &'static str {
        if !self.completion.enabled || !self.completion.is_connected() {
            "off"
        } else if self.completion.suppressed {
            "suppressed"
        } else if self.completion.is_fetching() {
            "fetching"
        } else {
            "idle"
        }
    }

    /// Stop the completion worker before exit
    pub fn shutdown(&mut self) {
        self.completion.shutdown();
    }
}
