use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use crate::completion::completion_events;
use crate::notification::NotificationKind;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.tick();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Fire an expired debounce timer and apply worker responses
    pub fn tick(&mut self) {
        if let Some(outcome) = completion_events::fire_debounced(&mut self.completion, &self.editor)
        {
            log::debug!("Debounce fired: {:?}", outcome);
        }

        completion_events::poll_response_channel(&mut self.completion, &mut self.editor);
    }

    fn handle_paste_event(&mut self, text: String) {
        self.editor.insert_str(&text);
        completion_events::handle_paste(&mut self.completion);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self
            .notification
            .current()
            .is_some_and(|n| n.kind == NotificationKind::Error)
        {
            self.notification.dismiss();
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Char('s') if ctrl => self.save(),
            KeyCode::Tab if key.modifiers.is_empty() => {
                if !self.editor.accept_inline(&self.completion) {
                    self.forward_to_editor(key);
                }
            }
            KeyCode::Char(']') if alt => {
                self.editor.cycle_inline(&self.completion, true);
            }
            KeyCode::Char('[') if alt => {
                self.editor.cycle_inline(&self.completion, false);
            }
            KeyCode::Esc => {
                completion_events::handle_key_up(&mut self.completion, &mut self.editor, key.code);
            }
            _ => self.forward_to_editor(key),
        }
    }

    fn forward_to_editor(&mut self, key: KeyEvent) {
        self.editor.input(key);
        completion_events::handle_key_up(&mut self.completion, &mut self.editor, key.code);
    }

    fn save(&mut self) {
        match self.editor.save() {
            Ok(_) => {
                let message = format!("Saved {}", self.editor.file_name());
                self.notification.show(&message);
            }
            Err(e) => {
                log::error!("Save failed: {}", e);
                self.notification.show_error(&e.to_string());
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
