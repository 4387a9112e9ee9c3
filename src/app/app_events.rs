use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

use super::app_state::{App, Focus};
use crate::results;

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if self.debouncer.should_fetch() {
            self.trigger_fetch();
        }

        // Poll for worker responses
        if self.search.drain_responses() {
            self.cursor.clamp(self.search.results.len());
            self.mark_dirty();
        }

        if self.notification.clear_if_expired() {
            self.mark_dirty();
        }

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                    self.mark_dirty();
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                    self.mark_dirty();
                }
                Event::Resize(_, _) => {
                    self.mark_dirty();
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Pasted text lands in one chunk, so fetch immediately instead of
    /// debouncing per keystroke
    fn handle_paste_event(&mut self, text: String) {
        self.input.textarea.insert_str(&text);
        self.trigger_fetch();
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if global::handle_global_keys(self, key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::ResultsPane => results::results_events::handle_results_pane_key(self, key),
        }
    }

    fn handle_input_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down => {
                self.arrow_select(true);
            }
            KeyCode::Up => {
                self.arrow_select(false);
            }

            // Complete from the first selected character
            KeyCode::Tab => {
                if let Some(first) = self.selection.first() {
                    let name = first.name.clone();
                    self.set_query(&name);
                    self.selection.clear();
                }
            }

            // Take the first result as both query and selection
            KeyCode::Enter => {
                if let Some(first) = self.search.results.first() {
                    let character = first.clone();
                    self.set_query(&character.name);
                    self.selection.replace_with(character);
                }
            }

            KeyCode::Backspace if self.input.is_empty() => {
                self.selection.pop_last();
            }

            KeyCode::Esc => {
                self.focus = Focus::ResultsPane;
            }

            _ => {
                if self.input.textarea.input(key) {
                    self.debouncer.schedule_fetch();
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
