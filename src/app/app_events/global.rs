use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::{App, Focus, OutputMode};
use crate::clipboard;

/// Keys that apply regardless of focus
///
/// Returns true when the key was consumed. While the help popup is open it
/// swallows everything except its own close keys.
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    if app.help.visible {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => {
                app.help.visible = false;
            }
            KeyCode::Char('q') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.help.visible = false;
            }
            _ => {}
        }
        return true;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            true
        }

        KeyCode::Char('q') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            // The input field needs the literal character
            if app.focus == Focus::ResultsPane {
                app.should_quit = true;
                true
            } else {
                false
            }
        }

        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.output_mode = Some(OutputMode::Selection);
            app.should_quit = true;
            true
        }

        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.output_mode = Some(OutputMode::Query);
            app.should_quit = true;
            true
        }

        KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            handle_copy_selection(app);
            true
        }

        KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::InputField => Focus::ResultsPane,
                Focus::ResultsPane => Focus::InputField,
            };
            true
        }

        KeyCode::F(1) => {
            app.help.toggle();
            true
        }
        KeyCode::Char('?') => {
            if app.focus == Focus::ResultsPane {
                app.help.toggle();
                true
            } else {
                false
            }
        }

        _ => false,
    }
}

fn handle_copy_selection(app: &mut App) {
    if app.selection.is_empty() {
        app.notification.show("Nothing selected");
        return;
    }

    let names = app.selection.joined_names();
    match clipboard::copy_to_clipboard(&names, app.clipboard_backend) {
        Ok(()) => {
            let count = app.selection.len();
            let plural = if count == 1 { "" } else { "s" };
            app.notification
                .show(&format!("Copied {} name{}", count, plural));
        }
        Err(_) => {
            app.notification.show_warning("Clipboard unavailable");
        }
    }
}
