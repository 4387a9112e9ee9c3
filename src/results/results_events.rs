use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Focus};

/// Key handling while the results pane has focus
///
/// Vim-style movement plus checkbox-style selection. Focus-returning keys
/// mirror the ways the pane can be entered from the input field.
pub fn handle_results_pane_key(app: &mut App, key: KeyEvent) {
    let len = app.search.results.len();

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.cursor.move_next(len);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.cursor.move_previous(len);
        }

        KeyCode::Char(' ') => {
            if let Some(character) = app.search.results.get(app.cursor.index) {
                let character = character.clone();
                app.selection.flip(&character);
            }
        }

        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(character) = app.search.results.get(app.cursor.index) {
                app.selection.remove(character.id);
            }
        }

        KeyCode::Enter => {
            if let Some(character) = app.search.results.get(app.cursor.index) {
                let character = character.clone();
                app.set_query(&character.name);
                app.selection.replace_with(character);
                app.focus = Focus::InputField;
            }
        }

        KeyCode::Char('i') | KeyCode::Char('/') | KeyCode::Esc => {
            app.focus = Focus::InputField;
        }

        _ => {}
    }
}
