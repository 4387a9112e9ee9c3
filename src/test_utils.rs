//! Shared test utilities for charsel
//!
//! Common fixtures and helper functions used across test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::api::Character;
    use crate::app::App;
    use crate::config::Config;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Helper to create App with default config for tests
    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    /// App preloaded with the fixture result list
    pub fn test_app_with_results() -> App {
        let mut app = test_app();
        app.search.results = test_characters();
        app
    }

    /// Fixture characters mirroring the shape of real API payloads
    pub fn test_characters() -> Vec<Character> {
        vec![
            Character {
                id: 1,
                name: "Rick Sanchez".to_string(),
                image: "https://example.com/1.jpeg".to_string(),
                episode: vec!["e1".to_string(), "e2".to_string(), "e3".to_string()],
            },
            Character {
                id: 2,
                name: "Morty Smith".to_string(),
                image: "https://example.com/2.jpeg".to_string(),
                episode: vec!["e1".to_string()],
            },
            Character {
                id: 3,
                name: "Summer Smith".to_string(),
                image: "https://example.com/3.jpeg".to_string(),
                episode: vec!["e2".to_string(), "e3".to_string()],
            },
        ]
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
