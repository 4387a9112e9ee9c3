//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here; render files reference
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);

    // Shared cursor style for textarea widgets
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Input field styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const CURSOR: Style = palette::CURSOR;
}

/// Results pane styles
pub mod results {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;

    pub const TITLE: Color = palette::CYAN;
    pub const TITLE_LOADING: Color = palette::WARNING;
    pub const TITLE_ERROR: Color = palette::ERROR;

    pub const NAME: Color = palette::TEXT;
    pub const EPISODES: Color = palette::TEXT_MUTED;
    pub const CHECKBOX_SELECTED: Color = palette::SUCCESS;
    pub const CHECKBOX_UNSELECTED: Color = palette::TEXT_DIM;

    /// Matched substring within a result name
    pub const MATCH: Style = Style::new()
        .fg(palette::PINK)
        .add_modifier(Modifier::BOLD);

    /// Cursor row in the results pane
    pub const CURSOR_ROW: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Selection chips row styles
pub mod chips {
    use super::*;

    pub const NAME: Color = palette::PURPLE;
    pub const COUNT: Color = palette::TEXT_MUTED;
    pub const EMPTY_HINT: Color = palette::TEXT_DIM;
}

/// Help popup styles
pub mod help {
    use super::*;

    pub const BORDER: Color = palette::PURPLE;
    pub const KEY: Color = palette::CYAN;
    pub const DESCRIPTION: Color = palette::TEXT;
    pub const SECTION: Color = palette::WARNING;
}
