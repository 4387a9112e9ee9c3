use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::theme;

/// The search input field, a single-line textarea
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(theme::input::BORDER_UNFOCUSED)),
        );
        textarea.set_placeholder_text("Search characters...");
        textarea.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::input::CURSOR);

        Self { textarea }
    }

    /// The current query text
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.query().is_empty()
    }

    /// Replace the whole query with `text`, cursor at the end
    pub fn replace_query(&mut self, text: &str) {
        self.textarea.move_cursor(tui_textarea::CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
