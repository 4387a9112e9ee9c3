use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::{App, Focus};
use crate::theme;

pub const INPUT_FIELD_HEIGHT: u16 = 3;

pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::InputField {
        theme::input::BORDER_FOCUSED
    } else {
        theme::input::BORDER_UNFOCUSED
    };

    let title = Line::from(" Search ");
    let hint = if app.focus == Focus::InputField {
        " ↑↓ select · Tab complete · F1 help "
    } else {
        " press / to search "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_top(
            Line::from(Span::styled(
                hint,
                Style::default().fg(theme::input::PLACEHOLDER),
            ))
            .alignment(Alignment::Right),
        )
        .border_style(Style::default().fg(border_color));

    app.input.textarea.set_block(block);
    frame.render_widget(&app.input.textarea, area);
}
