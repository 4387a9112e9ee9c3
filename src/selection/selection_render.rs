//! Selection chips row rendering
//!
//! Shows the selected characters as inline chips above the input field, the
//! terminal stand-in for the removable tag list of a multi-select widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::selection::SelectionState;
use crate::theme;

pub const CHIPS_ROW_HEIGHT: u16 = 1;

pub fn render_chips(selection: &SelectionState, frame: &mut Frame, area: Rect) {
    let line = if selection.is_empty() {
        Line::from(Span::styled(
            " no characters selected ",
            Style::default().fg(theme::chips::EMPTY_HINT),
        ))
    } else {
        let mut spans = vec![Span::styled(
            format!(" {} selected: ", selection.len()),
            Style::default().fg(theme::chips::COUNT),
        )];

        for (i, character) in selection.selected().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    " · ",
                    Style::default().fg(theme::chips::COUNT),
                ));
            }
            spans.push(Span::styled(
                character.name.clone(),
                Style::default().fg(theme::chips::NAME),
            ));
        }

        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}
