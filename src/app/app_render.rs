use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::input::input_render::INPUT_FIELD_HEIGHT;
use crate::notification::render_notification;
use crate::selection::CHIPS_ROW_HEIGHT;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(CHIPS_ROW_HEIGHT),
            Constraint::Length(INPUT_FIELD_HEIGHT),
            Constraint::Min(3),
        ])
        .split(frame.area());

        crate::selection::render_chips(&self.selection, frame, layout[0]);
        crate::input::input_render::render_field(self, frame, layout[1]);
        crate::results::results_render::render_pane(self, frame, layout[2]);

        // Overlays draw last so they sit on top of the panes
        if self.help.visible {
            crate::help::render_help(frame);
        }
        render_notification(frame, &mut self.notification);
    }
}
