//! Help popup rendering

use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme;
use crate::widgets::popup;

const POPUP_WIDTH: u16 = 52;

/// (key, description) rows, section headers carried as empty-key rows
const BINDINGS: &[(&str, &str)] = &[
    ("", "Search input"),
    ("↓ / ↑", "select next/previous matching character"),
    ("Tab", "complete from first selected, clear selection"),
    ("Enter", "take first result as query and selection"),
    ("Backspace", "on empty input: drop last selected"),
    ("", "Results list"),
    ("j / k", "move cursor"),
    ("Space", "toggle character at cursor"),
    ("x / Del", "remove character at cursor from selection"),
    ("Enter", "select character at cursor"),
    ("i or /", "back to search input"),
    ("", "Global"),
    ("Shift+Tab", "switch focus"),
    ("Ctrl+D", "quit and print selected names"),
    ("Ctrl+Q", "quit and print query"),
    ("Ctrl+Y", "copy selected names to clipboard"),
    ("Ctrl+C / q", "quit without output"),
];

pub fn render_help(frame: &mut Frame) {
    let mut lines = Vec::with_capacity(BINDINGS.len());
    for (key, description) in BINDINGS {
        if key.is_empty() {
            lines.push(Line::from(Span::styled(
                format!(" {}", description),
                Style::default().fg(theme::help::SECTION),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<12}", key),
                    Style::default().fg(theme::help::KEY),
                ),
                Span::styled(*description, Style::default().fg(theme::help::DESCRIPTION)),
            ]));
        }
    }

    let height = lines.len() as u16 + 2;
    let area = popup::centered_popup(frame.area(), POPUP_WIDTH, height);
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help (Esc to close) ")
        .border_style(Style::default().fg(theme::help::BORDER));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_help_lists_key_bindings() {
        let backend = TestBackend::new(60, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render_help(frame)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let rendered: String = buffer.content().iter().map(|cell| cell.symbol()).collect();

        assert!(rendered.contains("Tab"));
        assert!(rendered.contains("Space"));
        assert!(rendered.contains("Ctrl+D"));
    }
}
