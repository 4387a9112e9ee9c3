//! Results pane rendering
//!
//! One row per fetched character: checkbox mark, name with the matched
//! substrings highlighted, episode count. The pane title doubles as the
//! status line for loading and error states.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};
use crate::search::match_spans;
use crate::theme;

pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::ResultsPane {
        theme::results::BORDER_FOCUSED
    } else {
        theme::results::BORDER_UNFOCUSED
    };

    let title = pane_title(app);

    let viewport_height = area.height.saturating_sub(2) as usize;
    let len = app.search.results.len();
    app.cursor.clamp(len);
    app.cursor.scroll_into_view(viewport_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    if len == 0 {
        let hint = if app.search.loading {
            ""
        } else {
            " no matching characters "
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(theme::palette::TEXT_DIM),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let query = app.query().to_string();
    let cursor_focused = app.focus == Focus::ResultsPane;

    let visible = app
        .search
        .results
        .iter()
        .enumerate()
        .skip(app.cursor.offset)
        .take(viewport_height);

    let mut lines = Vec::with_capacity(viewport_height);
    for (index, character) in visible {
        let checkbox = if app.selection.contains(character.id) {
            Span::styled(
                " [x] ",
                Style::default().fg(theme::results::CHECKBOX_SELECTED),
            )
        } else {
            Span::styled(
                " [ ] ",
                Style::default().fg(theme::results::CHECKBOX_UNSELECTED),
            )
        };

        let mut spans = vec![checkbox];
        spans.extend(name_spans(&character.name, &query));
        spans.push(Span::styled(
            format!("  {} ep", character.episode_count()),
            Style::default().fg(theme::results::EPISODES),
        ));

        let mut line = Line::from(spans);
        if cursor_focused && index == app.cursor.index {
            line = line.style(theme::results::CURSOR_ROW);
        }
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Pane title carrying the fetch status
///
/// Loading wins over everything; an error is shown alongside the stale
/// result list it left behind.
fn pane_title(app: &App) -> Line<'static> {
    if app.search.loading {
        return Line::from(Span::styled(
            " Loading... ",
            Style::default().fg(theme::results::TITLE_LOADING),
        ));
    }

    if let Some(error) = &app.search.error {
        return Line::from(Span::styled(
            format!(" ⚠ {} ", error),
            Style::default().fg(theme::results::TITLE_ERROR),
        ));
    }

    Line::from(Span::styled(
        format!(" {} characters ", app.search.results.len()),
        Style::default().fg(theme::results::TITLE),
    ))
}

/// Split a name into styled spans, highlighting every query match
fn name_spans(name: &str, query: &str) -> Vec<Span<'static>> {
    let plain = Style::default().fg(theme::results::NAME);

    let spans = match_spans(name, query);
    if spans.is_empty() {
        return vec![Span::styled(name.to_string(), plain)];
    }

    let chars: Vec<char> = name.chars().collect();
    let mut out = Vec::new();
    let mut pos = 0;

    for span in spans {
        if span.start > pos {
            out.push(Span::styled(
                chars[pos..span.start].iter().collect::<String>(),
                plain,
            ));
        }
        out.push(Span::styled(
            chars[span.start..span.start + span.len]
                .iter()
                .collect::<String>(),
            theme::results::MATCH,
        ));
        pos = span.start + span.len;
    }

    if pos < chars.len() {
        out.push(Span::styled(
            chars[pos..].iter().collect::<String>(),
            plain,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{test_app, test_app_with_results};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_string(app: &mut App) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_pane(app, frame, frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_rows_show_names_and_episode_counts() {
        let mut app = test_app_with_results();
        let rendered = render_to_string(&mut app);

        assert!(rendered.contains("Rick Sanchez"));
        assert!(rendered.contains("Morty Smith"));
        assert!(rendered.contains("ep"));
    }

    #[test]
    fn test_title_shows_result_count() {
        let mut app = test_app_with_results();
        let rendered = render_to_string(&mut app);
        assert!(rendered.contains("3 characters"));
    }

    #[test]
    fn test_title_shows_loading() {
        let mut app = test_app_with_results();
        app.search.loading = true;
        let rendered = render_to_string(&mut app);
        assert!(rendered.contains("Loading..."));
    }

    #[test]
    fn test_error_title_keeps_stale_rows() {
        let mut app = test_app_with_results();
        app.search.error = Some("Network error: timed out".to_string());

        let rendered = render_to_string(&mut app);
        assert!(rendered.contains("Network error"));
        assert!(rendered.contains("Rick Sanchez"));
    }

    #[test]
    fn test_selected_rows_get_checked_boxes() {
        let mut app = test_app_with_results();
        let rick = app.search.results[0].clone();
        app.selection.toggle(&rick, true);

        let rendered = render_to_string(&mut app);
        assert!(rendered.contains("[x]"));
        assert!(rendered.contains("[ ]"));
    }

    #[test]
    fn test_empty_results_show_hint() {
        let mut app = test_app();
        let rendered = render_to_string(&mut app);
        assert!(rendered.contains("no matching characters"));
    }

    #[test]
    fn test_name_spans_split_around_match() {
        let spans = name_spans("Rick Sanchez", "sanchez");
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["Rick ", "Sanchez"]);
    }

    #[test]
    fn test_name_spans_with_expanding_lowercase_name() {
        // 'İ' lowers to two chars; the highlight split must still cover the
        // original name exactly, without slicing past its end
        let spans = name_spans("İRick Sanchez", "rick");
        let joined: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(joined, "İRick Sanchez");

        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["İ", "Rick", " Sanchez"]);
    }

    #[test]
    fn test_name_spans_empty_query_is_single_span() {
        let spans = name_spans("Rick Sanchez", "");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content.as_ref(), "Rick Sanchez");
    }
}
