use crate::config::{ClipboardBackend, Config};
use crate::help::HelpState;
use crate::input::InputState;
use crate::notification::NotificationState;
use crate::results::CursorState;
use crate::search::{self, Debouncer, SearchState};
use crate::selection::SelectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    ResultsPane,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Selection,
    Query,
}

pub struct App {
    pub input: InputState,
    pub search: SearchState,
    pub selection: SelectionState,
    pub cursor: CursorState,
    pub debouncer: Debouncer,
    pub focus: Focus,
    pub output_mode: Option<OutputMode>,
    pub should_quit: bool,
    pub help: HelpState,
    pub notification: NotificationState,
    pub clipboard_backend: ClipboardBackend,
    dirty: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputState::new(),
            search: SearchState::new(),
            selection: SelectionState::new(),
            cursor: CursorState::new(),
            debouncer: Debouncer::new(config.search.debounce_ms),
            focus: Focus::InputField,
            output_mode: None,
            should_quit: false,
            help: HelpState::new(),
            notification: NotificationState::new(),
            clipboard_backend: config.clipboard.backend,
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Issue a fetch for the current query text
    ///
    /// Goes straight to the worker, bypassing the debounce window; any
    /// pending debounced fetch would be redundant and is dropped.
    pub fn trigger_fetch(&mut self) {
        let query = self.query().to_string();
        self.search.send_request(&query);
        self.debouncer.mark_fetched();
        self.mark_dirty();
    }

    /// Replace the query text and fetch immediately
    ///
    /// Used by completion actions (Tab, Enter, results-pane select), which
    /// set the query programmatically rather than keystroke by keystroke.
    pub fn set_query(&mut self, text: &str) {
        self.input.replace_query(text);
        self.trigger_fetch();
    }

    /// Arrow-key selection from the input field
    ///
    /// Anchors on the first result whose name contains the query, steps one
    /// row forward or back with wraparound, and replaces the whole selection
    /// with that single character. Focus moves to the results pane so the
    /// arrows keep stepping through the list.
    pub fn arrow_select(&mut self, forward: bool) {
        let len = self.search.results.len();
        if len == 0 {
            return;
        }

        let query = self.query().to_string();
        let Some(anchor) = search::first_match_index(&self.search.results, &query) else {
            // No name contains the query, nothing to step from
            return;
        };
        let target = if forward {
            (anchor + 1) % len
        } else {
            (anchor + len - 1) % len
        };

        let character = self.search.results[target].clone();
        self.selection.replace_with(character);
        self.cursor.set(target);
        self.focus = Focus::ResultsPane;
    }
}
