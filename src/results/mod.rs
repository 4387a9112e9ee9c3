//! Results pane module
//!
//! The fetched character list: a cursor for keyboard navigation, the key
//! handling for checkbox-style selection, and the list render with match
//! highlighting.

mod cursor_state;
pub mod results_events;
pub mod results_render;

pub use cursor_state::CursorState;
