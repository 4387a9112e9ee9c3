//! Selection module
//!
//! Owns the set of characters the user has marked as chosen: insertion
//! ordered, unique by id, mutated by checkbox-style toggles, keyboard
//! navigation, and explicit removal.

mod selection_render;
mod selection_state;

pub use selection_render::{CHIPS_ROW_HEIGHT, render_chips};
pub use selection_state::SelectionState;
