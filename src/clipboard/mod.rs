//! Clipboard module
//!
//! Copies the selected names out of the TUI. System clipboard via arboard,
//! with an OSC 52 escape-sequence fallback for remote sessions.

mod backend;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard};
