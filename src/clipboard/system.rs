use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

/// Copy text via the OS clipboard
pub fn copy(text: &str) -> ClipboardResult {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}
