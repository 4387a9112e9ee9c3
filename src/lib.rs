//! charsel library - interactive character search and multi-select
//!
//! This library exposes the core functionality of charsel for testing
//! purposes.

pub mod api;
pub mod app;
pub mod clipboard;
pub mod config;
pub mod help;
pub mod input;
pub mod notification;
pub mod results;
pub mod search;
pub mod selection;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, Focus, OutputMode};
pub use config::Config;
