//! Help popup module

mod help_render;
mod help_state;

pub use help_render::render_help;
pub use help_state::HelpState;
