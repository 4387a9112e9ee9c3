//! Search module
//!
//! Owns the live query's status: the debounced fetch schedule, the request id
//! bookkeeping that discards stale responses, and the substring matcher shared
//! by keyboard navigation and result highlighting.

mod debouncer;
mod matcher;
mod search_state;

pub use debouncer::Debouncer;
pub use matcher::{MatchSpan, first_match_index, match_spans, name_matches};
pub use search_state::SearchState;
