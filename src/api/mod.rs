//! Character API module
//!
//! Talks to the remote character-listing endpoint. The async client lives on a
//! background worker thread; the main thread communicates with it over
//! channels using request/response messages tagged with a request id.

mod client;
mod types;
pub mod worker;

pub use client::{ApiClient, ApiError};
pub use types::{Character, CharacterPage};
pub use worker::{SearchRequest, SearchResponse};
