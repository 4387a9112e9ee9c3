//! Wire types for the character API
//!
//! Deserialized verbatim from the endpoint's JSON body. Unknown fields are
//! ignored so API additions don't break older binaries.

use serde::Deserialize;

/// A single character record from the remote API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    /// Portrait URL (not fetched; shown as metadata only)
    #[serde(default)]
    pub image: String,
    /// Episode URLs this character appears in
    #[serde(default)]
    pub episode: Vec<String>,
}

impl Character {
    /// Number of episodes the character appears in
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }
}

/// Response body shape: `{ "results": [Character, ...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterPage {
    pub results: Vec<Character>,
}
