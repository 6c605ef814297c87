use serde::{Deserialize, Serialize};

/// An artist, derived from song tags; keyed by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    /// Artist name (the store key)
    pub name: String,

    /// Number of distinct albums this artist appears on
    pub albums_count: u32,

    /// Number of songs by this artist
    pub tracks_count: u32,
}
