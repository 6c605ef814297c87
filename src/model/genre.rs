use serde::{Deserialize, Serialize};

/// A genre, derived from song tags; keyed by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    /// Genre name (the store key)
    pub name: String,

    /// Number of songs tagged with this genre
    pub tracks_count: u32,
}
