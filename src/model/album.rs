use serde::{Deserialize, Serialize};

/// An album, derived from the songs that belong to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    /// Stable identifier, derived from artist and name
    pub id: String,

    /// Album title
    pub name: String,

    /// Album artist (first grouping artist observed for the album)
    pub artist: Option<String>,

    /// Release year (first year observed for the album)
    pub year: Option<u32>,

    /// Number of member songs
    pub tracks_count: u32,
}

impl Album {
    /// Stable album id for an artist/name pair
    ///
    /// Album names collide across artists, so the id is composed of both.
    /// Comparison is case-insensitive so tag capitalization differences
    /// do not split an album in two.
    pub fn id_for(artist: Option<&str>, name: &str) -> String {
        let key = format!(
            "{}\u{0}{}",
            artist.unwrap_or("").to_lowercase(),
            name.to_lowercase()
        );
        format!("{:x}", md5::compute(key.as_bytes()))
    }
}
