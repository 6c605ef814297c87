use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single audio file in the library, with its tag metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    /// Stable identifier, derived from the file path
    pub id: String,

    /// Path to the audio file
    pub path: PathBuf,

    /// Track title (falls back to the file stem when untagged)
    pub title: String,

    /// Artist name
    pub artist: Option<String>,

    /// Album name
    pub album: Option<String>,

    /// Album artist, when tagged separately from the track artist
    pub album_artist: Option<String>,

    /// Genre
    pub genre: Option<String>,

    /// Release year
    pub year: Option<u32>,

    /// Track number within the album
    pub track_number: Option<u32>,

    /// Track duration in milliseconds (0 when unknown)
    pub duration_ms: u32,

    /// When the file entered the library (file modification time)
    pub date_added: Option<DateTime<Utc>>,
}

impl Song {
    /// Stable song id for a file path
    pub fn id_for(path: &Path) -> String {
        format!("{:x}", md5::compute(path.to_string_lossy().as_bytes()))
    }

    /// Artist used for album grouping: the album-artist tag when present,
    /// the track artist otherwise
    pub fn grouping_artist(&self) -> Option<&str> {
        self.album_artist.as_deref().or(self.artist.as_deref())
    }

    /// File name including extension; used for the filename sort
    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
