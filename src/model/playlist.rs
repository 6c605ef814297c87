use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Distinguishes custom playlists created within the same microsecond
static CUSTOM_ID_SEQ: AtomicU64 = AtomicU64::new(0);

/// A playlist: user-authored ("custom") or mirroring an .m3u file on
/// disk ("local")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Stable identifier (the store key)
    pub id: String,

    /// Display title
    pub title: String,

    /// Member audio file paths, in playlist order
    pub song_paths: Vec<PathBuf>,

    /// For local playlists, the .m3u file they were parsed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

/// Persisted reference to a local playlist
///
/// Only the path is stored; members are re-parsed from the file the
/// next time the document is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalPlaylist {
    /// Path to the .m3u file
    pub path: PathBuf,
}

impl Playlist {
    /// Create a custom playlist with a generated id.
    ///
    /// Ids are unique within the process even for identical titles
    /// created back to back.
    pub fn custom(title: String, song_paths: Vec<PathBuf>) -> Self {
        let seq = CUSTOM_ID_SEQ.fetch_add(1, Ordering::Relaxed);
        let id = format!(
            "{:x}",
            md5::compute(format!(
                "{}\u{0}{}\u{0}{}",
                title,
                chrono::Utc::now().timestamp_micros(),
                seq
            ))
        );
        Self {
            id,
            title,
            song_paths,
            source: None,
        }
    }

    /// Stable id for a local playlist file
    pub fn local_id_for(path: &Path) -> String {
        format!("{:x}", md5::compute(path.to_string_lossy().as_bytes()))
    }

    /// Whether this playlist mirrors an .m3u file on disk
    pub fn is_local(&self) -> bool {
        self.source.is_some()
    }

    /// Number of member songs
    pub fn tracks_count(&self) -> u32 {
        self.song_paths.len() as u32
    }

    /// Persisted reference form; None for custom playlists
    pub fn as_local_ref(&self) -> Option<LocalPlaylist> {
        self.source
            .as_ref()
            .map(|path| LocalPlaylist { path: path.clone() })
    }
}
