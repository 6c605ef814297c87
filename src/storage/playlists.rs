//! Persisted playlist document
//!
//! A single JSON document holds every playlist: one array of custom
//! playlists serialized in full, one array of local playlist path
//! references. Reads load the whole document; updates overwrite the
//! whole document.

use super::adapter::FileAdapter;
use super::StorageResult;
use crate::model::{LocalPlaylist, Playlist};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk form of the playlist collection
///
/// The top-level arrays use compact numeric keys: `"0"` for custom
/// playlists, `"1"` for local references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistsDocument {
    /// User-authored playlists, stored in full
    #[serde(rename = "0", default)]
    pub custom: Vec<Playlist>,

    /// References to .m3u playlists discovered on disk
    #[serde(rename = "1", default)]
    pub local: Vec<LocalPlaylist>,
}

/// The playlists.json store
pub struct PlaylistsFile {
    adapter: FileAdapter,
}

impl PlaylistsFile {
    /// File name within the data directory
    pub const FILE_NAME: &'static str = "playlists.json";

    /// Create a store at an explicit file path
    pub fn new(path: PathBuf) -> Self {
        Self {
            adapter: FileAdapter::new(path),
        }
    }

    /// Create a store at the conventional location under `data_dir`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(Self::FILE_NAME))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        self.adapter.path()
    }

    /// Read the whole document; a missing file is the empty document
    pub fn read(&self) -> StorageResult<PlaylistsDocument> {
        match self.adapter.read()? {
            Some(content) => Ok(serde_json::from_str(&content)?),
            None => Ok(PlaylistsDocument::default()),
        }
    }

    /// Overwrite the whole document
    pub fn write(&self, document: &PlaylistsDocument) -> StorageResult<()> {
        let content = serde_json::to_string(document)?;
        self.adapter.overwrite(&content)
    }
}
