//! Persisted user settings
//!
//! Remembers the last-used sort policy and direction per entity kind,
//! backed by a settings.json file read and overwritten in full.
//! Change notification is explicit: interested parties register a
//! callback and are told which key changed, then re-read the value
//! through the getters. There is no implicit reactivity.

use crate::library::{AlbumSortBy, ArtistSortBy, GenreSortBy, PlaylistSortBy, SongSortBy};
use crate::storage::{FileAdapter, StorageResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Identifies which setting changed in a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    SongsSortBy,
    SongsSortReverse,
    AlbumsSortBy,
    AlbumsSortReverse,
    ArtistsSortBy,
    ArtistsSortReverse,
    GenresSortBy,
    GenresSortReverse,
    PlaylistsSortBy,
    PlaylistsSortReverse,
}

/// Serialized settings content
///
/// Every field carries a default so files written by older versions
/// keep loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub last_used_songs_sort_by: SongSortBy,
    pub last_used_songs_sort_reverse: bool,
    pub last_used_albums_sort_by: AlbumSortBy,
    pub last_used_albums_sort_reverse: bool,
    pub last_used_artists_sort_by: ArtistSortBy,
    pub last_used_artists_sort_reverse: bool,
    pub last_used_genres_sort_by: GenreSortBy,
    pub last_used_genres_sort_reverse: bool,
    pub last_used_playlists_sort_by: PlaylistSortBy,
    pub last_used_playlists_sort_reverse: bool,
}

type Listener = Box<dyn Fn(SettingKey) + Send + Sync>;

/// The settings.json store with change notification
pub struct Settings {
    adapter: FileAdapter,
    data: SettingsData,
    listeners: Vec<Listener>,
}

impl Settings {
    /// File name within the data directory
    pub const FILE_NAME: &'static str = "settings.json";

    /// Load settings from `path`; a missing file yields defaults
    pub fn load(path: PathBuf) -> StorageResult<Self> {
        let adapter = FileAdapter::new(path);
        let data = match adapter.read()? {
            Some(content) => serde_json::from_str(&content)?,
            None => SettingsData::default(),
        };
        Ok(Self {
            adapter,
            data,
            listeners: Vec::new(),
        })
    }

    /// Load from the conventional location under `data_dir`
    pub fn load_from_dir(data_dir: &Path) -> StorageResult<Self> {
        Self::load(data_dir.join(Self::FILE_NAME))
    }

    /// Register a change callback
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(SettingKey) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn persist(&self) -> StorageResult<()> {
        let content = serde_json::to_string_pretty(&self.data)?;
        self.adapter.overwrite(&content)
    }

    fn notify(&self, key: SettingKey) {
        for listener in &self.listeners {
            listener(key);
        }
    }

    // Songs

    pub fn songs_sort_by(&self) -> SongSortBy {
        self.data.last_used_songs_sort_by
    }

    pub fn set_songs_sort_by(&mut self, value: SongSortBy) -> StorageResult<()> {
        self.data.last_used_songs_sort_by = value;
        self.persist()?;
        self.notify(SettingKey::SongsSortBy);
        Ok(())
    }

    pub fn songs_sort_reverse(&self) -> bool {
        self.data.last_used_songs_sort_reverse
    }

    pub fn set_songs_sort_reverse(&mut self, value: bool) -> StorageResult<()> {
        self.data.last_used_songs_sort_reverse = value;
        self.persist()?;
        self.notify(SettingKey::SongsSortReverse);
        Ok(())
    }

    // Albums

    pub fn albums_sort_by(&self) -> AlbumSortBy {
        self.data.last_used_albums_sort_by
    }

    pub fn set_albums_sort_by(&mut self, value: AlbumSortBy) -> StorageResult<()> {
        self.data.last_used_albums_sort_by = value;
        self.persist()?;
        self.notify(SettingKey::AlbumsSortBy);
        Ok(())
    }

    pub fn albums_sort_reverse(&self) -> bool {
        self.data.last_used_albums_sort_reverse
    }

    pub fn set_albums_sort_reverse(&mut self, value: bool) -> StorageResult<()> {
        self.data.last_used_albums_sort_reverse = value;
        self.persist()?;
        self.notify(SettingKey::AlbumsSortReverse);
        Ok(())
    }

    // Artists

    pub fn artists_sort_by(&self) -> ArtistSortBy {
        self.data.last_used_artists_sort_by
    }

    pub fn set_artists_sort_by(&mut self, value: ArtistSortBy) -> StorageResult<()> {
        self.data.last_used_artists_sort_by = value;
        self.persist()?;
        self.notify(SettingKey::ArtistsSortBy);
        Ok(())
    }

    pub fn artists_sort_reverse(&self) -> bool {
        self.data.last_used_artists_sort_reverse
    }

    pub fn set_artists_sort_reverse(&mut self, value: bool) -> StorageResult<()> {
        self.data.last_used_artists_sort_reverse = value;
        self.persist()?;
        self.notify(SettingKey::ArtistsSortReverse);
        Ok(())
    }

    // Genres

    pub fn genres_sort_by(&self) -> GenreSortBy {
        self.data.last_used_genres_sort_by
    }

    pub fn set_genres_sort_by(&mut self, value: GenreSortBy) -> StorageResult<()> {
        self.data.last_used_genres_sort_by = value;
        self.persist()?;
        self.notify(SettingKey::GenresSortBy);
        Ok(())
    }

    pub fn genres_sort_reverse(&self) -> bool {
        self.data.last_used_genres_sort_reverse
    }

    pub fn set_genres_sort_reverse(&mut self, value: bool) -> StorageResult<()> {
        self.data.last_used_genres_sort_reverse = value;
        self.persist()?;
        self.notify(SettingKey::GenresSortReverse);
        Ok(())
    }

    // Playlists

    pub fn playlists_sort_by(&self) -> PlaylistSortBy {
        self.data.last_used_playlists_sort_by
    }

    pub fn set_playlists_sort_by(&mut self, value: PlaylistSortBy) -> StorageResult<()> {
        self.data.last_used_playlists_sort_by = value;
        self.persist()?;
        self.notify(SettingKey::PlaylistsSortBy);
        Ok(())
    }

    pub fn playlists_sort_reverse(&self) -> bool {
        self.data.last_used_playlists_sort_reverse
    }

    pub fn set_playlists_sort_reverse(&mut self, value: bool) -> StorageResult<()> {
        self.data.last_used_playlists_sort_reverse = value;
        self.persist()?;
        self.notify(SettingKey::PlaylistsSortReverse);
        Ok(())
    }
}
