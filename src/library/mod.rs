//! Keyed entity stores and their sort facades
//!
//! Each kind of library entity (songs, albums, artists, genres,
//! playlists) lives in its own store: a keyed in-memory collection
//! exposing `get` plus a pure `sort(keys, by, reverse)` facade that
//! reorders caller-supplied keys without touching anything else.
//!
//! Stores are populated by the scanner and only read afterwards; a
//! refresh produces a new [`Library`] value which the owner swaps in,
//! so readers never observe a half-updated store.

mod albums;
mod artists;
mod genres;
mod order;
mod playlists;
mod songs;

pub use albums::{AlbumSortBy, AlbumStore};
pub use artists::{ArtistSortBy, ArtistStore};
pub use genres::{GenreSortBy, GenreStore};
pub use playlists::{PlaylistSortBy, PlaylistStore};
pub use songs::{SongSortBy, SongStore};

use crate::model::{Playlist, Song};

/// The in-memory music library: one keyed store per entity kind
#[derive(Debug, Clone, Default)]
pub struct Library {
    songs: SongStore,
    albums: AlbumStore,
    artists: ArtistStore,
    genres: GenreStore,
    playlists: PlaylistStore,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a song and update the derived album/artist/genre entries
    pub fn add_song(&mut self, song: Song) {
        let album_id = self.albums.index_song(&song);
        self.artists.index_song(&song, album_id.as_deref());
        self.genres.index_song(&song);
        self.songs.insert(song);
    }

    /// Add a playlist (custom or local)
    pub fn add_playlist(&mut self, playlist: Playlist) {
        self.playlists.insert(playlist);
    }

    /// Song store
    pub fn songs(&self) -> &SongStore {
        &self.songs
    }

    /// Album store
    pub fn albums(&self) -> &AlbumStore {
        &self.albums
    }

    /// Artist store
    pub fn artists(&self) -> &ArtistStore {
        &self.artists
    }

    /// Genre store
    pub fn genres(&self) -> &GenreStore {
        &self.genres
    }

    /// Playlist store
    pub fn playlists(&self) -> &PlaylistStore {
        &self.playlists
    }

    /// Mutable playlist store, for create/remove/restore
    pub fn playlists_mut(&mut self) -> &mut PlaylistStore {
        &mut self.playlists
    }

    /// Total number of songs
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    /// Total number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn song(path: &str, artist: Option<&str>, album: Option<&str>, genre: Option<&str>) -> Song {
        let path = PathBuf::from(path);
        Song {
            id: Song::id_for(&path),
            title: path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path,
            artist: artist.map(str::to_string),
            album: album.map(str::to_string),
            album_artist: None,
            genre: genre.map(str::to_string),
            year: Some(2001),
            track_number: Some(1),
            duration_ms: 180_000,
            date_added: None,
        }
    }

    #[test]
    fn test_empty_library() {
        let lib = Library::new();
        assert_eq!(lib.song_count(), 0);
        assert!(lib.albums().is_empty());
        assert!(lib.artists().is_empty());
        assert!(lib.genres().is_empty());
        assert_eq!(lib.playlist_count(), 0);
    }

    #[test]
    fn test_add_song_derives_album_artist_genre() {
        let mut lib = Library::new();
        lib.add_song(song(
            "/music/a.mp3",
            Some("Kraftwerk"),
            Some("Autobahn"),
            Some("Electronic"),
        ));
        lib.add_song(song(
            "/music/b.mp3",
            Some("Kraftwerk"),
            Some("Autobahn"),
            Some("Electronic"),
        ));

        assert_eq!(lib.song_count(), 2);
        assert_eq!(lib.albums().len(), 1);

        let album_id = lib.albums().ids().next().unwrap().clone();
        let album = lib.albums().get(&album_id).unwrap();
        assert_eq!(album.name, "Autobahn");
        assert_eq!(album.tracks_count, 2);
        assert_eq!(album.year, Some(2001));

        let artist = lib.artists().get("Kraftwerk").unwrap();
        assert_eq!(artist.tracks_count, 2);
        assert_eq!(artist.albums_count, 1);

        let genre = lib.genres().get("Electronic").unwrap();
        assert_eq!(genre.tracks_count, 2);
    }

    #[test]
    fn test_distinct_albums_per_artist() {
        let mut lib = Library::new();
        lib.add_song(song("/music/a.mp3", Some("Kraftwerk"), Some("Autobahn"), None));
        lib.add_song(song(
            "/music/b.mp3",
            Some("Kraftwerk"),
            Some("Trans-Europe Express"),
            None,
        ));

        let artist = lib.artists().get("Kraftwerk").unwrap();
        assert_eq!(artist.albums_count, 2);
        assert_eq!(artist.tracks_count, 2);
    }

    #[test]
    fn test_untagged_song_joins_no_album_or_genre() {
        let mut lib = Library::new();
        lib.add_song(song("/music/untagged.mp3", None, None, None));

        assert_eq!(lib.song_count(), 1);
        assert!(lib.albums().is_empty());
        assert!(lib.artists().is_empty());
        assert!(lib.genres().is_empty());
    }

    #[test]
    fn test_album_artist_groups_album() {
        let mut lib = Library::new();
        let mut a = song("/music/a.mp3", Some("Artist feat. Guest"), Some("Split"), None);
        a.album_artist = Some("Artist".to_string());
        let mut b = song("/music/b.mp3", Some("Artist"), Some("Split"), None);
        b.album_artist = Some("Artist".to_string());
        lib.add_song(a);
        lib.add_song(b);

        // Both songs fall under one album keyed by the album artist.
        assert_eq!(lib.albums().len(), 1);
        let album_id = lib.albums().ids().next().unwrap().clone();
        assert_eq!(lib.albums().get(&album_id).unwrap().tracks_count, 2);
    }
}
