//! Library indexing from the filesystem
//!
//! The scanner is the producer side of the library: it walks a music
//! directory, extracts song metadata, discovers .m3u playlists, and
//! builds a fresh [`Library`] snapshot. Stores are never patched in
//! place; rescanning replaces the whole library value.

mod m3u;
mod tags;
mod walker;

pub use m3u::parse_local_playlist;
pub use tags::{fallback_song, read_song};
pub use walker::{discover, DiscoveredFiles, AUDIO_EXTENSIONS, PLAYLIST_EXTENSIONS};

use anyhow::Result;
use rayon::prelude::*;
use std::path::PathBuf;

use crate::library::Library;

/// Scans a music directory into a [`Library`]
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    /// Create a scanner for the given music directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Walk the music directory and build a fresh library snapshot
    pub fn scan(&self) -> Result<Library> {
        log::info!("Scanning music directory {}", self.root.display());
        let found = walker::discover(&self.root)?;

        // Tag reads are the slow part of a scan; do them in parallel.
        let songs: Vec<_> = found
            .audio
            .par_iter()
            .map(|path| match tags::read_song(path) {
                Ok(song) => song,
                Err(e) => {
                    log::warn!("Falling back to file name metadata: {:#}", e);
                    tags::fallback_song(path)
                }
            })
            .collect();

        let mut library = Library::new();
        for song in songs {
            library.add_song(song);
        }

        for path in &found.playlists {
            match m3u::parse_local_playlist(path) {
                Ok(playlist) => {
                    log::debug!(
                        "Found local playlist {} ({} entries)",
                        playlist.title,
                        playlist.tracks_count()
                    );
                    library.add_playlist(playlist);
                }
                Err(e) => log::warn!("Skipping playlist {}: {:#}", path.display(), e),
            }
        }

        log::info!(
            "Scan complete: {} songs, {} albums, {} artists, {} genres, {} playlists",
            library.song_count(),
            library.albums().len(),
            library.artists().len(),
            library.genres().len(),
            library.playlist_count()
        );
        Ok(library)
    }
}
