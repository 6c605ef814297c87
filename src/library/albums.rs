//! Album store and sort facade

use super::order;
use crate::model::{Album, Song};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sort strategies for album listings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AlbumSortBy {
    /// Keep the caller-supplied order
    Custom,
    #[default]
    AlbumName,
    ArtistName,
    TracksCount,
    Year,
}

impl AlbumSortBy {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            AlbumSortBy::Custom => "custom",
            AlbumSortBy::AlbumName => "album name",
            AlbumSortBy::ArtistName => "artist name",
            AlbumSortBy::TracksCount => "track count",
            AlbumSortBy::Year => "year",
        }
    }
}

/// Keyed collection of albums derived from indexed songs
#[derive(Debug, Clone, Default)]
pub struct AlbumStore {
    albums: HashMap<String, Album>,
}

impl AlbumStore {
    /// Record a song in its album entry, creating the album on first
    /// sight. Returns the album id the song grouped under, or None for
    /// songs without an album tag.
    pub(crate) fn index_song(&mut self, song: &Song) -> Option<String> {
        let name = song.album.as_deref()?;
        let artist = song.grouping_artist();
        let id = Album::id_for(artist, name);
        let album = self.albums.entry(id.clone()).or_insert_with(|| Album {
            id: id.clone(),
            name: name.to_string(),
            artist: artist.map(|a| a.to_string()),
            year: None,
            tracks_count: 0,
        });
        album.tracks_count += 1;
        if album.year.is_none() {
            album.year = song.year;
        }
        Some(id)
    }

    /// Current snapshot of an album, or None if unknown/removed
    pub fn get(&self, id: &str) -> Option<&Album> {
        self.albums.get(id)
    }

    /// All album ids (iteration order unspecified)
    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.albums.keys()
    }

    /// Number of albums
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Reorder `ids` by the chosen strategy.
    ///
    /// Same contract as [`SongStore::sort`](super::SongStore::sort):
    /// stable ascending, unresolved ids first, `reverse` flips the
    /// final sequence.
    pub fn sort(&self, ids: &[String], by: AlbumSortBy, reverse: bool) -> Vec<String> {
        let mut sorted = ids.to_vec();
        match by {
            AlbumSortBy::Custom => {}
            AlbumSortBy::AlbumName => {
                order::by_attribute(&mut sorted, |id| {
                    self.get(id).map(|a| order::text_key(&a.name))
                });
            }
            AlbumSortBy::ArtistName => {
                order::by_attribute(&mut sorted, |id| {
                    self.get(id)
                        .and_then(|a| a.artist.as_deref().map(order::text_key))
                });
            }
            AlbumSortBy::TracksCount => {
                order::by_attribute(&mut sorted, |id| self.get(id).map(|a| a.tracks_count));
            }
            AlbumSortBy::Year => {
                order::by_attribute(&mut sorted, |id| self.get(id).and_then(|a| a.year));
            }
        }
        if reverse {
            sorted.reverse();
        }
        sorted
    }
}
