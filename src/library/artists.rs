//! Artist store and sort facade

use super::order;
use crate::model::{Artist, Song};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Sort strategies for artist listings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ArtistSortBy {
    /// Keep the caller-supplied order
    Custom,
    #[default]
    ArtistName,
    AlbumsCount,
    TracksCount,
}

impl ArtistSortBy {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            ArtistSortBy::Custom => "custom",
            ArtistSortBy::ArtistName => "artist name",
            ArtistSortBy::AlbumsCount => "album count",
            ArtistSortBy::TracksCount => "track count",
        }
    }
}

/// Keyed collection of artists derived from indexed songs
#[derive(Debug, Clone, Default)]
pub struct ArtistStore {
    artists: HashMap<String, Artist>,

    /// Distinct album ids seen per artist, backing `albums_count`
    albums_seen: HashMap<String, HashSet<String>>,
}

impl ArtistStore {
    /// Record a song under its artist, creating the artist on first
    /// sight. `album_id` is the album the song grouped under, if any.
    pub(crate) fn index_song(&mut self, song: &Song, album_id: Option<&str>) {
        let name = match song.artist.as_deref() {
            Some(name) => name,
            None => return,
        };
        let artist = self
            .artists
            .entry(name.to_string())
            .or_insert_with(|| Artist {
                name: name.to_string(),
                albums_count: 0,
                tracks_count: 0,
            });
        artist.tracks_count += 1;
        if let Some(album_id) = album_id {
            let seen = self.albums_seen.entry(name.to_string()).or_default();
            if seen.insert(album_id.to_string()) {
                artist.albums_count += 1;
            }
        }
    }

    /// Current snapshot of an artist, or None if unknown/removed
    pub fn get(&self, name: &str) -> Option<&Artist> {
        self.artists.get(name)
    }

    /// All artist names (iteration order unspecified)
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.artists.keys()
    }

    /// Number of artists
    pub fn len(&self) -> usize {
        self.artists.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Reorder `names` by the chosen strategy.
    ///
    /// Same contract as [`SongStore::sort`](super::SongStore::sort):
    /// stable ascending, unresolved names first, `reverse` flips the
    /// final sequence.
    pub fn sort(&self, names: &[String], by: ArtistSortBy, reverse: bool) -> Vec<String> {
        let mut sorted = names.to_vec();
        match by {
            ArtistSortBy::Custom => {}
            ArtistSortBy::ArtistName => {
                order::by_attribute(&mut sorted, |name| {
                    self.get(name).map(|a| order::text_key(&a.name))
                });
            }
            ArtistSortBy::AlbumsCount => {
                order::by_attribute(&mut sorted, |name| self.get(name).map(|a| a.albums_count));
            }
            ArtistSortBy::TracksCount => {
                order::by_attribute(&mut sorted, |name| self.get(name).map(|a| a.tracks_count));
            }
        }
        if reverse {
            sorted.reverse();
        }
        sorted
    }
}
