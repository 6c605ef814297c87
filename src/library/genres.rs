//! Genre store and sort facade

use super::order;
use crate::model::{Genre, Song};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sort strategies for genre listings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum GenreSortBy {
    /// Keep the caller-supplied order
    Custom,
    #[default]
    GenreName,
    TracksCount,
}

impl GenreSortBy {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            GenreSortBy::Custom => "custom",
            GenreSortBy::GenreName => "genre name",
            GenreSortBy::TracksCount => "track count",
        }
    }
}

/// Keyed collection of genres derived from indexed songs
///
/// Songs without a genre tag belong to no genre.
#[derive(Debug, Clone, Default)]
pub struct GenreStore {
    genres: HashMap<String, Genre>,
}

impl GenreStore {
    /// Record a song under its genre, creating the genre on first sight
    pub(crate) fn index_song(&mut self, song: &Song) {
        let name = match song.genre.as_deref() {
            Some(name) => name,
            None => return,
        };
        let genre = self
            .genres
            .entry(name.to_string())
            .or_insert_with(|| Genre {
                name: name.to_string(),
                tracks_count: 0,
            });
        genre.tracks_count += 1;
    }

    /// Current snapshot of a genre, or None if unknown/removed
    pub fn get(&self, name: &str) -> Option<&Genre> {
        self.genres.get(name)
    }

    /// All genre names (iteration order unspecified)
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.genres.keys()
    }

    /// Number of genres
    pub fn len(&self) -> usize {
        self.genres.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    /// Reorder `names` by the chosen strategy.
    ///
    /// Same contract as [`SongStore::sort`](super::SongStore::sort):
    /// stable ascending, unresolved names first, `reverse` flips the
    /// final sequence.
    pub fn sort(&self, names: &[String], by: GenreSortBy, reverse: bool) -> Vec<String> {
        let mut sorted = names.to_vec();
        match by {
            GenreSortBy::Custom => {}
            GenreSortBy::GenreName => {
                order::by_attribute(&mut sorted, |name| {
                    self.get(name).map(|g| order::text_key(&g.name))
                });
            }
            GenreSortBy::TracksCount => {
                order::by_attribute(&mut sorted, |name| self.get(name).map(|g| g.tracks_count));
            }
        }
        if reverse {
            sorted.reverse();
        }
        sorted
    }
}
