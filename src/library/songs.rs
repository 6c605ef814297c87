//! Song store and sort facade

use super::order;
use crate::model::Song;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sort strategies for song listings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SongSortBy {
    /// Keep the caller-supplied order
    Custom,
    #[default]
    Title,
    Artist,
    Album,
    Duration,
    Year,
    TrackNumber,
    DateAdded,
    Filename,
}

impl SongSortBy {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            SongSortBy::Custom => "custom",
            SongSortBy::Title => "title",
            SongSortBy::Artist => "artist",
            SongSortBy::Album => "album",
            SongSortBy::Duration => "duration",
            SongSortBy::Year => "year",
            SongSortBy::TrackNumber => "track number",
            SongSortBy::DateAdded => "date added",
            SongSortBy::Filename => "filename",
        }
    }
}

/// Keyed collection of songs
#[derive(Debug, Clone, Default)]
pub struct SongStore {
    songs: HashMap<String, Song>,
}

impl SongStore {
    /// Insert or replace a song
    pub(crate) fn insert(&mut self, song: Song) {
        self.songs.insert(song.id.clone(), song);
    }

    /// Current snapshot of a song, or None if unknown/removed
    pub fn get(&self, id: &str) -> Option<&Song> {
        self.songs.get(id)
    }

    /// All song ids (iteration order unspecified)
    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.songs.keys()
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Reorder `ids` by the chosen strategy.
    ///
    /// Stable ascending over the resolved attribute; ids that do not
    /// resolve sort first. `reverse` flips the final sequence, so
    /// reversing `Custom` flips the caller's order. Pure function of
    /// the inputs; `ids` need not all exist in the store.
    pub fn sort(&self, ids: &[String], by: SongSortBy, reverse: bool) -> Vec<String> {
        let mut sorted = ids.to_vec();
        match by {
            SongSortBy::Custom => {}
            SongSortBy::Title => {
                order::by_attribute(&mut sorted, |id| {
                    self.get(id).map(|s| order::text_key(&s.title))
                });
            }
            SongSortBy::Artist => {
                order::by_attribute(&mut sorted, |id| {
                    self.get(id)
                        .and_then(|s| s.artist.as_deref().map(order::text_key))
                });
            }
            SongSortBy::Album => {
                order::by_attribute(&mut sorted, |id| {
                    self.get(id)
                        .and_then(|s| s.album.as_deref().map(order::text_key))
                });
            }
            SongSortBy::Duration => {
                order::by_attribute(&mut sorted, |id| self.get(id).map(|s| s.duration_ms));
            }
            SongSortBy::Year => {
                order::by_attribute(&mut sorted, |id| self.get(id).and_then(|s| s.year));
            }
            SongSortBy::TrackNumber => {
                order::by_attribute(&mut sorted, |id| self.get(id).and_then(|s| s.track_number));
            }
            SongSortBy::DateAdded => {
                order::by_attribute(&mut sorted, |id| self.get(id).and_then(|s| s.date_added));
            }
            SongSortBy::Filename => {
                order::by_attribute(&mut sorted, |id| {
                    self.get(id).map(|s| order::text_key(&s.filename()))
                });
            }
        }
        if reverse {
            sorted.reverse();
        }
        sorted
    }
}
