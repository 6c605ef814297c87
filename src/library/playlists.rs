//! Playlist store and sort facade

use super::order;
use crate::model::Playlist;
use crate::storage::PlaylistsDocument;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Sort strategies for playlist listings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PlaylistSortBy {
    /// Keep the caller-supplied order
    Custom,
    #[default]
    Title,
    TracksCount,
}

impl PlaylistSortBy {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            PlaylistSortBy::Custom => "custom",
            PlaylistSortBy::Title => "title",
            PlaylistSortBy::TracksCount => "track count",
        }
    }
}

/// Keyed collection of playlists, custom and local
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistStore {
    /// Insert or replace a playlist
    pub(crate) fn insert(&mut self, playlist: Playlist) {
        self.playlists.insert(playlist.id.clone(), playlist);
    }

    /// Create a custom playlist and return it
    pub fn create(&mut self, title: String, song_paths: Vec<PathBuf>) -> &Playlist {
        let playlist = Playlist::custom(title, song_paths);
        self.playlists.entry(playlist.id.clone()).or_insert(playlist)
    }

    /// Remove a playlist by id
    pub fn remove(&mut self, id: &str) -> Option<Playlist> {
        self.playlists.remove(id)
    }

    /// Current snapshot of a playlist, or None if unknown/removed
    pub fn get(&self, id: &str) -> Option<&Playlist> {
        self.playlists.get(id)
    }

    /// All playlist ids (iteration order unspecified)
    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.playlists.keys()
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Snapshot the store into its persisted document form: custom
    /// playlists in full, local playlists as path references.
    ///
    /// Arrays are emitted in a deterministic order so rewriting an
    /// unchanged store produces an identical document.
    pub fn to_document(&self) -> PlaylistsDocument {
        let mut custom: Vec<Playlist> = self
            .playlists
            .values()
            .filter(|p| !p.is_local())
            .cloned()
            .collect();
        custom.sort_by(|a, b| a.id.cmp(&b.id));

        let mut local: Vec<_> = self
            .playlists
            .values()
            .filter_map(|p| p.as_local_ref())
            .collect();
        local.sort_by(|a, b| a.path.cmp(&b.path));

        PlaylistsDocument { custom, local }
    }

    /// Load a persisted document back into the store.
    ///
    /// Custom playlists are restored as-is; local references are
    /// re-parsed through `parse_local` (they mirror files on disk, so
    /// stale references are dropped with a warning rather than kept).
    pub fn restore<F>(&mut self, document: PlaylistsDocument, mut parse_local: F)
    where
        F: FnMut(&Path) -> Result<Playlist>,
    {
        for playlist in document.custom {
            self.insert(playlist);
        }
        for reference in document.local {
            match parse_local(&reference.path) {
                Ok(playlist) => self.insert(playlist),
                Err(e) => log::warn!(
                    "Dropping local playlist {}: {:#}",
                    reference.path.display(),
                    e
                ),
            }
        }
    }

    /// Reorder `ids` by the chosen strategy.
    ///
    /// Same contract as [`SongStore::sort`](super::SongStore::sort):
    /// stable ascending, unresolved ids first, `reverse` flips the
    /// final sequence.
    pub fn sort(&self, ids: &[String], by: PlaylistSortBy, reverse: bool) -> Vec<String> {
        let mut sorted = ids.to_vec();
        match by {
            PlaylistSortBy::Custom => {}
            PlaylistSortBy::Title => {
                order::by_attribute(&mut sorted, |id| {
                    self.get(id).map(|p| order::text_key(&p.title))
                });
            }
            PlaylistSortBy::TracksCount => {
                order::by_attribute(&mut sorted, |id| self.get(id).map(|p| p.tracks_count()));
            }
        }
        if reverse {
            sorted.reverse();
        }
        sorted
    }
}
