//! Song metadata extraction
//!
//! Reads tags with lofty. Files whose tags cannot be read still enter
//! the library with metadata derived from the file name.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::model::Song;

/// Build a [`Song`] from an audio file's tags
pub fn read_song(path: &Path) -> Result<Song> {
    let tagged = Probe::open(path)
        .with_context(|| format!("Failed to open audio file: {}", path.display()))?
        .read()
        .with_context(|| format!("Failed to read tags from: {}", path.display()))?;

    let mut song = fallback_song(path);
    song.duration_ms = duration_millis(tagged.properties().duration());

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        if let Some(title) = non_empty(tag.title().map(|v| v.into_owned())) {
            song.title = title;
        }
        song.artist = non_empty(tag.artist().map(|v| v.into_owned()));
        song.album = non_empty(tag.album().map(|v| v.into_owned()));
        song.album_artist = non_empty(tag.get_string(&ItemKey::AlbumArtist).map(str::to_string));
        song.genre = non_empty(tag.genre().map(|v| v.into_owned()));
        song.year = tag.year();
        song.track_number = tag.track();
    }

    Ok(song)
}

/// Song whose metadata comes from the path alone: the file name stem
/// becomes the title and every tagged attribute stays absent.
pub fn fallback_song(path: &Path) -> Song {
    let title = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    Song {
        id: Song::id_for(path),
        path: path.to_path_buf(),
        title,
        artist: None,
        album: None,
        album_artist: None,
        genre: None,
        year: None,
        track_number: None,
        duration_ms: 0,
        date_added: date_added(path),
    }
}

/// File modification time, used as the "date added" of a song
fn date_added(path: &Path) -> Option<DateTime<Utc>> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}

/// Blank tag values count as absent
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Milliseconds for the duration field, saturating at u32::MAX
fn duration_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
