//! Music directory traversal

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Audio file extensions the scanner picks up
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "opus", "m4a", "aac", "wav"];

/// Playlist file extensions the scanner picks up
pub const PLAYLIST_EXTENSIONS: &[&str] = &["m3u", "m3u8"];

/// Files discovered under a music directory
#[derive(Debug, Default)]
pub struct DiscoveredFiles {
    /// Audio files, in traversal order
    pub audio: Vec<PathBuf>,

    /// Playlist (.m3u/.m3u8) files, in traversal order
    pub playlists: Vec<PathBuf>,
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|x| e.eq_ignore_ascii_case(x)))
        .unwrap_or(false)
}

/// Walk `root` and collect audio and playlist files.
///
/// Hidden directories are skipped. Unreadable entries are logged and
/// skipped rather than aborting the walk. Traversal order is sorted by
/// file name, so repeated scans of an unchanged tree discover files in
/// the same order.
pub fn discover(root: &Path) -> Result<DiscoveredFiles> {
    if !root.is_dir() {
        bail!("Music directory not found: {}", root.display());
    }

    let mut found = DiscoveredFiles::default();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if has_extension(&path, AUDIO_EXTENSIONS) {
            found.audio.push(path);
        } else if has_extension(&path, PLAYLIST_EXTENSIONS) {
            found.playlists.push(path);
        }
    }

    log::debug!(
        "Discovered {} audio file(s), {} playlist file(s) under {}",
        found.audio.len(),
        found.playlists.len(),
        root.display()
    );
    Ok(found)
}
