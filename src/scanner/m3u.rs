//! .m3u / .m3u8 playlist parsing
//!
//! Entries may be absolute paths, paths relative to the playlist file,
//! or file:// URIs. Comment and directive lines (`#...`) are skipped.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Playlist;

/// Parse an .m3u file into a local playlist.
///
/// The playlist title is the file name without its extension, and the
/// playlist id is derived from the file path, so re-parsing the same
/// file always yields the same playlist identity.
pub fn parse_local_playlist(path: &Path) -> Result<Playlist> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read playlist: {}", path.display()))?;

    let base = path.parent();
    let song_paths = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| entry_path(line, base))
        .collect();

    let title = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Unnamed".to_string());

    Ok(Playlist {
        id: Playlist::local_id_for(path),
        title,
        song_paths,
        source: Some(path.to_path_buf()),
    })
}

/// Resolve one playlist entry to a song path
fn entry_path(line: &str, base: Option<&Path>) -> Option<PathBuf> {
    if let Some(rest) = line.strip_prefix("file://") {
        let decoded = urlencoding::decode(rest).ok()?;
        return Some(PathBuf::from(decoded.into_owned()));
    }
    let path = PathBuf::from(line);
    if path.is_absolute() {
        Some(path)
    } else {
        base.map(|b| b.join(path))
    }
}
