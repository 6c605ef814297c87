//! Muselib - local music library with sorted views
//!
//! This library indexes a directory of audio files into keyed stores
//! (songs, albums, artists, genres, playlists), answers sorted listing
//! queries over them, and persists custom playlists and last-used sort
//! preferences as JSON documents.

pub mod library;
pub mod model;
pub mod scanner;
pub mod settings;
pub mod storage;

pub use library::Library;
pub use scanner::Scanner;
pub use settings::Settings;
pub use storage::PlaylistsFile;
