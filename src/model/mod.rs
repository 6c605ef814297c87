//! Data model for the music library
//!
//! These types carry display attributes only; counts and derived fields
//! are filled in by the indexer, and the stores in `crate::library`
//! hold them keyed for lookup.

mod album;
mod artist;
mod genre;
mod playlist;
mod song;

pub use album::Album;
pub use artist::Artist;
pub use genre::Genre;
pub use playlist::{LocalPlaylist, Playlist};
pub use song::Song;
