//! JSON file persistence
//!
//! Single-document stores with whole-file read/overwrite semantics.
//! No partial updates, no migrations; absence of a file means the
//! empty document.

mod adapter;
mod error;
mod playlists;

pub use adapter::FileAdapter;
pub use error::{StorageError, StorageResult};
pub use playlists::{PlaylistsDocument, PlaylistsFile};
