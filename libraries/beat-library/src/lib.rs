//! Beat District Library State
//!
//! Client-side state for browsing and organising music:
//! - [`CatalogStore`]: the full catalog plus the playlist being browsed
//! - [`SongFilter`]: lazy free-text search over a playlist
//! - [`Session`]: the signed-in user and their token
//! - [`PlaylistEditor`]: create or update a playlist through a
//!   [`PlaylistStore`](beat_core::PlaylistStore)
//!
//! All state is plain data mutated through `&mut self`. Network access goes
//! through the collaborator traits in `beat-core`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod editor;
pub mod filter;
pub mod session;

pub use catalog::CatalogStore;
pub use editor::{delete_playlist, EditorMode, PlaylistEditor};
pub use filter::{FilterIter, SongFilter};
pub use session::Session;
