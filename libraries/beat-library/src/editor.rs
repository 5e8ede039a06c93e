//! Playlist Editor
//!
//! Builds a playlist from catalog songs and submits it through a
//! [`PlaylistStore`]. The editor is either creating a new playlist or
//! updating an existing one; in update mode the name is fixed because the
//! store matches playlists by name.

use beat_core::{BeatError, Playlist, PlaylistRequest, PlaylistStore, Result, Song, SongId, User};
use tracing::{info, warn};

const MISSING_FIELDS: &str = "Please fill all fields";

/// What a submit will do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Create a new playlist
    Create,
    /// Replace the songs of an existing playlist
    Update,
}

/// In-progress playlist edit
#[derive(Debug, Clone)]
pub struct PlaylistEditor {
    mode: EditorMode,
    name: String,
    selected: Vec<Song>,
}

impl PlaylistEditor {
    /// Start a new playlist
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Create,
            name: String::new(),
            selected: Vec::new(),
        }
    }

    /// Start editing an existing playlist
    ///
    /// The editor works on a normalized copy.
    pub fn for_edit(playlist: &Playlist) -> Self {
        let playlist = playlist.clone().normalized();
        Self {
            mode: EditorMode::Update,
            name: playlist.name,
            selected: playlist.songs,
        }
    }

    /// Current mode
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Playlist name as entered
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change the playlist name
    ///
    /// # Errors
    /// Returns `Validation` in update mode, where the name is locked.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        if self.mode == EditorMode::Update {
            warn!(playlist = %self.name, "Rejected rename of existing playlist");
            return Err(BeatError::validation("Playlist name cannot be changed"));
        }
        self.name = name.into();
        Ok(())
    }

    /// Add a song if absent, remove it if present
    ///
    /// Songs are matched by id. Returns whether the song is selected
    /// afterwards.
    pub fn toggle_song(&mut self, song: &Song) -> bool {
        if let Some(pos) = self.position(&song.id) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(song.clone().normalized());
            true
        }
    }

    /// Whether a song is selected
    pub fn is_selected(&self, id: &SongId) -> bool {
        self.position(id).is_some()
    }

    /// Selected songs in selection order
    pub fn selected(&self) -> &[Song] {
        &self.selected
    }

    fn position(&self, id: &SongId) -> Option<usize> {
        self.selected.iter().position(|song| &song.id == id)
    }

    /// Check the edit and build the request body
    ///
    /// # Errors
    /// Returns `Validation` unless the trimmed name is non-empty and at
    /// least one song is selected.
    pub fn validate(&self) -> Result<PlaylistRequest> {
        let name = self.name.trim();
        if name.is_empty() || self.selected.is_empty() {
            return Err(BeatError::validation(MISSING_FIELDS));
        }
        Ok(PlaylistRequest::new(name, self.selected.clone()))
    }

    /// Validate and send the playlist to the store
    ///
    /// On success the editor is reset to an empty create-mode edit and the
    /// updated user is returned. On failure the editor keeps its contents.
    ///
    /// # Errors
    /// Returns `Validation` before any call, or the store's error.
    pub async fn submit(&mut self, store: &dyn PlaylistStore) -> Result<User> {
        let request = self.validate()?;

        let user = match self.mode {
            EditorMode::Create => store.create_playlist(&request).await?,
            EditorMode::Update => store.update_playlist(&request).await?,
        };

        info!(
            playlist = %request.name,
            songs = request.songs.len(),
            mode = ?self.mode,
            "Playlist saved"
        );
        *self = Self::new();
        Ok(user.normalized())
    }
}

impl Default for PlaylistEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Delete one of the user's playlists
///
/// # Errors
/// Returns `Validation` for a blank name, or the store's error.
pub async fn delete_playlist(store: &dyn PlaylistStore, name: &str) -> Result<User> {
    if name.trim().is_empty() {
        return Err(BeatError::validation(MISSING_FIELDS));
    }

    let user = store.delete_playlist(name).await?;
    info!(playlist = name, "Playlist deleted");
    Ok(user.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str) -> Song {
        Song::new(SongId::new(id), format!("Song {id}"), "Artist", "Album", "2020", "3:00")
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut editor = PlaylistEditor::new();
        let a = song("a");

        assert!(editor.toggle_song(&a));
        assert!(editor.is_selected(&a.id));

        assert!(!editor.toggle_song(&a));
        assert!(!editor.is_selected(&a.id));
        assert!(editor.selected().is_empty());
    }

    #[test]
    fn toggle_matches_by_id_not_value() {
        let mut editor = PlaylistEditor::new();
        editor.toggle_song(&song("a"));

        let mut renamed = song("a");
        renamed.title = "Different".into();
        assert!(!editor.toggle_song(&renamed));
        assert!(editor.selected().is_empty());
    }

    #[test]
    fn validate_requires_name_and_songs() {
        let mut editor = PlaylistEditor::new();
        editor.toggle_song(&song("a"));
        editor.set_name("   ").unwrap();
        assert_eq!(editor.validate().unwrap_err().to_string(), MISSING_FIELDS);

        let mut editor = PlaylistEditor::new();
        editor.set_name("Run").unwrap();
        assert!(editor.validate().is_err());

        editor.toggle_song(&song("a"));
        let request = editor.validate().unwrap();
        assert_eq!(request.name, "Run");
        assert_eq!(request.songs.len(), 1);
    }

    #[test]
    fn edit_mode_locks_name() {
        let playlist = Playlist::new("Chill", vec![song("a"), song("b")]);
        let mut editor = PlaylistEditor::for_edit(&playlist);

        assert_eq!(editor.mode(), EditorMode::Update);
        assert!(editor.set_name("Other").is_err());
        assert_eq!(editor.name(), "Chill");
        assert!(editor.is_selected(&SongId::new("b")));
    }
}
