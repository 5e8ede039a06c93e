//! Catalog Store
//!
//! Holds the full song catalog and the playlist currently selected for
//! browsing. Every song that enters the store has its cover art normalized.

use crate::filter::SongFilter;
use beat_core::{normalize_songs, BeatError, CatalogSource, Playlist, Result, Song, SongId};
use tracing::{debug, info};

/// Catalog state
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    all_songs: Vec<Song>,
    selected_playlist: Option<Playlist>,
}

impl CatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog
    pub fn set_all_songs(&mut self, songs: Vec<Song>) {
        self.all_songs = normalize_songs(songs);
        debug!(count = self.all_songs.len(), "Catalog replaced");
    }

    /// Select a playlist for browsing, or clear the selection
    pub fn set_selected_playlist(&mut self, playlist: Option<Playlist>) {
        self.selected_playlist = playlist.map(Playlist::normalized);
    }

    /// Select the synthetic "All Songs" playlist over the current catalog
    pub fn select_all_songs(&mut self) {
        self.selected_playlist = Some(Playlist::all_songs(self.all_songs.clone()));
    }

    /// Songs of the selected playlist matching `query`
    ///
    /// Empty when nothing is selected.
    pub fn filter_by_text(&self, query: &str) -> SongFilter<'_> {
        match &self.selected_playlist {
            Some(playlist) => SongFilter::new(&playlist.songs, query),
            None => SongFilter::empty(),
        }
    }

    /// Look up a catalog song by id
    ///
    /// # Errors
    /// Returns `NotFound` if the catalog has no such song.
    pub fn find_song(&self, id: &SongId) -> Result<&Song> {
        self.all_songs
            .iter()
            .find(|song| &song.id == id)
            .ok_or_else(|| BeatError::not_found("song", id.as_str()))
    }

    /// Reload the catalog from a source
    ///
    /// On failure the current catalog is kept. If "All Songs" is selected it
    /// is rebuilt from the new catalog.
    ///
    /// # Errors
    /// Propagates the source's error.
    pub async fn refresh(&mut self, source: &dyn CatalogSource) -> Result<usize> {
        let songs = source.fetch_songs().await?;
        self.set_all_songs(songs);

        if self
            .selected_playlist
            .as_ref()
            .is_some_and(Playlist::is_all_songs)
        {
            self.select_all_songs();
        }

        info!(count = self.all_songs.len(), "Catalog refreshed");
        Ok(self.all_songs.len())
    }

    /// Every song in the catalog
    pub fn all_songs(&self) -> &[Song] {
        &self.all_songs
    }

    /// Playlist currently selected for browsing
    pub fn selected_playlist(&self) -> Option<&Playlist> {
        self.selected_playlist.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beat_core::DEFAULT_ALBUM_PHOTO_URL;

    fn song(id: &str, title: &str) -> Song {
        Song::new(SongId::new(id), title, "Artist", "Album", "2020", "3:00")
    }

    #[test]
    fn set_all_songs_normalizes_cover_art() {
        let mut store = CatalogStore::new();
        store.set_all_songs(vec![
            song("1", "Bare"),
            song("2", "Dressed").with_album_photo("https://img.example/2.jpg"),
        ]);

        assert_eq!(store.all_songs()[0].album_photo, DEFAULT_ALBUM_PHOTO_URL);
        assert_eq!(store.all_songs()[1].album_photo, "https://img.example/2.jpg");
    }

    #[test]
    fn selected_playlist_is_normalized() {
        let mut store = CatalogStore::new();
        store.set_selected_playlist(Some(Playlist::new("Mine", vec![song("1", "A")])));

        let selected = store.selected_playlist().unwrap();
        assert_eq!(selected.songs[0].album_photo, DEFAULT_ALBUM_PHOTO_URL);
    }

    #[test]
    fn filter_without_selection_is_empty() {
        let mut store = CatalogStore::new();
        store.set_all_songs(vec![song("1", "A")]);

        assert!(store.filter_by_text("").is_empty());
    }

    #[test]
    fn filter_over_all_songs() {
        let mut store = CatalogStore::new();
        store.set_all_songs(vec![song("1", "Lagoon"), song("2", "Harbor")]);
        store.select_all_songs();

        assert_eq!(store.filter_by_text("").count(), 2);
        let hits = store.filter_by_text("lagoon").to_vec();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "1");
        // Filtering does not touch the selection
        assert_eq!(store.selected_playlist().unwrap().len(), 2);
    }

    #[test]
    fn find_song_reports_missing_id() {
        let mut store = CatalogStore::new();
        store.set_all_songs(vec![song("1", "A")]);

        assert_eq!(store.find_song(&SongId::new("1")).unwrap().title, "A");
        let err = store.find_song(&SongId::new("9")).unwrap_err();
        assert!(matches!(err, BeatError::NotFound { .. }));
    }
}
