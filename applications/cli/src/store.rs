//! Application store
//!
//! Composes the signed-in session, the catalog and the playback engine into
//! one value owned by the view layer. Actions are methods: synchronous ones
//! are pure state transitions, async ones receive the API client by
//! reference. Every action reports its outcome as a [`Notice`] and returns
//! whether it succeeded; errors never escape the store.

use beat_api_client::BeatApiClient;
use beat_core::{
    BeatError, LoginForm, RegisterForm, Song, SongForm, SongId, UserId, ALL_SONGS_PLAYLIST,
};
use beat_library::{delete_playlist, CatalogStore, EditorMode, PlaylistEditor, Session};
use beat_playback::{PlaybackConfig, PlaybackEngine};
use serde::Serialize;
use tracing::{info, warn};

/// Severity of a user-visible message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// Transient message shown to the user after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Session, catalog and player state plus pending notices
pub struct AppStore {
    session: Session,
    catalog: CatalogStore,
    player: PlaybackEngine,
    notices: Vec<Notice>,
}

impl AppStore {
    pub fn new(playback: PlaybackConfig) -> Self {
        Self::with_player(PlaybackEngine::new(playback))
    }

    /// Build around an existing engine (e.g. one with a seeded random source)
    pub fn with_player(player: PlaybackEngine) -> Self {
        Self {
            session: Session::new(),
            catalog: CatalogStore::new(),
            player,
            notices: Vec::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn player(&self) -> &PlaybackEngine {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlaybackEngine {
        &mut self.player
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Remove and return all pending notices
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // ===== Session =====

    /// Create an account. Does not log in.
    pub async fn register(&mut self, api: &BeatApiClient, form: &RegisterForm) -> bool {
        match api.register(form).await {
            Ok(message) if message.trim().is_empty() => {
                self.notify(Notice::success("User registered successfully"));
                true
            }
            Ok(message) => {
                self.notify(Notice::success(message));
                true
            }
            Err(e) => self.fail(e),
        }
    }

    /// Log in and load the user record
    ///
    /// The token is kept even if the user record cannot be fetched, so a
    /// later [`load_user`](Self::load_user) can retry.
    pub async fn login(&mut self, api: &BeatApiClient, form: &LoginForm) -> bool {
        let token = match api.login(form).await {
            Ok(token) => token,
            Err(e) => return self.fail(e),
        };
        self.session.set_token(token);

        match api.fetch_user().await {
            Ok(user) => {
                info!(user_id = %user.id, "Logged in");
                self.session.set_user(user);
                self.notify(Notice::success("Logged in successfully"));
                true
            }
            Err(e) => {
                warn!(error = %e, "User data unavailable after login");
                self.notify(Notice::error("Failed to fetch user data"));
                false
            }
        }
    }

    /// Resume a stored login and reload the user record
    pub async fn restore_session(
        &mut self,
        api: &BeatApiClient,
        token: String,
        user_id: Option<UserId>,
    ) -> bool {
        api.set_session(token.clone(), user_id).await;
        self.session.set_token(token);
        self.load_user(api).await
    }

    /// Fetch the signed-in user's record
    pub async fn load_user(&mut self, api: &BeatApiClient) -> bool {
        match api.fetch_user().await {
            Ok(user) => {
                self.session.set_user(user);
                true
            }
            Err(e) => self.fail(e),
        }
    }

    /// Forget the login and everything derived from it
    pub async fn logout(&mut self, api: &BeatApiClient) {
        api.logout().await;
        self.session.clear();
        self.catalog.set_selected_playlist(None);
        self.player.load_queue(Vec::new());
        self.notify(Notice::info("Logged out"));
    }

    // ===== Catalog =====

    /// Reload the catalog; selects "All Songs" when nothing is selected
    pub async fn refresh_catalog(&mut self, api: &BeatApiClient) -> bool {
        match self.catalog.refresh(api).await {
            Ok(_) => {
                if self.catalog.selected_playlist().is_none() {
                    self.catalog.select_all_songs();
                }
                self.sync_queue();
                true
            }
            Err(e) => self.fail(e),
        }
    }

    /// Browse a playlist by name and make it the playback queue
    pub fn select_playlist(&mut self, name: &str) -> bool {
        if name == ALL_SONGS_PLAYLIST {
            self.catalog.select_all_songs();
        } else {
            match self.session.playlist(name).cloned() {
                Ok(playlist) => self.catalog.set_selected_playlist(Some(playlist)),
                Err(e) => return self.fail(e),
            }
        }
        self.sync_queue();
        true
    }

    /// Make a song of the selected playlist current
    pub fn select_song(&mut self, id: &SongId) -> bool {
        let song = self
            .catalog
            .selected_playlist()
            .and_then(|playlist| playlist.songs.iter().find(|song| &song.id == id))
            .cloned();

        let Some(song) = song else {
            return self.fail(BeatError::not_found("song", id.as_str()));
        };
        match self.player.select_song(&song) {
            Ok(()) => true,
            Err(e) => self.fail(e),
        }
    }

    /// Upload a new song (admin)
    pub async fn add_song(&mut self, api: &BeatApiClient, form: &SongForm) -> bool {
        match api.add_song(form).await {
            Ok(songs) => {
                self.replace_catalog(songs);
                self.notify(Notice::success("Song added successfully"));
                true
            }
            Err(e) => self.fail(e),
        }
    }

    /// Edit an existing song (admin)
    pub async fn edit_song(&mut self, api: &BeatApiClient, form: &SongForm) -> bool {
        match api.edit_song(form).await {
            Ok(songs) => {
                self.replace_catalog(songs);
                self.notify(Notice::success("Song updated successfully"));
                true
            }
            Err(e) => self.fail(e),
        }
    }

    // ===== Playlists =====

    /// Submit a playlist edit
    ///
    /// After an update the selection returns to "All Songs". On failure the
    /// editor keeps its contents.
    pub async fn save_playlist(
        &mut self,
        api: &BeatApiClient,
        editor: &mut PlaylistEditor,
    ) -> bool {
        let mode = editor.mode();
        match editor.submit(api).await {
            Ok(user) => {
                self.session.set_user(user);
                let message = match mode {
                    EditorMode::Create => "Playlist created successfully",
                    EditorMode::Update => {
                        self.catalog.select_all_songs();
                        self.sync_queue();
                        "Playlist updated successfully"
                    }
                };
                self.notify(Notice::success(message));
                true
            }
            Err(e) => self.fail(e),
        }
    }

    /// Delete one of the user's playlists
    ///
    /// If it was being browsed, the selection returns to "All Songs".
    pub async fn delete_playlist(&mut self, api: &BeatApiClient, name: &str) -> bool {
        match delete_playlist(api, name).await {
            Ok(user) => {
                self.session.set_user(user);
                let was_selected = self
                    .catalog
                    .selected_playlist()
                    .is_some_and(|playlist| playlist.name == name);
                if was_selected {
                    self.catalog.select_all_songs();
                    self.sync_queue();
                }
                self.notify(Notice::success("Playlist deleted successfully"));
                true
            }
            Err(e) => self.fail(e),
        }
    }

    // ===== Helpers =====

    fn replace_catalog(&mut self, songs: Vec<Song>) {
        self.catalog.set_all_songs(songs);
        let browsing_all = match self.catalog.selected_playlist() {
            Some(playlist) => playlist.is_all_songs(),
            None => true,
        };
        if browsing_all {
            self.catalog.select_all_songs();
            self.sync_queue();
        }
    }

    /// Make the selected playlist the playback queue
    fn sync_queue(&mut self) {
        let songs = self
            .catalog
            .selected_playlist()
            .map(|playlist| playlist.songs.clone())
            .unwrap_or_default();
        self.player.load_queue(songs);
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Record an error notice; always returns `false`
    fn fail(&mut self, err: impl Into<BeatError>) -> bool {
        let err = err.into();
        warn!(error = %err, "Action failed");
        self.notices.push(Notice::error(err.to_string()));
        false
    }
}
