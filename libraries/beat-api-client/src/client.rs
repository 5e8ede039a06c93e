//! Main Beat District API client.

use crate::auth::AuthClient;
use crate::catalog::CatalogClient;
use crate::error::{ApiClientError, Result};
use crate::playlists::PlaylistClient;
use crate::types::ApiConfig;
use crate::upload::UploadClient;
use async_trait::async_trait;
use beat_core::{
    CatalogSource, LoginForm, PlaylistRequest, PlaylistStore, RegisterForm, Song, SongForm, User,
    UserId,
};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use url::Url;

/// Main client for the Beat District REST API.
///
/// Holds the bearer token and user id after login so later calls can be
/// made without passing credentials around. Cloning is cheap and clones
/// share the session.
///
/// # Example
///
/// ```ignore
/// use beat_api_client::{ApiConfig, BeatApiClient};
/// use beat_core::LoginForm;
///
/// let client = BeatApiClient::new(ApiConfig::new("https://beats.example.com"))?;
///
/// client.login(&LoginForm::new("ada@example.com", "secret1")).await?;
/// let user = client.fetch_user().await?;
/// println!("{} has {} playlists", user.name, user.playlists.len());
///
/// let songs = client.get_all_songs().await?;
/// println!("Catalog has {} songs", songs.len());
/// ```
#[derive(Clone)]
pub struct BeatApiClient {
    http: Client,
    config: Arc<RwLock<ApiConfig>>,
}

impl BeatApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            return Err(ApiClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim().trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ApiClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        Url::parse(&url).map_err(|e| ApiClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("BeatDistrict/{} (CLI)", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(ApiConfig { url, ..config })),
        })
    }

    /// Get the server URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Check if the client has a bearer token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.access_token.is_some()
    }

    // ===== Session =====

    /// Create an account.
    ///
    /// The form is validated before anything is sent. Registration does not
    /// log in.
    pub async fn register(&self, form: &RegisterForm) -> Result<String> {
        let form = form.validate()?;
        let url = self.url().await;
        AuthClient::new(&self.http, &url).register(&form).await
    }

    /// Login with email and password.
    ///
    /// On success the token is stored for subsequent requests and returned.
    pub async fn login(&self, form: &LoginForm) -> Result<String> {
        let form = form.validate()?;
        let url = self.url().await;
        let token = AuthClient::new(&self.http, &url).login(&form).await?;

        let mut config = self.config.write().await;
        config.access_token = Some(token.clone());
        config.user_id = None;

        Ok(token)
    }

    /// Fetch the logged-in user and remember their id.
    pub async fn fetch_user(&self) -> Result<User> {
        let (url, token) = self.authorized().await?;
        let user = AuthClient::new(&self.http, &url)
            .get_user_data(&token)
            .await?;

        self.config.write().await.user_id = Some(user.id.clone());
        Ok(user)
    }

    /// Set the session directly (e.g., from stored credentials).
    pub async fn set_session(&self, access_token: String, user_id: Option<UserId>) {
        let mut config = self.config.write().await;
        config.access_token = Some(access_token);
        config.user_id = user_id;
    }

    /// Get the current token and user id.
    pub async fn session(&self) -> (Option<String>, Option<UserId>) {
        let config = self.config.read().await;
        (config.access_token.clone(), config.user_id.clone())
    }

    /// Clear stored credentials (logout).
    pub async fn logout(&self) {
        let mut config = self.config.write().await;
        config.access_token = None;
        config.user_id = None;
        info!("Logged out");
    }

    // ===== Catalog =====

    /// Fetch the whole catalog. Does not require authentication.
    pub async fn get_all_songs(&self) -> Result<Vec<Song>> {
        let url = self.url().await;
        CatalogClient::new(&self.http, &url).get_all_songs().await
    }

    /// Upload a new song. Returns the updated catalog.
    pub async fn add_song(&self, form: &SongForm) -> Result<Vec<Song>> {
        let form = form.validate()?;
        let (url, token) = self.authorized().await?;
        UploadClient::new(&self.http, &url, &token)
            .add_song(&form)
            .await
    }

    /// Edit an existing song. Returns the updated catalog.
    pub async fn edit_song(&self, form: &SongForm) -> Result<Vec<Song>> {
        let form = form.validate()?;
        if form.id.is_none() {
            return Err(ApiClientError::Validation(
                "Song id is required for editing".into(),
            ));
        }
        let (url, token) = self.authorized().await?;
        UploadClient::new(&self.http, &url, &token)
            .edit_song(&form)
            .await
    }

    // ===== Playlists =====

    /// Create a playlist. Returns the updated user.
    pub async fn add_playlist(&self, request: &PlaylistRequest) -> Result<User> {
        let (url, token, user_id) = self.playlist_session().await?;
        PlaylistClient::new(&self.http, &url, &token, &user_id)
            .add_playlist(request)
            .await
    }

    /// Replace a playlist's songs. Returns the updated user.
    pub async fn update_playlist(&self, request: &PlaylistRequest) -> Result<User> {
        let (url, token, user_id) = self.playlist_session().await?;
        PlaylistClient::new(&self.http, &url, &token, &user_id)
            .update_playlist(request)
            .await
    }

    /// Delete a playlist. Returns the updated user.
    pub async fn delete_playlist(&self, name: &str) -> Result<User> {
        let (url, token, user_id) = self.playlist_session().await?;
        PlaylistClient::new(&self.http, &url, &token, &user_id)
            .delete_playlist(name)
            .await
    }

    // ===== Helpers =====

    /// URL and token, or `AuthRequired` without a token.
    async fn authorized(&self) -> Result<(String, String)> {
        let config = self.config.read().await;
        let token = config
            .access_token
            .clone()
            .ok_or(ApiClientError::AuthRequired)?;
        Ok((config.url.clone(), token))
    }

    /// URL, token and user id. Fetches the user once if the id is unknown.
    async fn playlist_session(&self) -> Result<(String, String, UserId)> {
        let (url, token) = self.authorized().await?;
        let cached = self.config.read().await.user_id.clone();

        let user_id = match cached {
            Some(id) => id,
            None => self.fetch_user().await?.id,
        };
        Ok((url, token, user_id))
    }
}

#[async_trait]
impl CatalogSource for BeatApiClient {
    async fn fetch_songs(&self) -> beat_core::Result<Vec<Song>> {
        Ok(self.get_all_songs().await?)
    }
}

#[async_trait]
impl PlaylistStore for BeatApiClient {
    async fn create_playlist(&self, request: &PlaylistRequest) -> beat_core::Result<User> {
        Ok(self.add_playlist(request).await?)
    }

    async fn update_playlist(&self, request: &PlaylistRequest) -> beat_core::Result<User> {
        Ok(BeatApiClient::update_playlist(self, request).await?)
    }

    async fn delete_playlist(&self, name: &str) -> beat_core::Result<User> {
        Ok(BeatApiClient::delete_playlist(self, name).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(BeatApiClient::new(ApiConfig::new("https://example.com")).is_ok());
        assert!(BeatApiClient::new(ApiConfig::new("http://localhost:5000")).is_ok());

        // Invalid URLs
        assert!(BeatApiClient::new(ApiConfig::new("")).is_err());
        assert!(BeatApiClient::new(ApiConfig::new("not-a-url")).is_err());
        assert!(BeatApiClient::new(ApiConfig::new("ftp://example.com")).is_err());
        assert!(BeatApiClient::new(ApiConfig::new("http://")).is_err());
    }

    #[tokio::test]
    async fn test_url_normalization() {
        let client = BeatApiClient::new(ApiConfig::new(" https://example.com/ ")).unwrap();
        assert_eq!(client.url().await, "https://example.com");
    }

    #[tokio::test]
    async fn clones_share_the_session() {
        let client = BeatApiClient::new(ApiConfig::new("https://example.com")).unwrap();
        let other = client.clone();

        client
            .set_session("tok".into(), Some(UserId::new("u1")))
            .await;
        assert!(other.is_authenticated().await);

        other.logout().await;
        assert_eq!(client.session().await, (None, None));
    }

    #[tokio::test]
    async fn protected_calls_need_a_token() {
        let client = BeatApiClient::new(ApiConfig::new("https://example.com")).unwrap();
        let err = client.fetch_user().await.unwrap_err();
        assert!(matches!(err, ApiClientError::AuthRequired));
    }
}
