//! Beat District API Client
//!
//! HTTP client library for the Beat District REST API.
//!
//! # Features
//!
//! - **Accounts**: register, login with email/password, fetch the user record
//! - **Catalog**: list all songs; admins can add and edit songs with uploads
//! - **Playlists**: create, update and delete playlists of the logged-in user
//!
//! Every response is wrapped in `{ success, message, data }`. A response with
//! `success: false` is an error even when the HTTP status is 200.
//!
//! The client implements [`beat_core::CatalogSource`] and
//! [`beat_core::PlaylistStore`], so state crates can use it without knowing
//! about HTTP.
//!
//! # Example
//!
//! ```ignore
//! use beat_api_client::{ApiConfig, BeatApiClient};
//! use beat_core::{LoginForm, PlaylistRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BeatApiClient::new(ApiConfig::new("http://localhost:5000"))?;
//!
//!     client.login(&LoginForm::new("ada@example.com", "secret1")).await?;
//!     let user = client.fetch_user().await?;
//!
//!     let songs = client.get_all_songs().await?;
//!     let request = PlaylistRequest::new("Favourites", songs.into_iter().take(3).collect());
//!     let user = client.add_playlist(&request).await?;
//!     println!("{} now has {} playlists", user.name, user.playlists.len());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod catalog;
mod client;
mod error;
mod playlists;
mod response;
mod types;
mod upload;

// Re-export main types
pub use client::BeatApiClient;
pub use error::{ApiClientError, Result};
pub use types::{ApiConfig, Envelope, MAX_UPLOAD_BYTES};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use catalog::CatalogClient;
pub use playlists::PlaylistClient;
pub use upload::UploadClient;
