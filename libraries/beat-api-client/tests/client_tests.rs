//! Tests for the Beat District API client.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real server connection.

use beat_api_client::{ApiClientError, ApiConfig, BeatApiClient, MAX_UPLOAD_BYTES};
use beat_core::{
    BeatError, LoginForm, PlaylistRequest, PlaylistStore, RegisterForm, Song, SongForm, SongId,
    UserId,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_json(playlists: serde_json::Value) -> serde_json::Value {
    json!({
        "_id": "u1",
        "name": "Ada",
        "email": "ada@example.com",
        "isAdmin": true,
        "playlists": playlists
    })
}

fn song_json(id: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": format!("Song {id}"),
        "artist": "Artist",
        "album": "Album",
        "year": "2020",
        "duration": "3:00",
        "src": format!("https://media.example/{id}.mp3"),
        "albumPhoto": null
    })
}

async fn logged_in_client(server: &MockServer, user_id: Option<&str>) -> BeatApiClient {
    let client = BeatApiClient::new(ApiConfig::new(server.uri())).unwrap();
    client
        .set_session("tok".into(), user_id.map(UserId::new))
        .await;
    client
}

// =============================================================================
// Authentication Tests
// =============================================================================

mod authentication {
    use super::*;

    #[tokio::test]
    async fn login_stores_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users/login"))
            .and(body_partial_json(json!({"email": "ada@example.com"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "User logged in successfully",
                "data": "jwt-token"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = BeatApiClient::new(ApiConfig::new(server.uri())).unwrap();
        let token = client
            .login(&LoginForm::new(" ada@example.com ", "secret1"))
            .await
            .unwrap();

        assert_eq!(token, "jwt-token");
        assert!(client.is_authenticated().await);
    }

    #[tokio::test]
    async fn rejected_login_with_http_200_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "message": "Password is incorrect"
            })))
            .mount(&server)
            .await;

        let client = BeatApiClient::new(ApiConfig::new(server.uri())).unwrap();
        let err = client
            .login(&LoginForm::new("ada@example.com", "wrong"))
            .await
            .unwrap_err();

        match err {
            ApiClientError::Rejected(message) => assert_eq!(message, "Password is incorrect"),
            e => panic!("Expected Rejected, got: {e:?}"),
        }
        assert!(!client.is_authenticated().await);
    }

    #[tokio::test]
    async fn invalid_registration_never_hits_server() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = BeatApiClient::new(ApiConfig::new(server.uri())).unwrap();
        let err = client
            .register(&RegisterForm::new("Ada", "not-an-email", "secret1"))
            .await
            .unwrap_err();

        match err {
            ApiClientError::Validation(message) => assert_eq!(message, "Invalid email format"),
            e => panic!("Expected Validation, got: {e:?}"),
        }
    }

    #[tokio::test]
    async fn register_returns_server_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users/register"))
            .and(body_partial_json(json!({"name": "Ada", "password": "secret1"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "success": true,
                "message": "User registered successfully"
            })))
            .mount(&server)
            .await;

        let client = BeatApiClient::new(ApiConfig::new(server.uri())).unwrap();
        let message = client
            .register(&RegisterForm::new("Ada", "ada@example.com", "secret1"))
            .await
            .unwrap();

        assert_eq!(message, "User registered successfully");
    }

    #[tokio::test]
    async fn fetch_user_remembers_user_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users/get-user-data"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "User data fetched successfully",
                "data": user_json(json!([]))
            })))
            .mount(&server)
            .await;

        let client = logged_in_client(&server, None).await;
        let user = client.fetch_user().await.unwrap();

        assert!(user.is_admin);
        assert_eq!(client.session().await.1, Some(UserId::new("u1")));
    }

    #[tokio::test]
    async fn expired_token_maps_to_auth_required() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users/get-user-data"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": "Auth failed"
            })))
            .mount(&server)
            .await;

        let client = logged_in_client(&server, None).await;
        let err = client.fetch_user().await.unwrap_err();
        assert!(matches!(err, ApiClientError::AuthRequired));
    }
}

// =============================================================================
// Catalog Tests
// =============================================================================

mod catalog {
    use super::*;

    #[tokio::test]
    async fn get_all_songs_without_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/admin/get-all-songs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Songs fetched successfully",
                "data": [song_json("a"), song_json("b")]
            })))
            .mount(&server)
            .await;

        let client = BeatApiClient::new(ApiConfig::new(server.uri())).unwrap();
        let songs = client.get_all_songs().await.unwrap();

        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].id.as_str(), "a");
        // Null cover art arrives empty and is normalized later
        assert!(songs[0].album_photo.is_empty());
    }

    #[tokio::test]
    async fn server_error_uses_envelope_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/admin/get-all-songs"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "success": false,
                "message": "Error fetching songs"
            })))
            .mount(&server)
            .await;

        let client = BeatApiClient::new(ApiConfig::new(server.uri())).unwrap();
        match client.get_all_songs().await.unwrap_err() {
            ApiClientError::ServerError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Error fetching songs");
            }
            e => panic!("Expected ServerError, got: {e:?}"),
        }
    }

    #[tokio::test]
    async fn plain_text_error_body_is_kept() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/admin/get-all-songs"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let client = BeatApiClient::new(ApiConfig::new(server.uri())).unwrap();
        match client.get_all_songs().await.unwrap_err() {
            ApiClientError::ServerError { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            e => panic!("Expected ServerError, got: {e:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_json_is_a_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/admin/get-all-songs"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&server)
            .await;

        let client = BeatApiClient::new(ApiConfig::new(server.uri())).unwrap();
        let err = client.get_all_songs().await.unwrap_err();
        assert!(matches!(err, ApiClientError::ParseError(_)));
    }
}

// =============================================================================
// Playlist Tests
// =============================================================================

mod playlists {
    use super::*;

    fn request() -> PlaylistRequest {
        PlaylistRequest::new(
            "Mix",
            vec![Song::new(SongId::new("a"), "Song a", "Artist", "Album", "2020", "3:00")],
        )
    }

    #[tokio::test]
    async fn add_playlist_sends_user_id_and_full_songs() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/songs/add-playlist"))
            .and(header("authorization", "Bearer tok"))
            .and(body_partial_json(json!({
                "name": "Mix",
                "userId": "u1",
                "songs": [{"_id": "a", "title": "Song a"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Playlist created successfully",
                "data": user_json(json!([{"name": "Mix", "songs": [song_json("a")]}]))
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = logged_in_client(&server, Some("u1")).await;
        let user = client.add_playlist(&request()).await.unwrap();

        assert_eq!(user.playlists.len(), 1);
        assert_eq!(user.playlists[0].songs[0].id.as_str(), "a");
    }

    #[tokio::test]
    async fn unknown_user_id_is_fetched_first() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users/get-user-data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "ok",
                "data": user_json(json!([]))
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/songs/delete-playlist"))
            .and(body_partial_json(json!({"name": "Old", "userId": "u1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Playlist deleted successfully",
                "data": user_json(json!([]))
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = logged_in_client(&server, None).await;
        let user = client.delete_playlist("Old").await.unwrap();
        assert!(user.playlists.is_empty());
    }

    #[tokio::test]
    async fn store_errors_carry_server_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/songs/update-playlist"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "success": false,
                "message": "Error updating playlist",
                "data": {"name": "CastError"}
            })))
            .mount(&server)
            .await;

        let client = logged_in_client(&server, Some("u1")).await;
        let store: &dyn PlaylistStore = &client;
        let err = store.update_playlist(&request()).await.unwrap_err();

        assert!(matches!(err, BeatError::Network(ref m) if m == "Error updating playlist"));
    }

    #[tokio::test]
    async fn playlists_need_a_token() {
        let client = BeatApiClient::new(ApiConfig::new("http://127.0.0.1:9")).unwrap();
        let err = client.add_playlist(&request()).await.unwrap_err();
        assert!(matches!(err, ApiClientError::AuthRequired));
    }
}

// =============================================================================
// Upload Tests
// =============================================================================

mod uploads {
    use super::*;
    use std::io::Write;

    fn media_file(suffix: &str, contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    fn form(
        file: Option<&tempfile::NamedTempFile>,
        photo: Option<&tempfile::NamedTempFile>,
    ) -> SongForm {
        SongForm {
            title: "Intro".into(),
            artist: "Artist".into(),
            album: "Album".into(),
            year: "2024".into(),
            duration: "3:20".into(),
            file: file.map(|f| f.path().to_path_buf()),
            album_photo: photo.map(|f| f.path().to_path_buf()),
            ..SongForm::default()
        }
    }

    #[tokio::test]
    async fn add_song_uploads_both_files() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/admin/add-song"))
            .and(header("authorization", "Bearer tok"))
            .and(body_string_contains("name=\"albumPhoto\""))
            .and(body_string_contains("Content-Type: audio/mpeg"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Song added successfully",
                "data": [song_json("new"), song_json("a")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let audio = media_file(".mp3", b"ID3 fake audio");
        let cover = media_file(".jpg", b"fake jpeg");

        let client = logged_in_client(&server, Some("u1")).await;
        let songs = client
            .add_song(&form(Some(&audio), Some(&cover)))
            .await
            .unwrap();

        assert_eq!(songs.len(), 2);
    }

    #[tokio::test]
    async fn add_song_requires_both_files() {
        let server = MockServer::start().await;
        let audio = media_file(".mp3", b"ID3");

        let client = logged_in_client(&server, Some("u1")).await;
        let err = client.add_song(&form(Some(&audio), None)).await.unwrap_err();

        match err {
            ApiClientError::Validation(message) => {
                assert_eq!(message, "Both song file and album photo are required");
            }
            e => panic!("Expected Validation, got: {e:?}"),
        }
    }

    #[tokio::test]
    async fn oversized_file_is_rejected_before_upload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let audio = media_file(".mp3", b"");
        audio.as_file().set_len(MAX_UPLOAD_BYTES + 1).unwrap();
        let cover = media_file(".png", b"png");

        let client = logged_in_client(&server, Some("u1")).await;
        let err = client
            .add_song(&form(Some(&audio), Some(&cover)))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiClientError::FileTooLarge { .. }));
    }

    #[tokio::test]
    async fn edit_song_sends_id_without_files() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/admin/edit-song"))
            .and(body_string_contains("name=\"_id\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Song edited successfully",
                "data": [song_json("a")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut edit = form(None, None);
        edit.id = Some(SongId::new("a"));

        let client = logged_in_client(&server, Some("u1")).await;
        let songs = client.edit_song(&edit).await.unwrap();
        assert_eq!(songs[0].id.as_str(), "a");
    }
}
