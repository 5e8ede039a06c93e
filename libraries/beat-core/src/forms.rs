//! Client-side form validation
//!
//! Every form is checked before a request is built so that invalid input
//! never reaches the network. Validation returns a trimmed copy of the form.

use crate::error::{BeatError, Result};
use crate::types::{parse_duration, SongId};
use serde::Serialize;
use std::path::PathBuf;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterForm {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Plain-text password, sent over TLS only
    pub password: String,
}

impl RegisterForm {
    /// Build a form from raw input
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check required fields, email shape and password length
    pub fn validate(&self) -> Result<Self> {
        let form = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.trim().to_string(),
        };

        if form.name.is_empty() || form.email.is_empty() || form.password.is_empty() {
            return Err(BeatError::validation(
                "Name, email, and password are required",
            ));
        }
        if !is_valid_email(&form.email) {
            return Err(BeatError::validation("Invalid email format"));
        }
        if form.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(BeatError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters long"
            )));
        }

        Ok(form)
    }
}

/// Login form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    /// Login email
    pub email: String,
    /// Password
    pub password: String,
}

impl LoginForm {
    /// Build a form from raw input
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check that both fields are present
    pub fn validate(&self) -> Result<Self> {
        let email = self.email.trim().to_string();
        if email.is_empty() || self.password.is_empty() {
            return Err(BeatError::validation("Email and password are required"));
        }
        Ok(Self {
            email,
            password: self.password.clone(),
        })
    }
}

/// Whether a song form creates a new song or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongFormMode {
    /// Upload a new song
    Create,
    /// Edit the song with the form's id
    Update,
}

/// Admin form for adding or editing a catalog song
///
/// Media files are local paths; the API client uploads them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongForm {
    /// Set when editing an existing song
    pub id: Option<SongId>,
    /// Song title
    pub title: String,
    /// Artist name
    pub artist: String,
    /// Album name
    pub album: String,
    /// Release year
    pub year: String,
    /// Display duration (`m:ss` or decimal minutes)
    pub duration: String,
    /// Audio file to upload
    pub file: Option<PathBuf>,
    /// Cover image to upload
    pub album_photo: Option<PathBuf>,
}

impl SongForm {
    /// Create or update, depending on whether an id is set
    pub fn mode(&self) -> SongFormMode {
        if self.id.is_some() {
            SongFormMode::Update
        } else {
            SongFormMode::Create
        }
    }

    /// Check required text fields; new songs also need both media files
    pub fn validate(&self) -> Result<Self> {
        let form = Self {
            id: self.id.clone(),
            title: self.title.trim().to_string(),
            artist: self.artist.trim().to_string(),
            album: self.album.trim().to_string(),
            year: self.year.trim().to_string(),
            duration: self.duration.trim().to_string(),
            file: self.file.clone(),
            album_photo: self.album_photo.clone(),
        };

        if form.title.is_empty()
            || form.artist.is_empty()
            || form.album.is_empty()
            || form.duration.is_empty()
            || form.year.is_empty()
        {
            return Err(BeatError::validation(
                "Please provide all required fields: title, artist, album, duration, and year",
            ));
        }

        if parse_duration(&form.duration).is_none() {
            return Err(BeatError::validation(format!(
                "Invalid duration: {}",
                form.duration
            )));
        }

        if form.mode() == SongFormMode::Create
            && (form.file.is_none() || form.album_photo.is_none())
        {
            return Err(BeatError::validation(
                "Both song file and album photo are required",
            ));
        }

        Ok(form)
    }
}

/// Loose email shape check: `local@domain.tld`, no whitespace
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_form_trims_fields() {
        let form = RegisterForm::new("  Alice ", " alice@example.com ", " secret1 ")
            .validate()
            .unwrap();
        assert_eq!(form.name, "Alice");
        assert_eq!(form.email, "alice@example.com");
        assert_eq!(form.password, "secret1");
    }

    #[test]
    fn register_form_requires_all_fields() {
        let err = RegisterForm::new("", "a@b.co", "secret1").validate().unwrap_err();
        assert!(matches!(err, BeatError::Validation(_)));
    }

    #[test]
    fn register_form_rejects_bad_email() {
        for email in ["alice", "alice@", "@example.com", "a@b", "a b@c.de", "a@@b.co"] {
            let result = RegisterForm::new("Alice", email, "secret1").validate();
            assert!(result.is_err(), "accepted {email}");
        }
    }

    #[test]
    fn register_form_rejects_short_password() {
        let err = RegisterForm::new("Alice", "a@b.co", "12345").validate().unwrap_err();
        assert!(err.to_string().contains("at least 6"));
    }

    #[test]
    fn login_form_requires_credentials() {
        assert!(LoginForm::new("", "pw").validate().is_err());
        assert!(LoginForm::new("a@b.co", "").validate().is_err());
        assert_eq!(
            LoginForm::new(" a@b.co ", "pw").validate().unwrap().email,
            "a@b.co"
        );
    }

    fn song_form() -> SongForm {
        SongForm {
            id: None,
            title: "Title".into(),
            artist: "Artist".into(),
            album: "Album".into(),
            year: "2020".into(),
            duration: "3:10".into(),
            file: Some(PathBuf::from("song.mp3")),
            album_photo: Some(PathBuf::from("cover.jpg")),
        }
    }

    #[test]
    fn song_form_create_needs_both_files() {
        assert!(song_form().validate().is_ok());

        let mut form = song_form();
        form.album_photo = None;
        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains("album photo"));
    }

    #[test]
    fn song_form_update_files_are_optional() {
        let mut form = song_form();
        form.id = Some(SongId::new("s1"));
        form.file = None;
        form.album_photo = None;
        assert_eq!(form.mode(), SongFormMode::Update);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn song_form_rejects_missing_text_and_bad_duration() {
        let mut form = song_form();
        form.artist = "  ".into();
        assert!(form.validate().is_err());

        let mut form = song_form();
        form.duration = "soon".into();
        assert!(form.validate().unwrap_err().to_string().contains("duration"));
    }
}
