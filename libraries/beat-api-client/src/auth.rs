//! Account endpoints: register, login and user data.

use crate::error::Result;
use crate::response::{read_envelope, send_error};
use beat_core::{LoginForm, RegisterForm, User};
use reqwest::Client;
use tracing::{debug, info};

/// Authentication client for Beat District.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Create an account.
    ///
    /// Returns the server's confirmation message.
    pub async fn register(&self, form: &RegisterForm) -> Result<String> {
        let url = format!("{}/api/users/register", self.base_url);
        debug!(url = %url, email = %form.email, "Registering account");

        let response = self
            .http
            .post(&url)
            .json(form)
            .send()
            .await
            .map_err(send_error)?;

        let envelope = read_envelope(response).await?;
        info!(email = %form.email, "Account registered");
        Ok(envelope.message)
    }

    /// Login with email and password.
    ///
    /// Returns the bearer token on success. Wrong credentials come back as
    /// `Rejected` with the server's message.
    pub async fn login(&self, form: &LoginForm) -> Result<String> {
        let url = format!("{}/api/users/login", self.base_url);
        debug!(url = %url, email = %form.email, "Attempting login");

        let response = self
            .http
            .post(&url)
            .json(form)
            .send()
            .await
            .map_err(send_error)?;

        let token: String = read_envelope(response).await?.into_data("token")?;
        info!(email = %form.email, "Login successful");
        Ok(token)
    }

    /// Fetch the user record belonging to a token.
    pub async fn get_user_data(&self, access_token: &str) -> Result<User> {
        let url = format!("{}/api/users/get-user-data", self.base_url);
        debug!(url = %url, "Fetching user data");

        let response = self
            .http
            .post(&url)
            .bearer_auth(access_token)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(send_error)?;

        read_envelope(response).await?.into_data("user")
    }
}
