//! Shared request and response handling.

use crate::error::{ApiClientError, Result};
use crate::types::Envelope;
use reqwest::{Response, StatusCode};
use tracing::warn;

/// Map a transport failure, separating "server down" from other errors.
pub(crate) fn send_error(e: reqwest::Error) -> ApiClientError {
    if e.is_connect() || e.is_timeout() {
        ApiClientError::ServerUnreachable(e.to_string())
    } else {
        ApiClientError::Request(e)
    }
}

/// Read a response into its envelope.
///
/// - 401/403 become `AuthRequired`
/// - other non-2xx statuses become `ServerError`, using the envelope
///   message when the body has one
/// - `success: false` becomes `Rejected`, whatever the status
pub(crate) async fn read_envelope(response: Response) -> Result<Envelope> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        warn!(status = %status, "Request refused: authentication required");
        return Err(ApiClientError::AuthRequired);
    }

    let body = response.text().await?;
    let parsed = serde_json::from_str::<Envelope>(&body);

    if !status.is_success() {
        let message = parsed.map(|envelope| envelope.message).unwrap_or(body);
        return Err(ApiClientError::ServerError {
            status: status.as_u16(),
            message,
        });
    }

    let envelope = parsed
        .map_err(|e| ApiClientError::ParseError(format!("Invalid response envelope: {e}")))?;

    if envelope.success {
        Ok(envelope)
    } else {
        warn!(message = %envelope.message, "Request rejected by server");
        Err(ApiClientError::Rejected(envelope.message))
    }
}
