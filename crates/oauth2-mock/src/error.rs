//! Request error taxonomy.
//!
//! Uses `thiserror` for structured errors. Every failure is terminal for its
//! request: the error maps to a status code and a plain-text body carrying
//! the underlying message, and is logged server-side before the response is
//! written.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors surfaced to HTTP callers.
#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    /// Request query/body was not decodable as urlencoded form data (400).
    #[error("Error parsing form: {0}")]
    Form(String),

    /// The submitted `redirect_uri` did not parse as a URL (400).
    #[error("Error parsing redirect uri: {0}")]
    RedirectUri(#[from] url::ParseError),

    /// JWT signing failed (500). Not expected in practice: the secret is
    /// fixed at startup and claims are plain strings.
    #[error("Failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// Token response serialization failed (500).
    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl RequestError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Form(_) | Self::RedirectUri(_) => StatusCode::BAD_REQUEST,
            Self::Signing(_) | Self::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!(error = %message, "request failed");
        (self.status(), message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            RequestError::Form("bad".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RequestError::RedirectUri(url::ParseError::RelativeUrlWithoutBase).status(),
            StatusCode::BAD_REQUEST
        );
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(RequestError::Encode(json_err).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_message_carries_cause() {
        let err = RequestError::Form("unexpected byte".to_string());
        assert_eq!(err.to_string(), "Error parsing form: unexpected byte");
    }
}
