// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Authentication error type.
///
/// A request without a token is unauthenticated (401); a token that is
/// present but fails verification is forbidden (403).
#[derive(Debug)]
pub enum AuthError {
    /// No token in the request body
    MissingToken,
    /// Token could not be decoded
    MalformedToken,
    /// Token signature does not match the configured secret
    InvalidSignature,
    /// Token has expired
    TokenExpired,
    /// Token could not be signed
    SigningFailed(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
    error_code: String,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "missing_token",
            AuthError::MalformedToken => "malformed_token",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::TokenExpired => "token_expired",
            AuthError::SigningFailed(_) => "internal_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::MalformedToken | AuthError::InvalidSignature | AuthError::TokenExpired => {
                StatusCode::FORBIDDEN
            }
            AuthError::SigningFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingToken => write!(f, "Unauthorized - No Token Provided"),
            AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::TokenExpired => write!(f, "Forbidden - Invalid or Expired Token"),
            AuthError::SigningFailed(msg) => write!(f, "Token signing failed: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = match &self {
            AuthError::SigningFailed(_) => {
                tracing::error!(error = %self, "Token signing failed");
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };
        let body = Json(AuthErrorBody {
            error,
            error_code: self.error_code().to_string(),
        });
        (status, body).into_response()
    }
}
