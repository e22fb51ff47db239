// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};

use crate::{
    auth::AuthError,
    error::ApiError,
    models::{MessageResponse, ProtectedRequest, TokenRequest, TokenResponse},
    state::AppState,
};

/// Issue a short-lived access token for a phone number.
#[utoipa::path(
    post,
    path = "/auth/token",
    tag = "Auth",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Phone number missing")
    )
)]
pub async fn issue_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Some(phone) = request.phone.filter(|p| !p.trim().is_empty()) else {
        return Err(ApiError::bad_request("Phone number is required"));
    };

    let token = state.tokens.issue(&phone).map_err(|e| {
        tracing::error!(error = %e, "Token signing failed");
        ApiError::internal()
    })?;

    Ok(Json(TokenResponse {
        success: true,
        token,
    }))
}

/// Token-gated USSD access check.
#[utoipa::path(
    post,
    path = "/ussd/protected",
    tag = "Auth",
    request_body = ProtectedRequest,
    responses(
        (status = 200, description = "Token accepted", body = MessageResponse),
        (status = 401, description = "No token provided"),
        (status = 403, description = "Invalid or expired token")
    )
)]
pub async fn protected(
    State(state): State<AppState>,
    Json(request): Json<ProtectedRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    let token = request
        .token
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let claims = state.tokens.verify(&token)?;
    tracing::debug!(phone = %claims.phone, "Protected access granted");

    Ok(Json(MessageResponse::ok("Access granted")))
}
