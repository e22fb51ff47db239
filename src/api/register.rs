// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    accounts::{self, is_valid_phone_number},
    error::ApiError,
    models::{MessageResponse, RegisterRequest},
    state::AppState,
};

/// Register a phone number and open its custodial wallet.
///
/// Applies the same PIN rules as the USSD menu.
#[utoipa::path(
    post,
    path = "/register",
    tag = "Accounts",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account and wallet created", body = MessageResponse),
        (status = 400, description = "Missing or invalid phone number, or weak PIN"),
        (status = 409, description = "Phone number already registered"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let phone = match request.phone_number.as_deref().map(str::trim) {
        Some(phone) if !phone.is_empty() => phone.to_string(),
        _ => return Err(ApiError::bad_request("Phone number is required")),
    };

    if !is_valid_phone_number(&phone) {
        return Err(ApiError::bad_request(
            "Invalid phone number. Use 0xxxxxxxxxx or +234xxxxxxxxxx",
        ));
    }

    let pin = request.pin;
    let opened = tokio::task::spawn_blocking(move || {
        accounts::open_account(state.db.as_ref(), state.hasher.as_ref(), &phone, &pin)
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Registration task failed");
        ApiError::internal()
    })?;

    opened?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("Registration successful!")),
    ))
}
