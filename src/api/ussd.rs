// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Carrier callback endpoint.

use axum::{
    extract::{FromRequest, Request, State},
    http::header::CONTENT_TYPE,
    Form, Json,
};

use crate::{error::ApiError, models::DialInput, state::AppState, ussd::ProtocolResponse};

/// A [`DialInput`] read from either a form-encoded or a JSON body.
///
/// Gateways post `application/x-www-form-urlencoded`; JSON is accepted for
/// tooling. Other content types are rejected with 400.
#[derive(Debug)]
pub struct DialPayload(pub DialInput);

impl<S: Send + Sync> FromRequest<S> for DialPayload {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        let input = if is_json {
            let Json(input) = Json::<DialInput>::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;
            input
        } else {
            let Form(input) = Form::<DialInput>::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;
            input
        };

        Ok(Self(input))
    }
}

/// Answer one USSD interaction.
///
/// The reply body is `CON <text>` when the session continues and
/// `END <text>` when it is over.
#[utoipa::path(
    post,
    path = "/ussd",
    tag = "USSD",
    request_body(
        content = DialInput,
        content_type = "application/x-www-form-urlencoded",
        description = "Carrier callback; JSON is also accepted"
    ),
    responses(
        (status = 200, description = "Menu reply", body = String, content_type = "text/plain"),
        (status = 400, description = "Undecodable request body"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn handle_dial(
    State(state): State<AppState>,
    DialPayload(input): DialPayload,
) -> Result<ProtocolResponse, ApiError> {
    tracing::debug!(
        session_id = input.session_id.as_deref().unwrap_or("-"),
        service_code = input.service_code.as_deref().unwrap_or("-"),
        "USSD request"
    );

    let resolver = state.resolver.clone();
    let DialInput {
        phone_number, text, ..
    } = input;

    let resolved = tokio::task::spawn_blocking(move || resolver.resolve(&phone_number, &text))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "USSD resolver task failed");
            ApiError::internal()
        })?;

    resolved.map_err(|e| {
        tracing::error!(error = %e, "USSD resolution failed");
        ApiError::internal()
    })
}
