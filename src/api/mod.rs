// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::HeaderName,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        DialInput, MessageResponse, ProtectedRequest, RegisterRequest, TokenRequest,
        TokenResponse,
    },
    state::AppState,
};

pub mod auth;
pub mod health;
pub mod register;
pub mod ussd;

const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let routes = Router::new()
        .route("/ussd", post(ussd::handle_dial))
        .route("/ussd/protected", post(auth::protected))
        .route("/register", post(register::register))
        .route("/auth/token", post(auth::issue_token))
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    routes
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        ussd::handle_dial,
        register::register,
        auth::issue_token,
        auth::protected,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            DialInput,
            RegisterRequest,
            MessageResponse,
            TokenRequest,
            TokenResponse,
            ProtectedRequest,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    tags(
        (name = "USSD", description = "Carrier menu callback"),
        (name = "Accounts", description = "Web registration"),
        (name = "Auth", description = "Phone-bound access tokens"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::ServiceExt;

    async fn send(app: Router, request: Request<Body>) -> Response {
        app.oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn dial(phone: &str, text: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/ussd")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!(
                "phoneNumber={}&text={}&sessionId=ATU_1&serviceCode=%2A384%23",
                phone.replace('+', "%2B"),
                text
            )))
            .unwrap()
    }

    fn json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(AppState::in_memory());
        let _ = app.into_make_service();
    }

    #[tokio::test]
    async fn ussd_registration_then_main_menu() {
        let app = router(AppState::in_memory());
        let phone = "+2348031234567";

        let response = send(app.clone(), dial(phone, "")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            body_text(response).await,
            "CON Welcome to Kudiswap!\nPlease create a 6-digit PIN"
        );

        let response = send(app.clone(), dial(phone, "482913")).await;
        assert_eq!(body_text(response).await, "CON Repeat pin");

        let response = send(app.clone(), dial(phone, "482913*482913")).await;
        assert!(body_text(response).await.starts_with("END Success!"));

        let response = send(app, dial(phone, "")).await;
        assert!(body_text(response).await.starts_with("CON KudiSwap\n1. Send"));
    }

    #[tokio::test]
    async fn ussd_accepts_json() {
        let app = router(AppState::in_memory());
        let response = send(
            app,
            json(
                "/ussd",
                serde_json::json!({ "phoneNumber": "08031234567", "text": "1*1*08099999999*26.6" }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_text(response).await,
            "CON Send to 08099999999\n26.6 STRK (45,220 NGN)\n\nEnter pin to send"
        );
    }

    #[tokio::test]
    async fn ussd_rejects_undecodable_body() {
        let app = router(AppState::in_memory());
        let request = Request::builder()
            .method("POST")
            .uri("/ussd")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = send(app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_then_conflict() {
        let app = router(AppState::in_memory());
        let body = serde_json::json!({ "phoneNumber": "08031234567", "pin": "482913" });

        let response = send(app.clone(), json("/register", body.clone())).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = send(app, json("/register", body)).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_text(response).await,
            r#"{"error":"You already have a wallet linked to this number."}"#
        );
    }

    #[tokio::test]
    async fn protected_route_statuses() {
        let app = router(AppState::in_memory());

        let response = send(
            app.clone(),
            json("/auth/token", serde_json::json!({ "phone": "08031234567" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let issued: serde_json::Value =
            serde_json::from_str(&body_text(response).await).unwrap();
        let token = issued["token"].as_str().unwrap().to_string();

        let response = send(
            app.clone(),
            json("/ussd/protected", serde_json::json!({ "token": token })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(app.clone(), json("/ussd/protected", serde_json::json!({}))).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = send(
            app,
            json("/ussd/protected", serde_json::json!({ "token": "forged" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let app = router(AppState::in_memory());
        let request = Request::builder()
            .uri("/health/live")
            .body(Body::empty())
            .unwrap();

        let response = send(app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }
}
