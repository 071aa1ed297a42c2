use std::any::Any;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod api {
    pub mod airtable;
}
pub mod handlers {
    pub mod contact_handlers;
}

use config::AirtableConfig;
use handlers::contact_handlers;

pub struct AppState {
    pub airtable: AirtableConfig,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(airtable: AirtableConfig) -> Self {
        Self {
            airtable,
            http_client: reqwest::Client::new(),
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(error::internal_error_body())).into_response()
}

/// API routes. Static file serving and CORS are layered on in `main`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/submit-form",
            post(contact_handlers::submit_form).fallback(contact_handlers::method_not_allowed),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn into_parts(response: Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn panics_become_json_internal_errors() {
        let payloads: Vec<Box<dyn Any + Send + 'static>> =
            vec![Box::new("boom"), Box::new(String::from("boom")), Box::new(42_u8)];

        for payload in payloads {
            let (status, body) = into_parts(handle_panic(payload)).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, serde_json::json!({"error": "Internal server error"}));
        }
    }
}
