// Web server — Axum-based HTTP boundary around the extraction pipeline.
//
// All transport concerns live here: CORS (the caller is a browser SPA,
// so the preflight must be answered permissively), the uniform JSON
// envelope, and the error-to-status mapping. No business logic.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, HeaderName, Method};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::ExtractError;
use crate::provider::TopicProvider;

pub mod extract;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn TopicProvider>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(provider: Arc<dyn TopicProvider>, port: u16, bind: &str) -> Result<()> {
    let state = AppState { provider };
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Extrakt listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Public so integration tests can drive it
/// in-process without binding a socket.
pub fn build_router(state: AppState) -> Router {
    // The allowed headers match what the browser client actually sends;
    // the frontend breaks if any of them gets rejected in preflight.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    Router::new()
        .route("/extract-topics", post(extract::extract_topics))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Deployment health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Every pipeline failure becomes the same envelope: the classified
/// status plus `{"error": "<localized message>"}`. Diagnostic detail
/// was already logged at the classification site.
impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
