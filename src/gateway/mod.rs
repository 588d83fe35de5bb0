//! HTTP gateway (Axum) for checks, exports, archival and source uploads.
//!
//! Every `/v1` route authenticates with HTTP Basic credentials against the
//! [`UserDirectory`](crate::session::UserDirectory).

#![allow(missing_docs)]

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use handler::{
    archive_handler, check_handler, export_handler, remote_status_handler, sources_handler,
};
pub use state::HandlerState;

use crate::corpus::CorpusStore;
use crate::remote::RemoteSearch;

/// Response header carrying a short machine-readable status.
pub const SIMCHECK_STATUS_HEADER: &str = "x-simcheck-status";
pub const SIMCHECK_STATUS_HEALTHY: &str = "healthy";
pub const SIMCHECK_STATUS_READY: &str = "ready";
pub const SIMCHECK_STATUS_ERROR: &str = "error";

pub fn create_router_with_state<S, R>(state: HandlerState<S, R>) -> Router
where
    S: CorpusStore + 'static,
    R: RemoteSearch + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/v1/check", post(check_handler))
        .route("/v1/check/export", post(export_handler))
        .route("/v1/archive", post(archive_handler))
        .route("/v1/sources", post(sources_handler))
        .route("/v1/remote/status", get(remote_status_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub corpus_store: &'static str,
    pub remote_search: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        SIMCHECK_STATUS_HEADER,
        HeaderValue::from_static(SIMCHECK_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<S, R>(State(state): State<HandlerState<S, R>>) -> Response
where
    S: CorpusStore + 'static,
    R: RemoteSearch + 'static,
{
    let corpus_store = if state.checker.store().is_available() {
        SIMCHECK_STATUS_READY
    } else {
        SIMCHECK_STATUS_ERROR
    };

    let remote_search = if state.checker.remote().is_some() {
        "enabled"
    } else {
        "disabled"
    };

    let components = ComponentStatus {
        http: SIMCHECK_STATUS_READY,
        corpus_store,
        remote_search,
    };

    let is_ready = components.corpus_store == SIMCHECK_STATUS_READY;
    let (status_code, status_msg) = if is_ready {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "pending")
    };

    let mut headers = HeaderMap::new();
    headers.insert(SIMCHECK_STATUS_HEADER, HeaderValue::from_static(status_msg));

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status: status_msg,
            components,
        }),
    )
        .into_response()
}
