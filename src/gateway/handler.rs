use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::constants::REPORT_CSV_FILENAME;
use crate::corpus::CorpusStore;
use crate::engine::{CheckOptions, CheckOutcome};
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{
    ArchiveRequest, ArchiveResponse, ArchivedFile, CheckRequest, CheckResponse, IngestedFile,
    SourcesRequest, SourcesResponse,
};
use crate::gateway::state::HandlerState;
use crate::remote::RemoteSearch;
use crate::session::{RequestContext, UserDirectory};

/// Resolves HTTP Basic credentials against the user directory.
pub(crate) fn authenticate(
    users: &UserDirectory,
    headers: &HeaderMap,
) -> Result<RequestContext, GatewayError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|val| val.to_str().ok())
        .ok_or_else(|| GatewayError::Unauthorized("missing credentials".to_string()))?;

    let encoded = value
        .strip_prefix("Basic ")
        .ok_or_else(|| GatewayError::Unauthorized("expected Basic authorization".to_string()))?;

    let decoded = BASE64_STANDARD
        .decode(encoded.trim())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .ok_or_else(|| GatewayError::Unauthorized("malformed credentials".to_string()))?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| GatewayError::Unauthorized("malformed credentials".to_string()))?;

    Ok(users.authenticate(username, password)?)
}

pub(crate) fn parse_body<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, GatewayError> {
    serde_json::from_value(body)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))
}

async fn run_check<S, R>(
    state: &HandlerState<S, R>,
    ctx: &RequestContext,
    request: CheckRequest,
) -> Result<CheckOutcome, GatewayError>
where
    S: CorpusStore + 'static,
    R: RemoteSearch + 'static,
{
    let options = CheckOptions {
        use_remote: request.remote,
    };
    let submissions = request.into_submissions();
    debug!(submissions = submissions.len(), remote = options.use_remote, "Processing check request");

    Ok(state.checker.check(ctx, submissions, options).await?)
}

#[instrument(skip(state, headers, body), fields(user = tracing::field::Empty))]
pub async fn check_handler<S, R>(
    State(state): State<HandlerState<S, R>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    S: CorpusStore + 'static,
    R: RemoteSearch + 'static,
{
    let ctx = authenticate(&state.users, &headers)?;
    tracing::Span::current().record("user", tracing::field::display(&ctx.user));

    let request: CheckRequest = parse_body(body)?;
    let outcome = run_check(&state, &ctx, request).await?;

    Ok((
        StatusCode::OK,
        Json(CheckResponse::from_outcome(ctx.request_id, &outcome)),
    )
        .into_response())
}

#[instrument(skip(state, headers, body), fields(user = tracing::field::Empty))]
pub async fn export_handler<S, R>(
    State(state): State<HandlerState<S, R>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    S: CorpusStore + 'static,
    R: RemoteSearch + 'static,
{
    let ctx = authenticate(&state.users, &headers)?;
    tracing::Span::current().record("user", tracing::field::display(&ctx.user));

    let request: CheckRequest = parse_body(body)?;
    let outcome = run_check(&state, &ctx, request).await?;

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        REPORT_CSV_FILENAME
    ))
    .map_err(|e| GatewayError::InternalError(e.to_string()))?;

    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    response_headers.insert(header::CONTENT_DISPOSITION, disposition);

    Ok((StatusCode::OK, response_headers, outcome.report.to_csv()).into_response())
}

#[instrument(skip(state, headers, body), fields(user = tracing::field::Empty))]
pub async fn archive_handler<S, R>(
    State(state): State<HandlerState<S, R>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    S: CorpusStore + 'static,
    R: RemoteSearch + 'static,
{
    let ctx = authenticate(&state.users, &headers)?;
    tracing::Span::current().record("user", tracing::field::display(&ctx.user));

    let request: ArchiveRequest = parse_body(body)?;
    let selected = request.selected;
    let outcome = run_check(&state, &ctx, request.check).await?;

    let checker = Arc::clone(&state.checker);
    let archive_ctx = ctx.clone();
    let timestamp = chrono::Local::now().naive_local();
    let (outcome, results) = tokio::task::spawn_blocking(move || {
        let results = checker.archive(&archive_ctx, &outcome, selected.as_deref(), timestamp);
        (outcome, results)
    })
    .await
    .map_err(|e| GatewayError::StorageError(format!("Archive task failed: {}", e)))?;

    let response = ArchiveResponse {
        request_id: ctx.request_id,
        check: CheckResponse::from_outcome(ctx.request_id, &outcome),
        archived: results.iter().map(ArchivedFile::from).collect(),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

#[instrument(skip(state, headers, body), fields(user = tracing::field::Empty))]
pub async fn sources_handler<S, R>(
    State(state): State<HandlerState<S, R>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    S: CorpusStore + 'static,
    R: RemoteSearch + 'static,
{
    let ctx = authenticate(&state.users, &headers)?;
    tracing::Span::current().record("user", tracing::field::display(&ctx.user));

    let request: SourcesRequest = parse_body(body)?;
    let uploads = request.into_uploads();
    if uploads.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "no source files provided".to_string(),
        ));
    }

    let checker = Arc::clone(&state.checker);
    let ingest_ctx = ctx.clone();
    let (reports, corpus_size) = tokio::task::spawn_blocking(move || {
        let reports = checker.ingest_sources(&ingest_ctx, &uploads)?;
        let corpus_size = checker.store().len().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to count corpus entries");
            0
        });
        Ok::<_, GatewayError>((reports, corpus_size))
    })
    .await
    .map_err(|e| GatewayError::StorageError(format!("Ingest task failed: {}", e)))??;

    let response = SourcesResponse {
        request_id: ctx.request_id,
        results: reports.iter().map(IngestedFile::from).collect(),
        corpus_size,
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

#[instrument(skip(state, headers))]
pub async fn remote_status_handler<S, R>(
    State(state): State<HandlerState<S, R>>,
    headers: HeaderMap,
) -> Result<Response, GatewayError>
where
    S: CorpusStore + 'static,
    R: RemoteSearch + 'static,
{
    authenticate(&state.users, &headers)?;
    let status = state.checker.remote_status().await;
    Ok((StatusCode::OK, Json(status)).into_response())
}
