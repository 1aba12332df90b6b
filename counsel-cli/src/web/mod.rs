//! Contract review web UI
//!
//! A single page with an upload form. Submitting it runs one review and
//! answers with the same page holding the rendered report and status
//! messages. A failed run never takes the server down.

mod render;

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use counsel_core::{Error, ReviewOutcome, ReviewPipeline};
use serde_json::json;

use render::NoticeKind;

/// Name of the multipart field carrying the PDF
const CONTRACT_FIELD: &str = "contract";

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ReviewPipeline>,
}

/// Build the application router
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/review", post(review_page))
        .route("/api/review", post(review_json))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(render::page(""))
}

async fn health() -> &'static str {
    "ok"
}

async fn review_page(State(state): State<AppState>, multipart: Multipart) -> Response {
    let pdf = match read_contract(multipart).await {
        Ok(pdf) => pdf,
        Err(rejection) => return rejection,
    };

    match state.pipeline.run(pdf).await {
        Ok(outcome) => Html(render::page(&report_html(&outcome))).into_response(),
        Err(err) => {
            let content = render::notice(NoticeKind::Error, &error_message(&err));
            (status_for(&err), Html(render::page(&content))).into_response()
        }
    }
}

async fn review_json(State(state): State<AppState>, multipart: Multipart) -> Response {
    let pdf = match read_contract(multipart).await {
        Ok(pdf) => pdf,
        Err(rejection) => return rejection,
    };

    match state.pipeline.run(pdf).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(err) => (
            status_for(&err),
            Json(json!({ "error": error_message(&err) })),
        )
            .into_response(),
    }
}

/// Read the uploaded contract; an empty file input counts as no upload
async fn read_contract(mut multipart: Multipart) -> Result<Option<Vec<u8>>, Response> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(IntoResponse::into_response)?
    {
        if field.name() != Some(CONTRACT_FIELD) {
            continue;
        }

        let bytes = field.bytes().await.map_err(IntoResponse::into_response)?;
        if bytes.is_empty() {
            return Ok(None);
        }

        tracing::info!(bytes = bytes.len(), "Received contract upload");
        return Ok(Some(bytes.to_vec()));
    }

    Ok(None)
}

fn report_html(outcome: &ReviewOutcome) -> String {
    let mut content = render::blocks(&outcome.blocks);
    content.push_str(&render::notification(&outcome.notification));
    content
}

fn error_message(err: &Error) -> String {
    match err {
        Error::NoContract => err.to_string(),
        _ => format!("Error during analysis: {}", err),
    }
}

fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::NoContract => StatusCode::BAD_REQUEST,
        Error::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => {
            tracing::error!(error = %err, "Review failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
