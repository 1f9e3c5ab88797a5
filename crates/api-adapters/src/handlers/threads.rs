//! `/api/threads/{board}`

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use domains::{DomainError, ThreadView};
use serde::Deserialize;

use super::created;
use crate::error::ApiError;
use crate::extract::{lenient_string, parse_id, JsonOrForm};
use crate::state::AppState;
use crate::views::path_segment;

/// Missing or `null` fields are accepted and stored as empty strings.
#[derive(Debug, Deserialize)]
pub struct NewThreadRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub delete_password: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportThreadRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub thread_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteThreadRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub thread_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub delete_password: String,
}

/// POST - open a thread on the board
pub async fn create(
    State(state): State<AppState>,
    Path(board): Path<String>,
    JsonOrForm(req): JsonOrForm<NewThreadRequest>,
) -> Result<Response, ApiError> {
    let thread = state
        .boards
        .create_thread(&board, req.text, req.delete_password)
        .await?;

    let location = format!("/b/{}/", path_segment(&board));
    Ok(created(state.response_mode, thread.id, &location))
}

/// GET - most recently bumped threads with reply previews
pub async fn list(
    State(state): State<AppState>,
    Path(board): Path<String>,
) -> Result<Json<Vec<ThreadView>>, ApiError> {
    Ok(Json(state.boards.list_recent_threads(&board).await?))
}

/// PUT - report a thread
pub async fn report(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<ReportThreadRequest>,
) -> Result<&'static str, ApiError> {
    let thread_id = parse_id(&req.thread_id, DomainError::ThreadNotFound)?;
    state.boards.report_thread(thread_id).await?;
    Ok("reported")
}

/// DELETE - remove a thread when the password matches
pub async fn delete(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<DeleteThreadRequest>,
) -> Result<&'static str, ApiError> {
    let thread_id = parse_id(&req.thread_id, DomainError::ThreadNotFound)?;
    state
        .boards
        .delete_thread(thread_id, &req.delete_password)
        .await?;
    Ok("success")
}
