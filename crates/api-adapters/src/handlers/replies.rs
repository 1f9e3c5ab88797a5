//! `/api/replies/{board}`

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use domains::{DomainError, ThreadView};
use serde::Deserialize;

use super::created;
use crate::error::ApiError;
use crate::extract::{lenient_string, parse_id, reply_id_or_nil, JsonOrForm};
use crate::state::AppState;
use crate::views::path_segment;

/// Missing or `null` `text` / `delete_password` are stored as empty
/// strings.
#[derive(Debug, Deserialize)]
pub struct NewReplyRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub thread_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub delete_password: String,
}

#[derive(Debug, Deserialize)]
pub struct ThreadQuery {
    #[serde(default, deserialize_with = "lenient_string")]
    pub thread_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportReplyRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub thread_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reply_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteReplyRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub thread_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reply_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub delete_password: String,
}

/// POST - append a reply and bump the thread
pub async fn create(
    State(state): State<AppState>,
    Path(board): Path<String>,
    JsonOrForm(req): JsonOrForm<NewReplyRequest>,
) -> Result<Response, ApiError> {
    let thread_id = parse_id(&req.thread_id, DomainError::ThreadNotFound)?;
    let reply = state
        .replies
        .create_reply(thread_id, req.text, req.delete_password)
        .await?;

    let location = format!("/b/{}/{thread_id}", path_segment(&board));
    Ok(created(state.response_mode, reply.id, &location))
}

/// GET - one thread with every reply
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<ThreadQuery>,
) -> Result<Json<ThreadView>, ApiError> {
    let thread_id = parse_id(&query.thread_id, DomainError::ThreadNotFound)?;
    Ok(Json(state.replies.get_thread_with_replies(thread_id).await?))
}

/// PUT - report a reply
pub async fn report(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<ReportReplyRequest>,
) -> Result<&'static str, ApiError> {
    let thread_id = parse_id(&req.thread_id, DomainError::ThreadNotFound)?;
    let reply_id = reply_id_or_nil(&req.reply_id);
    state.replies.report_reply(thread_id, reply_id).await?;
    Ok("reported")
}

/// DELETE - soft-delete a reply when the password matches
pub async fn delete(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<DeleteReplyRequest>,
) -> Result<&'static str, ApiError> {
    let thread_id = parse_id(&req.thread_id, DomainError::ThreadNotFound)?;
    let reply_id = reply_id_or_nil(&req.reply_id);
    state
        .replies
        .delete_reply(thread_id, reply_id, &req.delete_password)
        .await?;
    Ok("success")
}
