//! Server-rendered pages for browsers. The forms on these pages post to the
//! `/api` routes, which redirect back here in `ResponseMode::Redirect`.

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use domains::DomainError;
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::parse_id;
use crate::state::AppState;
use crate::views::{path_segment, BoardPage, IndexPage, ThreadPage};

#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    #[serde(default)]
    pub board: String,
}

/// GET /
pub async fn index() -> Result<Html<String>, ApiError> {
    let html = IndexPage {
        title: "Anonymous message board",
    }
    .render()?;
    Ok(Html(html))
}

/// GET /b?board=name - target of the index form
pub async fn pick_board(Query(query): Query<BoardQuery>) -> Redirect {
    let board = query.board.trim();
    if board.is_empty() {
        return Redirect::to("/");
    }
    Redirect::to(&format!("/b/{}/", path_segment(board)))
}

/// GET /b/{board}/
pub async fn board(
    State(state): State<AppState>,
    Path(board): Path<String>,
) -> Result<Html<String>, ApiError> {
    let threads = state.boards.list_recent_threads(&board).await?;
    let html = BoardPage {
        title: format!("/{board}/"),
        board: &board,
        segment: path_segment(&board),
        threads: &threads,
    }
    .render()?;
    Ok(Html(html))
}

/// GET /b/{board}/{thread_id}
pub async fn thread(
    State(state): State<AppState>,
    Path((board, thread_id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let view = match parse_id(&thread_id, DomainError::ThreadNotFound) {
        Ok(id) => state.replies.get_thread_with_replies(id).await,
        Err(e) => Err(e),
    };

    let thread = match view {
        Ok(thread) => thread,
        Err(DomainError::ThreadNotFound) => {
            return Ok((StatusCode::NOT_FOUND, "Not Found").into_response());
        }
        Err(e) => return Err(e.into()),
    };

    let html = ThreadPage {
        title: format!("/{board}/ - {}", thread.id),
        board: &board,
        segment: path_segment(&board),
        thread: &thread,
    }
    .render()?;
    Ok(Html(html).into_response())
}
