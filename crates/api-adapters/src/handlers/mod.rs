//! # Handlers
//!
//! Request/response mapping between HTTP and the board services.

pub mod pages;
pub mod replies;
pub mod threads;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use configs::ResponseMode;
use serde::Serialize;
use uuid::Uuid;

/// JSON answer to a create in `ResponseMode::Json`.
#[derive(Debug, Serialize)]
pub struct Created {
    pub success: bool,
    #[serde(rename = "_id")]
    pub id: Uuid,
}

/// Answers a successful create according to the configured mode: the new id
/// as JSON, or a `303 See Other` to `location`. Callers build `location`
/// from `views::path_segment`, so it is always a valid header value.
pub(crate) fn created(mode: ResponseMode, id: Uuid, location: &str) -> Response {
    match mode {
        ResponseMode::Json => Json(Created { success: true, id }).into_response(),
        ResponseMode::Redirect => Redirect::to(location).into_response(),
    }
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;

    #[test]
    fn json_mode_answers_with_id() {
        let response = created(ResponseMode::Json, Uuid::new_v4(), "/b/test/");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn redirect_mode_sees_other() {
        let response = created(ResponseMode::Redirect, Uuid::new_v4(), "/b/test/");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/b/test/");
    }
}
