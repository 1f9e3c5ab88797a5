//! API error type with `IntoResponse`.
//!
//! Domain outcomes (not found, wrong password) are not HTTP errors here: they
//! are answered with status 200 and a plain-text body that board clients
//! match on. Only infrastructure failures become 5xx.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domains::DomainError;

#[derive(Debug)]
pub enum ApiError {
    /// A domain outcome the client is told about in plain text.
    Rejected(DomainError),

    /// Store or rendering failure (500, logged)
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Rejected(err) => (StatusCode::OK, err.to_string()).into_response(),
            Self::Internal { message } => {
                // Log the actual error, return generic message
                tracing::error!("Internal error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Storage(message) => Self::Internal { message },
            other => Self::Rejected(other),
        }
    }
}

impl From<askama::Error> for ApiError {
    fn from(e: askama::Error) -> Self {
        Self::Internal {
            message: format!("template rendering failed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn wrong_password_is_plain_text_200() {
        let response = ApiError::from(DomainError::IncorrectPassword).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "incorrect password");
    }

    #[tokio::test]
    async fn reply_not_found_is_plain_text_200() {
        let response = ApiError::from(DomainError::ReplyNotFound).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "reply not found");
    }

    #[tokio::test]
    async fn storage_failure_is_500_without_details() {
        let err = ApiError::from(DomainError::Storage("password=secret".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body_text(response).await.contains("secret"));
    }
}
