//! ApiError - JSON エラー形式
//!
//! 失敗はすべて `{"error": "<message>"}` で返します。

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use taskboard_core::{BoardError, ErrorKind};
use tracing::{debug, error};

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Board(#[from] BoardError),

    /// どの task も指し得ない `{id}` セグメント
    #[error("Task not found: {0}")]
    UnknownTask(String),

    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Board(err) => match err.kind() {
                ErrorKind::Validation | ErrorKind::InvalidStatus => StatusCode::BAD_REQUEST,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::UnknownTask(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            // 内部の詳細はログにだけ残す
            error!(error = %self, "request failed");
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            debug!(status = status.as_u16(), error = %self, "request rejected");
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use taskboard_core::TaskId;

    #[rstest]
    #[case::validation(ApiError::Board(BoardError::validation("Title and description are required")), StatusCode::BAD_REQUEST)]
    #[case::invalid_status(ApiError::Board(BoardError::InvalidStatus("bogus".into())), StatusCode::BAD_REQUEST)]
    #[case::not_found(ApiError::Board(BoardError::NotFound(TaskId::new(1))), StatusCode::NOT_FOUND)]
    #[case::internal(ApiError::Board(BoardError::Internal("boom".into())), StatusCode::INTERNAL_SERVER_ERROR)]
    #[case::unknown_task(ApiError::UnknownTask("abc".into()), StatusCode::NOT_FOUND)]
    #[case::bad_request(ApiError::BadRequest("expected object".into()), StatusCode::BAD_REQUEST)]
    #[case::too_large(ApiError::PayloadTooLarge, StatusCode::PAYLOAD_TOO_LARGE)]
    #[case::method(ApiError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED)]
    fn maps_errors_to_status_codes(#[case] err: ApiError, #[case] expected: StatusCode) {
        assert_eq!(err.status(), expected);
        assert_eq!(err.into_response().status(), expected);
    }

    #[test]
    fn client_errors_keep_their_message() {
        let err = ApiError::from(BoardError::InvalidStatus("bogus".into()));
        assert_eq!(err.to_string(), "Invalid status: bogus");
    }
}
