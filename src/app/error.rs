//! Maps roster failures and extractor rejections onto HTTP responses.
//!
//! Every error body has the shape `{"detail": "..."}` so clients can show the
//! message as-is and match on well-known substrings.
use crate::roster::RosterError;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorResponse {
    pub(crate) detail: String,
}

#[derive(Debug)]
pub(crate) struct ApiError {
    pub(crate) status: StatusCode,
    pub(crate) body: ErrorResponse,
}

impl ApiError {
    fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                detail: detail.into(),
            },
        }
    }

    pub(crate) fn missing_email() -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "email query parameter is required",
        )
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        // Duplicate signup is a client error, not a 409.
        let status = match &err {
            RosterError::ActivityNotFound(_) | RosterError::NotSignedUp { .. } => {
                StatusCode::NOT_FOUND
            }
            RosterError::AlreadySignedUp { .. } => StatusCode::BAD_REQUEST,
        };
        Self::new(status, err.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
