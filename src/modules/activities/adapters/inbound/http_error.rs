use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::application::errors::ApplicationError;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn respond(status: StatusCode, detail: impl Into<String>) -> Response {
        (
            status,
            Json(ErrorResponse {
                detail: detail.into(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::NotFound(detail) => {
                ErrorResponse::respond(StatusCode::NOT_FOUND, detail)
            }
            ApplicationError::Conflict(detail) => {
                ErrorResponse::respond(StatusCode::BAD_REQUEST, detail)
            }
            ApplicationError::Registry(error) => {
                tracing::error!(%error, "activity registry failure");
                ErrorResponse::respond(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
