use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{error, warn};
use wayfarer::error::{ErrorKind, WayfarerError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] WayfarerError),

    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] JsonRejection),

    #[error("Background task failed: {0}")]
    Task(#[from] JoinError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::App(err) => match err.kind() {
                ErrorKind::MissingParameter
                | ErrorKind::InvalidInput
                | ErrorKind::InvalidPattern
                | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            error!(error = %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        // destination lookups answer with `message`, everything else with `error`
        let body = match self {
            ApiError::App(WayfarerError::DestinationNotFound(_)) => json!({ "message": message }),
            _ => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}
