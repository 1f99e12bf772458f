//! Error types for the car registry.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur during registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Car not found: {0}")]
    CarNotFound(String),

    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body used for confirmations and every error response.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl RegistryError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::CarNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Internal details stay in the logs.
    fn public_message(&self) -> &'static str {
        match self {
            Self::CarNotFound(_) => "Car not found",
            Self::InvalidPayload(_) => "Invalid request payload",
            Self::PayloadTooLarge(_) => "Request body too large",
            Self::MethodNotAllowed => "Method not allowed",
            Self::Io(_) | Self::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, "Request rejected");
        }

        (status, Json(MessageBody::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(
            RegistryError::CarNotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RegistryError::InvalidPayload("eof".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RegistryError::PayloadTooLarge(1024).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            RegistryError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            RegistryError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let err = RegistryError::Internal("task panicked".into());
        assert_eq!(err.public_message(), "Internal server error");

        let err = RegistryError::InvalidPayload("expected value at line 1".into());
        assert_eq!(err.public_message(), "Invalid request payload");
    }

    #[test]
    fn response_carries_status() {
        let response = RegistryError::CarNotFound("abc".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
