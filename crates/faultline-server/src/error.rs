use faultline_core::CustomError;
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Application error returned by the demo routes
///
/// Serialized verbatim as the response body when it reaches the translator.
#[derive(Debug, Error, Serialize)]
#[error("{message}")]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

impl CustomError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
