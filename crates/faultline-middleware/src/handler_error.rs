use std::sync::Arc;

use axum::Json;
use axum::response::{IntoResponse, Response};
use faultline_core::ErrorBody;
use http::StatusCode;

pub type HandlerResult<T> = Result<T, HandlerError>;

/// Error returned by request handlers
///
/// Wraps anything convertible into [`anyhow::Error`], so handlers can use
/// `?` on their own fallible calls. The response built from it is only a
/// placeholder: the error rides along in the response extensions and
/// [`translate_errors`](crate::translate_errors) replaces the response with
/// the translated one.
///
/// Without the middleware installed the placeholder is a bare
/// `500 {"message": "Internal Server Error"}`, which leaks nothing.
#[derive(Debug)]
pub struct HandlerError(anyhow::Error);

impl HandlerError {
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self(error.into())
    }

    pub const fn inner(&self) -> &anyhow::Error {
        &self.0
    }

    pub fn into_inner(self) -> anyhow::Error {
        self.0
    }
}

impl<E> From<E> for HandlerError
where
    E: Into<anyhow::Error>,
{
    fn from(error: E) -> Self {
        Self(error.into())
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = ErrorBody::new(status.canonical_reason().unwrap_or("Internal Server Error"));

        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(PendingError(Arc::new(self.0)));
        response
    }
}

/// Handler error waiting for the translation middleware
#[derive(Debug, Clone)]
pub(crate) struct PendingError(pub(crate) Arc<anyhow::Error>);
