use std::any::TypeId;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use faultline_core::{CustomError, ErrorBody, HttpError};
use http::StatusCode;

use crate::translate_errors;

/// Response extension carrying an error that matched no known shape
///
/// Only the error's message is written to the client. Outer layers can read
/// the full error from here for diagnostics.
#[derive(Debug, Clone)]
pub struct UnclassifiedError(pub Arc<anyhow::Error>);

/// Outcome of classifying a handler error, in match order
#[derive(Debug)]
pub enum Classification<'a> {
    /// A registered custom error type was found in the chain
    Custom(CustomMatch),
    /// An [`HttpError`] was found in the chain
    Transport(&'a HttpError),
    /// Nothing matched
    Unclassified,
}

/// Registered custom error found in an error chain
#[derive(Debug)]
pub struct CustomMatch {
    pub type_name: &'static str,
    pub status: StatusCode,
    pub message: String,
    pub body: Result<serde_json::Value, serde_json::Error>,
}

#[derive(Clone, Copy)]
struct CustomErrorMatcher {
    type_id: TypeId,
    type_name: &'static str,
    extract: fn(&(dyn StdError + 'static)) -> Option<CustomMatch>,
}

impl CustomErrorMatcher {
    fn of<E: CustomError>() -> Self {
        Self {
            type_id: TypeId::of::<E>(),
            type_name: std::any::type_name::<E>(),
            extract: extract_custom::<E>,
        }
    }
}

impl fmt::Debug for CustomErrorMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

fn extract_custom<E: CustomError>(error: &(dyn StdError + 'static)) -> Option<CustomMatch> {
    let custom = error.downcast_ref::<E>()?;

    Some(CustomMatch {
        type_name: std::any::type_name::<E>(),
        status: custom.status_code(),
        message: custom.to_string(),
        body: serde_json::to_value(custom),
    })
}

/// Turns handler errors into JSON responses
///
/// Built once before serving and shared read-only across requests.
#[derive(Debug)]
pub struct ErrorTranslator {
    custom_errors: Vec<CustomErrorMatcher>,
    log_unclassified: bool,
}

impl Default for ErrorTranslator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ErrorTranslator {
    pub fn builder() -> ErrorTranslatorBuilder {
        ErrorTranslatorBuilder::default()
    }

    /// Whether any custom error type was registered
    pub fn has_custom_errors(&self) -> bool {
        !self.custom_errors.is_empty()
    }

    /// Classify an error without building a response
    ///
    /// Every registered custom type is looked for across the whole chain
    /// before the chain is searched for an [`HttpError`].
    pub fn classify<'a>(&self, error: &'a anyhow::Error) -> Classification<'a> {
        if let Some(custom) = self.find_custom(error) {
            return Classification::Custom(custom);
        }

        if let Some(http_error) = error.chain().find_map(|cause| cause.downcast_ref::<HttpError>()) {
            return Classification::Transport(http_error);
        }

        Classification::Unclassified
    }

    /// Build the JSON response for a handler error
    pub fn translate(&self, error: Arc<anyhow::Error>) -> Response {
        match self.classify(&error) {
            Classification::Custom(custom) => custom_response(custom),
            Classification::Transport(http_error) => {
                tracing::debug!(status = http_error.status().as_u16(), "translated transport error");
                (http_error.status(), Json(http_error)).into_response()
            }
            Classification::Unclassified => self.unclassified_response(Arc::clone(&error)),
        }
    }

    /// Install the translation middleware around every route of `router`
    pub fn wrap<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.layer(axum::middleware::from_fn_with_state(Arc::new(self), translate_errors))
    }

    fn find_custom(&self, error: &anyhow::Error) -> Option<CustomMatch> {
        if self.custom_errors.is_empty() {
            return None;
        }

        error
            .chain()
            .find_map(|cause| self.custom_errors.iter().find_map(|matcher| (matcher.extract)(cause)))
    }

    fn unclassified_response(&self, error: Arc<anyhow::Error>) -> Response {
        if self.log_unclassified {
            tracing::error!(error = %format!("{error:#}"), "unhandled error returned from handler");
        }

        let body = ErrorBody::new(error.to_string());
        let mut response = (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        response.extensions_mut().insert(UnclassifiedError(error));
        response
    }
}

fn custom_response(custom: CustomMatch) -> Response {
    match custom.body {
        Ok(body) => {
            tracing::debug!(
                status = custom.status.as_u16(),
                error_type = custom.type_name,
                "translated custom error"
            );
            (custom.status, Json(body)).into_response()
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                error_type = custom.type_name,
                "failed to serialize custom error, responding with its message"
            );
            (custom.status, Json(ErrorBody::new(custom.message))).into_response()
        }
    }
}

/// Builder for [`ErrorTranslator`]
#[derive(Debug)]
#[must_use]
pub struct ErrorTranslatorBuilder {
    custom_errors: Vec<CustomErrorMatcher>,
    log_unclassified: bool,
}

impl Default for ErrorTranslatorBuilder {
    fn default() -> Self {
        Self {
            custom_errors: Vec::new(),
            log_unclassified: true,
        }
    }
}

impl ErrorTranslatorBuilder {
    /// Register a custom error type
    ///
    /// Registered types are tried in registration order. Registering the
    /// same type twice has no effect.
    pub fn custom_error<E: CustomError>(mut self) -> Self {
        let matcher = CustomErrorMatcher::of::<E>();
        if !self.custom_errors.iter().any(|m| m.type_id == matcher.type_id) {
            self.custom_errors.push(matcher);
        }
        self
    }

    /// Log unclassified errors with their full chain (on by default)
    pub fn log_unclassified(mut self, enabled: bool) -> Self {
        self.log_unclassified = enabled;
        self
    }

    pub fn build(self) -> ErrorTranslator {
        ErrorTranslator {
            custom_errors: self.custom_errors,
            log_unclassified: self.log_unclassified,
        }
    }
}
