//! Translates errors returned by axum handlers into JSON responses
//!
//! Handlers return [`HandlerResult`]. The [`translate_errors`] middleware
//! picks up any error they produce and asks the [`ErrorTranslator`] for the
//! response, applying a fixed first-match-wins order:
//!
//! 1. a registered [`CustomError`](faultline_core::CustomError) type anywhere in the error chain
//! 2. an [`HttpError`](faultline_core::HttpError) anywhere in the error chain
//! 3. anything else becomes `500 {"message": ...}`
//!
//! ```rust,no_run
//! use axum::{Router, routing::get};
//! use faultline_middleware::{ErrorTranslator, HandlerResult};
//!
//! async fn handler() -> HandlerResult<&'static str> {
//!     Err(anyhow::anyhow!("boom").into())
//! }
//!
//! let app: Router = ErrorTranslator::default().wrap(Router::new().route("/", get(handler)));
//! ```

#![allow(clippy::must_use_candidate)]

mod handler_error;
mod middleware;
mod translator;

#[cfg(test)]
mod test_support;

pub use handler_error::{HandlerError, HandlerResult};
pub use middleware::translate_errors;
pub use translator::{Classification, CustomMatch, ErrorTranslator, ErrorTranslatorBuilder, UnclassifiedError};
