//! Error types shared between request handlers and the error translator
//!
//! Handlers raise either an application-defined [`CustomError`], the
//! transport-level [`HttpError`], or any other error. The translator in
//! `faultline-middleware` decides which JSON body each one becomes.

#![allow(clippy::must_use_candidate)]

mod body;
mod custom;
mod http_error;
mod rejection;

pub use body::ErrorBody;
pub use custom::CustomError;
pub use http_error::HttpError;
