//! Shared fixtures for unit tests

use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use faultline_core::CustomError;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde::Serialize;
use thiserror::Error;
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

/// Custom error with deliberately unusual field names
#[derive(Debug, Error, Serialize)]
#[error("{le_message}")]
pub struct DummyError {
    pub le_message: String,
    pub kode_error: u16,
}

impl CustomError for DummyError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kode_error).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Second custom error type for multi-registration tests
#[derive(Debug, Error, Serialize)]
#[error("quota exhausted for {tenant}")]
pub struct QuotaError {
    pub tenant: String,
}

impl CustomError for QuotaError {
    fn status_code(&self) -> StatusCode {
        StatusCode::TOO_MANY_REQUESTS
    }
}

/// Custom error whose JSON serialization always fails
///
/// Sequence keys are rejected by `serde_json` maps.
#[derive(Debug, Error, Serialize)]
#[error("unserializable teapot")]
pub struct UnserializableError {
    pub by_bytes: BTreeMap<Vec<u8>, u8>,
}

impl CustomError for UnserializableError {
    fn status_code(&self) -> StatusCode {
        StatusCode::IM_A_TEAPOT
    }
}

impl UnserializableError {
    pub fn new() -> Self {
        Self {
            by_bytes: BTreeMap::from([(vec![1, 2], 3)]),
        }
    }
}

/// Send a GET request and decode the JSON response body
pub async fn send(app: Router, path: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Log lines captured from a scoped subscriber
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Run `f` with every event at any level written to this buffer
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();

        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl MakeWriter<'_> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&self) -> Self::Writer {
        self.clone()
    }
}
