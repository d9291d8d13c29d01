use std::fmt;

use http::StatusCode;
use serde::{Serialize, Serializer};

/// Transport-level HTTP error
///
/// Raised by routing and extraction layers, or directly by handlers that
/// want a specific status without defining their own error type. The
/// optional internal error is reachable through
/// [`std::error::Error::source`] for logging but is never serialized.
///
/// Serializes as `{"code": <u16>, "message": <string>}`.
#[derive(Debug, Serialize)]
pub struct HttpError {
    #[serde(rename = "code", serialize_with = "serialize_status")]
    status: StatusCode,
    message: String,
    #[serde(skip)]
    internal: Option<anyhow::Error>,
}

impl HttpError {
    /// Create an error with an explicit client-facing message
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            internal: None,
        }
    }

    /// Create an error whose message is the status code's canonical reason
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        Self::new(status, status.canonical_reason().unwrap_or("Unknown Status"))
    }

    /// Attach the underlying cause
    #[must_use]
    pub fn with_internal(mut self, internal: impl Into<anyhow::Error>) -> Self {
        self.internal = Some(internal.into());
        self
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn internal(&self) -> Option<&anyhow::Error> {
        self.internal.as_ref()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code={}, message={}", self.status.as_u16(), self.message)?;
        if let Some(ref internal) = self.internal {
            write!(f, ", internal={internal}")?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.internal.as_ref().map(|internal| {
            let source: &(dyn std::error::Error + 'static) = internal.as_ref();
            source
        })
    }
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}
