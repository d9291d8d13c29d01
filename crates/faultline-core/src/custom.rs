use http::StatusCode;
use serde::Serialize;

/// Trait for application errors that carry their own HTTP status code
///
/// Implemented by the embedding application, not by this crate. Once the
/// type is registered with the translator, a matching error is written back
/// with [`status_code`](CustomError::status_code) and the value itself
/// serialized as the response body, field for field.
///
/// The human-readable message is the error's `Display` output.
pub trait CustomError: std::error::Error + Serialize + Send + Sync + 'static {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;
}
