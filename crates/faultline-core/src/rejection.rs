//! Conversions from axum extractor rejections
//!
//! Lets handlers take `Result<Json<T>, JsonRejection>` and bubble the
//! failure up as a transport error with the rejection's own status.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};

use crate::HttpError;

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text()).with_internal(rejection)
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text()).with_internal(rejection)
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text()).with_internal(rejection)
    }
}
