use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::ErrorTranslator;
use crate::handler_error::PendingError;

/// Middleware that translates handler errors into JSON responses
///
/// Runs the inner service, then looks for an error left behind by
/// [`HandlerError`](crate::HandlerError). Responses without one pass through
/// untouched; otherwise the translator's response replaces the placeholder.
///
/// Install with `axum::middleware::from_fn_with_state(Arc::new(translator), translate_errors)`
/// or [`ErrorTranslator::wrap`].
pub async fn translate_errors(
    State(translator): State<Arc<ErrorTranslator>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<PendingError>() {
        Some(PendingError(error)) => translator.translate(error),
        None => response,
    }
}
