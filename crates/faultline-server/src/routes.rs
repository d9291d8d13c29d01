use anyhow::Context;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use faultline_core::HttpError;
use faultline_middleware::HandlerResult;
use http::StatusCode;

use crate::error::ApiError;

/// Demo routes, one per translation outcome
pub fn demo_router() -> Router {
    Router::new()
        .route("/ok", get(ok))
        .route("/errors/custom", get(custom))
        .route("/errors/transport", get(transport))
        .route("/errors/wrapped", get(wrapped))
        .route("/errors/generic", get(generic))
        .route("/echo", post(echo))
        .fallback(not_found)
}

async fn ok() -> HandlerResult<Json<&'static str>> {
    Ok(Json("ok"))
}

async fn custom() -> HandlerResult<()> {
    Err(ApiError::new(StatusCode::BAD_REQUEST, "bad field").into())
}

async fn transport() -> HandlerResult<()> {
    let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    Err(HttpError::new(StatusCode::BAD_GATEWAY, "upstream down")
        .with_internal(cause)
        .into())
}

async fn wrapped() -> HandlerResult<()> {
    lookup_account("ghost").context("loading account page")?;
    Ok(())
}

fn lookup_account(name: &str) -> Result<(), ApiError> {
    Err(ApiError::new(StatusCode::NOT_FOUND, format!("account {name} not found")))
}

async fn generic() -> HandlerResult<()> {
    Err(anyhow::anyhow!("boom").into())
}

async fn echo(payload: Result<Json<serde_json::Value>, JsonRejection>) -> HandlerResult<Json<serde_json::Value>> {
    let Json(value) = payload.map_err(HttpError::from)?;
    Ok(Json(value))
}

async fn not_found() -> HandlerResult<()> {
    Err(HttpError::from_status(StatusCode::NOT_FOUND).into())
}

pub async fn method_not_allowed() -> HandlerResult<()> {
    Err(HttpError::from_status(StatusCode::METHOD_NOT_ALLOWED).into())
}
