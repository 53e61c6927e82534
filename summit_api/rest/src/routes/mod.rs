use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiError, ApiOk};

pub mod contact;
pub mod fun;
pub mod health;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
}

fn error(code: StatusCode, error: impl Into<String>) -> Response {
    (code, Json(ApiError::new(error))).into_response()
}

fn ok() -> Response {
    Json(ApiOk { ok: true }).into_response()
}
