use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde_json::Value;
use summit_core_fun_contracts::{FunAskError, FunFeatureService};

use super::error;
use crate::models::fun::{ApiFunAnswer, ApiFunQuestions};

const NULL_BODY_MESSAGE: &str = "Cannot read questions from a null request body";

pub fn router(service: Arc<impl FunFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/fun", routing::post(ask))
        .with_state(service)
}

async fn ask(service: State<Arc<impl FunFeatureService>>, body: Bytes) -> Response {
    let questions = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Null) => {
            tracing::error!("fun request body is null");
            return error(StatusCode::INTERNAL_SERVER_ERROR, NULL_BODY_MESSAGE);
        }
        Ok(value) => ApiFunQuestions::from(value),
        Err(err) => {
            tracing::error!("failed to parse fun request: {err}");
            return error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string());
        }
    };

    match service.ask(questions.into()).await {
        Ok(answer) => Json(ApiFunAnswer { ok: true, answer }).into_response(),
        Err(FunAskError::NoQuestions) => error(StatusCode::BAD_REQUEST, "No questions provided."),
        Err(FunAskError::NotConfigured) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Missing TOGETHER_API_KEY env var",
        ),
        Err(FunAskError::Upstream { status, message }) => error(
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            message,
        ),
        Err(FunAskError::Other(err)) => {
            tracing::error!("failed to answer fun questions: {err:#}");
            error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}
