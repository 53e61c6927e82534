use std::{net::IpAddr, sync::Arc};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

pub const CHAT_COMPLETIONS_ROUTE: &str = "/v1/chat/completions";

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting together testing server on {host}:{port}");
    info!("Chat completions endpoint: http://{host}:{port}{CHAT_COMPLETIONS_ROUTE}");
    info!("Api key: {api_key:?}");
    info!(
        "The last user message is echoed back. Messages containing \"rate-limit\", \
         \"no-choices\" or \"not-json\" trigger the corresponding failure."
    );

    super::serve(router(api_key), host, port).await
}

pub fn router(api_key: String) -> Router {
    Router::new()
        .route(CHAT_COMPLETIONS_ROUTE, routing::post(chat_completions))
        .with_state(api_key.into())
}

#[derive(Deserialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Deserialize)]
struct Message {
    role: String,
    content: String,
}

async fn chat_completions(
    state: State<Arc<str>>,
    headers: HeaderMap,
    Json(request): Json<CompletionRequest>,
) -> Response {
    if !super::is_authorized(&headers, &state) {
        let body = json!({"error": {"message": "Invalid API key provided"}});
        return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
    }

    let prompt = request
        .messages
        .iter()
        .rev()
        .find(|message| message.role == "user")
        .map(|message| message.content.as_str())
        .unwrap_or_default();

    if prompt.contains("rate-limit") {
        let body = json!({"error": {"message": "rate limited"}});
        return (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();
    }

    if prompt.contains("not-json") {
        return (StatusCode::BAD_GATEWAY, "upstream unavailable").into_response();
    }

    if prompt.contains("no-choices") {
        return Json(json!({"model": request.model, "choices": []})).into_response();
    }

    Json(json!({
        "model": request.model,
        "choices": [{"message": {"role": "assistant", "content": format!("  {prompt}  ")}}],
    }))
    .into_response()
}
