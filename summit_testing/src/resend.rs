use std::{net::IpAddr, sync::Arc};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::info;

pub const SEND_ROUTE: &str = "/emails";

/// Emails addressed to this domain are rejected with `422`.
pub const REJECTED_DOMAIN: &str = "reject.test";

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting resend testing server on {host}:{port}");
    info!("Send endpoint: http://{host}:{port}{SEND_ROUTE}");
    info!("Api key: {api_key:?}");
    info!("Emails to recipients at {REJECTED_DOMAIN} are rejected");

    let outbox = Arc::<ResendOutbox>::default();
    super::serve(router(api_key, outbox), host, port).await
}

pub fn router(api_key: String, outbox: Arc<ResendOutbox>) -> Router {
    Router::new()
        .route(SEND_ROUTE, routing::post(send))
        .with_state(Arc::new(AppState { api_key, outbox }))
}

/// All emails accepted by the fake server.
#[derive(Debug, Default)]
pub struct ResendOutbox {
    emails: Mutex<Vec<ReceivedEmail>>,
}

impl ResendOutbox {
    pub async fn emails(&self) -> Vec<ReceivedEmail> {
        self.emails.lock().await.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub reply_to: Option<String>,
}

struct AppState {
    api_key: String,
    outbox: Arc<ResendOutbox>,
}

#[derive(Serialize)]
struct SendResponse {
    id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    status_code: u16,
    message: &'static str,
    name: &'static str,
}

fn error(status: StatusCode, message: &'static str, name: &'static str) -> Response {
    let body = ErrorResponse {
        status_code: status.as_u16(),
        message,
        name,
    };
    (status, Json(body)).into_response()
}

async fn send(
    state: State<Arc<AppState>>,
    headers: HeaderMap,
    Json(email): Json<ReceivedEmail>,
) -> Response {
    if !super::is_authorized(&headers, &state.api_key) {
        return error(
            StatusCode::UNAUTHORIZED,
            "API key is invalid",
            "validation_error",
        );
    }

    let rejected = email.to.iter().any(|to| {
        to.trim_end_matches('>')
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain == REJECTED_DOMAIN)
    });
    if rejected {
        return error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "The recipient domain is not allowed",
            "validation_error",
        );
    }

    let mut emails = state.outbox.emails.lock().await;
    emails.push(email);
    let id = format!("email-{}", emails.len());

    Json(SendResponse { id }).into_response()
}
