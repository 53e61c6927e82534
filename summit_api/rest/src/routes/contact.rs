use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, response::Response, routing, Router};
use serde_json::error::Category;
use summit_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use tracing::debug;

use super::{error, internal_server_error, ok};
use crate::models::contact::ApiContactSubmission;

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(send_message))
        .with_state(service)
}

async fn send_message(service: State<Arc<impl ContactFeatureService>>, body: Bytes) -> Response {
    let submission = match serde_json::from_slice::<ApiContactSubmission>(&body) {
        Ok(submission) => submission,
        Err(err) if err.classify() == Category::Data => {
            debug!("rejecting contact submission: {err}");
            return error(StatusCode::BAD_REQUEST, "Invalid input");
        }
        Err(err) => return internal_server_error(err),
    };

    match service.send_message(submission.into()).await {
        Ok(()) => ok(),
        Err(ContactSendMessageError::NotConfigured) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Email service not configured",
        ),
        Err(ContactSendMessageError::Send) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
        Err(ContactSendMessageError::Other(err)) => internal_server_error(err),
    }
}
