use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use summit_extern_contracts::resend::{ResendApiService, ResendEmail, ResendSendEmailResponse};
use summit_models::Sensitive;
use url::Url;

use crate::http::HttpClient;

/// https://resend.com/docs/api-reference/emails/send-email
#[derive(Debug, Clone)]
pub struct ResendApiServiceImpl {
    config: ResendApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ResendApiServiceConfig {
    pub endpoint: Arc<Url>,
    pub api_key: Arc<Sensitive<String>>,
}

impl ResendApiServiceImpl {
    pub fn new(config: ResendApiServiceConfig, http: HttpClient) -> Self {
        Self { config, http }
    }
}

impl ResendApiService for ResendApiServiceImpl {
    async fn send_email(&self, email: ResendEmail) -> anyhow::Result<ResendSendEmailResponse> {
        let response = self
            .http
            .post((*self.config.endpoint).clone())
            .bearer_auth(self.config.api_key.as_str())
            .json(&SendEmailRequest::from(&email))
            .send()
            .await
            .context("Failed to send resend request")?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<SendEmailResponse>()
                .await
                .map(|response| ResendSendEmailResponse::Sent { id: response.id })
                .context("Failed to deserialize resend response");
        }

        let body = response
            .text()
            .await
            .context("Failed to read resend error response")?;

        Ok(ResendSendEmailResponse::Rejected {
            status: status.as_u16(),
            message: error_message(body),
        })
    }
}

fn error_message(body: String) -> String {
    serde_json::from_str::<ErrorResponse>(&body)
        .map(|error| error.message)
        .unwrap_or(body)
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

impl<'a> From<&'a ResendEmail> for SendEmailRequest<'a> {
    fn from(value: &'a ResendEmail) -> Self {
        Self {
            from: &value.from,
            to: &value.to,
            subject: &value.subject,
            text: &value.text,
            reply_to: value.reply_to.as_deref(),
        }
    }
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}
