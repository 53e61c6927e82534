use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use summit_extern_contracts::together::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, TogetherApiService,
};
use summit_models::Sensitive;
use url::Url;

use crate::http::HttpClient;

/// https://docs.together.ai/reference/chat-completions-1
#[derive(Debug, Clone)]
pub struct TogetherApiServiceImpl {
    config: TogetherApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct TogetherApiServiceConfig {
    pub endpoint: Arc<Url>,
    pub api_key: Arc<Sensitive<String>>,
}

impl TogetherApiServiceImpl {
    pub fn new(config: TogetherApiServiceConfig, http: HttpClient) -> Self {
        Self { config, http }
    }
}

impl TogetherApiService for TogetherApiServiceImpl {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> anyhow::Result<ChatCompletionResponse> {
        let response = self
            .http
            .post((*self.config.endpoint).clone())
            .bearer_auth(self.config.api_key.as_str())
            .json(&CompletionRequest::from(&request))
            .send()
            .await
            .context("Failed to send together chat completion request")?;

        let status = response.status();
        let body = response
            .json::<Value>()
            .await
            .context("Failed to deserialize together chat completion response")?;

        if !status.is_success() {
            return Ok(ChatCompletionResponse::Rejected {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let content = body
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(Into::into);

        Ok(ChatCompletionResponse::Completed { content })
    }
}

/// The provider's own message if there is one, otherwise the whole body as
/// compact JSON (`null` included).
fn error_message(body: &Value) -> String {
    body.pointer("/error/message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map_or_else(|| body.to_string(), Into::into)
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct CompletionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a ChatCompletionRequest> for CompletionRequest<'a> {
    fn from(value: &'a ChatCompletionRequest) -> Self {
        Self {
            model: &value.model,
            messages: value.messages.iter().map(Into::into).collect(),
            temperature: value.temperature,
            max_tokens: value.max_tokens,
        }
    }
}

impl<'a> From<&'a ChatMessage> for CompletionMessage<'a> {
    fn from(value: &'a ChatMessage) -> Self {
        Self {
            role: value.role.as_str(),
            content: &value.content,
        }
    }
}
