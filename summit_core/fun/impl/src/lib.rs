use std::sync::Arc;

use summit_core_fun_contracts::{FunAskError, FunFeatureService};
use summit_extern_contracts::together::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatRole, TogetherApiService,
};
use summit_models::fun::FunQuestions;
use tracing::{error, warn};

pub const SYSTEM_PROMPT: &str =
    "You are witty and philosophical. Reply in 2–4 clever, concise sentences.";

/// Answer used when the model returns no text.
pub const FALLBACK_ANSWER: &str = "I’ve got thoughts… but they’re still forming in the stars.";

#[derive(Debug, Clone)]
pub struct FunFeatureServiceImpl<TogetherApi> {
    together_api: Option<TogetherApi>,
    config: FunFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct FunFeatureConfig {
    pub model: Arc<str>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl<TogetherApi> FunFeatureServiceImpl<TogetherApi> {
    /// `together_api` is `None` if no api key has been configured.
    pub fn new(together_api: Option<TogetherApi>, config: FunFeatureConfig) -> Self {
        Self {
            together_api,
            config,
        }
    }
}

impl<TogetherApi> FunFeatureService for FunFeatureServiceImpl<TogetherApi>
where
    TogetherApi: TogetherApiService,
{
    async fn ask(&self, questions: FunQuestions) -> Result<String, FunAskError> {
        if questions.is_empty() {
            return Err(FunAskError::NoQuestions);
        }

        let Some(together_api) = &self.together_api else {
            error!("Cannot answer fun questions: TOGETHER_API_KEY is not set");
            return Err(FunAskError::NotConfigured);
        };

        let request = ChatCompletionRequest {
            model: self.config.model.to_string(),
            messages: vec![
                ChatMessage {
                    role: ChatRole::System,
                    content: SYSTEM_PROMPT.into(),
                },
                ChatMessage {
                    role: ChatRole::User,
                    content: prompt(&questions),
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        match together_api.chat_completion(request).await? {
            ChatCompletionResponse::Completed { content } => Ok(content
                .as_deref()
                .map(str::trim)
                .filter(|answer| !answer.is_empty())
                .unwrap_or(FALLBACK_ANSWER)
                .into()),
            ChatCompletionResponse::Rejected { status, message } => {
                warn!(status, %message, "together rejected chat completion");
                Err(FunAskError::Upstream { status, message })
            }
        }
    }
}

fn prompt(questions: &FunQuestions) -> String {
    format!(
        "Q1: {}\nQ2: {}\nPlease answer both thoughtfully.",
        *questions.universe_question, *questions.idea_awake
    )
}
