use std::future::Future;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TogetherApiService: Send + Sync + 'static {
    /// Request a chat completion.
    ///
    /// Returns an error if the provider could not be reached or did not answer
    /// with JSON. A JSON response with a non-success status is reported as
    /// [`ChatCompletionResponse::Rejected`].
    fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> impl Future<Output = anyhow::Result<ChatCompletionResponse>> + Send;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCompletionResponse {
    /// Content of the first choice, if the provider returned any.
    Completed { content: Option<String> },
    Rejected { status: u16, message: String },
}

#[cfg(feature = "mock")]
impl MockTogetherApiService {
    pub fn with_chat_completion(
        mut self,
        request: ChatCompletionRequest,
        result: ChatCompletionResponse,
    ) -> Self {
        self.expect_chat_completion()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
