use std::future::Future;

use summit_models::fun::FunQuestions;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FunFeatureService: Send + Sync + 'static {
    /// Ask the language model to answer both questions in a few sentences.
    fn ask(
        &self,
        questions: FunQuestions,
    ) -> impl Future<Output = Result<String, FunAskError>> + Send;
}

#[derive(Debug, Error)]
pub enum FunAskError {
    #[error("No questions provided.")]
    NoQuestions,
    #[error("The language model api is not configured.")]
    NotConfigured,
    #[error("The language model api returned status {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockFunFeatureService {
    pub fn with_ask(
        mut self,
        questions: FunQuestions,
        result: Result<String, FunAskError>,
    ) -> Self {
        self.expect_ask()
            .once()
            .with(mockall::predicate::eq(questions))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
