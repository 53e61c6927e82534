use std::future::Future;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ResendApiService: Send + Sync + 'static {
    /// Submit an email to the Resend send endpoint.
    ///
    /// Returns an error only if no response could be obtained. A response with
    /// a non-success status is reported as [`ResendSendEmailResponse::Rejected`].
    fn send_email(
        &self,
        email: ResendEmail,
    ) -> impl Future<Output = anyhow::Result<ResendSendEmailResponse>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub reply_to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResendSendEmailResponse {
    Sent { id: String },
    Rejected { status: u16, message: String },
}

#[cfg(feature = "mock")]
impl MockResendApiService {
    pub fn with_send_email(mut self, email: ResendEmail, result: ResendSendEmailResponse) -> Self {
        self.expect_send_email()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
