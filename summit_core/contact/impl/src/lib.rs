use std::sync::Arc;

use summit_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use summit_email_contracts::{Email, EmailService};
use summit_models::{contact::ContactSubmission, email_address::EmailAddressWithName};
use tracing::{debug, error};

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Email> {
    email: Option<Email>,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone, Default)]
pub struct ContactFeatureConfig {
    /// Mailbox which receives contact form submissions.
    pub recipient: Option<Arc<EmailAddressWithName>>,
}

impl<Email> ContactFeatureServiceImpl<Email> {
    /// `email` is `None` if the email provider has not been configured.
    pub fn new(email: Option<Email>, config: ContactFeatureConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactFeatureService for ContactFeatureServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<(), ContactSendMessageError> {
        if submission.is_spam() {
            debug!(org = %submission.org, "dropping contact submission caught by honeypot");
            return Ok(());
        }

        let (Some(email_service), Some(recipient)) = (&self.email, &self.config.recipient) else {
            error!("Cannot forward contact submission: email service is not configured");
            return Err(ContactSendMessageError::NotConfigured);
        };

        let email = Email {
            recipient: (**recipient).clone(),
            subject: subject(&submission),
            body: body(&submission),
            reply_to: Some(submission.email.into()),
        };

        if !email_service.send(email).await? {
            return Err(ContactSendMessageError::Send);
        }

        Ok(())
    }
}

fn subject(submission: &ContactSubmission) -> String {
    format!(
        "Summit Connect — {} — {}",
        submission.persona, *submission.org
    )
}

fn body(submission: &ContactSubmission) -> String {
    [
        format!("Name: {}", *submission.name),
        format!("Email: {}", submission.email),
        format!("Org: {}", *submission.org),
        format!("Region: {}", *submission.region),
        format!("Persona: {}", submission.persona),
        String::new(),
        "Message:".into(),
        (*submission.message).clone(),
    ]
    .join("\n")
}
