use summit_email_contracts::{Email, EmailService};
use summit_extern_contracts::resend::{ResendApiService, ResendEmail, ResendSendEmailResponse};
use summit_models::email_address::EmailAddressWithName;
use tracing::{debug, warn};

/// Sends emails through the Resend api.
#[derive(Debug, Clone)]
pub struct EmailServiceImpl<ResendApi> {
    resend_api: ResendApi,
    from: EmailAddressWithName,
}

impl<ResendApi> EmailServiceImpl<ResendApi> {
    pub fn new(resend_api: ResendApi, from: EmailAddressWithName) -> Self {
        Self { resend_api, from }
    }
}

impl<ResendApi> EmailService for EmailServiceImpl<ResendApi>
where
    ResendApi: ResendApiService,
{
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let email = ResendEmail {
            from: self.from.to_string(),
            to: vec![email.recipient.to_string()],
            subject: email.subject,
            text: email.body,
            reply_to: email.reply_to.map(|x| x.to_string()),
        };

        match self.resend_api.send_email(email).await? {
            ResendSendEmailResponse::Sent { id } => {
                debug!(%id, "email accepted by resend");
                Ok(true)
            }
            ResendSendEmailResponse::Rejected { status, message } => {
                warn!(status, %message, "resend refused to send email");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use summit_extern_contracts::resend::MockResendApiService;
    use summit_utils::assert_matches;

    use super::*;

    fn email() -> Email {
        Email {
            recipient: "sales@example.com".parse().unwrap(),
            subject: "The Subject".into(),
            body: "Hello World!".into(),
            reply_to: Some("max.mustermann@example.com".parse().unwrap()),
        }
    }

    fn resend_email() -> ResendEmail {
        ResendEmail {
            from: "hello@example.com".into(),
            to: vec!["sales@example.com".into()],
            subject: "The Subject".into(),
            text: "Hello World!".into(),
            reply_to: Some("max.mustermann@example.com".into()),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let resend_api = MockResendApiService::new().with_send_email(
            resend_email(),
            ResendSendEmailResponse::Sent {
                id: "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794".into(),
            },
        );

        let sut = EmailServiceImpl::new(resend_api, "hello@example.com".parse().unwrap());

        // Act
        let result = sut.send(email()).await;

        // Assert
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn no_reply_to() {
        // Arrange
        let resend_api = MockResendApiService::new().with_send_email(
            ResendEmail {
                reply_to: None,
                ..resend_email()
            },
            ResendSendEmailResponse::Sent { id: "id".into() },
        );

        let sut = EmailServiceImpl::new(resend_api, "hello@example.com".parse().unwrap());

        // Act
        let result = sut
            .send(Email {
                reply_to: None,
                ..email()
            })
            .await;

        // Assert
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn rejected() {
        // Arrange
        let resend_api = MockResendApiService::new().with_send_email(
            resend_email(),
            ResendSendEmailResponse::Rejected {
                status: 403,
                message: "The domain is not verified".into(),
            },
        );

        let sut = EmailServiceImpl::new(resend_api, "hello@example.com".parse().unwrap());

        // Act
        let result = sut.send(email()).await;

        // Assert
        assert!(!result.unwrap());
    }

    #[tokio::test]
    async fn error() {
        // Arrange
        let mut resend_api = MockResendApiService::new();
        resend_api.expect_send_email().once().return_once(|_| {
            Box::pin(std::future::ready(Err(anyhow::anyhow!(
                "connection refused"
            ))))
        });

        let sut = EmailServiceImpl::new(resend_api, "hello@example.com".parse().unwrap());

        // Act
        let result = sut.send(email()).await;

        // Assert
        assert_matches!(result, Err(_));
    }
}
