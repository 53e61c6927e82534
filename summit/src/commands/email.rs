use anyhow::{ensure, Context};
use clap::Subcommand;
use summit_config::Config;
use summit_email_contracts::{Email, EmailService};
use summit_models::email_address::EmailAddressWithName;

use crate::environment::{types::Email as EmailServiceImpl, Provider, Provides};

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let email_service: Option<EmailServiceImpl> = Provider::new(&config)?.provide();
    let email_service = email_service
        .context("Email delivery is not configured (RESEND_API_KEY, CONTACT_FROM)")?;

    let ok = email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            body: "Email deliverability seems to be working!".into(),
            reply_to: None,
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
