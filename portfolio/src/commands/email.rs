use anyhow::ensure;
use clap::Subcommand;
use portfolio_config::Config;
use portfolio_email_contracts::{Email, EmailService};
use portfolio_models::email_address::EmailAddress;
use tracing::info;

use crate::{email, environment};

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test {
        /// Defaults to the configured contact recipient
        recipient: Option<EmailAddress>,
    },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: Option<EmailAddress>) -> anyhow::Result<()> {
    let contact_config = environment::contact_service_config(&config)?;
    let recipient = recipient.unwrap_or_else(|| (*contact_config.recipient).clone());
    let email_service = email::connect(&config.email)?;

    info!("Sending test email to {recipient}");
    let ok = email_service
        .send(Email {
            sender: (*contact_config.sender).clone(),
            recipient,
            subject: "Email Deliverability Test".into(),
            body: "Email deliverability seems to be working!".into(),
            reply_to: None,
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
