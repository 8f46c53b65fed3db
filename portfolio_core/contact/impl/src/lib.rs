use std::sync::Arc;

use portfolio_core_contact_contracts::{ContactSendMessageError, ContactService};
use portfolio_email_contracts::{Email, EmailService};
use portfolio_models::{
    contact::{ContactMessage, ContactSubmission},
    email_address::EmailAddress,
};
use tracing::{error, info};

pub const DEFAULT_SENDER: &str = "noreply@portfolio.com";
pub const DEFAULT_RECIPIENT: &str = "your-email@example.com";

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email> {
    email: Email,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Address the notification emails are sent from
    pub sender: Arc<EmailAddress>,
    /// Address of the site owner receiving the notification emails
    pub recipient: Arc<EmailAddress>,
}

impl ContactServiceConfig {
    pub fn new(
        sender: Option<EmailAddress>,
        recipient: Option<EmailAddress>,
    ) -> anyhow::Result<Self> {
        let sender = match sender {
            Some(sender) => sender,
            None => DEFAULT_SENDER.parse()?,
        };
        let recipient = match recipient {
            Some(recipient) => recipient,
            None => DEFAULT_RECIPIENT.parse()?,
        };

        Ok(Self {
            sender: sender.into(),
            recipient: recipient.into(),
        })
    }
}

impl<EmailS> ContactServiceImpl<EmailS> {
    pub fn new(email: EmailS, config: ContactServiceConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactService for ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<(), ContactSendMessageError> {
        let message = submission.validate()?;

        let email = Email {
            sender: (*self.config.sender).clone(),
            recipient: (*self.config.recipient).clone(),
            subject: format!("Portfolio Contact: {}", message.subject),
            body: format_body(&message),
            reply_to: message.author.email.parse().ok(),
        };

        match self.email.send(email).await {
            Ok(true) => {}
            Ok(false) => {
                error!("Failed to send email: message rejected by smtp server");
                return Err(ContactSendMessageError::Send);
            }
            Err(err) => {
                error!("Failed to send email: {err:#}");
                return Err(ContactSendMessageError::Send);
            }
        }

        info!(
            "Contact form submitted successfully from {}",
            message.author.email
        );

        Ok(())
    }
}

fn format_body(message: &ContactMessage) -> String {
    format!(
        "New message from your portfolio website:\n\
         \n\
         Name: {}\n\
         Email: {}\n\
         Subject: {}\n\
         \n\
         Message:\n\
         {}\n\
         \n\
         ---\n\
         This message was sent from your portfolio contact form.",
        message.author.name, message.author.email, message.subject, message.content
    )
}
