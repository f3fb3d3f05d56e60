//! Mail transport boundary and the SMTP implementation.

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use thiserror::Error;
use vitrine_config::MailConfig;

pub mod template;

#[cfg(test)]
use mockall::automock;

/// Destination for relayed submissions. Hardcoded by design: the contact
/// address is part of the site, not deployment configuration.
pub const CONTACT_RECIPIENT: &str = "bhanuprakashalahari.04@gmail.com";

/// Display name on the `from` mailbox.
pub const FROM_DISPLAY_NAME: &str = "Portfolio Contact";

/// A rendered submission ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// The submitter's address; becomes the reply-to header when it
    /// parses as a mailbox.
    pub reply_to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("smtp transport failure")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("failed to compose message")]
    Compose(#[from] lettre::error::Error),
    #[error("invalid sender address `{address}`")]
    SenderAddress {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },
    #[error("invalid recipient address `{address}`")]
    RecipientAddress {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },
    /// Non-SMTP implementations (stubs, future providers) report
    /// failures through this variant.
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Boundary to the outgoing mail transport.
///
/// `verify` is a preflight check the relay runs before every send; a
/// verification failure aborts the send entirely.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn verify(&self) -> Result<(), MailerError>;
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailerError>;
}

/// SMTP transport over the configured relay account.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn from_config(config: &MailConfig) -> Result<Self, MailerError> {
        let transport =
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
                .credentials(Credentials::new(
                    config.username.clone(),
                    config.password.expose().to_owned(),
                ))
                .build();

        let sender = config.username.parse().map_err(|source| {
            MailerError::SenderAddress {
                address: config.username.clone(),
                source,
            }
        })?;
        let to = CONTACT_RECIPIENT.parse().map_err(|source| {
            MailerError::RecipientAddress {
                address: CONTACT_RECIPIENT.to_owned(),
                source,
            }
        })?;

        Ok(Self {
            transport,
            from: Mailbox::new(Some(FROM_DISPLAY_NAME.to_owned()), sender),
            to,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn verify(&self) -> Result<(), MailerError> {
        let healthy = self.transport.test_connection().await?;
        if !healthy {
            return Err(MailerError::Unavailable(
                "smtp connection test failed".into(),
            ));
        }
        Ok(())
    }

    async fn send(&self, mail: OutgoingMail) -> Result<(), MailerError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(mail.subject);

        // Presence is validated upstream, format is not; an unparseable
        // submitter address loses the reply-to header, not the mail.
        match mail.reply_to.parse::<Mailbox>() {
            Ok(mailbox) => builder = builder.reply_to(mailbox),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unparseable reply-to")
            }
        }

        let message = builder.multipart(MultiPart::alternative_plain_html(
            mail.text_body,
            mail.html_body,
        ))?;

        self.transport.send(message).await?;
        Ok(())
    }
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}
