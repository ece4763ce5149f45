//! Message composition and delivery.

use std::time::Duration;

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{error, info};

use crate::config::{MailConfig, SesCredentials};
use crate::error::MailError;

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| MailError::InvalidAddress {
            address: address.to_string(),
            detail: e.to_string(),
        })
}

/// A validated mail sender.
///
/// All addresses are parsed when the mailer is built or updated, so
/// [`Mailer::send`] only fails on message or transport errors.
#[derive(Debug, Clone)]
pub struct Mailer {
    smtp_server: String,
    port: u16,
    from: Mailbox,
    to: Mailbox,
    cc: Option<Mailbox>,
    ses: Option<SesCredentials>,
    timeout: Option<Duration>,
}

impl Mailer {
    /// Build a mailer from config.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::InvalidAddress`] if `from`, `to` or `cc` is not a
    /// valid mailbox.
    pub fn new(config: MailConfig) -> Result<Self, MailError> {
        let cc = config.cc.as_deref().map(parse_mailbox).transpose()?;
        Ok(Self {
            from: parse_mailbox(&config.from)?,
            to: parse_mailbox(&config.to)?,
            cc,
            smtp_server: config.smtp_server,
            port: config.port,
            ses: config.ses,
            timeout: config.timeout_secs.map(Duration::from_secs),
        })
    }

    #[must_use]
    pub fn smtp_server(&self) -> &str {
        &self.smtp_server
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub fn from(&self) -> &Mailbox {
        &self.from
    }

    #[must_use]
    pub fn to(&self) -> &Mailbox {
        &self.to
    }

    #[must_use]
    pub fn cc(&self) -> Option<&Mailbox> {
        self.cc.as_ref()
    }

    /// Replace the sender.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::InvalidAddress`]; the sender is left unchanged.
    pub fn set_from(&mut self, address: &str) -> Result<(), MailError> {
        self.from = parse_mailbox(address)?;
        Ok(())
    }

    /// Replace the primary recipient.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::InvalidAddress`]; the recipient is left unchanged.
    pub fn set_to(&mut self, address: &str) -> Result<(), MailError> {
        self.to = parse_mailbox(address)?;
        Ok(())
    }

    /// Replace the Cc recipient.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::InvalidAddress`]; the Cc recipient is left unchanged.
    pub fn set_cc(&mut self, address: &str) -> Result<(), MailError> {
        self.cc = Some(parse_mailbox(address)?);
        Ok(())
    }

    pub fn clear_cc(&mut self) {
        self.cc = None;
    }

    pub fn set_smtp_server(&mut self, smtp_server: impl Into<String>) {
        self.smtp_server = smtp_server.into();
    }

    /// Build the plain-text message without sending it.
    ///
    /// The envelope recipients are the To and Cc mailboxes.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Message`] if the message cannot be assembled.
    pub fn compose(&self, subject: &str, body: &str) -> Result<Message, MailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone());
        if let Some(cc) = &self.cc {
            builder = builder.cc(cc.clone());
        }
        builder
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| MailError::Message {
                detail: e.to_string(),
            })
    }

    /// Send a plain-text mail over SMTP.
    ///
    /// Without SES credentials the session is unauthenticated and
    /// unencrypted. With them, the session must upgrade with STARTTLS and
    /// then logs in with the access key pair.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Message`] if the message cannot be built and
    /// [`MailError::Transport`] if the SMTP session fails.
    pub fn send(&self, subject: &str, body: &str) -> Result<(), MailError> {
        let transport = self.transport()?;
        self.send_with(&transport, subject, body)
    }

    /// Send through an arbitrary transport.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Message`] if the message cannot be built and
    /// [`MailError::Transport`] if `transport` rejects it.
    pub fn send_with<T>(&self, transport: &T, subject: &str, body: &str) -> Result<(), MailError>
    where
        T: Transport,
        T::Error: std::fmt::Display,
    {
        let message = self.compose(subject, body)?;
        let recipients = message.envelope().to().len();

        if let Err(e) = transport.send(&message) {
            error!(
                server = %self.smtp_server,
                port = self.port,
                error = %e,
                "mail delivery failed"
            );
            return Err(MailError::Transport {
                detail: e.to_string(),
            });
        }

        info!(
            server = %self.smtp_server,
            port = self.port,
            recipients,
            ses = self.ses.is_some(),
            "mail sent"
        );
        Ok(())
    }

    fn transport(&self) -> Result<SmtpTransport, MailError> {
        let builder = match &self.ses {
            Some(ses) => SmtpTransport::starttls_relay(&self.smtp_server)
                .map_err(|e| MailError::Transport {
                    detail: e.to_string(),
                })?
                .credentials(Credentials::new(
                    ses.access_key.clone(),
                    ses.secret_key.clone(),
                )),
            None => SmtpTransport::builder_dangerous(self.smtp_server.as_str()),
        };
        Ok(builder.port(self.port).timeout(self.timeout).build())
    }
}
