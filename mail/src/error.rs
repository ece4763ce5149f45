//! Typed mail errors.

/// Failure while configuring, composing or sending a mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    /// The configuration file could not be read or parsed.
    Config { detail: String },
    /// An address could not be parsed as a mailbox.
    InvalidAddress { address: String, detail: String },
    /// The message could not be built.
    Message { detail: String },
    /// The SMTP session failed (connect, STARTTLS, login or delivery).
    Transport { detail: String },
}

impl std::fmt::Display for MailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config { detail } => write!(f, "mail config error: {detail}"),
            Self::InvalidAddress { address, detail } => {
                write!(f, "invalid address {address:?}: {detail}")
            }
            Self::Message { detail } => write!(f, "cannot build message: {detail}"),
            Self::Transport { detail } => write!(f, "transport error: {detail}"),
        }
    }
}

impl std::error::Error for MailError {}
