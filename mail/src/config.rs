//! Mail configuration.
//!
//! Loaded from JSON; unknown keys are rejected.
//!
//! ```json
//! {
//!   "smtp_server": "email-smtp.us-east-1.amazonaws.com",
//!   "port": 587,
//!   "from": "ops@example.com",
//!   "to": "team@example.com",
//!   "cc": "lead@example.com",
//!   "ses": { "access_key": "AKIA...", "secret_key": "..." }
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::MailError;

/// SMTP port used when the config does not name one.
pub const DEFAULT_SMTP_PORT: u16 = 25;

fn default_port() -> u16 {
    DEFAULT_SMTP_PORT
}

/// SES SMTP credentials (IAM access key pair).
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SesCredentials {
    pub access_key: String,
    pub secret_key: String,
}

impl SesCredentials {
    #[must_use]
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl std::fmt::Debug for SesCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SesCredentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Where and as whom to send mail.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MailConfig {
    /// SMTP relay host name or IP.
    pub smtp_server: String,
    /// SMTP port. Defaults to [`DEFAULT_SMTP_PORT`].
    #[serde(default = "default_port")]
    pub port: u16,
    /// Sender mailbox, e.g. `"Ops <ops@example.com>"`.
    pub from: String,
    /// Primary recipient mailbox.
    pub to: String,
    /// Optional carbon-copy mailbox.
    #[serde(default)]
    pub cc: Option<String>,
    /// SES credentials. `None` sends through a plain, unauthenticated session.
    #[serde(default)]
    pub ses: Option<SesCredentials>,
    /// Connection timeout. `None` keeps the transport's default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl MailConfig {
    /// Plain SMTP config on the default port, without Cc.
    #[must_use]
    pub fn new(
        smtp_server: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            smtp_server: smtp_server.into(),
            port: DEFAULT_SMTP_PORT,
            from: from.into(),
            to: to.into(),
            cc: None,
            ses: None,
            timeout_secs: None,
        }
    }

    /// Parse a config from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Config`] if the bytes are not a valid config.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, MailError> {
        serde_json::from_slice(bytes).map_err(|e| MailError::Config {
            detail: e.to_string(),
        })
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, MailError> {
        let bytes = std::fs::read(path).map_err(|e| MailError::Config {
            detail: format!("{}: {e}", path.display()),
        })?;
        Self::from_json_slice(&bytes)
    }
}
