//! Plain-text mail through an SMTP relay or Amazon SES.
//!
//! # Key types
//!
//! - [`MailConfig`] -- server, addresses and optional SES credentials (JSON-loadable)
//! - [`Mailer`] -- validated sender; composes and delivers messages
//! - [`MailError`] -- configuration, address, message and transport failures
//!
//! Plain relays get an unauthenticated SMTP session. With SES credentials the
//! session must upgrade with STARTTLS before logging in.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod mailer;

pub use config::{MailConfig, SesCredentials, DEFAULT_SMTP_PORT};
pub use error::MailError;
pub use mailer::Mailer;
