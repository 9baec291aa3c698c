//! Outbound notification over implicit-TLS SMTP.
//!
//! The TLS handshake happens immediately on connection (the submissions
//! port, 465), never as a plaintext upgrade. Account credentials come from
//! the environment-sourced [`SmtpConfig`]; both addresses are validated
//! before a connection is attempted.

use async_trait::async_trait;
use fd_core::config::SmtpConfig;
use fd_core::security::input;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("SMTP credentials are not configured")]
    MissingCredentials,
    #[error("Message build error: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// A single outbound message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// Trait for mail transports, so callers and tests are independent of the
/// SMTP wire.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &Email) -> Result<(), NotifyError>;
}

/// Build the wire message, validating both addresses first.
pub fn build_message(sender: &str, email: &Email) -> Result<Message, NotifyError> {
    input::validate_email(sender).map_err(|e| NotifyError::InvalidAddress(e.to_string()))?;
    input::validate_email(&email.to).map_err(|e| NotifyError::InvalidAddress(e.to_string()))?;

    let from: Mailbox = sender
        .parse()
        .map_err(|e: lettre::address::AddressError| NotifyError::InvalidAddress(e.to_string()))?;
    let to: Mailbox = email
        .to
        .parse()
        .map_err(|e: lettre::address::AddressError| NotifyError::InvalidAddress(e.to_string()))?;

    Ok(Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.clone())
        .body(email.text.clone())?)
}

// ---------------------------------------------------------------------------
// SmtpMailer
// ---------------------------------------------------------------------------

/// Mailer that authenticates to the configured host on port 465 over an
/// implicit-TLS session. One connection per send, no retry.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &Email) -> Result<(), NotifyError> {
        let message = build_message(&self.config.sender, email)?;

        let user = self
            .config
            .user
            .clone()
            .ok_or(NotifyError::MissingCredentials)?;
        let password = self
            .config
            .password
            .clone()
            .ok_or(NotifyError::MissingCredentials)?;

        // `relay` wraps the connection in TLS before any SMTP traffic.
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)?
            .credentials(Credentials::new(user, password))
            .build();

        transport.send(message).await?;
        info!(to = %email.to, "Notification sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// InMemoryMailer (for testing)
// ---------------------------------------------------------------------------

/// A mailer that records messages instead of sending them.
#[derive(Debug, Default)]
pub struct InMemoryMailer {
    sent: Mutex<Vec<Email>>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a snapshot of everything recorded so far.
    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn len(&self) -> usize {
        self.sent.lock().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Mailer for InMemoryMailer {
    async fn send(&self, email: &Email) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(email.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
