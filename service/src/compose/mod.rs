//! Constituent message composition and delivery.
//!
//! # Architecture
//!
//! - [`Template`] / [`Draft`] - Template text with the recipient filled in
//! - [`OutgoingMessage`] - Encodes a message as a `mailto:` URI or raw RFC 822
//! - [`MessageSender`] - Trait for authorized sending
//! - [`GmailSender`] - Real implementation using the Gmail API
//! - [`mock::MockSender`] - Mock for unit tests (behind `test-utils` feature)
//!
//! When no authorized sender is available, [`deliver`] falls back to a
//! `mailto:` URI for the platform mail client.

mod message;
mod sender;
mod template;

pub use message::OutgoingMessage;
pub use sender::{GmailSender, MessageSender, SendError, DEFAULT_GMAIL_BASE_URL};
pub use template::{default_templates, Draft, Template, RECIPIENT_PLACEHOLDER};

#[cfg(any(test, feature = "test-utils"))]
pub use sender::mock;

use rf_civic::Representative;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("No email address available for this representative.")]
    NoEmailAddress,

    #[error("Please authorize Gmail first to send emails.")]
    NotAuthorized,

    #[error("Please fill in both subject and message.")]
    MissingFields,

    #[error("Unknown email template '{0}'.")]
    UnknownTemplate(String),

    #[error("Failed to send email. Please try again or use mailto link.")]
    SendFailed(#[source] SendError),
}

/// How a message left the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Sent through the authorized channel.
    Sent { to: String },
    /// Hand-off URI for the platform mail client.
    MailTo(String),
}

/// Check that `recipient` can be written to and return the address to use.
///
/// # Errors
/// Fails with [`ComposeError::NoEmailAddress`] if the record has no email,
/// or [`ComposeError::NotAuthorized`] if sending is enabled but not yet
/// authorized.
pub fn recipient_address(
    recipient: &Representative,
    email_enabled: bool,
    authorized: bool,
) -> Result<&str, ComposeError> {
    let address = recipient
        .primary_email()
        .ok_or(ComposeError::NoEmailAddress)?;

    if email_enabled && !authorized {
        return Err(ComposeError::NotAuthorized);
    }

    Ok(address)
}

/// Deliver a message to `recipient`'s first email address.
///
/// With a `sender` the message is sent through it; without one a
/// `mailto:` URI is returned instead.
///
/// # Errors
/// Returns [`ComposeError::MissingFields`] if the trimmed subject or body is
/// empty, [`ComposeError::NoEmailAddress`] if there is no address, and
/// [`ComposeError::SendFailed`] if the authorized send fails.
pub async fn deliver(
    sender: Option<&dyn MessageSender>,
    recipient: &Representative,
    subject: &str,
    body: &str,
) -> Result<Delivery, ComposeError> {
    let subject = subject.trim();
    let body = body.trim();
    if subject.is_empty() || body.is_empty() {
        return Err(ComposeError::MissingFields);
    }

    let to = recipient
        .primary_email()
        .ok_or(ComposeError::NoEmailAddress)?;
    let message = OutgoingMessage::new(to, subject, body);

    let Some(sender) = sender else {
        tracing::info!(to, "no authorized sender, falling back to mailto");
        return Ok(Delivery::MailTo(message.mailto_uri()));
    };

    match sender.send(&message).await {
        Ok(()) => Ok(Delivery::Sent { to: to.to_string() }),
        Err(err) => {
            tracing::error!(to, error = %err, "failed to send message");
            Err(ComposeError::SendFailed(err))
        }
    }
}
