//! Authorized message sending.
//!
//! [`GmailSender`] posts messages to the Gmail API using a pre-issued OAuth
//! access token. Sends are one-shot: a failure is reported and never retried.

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;

use super::message::OutgoingMessage;

/// Google APIs root used by [`GmailSender`].
pub const DEFAULT_GMAIL_BASE_URL: &str = "https://gmail.googleapis.com";

#[derive(Debug, Error)]
pub enum SendError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API rejected the message
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },
}

/// Trait for sending a composed message through an authorized channel.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, message: &OutgoingMessage) -> Result<(), SendError>;
}

/// Sends through `users.messages.send` as the authorized user.
pub struct GmailSender {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl GmailSender {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, access_token)
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }
}

#[async_trait]
impl MessageSender for GmailSender {
    async fn send(&self, message: &OutgoingMessage) -> Result<(), SendError> {
        let url = format!(
            "{}/gmail/v1/users/me/messages/send",
            self.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&json!({ "raw": message.raw() }))
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SendError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        tracing::info!(to = %message.to, "message sent via Gmail");
        Ok(())
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{MessageSender, OutgoingMessage, SendError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every message and succeeds unless a failure is queued.
    pub struct MockSender {
        fail_next: Mutex<Option<SendError>>,
        sent: Mutex<Vec<OutgoingMessage>>,
    }

    impl MockSender {
        pub fn new() -> Self {
            Self {
                fail_next: Mutex::new(None),
                sent: Mutex::new(Vec::new()),
            }
        }

        /// Make the next `send` fail with `error`.
        pub fn fail_next(&self, error: SendError) {
            *self.fail_next.lock().unwrap() = Some(error);
        }

        /// Messages passed to `send`, including failed attempts.
        pub fn sent(&self) -> Vec<OutgoingMessage> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Default for MockSender {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl MessageSender for MockSender {
        async fn send(&self, message: &OutgoingMessage) -> Result<(), SendError> {
            self.sent.lock().unwrap().push(message.clone());

            match self.fail_next.lock().unwrap().take() {
                Some(error) => Err(error),
                None => Ok(()),
            }
        }
    }
}
