//! Outgoing message encodings: `mailto:` URIs and raw RFC 822 text.

use base64::{engine::general_purpose::URL_SAFE, Engine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingMessage {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// URI that opens the platform mail client with this message pre-filled.
    #[must_use]
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }

    /// Minimal RFC 822 message text.
    #[must_use]
    pub fn rfc822(&self) -> String {
        format!("To: {}\r\nSubject: {}\r\n\r\n{}", self.to, self.subject, self.body)
    }

    /// [`Self::rfc822`] encoded as base64url, the form the Gmail API expects
    /// in its `raw` field.
    #[must_use]
    pub fn raw(&self) -> String {
        URL_SAFE.encode(self.rfc822())
    }
}
