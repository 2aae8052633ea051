//! Wire types exchanged with the webmail server.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(pub u64);

impl std::fmt::Display for EmailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three mailboxes the server can list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mailbox {
    /// Received, not archived.
    #[default]
    Inbox,
    /// Sent by the current user.
    Sent,
    /// Received and archived.
    Archive,
}

impl Mailbox {
    /// All mailboxes in navigation order.
    pub const ALL: [Self; 3] = [Self::Inbox, Self::Sent, Self::Archive];

    /// Path segment used by the list endpoint.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Archive => "archive",
        }
    }

    /// Mailbox name with its first letter capitalised.
    #[must_use]
    pub fn title(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

impl std::fmt::Display for Mailbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An email as returned by the list and get endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Server-assigned identifier.
    pub id: EmailId,
    /// Sender address.
    pub sender: String,
    /// Recipient addresses, in the order they were given.
    #[serde(default)]
    pub recipients: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub body: String,
    /// Server-formatted timestamp, displayed as-is.
    pub timestamp: String,
    /// Whether the current user has opened it.
    #[serde(default)]
    pub read: bool,
    /// Whether it has been moved to the archive.
    #[serde(default)]
    pub archived: bool,
}

/// Partial update merged into a stored email.
///
/// Only fields that are `Some` are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EmailUpdate {
    /// New read flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    /// New archived flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl EmailUpdate {
    /// Update that marks an email as read.
    #[must_use]
    pub const fn mark_read() -> Self {
        Self {
            read: Some(true),
            archived: None,
        }
    }

    /// Update that moves an email into or out of the archive.
    #[must_use]
    pub const fn archived(archived: bool) -> Self {
        Self {
            read: None,
            archived: Some(archived),
        }
    }
}

/// Body of the create endpoint.
///
/// `recipients` is one comma-separated string here, unlike [`Email::recipients`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEmail {
    /// Comma-separated recipient addresses, exactly as typed.
    pub recipients: String,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub body: String,
}

impl NewEmail {
    /// Creates a new outgoing email.
    #[must_use]
    pub fn new(
        recipients: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipients: recipients.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Answer of the create endpoint: an id, a confirmation, or an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CreateResponse {
    /// Identifier of the stored email, when the server reports one.
    #[serde(default)]
    pub id: Option<EmailId>,
    /// Confirmation text.
    #[serde(default)]
    pub message: Option<String>,
    /// Rejection reason (unknown recipient, empty list, ...).
    #[serde(default)]
    pub error: Option<String>,
}

impl CreateResponse {
    /// Returns the rejection reason, if the server refused the email.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Error body returned by the server on failures.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorResponse {
    /// Human-readable reason.
    pub error: String,
}
