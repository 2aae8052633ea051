//! Compose draft model.

use mailroom_api::{Email, NewEmail};

use crate::validation::{ValidationResult, validate_draft};

/// Prefix added to reply subjects.
const REPLY_PREFIX: &str = "Re: ";

/// One of the three editable compose fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Comma-separated recipients.
    Recipients,
    /// Subject line.
    Subject,
    /// Message body.
    Body,
}

/// Unsent message held while the compose view is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Comma-separated recipient addresses, as typed.
    pub recipients: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
    /// Whether a create request is in flight.
    pub sending: bool,
}

impl Draft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft replying to `email`.
    ///
    /// The sender becomes the recipient, the subject gains a `Re: ` prefix
    /// unless it already has one, and the original body is quoted.
    #[must_use]
    pub fn reply(email: &Email) -> Self {
        let subject = if email.subject.starts_with(REPLY_PREFIX) {
            email.subject.clone()
        } else {
            format!("{REPLY_PREFIX}{}", email.subject)
        };

        let body = format!(
            "On {} {} Wrote: {}\n",
            email.timestamp, email.sender, email.body
        );

        Self {
            recipients: email.sender.clone(),
            subject,
            body,
            sending: false,
        }
    }

    /// Replaces the value of one field.
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Recipients => self.recipients = value,
            DraftField::Subject => self.subject = value,
            DraftField::Body => self.body = value,
        }
    }

    /// Validates the draft.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> ValidationResult {
        validate_draft(&self.recipients, &self.subject, &self.body)
    }

    /// Converts to the create request body, keeping recipients as typed.
    #[must_use]
    pub fn to_new_email(&self) -> NewEmail {
        NewEmail::new(&self.recipients, &self.subject, &self.body)
    }
}
