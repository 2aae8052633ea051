//! Draft validation.
//!
//! Checks run before anything is sent to the server. They are purely
//! syntactic: whether a recipient actually exists is for the server to say.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld`, where no part contains whitespace or `@`.
#[allow(clippy::expect_used)] // Literal pattern, exercised by the tests below.
static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("address pattern is valid")
});

/// Validation error for a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A comma-separated recipient token is not an address.
    InvalidAddress(String),
    /// Subject is empty or whitespace.
    EmptySubject,
    /// Body is empty or whitespace.
    EmptyBody,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidAddress(_) => "Please enter a valid email address.",
            Self::EmptySubject | Self::EmptyBody => "Subject and Body cannot be empty",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidAddress(_) => "recipients",
            Self::EmptySubject => "subject",
            Self::EmptyBody => "body",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAddress(address) if !address.is_empty() => {
                write!(f, "{} ({address})", self.message())
            }
            _ => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a draft.
pub type ValidationResult = Result<(), ValidationError>;

/// Returns true if `address` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_PATTERN.is_match(address)
}

/// Validate the three compose fields.
///
/// Recipients are split on `,` and trimmed; every token must be an address,
/// so an empty field or a trailing comma is rejected. Subject and body must
/// be non-blank.
///
/// # Errors
///
/// Returns the first rule that fails, checked in field order.
pub fn validate_draft(recipients: &str, subject: &str, body: &str) -> ValidationResult {
    if let Some(bad) = recipients
        .split(',')
        .map(str::trim)
        .find(|token| !is_valid_address(token))
    {
        return Err(ValidationError::InvalidAddress(bad.to_string()));
    }

    if subject.trim().is_empty() {
        return Err(ValidationError::EmptySubject);
    }

    if body.trim().is_empty() {
        return Err(ValidationError::EmptyBody);
    }

    Ok(())
}
