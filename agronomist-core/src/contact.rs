//! Contact form validation
//!
//! Submissions are checked and acknowledged, never stored or sent anywhere.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

/// Fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Form field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Message => "Your Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values posted from the contact form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Result of validating a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ContactOutcome {
    Accepted,
    Incomplete { missing: Vec<ContactField> },
}

impl ContactSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// A field counts as filled when it is non-empty. Whitespace-only input counts.
    pub fn validate(&self) -> ContactOutcome {
        let missing: Vec<_> = ContactField::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect();

        if missing.is_empty() {
            ContactOutcome::Accepted
        } else {
            ContactOutcome::Incomplete { missing }
        }
    }
}

impl ContactOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Feedback shown under the form.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Accepted => SUCCESS_MESSAGE,
            Self::Incomplete { .. } => MISSING_FIELDS_MESSAGE,
        }
    }
}
