//! Composed message assertion harness

use thiserror::Error;

use crate::domain::communication::email_addresses::EmailAddress;

use super::message::ComposedMessage;

/// A failed expectation, identifying the mismatched field and the expected
/// and actual values
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AssertionFailure {
    /// The subject did not match
    #[error("subject mismatch: expected {expected:?}, got {actual:?}")]
    Subject {
        /// The expected subject
        expected: String,
        /// The subject the message carried
        actual: String,
    },

    /// The sender list did not match
    #[error("from mismatch: expected {expected:?}, got {actual:?}")]
    From {
        /// The expected sender addresses
        expected: Vec<EmailAddress>,
        /// The sender addresses the message carried
        actual: Vec<EmailAddress>,
    },

    /// The recipient list did not match
    #[error("to mismatch: expected {expected:?}, got {actual:?}")]
    To {
        /// The expected recipient addresses
        expected: Vec<EmailAddress>,
        /// The recipient addresses the message carried
        actual: Vec<EmailAddress>,
    },

    /// The body did not contain the expected fragment
    #[error("body does not contain {expected:?}")]
    Body {
        /// The fragment the body was expected to contain
        expected: String,
        /// The full body the message carried
        actual: String,
    },
}

/// Expected field values for a composed message.
///
/// Every field is optional; only the provided expectations are checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpectedMessage {
    subject: Option<String>,
    from: Option<Vec<EmailAddress>>,
    to: Option<Vec<EmailAddress>>,
    body_contains: Option<String>,
}

impl ExpectedMessage {
    /// Create an empty set of expectations
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect the subject to equal `subject`
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Expect the sender list to equal `from`
    pub fn from(mut self, from: impl IntoIterator<Item = EmailAddress>) -> Self {
        self.from = Some(from.into_iter().collect());
        self
    }

    /// Expect the recipient list to equal `to`
    pub fn to(mut self, to: impl IntoIterator<Item = EmailAddress>) -> Self {
        self.to = Some(to.into_iter().collect());
        self
    }

    /// Expect the body to contain `fragment`
    pub fn body_contains(mut self, fragment: impl Into<String>) -> Self {
        self.body_contains = Some(fragment.into());
        self
    }
}

/// Verify a composed message against the provided expectations.
///
/// Fields are checked in order (subject, from, to, body) and the first
/// mismatch is returned. The message is never mutated.
pub fn assert_composed(
    actual: &ComposedMessage,
    expected: &ExpectedMessage,
) -> Result<(), AssertionFailure> {
    if let Some(subject) = &expected.subject {
        if *subject != actual.subject {
            return Err(AssertionFailure::Subject {
                expected: subject.clone(),
                actual: actual.subject.clone(),
            });
        }
    }

    if let Some(from) = &expected.from {
        if *from != actual.from {
            return Err(AssertionFailure::From {
                expected: from.clone(),
                actual: actual.from.clone(),
            });
        }
    }

    if let Some(to) = &expected.to {
        if *to != actual.to {
            return Err(AssertionFailure::To {
                expected: to.clone(),
                actual: actual.to.clone(),
            });
        }
    }

    if let Some(fragment) = &expected.body_contains {
        if !actual.body.contains(fragment) {
            return Err(AssertionFailure::Body {
                expected: fragment.clone(),
                actual: actual.body.clone(),
            });
        }
    }

    Ok(())
}
