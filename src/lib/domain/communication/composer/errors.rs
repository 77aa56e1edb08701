//! Composer errors

use thiserror::Error;

use super::MessageKind;

/// Errors that can occur while composing a message
#[derive(Debug, Error)]
pub enum ComposeError {
    /// The recipient address is empty
    #[error("recipient address is empty")]
    InvalidRecipient,

    /// No subject/template mapping is registered for the message kind
    #[error("no subject or template registered for message kind {0:?}")]
    UnknownMessageKind(MessageKind),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<askama::Error> for ComposeError {
    fn from(err: askama::Error) -> Self {
        ComposeError::UnknownError(err.into())
    }
}
