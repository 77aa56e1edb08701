//! Delivery transport port

use async_trait::async_trait;
use lettre::{address::AddressError, error::Error};
use thiserror::Error as ThisError;

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::composer::ComposedMessage;

/// Errors that can occur while delivering a composed message
#[derive(Debug, ThisError)]
pub enum DeliveryError {
    /// A sender or recipient address was rejected by the transport
    #[error("invalid sender or recipient address")]
    InvalidAddress,

    /// An error occurred while sending the email
    #[error("an error occurred while sending the email")]
    SendError,

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for DeliveryError {
    fn from(err: anyhow::Error) -> Self {
        DeliveryError::UnknownError(err)
    }
}

impl From<AddressError> for DeliveryError {
    fn from(_err: AddressError) -> Self {
        DeliveryError::InvalidAddress
    }
}

impl From<Error> for DeliveryError {
    fn from(err: Error) -> Self {
        DeliveryError::UnknownError(err.into())
    }
}

/// Downstream collaborator that accepts a [`ComposedMessage`] for sending.
///
/// The composer never calls this itself; it only produces the value a
/// transport consumes.
#[async_trait]
pub trait DeliveryTransport: Clone + Send + Sync + 'static {
    /// Deliver a composed message
    ///
    /// # Arguments
    /// * `message` - The [`ComposedMessage`] to deliver.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn deliver(&self, message: &ComposedMessage) -> Result<(), DeliveryError>;
}

#[cfg(test)]
mock! {
    pub DeliveryTransport {}

    impl Clone for DeliveryTransport {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl DeliveryTransport for DeliveryTransport {
        async fn deliver(&self, message: &ComposedMessage) -> Result<(), DeliveryError>;
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::{
        communication::{
            composer::{MessageComposer, MessageKind},
            email_addresses::EmailAddress,
        },
        posts::Post,
    };

    use super::*;

    #[tokio::test]
    async fn test_composed_message_reaches_the_transport() -> TestResult {
        let composer = MessageComposer::with_default_templates(EmailAddress::new_unchecked(
            "from@example.com",
        ));
        let post = Post::new("MyString", "MyText");
        let message = composer.compose(MessageKind::Created, &post, "steve@apple.com")?;

        let mut transport = MockDeliveryTransport::new();

        transport
            .expect_deliver()
            .times(1)
            .withf(|message| message.subject == "Create")
            .returning(|_| Ok(()));

        transport.deliver(&message).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_delivery_failure_surfaces() -> TestResult {
        let composer = MessageComposer::with_default_templates(EmailAddress::new_unchecked(
            "from@example.com",
        ));
        let post = Post::new("MyString", "MyText");
        let message = composer.compose(MessageKind::Created, &post, "steve@apple.com")?;

        let mut transport = MockDeliveryTransport::new();

        transport
            .expect_deliver()
            .times(1)
            .returning(|_| Err(DeliveryError::SendError));

        let result = transport.deliver(&message).await;

        assert!(matches!(result.unwrap_err(), DeliveryError::SendError));

        Ok(())
    }
}
