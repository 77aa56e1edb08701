//! Message composer

use std::collections::HashMap;

use askama::Template;

use crate::domain::{
    communication::email_addresses::EmailAddress,
    posts::{
        emails::{created::PostCreatedTemplate, updated::PostUpdatedTemplate},
        Post,
    },
};

use super::{errors::ComposeError, message::ComposedMessage};

/// Discriminator selecting which subject/template pair to use
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// A post was created
    Created,

    /// A post was updated
    Updated,
}

/// A registered subject/template mapping for one message kind
#[derive(Clone, Debug)]
pub struct MessageTemplate {
    subject: String,
    render: fn(&Post) -> Result<String, askama::Error>,
}

impl MessageTemplate {
    /// Create a new mapping from a fixed subject and a body render function
    pub fn new(subject: impl Into<String>, render: fn(&Post) -> Result<String, askama::Error>) -> Self {
        Self {
            subject: subject.into(),
            render,
        }
    }

    /// The fixed subject line for this message kind
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

fn render_created(post: &Post) -> Result<String, askama::Error> {
    PostCreatedTemplate::new(post).render()
}

fn render_updated(post: &Post) -> Result<String, askama::Error> {
    PostUpdatedTemplate::new(post).render()
}

/// Builds [`ComposedMessage`] values from a post and a recipient address.
///
/// The sender address is threaded in at construction time; `compose` itself
/// performs no delivery, logging, or persistence.
#[derive(Clone, Debug)]
pub struct MessageComposer {
    sender: EmailAddress,
    templates: HashMap<MessageKind, MessageTemplate>,
}

impl MessageComposer {
    /// Create a composer with an empty template registry
    pub fn new(sender: EmailAddress) -> Self {
        Self {
            sender,
            templates: HashMap::new(),
        }
    }

    /// Create a composer with the stock post notification templates registered
    pub fn with_default_templates(sender: EmailAddress) -> Self {
        let mut composer = Self::new(sender);

        composer.register(
            MessageKind::Created,
            MessageTemplate::new("Create", render_created),
        );
        composer.register(
            MessageKind::Updated,
            MessageTemplate::new("Update", render_updated),
        );

        composer
    }

    /// Register a subject/template mapping, replacing any previous one
    pub fn register(&mut self, kind: MessageKind, template: MessageTemplate) {
        self.templates.insert(kind, template);
    }

    /// Compose a notification message about `post` for `recipient`.
    ///
    /// The subject is a pure function of `kind`; the body is rendered from the
    /// kind's template and the post. Identical inputs produce field-wise
    /// identical messages.
    ///
    /// # Errors
    /// - [`ComposeError::InvalidRecipient`] if `recipient` is empty.
    /// - [`ComposeError::UnknownMessageKind`] if `kind` has no registered
    ///   mapping.
    pub fn compose(
        &self,
        kind: MessageKind,
        post: &Post,
        recipient: &str,
    ) -> Result<ComposedMessage, ComposeError> {
        let recipient =
            EmailAddress::new(recipient).map_err(|_| ComposeError::InvalidRecipient)?;

        let template = self
            .templates
            .get(&kind)
            .ok_or(ComposeError::UnknownMessageKind(kind))?;

        let body = (template.render)(post)?;

        Ok(ComposedMessage {
            subject: template.subject.clone(),
            from: vec![self.sender.clone()],
            to: vec![recipient],
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::posts::{FixtureProvider, PostFixtures};

    use super::*;

    fn composer() -> MessageComposer {
        MessageComposer::with_default_templates(EmailAddress::new_unchecked("from@example.com"))
    }

    #[test]
    fn test_compose_create_notification_for_fixture_post() -> TestResult {
        let fixtures = PostFixtures::with_defaults();
        let post = fixtures.fixture("one")?;

        let message = composer().compose(MessageKind::Created, &post, "steve@apple.com")?;

        assert_eq!("Create", message.subject);
        assert_eq!(vec![EmailAddress::new_unchecked("steve@apple.com")], message.to);
        assert_eq!(vec![EmailAddress::new_unchecked("from@example.com")], message.from);
        assert!(message.body.contains("Hi"));

        Ok(())
    }

    #[test]
    fn test_update_notification_subject() -> TestResult {
        let post = Post::new("MyString", "MyText");

        let message = composer().compose(MessageKind::Updated, &post, "steve@apple.com")?;

        assert_eq!("Update", message.subject);
        assert!(message.body.contains("Hi"));

        Ok(())
    }

    #[test]
    fn test_sender_is_independent_of_post_and_recipient() -> TestResult {
        let composer = composer();
        let expected_from = vec![EmailAddress::new_unchecked("from@example.com")];

        let first = composer.compose(
            MessageKind::Created,
            &Post::new("First", "Body one"),
            "steve@apple.com",
        )?;
        let second = composer.compose(
            MessageKind::Created,
            &Post::new("Second", "Body two"),
            "tim@apple.com",
        )?;

        assert_eq!(expected_from, first.from);
        assert_eq!(expected_from, second.from);

        Ok(())
    }

    #[test]
    fn test_compose_is_deterministic() -> TestResult {
        let composer = composer();
        let post = Post::new("MyString", "MyText");

        let first = composer.compose(MessageKind::Created, &post, "steve@apple.com")?;
        let second = composer.compose(MessageKind::Created, &post, "steve@apple.com")?;

        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn test_empty_recipient_is_rejected() {
        let post = Post::new("MyString", "MyText");

        let result = composer().compose(MessageKind::Created, &post, "");

        assert!(matches!(result.unwrap_err(), ComposeError::InvalidRecipient));
    }

    #[test]
    fn test_unregistered_kind_is_rejected() {
        let bare =
            MessageComposer::new(EmailAddress::new_unchecked("from@example.com"));
        let post = Post::new("MyString", "MyText");

        let result = bare.compose(MessageKind::Created, &post, "steve@apple.com");

        assert!(matches!(
            result.unwrap_err(),
            ComposeError::UnknownMessageKind(MessageKind::Created)
        ));
    }

    #[test]
    fn test_compose_with_provider_supplied_post() -> TestResult {
        let mut provider = crate::domain::posts::tests::MockFixtureProvider::new();

        provider
            .expect_fixture()
            .times(1)
            .withf(|name| name == "one")
            .returning(|_| Ok(Post::new("MyString", "MyText")));

        let post = provider.fixture("one")?;
        let message = composer().compose(MessageKind::Created, &post, "steve@apple.com")?;

        assert_eq!("Create", message.subject);

        Ok(())
    }

    #[test]
    fn test_register_installs_a_mapping() -> TestResult {
        let mut bare =
            MessageComposer::new(EmailAddress::new_unchecked("from@example.com"));
        bare.register(
            MessageKind::Updated,
            MessageTemplate::new("Update", super::render_updated),
        );
        let post = Post::new("MyString", "MyText");

        let message = bare.compose(MessageKind::Updated, &post, "steve@apple.com")?;

        assert_eq!("Update", message.subject);

        Ok(())
    }
}
