//! Composed email message

use crate::domain::communication::email_addresses::EmailAddress;

/// A fully constructed, pre-delivery email message.
///
/// Constructed fresh per [`compose`](super::MessageComposer::compose) call and
/// never mutated afterwards. For the notification kinds this crate defines,
/// `from` and `to` always hold exactly one address each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedMessage {
    /// The subject of the email
    pub subject: String,

    /// The sender addresses of the email
    pub from: Vec<EmailAddress>,

    /// The recipient addresses of the email
    pub to: Vec<EmailAddress>,

    /// The rendered body of the email
    pub body: String,
}
