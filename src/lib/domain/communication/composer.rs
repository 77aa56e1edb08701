//! Message composition module: builds outbound notification emails and
//! verifies composed messages against expected field values.

mod errors;
mod harness;
mod message;
mod service;

pub use errors::ComposeError;
pub use harness::{assert_composed, AssertionFailure, ExpectedMessage};
pub use message::ComposedMessage;
pub use service::{MessageComposer, MessageKind, MessageTemplate};
