//! This module contains the post model, its notification email templates, and
//! the test fixture provider.

mod fixtures;
mod post;

pub mod emails;

pub use fixtures::{FixtureError, FixtureProvider, PostFixtures};
pub use post::Post;
