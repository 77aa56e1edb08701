//! Named post fixtures for tests and demos

use std::collections::HashMap;

use thiserror::Error;

#[cfg(test)]
use mockall::mock;

use crate::domain::posts::Post;

/// An error that can occur when resolving a fixture
#[derive(Debug, Error)]
pub enum FixtureError {
    /// No fixture is registered under the requested name
    #[error("no fixture named {name:?}")]
    NotFound {
        /// The name that was looked up
        name: String,
    },

    /// The fixture data could not be parsed
    #[error("could not parse fixture data")]
    InvalidData(#[from] serde_json::Error),
}

/// Supplies named, pre-defined post instances
pub trait FixtureProvider {
    /// Get the fixture registered under `name`
    fn fixture(&self, name: &str) -> Result<Post, FixtureError>;
}

#[cfg(test)]
mock! {
    pub FixtureProvider {}

    impl FixtureProvider for FixtureProvider {
        fn fixture(&self, name: &str) -> Result<Post, FixtureError>;
    }
}

/// In-memory fixture provider keyed by name
#[derive(Clone, Debug, Default)]
pub struct PostFixtures {
    posts: HashMap<String, Post>,
}

impl PostFixtures {
    /// Create an empty fixture set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fixture set seeded with the stock `"one"` and `"two"` posts
    pub fn with_defaults() -> Self {
        let mut fixtures = Self::new();

        fixtures.insert("one", Post::new("MyString", "MyText"));
        fixtures.insert("two", Post::new("MyString", "MyText"));

        fixtures
    }

    /// Parse a fixture set from a JSON map of name to post
    pub fn from_json(raw: &str) -> Result<Self, FixtureError> {
        let posts: HashMap<String, Post> = serde_json::from_str(raw)?;

        Ok(Self { posts })
    }

    /// Register a post under the given name, replacing any previous entry
    pub fn insert(&mut self, name: impl Into<String>, post: Post) {
        self.posts.insert(name.into(), post);
    }
}

impl FixtureProvider for PostFixtures {
    fn fixture(&self, name: &str) -> Result<Post, FixtureError> {
        self.posts
            .get(name)
            .cloned()
            .ok_or_else(|| FixtureError::NotFound {
                name: name.to_string(),
            })
    }
}
