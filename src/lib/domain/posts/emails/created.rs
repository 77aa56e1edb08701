//! Post created email template

use askama::Template;

use crate::domain::posts::Post;

/// Post created notification template
#[derive(Debug, Template)]
#[template(path = "emails/posts/created.html")]
pub struct PostCreatedTemplate {
    /// Title of the post the notification is about
    pub title: String,

    /// Body text of the post
    pub body: String,
}

impl PostCreatedTemplate {
    /// Creates a new `PostCreatedTemplate` from a post
    pub fn new(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            body: post.body.clone(),
        }
    }
}
