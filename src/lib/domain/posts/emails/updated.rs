//! Post updated email template

use askama::Template;

use crate::domain::posts::Post;

/// Post updated notification template
#[derive(Debug, Template)]
#[template(path = "emails/posts/updated.html")]
pub struct PostUpdatedTemplate {
    /// Title of the post the notification is about
    pub title: String,

    /// Body text of the post
    pub body: String,
}

impl PostUpdatedTemplate {
    /// Creates a new `PostUpdatedTemplate` from a post
    pub fn new(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            body: post.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_updated_template_greets_and_names_the_post() -> TestResult {
        let post = Post::new("Getting started", "Welcome aboard");

        let rendered = PostUpdatedTemplate::new(&post).render()?;

        assert!(rendered.contains("Hi"));
        assert!(rendered.contains("Getting started"));

        Ok(())
    }
}
