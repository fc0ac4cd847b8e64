//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel body for posts that have been announced but not yet written
pub const PLACEHOLDER_CONTENT: &str = "Coming soon...";

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Opaque unique identifier, assigned at authoring time
    pub id: String,

    /// URL-safe unique identifier used for direct lookup
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short summary shown on listing cards
    pub description: String,

    /// HTML body, or [`PLACEHOLDER_CONTENT`] when not yet written
    pub content: String,

    /// Single classification label; every post has exactly one
    pub category: String,

    /// Free-form labels, order-irrelevant
    #[serde(default)]
    pub tags: Vec<String>,

    /// Publication date, used only for display
    pub date: NaiveDate,

    /// Estimated reading time, e.g. "8 min read"
    #[serde(default, rename = "readTime")]
    pub read_time: String,

    /// Cover image path
    #[serde(default)]
    pub image: Option<String>,
}

impl Post {
    /// Whether the body is the "not yet written" sentinel
    pub fn is_placeholder(&self) -> bool {
        self.content.trim() == PLACEHOLDER_CONTENT
    }

    /// Get the previous post in a list
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        if pos > 0 {
            Some(&posts[pos - 1])
        } else {
            None
        }
    }

    /// Get the next post in a list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        if pos < posts.len() - 1 {
            Some(&posts[pos + 1])
        } else {
            None
        }
    }
}

#[cfg(test)]
pub(crate) fn sample(slug: &str, category: &str) -> Post {
    Post {
        id: slug.to_string(),
        slug: slug.to_string(),
        title: slug.to_uppercase(),
        description: String::new(),
        content: "<p>body</p>".to_string(),
        category: category.to_string(),
        tags: Vec::new(),
        date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
        read_time: "5 min read".to_string(),
        image: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_detection() {
        let mut post = sample("draft", "Rust");
        assert!(!post.is_placeholder());

        post.content = "Coming soon...".to_string();
        assert!(post.is_placeholder());

        // Surrounding whitespace still counts as the sentinel
        post.content = "\n      Coming soon...\n    ".to_string();
        assert!(post.is_placeholder());
    }

    #[test]
    fn test_prev_next() {
        let posts = vec![sample("a", "X"), sample("b", "Y"), sample("c", "X")];

        assert!(posts[0].prev(&posts).is_none());
        assert_eq!(posts[1].prev(&posts).unwrap().slug, "a");
        assert_eq!(posts[1].next(&posts).unwrap().slug, "c");
        assert!(posts[2].next(&posts).is_none());
    }
}
