//! Content store - the immutable, validated collection of posts
//!
//! The store is populated once at startup and never mutated afterward,
//! so it can be shared freely across concurrent readers without locking.

use crate::error::StoreError;

use super::Post;

/// The authoritative, immutable collection of posts.
///
/// Posts keep their authored order; insertion order is the default
/// display order for every listing.
#[derive(Debug, Clone)]
pub struct ContentStore {
    posts: Vec<Post>,
}

impl ContentStore {
    /// Build a store from an authored sequence of posts.
    ///
    /// Validates that every slug is unique and URL-safe and that every
    /// post carries a non-empty category. Fails rather than coming up
    /// with ambiguous identifiers.
    pub fn load(posts: Vec<Post>) -> Result<Self, StoreError> {
        let mut seen: std::collections::HashSet<&str> = std::collections::HashSet::new();

        for post in &posts {
            if !seen.insert(&post.slug) {
                return Err(StoreError::DuplicateSlug {
                    slug: post.slug.clone(),
                });
            }
            if post.slug.is_empty() || slug::slugify(&post.slug) != post.slug {
                return Err(StoreError::InvalidSlug {
                    slug: post.slug.clone(),
                });
            }
            if post.category.is_empty() {
                return Err(StoreError::EmptyCategory {
                    slug: post.slug.clone(),
                });
            }
        }

        tracing::debug!("content store loaded with {} posts", posts.len());
        Ok(Self { posts })
    }

    /// All posts in their authored order
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a post by its slug.
    ///
    /// A missing slug is a normal outcome, not a crash: callers are
    /// expected to branch on `NotFound` and render a not-found state.
    pub fn find_by_slug(&self, slug: &str) -> Result<&Post, StoreError> {
        self.posts
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| StoreError::NotFound {
                slug: slug.to_string(),
            })
    }

    /// Number of posts in the store
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the store holds no posts
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Iterate over posts in authored order
    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::post::sample;

    #[test]
    fn test_load_preserves_order() {
        let store =
            ContentStore::load(vec![sample("a", "X"), sample("b", "Y"), sample("c", "X")]).unwrap();

        let slugs: Vec<_> = store.all().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_load_empty_set() {
        let store = ContentStore::load(Vec::new()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = ContentStore::load(vec![sample("a", "X"), sample("b", "Y"), sample("a", "Z")])
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::DuplicateSlug {
                slug: "a".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_slug_rejected() {
        let mut post = sample("a", "X");
        post.slug = "Not A Slug".to_string();

        let err = ContentStore::load(vec![post]).unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidSlug {
                slug: "Not A Slug".to_string()
            }
        );
    }

    #[test]
    fn test_empty_category_rejected() {
        let err =
            ContentStore::load(vec![sample("a", "X"), sample("b", "")]).unwrap_err();

        assert_eq!(
            err,
            StoreError::EmptyCategory {
                slug: "b".to_string()
            }
        );
    }

    #[test]
    fn test_find_by_slug() {
        let store =
            ContentStore::load(vec![sample("a", "X"), sample("b", "Y"), sample("c", "X")]).unwrap();

        assert_eq!(store.find_by_slug("b").unwrap().category, "Y");

        let err = store.find_by_slug("z").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err,
            StoreError::NotFound {
                slug: "z".to_string()
            }
        );
    }
}
