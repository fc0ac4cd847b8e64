//! Content store errors

use thiserror::Error;

/// Errors raised while loading or querying the content store.
///
/// Load-time variants are fatal: the store refuses to come up with
/// ambiguous or malformed identifiers. `NotFound` is a normal query
/// outcome that callers branch on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Two posts in the input set share the same slug
    #[error("duplicate slug: {slug}")]
    DuplicateSlug { slug: String },

    /// A slug is not in URL-safe (slugified) form
    #[error("invalid slug: {slug}")]
    InvalidSlug { slug: String },

    /// A post has an empty category
    #[error("post {slug} has an empty category")]
    EmptyCategory { slug: String },

    /// No post matches the requested slug
    #[error("no post found for slug: {slug}")]
    NotFound { slug: String },
}

impl StoreError {
    /// Whether the error is a recoverable query outcome rather than a
    /// load-time failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
