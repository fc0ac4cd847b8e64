//! Content loader - parses the authored JSON dataset into posts
//!
//! The dataset is an ordered JSON array of post records, bundled with
//! the crate at compile time. An alternate dataset can be loaded from
//! disk for the CLI's `--data` flag. Parse failures are load-time
//! fatal; the application should refuse to start on a corrupt dataset.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::Post;

/// The dataset bundled with the crate
const BUNDLED_POSTS: &str = include_str!("../../data/posts.json");

/// Parse an ordered sequence of posts from a JSON string
pub fn posts_from_str(json: &str) -> Result<Vec<Post>> {
    let posts: Vec<Post> = serde_json::from_str(json).context("failed to parse post dataset")?;
    tracing::debug!("parsed {} posts from dataset", posts.len());
    Ok(posts)
}

/// Load a post dataset from a file on disk
pub fn posts_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Post>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {:?}", path))?;
    posts_from_str(&json)
}

/// The post set bundled with the crate, in authored order
pub fn bundled_posts() -> Result<Vec<Post>> {
    posts_from_str(BUNDLED_POSTS)
}
