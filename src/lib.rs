//! folio-rs: an in-memory content engine for a portfolio and blog
//!
//! This crate holds a personal site's content as an immutable,
//! validated in-memory store and exposes a pure query layer on top:
//! category multi-select filtering and slug lookup. The presentation
//! layer (whatever renders the site) calls into the engine and owns
//! all filter state itself.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod profile;
pub mod query;

use anyhow::Result;
use std::path::Path;

pub use content::{ContentStore, Post};
pub use error::StoreError;
pub use query::{Selection, ALL_CATEGORIES};

/// The loaded site: configuration, content store, and profile.
///
/// Built once at startup; everything inside is read-only afterward and
/// may be shared freely across threads.
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// The immutable post collection
    pub store: ContentStore,
    /// Experience, education, projects, and skills
    pub profile: profile::Profile,
}

impl Folio {
    /// Load the site from the datasets bundled with the crate
    pub fn bundled() -> Result<Self> {
        Self::new(None, None)
    }

    /// Load the site, overriding the post dataset and/or configuration
    /// with files on disk. Either falls back to the bundled defaults.
    pub fn new(data: Option<&Path>, config: Option<&Path>) -> Result<Self> {
        let config = match config {
            Some(path) => config::SiteConfig::load(path)?,
            None => config::SiteConfig::default(),
        };

        let posts = match data {
            Some(path) => content::loader::posts_from_path(path)?,
            None => content::loader::bundled_posts()?,
        };
        let store = ContentStore::load(posts)?;

        let profile = profile::Profile::bundled()?;

        Ok(Self {
            config,
            store,
            profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_site_loads() {
        let folio = Folio::bundled().unwrap();
        assert!(!folio.store.is_empty());
        assert!(!query::distinct_categories(&folio.store).is_empty());
    }
}
