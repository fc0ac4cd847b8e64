//! Site configuration (folio.json)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Site metadata used by the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title shown in page headers
    pub title: String,

    /// Author name
    pub author: String,

    /// One-line site description
    pub description: String,

    /// Canonical site URL
    pub url: String,

    /// Author's GitHub profile URL
    pub github: String,

    /// Site language code
    pub language: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            author: "John Doe".to_string(),
            description: "Personal portfolio and blog".to_string(),
            url: "https://example.com".to_string(),
            github: "https://github.com".to_string(),
            language: "en".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Portfolio");
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "title": "My Site",
            "author": "Test User",
            "url": "https://my.site"
        }"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.title, "My Site");
        assert_eq!(config.author, "Test User");
        // Unspecified fields fall back to defaults
        assert_eq!(config.language, "en");
    }
}
