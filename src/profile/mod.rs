//! Profile records - experience, education, projects, and skills
//!
//! Display-only data bundled alongside the posts. These records carry
//! no query logic; the presentation layer iterates them as-is.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The dataset bundled with the crate
const BUNDLED_PROFILE: &str = include_str!("../../data/profile.json");

/// An organisation an entry is attached to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organisation {
    pub name: String,
    pub href: String,
}

/// A single work-experience or education entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub organisation: Organisation,
    /// Display date range, e.g. "Jun 2023 - Jan 2025"
    pub date: String,
    pub location: String,
    pub description: String,
}

/// A showcased project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "liveWebsiteHref")]
    pub live_website_href: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A named group of skills, e.g. "Languages"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSection {
    #[serde(rename = "sectionName")]
    pub section_name: String,
    pub skills: Vec<String>,
}

/// The author's full profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillSection>,
}

impl Profile {
    /// Parse a profile from a JSON string
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse profile dataset")
    }

    /// Load a profile from a file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read profile {:?}", path))?;
        Self::parse(&json)
    }

    /// The profile bundled with the crate
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_PROFILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        let json = r#"{
          "experience": [
            {
              "title": "Software Engineer",
              "organisation": { "name": "Acme", "href": "https://acme.example" },
              "date": "2023 - 2025",
              "location": "Remote",
              "description": "Built things."
            }
          ],
          "projects": [
            {
              "name": "Json Tree",
              "description": "Visualize JSON as a tree.",
              "tags": ["Rust", "CLI"],
              "liveWebsiteHref": "https://jsontree.example"
            }
          ],
          "skills": [
            { "sectionName": "Languages", "skills": ["Rust", "TypeScript"] }
          ]
        }"#;

        let profile = Profile::parse(json).unwrap();
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].organisation.name, "Acme");
        assert!(profile.education.is_empty());
        assert_eq!(profile.projects[0].tags, vec!["Rust", "CLI"]);
        assert_eq!(profile.skills[0].section_name, "Languages");
    }

    #[test]
    fn test_bundled_profile_is_valid() {
        let profile = Profile::bundled().unwrap();
        assert!(!profile.experience.is_empty());
        assert!(!profile.skills.is_empty());
    }
}
