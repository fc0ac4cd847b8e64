//! List site content

use anyhow::Result;

use crate::helpers::date;
use crate::query;
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = folio.store.all();
            println!("Posts ({}):", posts.len());
            for post in posts {
                let marker = if post.is_placeholder() { " (coming soon)" } else { "" };
                println!(
                    "  {} - {} [{}]{}",
                    date::iso_date(&post.date),
                    post.title,
                    post.category,
                    marker
                );
            }
        }
        "category" | "categories" => {
            let categories = query::distinct_categories(&folio.store);
            println!("Categories ({}):", categories.len());
            for name in categories {
                let selected: query::Selection = [name].into_iter().collect();
                let count = query::filter_by_categories(&folio.store, &selected).len();
                println!("  {} ({})", name, count);
            }
        }
        "tag" | "tags" => {
            let mut tags: std::collections::HashMap<&str, usize> =
                std::collections::HashMap::new();
            for post in folio.store.all() {
                for tag in &post.tags {
                    *tags.entry(tag).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        "project" | "projects" => {
            let projects = &folio.profile.projects;
            println!("Projects ({}):", projects.len());
            for project in projects {
                println!("  {} - {}", project.name, project.live_website_href);
            }
        }
        "experience" => {
            let entries = &folio.profile.experience;
            println!("Experience ({}):", entries.len());
            for entry in entries {
                println!(
                    "  {} @ {} ({})",
                    entry.title, entry.organisation.name, entry.date
                );
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category, tag, project, experience",
                content_type
            );
        }
    }

    Ok(())
}
