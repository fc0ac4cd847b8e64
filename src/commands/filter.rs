//! Filter the post listing by category

use anyhow::Result;

use crate::helpers::date;
use crate::query::{self, Selection, ALL_CATEGORIES};
use crate::Folio;

/// Render the filtered listing for a set of selected categories.
///
/// The selection is built by toggling each requested name in turn, the
/// same way a UI's filter chips behave: naming a category twice
/// deselects it again, and naming "all" clears everything before it.
pub fn run(folio: &Folio, categories: &[String]) -> Result<()> {
    let mut selected = Selection::new();
    for category in categories {
        selected.toggle(category);
    }

    let chips = query::distinct_categories(&folio.store);
    let chip_line: Vec<String> = std::iter::once(ALL_CATEGORIES)
        .chain(chips)
        .map(|name| {
            let active = if name == ALL_CATEGORIES {
                selected.is_empty()
            } else {
                selected.contains(name)
            };
            if active {
                format!("[{}]", name)
            } else {
                name.to_string()
            }
        })
        .collect();
    println!("Categories: {}", chip_line.join(" "));
    println!();

    let posts = query::filter_by_categories(&folio.store, &selected);
    if posts.is_empty() {
        println!("No posts found in the selected categories.");
        return Ok(());
    }

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!(
            "  {} - {} [{}]",
            date::iso_date(&post.date),
            post.title,
            post.category
        );
    }

    Ok(())
}
