//! Show a single post by slug

use anyhow::Result;

use crate::helpers::date;
use crate::query;
use crate::Folio;

/// Render a post's detail view to stdout.
///
/// Returns `Ok(false)` when no post has the slug; a missing slug is a
/// normal outcome rendered as a not-found message, never a crash.
pub fn run(folio: &Folio, slug: &str) -> Result<bool> {
    let post = match query::find_by_slug(&folio.store, slug) {
        Ok(post) => post,
        Err(err) if err.is_not_found() => {
            println!("Post not found: {}", slug);
            println!("The post you're looking for doesn't exist.");
            return Ok(false);
        }
        Err(err) => return Err(err.into()),
    };

    println!("{}", post.title);
    println!("{} | {}", post.category, post.read_time);
    println!("{}", date::full_date(&post.date));
    if !post.tags.is_empty() {
        println!("Tags: {}", post.tags.join(", "));
    }
    println!();
    println!("{}", post.description);
    println!();

    if post.is_placeholder() {
        println!("This article is currently being written. Check back soon!");
    } else {
        println!("{}", post.content.trim());
    }

    // Neighbouring posts in authored order, for prev/next navigation
    if let Some(prev) = post.prev(folio.store.all()) {
        println!();
        println!("Previous: {} ({})", prev.title, prev.slug);
    }
    if let Some(next) = post.next(folio.store.all()) {
        println!("Next: {} ({})", next.title, next.slug);
    }

    Ok(true)
}
