//! Query engine - category filtering and slug lookup
//!
//! Every operation here is a pure function over the immutable
//! [`ContentStore`] and caller-supplied parameters. Filter state (the
//! set of selected categories) belongs to the caller and is passed in
//! explicitly on every call; the engine holds no state of its own.

use indexmap::IndexSet;

use crate::content::{ContentStore, Post};
use crate::error::StoreError;

/// Synthetic category shown by the UI ahead of the real ones.
///
/// Never a real post's category: toggling it clears the selection set
/// instead of adding a member named "all".
pub const ALL_CATEGORIES: &str = "all";

/// A caller-owned set of selected category names.
///
/// An empty selection means "no filter". Matching is exact string
/// equality; no case folding is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    categories: IndexSet<String>,
}

impl Selection {
    /// Create an empty selection (show everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a category in the selection.
    ///
    /// Selecting an already-selected category removes it (a symmetric
    /// difference on a single element). Toggling [`ALL_CATEGORIES`]
    /// clears the entire selection regardless of its prior contents.
    pub fn toggle(&mut self, category: &str) {
        if category == ALL_CATEGORIES {
            self.categories.clear();
            return;
        }

        if !self.categories.shift_remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    /// Whether a category is currently selected
    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    /// Whether no categories are selected
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of selected categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Iterate over the selected category names
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Every category appearing in the store, each exactly once, in
/// first-seen order. Does not include the synthetic [`ALL_CATEGORIES`]
/// bucket; that is a presentation concern.
pub fn distinct_categories(store: &ContentStore) -> Vec<&str> {
    let mut seen: IndexSet<&str> = IndexSet::new();
    for post in store.all() {
        seen.insert(post.category.as_str());
    }
    seen.into_iter().collect()
}

/// The subset of posts whose category is in the selection, in store
/// order.
///
/// An empty selection is the identity: it returns every post, matching
/// a UI whose "all" toggle clears the selection rather than filtering.
/// A category name absent from the store yields an empty result, not
/// an error; that models a stale filter chip.
pub fn filter_by_categories<'a>(store: &'a ContentStore, selected: &Selection) -> Vec<&'a Post> {
    if selected.is_empty() {
        return store.all().iter().collect();
    }

    store
        .all()
        .iter()
        .filter(|post| selected.contains(&post.category))
        .collect()
}

/// Look up a single post by slug.
///
/// Semantically identical to [`ContentStore::find_by_slug`]; kept as a
/// separate named operation because the detail view is a distinct use
/// case from listing.
pub fn find_by_slug<'a>(store: &'a ContentStore, slug: &str) -> Result<&'a Post, StoreError> {
    store.find_by_slug(slug)
}
