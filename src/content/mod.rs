//! Content model, store, and dataset loading

pub mod loader;
pub mod post;
pub mod store;

pub use post::{Post, PLACEHOLDER_CONTENT};
pub use store::ContentStore;
