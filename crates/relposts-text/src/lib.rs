//! relposts-text
//!
//! Tantivy-backed search index for posts: schema, index building, keyword
//! search with a content-type filter, and per-tenant index discovery.

pub mod index;
pub mod search;
pub mod tantivy_utils;

pub use index::TantivyIndexer;
pub use search::{TantivyIndexProvider, TantivySearchIndex};
