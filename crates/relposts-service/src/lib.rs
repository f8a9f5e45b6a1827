//! relposts-service
//!
//! Picks a retrieval strategy at startup (search index or taxonomy fallback)
//! and answers related-posts lookups through it.

pub mod gateway;
pub mod refine;
pub mod service;

pub use gateway::{FallbackGateway, IndexBackedGateway, SearchGateway, OVER_FETCH};
pub use refine::refine;
pub use service::{RelatedPostsOptions, RelatedPostsService};
