#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! relposts-core
//!
//! Domain types, collaborator traits, configuration, and the keyword/query
//! half of the related-posts pipeline.

pub mod config;
pub mod corpus;
pub mod error;
pub mod keywords;
pub mod query;
pub mod store;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
