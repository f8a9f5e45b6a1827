//! Domain types shared by the index, the content store and the service.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type TermId = String;

/// Opaque document identity as assigned by the content store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self { Self(s.to_string()) }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self { Self(s) }
}

/// A category/tag-like classification attached to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyTerm {
    pub id: TermId,
    #[serde(default)]
    pub name: String,
}

/// A stored piece of content.
///
/// - `post_type`: content-type tag, e.g. "post" or "page"
/// - `terms`: taxonomy terms in the store's stable order
/// - `published`: unix timestamp, used for "most recent" ordering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub post_type: String,
    #[serde(default)]
    pub terms: Vec<TaxonomyTerm>,
    #[serde(default)]
    pub published: i64,
}

/// A search hit. `score` is engine-specific but higher is always better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub id: DocumentId,
    pub score: f32,
}

/// Requested content-type scope for related results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostTypeSelector {
    All,
    Type(String),
}

impl PostTypeSelector {
    pub const ALL: &'static str = "all";

    /// The concrete type name, or `None` for the `all` sentinel.
    pub fn as_type(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Type(t) => Some(t),
        }
    }
}

impl From<&str> for PostTypeSelector {
    fn from(s: &str) -> Self {
        if s == Self::ALL { Self::All } else { Self::Type(s.to_string()) }
    }
}

impl From<String> for PostTypeSelector {
    fn from(s: String) -> Self { Self::from(s.as_str()) }
}

impl From<PostTypeSelector> for String {
    fn from(s: PostTypeSelector) -> Self {
        match s {
            PostTypeSelector::All => PostTypeSelector::ALL.to_string(),
            PostTypeSelector::Type(t) => t,
        }
    }
}

/// The exact request shape sent to a search index: a free-text query
/// string, an optional exact-match filter on content type, and a size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRequest {
    pub query_string: String,
    pub type_filter: Option<String>,
    pub size: usize,
}

/// Native store query used when no search index is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyQuery {
    pub term: Option<TermId>,
    pub exclude: DocumentId,
    pub post_type: Option<String>,
    pub limit: usize,
}

/// Which retrieval strategy a service instance was initialized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatewayMode {
    IndexBacked,
    Fallback,
}

/// Operator-facing advisories raised during initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminNotice {
    IndexNotConfigured,
}

impl AdminNotice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::IndexNotConfigured => "Related Posts needs a little extra configuration behind the scenes. Please contact support to make it happen.",
        }
    }
}

impl fmt::Display for AdminNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.message()) }
}
