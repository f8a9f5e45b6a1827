use std::collections::HashSet;

use crate::error::Result;
use crate::types::{Document, DocumentId, DocumentRef, IndexRequest, TaxonomyQuery, TaxonomyTerm};

/// A full-text index queried with a keyword string.
pub trait SearchIndex: Send + Sync {
    /// Returns at most `request.size` hits in descending relevance order.
    /// Failures must surface as `Error::IndexUnavailable`.
    fn search(&self, request: &IndexRequest) -> Result<Vec<DocumentRef>>;
}

/// Locates the search index for a tenant (site) key.
pub trait IndexProvider: Send + Sync {
    /// `Ok(None)` when no index has been created for `tenant`.
    fn index_exists(&self, tenant: &str) -> Result<Option<Box<dyn SearchIndex>>>;
}

pub trait ContentStore: Send + Sync {
    fn get_document(&self, id: &DocumentId) -> Result<Option<Document>>;
    fn taxonomy_terms(&self, id: &DocumentId) -> Result<Vec<TaxonomyTerm>>;
    fn query_by_taxonomy_term(&self, query: &TaxonomyQuery) -> Result<Vec<Document>>;
    fn known_post_types(&self) -> Result<HashSet<String>>;

    /// The document the caller is currently looking at, if any.
    fn current_document_id(&self) -> Option<DocumentId> { None }
}

impl<T: ContentStore + ?Sized> ContentStore for std::sync::Arc<T> {
    fn get_document(&self, id: &DocumentId) -> Result<Option<Document>> { (**self).get_document(id) }
    fn taxonomy_terms(&self, id: &DocumentId) -> Result<Vec<TaxonomyTerm>> { (**self).taxonomy_terms(id) }
    fn query_by_taxonomy_term(&self, query: &TaxonomyQuery) -> Result<Vec<Document>> { (**self).query_by_taxonomy_term(query) }
    fn known_post_types(&self) -> Result<HashSet<String>> { (**self).known_post_types() }
    fn current_document_id(&self) -> Option<DocumentId> { (**self).current_document_id() }
}
