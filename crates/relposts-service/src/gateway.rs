//! Retrieval strategies. One is chosen when the service starts and never
//! changes afterwards.

use relposts_core::error::{Error, Result};
use relposts_core::query::Query;
use relposts_core::traits::{ContentStore, IndexProvider, SearchIndex};
use relposts_core::types::{Document, DocumentId, DocumentRef, GatewayMode, TaxonomyQuery};

/// Extra hits requested from the index so that dropping the source document
/// still leaves `size_hint` candidates. Assumes at most one self-match.
pub const OVER_FETCH: usize = 1;

pub struct IndexBackedGateway {
    index: Box<dyn SearchIndex>,
}

impl IndexBackedGateway {
    pub fn new(index: Box<dyn SearchIndex>) -> Self { Self { index } }

    pub fn query(&self, query: &Query) -> Result<Vec<DocumentRef>> {
        let request = query.to_index_request(query.size_hint.saturating_add(OVER_FETCH));
        tracing::debug!(query = %request.query_string, filter = ?request.type_filter, size = request.size, "querying search index");
        self.index.search(&request).map_err(|e| match e {
            Error::IndexUnavailable(_) => e,
            other => Error::IndexUnavailable(other.to_string()),
        })
    }
}

/// Taxonomy-based retrieval through the store's native query. The source
/// document is excluded by the store query itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackGateway;

impl FallbackGateway {
    pub fn query<S: ContentStore + ?Sized>(
        &self,
        store: &S,
        post_id: &DocumentId,
        posts_per_page: usize,
        post_type: Option<String>,
    ) -> Result<Vec<Document>> {
        let term = store.taxonomy_terms(post_id)?.into_iter().next().map(|t| t.id);
        tracing::debug!(%post_id, term = ?term, posts_per_page, "querying store by taxonomy term");
        store.query_by_taxonomy_term(&TaxonomyQuery { term, exclude: post_id.clone(), post_type, limit: posts_per_page })
    }
}

pub enum SearchGateway {
    IndexBacked(IndexBackedGateway),
    Fallback(FallbackGateway),
}

impl SearchGateway {
    /// Index-backed when `provider` has an index for `tenant`, otherwise
    /// fallback. A failed lookup counts as "no index".
    pub fn detect(provider: &dyn IndexProvider, tenant: &str) -> Self {
        match provider.index_exists(tenant) {
            Ok(Some(index)) => Self::IndexBacked(IndexBackedGateway::new(index)),
            Ok(None) => Self::Fallback(FallbackGateway),
            Err(e) => {
                tracing::warn!(tenant, error = %e, "search index detection failed");
                Self::Fallback(FallbackGateway)
            }
        }
    }

    pub fn mode(&self) -> GatewayMode {
        match self {
            Self::IndexBacked(_) => GatewayMode::IndexBacked,
            Self::Fallback(_) => GatewayMode::Fallback,
        }
    }
}
