use relposts_core::config::RelatedPostsConfig;
use relposts_core::error::{Error, Result};
use relposts_core::query::{resolve_type_filter, QueryBuilder};
use relposts_core::traits::{ContentStore, IndexProvider};
use relposts_core::types::{AdminNotice, Document, DocumentId, DocumentRef, GatewayMode, PostTypeSelector};

use crate::gateway::SearchGateway;
use crate::refine::refine;

/// Per-call options. Unset fields fall back to the service configuration
/// (`posts_per_page`) or to the source document (`post_type`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedPostsOptions {
    pub posts_per_page: Option<usize>,
    pub post_type: Option<PostTypeSelector>,
}

impl RelatedPostsOptions {
    pub fn new() -> Self { Self::default() }

    pub fn posts_per_page(mut self, n: usize) -> Self { self.posts_per_page = Some(n); self }

    pub fn post_type(mut self, post_type: impl Into<PostTypeSelector>) -> Self { self.post_type = Some(post_type.into()); self }

    fn resolve_posts_per_page(&self, default: usize) -> Result<usize> {
        match self.posts_per_page.unwrap_or(default) {
            0 => Err(Error::InvalidOptions("posts_per_page must be a positive integer".to_string())),
            n => Ok(n),
        }
    }
}

/// Related-content lookup over a content store.
///
/// The retrieval strategy is picked once, in [`RelatedPostsService::initialize`],
/// and stays fixed for the lifetime of the value. Lookups take `&self` and keep
/// no per-call state, so a service can be shared across threads.
pub struct RelatedPostsService<S> {
    store: S,
    gateway: SearchGateway,
    config: RelatedPostsConfig,
    notices: Vec<AdminNotice>,
}

impl<S: ContentStore> RelatedPostsService<S> {
    /// Detects the tenant's search index and settles on a gateway. Missing or
    /// broken indexes select the fallback and raise an operator notice.
    pub fn initialize(store: S, provider: &dyn IndexProvider, config: RelatedPostsConfig) -> Result<Self> {
        config.validate()?;
        let gateway = SearchGateway::detect(provider, &config.tenant);
        Ok(Self::with_gateway(store, gateway, config))
    }

    pub fn with_gateway(store: S, gateway: SearchGateway, config: RelatedPostsConfig) -> Self {
        let mut notices = Vec::new();
        match gateway.mode() {
            GatewayMode::IndexBacked => tracing::info!(tenant = %config.tenant, "related posts using search index"),
            GatewayMode::Fallback => {
                let notice = AdminNotice::IndexNotConfigured;
                tracing::warn!(tenant = %config.tenant, "{}", notice);
                notices.push(notice);
            }
        }
        Self { store, gateway, config, notices }
    }

    pub fn mode(&self) -> GatewayMode { self.gateway.mode() }

    pub fn notices(&self) -> &[AdminNotice] { &self.notices }

    pub fn store(&self) -> &S { &self.store }

    pub fn config(&self) -> &RelatedPostsConfig { &self.config }

    /// Related documents for `post_id`, or for the store's current document
    /// when `post_id` is `None`. Never contains the source document.
    pub fn get_related_posts(&self, post_id: Option<&DocumentId>, options: &RelatedPostsOptions) -> Result<Vec<Document>> {
        let post_id = match post_id {
            Some(id) => id.clone(),
            None => self.store.current_document_id().ok_or(Error::MissingPostId)?,
        };
        let posts_per_page = options.resolve_posts_per_page(self.config.posts_per_page)?;
        let source = self.store.get_document(&post_id)?.ok_or(Error::SourceDocumentNotFound(post_id))?;

        if !self.config.is_enabled_for(&source.post_type) {
            tracing::debug!(id = %source.id, post_type = %source.post_type, "related posts disabled for post type");
            return Ok(vec![]);
        }
        let post_type = options.post_type.clone().unwrap_or_else(|| PostTypeSelector::Type(source.post_type.clone()));
        let known_post_types = self.store.known_post_types()?;

        let related = match &self.gateway {
            SearchGateway::IndexBacked(gateway) => {
                let query = QueryBuilder::new(known_post_types)
                    .with_keywords_per_field(self.config.keywords_per_field)
                    .build(&source.title, &source.body, Some(&post_type), posts_per_page);
                let hits = gateway.query(&query)?;
                refine(self.hydrate(hits)?, &source.id, posts_per_page)
            }
            SearchGateway::Fallback(gateway) => {
                let type_filter = resolve_type_filter(&known_post_types, Some(&post_type));
                gateway.query(&self.store, &source.id, posts_per_page, type_filter)?
            }
        };
        tracing::debug!(id = %source.id, mode = ?self.mode(), results = related.len(), "related posts resolved");
        Ok(related)
    }

    /// Loads hit documents in hit order; ids the store no longer knows are skipped.
    fn hydrate(&self, hits: Vec<DocumentRef>) -> Result<Vec<Document>> {
        let mut documents = Vec::with_capacity(hits.len());
        for hit in hits {
            match self.store.get_document(&hit.id)? {
                Some(doc) => documents.push(doc),
                None => tracing::warn!(id = %hit.id, "search hit missing from content store"),
            }
        }
        Ok(documents)
    }
}
