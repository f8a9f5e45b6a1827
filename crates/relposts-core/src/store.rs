//! In-process content store backing the CLI and tests.

use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::traits::ContentStore;
use crate::types::{Document, DocumentId, TaxonomyQuery, TaxonomyTerm};

#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Vec<Document>,
    by_id: HashMap<DocumentId, usize>,
    post_types: HashSet<String>,
    current: Option<DocumentId>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    pub fn from_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        let mut store = Self::new();
        for doc in documents { store.insert(doc); }
        store
    }

    /// Inserts or replaces a document, keeping its original position on replace.
    pub fn insert(&mut self, doc: Document) {
        self.post_types.insert(doc.post_type.clone());
        match self.by_id.get(&doc.id) {
            Some(&pos) => self.documents[pos] = doc,
            None => {
                self.by_id.insert(doc.id.clone(), self.documents.len());
                self.documents.push(doc);
            }
        }
    }

    /// Registers a type that may have no documents yet.
    pub fn register_post_type(&mut self, post_type: impl Into<String>) { self.post_types.insert(post_type.into()); }

    pub fn set_current(&mut self, id: Option<DocumentId>) { self.current = id; }

    pub fn documents(&self) -> &[Document] { &self.documents }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }
}

impl ContentStore for MemoryStore {
    fn get_document(&self, id: &DocumentId) -> Result<Option<Document>> {
        Ok(self.by_id.get(id).map(|&pos| self.documents[pos].clone()))
    }

    fn taxonomy_terms(&self, id: &DocumentId) -> Result<Vec<TaxonomyTerm>> {
        Ok(self.by_id.get(id).map(|&pos| self.documents[pos].terms.clone()).unwrap_or_default())
    }

    fn query_by_taxonomy_term(&self, query: &TaxonomyQuery) -> Result<Vec<Document>> {
        let mut matches: Vec<(usize, &Document)> = self
            .documents
            .iter()
            .enumerate()
            .filter(|(_, d)| d.id != query.exclude)
            .filter(|(_, d)| query.post_type.iter().all(|t| &d.post_type == t))
            .filter(|(_, d)| query.term.iter().all(|term| d.terms.iter().any(|t| &t.id == term)))
            .collect();
        // newest first; insertion order breaks ties
        matches.sort_by(|(ia, a), (ib, b)| b.published.cmp(&a.published).then(ia.cmp(ib)));
        Ok(matches.into_iter().take(query.limit).map(|(_, d)| d.clone()).collect())
    }

    fn known_post_types(&self) -> Result<HashSet<String>> { Ok(self.post_types.clone()) }

    fn current_document_id(&self) -> Option<DocumentId> { self.current.clone() }
}
