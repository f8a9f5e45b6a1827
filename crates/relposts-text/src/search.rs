use std::path::{Path, PathBuf};

use tantivy::collector::TopDocs;
use tantivy::query::{BooleanQuery, Occur, Query, QueryParser, TermQuery};
use tantivy::schema::{IndexRecordOption, Value};
use tantivy::{Index, IndexReader, TantivyDocument, Term};

use relposts_core::error::{Error, Result};
use relposts_core::traits::{IndexProvider, SearchIndex};
use relposts_core::types::{DocumentId, DocumentRef, IndexRequest};

use crate::tantivy_utils::{register_tokenizer, tenant_index_dir, PostFields};

/// Read side of a post index. Keyword queries run over title and body; an
/// optional exact `post_type` term is ANDed in.
pub struct TantivySearchIndex {
	index: Index,
	reader: IndexReader,
	fields: PostFields,
}

impl TantivySearchIndex {
	pub fn open(index_dir: &Path) -> Result<Self> {
		let index = Index::open_in_dir(index_dir).map_err(unavailable)?;
		Self::from_index(index)
	}

	pub fn from_index(index: Index) -> Result<Self> {
		register_tokenizer(&index);
		let fields = PostFields::from_schema(&index.schema()).map_err(unavailable)?;
		let reader = index.reader().map_err(unavailable)?;
		Ok(Self { index, reader, fields })
	}

	fn build_query(&self, request: &IndexRequest) -> Box<dyn Query> {
		let parser = QueryParser::for_index(&self.index, vec![self.fields.title, self.fields.body]);
		// keywords are raw document words and may contain query syntax
		let (text_query, errors) = parser.parse_query_lenient(&request.query_string);
		if !errors.is_empty() {
			tracing::debug!(errors = errors.len(), query = %request.query_string, "lenient parse dropped query fragments");
		}
		match &request.type_filter {
			Some(post_type) => {
				let type_query: Box<dyn Query> = Box::new(TermQuery::new(Term::from_field_text(self.fields.post_type, post_type), IndexRecordOption::Basic));
				Box::new(BooleanQuery::new(vec![(Occur::Must, text_query), (Occur::Must, type_query)]))
			}
			None => text_query,
		}
	}
}

impl SearchIndex for TantivySearchIndex {
	fn search(&self, request: &IndexRequest) -> Result<Vec<DocumentRef>> {
		if request.size == 0 || request.query_string.trim().is_empty() { return Ok(vec![]); }
		let searcher = self.reader.searcher();
		// TopDocs preallocates for its limit; never ask for more than the index holds
		let limit = request.size.min(usize::try_from(searcher.num_docs()).unwrap_or(usize::MAX));
		if limit == 0 { return Ok(vec![]); }
		let query = self.build_query(request);
		let top_docs = searcher.search(query.as_ref(), &TopDocs::with_limit(limit)).map_err(unavailable)?;
		let mut hits = Vec::with_capacity(top_docs.len());
		for (score, addr) in top_docs {
			let doc: TantivyDocument = searcher.doc(addr).map_err(unavailable)?;
			if let Some(id) = doc.get_first(self.fields.id).and_then(|v| v.as_str()) {
				hits.push(DocumentRef { id: DocumentId::new(id), score });
			}
		}
		Ok(hits)
	}
}

/// Finds per-tenant indexes under a shared root directory.
pub struct TantivyIndexProvider {
	root: PathBuf,
}

impl TantivyIndexProvider {
	pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }
}

impl IndexProvider for TantivyIndexProvider {
	fn index_exists(&self, tenant: &str) -> Result<Option<Box<dyn SearchIndex>>> {
		let dir = tenant_index_dir(&self.root, tenant);
		if !dir.join("meta.json").is_file() {
			tracing::debug!(tenant, dir = %dir.display(), "no index for tenant");
			return Ok(None);
		}
		let index: Box<dyn SearchIndex> = Box::new(TantivySearchIndex::open(&dir)?);
		Ok(Some(index))
	}
}

fn unavailable(e: impl std::fmt::Display) -> Error { Error::IndexUnavailable(e.to_string()) }
