use anyhow::Result;
use std::path::{Path, PathBuf};
use tantivy::{doc, Index, TantivyDocument};

use relposts_core::types::Document;

use crate::search::TantivySearchIndex;
use crate::tantivy_utils::{build_schema, register_tokenizer, tenant_index_dir, PostFields};

const WRITER_HEAP_BYTES: usize = 50_000_000;

/// Builds a tantivy index of posts. Creating an indexer on disk wipes any
/// previous index in that directory.
pub struct TantivyIndexer {
	index: Index,
	fields: PostFields,
}

impl TantivyIndexer {
	pub fn create(index_dir: PathBuf) -> Result<Self> {
		let schema = build_schema();
		if index_dir.exists() { std::fs::remove_dir_all(&index_dir)?; }
		std::fs::create_dir_all(&index_dir)?;
		let index = Index::create_in_dir(&index_dir, schema.clone())?;
		register_tokenizer(&index);
		let fields = PostFields::from_schema(&schema)?;
		Ok(Self { index, fields })
	}

	pub fn create_for_tenant(root: &Path, tenant: &str) -> Result<Self> { Self::create(tenant_index_dir(root, tenant)) }

	pub fn in_ram() -> Result<Self> {
		let schema = build_schema();
		let index = Index::create_in_ram(schema.clone());
		register_tokenizer(&index);
		let fields = PostFields::from_schema(&schema)?;
		Ok(Self { index, fields })
	}

	/// Adds `documents` and commits. Returns the number written.
	pub fn index(&self, documents: &[Document]) -> Result<usize> {
		let mut index_writer = self.index.writer(WRITER_HEAP_BYTES)?;
		for d in documents {
			let tantivy_doc: TantivyDocument = doc!(
				self.fields.id => d.id.to_string(),
				self.fields.title => d.title.clone(),
				self.fields.body => d.body.clone(),
				self.fields.post_type => d.post_type.clone(),
			);
			index_writer.add_document(tantivy_doc)?;
		}
		index_writer.commit()?;
		tracing::info!(documents = documents.len(), "index committed");
		Ok(documents.len())
	}

	pub fn search_index(&self) -> relposts_core::Result<TantivySearchIndex> { TantivySearchIndex::from_index(self.index.clone()) }
}
