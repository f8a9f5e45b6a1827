use std::path::{Path, PathBuf};

use tantivy::schema::{Field, IndexRecordOption, Schema, TextFieldIndexing, TextOptions, STORED, STRING};
use tantivy::tokenizer::{LowerCaser, SimpleTokenizer, StopWordFilter, TextAnalyzer};
use tantivy::Index;

pub const TOKENIZER_NAME: &str = "text_with_stopwords";

#[derive(Debug, Clone, Copy)]
pub struct PostFields {
	pub id: Field,
	pub title: Field,
	pub body: Field,
	pub post_type: Field,
}

impl PostFields {
	pub fn from_schema(schema: &Schema) -> tantivy::Result<Self> {
		Ok(Self {
			id: schema.get_field("id")?,
			title: schema.get_field("title")?,
			body: schema.get_field("body")?,
			post_type: schema.get_field("post_type")?,
		})
	}
}

pub fn build_schema() -> Schema {
	let mut schema_builder = Schema::builder();
	schema_builder.add_text_field("id", STRING | STORED);
	let text_field_indexing = TextFieldIndexing::default().set_tokenizer(TOKENIZER_NAME).set_index_option(IndexRecordOption::WithFreqsAndPositions);
	let text_options = TextOptions::default().set_indexing_options(text_field_indexing);
	schema_builder.add_text_field("title", text_options.clone());
	schema_builder.add_text_field("body", text_options);
	// exact-match filter target, never tokenized
	schema_builder.add_text_field("post_type", STRING | STORED);
	schema_builder.build()
}

pub fn register_tokenizer(index: &Index) {
	let stop_words = vec![
		"a","an","and","are","as","at","be","by","for","from","has","he","in","is","it","its","of","on","that","the","to","was","will","with","or","but","not","this","these","they","them","their","there","then","than","so","if","when","where","why","how","what","which","who","whom","whose","can","could","should","would","may","might","must","shall","do","does","did","have","had","having",
	];
	let tokenizer = TextAnalyzer::builder(SimpleTokenizer::default())
		.filter(LowerCaser)
		.filter(StopWordFilter::remove(stop_words.into_iter().map(|s| s.to_string())))
		.build();
	index.tokenizers().register(TOKENIZER_NAME, tokenizer);
}

/// Directory holding `tenant`'s index. Characters outside `[A-Za-z0-9._-]`
/// are replaced so a tenant key can never escape `root`.
pub fn tenant_index_dir(root: &Path, tenant: &str) -> PathBuf {
	let safe: String = tenant.chars().map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' }).collect();
	let safe = if safe.is_empty() || safe.chars().all(|c| c == '.') { format!("_{safe}") } else { safe };
	root.join(safe)
}
