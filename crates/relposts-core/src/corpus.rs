use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{Document, DocumentId, TaxonomyTerm};

/// Loads documents from a directory tree.
///
/// - `*.json`: one serialized [`Document`] per file
/// - `*.txt`: first non-empty line is the title, the rest is the body; the
///   id is the file stem and the parent directory becomes the only term
pub struct CorpusLoader {
    default_post_type: String,
}

impl Default for CorpusLoader {
    fn default() -> Self { Self { default_post_type: "post".to_string() } }
}

impl CorpusLoader {
    pub fn new() -> Self { Self::default() }

    pub fn with_default_post_type(mut self, post_type: impl Into<String>) -> Self {
        self.default_post_type = post_type.into();
        self
    }

    pub fn load_directory(&self, corpus_dir: &Path) -> Result<Vec<Document>> {
        let files = self.list_corpus_files(corpus_dir);
        if files.is_empty() {
            tracing::warn!(dir = %corpus_dir.display(), "no .json or .txt files found");
            return Ok(vec![]);
        }
        let mut documents = Vec::with_capacity(files.len());
        for file_path in &files {
            tracing::debug!(file = %file_path.display(), "loading");
            let doc = match file_path.extension().and_then(|s| s.to_str()) {
                Some("json") => self.read_json(file_path)?,
                _ => self.read_text(file_path, corpus_dir)?,
            };
            documents.push(doc);
        }
        tracing::info!(files = files.len(), dir = %corpus_dir.display(), "corpus loaded");
        Ok(documents)
    }

    fn read_json(&self, file_path: &Path) -> Result<Document> {
        let raw = fs::read_to_string(file_path).map_err(|e| corpus_error(file_path, e))?;
        serde_json::from_str(&raw).map_err(|e| corpus_error(file_path, e))
    }

    fn read_text(&self, file_path: &Path, corpus_dir: &Path) -> Result<Document> {
        let content = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(_) => String::from_utf8_lossy(&fs::read(file_path).map_err(|e| corpus_error(file_path, e))?).to_string(),
        };
        let mut lines = content.lines().skip_while(|l| l.trim().is_empty());
        let title = lines.next().unwrap_or_default().trim().to_string();
        let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();
        Ok(Document {
            id: self.extract_doc_id(file_path),
            title,
            body,
            post_type: self.default_post_type.clone(),
            terms: self.term_from_path(file_path, corpus_dir).into_iter().collect(),
            published: 0,
        })
    }

    fn extract_doc_id(&self, file_path: &Path) -> DocumentId {
        DocumentId::new(file_path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default())
    }

    fn term_from_path(&self, file_path: &Path, corpus_dir: &Path) -> Option<TaxonomyTerm> {
        let relative_path = file_path.strip_prefix(corpus_dir).unwrap_or(file_path);
        let parent = relative_path.parent()?.to_str()?;
        if parent.is_empty() { return None; }
        let name = relative_path.parent()?.file_name()?.to_string_lossy().to_string();
        Some(TaxonomyTerm { id: parent.replace('\\', "/"), name })
    }

    fn list_corpus_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(root).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
            let path = entry.path();
            if matches!(path.extension().and_then(|s| s.to_str()), Some("json" | "txt")) { files.push(path.to_path_buf()); }
        }
        files.sort(); files
    }
}

fn corpus_error(path: &Path, e: impl std::fmt::Display) -> Error {
    Error::Corpus { path: path.display().to_string(), reason: e.to_string() }
}
