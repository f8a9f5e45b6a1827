//! Turns a source document into a keyword query for the search index.

use std::collections::HashSet;

use crate::keywords::{extract_keywords, DEFAULT_KEYWORDS_PER_FIELD};
use crate::types::{IndexRequest, PostTypeSelector};

/// A derived, transient search query. `size_hint` is the number of results
/// the caller wants; gateways decide how many to actually request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub keywords: Vec<String>,
    pub type_filter: Option<String>,
    pub size_hint: usize,
}

impl Query {
    /// Keywords joined by single spaces.
    pub fn query_string(&self) -> String { self.keywords.join(" ") }

    pub fn to_index_request(&self, size: usize) -> IndexRequest {
        IndexRequest { query_string: self.query_string(), type_filter: self.type_filter.clone(), size }
    }
}

pub struct QueryBuilder {
    known_post_types: HashSet<String>,
    keywords_per_field: usize,
}

impl QueryBuilder {
    pub fn new(known_post_types: HashSet<String>) -> Self {
        Self { known_post_types, keywords_per_field: DEFAULT_KEYWORDS_PER_FIELD }
    }

    pub fn with_keywords_per_field(mut self, n: usize) -> Self { self.keywords_per_field = n; self }

    pub fn build(&self, title: &str, body: &str, post_type: Option<&PostTypeSelector>, size_hint: usize) -> Query {
        let mut seen = HashSet::new();
        let keywords = extract_keywords(title, self.keywords_per_field)
            .into_iter()
            .chain(extract_keywords(body, self.keywords_per_field))
            .filter(|k| seen.insert(k.clone()))
            .collect();
        Query { keywords, type_filter: self.type_filter(post_type), size_hint }
    }

    /// Unknown types and the `all` sentinel mean "no filter" rather than an error.
    pub fn type_filter(&self, post_type: Option<&PostTypeSelector>) -> Option<String> {
        resolve_type_filter(&self.known_post_types, post_type)
    }
}

pub fn resolve_type_filter(known: &HashSet<String>, post_type: Option<&PostTypeSelector>) -> Option<String> {
    let t = post_type?.as_type()?;
    if known.contains(t) {
        Some(t.to_string())
    } else {
        tracing::debug!(post_type = t, "ignoring unknown post type filter");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> QueryBuilder {
        QueryBuilder::new(["post", "page"].iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn title_keywords_come_first_and_win_duplicates() {
        let q = builder().build("Garden compost basics", "compost heaps need turning weekly", None, 5);
        assert_eq!(q.keywords, vec!["Garden", "compost", "basics", "heaps", "turning", "weekly"]);
        assert_eq!(q.query_string(), "Garden compost basics heaps turning weekly");
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let q = builder().build("Plugins", "plugins", None, 5);
        assert_eq!(q.keywords, vec!["Plugins", "plugins"]);
    }

    #[test]
    fn each_field_is_capped_separately() {
        let q = builder()
            .with_keywords_per_field(2)
            .build("alpha bravo charlie", "delta echos foxtrot", None, 5);
        assert_eq!(q.keywords, vec!["alpha", "bravo", "delta", "echos"]);
    }

    #[test]
    fn type_filter_resolution() {
        let b = builder();
        assert_eq!(b.type_filter(Some(&PostTypeSelector::from("page"))), Some("page".to_string()));
        assert_eq!(b.type_filter(Some(&PostTypeSelector::All)), None);
        assert_eq!(b.type_filter(Some(&PostTypeSelector::from("recipe"))), None);
        assert_eq!(b.type_filter(None), None);
    }

    #[test]
    fn index_request_carries_filter_and_size() {
        let q = builder().build("Compost", "", Some(&PostTypeSelector::from("post")), 3);
        let req = q.to_index_request(4);
        assert_eq!(req.query_string, "Compost");
        assert_eq!(req.type_filter.as_deref(), Some("post"));
        assert_eq!(req.size, 4);
    }
}
