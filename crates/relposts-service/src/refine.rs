use relposts_core::types::{Document, DocumentId};

/// Drops every occurrence of `source_id`, then keeps the first `limit`
/// entries in their original order.
pub fn refine(results: Vec<Document>, source_id: &DocumentId, limit: usize) -> Vec<Document> {
    results.into_iter().filter(|d| &d.id != source_id).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(ids: &[&str]) -> Vec<Document> {
        ids.iter()
            .map(|id| Document { id: DocumentId::from(*id), title: String::new(), body: String::new(), post_type: "post".into(), terms: vec![], published: 0 })
            .collect()
    }

    fn ids(docs: &[Document]) -> Vec<&str> { docs.iter().map(|d| d.id.as_str()).collect() }

    #[test]
    fn removes_self_match_and_truncates() {
        let out = refine(docs(&["a", "src", "b", "c"]), &"src".into(), 3);
        assert_eq!(ids(&out), vec!["a", "b", "c"]);
    }

    #[test]
    fn truncates_when_source_absent() {
        let out = refine(docs(&["a", "b", "c", "d"]), &"src".into(), 3);
        assert_eq!(ids(&out), vec!["a", "b", "c"]);
    }

    #[test]
    fn removes_repeated_self_matches() {
        let out = refine(docs(&["src", "a", "src", "b"]), &"src".into(), 5);
        assert_eq!(ids(&out), vec!["a", "b"]);
    }

    #[test]
    fn handles_empty_and_zero_limit() {
        assert!(refine(vec![], &"src".into(), 5).is_empty());
        assert!(refine(docs(&["a"]), &"src".into(), 0).is_empty());
    }

    #[test]
    fn output_never_contains_source_and_respects_limit() {
        let pool = ["src", "a", "b", "src", "c", "d", "src"];
        for len in 0..=pool.len() {
            for limit in 0..6 {
                let out = refine(docs(&pool[..len]), &"src".into(), limit);
                assert!(out.len() <= limit);
                assert!(out.iter().all(|d| d.id.as_str() != "src"));
            }
        }
    }
}
