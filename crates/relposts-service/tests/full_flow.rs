use relposts_core::config::RelatedPostsConfig;
use relposts_core::store::MemoryStore;
use relposts_core::types::{Document, DocumentId, GatewayMode, TaxonomyTerm};
use relposts_service::{RelatedPostsOptions, RelatedPostsService};
use relposts_text::{TantivyIndexProvider, TantivyIndexer};
use tempfile::TempDir;

fn post(id: &str, post_type: &str, title: &str, body: &str, term: &str) -> Document {
    Document {
        id: DocumentId::from(id),
        title: title.to_string(),
        body: body.to_string(),
        post_type: post_type.to_string(),
        terms: vec![TaxonomyTerm { id: term.to_string(), name: term.to_string() }],
        published: 0,
    }
}

fn corpus() -> Vec<Document> {
    vec![
        post("compost", "post", "Compost basics for gardens", "Turning compost heaps weekly keeps them aerobic", "garden"),
        post("worms", "post", "Worm bins", "Worm castings enrich compost and garden soil", "garden"),
        post("mulch", "post", "Mulching garden beds", "Mulch heaps keep garden soil moist through summer", "garden"),
        post("bread", "post", "Sourdough bread", "Feeding a starter and baking loaves", "kitchen"),
        post("about", "page", "About the garden", "Our compost garden started small", "site"),
    ]
}

fn config() -> RelatedPostsConfig {
    RelatedPostsConfig { tenant: "example.com".to_string(), ..RelatedPostsConfig::default() }
}

#[test]
fn tantivy_backed_related_posts() {
    let tmp = TempDir::new().unwrap();
    TantivyIndexer::create_for_tenant(tmp.path(), "example.com").expect("indexer").index(&corpus()).expect("index");

    let provider = TantivyIndexProvider::new(tmp.path());
    let service = RelatedPostsService::initialize(MemoryStore::from_documents(corpus()), &provider, config()).expect("init");
    assert_eq!(service.mode(), GatewayMode::IndexBacked);

    let opts = RelatedPostsOptions::new().posts_per_page(2);
    let related = service.get_related_posts(Some(&"compost".into()), &opts).expect("related");
    assert_eq!(related.len(), 2);
    assert!(related.iter().all(|d| d.id.as_str() != "compost"));
    assert!(related.iter().all(|d| d.post_type == "post"), "filtered to the source type");
    assert!(related.iter().all(|d| d.id.as_str() != "bread"));

    let again = service.get_related_posts(Some(&"compost".into()), &opts).expect("related");
    assert_eq!(related, again);

    let any_type = service
        .get_related_posts(Some(&"compost".into()), &RelatedPostsOptions::new().post_type("all"))
        .expect("related");
    assert!(any_type.iter().any(|d| d.id.as_str() == "about"));
}

#[test]
fn missing_tenant_index_falls_back_to_taxonomy() {
    let tmp = TempDir::new().unwrap();
    let provider = TantivyIndexProvider::new(tmp.path());
    let service = RelatedPostsService::initialize(MemoryStore::from_documents(corpus()), &provider, config()).expect("init");
    assert_eq!(service.mode(), GatewayMode::Fallback);

    let related = service.get_related_posts(Some(&"compost".into()), &RelatedPostsOptions::new()).expect("related");
    let ids: Vec<_> = related.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["worms", "mulch"]);
}
