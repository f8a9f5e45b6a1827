use std::path::PathBuf;

use clap::Parser;
use relposts_core::config::{expand_path, Config};
use relposts_core::corpus::CorpusLoader;
use relposts_core::store::MemoryStore;
use relposts_core::types::DocumentId;
use relposts_service::{RelatedPostsOptions, RelatedPostsService};
use relposts_text::TantivyIndexProvider;
use tracing_subscriber::EnvFilter;

/// Print posts related to a post in the corpus.
#[derive(Debug, Parser)]
#[command(name = "relposts-related", version, about)]
struct Args {
    /// Id of the source post
    post_id: String,

    /// Config file; defaults to relposts.toml (+ relposts.<RUST_ENV>.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of related posts; defaults to the configured posts_per_page
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Restrict to a post type, or "all"; defaults to the source post's type
    #[arg(short = 't', long)]
    post_type: Option<String>,

    #[arg(long)]
    corpus: Option<String>,

    #[arg(long)]
    index_root: Option<String>,

    #[arg(long, env = "RELPOSTS_TENANT")]
    tenant: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_file(path)?,
        None => Config::load()?,
    };
    let mut settings = config.related_posts()?;
    if let Some(tenant) = args.tenant { settings.tenant = tenant; }
    let corpus_dir = args.corpus.as_deref().map(expand_path).unwrap_or_else(|| settings.corpus_dir_path(config.base_dir()));
    let index_root = args.index_root.as_deref().map(expand_path).unwrap_or_else(|| settings.index_root_path(config.base_dir()));

    let documents = CorpusLoader::new().with_default_post_type(settings.default_post_type.clone()).load_directory(&corpus_dir)?;
    let store = MemoryStore::from_documents(documents);
    let provider = TantivyIndexProvider::new(index_root);
    let service = RelatedPostsService::initialize(store, &provider, settings)?;
    for notice in service.notices() { eprintln!("notice: {}", notice); }

    let mut options = RelatedPostsOptions::new();
    if let Some(n) = args.limit { options = options.posts_per_page(n); }
    if let Some(t) = args.post_type { options = options.post_type(t); }

    let related = service.get_related_posts(Some(&DocumentId::new(args.post_id)), &options)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&related)?);
        return Ok(());
    }
    println!("Related posts ({:?})\n=============", service.mode());
    for (i, doc) in related.iter().enumerate() {
        println!("{:>2}. {} [{}] {}", i + 1, doc.id, doc.post_type, doc.title);
    }
    Ok(())
}
