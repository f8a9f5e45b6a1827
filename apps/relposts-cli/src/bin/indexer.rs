use std::path::PathBuf;

use clap::Parser;
use relposts_core::config::{expand_path, Config};
use relposts_core::corpus::CorpusLoader;
use relposts_text::tantivy_utils::tenant_index_dir;
use relposts_text::TantivyIndexer;
use tracing_subscriber::EnvFilter;

/// Build (or rebuild) a tenant's related-posts search index from a corpus directory.
#[derive(Debug, Parser)]
#[command(name = "relposts-indexer", version, about)]
struct Args {
    /// Config file; defaults to relposts.toml (+ relposts.<RUST_ENV>.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Corpus directory of .json / .txt posts
    #[arg(long)]
    corpus: Option<String>,

    /// Root directory holding per-tenant indexes
    #[arg(long)]
    index_root: Option<String>,

    /// Tenant (site) key
    #[arg(long, env = "RELPOSTS_TENANT")]
    tenant: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_file(path)?,
        None => Config::load()?,
    };
    let settings = config.related_posts()?;
    let corpus_dir = args.corpus.as_deref().map(expand_path).unwrap_or_else(|| settings.corpus_dir_path(config.base_dir()));
    let index_root = args.index_root.as_deref().map(expand_path).unwrap_or_else(|| settings.index_root_path(config.base_dir()));
    let tenant = args.tenant.unwrap_or(settings.tenant.clone());

    println!("Related posts re-index\n======================");
    println!("Corpus   : {}", corpus_dir.display());
    println!("Index dir: {}", tenant_index_dir(&index_root, &tenant).display());

    let documents = CorpusLoader::new().with_default_post_type(settings.default_post_type.clone()).load_directory(&corpus_dir)?;
    let indexer = TantivyIndexer::create_for_tenant(&index_root, &tenant)?;
    let count = indexer.index(&documents)?;
    println!("Done. Indexed {} posts for {}.", count, tenant);
    Ok(())
}
