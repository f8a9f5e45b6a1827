//! Configuration loader and path helpers.
//!
//! Uses Figment to merge defaults + `relposts.toml` + `relposts.<env>.toml` +
//! `RELPOSTS_*` env vars. Provides helpers to expand `~` and `${VAR}` and to
//! resolve relative paths against a known base directory.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::keywords::DEFAULT_KEYWORDS_PER_FIELD;

const SECTION: &str = "related_posts";

/// Typed `[related_posts]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedPostsConfig {
    /// Site key used to locate the search index, e.g. the site's host name.
    pub tenant: String,
    /// Directory holding one index per tenant.
    pub index_root: String,
    pub corpus_dir: String,
    /// Post type given to documents that don't declare one (plain-text corpus files).
    pub default_post_type: String,
    pub posts_per_page: usize,
    pub keywords_per_field: usize,
    /// When set, related posts are only produced for these source types.
    pub enabled_post_types: Option<Vec<String>>,
}

impl Default for RelatedPostsConfig {
    fn default() -> Self {
        Self {
            tenant: "localhost".to_string(),
            index_root: "./data/indexes".to_string(),
            corpus_dir: "./data/corpus".to_string(),
            default_post_type: "post".to_string(),
            posts_per_page: 5,
            keywords_per_field: DEFAULT_KEYWORDS_PER_FIELD,
            enabled_post_types: None,
        }
    }
}

impl RelatedPostsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.posts_per_page == 0 {
            return Err(Error::InvalidConfig("posts_per_page must be greater than 0".to_string()));
        }
        if self.keywords_per_field == 0 {
            return Err(Error::InvalidConfig("keywords_per_field must be greater than 0".to_string()));
        }
        if self.tenant.trim().is_empty() {
            return Err(Error::InvalidConfig("tenant must not be empty".to_string()));
        }
        Ok(())
    }

    /// `index_root` expanded; relative values are taken relative to `base`.
    pub fn index_root_path(&self, base: &Path) -> PathBuf { resolve_with_base(base, &self.index_root) }

    pub fn corpus_dir_path(&self, base: &Path) -> PathBuf { resolve_with_base(base, &self.corpus_dir) }

    pub fn is_enabled_for(&self, post_type: &str) -> bool {
        match &self.enabled_post_types {
            Some(types) => types.iter().any(|t| t == post_type),
            None => true,
        }
    }
}

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

impl Config {
    /// Merges built-in defaults, `relposts.toml`, `relposts.<env>.toml` and
    /// `RELPOSTS_*` env vars (`__` separates nesting, e.g.
    /// `RELPOSTS_RELATED_POSTS__TENANT`).
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Self::defaults().merge(Toml::file("relposts.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("relposts.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("relposts.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("relposts.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("RELPOSTS_").split("__"));

        let config = Self { figment, base_dir: PathBuf::new() };
        config.related_posts()?;
        Ok(config)
    }

    /// Loads a single file. Relative paths inside it resolve against the
    /// file's directory.
    pub fn load_file(path: &Path) -> Result<Self> {
        let config = Self {
            figment: Self::defaults().merge(Toml::file(path)).merge(Env::prefixed("RELPOSTS_").split("__")),
            base_dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        config.related_posts()?;
        Ok(config)
    }

    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config = Self { figment: Self::defaults().merge(Toml::string(toml)), base_dir: PathBuf::new() };
        config.related_posts()?;
        Ok(config)
    }

    /// Directory relative config paths are anchored to. Empty (the working
    /// directory) unless loaded with [`Config::load_file`].
    pub fn base_dir(&self) -> &Path { &self.base_dir }

    fn defaults() -> Figment { Figment::from(Serialized::default(SECTION, RelatedPostsConfig::default())) }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{}': {}", key, e)))
    }

    /// Extracts and validates the `[related_posts]` section.
    pub fn related_posts(&self) -> Result<RelatedPostsConfig> {
        let section: RelatedPostsConfig = self.get(SECTION)?;
        section.validate()?;
        Ok(section)
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
