//! Configuration types for oilfinder.
//!
//! [`Config::load`] reads `~/.config/oilfinder/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist, then applies `OILFINDER_*`
//! environment overrides (`OILFINDER_DATA__PATH=/srv/data.json`).
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem or the environment (useful in tests).

use crate::suggest::SuggestOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[data]
path = "data.json"

[server]
bind = "127.0.0.1:5000"

[search]
normalize_links = false

[suggest]
limit         = 5
min_query_len = 2

[links]
product_search_url = "https://www.castrolclassic.co.za/search?q="
"#;

const ENV_PREFIX: &str = "OILFINDER";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub links: LinksConfig,
}

/// `[data]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Source-of-truth JSON file. Relative paths resolve against the working
    /// directory.
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf { PathBuf::from("data.json") }

impl Default for DataConfig {
    fn default() -> Self {
        Self { path: default_data_path() }
    }
}

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:5000".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    /// Apply link normalization to bulk search hits, as single-record
    /// retrieval always does. Off by default: hits are returned as stored.
    #[serde(default)]
    pub normalize_links: bool,
}

/// `[suggest]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestConfig {
    #[serde(default = "default_suggest_limit")]
    pub limit: usize,
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

fn default_suggest_limit() -> usize { 5 }
fn default_min_query_len() -> usize { 2 }

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            limit: default_suggest_limit(),
            min_query_len: default_min_query_len(),
        }
    }
}

impl From<&SuggestConfig> for SuggestOptions {
    fn from(cfg: &SuggestConfig) -> Self {
        Self {
            limit: cfg.limit,
            min_query_len: cfg.min_query_len,
        }
    }
}

/// `[links]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LinksConfig {
    /// Prefix for product search links; the encoded oil type is appended.
    #[serde(default = "default_product_search_url")]
    pub product_search_url: String,
}

fn default_product_search_url() -> String {
    "https://www.castrolclassic.co.za/search?q=".to_string()
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            product_search_url: default_product_search_url(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/oilfinder/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_create(&config_path())
    }

    fn load_or_create(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::layered(path, false, environment())
    }

    /// Load from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        anyhow::ensure!(path.exists(), "config file {} does not exist", path.display());
        Self::layered(path, true, environment())
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn layered(path: &Path, required: bool, env: config::Environment) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .add_source(env)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Suggestion engine options from the `[suggest]` section.
    pub fn suggest_options(&self) -> SuggestOptions {
        SuggestOptions::from(&self.suggest)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `OILFINDER_SECTION__KEY` overrides, e.g. `OILFINDER_SUGGEST__LIMIT=10`.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("oilfinder")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
