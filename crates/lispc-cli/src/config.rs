//! Configuration for the `lispc` command.
//!
//! Loads config from:
//! 1. Global: ~/.config/lispc/config.toml
//! 2. Per-project: .lispc/config.toml (overrides global, key by key)
//!
//! Example config.toml:
//! ```toml
//! [compile]
//! debug = false
//! max_depth = 256
//!
//! [log]
//! filter = "warn"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Compilation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompileConfig {
    /// Report intermediate stages on stderr.
    pub debug: bool,
    /// Deepest form nesting accepted by the parser.
    pub max_depth: usize,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            debug: false,
            max_depth: lispc::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing-subscriber` filter directives. `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct LispcConfig {
    pub compile: CompileConfig,
    pub log: LogConfig,
}

impl LispcConfig {
    /// Load configuration for a project rooted at `root`.
    ///
    /// Missing or malformed files are skipped.
    pub fn load(root: &Path) -> Self {
        let mut layers = Vec::new();
        if let Some(global) = Self::global_config_path() {
            layers.push(global);
        }
        layers.push(Self::project_config_path(root));
        Self::load_layers(&layers)
    }

    /// Load a single, explicitly named config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Merge config files in order; later files override earlier ones.
    ///
    /// Each layer must deserialize on its own before it is merged, so a bad
    /// value only discards the file it appears in.
    fn load_layers(paths: &[PathBuf]) -> Self {
        let mut merged = toml::Table::new();
        for path in paths {
            let Some(table) = Self::load_table(path) else {
                continue;
            };
            if let Err(e) = toml::Value::Table(table.clone()).try_into::<LispcConfig>() {
                tracing::warn!(path = %path.display(), error = %e, "skipping invalid config");
                continue;
            }
            merge_tables(&mut merged, table);
        }
        toml::Value::Table(merged).try_into().unwrap_or_default()
    }

    fn project_config_path(root: &Path) -> PathBuf {
        root.join(".lispc").join("config.toml")
    }

    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("lispc").join("config.toml"))
    }

    fn load_table(path: &Path) -> Option<toml::Table> {
        let content = std::fs::read_to_string(path).ok()?;
        content.parse::<toml::Table>().ok()
    }
}

/// Deep-merge `overlay` into `base`; scalar values in `overlay` win.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, incoming);
                } else {
                    base.insert(key, toml::Value::Table(incoming));
                }
            }
            other => {
                base.insert(key, other);
            }
        }
    }
}
