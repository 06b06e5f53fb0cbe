use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_NAMESPACE;

pub const CONFIG_FILE_NAME: &str = ".tokenrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Token file, relative to the project root.
    #[serde(default = "default_tokens_file")]
    pub tokens_file: String,
    /// Top-level group listed by default. Empty means the whole document.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Glob patterns over dotted token paths excluded from listings.
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_tokens_file() -> String {
    "./tokens.json".to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tokens_file: default_tokens_file(),
            namespace: default_namespace(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }

    /// Compiled `ignores` patterns. Call after `validate`.
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }

    /// Token file path resolved against `root`.
    ///
    /// Absolute paths are kept; a current-directory root leaves the
    /// configured path untouched.
    pub fn tokens_path(&self, root: &Path) -> PathBuf {
        let p = Path::new(&self.tokens_file);
        if p.is_absolute() {
            return p.to_path_buf();
        }
        let is_cur_dir = root.components().all(|c| matches!(c, Component::CurDir));
        if is_cur_dir {
            p.to_path_buf()
        } else {
            let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
            root.join(rel)
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!("loaded config from {:?}", path);
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
