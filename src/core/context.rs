use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        CategoryBuckets, TokenResolver,
        parsers::json::{TokenFile, parse_token_file},
    },
};

/// A loaded project: merged configuration plus the parsed token file.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--namespace brand`)
/// 2. `.tokenrc.json` config file
/// 3. Built-in defaults
pub struct ProjectContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// True if `.tokenrc.json` was found.
    pub config_from_file: bool,

    pub token_file: TokenFile,

    resolver: TokenResolver,
}

impl ProjectContext {
    /// Load configuration and the token file for the project at
    /// `common_args.path`.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid, or the token file is
    /// missing or not valid JSON.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args.path.clone();

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            tracing::debug!(
                "no {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(ref tokens_file) = common_args.tokens_file {
            config.tokens_file = tokens_file.to_string_lossy().to_string();
        }
        if let Some(ref namespace) = common_args.namespace {
            config.namespace = namespace.clone();
        }

        let tokens_path = config.tokens_path(&root_dir);
        if !tokens_path.exists() {
            bail!("Token file not found: {:?}", tokens_path);
        }
        let token_file = parse_token_file(&tokens_path)?;
        tracing::debug!("loaded token file {:?}", tokens_path);

        let resolver = TokenResolver::new(token_file.document.clone())
            .with_namespace(config.namespace.clone());

        Ok(Self {
            config,
            root_dir,
            config_from_file: config_result.from_file,
            token_file,
            resolver,
        })
    }

    /// Convenience constructor for callers that only have a project root.
    pub fn from_root(root: &Path) -> Result<Self> {
        Self::new(&CommonArgs {
            path: root.to_path_buf(),
            ..Default::default()
        })
    }

    pub fn resolver(&self) -> &TokenResolver {
        &self.resolver
    }

    /// Categorized namespace tokens with config `ignores` applied.
    pub fn categorized_tokens(&self) -> CategoryBuckets {
        let patterns = self.config.ignore_patterns();
        let mut buckets = self.resolver.categorized_tokens();
        if !patterns.is_empty() {
            buckets.retain(|entry| !patterns.iter().any(|p| p.matches(&entry.path)));
        }
        buckets
    }
}
