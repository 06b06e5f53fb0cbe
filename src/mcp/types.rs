use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::apply::{Property, StyleChange};
use crate::core::{CatalogEntry, Category, TokenValue};

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCategorizedTokensParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Only return tokens in this category (colors, spacing, borderRadius, typography, effects)
    pub category: Option<Category>,
    /// Maximum number of items to return (default 50, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveTokenParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Dotted token path, e.g. "ld.color.brand.500"
    pub token_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanApplyParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Dotted token path to apply
    pub token_path: Option<String>,
    /// Declared token type, e.g. "color"
    pub token_type: Option<String>,
    /// Property to set (fill, fontSize, lineHeight, fontWeight, cornerRadius, spacing)
    pub property: Option<Property>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub tokens_file: String,
    pub namespace: String,
    pub ignores: Vec<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            tokens_file: c.tokens_file,
            namespace: c.namespace,
            ignores: c.ignores,
        }
    }
}

// ============================================================
// Token Listing Types (get_categorized_tokens)
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedTokensResult {
    pub namespace: String,
    pub total_count: usize,
    pub items: Vec<TokenItem>,
    pub pagination: Pagination,
}

/// A catalog entry tagged with the bucket it was listed under.
///
/// An entry placed in two categories appears once per category.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenItem {
    pub category: Category,
    #[serde(flatten)]
    pub entry: CatalogEntry,
}

// ============================================================
// Resolve Types (resolve_token)
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveTokenResult {
    pub path: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<TokenValue>,
    /// Set when the reference chain is circular
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================
// Apply Types (plan_apply)
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanApplyResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<TokenValue>,
    pub changes: Vec<StyleChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApplyErrorDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyErrorDto {
    /// Machine-readable error category, e.g. "tokenNotFound"
    pub code: String,
    pub message: String,
}

impl From<crate::apply::ApplyError> for ApplyErrorDto {
    fn from(err: crate::apply::ApplyError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
