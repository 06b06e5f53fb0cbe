use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    apply::{ApplyRequest, TokenSession},
    config::load_config,
    core::{Category, ProjectContext},
};

use super::types::{
    CategorizedTokensResult, ConfigDto, ConfigValues, GetCategorizedTokensParams,
    GetConfigParams, Pagination, PlanApplyParams, PlanApplyResult, ResolveTokenParams,
    ResolveTokenResult, TokenItem,
};

#[derive(Clone)]
pub struct TokenMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TokenMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn load_project(path: &str) -> Result<ProjectContext, McpError> {
    ProjectContext::from_root(Path::new(path))
        .map_err(|e| McpError::internal_error(format!("Failed to load project: {:#}", e), None))
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_router]
impl TokenMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tokenctl configuration
    #[tool(description = "Get the current tokenctl configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_tool_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// List namespace tokens by category
    #[tool(
        description = "List design tokens in the configured namespace, grouped by category (colors, spacing, borderRadius, typography, effects). Values are fully resolved; unresolvable references have no value. Returns paginated list."
    )]
    pub async fn get_categorized_tokens(
        &self,
        params: Parameters<GetCategorizedTokensParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params.limit.map(|v| v as usize).unwrap_or(50).min(100);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let ctx = load_project(&params.project_root_path)?;
        let buckets = ctx.categorized_tokens();

        let categories = match params.category {
            Some(category) => vec![category],
            None => Category::ALL.to_vec(),
        };
        let all_items: Vec<TokenItem> = categories
            .into_iter()
            .flat_map(|category| {
                buckets.get(category).iter().map(move |entry| TokenItem {
                    category,
                    entry: entry.clone(),
                })
            })
            .collect();

        let total_count = all_items.len();

        // Apply pagination
        let paginated: Vec<TokenItem> =
            all_items.into_iter().skip(offset).take(limit).collect();

        let has_more = offset + paginated.len() < total_count;

        to_tool_result(&CategorizedTokensResult {
            namespace: ctx.config.namespace,
            total_count,
            items: paginated,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Resolve one token path
    #[tool(
        description = "Resolve a dotted token path (e.g. 'ld.color.brand.500') to its final value, following {references}. Paths are absolute from the document root."
    )]
    pub async fn resolve_token(
        &self,
        params: Parameters<ResolveTokenParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_project(&params.project_root_path)?;

        let result = match ctx.resolver().resolve_path(&params.token_path) {
            Ok(value) => ResolveTokenResult {
                path: params.token_path,
                found: value.is_some(),
                value,
                error: None,
            },
            Err(err) => ResolveTokenResult {
                path: params.token_path,
                found: false,
                value: None,
                error: Some(err.to_string()),
            },
        };

        to_tool_result(&result)
    }

    /// Work out the style changes applying a token would make
    #[tool(
        description = "Plan applying a token to the selected design objects: resolves the token and returns the property changes (solid fill, font size, line height, font weight, corner radius, padding) without modifying anything."
    )]
    pub async fn plan_apply(
        &self,
        params: Parameters<PlanApplyParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let mut session = TokenSession::new();
        match ProjectContext::from_root(Path::new(&params.project_root_path)) {
            Ok(ctx) => {
                session = session.with_namespace(ctx.config.namespace.clone());
                session.load_document(ctx.token_file.document);
            }
            Err(err) => tracing::warn!("{:#}", err),
        }

        let request = ApplyRequest {
            token_path: params.token_path,
            token_type: params.token_type,
            property: params.property,
        };

        let result = match session.plan(&request) {
            Ok((value, changes)) => PlanApplyResult {
                success: true,
                value: Some(value),
                changes,
                error: None,
            },
            Err(err) => PlanApplyResult {
                success: false,
                value: None,
                changes: Vec::new(),
                error: Some(err.into()),
            },
        };

        to_tool_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for TokenMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tokenctl MCP gives AI agents read access to a project's design tokens.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration (token file, namespace, ignores)\n\
                 2. get_categorized_tokens - List resolved tokens by category (paginated)\n\
                 3. resolve_token - Resolve one dotted token path to its final value\n\
                 4. plan_apply - Preview the style changes applying a token would make\n\n\
                 Token paths are absolute from the document root and include the namespace,\n\
                 e.g. ld.color.brand.500."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TokenMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
