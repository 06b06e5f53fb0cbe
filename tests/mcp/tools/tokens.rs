use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tokenctl::{
    core::Category,
    mcp::{
        TokenMcpServer,
        types::{GetCategorizedTokensParams, ResolveTokenParams},
    },
};

use crate::{McpTestFixture, assert_pagination, extract_tool_result_json, fixture_design_system};

fn list_params(
    fixture: &McpTestFixture,
    category: Option<Category>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Parameters<GetCategorizedTokensParams> {
    Parameters(GetCategorizedTokensParams {
        project_root_path: fixture.root(),
        category,
        limit,
        offset,
    })
}

// ============================================================================
// get_categorized_tokens tests
// ============================================================================

#[tokio::test]
async fn test_categorized_tokens_all_categories() {
    let fixture = fixture_design_system().unwrap();
    let server = TokenMcpServer::new();

    let result = server
        .get_categorized_tokens(list_params(&fixture, None, None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["namespace"], "ld");
    assert_eq!(json_result["totalCount"], 7);
    assert_pagination(&json_result, 0, 50, false);

    let items = json_result["items"].as_array().unwrap();
    let categories: Vec<&str> = items
        .iter()
        .map(|item| item["category"].as_str().unwrap())
        .collect();
    assert_eq!(
        categories,
        vec![
            "colors",
            "colors",
            "colors",
            "spacing",
            "spacing",
            "borderRadius",
            "typography"
        ]
    );
    assert_eq!(
        items[2],
        json!({
            "category": "colors",
            "path": "ld.color.brand.500",
            "name": "500",
            "value": "#336699",
            "type": "color"
        })
    );
}

#[tokio::test]
async fn test_categorized_tokens_single_category() {
    let fixture = fixture_design_system().unwrap();
    let server = TokenMcpServer::new();

    let result = server
        .get_categorized_tokens(list_params(&fixture, Some(Category::Spacing), None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    let paths: Vec<&str> = json_result["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["ld.spacing.padding.200", "ld.spacing.gap.100"]);
}

#[tokio::test]
async fn test_categorized_tokens_pagination() {
    let fixture = fixture_design_system().unwrap();
    let server = TokenMcpServer::new();

    let first = extract_tool_result_json(
        &server
            .get_categorized_tokens(list_params(&fixture, None, Some(2), None))
            .await
            .unwrap(),
    );
    assert_eq!(first["items"].as_array().unwrap().len(), 2);
    assert_pagination(&first, 0, 2, true);

    let last = extract_tool_result_json(
        &server
            .get_categorized_tokens(list_params(&fixture, None, Some(2), Some(6)))
            .await
            .unwrap(),
    );
    assert_eq!(last["items"].as_array().unwrap().len(), 1);
    assert_eq!(last["items"][0]["path"], "ld.font.size.body");
    assert_pagination(&last, 6, 2, false);
}

#[tokio::test]
async fn test_categorized_tokens_limit_is_capped() {
    let fixture = fixture_design_system().unwrap();
    let server = TokenMcpServer::new();

    let result = extract_tool_result_json(
        &server
            .get_categorized_tokens(list_params(&fixture, None, Some(1000), None))
            .await
            .unwrap(),
    );
    assert_pagination(&result, 0, 100, false);
}

#[tokio::test]
async fn test_categorized_tokens_missing_file_is_an_error() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TokenMcpServer::new();

    let result = server
        .get_categorized_tokens(list_params(&fixture, None, None, None))
        .await;
    assert!(result.is_err());
}

// ============================================================================
// resolve_token tests
// ============================================================================

async fn resolve(fixture: &McpTestFixture, token_path: &str) -> serde_json::Value {
    let server = TokenMcpServer::new();
    let params = Parameters(ResolveTokenParams {
        project_root_path: fixture.root(),
        token_path: token_path.to_string(),
    });
    extract_tool_result_json(&server.resolve_token(params).await.unwrap())
}

#[tokio::test]
async fn test_resolve_token_follows_reference() {
    let fixture = fixture_design_system().unwrap();

    let result = resolve(&fixture, "ld.color.brand.500").await;

    assert_eq!(
        result,
        json!({ "path": "ld.color.brand.500", "found": true, "value": "#336699" })
    );
}

#[tokio::test]
async fn test_resolve_token_missing_path() {
    let fixture = fixture_design_system().unwrap();

    let result = resolve(&fixture, "nonexistent.path").await;

    assert_eq!(result, json!({ "path": "nonexistent.path", "found": false }));
}

#[tokio::test]
async fn test_resolve_token_group_returns_subtree() {
    let fixture = fixture_design_system().unwrap();

    let result = resolve(&fixture, "ld.radius").await;

    assert_eq!(result["found"], true);
    assert_eq!(
        result["value"],
        json!({ "md": { "$type": "borderRadius", "$value": 6 } })
    );
}

#[tokio::test]
async fn test_resolve_token_circular() {
    let fixture = fixture_design_system().unwrap();

    let result = resolve(&fixture, "ld.loop.a").await;

    assert_eq!(result["found"], false);
    assert_eq!(
        result["error"],
        "Circular token reference: ld.loop.a -> ld.loop.b -> ld.loop.a"
    );
}
