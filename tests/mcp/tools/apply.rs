use std::fs;

use rmcp::handler::server::wrapper::Parameters;
use serde_json::{Value, json};
use tokenctl::{
    apply::Property,
    mcp::{TokenMcpServer, types::PlanApplyParams},
};

use crate::{McpTestFixture, extract_tool_result_json, fixture_design_system};

async fn plan(
    fixture: &McpTestFixture,
    token_path: Option<&str>,
    token_type: Option<&str>,
    property: Option<Property>,
) -> Value {
    let server = TokenMcpServer::new();
    let params = Parameters(PlanApplyParams {
        project_root_path: fixture.root(),
        token_path: token_path.map(str::to_string),
        token_type: token_type.map(str::to_string),
        property,
    });
    extract_tool_result_json(&server.plan_apply(params).await.unwrap())
}

#[tokio::test]
async fn test_plan_color_fill() {
    let fixture = fixture_design_system().unwrap();

    let result = plan(&fixture, Some("ld.color.brand.500"), Some("color"), None).await;

    assert_eq!(result["success"], true);
    assert_eq!(result["value"], "#336699");
    let changes = result["changes"].as_array().unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0]["kind"], "solidFill");
    assert_eq!(changes[0]["color"]["a"], 1.0);
    assert!((changes[0]["color"]["r"].as_f64().unwrap() - 0.2).abs() < 1e-9);
}

#[tokio::test]
async fn test_plan_padding_only_for_padding_tokens() {
    let fixture = fixture_design_system().unwrap();

    let padding = plan(
        &fixture,
        Some("ld.spacing.padding.200"),
        Some("spacing"),
        Some(Property::Spacing),
    )
    .await;
    assert_eq!(padding["changes"], json!([{ "kind": "padding", "value": 8.0 }]));

    let gap = plan(
        &fixture,
        Some("ld.spacing.gap.100"),
        Some("spacing"),
        Some(Property::Spacing),
    )
    .await;
    assert_eq!(gap["success"], true);
    assert_eq!(gap["changes"], json!([]));
}

#[tokio::test]
async fn test_plan_no_token_specified() {
    let fixture = fixture_design_system().unwrap();

    let result = plan(&fixture, None, None, None).await;

    assert_eq!(result["success"], false);
    assert_eq!(result["error"]["code"], "noTokenSpecified");
}

#[tokio::test]
async fn test_plan_token_not_found() {
    let fixture = fixture_design_system().unwrap();

    let missing = plan(&fixture, Some("ld.nope"), None, None).await;
    assert_eq!(missing["error"]["code"], "tokenNotFound");
    assert_eq!(missing["error"]["message"], "Token value not found: ld.nope");

    let circular = plan(&fixture, Some("ld.loop.a"), None, None).await;
    assert_eq!(circular["error"]["code"], "tokenNotFound");
}

#[tokio::test]
async fn test_plan_document_not_loaded() {
    let fixture = fixture_design_system().unwrap();
    fs::remove_file(fixture.root_path().join("tokens.json")).unwrap();

    let result = plan(&fixture, Some("ld.color.brand.500"), None, None).await;

    assert_eq!(result["success"], false);
    assert_eq!(result["error"]["code"], "documentNotLoaded");
}
