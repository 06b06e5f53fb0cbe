use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tokenctl::mcp::{TokenMcpServer, types::GetConfigParams};

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TokenMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["tokensFile"], "./tokens.json");
    assert_eq!(json_result["config"]["namespace"], "ld");
    assert_eq!(json_result["config"]["ignores"], json!([]));
    assert_eq!(json_result["fromFile"], false);
}

#[tokio::test]
async fn test_get_config_from_tokenrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "tokensFile": "design/tokens.json",
            "namespace": "brand"
        }))
        .unwrap();

    let server = TokenMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["tokensFile"], "design/tokens.json");
    assert_eq!(json_result["config"]["namespace"], "brand");
    assert_eq!(json_result["fromFile"], true);
}

#[tokio::test]
async fn test_get_config_invalid_file_is_an_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "ignores": ["[invalid"] }))
        .unwrap();

    let server = TokenMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
