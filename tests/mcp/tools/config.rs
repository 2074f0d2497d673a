use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use stepcat::mcp::{StepcatMcpServer, types::GetConfigParams};

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = StepcatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["sourceRoot"], "./");
    assert_eq!(json_result["config"]["extensions"], json!(["rb", "cs"]));
    assert_eq!(json_result["config"]["includes"], json!([]));
    assert!(json_result["config"]["ignores"].is_array());
}

#[tokio::test]
async fn test_get_config_from_stepcatrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "includes": ["features"],
            "extensions": ["rb"]
        }))
        .unwrap();

    let server = StepcatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["includes"], json!(["features"]));
    assert_eq!(json_result["config"]["extensions"], json!(["rb"]));
    // Unset fields keep their defaults
    assert_eq!(json_result["config"]["sourceRoot"], "./");
}

#[tokio::test]
async fn test_get_config_found_from_subdirectory() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({ "extensions": ["cs"] })).unwrap();
    std::fs::create_dir_all(fixture.root_path().join("features")).unwrap();

    let server = StepcatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root_path().join("features").to_string_lossy().to_string(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["extensions"], json!(["cs"]));
}

#[tokio::test]
async fn test_get_config_invalid_json() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_file(".stepcatrc.json", "{ not json").unwrap();
    let server = StepcatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
