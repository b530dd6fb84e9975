use godbolt_mcp::{GodboltError, GodboltServer, HttpCompilerExplorer, ServerConfig};
use httpmock::prelude::*;
use rmcp::model::ResourceContents;
use serde_json::json;
use std::sync::Arc;

fn server_for(upstream: &MockServer) -> GodboltServer {
    let config = ServerConfig {
        base_url: upstream.base_url(),
        ..Default::default()
    };
    GodboltServer::new(Arc::new(HttpCompilerExplorer::new(&config).unwrap()))
}

fn single_text(contents: &[ResourceContents]) -> (&str, &str, Option<&str>) {
    assert_eq!(contents.len(), 1);
    match &contents[0] {
        ResourceContents::TextResourceContents {
            uri,
            text,
            mime_type,
            ..
        } => (uri.as_str(), text.as_str(), mime_type.as_deref()),
        other => panic!("expected text contents, got {:?}", other),
    }
}

#[tokio::test]
async fn test_languages_resource_round_trip() {
    let upstream = MockServer::start_async().await;
    let languages_mock = upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/languages");
            then.status(200).json_body(json!([{"id": "c", "name": "C"}]));
        })
        .await;

    let result = server_for(&upstream)
        .read_uri("resource://languages")
        .await
        .unwrap();

    languages_mock.assert_async().await;
    let (uri, text, mime) = single_text(&result.contents);
    assert_eq!(uri, "resource://languages");
    assert_eq!(mime, Some("application/json"));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(text).unwrap(),
        json!([{"id": "c", "name": "C"}])
    );
}

#[tokio::test]
async fn test_instruction_resource_forwards_text() {
    let upstream = MockServer::start_async().await;
    let asm_mock = upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/asm/arm/ldr");
            then.status(200).body("Load Register");
        })
        .await;

    let result = server_for(&upstream)
        .read_uri("resource://asm/arm/ldr")
        .await
        .unwrap();

    asm_mock.assert_async().await;
    let (uri, text, mime) = single_text(&result.contents);
    assert_eq!(uri, "resource://asm/arm/ldr");
    assert_eq!(text, "Load Register");
    assert_eq!(mime, Some("text/plain"));
}

#[tokio::test]
async fn test_libraries_resource_propagates_upstream_error() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/libraries/cobol");
            then.status(500).body("internal error");
        })
        .await;

    let err = server_for(&upstream)
        .read_uri("resource://libraries/cobol")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GodboltError::UpstreamStatus { status: 500, .. }
    ));
    let data: rmcp::ErrorData = err.into();
    assert_eq!(data.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
}

#[tokio::test]
async fn test_malformed_uri_is_invalid_params() {
    let upstream = MockServer::start_async().await;
    let catch_all = upstream
        .mock_async(|when, then| {
            when.path_contains("/api/");
            then.status(200).body("[]");
        })
        .await;

    let err = server_for(&upstream)
        .read_uri("resource://compilers")
        .await
        .unwrap_err();

    catch_all.assert_hits_async(0).await;
    let data: rmcp::ErrorData = err.into();
    assert_eq!(data.code, rmcp::model::ErrorCode::INVALID_PARAMS);
}
