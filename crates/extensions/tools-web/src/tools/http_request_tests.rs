use super::*;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ctx() -> ToolContext {
    ToolContext::new("test", std::env::temp_dir())
}

#[test]
fn test_definition() {
    let tool = HttpRequestTool::new();
    assert_eq!(tool.definition().id, "http_request");
    assert_eq!(tool.definition().risk_level, RiskLevel::Medium);
}

#[test]
fn test_params_defaults() {
    let params: RequestParams =
        serde_json::from_value(serde_json::json!({"url": "https://example.com"})).unwrap();
    assert_eq!(params.method, "GET");
    assert_eq!(params.timeout, 30);
    assert!(params.headers.is_empty());
    assert!(params.body.is_none());
    assert!(params.json.is_none());
}

#[test]
fn test_parse_method() {
    assert_eq!(parse_method("patch").unwrap(), Method::PATCH);
    assert!(matches!(
        parse_method("TRACE").unwrap_err(),
        ToolError::InvalidParameters(_)
    ));
}

#[test]
fn test_parse_http_url() {
    assert!(parse_http_url("https://example.com/a?b=c").is_ok());
    assert!(parse_http_url("file:///etc/passwd").is_err());
    assert!(parse_http_url("not a url").is_err());
}

#[tokio::test]
async fn test_get_returns_body_and_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/plain")
                .set_body_string("all good"),
        )
        .mount(&server)
        .await;

    let result = HttpRequestTool::new()
        .execute(
            serde_json::json!({"url": format!("{}/status", server.uri())}),
            ctx(),
        )
        .await
        .unwrap();

    assert!(result.success);
    let parsed: serde_json::Value = serde_json::from_str(&result.content).unwrap();
    assert_eq!(parsed["status"], 200);
    assert_eq!(parsed["body"], "all good");
    assert_eq!(parsed["content_type"], "text/plain");
}

#[tokio::test]
async fn test_post_json_with_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items"))
        .and(header("x-trace", "abc"))
        .and(body_json(serde_json::json!({"name": "widget"})))
        .respond_with(ResponseTemplate::new(201).set_body_string("{\"id\":1}"))
        .expect(1)
        .mount(&server)
        .await;

    let result = HttpRequestTool::new()
        .execute(
            serde_json::json!({
                "url": format!("{}/items", server.uri()),
                "method": "post",
                "headers": {"x-trace": "abc"},
                "json": {"name": "widget"}
            }),
            ctx(),
        )
        .await
        .unwrap();
    assert!(result.success);
    assert!(result.content.contains("201"));
}

#[tokio::test]
async fn test_error_status_is_failed_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&server)
        .await;

    let result = HttpRequestTool::new()
        .execute(serde_json::json!({"url": server.uri()}), ctx())
        .await
        .unwrap();
    assert!(!result.success);
    let error = result.error.unwrap();
    assert!(error.starts_with("HTTP 404"));
    assert!(error.contains("missing"));
}

#[tokio::test]
async fn test_invalid_url_rejected() {
    let err = HttpRequestTool::new()
        .execute(serde_json::json!({"url": "ftp://example.com"}), ctx())
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidParameters(_)));
}
