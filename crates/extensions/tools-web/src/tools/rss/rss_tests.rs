use super::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED: &str = r#"<rss version="2.0"><channel>
<title>Morning Brief</title>
<item><title>Markets rally on chip news</title><link>https://brief.example.com/markets</link>
<description>Semiconductor stocks climbed.</description><guid>b-1</guid></item>
<item><title>Rain expected this weekend</title><link>https://brief.example.com/weather</link>
<description>Bring an umbrella.</description><guid>b-2</guid></item>
</channel></rss>"#;

fn ctx() -> ToolContext {
    ToolContext::new("test", std::env::temp_dir())
}

async fn feed_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/rss+xml")
                .set_body_string(FEED),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>hi</body></html>"))
        .mount(&server)
        .await;
    server
}

async fn run(tool: &RssTool, params: serde_json::Value) -> ToolResult {
    tool.execute(params, ctx()).await.unwrap()
}

#[test]
fn test_definition() {
    let tool = RssTool::new(std::env::temp_dir());
    assert_eq!(tool.definition().id, "rss");
    assert_eq!(tool.definition().risk_level, RiskLevel::Medium);
}

#[tokio::test]
async fn test_fetch_without_subscribing() {
    let server = feed_server().await;
    let dir = tempfile::tempdir().unwrap();
    let tool = RssTool::new(dir.path());

    let result = run(
        &tool,
        serde_json::json!({
            "action": "fetch",
            "url": format!("{}/feed.xml", server.uri()),
            "max_entries": 1
        }),
    )
    .await;

    assert!(result.success);
    assert!(result.content.starts_with("Morning Brief (1 items)"));
    assert!(result.content.contains("Markets rally on chip news"));
    assert!(!result.content.contains("Rain expected"));
    assert!(tool.store().subscriptions().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_non_feed_fails() {
    let server = feed_server().await;
    let dir = tempfile::tempdir().unwrap();
    let tool = RssTool::new(dir.path());

    let err = tool
        .execute(
            serde_json::json!({"action": "fetch", "url": format!("{}/page.html", server.uri())}),
            ctx(),
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not an RSS or Atom feed"));
}

#[tokio::test]
async fn test_subscribe_read_and_search() {
    let server = feed_server().await;
    let dir = tempfile::tempdir().unwrap();
    let tool = RssTool::new(dir.path());

    let subscribed = run(
        &tool,
        serde_json::json!({"action": "subscribe", "url": format!("{}/feed.xml", server.uri())}),
    )
    .await;
    assert_eq!(
        subscribed.content,
        "Subscribed to \"Morning Brief\" (id: morning-brief), archived 2 items"
    );
    assert!(dir.path().join("subscriptions.json").exists());
    assert!(dir.path().join("morning-brief.json").exists());

    let listed = run(&tool, serde_json::json!({"action": "list"})).await;
    assert!(listed.content.starts_with("- morning-brief | Morning Brief |"));

    let read = run(
        &tool,
        serde_json::json!({"action": "read", "feed_id": "morning-brief", "max_entries": 5}),
    )
    .await;
    assert!(read.content.contains("Rain expected this weekend"));

    let search = run(&tool, serde_json::json!({"action": "search", "query": "CHIP markets"})).await;
    assert!(search.content.contains("Markets rally"));
    assert!(!search.content.contains("Rain"));

    let updated = run(&tool, serde_json::json!({"action": "update"})).await;
    assert_eq!(updated.content, "morning-brief: 0 new");
}

#[tokio::test]
async fn test_unknown_feed_id() {
    let dir = tempfile::tempdir().unwrap();
    let tool = RssTool::new(dir.path());

    let read = run(&tool, serde_json::json!({"action": "read", "feed_id": "ghost"})).await;
    assert!(!read.success);

    let removed = run(&tool, serde_json::json!({"action": "unsubscribe", "feed_id": "ghost"})).await;
    assert!(!removed.success);

    let update = run(&tool, serde_json::json!({"action": "update"})).await;
    assert_eq!(update.error.as_deref(), Some("No feed subscriptions to update."));
}

#[tokio::test]
async fn test_list_empty() {
    let dir = tempfile::tempdir().unwrap();
    let tool = RssTool::new(dir.path());
    let listed = run(&tool, serde_json::json!({"action": "list"})).await;
    assert_eq!(listed.content, "No feed subscriptions yet.");
}
