use super::*;
use tempfile::TempDir;

async fn run(dir: &TempDir, params: serde_json::Value) -> Result<ToolResult, ToolError> {
    ExecTool::new()
        .execute(params, ToolContext::new("shell-escape", dir.path().to_path_buf()))
        .await
}

#[test]
fn test_exec_is_high_risk() {
    let tool = ExecTool::default();
    assert_eq!(tool.definition().id, "exec");
    assert_eq!(tool.definition().risk_level, RiskLevel::High);
    assert_eq!(default_timeout(), 120_000);
}

#[tokio::test]
async fn test_stdout_and_stderr_are_combined() {
    let dir = TempDir::new().unwrap();
    let result = run(&dir, serde_json::json!({"command": "echo out; echo warn >&2"}))
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(result.content, "out\n\n--- stderr ---\nwarn\n");
}

#[tokio::test]
async fn test_silent_command_reports_no_output() {
    let dir = TempDir::new().unwrap();
    let result = run(&dir, serde_json::json!({"command": "true"})).await.unwrap();
    assert_eq!(result.content, "(no output)");
}

#[tokio::test]
async fn test_nonzero_exit_is_a_tool_error_result() {
    let dir = TempDir::new().unwrap();
    let result = run(&dir, serde_json::json!({"command": "echo oops; exit 3"}))
        .await
        .unwrap();
    assert!(!result.success);
    let message = result.into_text();
    assert!(message.starts_with("Command failed with exit code 3"));
    assert!(message.contains("oops"));
}

#[tokio::test]
async fn test_runs_in_work_dir_or_cwd() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("rss_feeds")).unwrap();
    std::fs::write(dir.path().join("rss_feeds/feeds.json"), "[]").unwrap();
    std::fs::write(dir.path().join("notes.md"), "x").unwrap();

    let here = run(&dir, serde_json::json!({"command": "ls"})).await.unwrap();
    assert!(here.content.contains("notes.md"));

    let relative = run(&dir, serde_json::json!({"command": "ls", "cwd": "rss_feeds"}))
        .await
        .unwrap();
    assert!(relative.content.contains("feeds.json"));
    assert!(!relative.content.contains("notes.md"));

    let absolute = dir.path().join("rss_feeds");
    let absolute = run(
        &dir,
        serde_json::json!({"command": "ls", "cwd": absolute.to_string_lossy()}),
    )
    .await
    .unwrap();
    assert!(absolute.content.contains("feeds.json"));
}

#[tokio::test]
async fn test_stdin_is_closed() {
    let dir = TempDir::new().unwrap();
    let result = run(&dir, serde_json::json!({"command": "cat", "timeout": 5000}))
        .await
        .unwrap();
    assert!(result.success);
}

#[tokio::test]
async fn test_timeout_rounds_up_to_seconds() {
    let dir = TempDir::new().unwrap();
    let err = run(&dir, serde_json::json!({"command": "sleep 10", "timeout": 100}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Timeout(1)), "{err:?}");
}

#[tokio::test]
async fn test_bad_params() {
    let dir = TempDir::new().unwrap();
    assert!(run(&dir, serde_json::json!({})).await.is_err());
    assert!(matches!(
        run(&dir, serde_json::json!({"command": "   "})).await,
        Err(ToolError::InvalidParameters(_))
    ));
}
