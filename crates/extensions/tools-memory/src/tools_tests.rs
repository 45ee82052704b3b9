use super::*;
use crate::MarkdownMemoryBackend;

async fn backend() -> (tempfile::TempDir, Arc<dyn MemoryBackend>) {
    let dir = tempfile::tempdir().unwrap();
    let backend = MarkdownMemoryBackend::open(dir.path()).await.unwrap();
    (dir, Arc::new(backend))
}

fn ctx() -> ToolContext {
    ToolContext::new("test", std::env::temp_dir())
}

#[test]
fn test_derive_title() {
    assert_eq!(derive_title("\n  First line\nsecond"), "First line");
    let long = "x".repeat(80);
    assert_eq!(derive_title(&long), format!("{}...", "x".repeat(60)));
    assert_eq!(derive_title(""), "");
}

#[tokio::test]
async fn test_definitions() {
    let (_dir, backend) = backend().await;
    let memory = MemoryTool::new(backend.clone());
    assert_eq!(memory.definition().id, "memory");
    assert_eq!(memory.risk_level(), RiskLevel::Medium);
    let retrieve = RetrieveTool::new(backend);
    assert_eq!(retrieve.definition().id, "retrieve");
    assert_eq!(retrieve.risk_level(), RiskLevel::Low);
}

#[tokio::test]
async fn test_store_then_get() {
    let (_dir, backend) = backend().await;
    let tool = MemoryTool::new(backend.clone());

    let stored = tool
        .execute(
            serde_json::json!({
                "action": "store",
                "content": "Quarterly review is on March 3",
                "tags": ["work"]
            }),
            ctx(),
        )
        .await
        .unwrap();
    assert!(stored.success);
    let id = stored.content.trim_start_matches("Stored entry ").to_string();

    let got = tool
        .execute(serde_json::json!({"action": "get", "id": id}), ctx())
        .await
        .unwrap();
    assert!(got.success);
    assert!(got.content.contains("Quarterly review is on March 3"));
    assert!(got.content.contains("[work]"));
}

#[tokio::test]
async fn test_store_rejects_empty_content() {
    let (_dir, backend) = backend().await;
    let tool = MemoryTool::new(backend);
    let err = tool
        .execute(serde_json::json!({"action": "store", "content": "   "}), ctx())
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidParameters(_)));
}

#[tokio::test]
async fn test_unknown_action_rejected() {
    let (_dir, backend) = backend().await;
    let tool = MemoryTool::new(backend);
    let err = tool
        .execute(serde_json::json!({"action": "wipe"}), ctx())
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidParameters(_)));
}

#[tokio::test]
async fn test_get_missing_is_error_result() {
    let (_dir, backend) = backend().await;
    let tool = MemoryTool::new(backend);
    let result = tool
        .execute(serde_json::json!({"action": "get", "id": "ghost"}), ctx())
        .await
        .unwrap();
    assert!(!result.success);
}

#[tokio::test]
async fn test_list_and_delete() {
    let (_dir, backend) = backend().await;
    let tool = MemoryTool::new(backend.clone());

    let empty = tool
        .execute(serde_json::json!({"action": "list"}), ctx())
        .await
        .unwrap();
    assert_eq!(empty.content, "The knowledge base is empty.");

    let id = backend.store(MemoryEntry::new("t", "to be removed")).await.unwrap();
    let listed = tool
        .execute(serde_json::json!({"action": "list"}), ctx())
        .await
        .unwrap();
    assert!(listed.content.starts_with("1 entries"));

    tool.execute(serde_json::json!({"action": "delete", "id": id}), ctx())
        .await
        .unwrap();
    let err = tool
        .execute(serde_json::json!({"action": "delete", "id": id}), ctx())
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::ExecutionFailed(_)));
}

#[tokio::test]
async fn test_retrieve_finds_relevant_entries() {
    let (_dir, backend) = backend().await;
    backend
        .store(MemoryEntry::new("Editor", "I use helix with the gruvbox theme"))
        .await
        .unwrap();
    backend
        .store(MemoryEntry::new("Lunch", "Salad bar on Fridays"))
        .await
        .unwrap();

    let tool = RetrieveTool::new(backend);
    let result = tool
        .execute(serde_json::json!({"text": "which editor theme"}), ctx())
        .await
        .unwrap();
    assert!(result.success);
    assert!(result.content.starts_with("Retrieved 1 results"));
    assert!(result.content.contains("helix"));
}

#[tokio::test]
async fn test_retrieve_no_match() {
    let (_dir, backend) = backend().await;
    let tool = RetrieveTool::new(backend);
    let result = tool
        .execute(serde_json::json!({"text": "kubernetes"}), ctx())
        .await
        .unwrap();
    assert_eq!(result.content, "No entries matched \"kubernetes\".");
}
