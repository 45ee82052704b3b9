use super::*;
use chrono::{Duration, Utc};

async fn open_temp() -> (tempfile::TempDir, MarkdownMemoryBackend) {
    let dir = tempfile::tempdir().unwrap();
    let backend = MarkdownMemoryBackend::open(dir.path()).await.unwrap();
    (dir, backend)
}

#[tokio::test]
async fn test_open_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("kb").join("nested");
    let backend = MarkdownMemoryBackend::open(&root).await.unwrap();
    assert!(root.is_dir());
    assert_eq!(backend.id(), "markdown");
}

#[tokio::test]
async fn test_store_assigns_id_and_writes_file() {
    let (dir, backend) = open_temp().await;
    let id = backend
        .store(MemoryEntry::new("Standup", "Daily standup is at 9:30"))
        .await
        .unwrap();

    assert!(id.starts_with("mem_"));
    assert_eq!(id.len(), "mem_".len() + 12);
    let text = std::fs::read_to_string(dir.path().join(format!("{id}.md"))).unwrap();
    assert!(text.starts_with("+++"));
    assert!(text.contains("Daily standup is at 9:30"));
}

#[tokio::test]
async fn test_store_keeps_caller_id() {
    let (_dir, backend) = open_temp().await;
    let mut entry = MemoryEntry::new("t", "c");
    entry.id = Some("team-roster".to_string());
    assert_eq!(backend.store(entry).await.unwrap(), "team-roster");
    assert!(backend.retrieve("team-roster").await.unwrap().is_some());
}

#[tokio::test]
async fn test_retrieve_missing_is_none() {
    let (_dir, backend) = open_temp().await;
    assert!(backend.retrieve("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn test_search_ranks_by_term_coverage() {
    let (_dir, backend) = open_temp().await;
    backend
        .store(MemoryEntry::new("Deploy", "Deploy the API with cargo shuttle"))
        .await
        .unwrap();
    backend
        .store(MemoryEntry::new("Lunch", "Tacos on Tuesday"))
        .await
        .unwrap();
    backend
        .store(MemoryEntry::new("API keys", "Rotate keys monthly"))
        .await
        .unwrap();

    let results = backend
        .search(MemoryQuery::text("deploy api").with_limit(10))
        .await
        .unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].entry.title, "Deploy");
    assert_eq!(results[0].score, 1.0);
    assert_eq!(results[1].entry.title, "API keys");
}

#[tokio::test]
async fn test_search_respects_min_score_and_limit() {
    let (_dir, backend) = open_temp().await;
    backend.store(MemoryEntry::new("a", "rust tokio")).await.unwrap();
    backend.store(MemoryEntry::new("b", "rust only")).await.unwrap();
    backend.store(MemoryEntry::new("c", "rust tokio axum")).await.unwrap();

    let strict = backend
        .search(MemoryQuery::text("rust tokio").with_min_score(0.9).with_limit(10))
        .await
        .unwrap();
    assert_eq!(strict.len(), 2);

    let limited = backend
        .search(MemoryQuery::text("rust").with_limit(1))
        .await
        .unwrap();
    assert_eq!(limited.len(), 1);
}

#[tokio::test]
async fn test_search_filters_tags() {
    let (_dir, backend) = open_temp().await;
    backend
        .store(MemoryEntry::new("w", "meeting notes").with_tags(vec!["work".to_string()]))
        .await
        .unwrap();
    backend
        .store(MemoryEntry::new("h", "meeting the plumber"))
        .await
        .unwrap();

    let mut query = MemoryQuery::text("meeting").with_limit(10);
    query.tags = vec!["work".to_string()];
    let results = backend.search(query).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry.title, "w");
}

#[tokio::test]
async fn test_search_empty_query_matches_nothing() {
    let (_dir, backend) = open_temp().await;
    backend.store(MemoryEntry::new("a", "anything")).await.unwrap();
    let results = backend.search(MemoryQuery::text("  ")).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_delete_removes_file_and_entry() {
    let (dir, backend) = open_temp().await;
    let id = backend.store(MemoryEntry::new("x", "y")).await.unwrap();
    backend.delete(&id).await.unwrap();

    assert!(backend.retrieve(&id).await.unwrap().is_none());
    assert!(!dir.path().join(format!("{id}.md")).exists());

    let err = backend.delete(&id).await.unwrap_err();
    assert!(matches!(err, MemoryError::NotFound(_)));
}

#[tokio::test]
async fn test_list_newest_first() {
    let (_dir, backend) = open_temp().await;
    let now = Utc::now();
    for (title, age) in [("old", 3), ("new", 0), ("mid", 1)] {
        let mut entry = MemoryEntry::new(title, "body");
        entry.created_at = now - Duration::days(age);
        backend.store(entry).await.unwrap();
    }

    let titles: Vec<String> = backend
        .list(10)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, vec!["new", "mid", "old"]);
    assert_eq!(backend.list(1).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_reopen_reads_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    {
        let backend = MarkdownMemoryBackend::open(dir.path()).await.unwrap();
        backend
            .store(MemoryEntry::new("Persistent", "survives restarts"))
            .await
            .unwrap();
    }
    std::fs::write(dir.path().join("junk.md"), "no front matter here").unwrap();

    let backend = MarkdownMemoryBackend::open(dir.path()).await.unwrap();
    let entries = backend.list(10).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].content, "survives restarts");
}

#[test]
fn test_score_case_insensitive() {
    let doc = Document::from_entry("id", MemoryEntry::new("Rust", "Tokio runtime notes"));
    assert_eq!(MarkdownMemoryBackend::score(&doc, "TOKIO"), 1.0);
    assert_eq!(MarkdownMemoryBackend::score(&doc, "tokio python"), 0.5);
    assert_eq!(MarkdownMemoryBackend::score(&doc, "python"), 0.0);
}
