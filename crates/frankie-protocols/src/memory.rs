//! Memory backend protocol definitions.
//!
//! The knowledge base behind the memory agent and the `retrieve` tool.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::MemoryError;

/// Core trait for memory backends.
#[async_trait]
pub trait MemoryBackend: Send + Sync {
    /// Returns the backend ID.
    fn id(&self) -> &str;

    /// Store a memory entry and return its ID.
    async fn store(&self, entry: MemoryEntry) -> Result<String, MemoryError>;

    /// Retrieve a memory entry by ID.
    async fn retrieve(&self, id: &str) -> Result<Option<MemoryEntry>, MemoryError>;

    /// Search for memory entries.
    async fn search(&self, query: MemoryQuery) -> Result<Vec<MemorySearchResult>, MemoryError>;

    /// Delete a memory entry.
    async fn delete(&self, id: &str) -> Result<(), MemoryError>;

    /// List stored entries, newest first.
    async fn list(&self, limit: usize) -> Result<Vec<MemoryEntry>, MemoryError>;
}

/// A memory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// Optional ID (assigned by backend if not provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Short title.
    pub title: String,

    /// Content of the memory.
    pub content: String,

    /// Tags for categorization.
    #[serde(default)]
    pub tags: Vec<String>,

    /// When the memory was created.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl MemoryEntry {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            created_at: chrono::Utc::now(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Query for searching memories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryQuery {
    /// Free-text query.
    pub text: String,

    /// Filter by tags (any match).
    #[serde(default)]
    pub tags: Vec<String>,

    /// Maximum number of results.
    pub limit: usize,

    /// Minimum relevance score (0.0 - 1.0).
    pub min_score: f32,
}

impl MemoryQuery {
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            text: query.into(),
            tags: Vec::new(),
            limit: 5,
            min_score: 0.0,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score.clamp(0.0, 1.0);
        self
    }
}

/// Result from a memory search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorySearchResult {
    pub entry: MemoryEntry,
    pub score: f32,
}
