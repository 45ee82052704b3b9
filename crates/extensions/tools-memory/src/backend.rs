//! Markdown-file memory backend.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use frankie_protocols::error::MemoryError;
use frankie_protocols::memory::{MemoryBackend, MemoryEntry, MemoryQuery, MemorySearchResult};

use crate::document::Document;

/// Stores each entry as `<dir>/<id>.md` and keeps every document cached in
/// memory for search.
pub struct MarkdownMemoryBackend {
    root: PathBuf,
    cache: RwLock<HashMap<String, Document>>,
}

impl MarkdownMemoryBackend {
    /// Open (creating if needed) a knowledge base directory and load it.
    pub async fn open(root: impl AsRef<Path>) -> Result<Self, MemoryError> {
        let root = root.as_ref().to_path_buf();
        if !root.exists() {
            fs::create_dir_all(&root)
                .await
                .map_err(|e| MemoryError::StorageError(format!("{}: {e}", root.display())))?;
            info!("Created knowledge base directory {:?}", root);
        }

        let backend = Self {
            root,
            cache: RwLock::new(HashMap::new()),
        };
        backend.reload().await?;
        Ok(backend)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Re-read every `*.md` file under the root. Unparseable files are skipped.
    pub async fn reload(&self) -> Result<usize, MemoryError> {
        let root = self.root.clone();
        let documents = tokio::task::spawn_blocking(move || {
            WalkDir::new(&root)
                .max_depth(2)
                .into_iter()
                .filter_map(Result::ok)
                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
                .filter_map(|e| {
                    let text = std::fs::read_to_string(e.path()).ok()?;
                    match Document::parse(&text) {
                        Ok(doc) => Some(doc),
                        Err(err) => {
                            warn!("Skipping {:?}: {}", e.path(), err);
                            None
                        }
                    }
                })
                .collect::<Vec<_>>()
        })
        .await
        .map_err(|e| MemoryError::StorageError(e.to_string()))?;

        let mut cache = self.cache.write().await;
        cache.clear();
        for doc in documents {
            cache.insert(doc.front_matter.id.clone(), doc);
        }
        info!("Loaded {} knowledge base entries", cache.len());
        Ok(cache.len())
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(Document::file_name(id))
    }

    fn new_id() -> String {
        let hex = uuid::Uuid::new_v4().simple().to_string();
        format!("mem_{}", &hex[..12])
    }

    /// Fraction of query terms found in the title, body, or tags.
    pub(crate) fn score(doc: &Document, query: &str) -> f32 {
        let terms: Vec<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .filter(|t| t.len() > 1)
            .collect();
        if terms.is_empty() {
            return 0.0;
        }

        let haystack = format!(
            "{} {} {}",
            doc.front_matter.title,
            doc.body,
            doc.front_matter.tags.join(" ")
        )
        .to_lowercase();
        let hits = terms.iter().filter(|t| haystack.contains(t.as_str())).count();
        hits as f32 / terms.len() as f32
    }
}

#[async_trait]
impl MemoryBackend for MarkdownMemoryBackend {
    fn id(&self) -> &str {
        "markdown"
    }

    async fn store(&self, entry: MemoryEntry) -> Result<String, MemoryError> {
        let id = entry.id.clone().unwrap_or_else(Self::new_id);
        let doc = Document::from_entry(id.clone(), entry);

        let path = self.path_for(&id);
        fs::write(&path, doc.render()?)
            .await
            .map_err(|e| MemoryError::StorageError(format!("{}: {e}", path.display())))?;
        debug!("Stored memory {} at {:?}", id, path);

        self.cache.write().await.insert(id.clone(), doc);
        Ok(id)
    }

    async fn retrieve(&self, id: &str) -> Result<Option<MemoryEntry>, MemoryError> {
        Ok(self.cache.read().await.get(id).map(Document::to_entry))
    }

    async fn search(&self, query: MemoryQuery) -> Result<Vec<MemorySearchResult>, MemoryError> {
        let cache = self.cache.read().await;
        let mut results: Vec<MemorySearchResult> = cache
            .values()
            .filter(|doc| {
                query.tags.is_empty()
                    || query.tags.iter().any(|t| doc.front_matter.tags.contains(t))
            })
            .filter_map(|doc| {
                let score = Self::score(doc, &query.text);
                (score > 0.0 && score >= query.min_score).then(|| MemorySearchResult {
                    entry: doc.to_entry(),
                    score,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.entry.created_at.cmp(&a.entry.created_at))
        });
        results.truncate(query.limit);
        Ok(results)
    }

    async fn delete(&self, id: &str) -> Result<(), MemoryError> {
        if self.cache.write().await.remove(id).is_none() {
            return Err(MemoryError::NotFound(id.to_string()));
        }
        let path = self.path_for(id);
        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| MemoryError::StorageError(format!("{}: {e}", path.display())))?;
        }
        debug!("Deleted memory {}", id);
        Ok(())
    }

    async fn list(&self, limit: usize) -> Result<Vec<MemoryEntry>, MemoryError> {
        let cache = self.cache.read().await;
        let mut entries: Vec<MemoryEntry> = cache.values().map(Document::to_entry).collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit);
        Ok(entries)
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
