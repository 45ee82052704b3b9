//! Feed archive on disk.
//!
//! Layout under the storage directory:
//! - `subscriptions.json`: the list of subscribed feeds
//! - `<feed id>.json`: archived items for one feed, newest first

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use frankie_protocols::error::ToolError;

use super::feed::FeedItem;

const SUBSCRIPTIONS_FILE: &str = "subscriptions.json";

/// Items kept per feed.
pub const MAX_ARCHIVED_ITEMS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub url: String,
    pub title: String,
    pub added: DateTime<Utc>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

pub struct FeedStore {
    root: PathBuf,
}

fn io_err(path: &Path, e: impl std::fmt::Display) -> ToolError {
    ToolError::ExecutionFailed(format!("{}: {e}", path.display()))
}

/// Feed id from a title or URL: lowercase alphanumerics joined by `-`.
pub fn feed_id(source: &str) -> String {
    let slug = source
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    let slug: String = slug.chars().take(48).collect();
    if slug.is_empty() {
        "feed".to_string()
    } else {
        slug.trim_end_matches('-').to_string()
    }
}

impl FeedStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn read_json<T: serde::de::DeserializeOwned + Default>(
        &self,
        path: &Path,
    ) -> Result<T, ToolError> {
        match fs::read_to_string(path).await {
            Ok(text) => serde_json::from_str(&text).map_err(|e| io_err(path, e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(io_err(path, e)),
        }
    }

    async fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), ToolError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| io_err(&self.root, e))?;
        let text = serde_json::to_string_pretty(value).map_err(|e| io_err(path, e))?;
        fs::write(path, text).await.map_err(|e| io_err(path, e))
    }

    pub async fn subscriptions(&self) -> Result<Vec<Subscription>, ToolError> {
        self.read_json(&self.root.join(SUBSCRIPTIONS_FILE)).await
    }

    async fn save_subscriptions(&self, subs: &[Subscription]) -> Result<(), ToolError> {
        self.write_json(&self.root.join(SUBSCRIPTIONS_FILE), &subs).await
    }

    pub async fn find(&self, id: &str) -> Result<Option<Subscription>, ToolError> {
        Ok(self.subscriptions().await?.into_iter().find(|s| s.id == id))
    }

    /// Add a subscription. Returns the existing one if the URL is already subscribed.
    pub async fn subscribe(&self, url: &str, title: &str) -> Result<Subscription, ToolError> {
        let mut subs = self.subscriptions().await?;
        if let Some(existing) = subs.iter().find(|s| s.url == url) {
            return Ok(existing.clone());
        }

        let base = feed_id(if title.is_empty() { url } else { title });
        let mut id = base.clone();
        let mut n = 2;
        while subs.iter().any(|s| s.id == id) {
            id = format!("{base}-{n}");
            n += 1;
        }

        let sub = Subscription {
            id,
            url: url.to_string(),
            title: title.to_string(),
            added: Utc::now(),
            last_updated: None,
        };
        subs.push(sub.clone());
        self.save_subscriptions(&subs).await?;
        debug!("Subscribed {} ({})", sub.id, sub.url);
        Ok(sub)
    }

    /// Remove a subscription and its archive. Returns whether it existed.
    pub async fn unsubscribe(&self, id: &str) -> Result<bool, ToolError> {
        let mut subs = self.subscriptions().await?;
        let before = subs.len();
        subs.retain(|s| s.id != id);
        if subs.len() == before {
            return Ok(false);
        }
        self.save_subscriptions(&subs).await?;

        let archive = self.items_path(id);
        if archive.exists() {
            fs::remove_file(&archive)
                .await
                .map_err(|e| io_err(&archive, e))?;
        }
        Ok(true)
    }

    fn items_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", feed_id(id)))
    }

    pub async fn items(&self, id: &str) -> Result<Vec<FeedItem>, ToolError> {
        self.read_json(&self.items_path(id)).await
    }

    /// Merge freshly fetched items into the archive. Returns how many were new.
    pub async fn merge_items(&self, id: &str, fresh: Vec<FeedItem>) -> Result<usize, ToolError> {
        let existing = self.items(id).await?;
        let mut merged: Vec<FeedItem> = fresh
            .into_iter()
            .filter(|item| !existing.iter().any(|e| e.id == item.id))
            .collect();
        let added = merged.len();
        merged.extend(existing);
        merged.truncate(MAX_ARCHIVED_ITEMS);
        self.write_json(&self.items_path(id), &merged).await?;

        let mut subs = self.subscriptions().await?;
        if let Some(sub) = subs.iter_mut().find(|s| s.id == id) {
            sub.last_updated = Some(Utc::now());
            self.save_subscriptions(&subs).await?;
        }
        Ok(added)
    }
}
