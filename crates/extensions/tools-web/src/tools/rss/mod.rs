//! RSS/Atom feed tool with a local subscription archive.

mod feed;
mod store;

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use frankie_protocols::error::ToolError;
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};
use frankie_protocols::types::RiskLevel;

use super::http_request::{USER_AGENT, parse_http_url};
pub use feed::{FeedItem, ParsedFeed, parse_feed};
pub use store::{FeedStore, Subscription};

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
enum RssAction {
    /// Fetch a feed without subscribing.
    Fetch {
        url: String,
        #[serde(default = "default_max_entries")]
        max_entries: usize,
    },
    Subscribe {
        url: String,
        #[serde(default)]
        name: Option<String>,
    },
    Unsubscribe {
        feed_id: String,
    },
    List,
    /// Archived items of one subscription.
    Read {
        feed_id: String,
        #[serde(default = "default_max_entries")]
        max_entries: usize,
    },
    /// Refresh one subscription, or all when `feed_id` is absent.
    Update {
        #[serde(default)]
        feed_id: Option<String>,
    },
    /// Keyword search across every archive.
    Search {
        query: String,
        #[serde(default = "default_max_entries")]
        max_entries: usize,
    },
}

fn default_max_entries() -> usize {
    10
}

fn render_items(items: &[FeedItem]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut line = format!("{}. {}\n   {}", i + 1, item.title, item.link);
            if let Some(date) = &item.published {
                line.push_str(&format!("\n   {date}"));
            }
            if !item.summary.is_empty() {
                line.push_str(&format!("\n   {}", item.summary));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub struct RssTool {
    definition: ToolDefinition,
    client: Client,
    store: FeedStore,
}

impl RssTool {
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        let definition = ToolDefinition::new(
            "rss",
            "RSS",
            "Fetch RSS/Atom feeds, manage subscriptions, and search archived news",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "action": {
                    "type": "string",
                    "enum": ["fetch", "subscribe", "unsubscribe", "list", "read", "update", "search"]
                },
                "url": { "type": "string", "description": "Feed URL (fetch, subscribe)" },
                "name": { "type": "string", "description": "Display name (subscribe)" },
                "feed_id": { "type": "string", "description": "Subscription id (unsubscribe, read, update)" },
                "query": { "type": "string", "description": "Keywords (search)" },
                "max_entries": { "type": "integer", "description": "Maximum items to return (default 10)" }
            },
            "required": ["action"]
        }))
        .with_risk_level(RiskLevel::Medium);

        Self {
            definition,
            client,
            store: FeedStore::new(storage_path),
        }
    }

    pub fn store(&self) -> &FeedStore {
        &self.store
    }

    async fn download(&self, raw_url: &str) -> Result<ParsedFeed, ToolError> {
        let url = parse_http_url(raw_url)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ToolError::ExecutionFailed(format!("Feed request failed: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::ExecutionFailed(format!(
                "Feed {raw_url} returned HTTP {}",
                status.as_u16()
            )));
        }
        let body = response
            .text()
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
        parse_feed(&body).ok_or_else(|| {
            ToolError::ExecutionFailed(format!("{raw_url} is not an RSS or Atom feed"))
        })
    }

    async fn update(&self, sub: &Subscription) -> Result<usize, ToolError> {
        let feed = self.download(&sub.url).await?;
        let added = self.store.merge_items(&sub.id, feed.items).await?;
        debug!("Updated feed {}: {} new items", sub.id, added);
        Ok(added)
    }

    async fn run(&self, action: RssAction) -> Result<ToolResult, ToolError> {
        match action {
            RssAction::Fetch { url, max_entries } => {
                let feed = self.download(&url).await?;
                let items: Vec<FeedItem> = feed.items.into_iter().take(max_entries).collect();
                Ok(ToolResult::success(format!(
                    "{} ({} items)\n\n{}",
                    feed.title,
                    items.len(),
                    render_items(&items)
                )))
            }
            RssAction::Subscribe { url, name } => {
                let feed = self.download(&url).await?;
                let title = name
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| feed.title.clone());
                let sub = self.store.subscribe(&url, &title).await?;
                let added = self.store.merge_items(&sub.id, feed.items).await?;
                info!("Subscribed to {} as {}", url, sub.id);
                Ok(ToolResult::success(format!(
                    "Subscribed to \"{}\" (id: {}), archived {added} items",
                    sub.title, sub.id
                )))
            }
            RssAction::Unsubscribe { feed_id } => {
                if self.store.unsubscribe(&feed_id).await? {
                    Ok(ToolResult::success(format!("Unsubscribed from {feed_id}")))
                } else {
                    Ok(ToolResult::error(format!("No subscription with id {feed_id}")))
                }
            }
            RssAction::List => {
                let subs = self.store.subscriptions().await?;
                if subs.is_empty() {
                    return Ok(ToolResult::success("No feed subscriptions yet."));
                }
                let lines: Vec<String> = subs
                    .iter()
                    .map(|s| {
                        let updated = s
                            .last_updated
                            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                            .unwrap_or_else(|| "never".to_string());
                        format!("- {} | {} | {} | updated {}", s.id, s.title, s.url, updated)
                    })
                    .collect();
                Ok(ToolResult::success(lines.join("\n")))
            }
            RssAction::Read {
                feed_id,
                max_entries,
            } => {
                let Some(sub) = self.store.find(&feed_id).await? else {
                    return Ok(ToolResult::error(format!("No subscription with id {feed_id}")));
                };
                let items: Vec<FeedItem> = self
                    .store
                    .items(&sub.id)
                    .await?
                    .into_iter()
                    .take(max_entries)
                    .collect();
                if items.is_empty() {
                    return Ok(ToolResult::success(format!(
                        "No archived items for {}. Try the update action.",
                        sub.id
                    )));
                }
                Ok(ToolResult::success(format!(
                    "{}\n\n{}",
                    sub.title,
                    render_items(&items)
                )))
            }
            RssAction::Update { feed_id } => {
                let subs = self.store.subscriptions().await?;
                let targets: Vec<&Subscription> = match &feed_id {
                    Some(id) => subs.iter().filter(|s| &s.id == id).collect(),
                    None => subs.iter().collect(),
                };
                if targets.is_empty() {
                    return Ok(ToolResult::error(match feed_id {
                        Some(id) => format!("No subscription with id {id}"),
                        None => "No feed subscriptions to update.".to_string(),
                    }));
                }

                let mut report = Vec::new();
                for sub in targets {
                    match self.update(sub).await {
                        Ok(added) => report.push(format!("{}: {added} new", sub.id)),
                        Err(e) => {
                            warn!("Feed {} failed to update: {}", sub.id, e);
                            report.push(format!("{}: failed ({e})", sub.id));
                        }
                    }
                }
                Ok(ToolResult::success(report.join("\n")))
            }
            RssAction::Search { query, max_entries } => {
                let terms: Vec<String> =
                    query.split_whitespace().map(str::to_lowercase).collect();
                if terms.is_empty() {
                    return Err(ToolError::InvalidParameters("query must not be empty".into()));
                }
                let mut hits = Vec::new();
                for sub in self.store.subscriptions().await? {
                    for item in self.store.items(&sub.id).await? {
                        let text = format!("{} {}", item.title, item.summary).to_lowercase();
                        if terms.iter().all(|t| text.contains(t.as_str())) {
                            hits.push(item);
                        }
                    }
                }
                hits.truncate(max_entries);
                if hits.is_empty() {
                    return Ok(ToolResult::success(format!("No archived items match \"{query}\".")));
                }
                Ok(ToolResult::success(render_items(&hits)))
            }
        }
    }
}

#[async_trait]
impl Tool for RssTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let action: RssAction = parse_params(params)?;
        self.run(action).await
    }
}

#[cfg(test)]
#[path = "rss_tests.rs"]
mod tests;
