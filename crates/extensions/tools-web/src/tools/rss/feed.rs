//! RSS 2.0 / Atom parsing.

use feed_rs::model::{Entry, Link};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::html::to_text;

/// Description text kept per item.
const MAX_SUMMARY_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub summary: String,
    /// RFC 3339.
    #[serde(default)]
    pub published: Option<String>,
    /// Stable identity: guid/id, else one the parser derives from the item.
    pub id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFeed {
    pub title: String,
    pub items: Vec<FeedItem>,
}

/// Prefer `rel="alternate"` or no rel over self/edit links.
fn primary_link(links: &[Link]) -> Option<String> {
    links
        .iter()
        .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
        .or_else(|| links.first())
        .map(|l| l.href.trim().to_string())
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn item(entry: Entry) -> Option<FeedItem> {
    let title = entry
        .title
        .map(|t| to_text(&t.content))
        .unwrap_or_default();
    let link = primary_link(&entry.links).unwrap_or_default();
    if title.is_empty() && link.is_empty() {
        return None;
    }

    let summary = entry
        .summary
        .map(|t| t.content)
        .or_else(|| entry.content.and_then(|c| c.body))
        .map(|markup| truncate_chars(&to_text(&markup), MAX_SUMMARY_CHARS))
        .unwrap_or_default();
    let published = entry
        .published
        .or(entry.updated)
        .map(|date| date.to_rfc3339());
    let id = if entry.id.trim().is_empty() {
        link.clone()
    } else {
        entry.id
    };

    Some(FeedItem {
        title,
        link,
        summary,
        published,
        id,
    })
}

/// Parse an RSS or Atom document. Returns `None` if it is not a feed, or has
/// neither items nor a title.
pub fn parse_feed(xml: &str) -> Option<ParsedFeed> {
    let feed = match feed_rs::parser::parse(xml.as_bytes()) {
        Ok(feed) => feed,
        Err(e) => {
            debug!("Not a feed: {}", e);
            return None;
        }
    };

    let title = feed.title.map(|t| to_text(&t.content)).unwrap_or_default();
    let items: Vec<FeedItem> = feed.entries.into_iter().filter_map(item).collect();

    if items.is_empty() && title.is_empty() {
        return None;
    }
    Some(ParsedFeed { title, items })
}

#[cfg(test)]
#[path = "feed_tests.rs"]
mod tests;
