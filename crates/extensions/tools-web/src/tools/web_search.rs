//! Web search through DuckDuckGo's HTML endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use frankie_protocols::error::ToolError;
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};
use frankie_protocols::types::RiskLevel;

use super::http_request::USER_AGENT;
use crate::html::element_text;

const DEFAULT_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

#[derive(Debug, Deserialize)]
struct SearchParams {
    query: String,
    #[serde(default = "default_max_results")]
    max_results: usize,
}

fn default_max_results() -> usize {
    8
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// DuckDuckGo wraps result links as `//duckduckgo.com/l/?uddg=<target>`.
fn unwrap_redirect(href: &str) -> String {
    let absolute = if href.starts_with("//") {
        format!("https:{href}")
    } else {
        href.to_string()
    };
    url::Url::parse(&absolute)
        .ok()
        .and_then(|u| {
            u.query_pairs()
                .find(|(k, _)| k == "uddg")
                .map(|(_, v)| v.into_owned())
        })
        .unwrap_or(absolute)
}

/// Each `.result` block holds one `a.result__a` link and an optional snippet.
pub(crate) fn parse_results(html: &str, max: usize) -> Vec<SearchHit> {
    let (Ok(result), Ok(link), Ok(snippet)) = (
        Selector::parse(".result"),
        Selector::parse("a.result__a"),
        Selector::parse(".result__snippet"),
    ) else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    document
        .select(&result)
        .filter_map(|block| {
            let anchor = block.select(&link).next()?;
            let title = element_text(anchor);
            if title.is_empty() {
                return None;
            }
            Some(SearchHit {
                title,
                url: unwrap_redirect(anchor.value().attr("href").unwrap_or_default()),
                snippet: block
                    .select(&snippet)
                    .next()
                    .map(element_text)
                    .unwrap_or_default(),
            })
        })
        .take(max)
        .collect()
}

pub struct WebSearchTool {
    definition: ToolDefinition,
    client: Client,
    endpoint: String,
}

impl WebSearchTool {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(20))
            .build()
            .unwrap_or_else(|_| Client::new());

        let definition = ToolDefinition::new(
            "web_search",
            "Web Search",
            "Search the web and return titles, URLs and snippets",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "query": { "type": "string", "description": "The search query" },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of results",
                    "default": 8
                }
            },
            "required": ["query"]
        }))
        .with_risk_level(RiskLevel::Low);

        Self {
            definition,
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Point the tool at a different results page (tests, mirrors).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl Default for WebSearchTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: SearchParams = parse_params(params)?;
        let query = params.query.trim();
        if query.is_empty() {
            return Err(ToolError::InvalidParameters("Query cannot be empty".to_string()));
        }

        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("q", query)])
            .send()
            .await
            .map_err(|e| ToolError::ExecutionFailed(format!("Search request failed: {e}")))?;
        if !response.status().is_success() {
            return Ok(ToolResult::error(format!(
                "Search failed with HTTP {}",
                response.status().as_u16()
            )));
        }
        let html = response
            .text()
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        let hits = parse_results(&html, params.max_results.max(1));
        debug!("web_search: {:?} -> {} hits", query, hits.len());

        let output = serde_json::json!({
            "query": query,
            "count": hits.len(),
            "results": hits,
        });
        let rendered = serde_json::to_string_pretty(&output)
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
        Ok(ToolResult::success(rendered))
    }
}
