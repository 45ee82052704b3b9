//! Generic HTTP client tool.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize};
use tracing::debug;

use frankie_protocols::error::ToolError;
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};
use frankie_protocols::types::RiskLevel;

pub(crate) const USER_AGENT: &str = concat!("frankie/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct RequestParams {
    url: String,
    #[serde(default = "default_method")]
    method: String,
    #[serde(default)]
    headers: HashMap<String, String>,
    /// Raw body; ignored when `json` is set.
    body: Option<String>,
    json: Option<serde_json::Value>,
    #[serde(default = "default_timeout")]
    timeout: u64,
}

fn default_method() -> String {
    "GET".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[derive(Debug, Serialize)]
struct ResponseSummary {
    status: u16,
    url: String,
    content_type: Option<String>,
    body: String,
}

pub struct HttpRequestTool {
    definition: ToolDefinition,
    client: Client,
}

impl HttpRequestTool {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        let definition = ToolDefinition::new(
            "http_request",
            "HTTP Request",
            "Make an HTTP request and return the status and body",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "url": { "type": "string", "description": "Absolute http(s) URL" },
                "method": {
                    "type": "string",
                    "description": "GET, POST, PUT, PATCH, DELETE or HEAD",
                    "default": "GET"
                },
                "headers": { "type": "object", "description": "Extra request headers" },
                "body": { "type": "string", "description": "Raw request body" },
                "json": { "description": "JSON request body (sets Content-Type)" },
                "timeout": {
                    "type": "integer",
                    "description": "Timeout in seconds",
                    "default": 30
                }
            },
            "required": ["url"]
        }))
        .with_risk_level(RiskLevel::Medium);

        Self { definition, client }
    }
}

impl Default for HttpRequestTool {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_method(method: &str) -> Result<Method, ToolError> {
    match method.to_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "PATCH" => Ok(Method::PATCH),
        "DELETE" => Ok(Method::DELETE),
        "HEAD" => Ok(Method::HEAD),
        other => Err(ToolError::InvalidParameters(format!(
            "Unsupported method: {other}"
        ))),
    }
}

pub(crate) fn parse_http_url(raw: &str) -> Result<url::Url, ToolError> {
    let url = url::Url::parse(raw)
        .map_err(|e| ToolError::InvalidParameters(format!("Invalid URL '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ToolError::InvalidParameters(format!(
            "Unsupported URL scheme: {scheme}"
        ))),
    }
}

#[async_trait]
impl Tool for HttpRequestTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: RequestParams = parse_params(params)?;
        let url = parse_http_url(&params.url)?;
        let method = parse_method(&params.method)?;
        debug!("http_request: {} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .timeout(Duration::from_secs(params.timeout.max(1)));
        for (key, value) in &params.headers {
            request = request.header(key, value);
        }
        if let Some(json) = &params.json {
            request = request.json(json);
        } else if let Some(body) = params.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ToolError::Timeout(params.timeout)
            } else {
                ToolError::ExecutionFailed(format!("Request failed: {e}"))
            }
        })?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| ToolError::ExecutionFailed(format!("Failed to read body: {e}")))?;

        let summary = ResponseSummary {
            status,
            url: final_url,
            content_type,
            body,
        };
        let rendered = serde_json::to_string_pretty(&summary)
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        if status >= 400 {
            return Ok(ToolResult::error(format!("HTTP {status}\n{rendered}")));
        }
        Ok(ToolResult::success(rendered))
    }
}

#[cfg(test)]
#[path = "http_request_tests.rs"]
mod tests;
