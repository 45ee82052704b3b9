//! Current date and time.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::Deserialize;

use frankie_protocols::error::ToolError;
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult, parse_params};

#[derive(Debug, Deserialize)]
struct TimeParams {
    /// "UTC", "local", or a fixed offset such as "+05:30".
    #[serde(default = "default_timezone")]
    timezone: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

pub struct CurrentTimeTool {
    definition: ToolDefinition,
}

impl CurrentTimeTool {
    pub fn new() -> Self {
        Self {
            definition: ToolDefinition::new(
                "current_time",
                "Current Time",
                "Get the current date and time in ISO 8601 format",
            )
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "timezone": {
                        "type": "string",
                        "description": "\"UTC\" (default), \"local\", or an offset like \"+05:30\""
                    }
                }
            })),
        }
    }
}

impl Default for CurrentTimeTool {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `now` in the requested zone.
fn format_time(now: DateTime<Utc>, timezone: &str) -> Result<String, ToolError> {
    let zone = timezone.trim();
    if zone.eq_ignore_ascii_case("utc") || zone.eq_ignore_ascii_case("z") {
        return Ok(now.to_rfc3339());
    }
    if zone.eq_ignore_ascii_case("local") {
        return Ok(now.with_timezone(&Local).to_rfc3339());
    }
    let offset: FixedOffset = zone.parse().map_err(|_| {
        ToolError::InvalidParameters(format!(
            "unknown timezone '{zone}'; use UTC, local, or an offset like +05:30"
        ))
    })?;
    Ok(now.with_timezone(&offset).to_rfc3339())
}

#[async_trait]
impl Tool for CurrentTimeTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: TimeParams = parse_params(params)?;
        Ok(ToolResult::success(format_time(Utc::now(), &params.timezone)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_utc() {
        assert_eq!(format_time(noon(), "UTC").unwrap(), "2025-03-14T12:00:00+00:00");
        assert_eq!(format_time(noon(), " utc ").unwrap(), "2025-03-14T12:00:00+00:00");
    }

    #[test]
    fn test_format_fixed_offset() {
        assert_eq!(format_time(noon(), "+05:30").unwrap(), "2025-03-14T17:30:00+05:30");
    }

    #[test]
    fn test_unknown_zone_rejected() {
        let err = format_time(noon(), "Mars/Olympus").unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameters(_)));
    }

    #[tokio::test]
    async fn test_execute_defaults_to_utc() {
        let tool = CurrentTimeTool::new();
        let ctx = ToolContext::new("t", std::env::temp_dir());
        let result = tool.execute(serde_json::json!({}), ctx).await.unwrap();
        assert!(result.success);
        assert!(result.content.ends_with("+00:00"));
    }
}
