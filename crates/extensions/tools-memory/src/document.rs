//! On-disk format for memory entries.
//!
//! Each entry is a markdown file with a TOML front matter block fenced by
//! `+++` lines:
//!
//! ```text
//! +++
//! id = "mem_1a2b3c4d5e6f"
//! title = "Python preferences"
//! tags = ["python"]
//! created = "2025-03-14T12:00:00Z"
//! +++
//!
//! Use black with 100 columns.
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use frankie_protocols::error::MemoryError;
use frankie_protocols::memory::MemoryEntry;

const FENCE: &str = "+++";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created: DateTime<Utc>,
}

/// A parsed memory file.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub front_matter: FrontMatter,
    pub body: String,
}

impl Document {
    pub fn from_entry(id: impl Into<String>, entry: MemoryEntry) -> Self {
        Self {
            front_matter: FrontMatter {
                id: id.into(),
                title: entry.title,
                tags: entry.tags,
                created: entry.created_at,
            },
            body: entry.content,
        }
    }

    pub fn to_entry(&self) -> MemoryEntry {
        MemoryEntry {
            id: Some(self.front_matter.id.clone()),
            title: self.front_matter.title.clone(),
            content: self.body.clone(),
            tags: self.front_matter.tags.clone(),
            created_at: self.front_matter.created,
        }
    }

    pub fn parse(text: &str) -> Result<Self, MemoryError> {
        let text = text.trim_start();
        let rest = text.strip_prefix(FENCE).ok_or_else(|| {
            MemoryError::SerializationError("missing opening +++ fence".to_string())
        })?;
        let end = rest.find("\n+++").ok_or_else(|| {
            MemoryError::SerializationError("missing closing +++ fence".to_string())
        })?;

        let front_matter: FrontMatter = toml::from_str(&rest[..end])
            .map_err(|e| MemoryError::SerializationError(e.to_string()))?;
        let body = rest[end + 1 + FENCE.len()..].trim().to_string();

        Ok(Self { front_matter, body })
    }

    pub fn render(&self) -> Result<String, MemoryError> {
        let header = toml::to_string(&self.front_matter)
            .map_err(|e| MemoryError::SerializationError(e.to_string()))?;
        Ok(format!("{FENCE}\n{header}{FENCE}\n\n{}\n", self.body))
    }

    /// File name for an id, with anything outside `[A-Za-z0-9_-]` replaced.
    pub fn file_name(id: &str) -> String {
        let safe: String = id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        format!("{safe}.md")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Document {
        let mut entry = MemoryEntry::new("Python preferences", "Use black with 100 columns.")
            .with_tags(vec!["python".to_string(), "style".to_string()]);
        entry.created_at = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        Document::from_entry("mem_abc", entry)
    }

    #[test]
    fn test_render_layout() {
        let text = sample().render().unwrap();
        assert!(text.starts_with("+++\n"));
        assert!(text.contains("id = \"mem_abc\""));
        assert!(text.contains("title = \"Python preferences\""));
        assert!(text.trim_end().ends_with("Use black with 100 columns."));
    }

    #[test]
    fn test_parse_rendered() {
        let doc = sample();
        let parsed = Document::parse(&doc.render().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_parse_hand_written() {
        let text = "+++\nid = \"n1\"\ncreated = \"2024-01-02T03:04:05Z\"\n+++\nline one\nline two\n";
        let doc = Document::parse(text).unwrap();
        assert_eq!(doc.front_matter.id, "n1");
        assert!(doc.front_matter.title.is_empty());
        assert!(doc.front_matter.tags.is_empty());
        assert_eq!(doc.body, "line one\nline two");
    }

    #[test]
    fn test_parse_rejects_missing_fences() {
        assert!(Document::parse("just text").is_err());
        assert!(Document::parse("+++\nid = \"x\"\n").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        let err = Document::parse("+++\nid = \n+++\nbody").unwrap_err();
        assert!(matches!(err, MemoryError::SerializationError(_)));
    }

    #[test]
    fn test_file_name_sanitized() {
        assert_eq!(Document::file_name("mem_01"), "mem_01.md");
        assert_eq!(Document::file_name("../etc/passwd"), "___etc_passwd.md");
    }
}
