//! Text recognition through the `tesseract` CLI.
//!
//! The PNG is piped to `tesseract stdin stdout tsv`, which reports one row
//! per recognised word with its bounding box. Label lookup runs on those rows.

use std::io::Write;
use std::process::{Command, Stdio};

use serde::Serialize;
use tracing::debug;

use frankie_protocols::error::AutomationError;

/// One recognised word, in image pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OcrWord {
    pub text: String,
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    pub confidence: f32,
    #[serde(skip)]
    line: (u32, u32, u32),
}

impl OcrWord {
    pub fn center(&self) -> (i32, i32) {
        (self.left + self.width / 2, self.top + self.height / 2)
    }
}

/// Parse tesseract TSV output, keeping word rows (level 5) with text.
pub fn parse_tsv(tsv: &str) -> Vec<OcrWord> {
    tsv.lines()
        .skip_while(|l| l.starts_with("level"))
        .filter_map(|line| {
            let cols: Vec<&str> = line.split('\t').collect();
            if cols.len() < 12 || cols[0] != "5" {
                return None;
            }
            let text = cols[11..].join("\t").trim().to_string();
            if text.is_empty() {
                return None;
            }
            let num = |i: usize| cols[i].trim().parse::<i32>().ok();
            let key = |i: usize| cols[i].trim().parse::<u32>().ok();
            Some(OcrWord {
                text,
                left: num(6)?,
                top: num(7)?,
                width: num(8)?,
                height: num(9)?,
                confidence: cols[10].trim().parse::<f32>().unwrap_or(-1.0),
                line: (key(2)?, key(3)?, key(4)?),
            })
        })
        .collect()
}

/// Join words into text lines in reading order.
pub fn lines(words: &[OcrWord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut current = None;
    for word in words {
        if current == Some(word.line) {
            if let Some(last) = out.last_mut() {
                last.push(' ');
                last.push_str(&word.text);
            }
        } else {
            out.push(word.text.clone());
            current = Some(word.line);
        }
    }
    out
}

fn normalize(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Centre of the first on-screen occurrence of `label`, in image pixels.
///
/// Multi-word labels must appear as consecutive words on one line. A
/// single-word label also matches a word that contains it.
pub fn find_text(words: &[OcrWord], label: &str) -> Option<(i32, i32)> {
    let wanted: Vec<String> = label
        .split_whitespace()
        .map(normalize)
        .filter(|w| !w.is_empty())
        .collect();
    if wanted.is_empty() {
        return None;
    }

    if wanted.len() == 1 {
        let target = &wanted[0];
        return words
            .iter()
            .find(|w| normalize(&w.text) == *target)
            .or_else(|| words.iter().find(|w| normalize(&w.text).contains(target.as_str())))
            .map(OcrWord::center);
    }

    words.windows(wanted.len()).find_map(|window| {
        let same_line = window.iter().all(|w| w.line == window[0].line);
        let matches = window
            .iter()
            .zip(&wanted)
            .all(|(w, target)| normalize(&w.text) == *target);
        if !(same_line && matches) {
            return None;
        }
        let left = window.iter().map(|w| w.left).min()?;
        let top = window.iter().map(|w| w.top).min()?;
        let right = window.iter().map(|w| w.left + w.width).max()?;
        let bottom = window.iter().map(|w| w.top + w.height).max()?;
        Some(((left + right) / 2, (top + bottom) / 2))
    })
}

/// Runs tesseract. Blocking.
#[derive(Debug, Clone)]
pub struct OcrEngine {
    binary: String,
    language: String,
}

impl OcrEngine {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            binary: "tesseract".to_string(),
            language: language.into(),
        }
    }

    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn recognize_png(&self, png: &[u8]) -> Result<Vec<OcrWord>, AutomationError> {
        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout", "-l", &self.language, "--psm", "11", "tsv"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    AutomationError::Unavailable(format!(
                        "{} is not installed (install tesseract-ocr)",
                        self.binary
                    ))
                } else {
                    AutomationError::Ocr(e.to_string())
                }
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(png)
                .map_err(|e| AutomationError::Ocr(format!("failed to send image: {e}")))?;
        }
        let output = child
            .wait_with_output()
            .map_err(|e| AutomationError::Ocr(e.to_string()))?;
        if !output.status.success() {
            return Err(AutomationError::Ocr(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let words = parse_tsv(&String::from_utf8_lossy(&output.stdout));
        debug!("OCR recognised {} words", words.len());
        Ok(words)
    }
}

#[cfg(test)]
#[path = "ocr_tests.rs"]
mod tests;
