//! What one line of user input produced.
//!
//! The session never prints; the REPL renders these values.

use crate::error::OrchestratorError;

/// A one-line status message attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Success(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(s) | Notice::Success(s) | Notice::Warning(s) | Notice::Error(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Panel title, usually the agent or macro that answered.
    pub title: String,
    pub text: Option<String>,
    pub notices: Vec<Notice>,
}

impl Reply {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: None,
            notices: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }
}

#[derive(Debug)]
pub enum Turn {
    Exit,
    Help,
    Clear,
    Shortcuts,
    /// Empty input.
    Blank,
    /// Input that needs no output, such as a bare `!`.
    Ignored,
    Shell {
        command: String,
        success: bool,
        output: String,
    },
    Reply(Reply),
    Failed(OrchestratorError),
}

impl Turn {
    pub fn is_exit(&self) -> bool {
        matches!(self, Turn::Exit)
    }
}
