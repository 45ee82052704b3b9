//! Per-REPL session: one call to [`Session::handle`] per input line.
//!
//! Order of precedence for a line: built-in commands (which also discard a
//! pending research topic), then a pending research topic, then shortcuts,
//! and finally orchestrator dispatch. While a topic is pending only the exact
//! `research mode` phrase restarts setup; any other text is the topic.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use frankie_protocols::tool::{Tool, ToolContext};

use crate::command::Command;
use crate::dispatch::Dispatch;
use crate::error::OrchestratorError;
use crate::macros::MacroExecutor;
use crate::research::{Prompter, ResearchState, ResearchWorkflow};
use crate::shortcuts::{MacroId, match_shortcut, normalize};
use crate::turn::{Notice, Reply, Turn};

/// Shown when an empty line arrives while a topic is pending.
pub const BLANK_TOPIC_WARNING: &str = "💭 Please enter a research topic, or 'help' to leave research mode.";

/// Conversation state for one REPL run.
pub struct Session {
    id: String,
    state: ResearchState,
    dispatch: Dispatch,
    macros: Arc<MacroExecutor>,
    research: ResearchWorkflow,
    shell: Arc<dyn Tool>,
    work_dir: PathBuf,
}

impl Session {
    /// Create an idle session. `shell` runs `!command` lines in `work_dir`.
    pub fn new(
        dispatch: Dispatch,
        macros: Arc<MacroExecutor>,
        research: ResearchWorkflow,
        shell: Arc<dyn Tool>,
        work_dir: PathBuf,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            state: ResearchState::Idle,
            dispatch,
            macros,
            research,
            shell,
            work_dir,
        }
    }

    /// Random id used to tag log lines and tool contexts.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current research state.
    pub fn state(&self) -> ResearchState {
        self.state
    }

    /// Where free text goes when no shortcut matches.
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Handle one input line. Failures come back as [`Turn::Failed`]; the
    /// session stays usable afterwards.
    pub async fn handle(&mut self, input: &str, prompter: &dyn Prompter) -> Turn {
        let command = Command::parse(input);
        debug!(session = %self.id, "Command: {:?}", command);

        if command.clears_research() && self.state == ResearchState::AwaitingTopic {
            info!("Research topic discarded by {:?}", command);
            self.state = ResearchState::Idle;
        }

        match command {
            Command::Exit => Turn::Exit,
            Command::Help => Turn::Help,
            Command::Clear => Turn::Clear,
            Command::Shortcuts => Turn::Shortcuts,
            Command::Shell(cmd) if cmd.is_empty() => Turn::Ignored,
            Command::Shell(cmd) => self.shell(cmd).await,
            Command::Blank if self.state == ResearchState::AwaitingTopic => Turn::Reply(
                Reply::new("🔬 Research Mode")
                    .notice(Notice::Warning(BLANK_TOPIC_WARNING.to_string())),
            ),
            Command::Blank => Turn::Blank,
            Command::Text(text) => match self.text(&text, prompter).await {
                Ok(reply) => Turn::Reply(reply),
                Err(e) => Turn::Failed(e),
            },
        }
    }

    async fn text(&mut self, text: &str, prompter: &dyn Prompter) -> Result<Reply, OrchestratorError> {
        if self.state == ResearchState::AwaitingTopic {
            if normalize(text) == MacroId::ResearchMode.canonical() {
                return self.research.setup(&mut self.state).await;
            }
            return self.research.topic(text, &mut self.state, prompter).await;
        }
        match match_shortcut(text) {
            Some(MacroId::ResearchMode) => self.research.setup(&mut self.state).await,
            Some(id) => self.run_macro(id).await,
            None => {
                let answer = self.dispatch.send(text).await?;
                Ok(Reply::new(self.dispatch.target().descriptor().name.clone()).with_text(answer))
            }
        }
    }

    async fn run_macro(&self, id: MacroId) -> Result<Reply, OrchestratorError> {
        info!("Shortcut matched: {}", id);
        let report = self
            .macros
            .run(id)
            .await
            .map_err(|source| OrchestratorError::Macro {
                name: id.to_string(),
                source,
            })?;
        let mut reply = Reply::new(format!("⚡ {id}")).with_text(report.message.clone());
        reply
            .notices
            .extend(report.failures.iter().map(|f| Notice::Warning(f.to_string())));
        Ok(reply)
    }

    async fn shell(&self, command: String) -> Turn {
        info!("Shell escape: {}", command);
        let ctx = ToolContext::new(self.id.clone(), self.work_dir.clone());
        match self.shell.execute(json!({ "command": command }), ctx).await {
            Ok(result) => Turn::Shell {
                command,
                success: result.success,
                output: result.into_text(),
            },
            Err(e) => {
                warn!("Shell escape failed: {}", e);
                Turn::Failed(e.into())
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
