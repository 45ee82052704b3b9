//! Two-turn research workflow.
//!
//! `research mode` lays out the browser and notes windows and moves the
//! session to [`ResearchState::AwaitingTopic`]. The next line of text is the
//! topic: the state drops back to `Idle` before anything else happens, the
//! browser agent researches it once, and the user decides whether the result
//! is typed into a new Quip document.

use std::sync::Arc;

use tracing::{info, warn};

use frankie_protocols::agent::Agent;

use crate::error::OrchestratorError;
use crate::macros::{DOCUMENT_SETUP, MacroExecutor, RESEARCH_LAYOUT, RESEARCH_PROMPT};
use crate::turn::{Notice, Reply};

pub const DOCUMENT_QUESTION: &str = "📝 Document this research in Quip? (y/n)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResearchState {
    #[default]
    Idle,
    AwaitingTopic,
}

/// Interactive questions asked in the middle of a turn.
pub trait Prompter: Send + Sync {
    /// Display intermediate output before a question.
    fn show(&self, title: &str, body: &str);

    /// Ask and wait for a line; `None` when input is closed.
    fn ask(&self, question: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
    Unclear,
}

fn parse_answer(answer: Option<&str>) -> Answer {
    match answer.map(|a| a.trim().to_lowercase()).as_deref() {
        Some("y") | Some("yes") => Answer::Yes,
        Some("n") | Some("no") => Answer::No,
        _ => Answer::Unclear,
    }
}

pub struct ResearchWorkflow {
    browser: Arc<dyn Agent>,
    computer: Arc<dyn Agent>,
    macros: Arc<MacroExecutor>,
    search_engine: String,
}

impl ResearchWorkflow {
    pub fn new(
        browser: Arc<dyn Agent>,
        computer: Arc<dyn Agent>,
        macros: Arc<MacroExecutor>,
        search_engine: impl Into<String>,
    ) -> Self {
        Self {
            browser,
            computer,
            macros,
            search_engine: search_engine.into(),
        }
    }

    /// Prepare the research environment. Safe to repeat while a topic is pending.
    pub async fn setup(&self, state: &mut ResearchState) -> Result<Reply, OrchestratorError> {
        info!("Research setup (state {:?})", state);
        let query = format!(
            "Open the browser and navigate to {} for research",
            self.search_engine
        );

        let first_try = match self.browser.invoke(&query).await {
            Ok(browser_reply) => self
                .macros
                .run_research_layout()
                .await
                .map(|report| (browser_reply, report))
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match first_try {
            Ok((browser_reply, report)) => {
                *state = ResearchState::AwaitingTopic;
                info!("Research state -> AwaitingTopic");
                let mut reply = Reply::new("🔬 Research Mode").with_text(browser_reply);
                reply
                    .notices
                    .extend(report.failures.iter().map(|f| Notice::Warning(f.to_string())));
                Ok(reply.notice(Notice::Info(RESEARCH_PROMPT.to_string())))
            }
            Err(first) => {
                warn!("Research setup failed ({}); retrying the layout alone", first);
                match self.macros.run_research_layout().await {
                    Ok(_) => {
                        *state = ResearchState::AwaitingTopic;
                        info!("Research state -> AwaitingTopic (browser skipped)");
                        Ok(Reply::new("🔬 Research Mode")
                            .notice(Notice::Warning(format!(
                                "⚠️ Browser setup skipped: {first}"
                            )))
                            .notice(Notice::Info(RESEARCH_PROMPT.to_string())))
                    }
                    Err(second) => {
                        *state = ResearchState::Idle;
                        Err(OrchestratorError::ResearchSetup(format!(
                            "{first}; {RESEARCH_LAYOUT} fallback: {second}"
                        )))
                    }
                }
            }
        }
    }

    /// Handle the line typed while a topic is pending.
    pub async fn topic(
        &self,
        topic: &str,
        state: &mut ResearchState,
        prompter: &dyn Prompter,
    ) -> Result<Reply, OrchestratorError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Ok(Reply::new("🔬 Research Mode").notice(Notice::Warning(
                "💭 Please name a topic to research.".to_string(),
            )));
        }

        *state = ResearchState::Idle;
        info!("Research state -> Idle; researching '{}'", topic);

        let query = format!(
            "Research the topic '{topic}' using {}. Summarize the key findings, \
             the most useful sources and any open questions.",
            self.search_engine
        );
        let findings = self.browser.invoke(&query).await?;
        prompter.show("🔬 Research Results", &findings);

        let answer = prompter.ask(DOCUMENT_QUESTION);
        let reply = Reply::new("🔬 Research Mode");
        match parse_answer(answer.as_deref()) {
            Answer::Yes => self.document(topic, &findings).await,
            Answer::No => Ok(reply.notice(Notice::Info(
                "Research complete. Nothing was documented.".to_string(),
            ))),
            Answer::Unclear => {
                warn!("Unclear documentation answer: {:?}", answer);
                Ok(reply.notice(Notice::Warning(
                    "⚠️ Please answer 'y' or 'n'. Skipping documentation.".to_string(),
                )))
            }
        }
    }

    async fn document(&self, topic: &str, findings: &str) -> Result<Reply, OrchestratorError> {
        info!("Documenting research on '{}'", topic);
        let report = self
            .macros
            .run_document_setup()
            .await
            .map_err(|source| OrchestratorError::Macro {
                name: DOCUMENT_SETUP.to_string(),
                source,
            })?;

        let query = format!(
            "A new Quip document is open with the cursor in it. Type a titled summary \
             of this research on '{topic}':\n\n{findings}"
        );
        let typed = self.computer.invoke(&query).await?;

        let mut reply = Reply::new("📝 Research Documented").with_text(typed);
        reply
            .notices
            .extend(report.failures.iter().map(|f| Notice::Warning(f.to_string())));
        Ok(reply.notice(Notice::Success(
            "✅ Research documented in Quip.".to_string(),
        )))
    }
}

#[cfg(test)]
#[path = "research_tests.rs"]
mod tests;
