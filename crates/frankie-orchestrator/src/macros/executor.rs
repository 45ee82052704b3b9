//! Runs macro scripts against an [`Automation`] backend.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use frankie_protocols::automation::{Automation, MouseButton, ScreenPoint};
use frankie_protocols::error::AutomationError;

use crate::error::MacroError;
use crate::shortcuts::MacroId;

use super::catalog::{self, MacroScript};
use super::step::{AutomationStep, StepAction, UiAnchor};
use super::verify::{StepVerdict, StepVerifier};

/// Upper bound for one scaled delay.
pub(crate) const MAX_STEP_DELAY: Duration = Duration::from_secs(60);

/// A step that failed but did not stop the macro.
#[derive(Debug, Clone, PartialEq)]
pub struct StepFailure {
    pub index: usize,
    pub description: String,
    pub error: String,
}

impl fmt::Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step {} ({}) failed: {}",
            self.index, self.description, self.error
        )
    }
}

#[derive(Debug, Clone)]
pub struct MacroReport {
    pub name: String,
    pub message: String,
    pub steps_run: usize,
    pub failures: Vec<StepFailure>,
}

impl MacroReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct MacroExecutor {
    automation: Arc<dyn Automation>,
    verifier: Arc<dyn StepVerifier>,
    delay_scale: f64,
}

impl MacroExecutor {
    pub fn new(automation: Arc<dyn Automation>, verifier: Arc<dyn StepVerifier>) -> Self {
        Self {
            automation,
            verifier,
            delay_scale: 1.0,
        }
    }

    /// Multiply every scripted delay; 0 disables sleeping.
    pub fn with_delay_scale(mut self, scale: f64) -> Self {
        self.delay_scale = scale.max(0.0);
        self
    }

    pub async fn run(&self, id: MacroId) -> Result<MacroReport, MacroError> {
        self.run_script(&catalog::script(id)).await
    }

    pub async fn run_research_layout(&self) -> Result<MacroReport, MacroError> {
        self.run_script(&catalog::research_layout()).await
    }

    pub async fn run_document_setup(&self) -> Result<MacroReport, MacroError> {
        self.run_script(&catalog::document_setup()).await
    }

    pub async fn run_script(&self, script: &MacroScript) -> Result<MacroReport, MacroError> {
        info!(
            "Running macro {} ({} steps)",
            script.name,
            script.steps.len()
        );
        let mut report = MacroReport {
            name: script.name.to_string(),
            message: script.message.to_string(),
            steps_run: 0,
            failures: Vec::new(),
        };

        for (index, step) in script.steps.iter().enumerate() {
            debug!(macro_name = script.name, index, "{}", step.description);
            let outcome = self.perform(step).await;
            report.steps_run += 1;

            let verdict = self.verifier.verify(index, step, &outcome);
            if let Err(source) = outcome {
                warn!(
                    macro_name = script.name,
                    index, "Step '{}' failed: {}", step.description, source
                );
                if verdict == StepVerdict::Abort {
                    return Err(MacroError::StepFailed {
                        index,
                        description: step.description.clone(),
                        source,
                    });
                }
                report.failures.push(StepFailure {
                    index,
                    description: step.description.clone(),
                    error: source.to_string(),
                });
            }

            self.sleep(step.delay_after).await;
        }

        info!(
            "Macro {} finished: {} steps, {} failed",
            script.name,
            report.steps_run,
            report.failures.len()
        );
        Ok(report)
    }

    async fn perform(&self, step: &AutomationStep) -> Result<(), AutomationError> {
        match &step.action {
            StepAction::OpenApp(app) => self.automation.open_app(app).await,
            StepAction::MoveTo(anchor) => {
                let point = self.resolve(anchor).await?;
                self.automation.move_to(point).await
            }
            StepAction::Click(anchor) => {
                let point = self.resolve(anchor).await?;
                self.automation.click(point, MouseButton::Left).await
            }
            StepAction::DoubleClick(anchor) => {
                let point = self.resolve(anchor).await?;
                self.automation.double_click(point).await
            }
            StepAction::TypeText(text) => self.automation.type_text(text).await,
            StepAction::Hotkey(keys) => self.automation.hotkey(keys).await,
            StepAction::Press(key) => self.automation.press(key).await,
            StepAction::Pause => Ok(()),
        }
    }

    /// Text anchors go through OCR; a miss uses the fallback point if there is one.
    async fn resolve(&self, anchor: &UiAnchor) -> Result<ScreenPoint, AutomationError> {
        match anchor {
            UiAnchor::Point { x, y } => Ok(ScreenPoint::new(*x, *y)),
            UiAnchor::Text { label, fallback } => {
                match (self.automation.locate_text(label).await, fallback) {
                    (Ok(Some(point)), _) => Ok(point),
                    (Ok(None), Some(point)) => {
                        warn!("\"{}\" not found on screen; using fallback {}", label, point);
                        Ok(*point)
                    }
                    (Ok(None), None) => Err(AutomationError::AnchorNotFound(label.clone())),
                    (Err(e), Some(point)) => {
                        warn!("Could not read the screen ({}); using fallback {}", e, point);
                        Ok(*point)
                    }
                    (Err(e), None) => Err(e),
                }
            }
        }
    }

    async fn sleep(&self, delay: Duration) {
        if delay.is_zero() || self.delay_scale == 0.0 {
            return;
        }
        let scaled = Duration::try_from_secs_f64(delay.as_secs_f64() * self.delay_scale)
            .unwrap_or(MAX_STEP_DELAY)
            .min(MAX_STEP_DELAY);
        tokio::time::sleep(scaled).await;
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
