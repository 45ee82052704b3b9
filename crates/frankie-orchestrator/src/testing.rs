//! Hand-written fakes shared by the unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use frankie_protocols::agent::{Agent, AgentDescriptor};
use frankie_protocols::automation::{Automation, MouseButton, ScreenPoint};
use frankie_protocols::error::{AgentError, AutomationError, ToolError};
use frankie_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};
use frankie_protocols::types::RiskLevel;

/// Records every primitive as a short string such as `click (10, 20) left`.
#[derive(Default)]
pub struct RecordingAutomation {
    calls: Mutex<Vec<String>>,
    visible: HashMap<String, ScreenPoint>,
    fail_apps: Vec<String>,
    blind: bool,
}

impl RecordingAutomation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn showing(mut self, label: &str, x: i32, y: i32) -> Self {
        self.visible.insert(label.to_string(), ScreenPoint::new(x, y));
        self
    }

    pub fn failing_app(mut self, app: &str) -> Self {
        self.fail_apps.push(app.to_string());
        self
    }

    /// `locate_text` errors instead of answering.
    pub fn blind(mut self) -> Self {
        self.blind = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl Automation for RecordingAutomation {
    async fn open_app(&self, app: &str) -> Result<(), AutomationError> {
        self.record(format!("open {app}"));
        if self.fail_apps.iter().any(|a| a == app) {
            return Err(AutomationError::AppLaunch {
                app: app.to_string(),
                reason: "not installed".to_string(),
            });
        }
        Ok(())
    }

    async fn move_to(&self, point: ScreenPoint) -> Result<(), AutomationError> {
        self.record(format!("move {point}"));
        Ok(())
    }

    async fn click(&self, point: ScreenPoint, button: MouseButton) -> Result<(), AutomationError> {
        let button = serde_json::to_value(button)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        self.record(format!("click {point} {button}"));
        Ok(())
    }

    async fn double_click(&self, point: ScreenPoint) -> Result<(), AutomationError> {
        self.record(format!("double-click {point}"));
        Ok(())
    }

    async fn type_text(&self, text: &str) -> Result<(), AutomationError> {
        self.record(format!("type {text}"));
        Ok(())
    }

    async fn hotkey(&self, keys: &[String]) -> Result<(), AutomationError> {
        self.record(format!("hotkey {}", keys.join("+")));
        Ok(())
    }

    async fn press(&self, key: &str) -> Result<(), AutomationError> {
        self.record(format!("press {key}"));
        Ok(())
    }

    async fn locate_text(&self, label: &str) -> Result<Option<ScreenPoint>, AutomationError> {
        if self.blind {
            return Err(AutomationError::Ocr("tesseract missing".to_string()));
        }
        Ok(self.visible.get(label).copied())
    }
}

/// Answers from a fixed reply and remembers every query.
pub struct ScriptedAgent {
    descriptor: AgentDescriptor,
    reply: Result<String, String>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedAgent {
    pub fn new(id: &str, reply: &str) -> Arc<Self> {
        Arc::new(Self {
            descriptor: AgentDescriptor::new(id, id, "scripted"),
            reply: Ok(reply.to_string()),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(id: &str, message: &str) -> Arc<Self> {
        Arc::new(Self {
            descriptor: AgentDescriptor::new(id, id, "scripted"),
            reply: Err(message.to_string()),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl Agent for ScriptedAgent {
    fn descriptor(&self) -> &AgentDescriptor {
        &self.descriptor
    }

    async fn invoke(&self, query: &str) -> Result<String, AgentError> {
        self.queries.lock().push(query.to_string());
        self.reply.clone().map_err(AgentError::ExecutionFailed)
    }
}

/// Pops pre-set answers; `None` once they run out.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    pub questions: Mutex<Vec<String>>,
    pub shown: Mutex<Vec<(String, String)>>,
}

impl ScriptedPrompter {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            ..Self::default()
        }
    }
}

impl crate::research::Prompter for ScriptedPrompter {
    fn show(&self, title: &str, body: &str) {
        self.shown.lock().push((title.to_string(), body.to_string()));
    }

    fn ask(&self, question: &str) -> Option<String> {
        self.questions.lock().push(question.to_string());
        self.answers.lock().pop_front()
    }
}

/// Stands in for the `exec` tool and echoes the command back.
pub struct EchoShell {
    definition: ToolDefinition,
    pub commands: Mutex<Vec<String>>,
}

impl EchoShell {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            definition: ToolDefinition::new("exec", "Exec", "echo")
                .with_risk_level(RiskLevel::High),
            commands: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl Tool for EchoShell {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: Value, _ctx: ToolContext) -> Result<ToolResult, ToolError> {
        let command = params["command"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidParameters("command".to_string()))?;
        self.commands.lock().push(command.to_string());
        if command.starts_with("false") {
            return Ok(ToolResult::error("Command exited with code 1"));
        }
        Ok(ToolResult::success(format!("ran: {command}")))
    }
}
