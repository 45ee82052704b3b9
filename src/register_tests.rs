use super::*;

use async_trait::async_trait;
use parking_lot::Mutex;

use frankie_config::VerificationPolicy;
use frankie_orchestrator::{Notice, Prompter, ResearchState};
use frankie_protocols::error::{AutomationError, ProviderError};
use frankie_protocols::provider::{CompletionRequest, CompletionResponse, ModelDefinition};
use frankie_protocols::{MouseButton, ScreenPoint};
use frankie_runtime::AgentLoopConfig;

/// Every completion fails, as when the API is unreachable.
struct DownProvider;

#[async_trait]
impl LLMProvider for DownProvider {
    fn id(&self) -> &str {
        "down"
    }

    fn models(&self) -> &[ModelDefinition] {
        &[]
    }

    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        Err(ProviderError::Network("connection refused".to_string()))
    }
}

/// Accepts every action and sees no text on screen.
#[derive(Default)]
struct QuietDesktop {
    opened: Mutex<Vec<String>>,
}

#[async_trait]
impl Automation for QuietDesktop {
    async fn open_app(&self, app: &str) -> Result<(), AutomationError> {
        self.opened.lock().push(app.to_string());
        Ok(())
    }

    async fn move_to(&self, _point: ScreenPoint) -> Result<(), AutomationError> {
        Ok(())
    }

    async fn click(&self, _point: ScreenPoint, _button: MouseButton) -> Result<(), AutomationError> {
        Ok(())
    }

    async fn double_click(&self, _point: ScreenPoint) -> Result<(), AutomationError> {
        Ok(())
    }

    async fn type_text(&self, _text: &str) -> Result<(), AutomationError> {
        Ok(())
    }

    async fn hotkey(&self, _keys: &[String]) -> Result<(), AutomationError> {
        Ok(())
    }

    async fn press(&self, _key: &str) -> Result<(), AutomationError> {
        Ok(())
    }

    async fn locate_text(&self, _label: &str) -> Result<Option<ScreenPoint>, AutomationError> {
        Ok(None)
    }
}

#[derive(Default)]
struct SilentPrompter {
    asked: Mutex<Vec<String>>,
}

impl Prompter for SilentPrompter {
    fn show(&self, _title: &str, _body: &str) {}

    fn ask(&self, question: &str) -> Option<String> {
        self.asked.lock().push(question.to_string());
        Some("y".to_string())
    }
}

fn workflow(desktop: Arc<QuietDesktop>) -> ResearchWorkflow {
    let provider: Arc<dyn LLMProvider> = Arc::new(DownProvider);
    let agents = AgentSetBuilder::new(
        provider,
        AgentLoopConfig::default(),
        Arc::new(ToolRegistry::new()),
    )
    .build()
    .unwrap();
    let macros = Arc::new(
        MacroExecutor::new(desktop, Arc::new(VerificationPolicy::Optimistic)).with_delay_scale(0.0),
    );
    research_workflow(&agents, macros, "duckduckgo.com").unwrap()
}

#[tokio::test]
async fn test_browser_failure_falls_back_to_layout() {
    let desktop = Arc::new(QuietDesktop::default());
    let research = workflow(desktop.clone());
    let mut state = ResearchState::Idle;

    let reply = research.setup(&mut state).await.unwrap();

    assert_eq!(state, ResearchState::AwaitingTopic);
    assert!(reply.text.is_none());
    assert!(
        reply
            .notices
            .iter()
            .any(|n| matches!(n, Notice::Warning(w) if w.starts_with("⚠️ Browser setup skipped"))),
        "{:?}",
        reply.notices
    );
    // the layout still ran on its own
    assert!(!desktop.opened.lock().is_empty());
}

#[tokio::test]
async fn test_browser_failure_on_topic_is_an_error() {
    let research = workflow(Arc::new(QuietDesktop::default()));
    let prompter = SilentPrompter::default();
    let mut state = ResearchState::AwaitingTopic;

    assert!(research.topic("rust ownership", &mut state, &prompter).await.is_err());
    assert_eq!(state, ResearchState::Idle);
    assert!(prompter.asked.lock().is_empty());
}
