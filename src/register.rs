//! Assembles tools, agents and the orchestrator session from configuration.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use frankie_agents::{AgentKind, AgentSet, AgentSetBuilder};
use frankie_config::{Config, ConfigLoader};
use frankie_core::ToolRegistry;
use frankie_orchestrator::{Dispatch, MacroExecutor, ResearchWorkflow, Session};
use frankie_protocols::{Agent, Automation, LLMProvider, MemoryBackend, Tool};
use frankie_provider_anthropic::AnthropicProvider;
use frankie_runtime::{AgentLoopConfig, RetryConfig, RetryProvider};
use frankie_tools_desktop::{DesktopAutomation, desktop_tools};
use frankie_tools_filesystem::{
    DiagramTool, EditFileTool, ListDirectoryTool, ReadFileTool, WriteFileTool,
};
use frankie_tools_memory::{MarkdownMemoryBackend, MemoryTool, RetrieveTool};
use frankie_tools_system::{CurrentTimeTool, ExecTool};
use frankie_tools_web::{HttpRequestTool, OpenUrlTool, RssTool, SlackTool, WebSearchTool};

use crate::BoxError;

/// Everything the REPL needs.
pub(crate) struct App {
    pub config: Config,
    pub work_dir: PathBuf,
    pub toolbox: Arc<ToolRegistry>,
    pub agents: AgentSet,
    pub automation: Arc<DesktopAutomation>,
}

pub(crate) async fn build(config: Config, work_dir: PathBuf) -> Result<App, BoxError> {
    let rss_dir = ConfigLoader::expand_path(&config.rss.storage_path);
    std::fs::create_dir_all(&rss_dir)?;
    let memory_dir = ConfigLoader::expand_path(&config.memory.path);
    let memory: Arc<dyn MemoryBackend> = Arc::new(MarkdownMemoryBackend::open(&memory_dir).await?);

    let automation = Arc::new(DesktopAutomation::new(config.automation.ocr_language.clone()));
    let toolbox = Arc::new(toolbox(&config, rss_dir, memory, automation.clone())?);
    info!("Toolbox ready with {} tools", toolbox.len());

    let provider: Arc<dyn LLMProvider> = Arc::new(RetryProvider::new(
        Arc::new(AnthropicProvider::from_config(&config.model)?),
        RetryConfig::from(&config.retry),
    ));
    let loop_config = AgentLoopConfig::from_settings(
        &config.model,
        &config.agents,
        config.automation.bypass_tool_consent,
    )
    .with_work_dir(work_dir.clone());
    let agents = AgentSetBuilder::new(provider, loop_config, toolbox.clone()).build()?;

    Ok(App {
        config,
        work_dir,
        toolbox,
        agents,
        automation,
    })
}

fn toolbox(
    config: &Config,
    rss_dir: PathBuf,
    memory: Arc<dyn MemoryBackend>,
    automation: Arc<DesktopAutomation>,
) -> Result<ToolRegistry, BoxError> {
    let mut tools: Vec<Arc<dyn Tool>> = vec![
        Arc::new(ExecTool::new()),
        Arc::new(CurrentTimeTool::new()),
        Arc::new(HttpRequestTool::new()),
        Arc::new(WebSearchTool::new()),
        Arc::new(OpenUrlTool::new()),
        Arc::new(RssTool::new(rss_dir)),
        Arc::new(SlackTool::from_config(&config.slack)),
        Arc::new(ReadFileTool::new()),
        Arc::new(WriteFileTool::new()),
        Arc::new(EditFileTool::new()),
        Arc::new(ListDirectoryTool::new()),
        Arc::new(DiagramTool::new()),
        Arc::new(MemoryTool::new(memory.clone())),
        Arc::new(RetrieveTool::new(memory)),
    ];
    tools.extend(desktop_tools(automation));
    Ok(ToolRegistry::from_tools(tools)?)
}

impl App {
    /// Resolve `--agent`; `None` targets the orchestrator.
    pub fn target(&self, agent: Option<&str>) -> Result<Arc<dyn Agent>, BoxError> {
        match agent {
            None => Ok(self.agents.orchestrator.clone()),
            Some(name) => self.agents.specialists.resolve(name).ok_or_else(|| {
                let known: Vec<String> = self
                    .agents
                    .specialists
                    .list()
                    .iter()
                    .map(|a| match a.descriptor().aliases.first() {
                        Some(alias) => alias.clone(),
                        None => a.id().to_string(),
                    })
                    .collect();
                format!("Unknown agent '{name}'. Available: {}", known.join(", ")).into()
            }),
        }
    }

    pub fn session(&self, target: Arc<dyn Agent>) -> Result<Session, BoxError> {
        let automation: Arc<dyn Automation> = self.automation.clone();
        let macros = Arc::new(
            MacroExecutor::new(automation, Arc::new(self.config.automation.verification))
                .with_delay_scale(self.config.automation.delay_scale),
        );
        let research = research_workflow(
            &self.agents,
            macros.clone(),
            &self.config.research.search_engine,
        )?;
        let shell = self
            .toolbox
            .get("exec")
            .ok_or_else(|| -> BoxError { "exec tool is not registered".into() })?;

        Ok(Session::new(
            Dispatch::new(target),
            macros,
            research,
            shell,
            self.work_dir.clone(),
        ))
    }
}

/// The research workflow talks to the error-propagating specialists so a
/// failed browser step falls back to the layout macro.
pub(crate) fn research_workflow(
    agents: &AgentSet,
    macros: Arc<MacroExecutor>,
    search_engine: &str,
) -> Result<ResearchWorkflow, BoxError> {
    let direct = |kind: AgentKind| {
        agents
            .direct(kind)
            .ok_or_else(|| -> BoxError { format!("{kind} agent is not registered").into() })
    };
    Ok(ResearchWorkflow::new(
        direct(AgentKind::Browser)?,
        direct(AgentKind::Computer)?,
        macros,
        search_engine,
    ))
}

#[cfg(test)]
#[path = "register_tests.rs"]
mod tests;
