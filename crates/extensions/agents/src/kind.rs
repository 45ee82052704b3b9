//! The fixed set of specialist agents.

use frankie_protocols::agent::AgentDescriptor;

use crate::prompts;

/// Width of the `=` rule framing every specialist reply.
pub const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Browser,
    Computer,
    Coding,
    Content,
    Memory,
    News,
}

impl AgentKind {
    pub const ALL: [AgentKind; 6] = [
        AgentKind::Browser,
        AgentKind::Computer,
        AgentKind::Coding,
        AgentKind::Content,
        AgentKind::Memory,
        AgentKind::News,
    ];

    /// Tool name under which the orchestrator model sees this agent.
    pub fn id(self) -> &'static str {
        match self {
            AgentKind::Browser => "use_browser_agent",
            AgentKind::Computer => "use_computer_agent",
            AgentKind::Coding => "coding_agent",
            AgentKind::Content => "content_generator_agent",
            AgentKind::Memory => "use_memory_brain_agent",
            AgentKind::News => "news_reporter_agent",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AgentKind::Browser => "Browser Agent",
            AgentKind::Computer => "Computer Agent",
            AgentKind::Coding => "Coding Agent",
            AgentKind::Content => "Content Generator",
            AgentKind::Memory => "Memory Brain",
            AgentKind::News => "News Reporter",
        }
    }

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            AgentKind::Browser => &["browser", "web"],
            AgentKind::Computer => &["computer", "desktop"],
            AgentKind::Coding => &["coding", "code", "coder"],
            AgentKind::Content => &["content", "diagram", "diagrams"],
            AgentKind::Memory => &["memory", "brain"],
            AgentKind::News => &["news", "rss"],
        }
    }

    /// Description shown to the orchestrator model and in the banner table.
    pub fn description(self) -> &'static str {
        match self {
            AgentKind::Browser => {
                "Web research and automation: searching, reading pages, extracting data, opening sites"
            }
            AgentKind::Computer => {
                "Desktop automation: launching apps, reading the screen with OCR, clicking and typing"
            }
            AgentKind::Coding => {
                "Software engineering: writing, reviewing and debugging code, terminal commands, file inspection"
            }
            AgentKind::Content => {
                "Visual content: UML and architecture diagrams, flowcharts, generated documents"
            }
            AgentKind::Memory => {
                "Knowledge base management: storing, organising and recalling notes and documents"
            }
            AgentKind::News => "News and RSS: fetching headlines, managing and searching feed subscriptions",
        }
    }

    pub fn descriptor(self) -> AgentDescriptor {
        AgentDescriptor::new(self.id(), self.name(), self.description())
            .with_aliases(self.aliases())
    }

    /// Heading of the reply envelope.
    pub fn banner(self) -> &'static str {
        match self {
            AgentKind::Browser => "🌐 BROWSER AGENT RESPONSE 🌐",
            AgentKind::Computer => "💻 COMPUTER AGENT RESPONSE 💻",
            AgentKind::Coding => "👨‍💻 CODING AGENT RESPONSE 👨‍💻",
            AgentKind::Content => "🎨 CONTENT GENERATOR RESPONSE 🎨",
            AgentKind::Memory => "🧠 MEMORY BRAIN RESPONSE 🧠",
            AgentKind::News => "📰 NEWS REPORTER RESPONSE 📰",
        }
    }

    /// Noun used in the empty-reply message.
    fn task(self) -> &'static str {
        match self {
            AgentKind::Browser => "browser automation",
            AgentKind::Computer => "computer automation",
            AgentKind::Coding => "coding",
            AgentKind::Content => "content generation",
            AgentKind::Memory => "memory brain",
            AgentKind::News => "news reporter",
        }
    }

    /// Prefix of the failure message.
    fn error_label(self) -> &'static str {
        match self {
            AgentKind::Browser => "Browser Automation",
            AgentKind::Computer => "Computer Automation",
            AgentKind::Coding => "Coding Agent",
            AgentKind::Content => "Content Generation",
            AgentKind::Memory => "Memory Brain",
            AgentKind::News => "News Reporter",
        }
    }

    pub fn system_prompt(self) -> &'static str {
        match self {
            AgentKind::Browser => prompts::BROWSER,
            AgentKind::Computer => prompts::COMPUTER,
            AgentKind::Coding => prompts::CODING,
            AgentKind::Content => prompts::CONTENT,
            AgentKind::Memory => prompts::MEMORY,
            AgentKind::News => prompts::NEWS,
        }
    }

    /// Wrap the raw user request with task reminders.
    pub fn preamble(self, query: &str) -> String {
        match self {
            AgentKind::Browser => format!(
                "Please help me with the following web task. Remember to:\n\
                 1. Look at the page content before drawing conclusions\n\
                 2. Prefer primary sources and cite the URLs you used\n\
                 3. Provide clear progress updates\n\n\
                 User Request: {query}"
            ),
            AgentKind::Computer => format!(
                "Please help me with the following computer automation task. Remember to:\n\
                 1. Run analyze_screen before every interaction\n\
                 2. Use the exact coordinates reported by OCR for clicking\n\
                 3. Use open_app to launch applications\n\
                 4. Provide clear progress updates\n\n\
                 User Request: {query}"
            ),
            AgentKind::Coding => query.to_string(),
            AgentKind::Content => format!(
                "Please help me create the following visual content. I will:\n\
                 1. Pick the right diagram type for the request\n\
                 2. Keep element relationships and notation correct\n\
                 3. Save the result and report the file path\n\n\
                 Content Request: {query}"
            ),
            AgentKind::Memory => format!(
                "Memory Management Task: {query}\n\n\
                 Please process this request using your memory management capabilities.\n\
                 Provide clear feedback about what information was stored, retrieved, or organized."
            ),
            AgentKind::News => format!("Process this news or RSS request: {query}"),
        }
    }

    /// Tool IDs this agent may call.
    pub fn tool_ids(self) -> &'static [&'static str] {
        match self {
            AgentKind::Browser => &["http_request", "web_search", "open_url", "memory"],
            AgentKind::Computer => &[
                "analyze_screen",
                "desktop_find_text",
                "desktop_screenshot",
                "desktop_mouse_move",
                "desktop_mouse_click",
                "desktop_keyboard_type",
                "desktop_keyboard_key",
                "desktop_keyboard_hotkey",
                "open_app",
            ],
            AgentKind::Coding => &[
                "exec",
                "read_file",
                "write_file",
                "edit_file",
                "list_dir",
                "http_request",
            ],
            AgentKind::Content => &["diagram", "write_file"],
            AgentKind::Memory => &["memory", "retrieve", "read_file"],
            AgentKind::News => &["http_request", "rss"],
        }
    }

    /// The framed reply shown to the orchestrator.
    pub fn envelope(self, text: &str) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        format!("\n{}\n{rule}\n{text}\n{rule}", self.banner())
    }

    pub fn empty_reply(self) -> String {
        format!("❌ Error: No response received from the {} task", self.task())
    }

    pub fn failure(self, message: &str) -> String {
        format!(
            "{} Error: {message}\nPlease check your request and try again.",
            self.error_label()
        )
    }

    /// Find a kind by ID or alias, case-insensitively.
    pub fn resolve(name: &str) -> Option<AgentKind> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.descriptor().answers_to(name))
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
