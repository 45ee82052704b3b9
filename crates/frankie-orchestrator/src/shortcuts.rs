//! Shortcut matching: free text to a predefined desktop macro.
//!
//! Matching runs on normalized text (trimmed, lowercased, single spaces) in
//! three passes: explicit routing to the computer agent disables shortcuts,
//! an exact canonical phrase wins next, then the first macro in declaration
//! order with a variant contained in the text.

use std::fmt;

use tracing::debug;

/// Phrases that send the request to the computer agent instead.
pub const EXPLICIT_ROUTING: [&str; 6] = [
    "send computer",
    "use computer",
    "route to computer",
    "computer agent",
    "send to computer",
    "ask computer",
];

/// A predefined desktop macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroId {
    StartDay,
    StartRecording,
    StopRecording,
    FocusMode,
    PlayMusic,
    StartPresentation,
    ResearchMode,
    QuipSetup,
}

impl MacroId {
    /// Declaration order. Earlier entries win on overlapping variants.
    pub const ALL: [MacroId; 8] = [
        MacroId::StartDay,
        MacroId::StartRecording,
        MacroId::StopRecording,
        MacroId::FocusMode,
        MacroId::PlayMusic,
        MacroId::StartPresentation,
        MacroId::ResearchMode,
        MacroId::QuipSetup,
    ];

    /// Stable kebab-case name used in logs and reply titles.
    pub fn as_str(self) -> &'static str {
        match self {
            MacroId::StartDay => "start-day",
            MacroId::StartRecording => "start-recording",
            MacroId::StopRecording => "stop-recording",
            MacroId::FocusMode => "focus-mode",
            MacroId::PlayMusic => "play-music",
            MacroId::StartPresentation => "start-presentation",
            MacroId::ResearchMode => "research-mode",
            MacroId::QuipSetup => "quip-setup",
        }
    }

    /// The documented trigger phrase, already normalized.
    pub fn canonical(self) -> &'static str {
        match self {
            MacroId::StartDay => "start my day",
            MacroId::StartRecording => "start demo record",
            MacroId::StopRecording => "stop demo record",
            MacroId::FocusMode => "focus mode",
            MacroId::PlayMusic => "play music",
            MacroId::StartPresentation => "start presentation",
            MacroId::ResearchMode => "research mode",
            MacroId::QuipSetup => "setup quip",
        }
    }

    /// Alternative phrases; any of them contained in the input triggers the macro.
    pub fn variants(self) -> &'static [&'static str] {
        match self {
            MacroId::StartDay => &[
                "morning setup",
                "start the day",
                "begin my day",
                "good morning frankie",
            ],
            MacroId::StartRecording => &[
                "begin demo recording",
                "start recording",
                "start screen recording",
                "record a demo",
            ],
            MacroId::StopRecording => &[
                "stop recording",
                "end demo recording",
                "finish recording",
                "stop screen recording",
            ],
            MacroId::FocusMode => &["enable focus", "do not disturb", "deep work", "time to focus"],
            MacroId::PlayMusic => &["play some music", "start music", "put on some music"],
            MacroId::StartPresentation => &[
                "present slides",
                "begin presentation",
                "start slideshow",
            ],
            MacroId::ResearchMode => &["start research", "begin research", "research session"],
            MacroId::QuipSetup => &["open quip", "new quip doc", "quip setup"],
        }
    }

    /// One-line summary for the shortcuts table.
    pub fn summary(self) -> &'static str {
        match self {
            MacroId::StartDay => "Open mail, calendar and chat for the morning",
            MacroId::StartRecording => "Start a screen recording",
            MacroId::StopRecording => "Stop the screen recording",
            MacroId::FocusMode => "Turn on Do Not Disturb and close distractions",
            MacroId::PlayMusic => "Start playing music",
            MacroId::StartPresentation => "Open the slides and start the slideshow",
            MacroId::ResearchMode => "Browser plus notes layout, then research a topic",
            MacroId::QuipSetup => "Open Quip with a new document",
        }
    }
}

impl fmt::Display for MacroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trim, lowercase and collapse whitespace runs.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// True when the normalized input asks for the computer agent by name.
pub fn is_explicit_routing(normalized: &str) -> bool {
    EXPLICIT_ROUTING.iter().any(|p| normalized.contains(p))
}

/// Map user text to a macro, or `None` to fall through to the orchestrator.
pub fn match_shortcut(text: &str) -> Option<MacroId> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return None;
    }
    if is_explicit_routing(&normalized) {
        debug!("Explicit routing phrase present; shortcuts disabled");
        return None;
    }
    if let Some(id) = MacroId::ALL
        .into_iter()
        .find(|id| id.canonical() == normalized)
    {
        return Some(id);
    }
    MacroId::ALL
        .into_iter()
        .find(|id| id.variants().iter().any(|v| normalized.contains(v)))
}

#[cfg(test)]
#[path = "shortcuts_tests.rs"]
mod tests;
