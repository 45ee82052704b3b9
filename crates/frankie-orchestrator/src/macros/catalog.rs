//! The built-in macro scripts.
//!
//! Clicks target visible labels first; the fallback points fit a 1440x900
//! macOS desktop.

use crate::shortcuts::MacroId;

use super::step::{AutomationStep, UiAnchor};

/// A named step list and the message shown once it has run.
#[derive(Debug, Clone)]
pub struct MacroScript {
    pub name: &'static str,
    pub steps: Vec<AutomationStep>,
    pub message: &'static str,
}

pub const RESEARCH_LAYOUT: &str = "research-layout";
pub const DOCUMENT_SETUP: &str = "document-setup";

pub const RESEARCH_PROMPT: &str = "🔬 Research mode ready! What topic would you like to research?";

pub fn script(id: MacroId) -> MacroScript {
    match id {
        MacroId::StartDay => MacroScript {
            name: id.as_str(),
            steps: vec![
                AutomationStep::open_app("Mail").wait(2000),
                AutomationStep::open_app("Calendar").wait(2000),
                AutomationStep::hotkey(&["cmd", "t"])
                    .describe("Show today in Calendar")
                    .wait(500),
                AutomationStep::open_app("Slack").wait(2000),
            ],
            message: "☀️ Good morning! Mail, Calendar and Slack are open. Have a productive day.",
        },
        MacroId::StartRecording => MacroScript {
            name: id.as_str(),
            steps: vec![
                AutomationStep::hotkey(&["cmd", "shift", "5"])
                    .describe("Open the screen capture toolbar")
                    .wait(1500),
                AutomationStep::click(UiAnchor::text_or("Record Entire Screen", 620, 870)).wait(500),
                AutomationStep::click(UiAnchor::text_or("Record", 1115, 870)).wait(1000),
            ],
            message: "🎥 Demo recording started. Say \"stop demo record\" when you're done.",
        },
        MacroId::StopRecording => MacroScript {
            name: id.as_str(),
            steps: vec![
                AutomationStep::hotkey(&["cmd", "ctrl", "escape"])
                    .describe("Stop the screen recording")
                    .wait(1500),
            ],
            message: "⏹️ Demo recording stopped. The video was saved to your Desktop.",
        },
        MacroId::FocusMode => MacroScript {
            name: id.as_str(),
            steps: vec![
                AutomationStep::click(UiAnchor::Point { x: 1290, y: 12 })
                    .describe("Open Control Center")
                    .wait(800),
                AutomationStep::click(UiAnchor::text_or("Focus", 1180, 120)).wait(800),
                AutomationStep::click(UiAnchor::text_or("Do Not Disturb", 1180, 160)).wait(500),
                AutomationStep::press("escape"),
            ],
            message: "🎯 Focus mode on. Notifications are silenced until you turn it off.",
        },
        MacroId::PlayMusic => MacroScript {
            name: id.as_str(),
            steps: vec![
                AutomationStep::open_app("Spotify").wait(3000),
                AutomationStep::press("space").describe("Start playback"),
            ],
            message: "🎵 Music is playing. Enjoy!",
        },
        MacroId::StartPresentation => MacroScript {
            name: id.as_str(),
            steps: vec![
                AutomationStep::open_app("Keynote").wait(3000),
                AutomationStep::hotkey(&["cmd", "alt", "p"])
                    .describe("Play the slideshow")
                    .wait(1000),
            ],
            message: "📽️ Presentation started. Good luck!",
        },
        MacroId::ResearchMode => research_layout(),
        MacroId::QuipSetup => MacroScript {
            name: id.as_str(),
            steps: new_quip_document(),
            message: "📝 Quip is open with a new document.",
        },
    }
}

/// Browser and notes side by side.
pub fn research_layout() -> MacroScript {
    MacroScript {
        name: RESEARCH_LAYOUT,
        steps: vec![
            AutomationStep::open_app("Quip").wait(2000),
            AutomationStep::hotkey(&["ctrl", "alt", "right"])
                .describe("Snap Quip to the right half")
                .wait(500),
            AutomationStep::open_app("Google Chrome").wait(2000),
            AutomationStep::hotkey(&["ctrl", "alt", "left"])
                .describe("Snap Chrome to the left half")
                .wait(500),
        ],
        message: RESEARCH_PROMPT,
    }
}

/// A blank Quip document with the cursor in its body.
pub fn document_setup() -> MacroScript {
    let mut steps = new_quip_document();
    steps.push(
        AutomationStep::click(UiAnchor::text_or("Untitled", 700, 220))
            .describe("Focus the document title")
            .wait(500),
    );
    MacroScript {
        name: DOCUMENT_SETUP,
        steps,
        message: "📝 A new Quip document is ready.",
    }
}

fn new_quip_document() -> Vec<AutomationStep> {
    vec![
        AutomationStep::open_app("Quip").wait(3000),
        AutomationStep::click(UiAnchor::text_or("New", 80, 120)).wait(1000),
        AutomationStep::click(UiAnchor::text_or("Document", 120, 170)).wait(2000),
    ]
}
