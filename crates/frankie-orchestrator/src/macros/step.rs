//! Declarative macro steps.

use std::fmt;
use std::time::Duration;

use frankie_protocols::automation::ScreenPoint;

/// Where a pointer action lands.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAnchor {
    Point { x: i32, y: i32 },
    /// Visible text found by OCR; `fallback` is used when it is not found.
    Text {
        label: String,
        fallback: Option<ScreenPoint>,
    },
}

impl UiAnchor {
    pub fn text(label: impl Into<String>) -> Self {
        UiAnchor::Text {
            label: label.into(),
            fallback: None,
        }
    }

    pub fn text_or(label: impl Into<String>, x: i32, y: i32) -> Self {
        UiAnchor::Text {
            label: label.into(),
            fallback: Some(ScreenPoint::new(x, y)),
        }
    }
}

impl fmt::Display for UiAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiAnchor::Point { x, y } => write!(f, "({x}, {y})"),
            UiAnchor::Text { label, .. } => write!(f, "\"{label}\""),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepAction {
    OpenApp(String),
    MoveTo(UiAnchor),
    Click(UiAnchor),
    DoubleClick(UiAnchor),
    TypeText(String),
    Hotkey(Vec<String>),
    Press(String),
    Pause,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutomationStep {
    pub action: StepAction,
    pub delay_after: Duration,
    pub description: String,
}

impl AutomationStep {
    fn new(action: StepAction, description: String) -> Self {
        Self {
            action,
            delay_after: Duration::ZERO,
            description,
        }
    }

    pub fn open_app(app: &str) -> Self {
        Self::new(StepAction::OpenApp(app.to_string()), format!("Open {app}"))
    }

    pub fn move_to(anchor: UiAnchor) -> Self {
        let description = format!("Move to {anchor}");
        Self::new(StepAction::MoveTo(anchor), description)
    }

    pub fn click(anchor: UiAnchor) -> Self {
        let description = format!("Click {anchor}");
        Self::new(StepAction::Click(anchor), description)
    }

    pub fn double_click(anchor: UiAnchor) -> Self {
        let description = format!("Double-click {anchor}");
        Self::new(StepAction::DoubleClick(anchor), description)
    }

    pub fn type_text(text: &str) -> Self {
        Self::new(
            StepAction::TypeText(text.to_string()),
            format!("Type \"{text}\""),
        )
    }

    pub fn hotkey(keys: &[&str]) -> Self {
        Self::new(
            StepAction::Hotkey(keys.iter().map(|k| k.to_string()).collect()),
            format!("Press {}", keys.join("+")),
        )
    }

    pub fn press(key: &str) -> Self {
        Self::new(StepAction::Press(key.to_string()), format!("Press {key}"))
    }

    pub fn pause(millis: u64) -> Self {
        Self::new(StepAction::Pause, format!("Wait {millis}ms")).wait(millis)
    }

    /// Sleep this long after the step.
    pub fn wait(mut self, millis: u64) -> Self {
        self.delay_after = Duration::from_millis(millis);
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
