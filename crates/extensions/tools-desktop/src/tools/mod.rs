//! Desktop tools for the computer agent.

mod apps;
mod keyboard;
mod mouse;
mod screen;

pub use apps::OpenAppTool;
pub use keyboard::{HotkeyTool, KeyPressTool, TypeTextTool};
pub use mouse::{MouseClickTool, MouseMoveTool};
pub use screen::{AnalyzeScreenTool, FindTextTool, ScreenshotTool};


use frankie_protocols::error::{AutomationError, ToolError};

/// Bad key names are the caller's mistake; everything else is an execution failure.
pub(crate) fn automation_error(err: AutomationError) -> ToolError {
    match err {
        AutomationError::UnknownKey(key) => {
            ToolError::InvalidParameters(format!("unknown key '{key}'"))
        }
        other => ToolError::ExecutionFailed(other.to_string()),
    }
}
