//! Desktop automation for F.R.A.N.K.I.E.
//!
//! [`DesktopAutomation`] implements the [`Automation`] protocol over enigo
//! input, `screenshots` capture and tesseract OCR. The same primitives are
//! exposed to the computer agent as tools:
//!
//! - `desktop_mouse_move`, `desktop_mouse_click`
//! - `desktop_keyboard_type`, `desktop_keyboard_key`, `desktop_keyboard_hotkey`
//! - `open_app`
//! - `desktop_screenshot`, `analyze_screen`, `desktop_find_text`
//!
//! [`Automation`]: frankie_protocols::Automation

mod automation;
mod input;
mod launcher;
mod ocr;
mod screenshot;
mod tools;

use std::sync::Arc;

use frankie_protocols::{Automation, Tool};

pub use automation::{DesktopAutomation, ScreenText, ScreenWord};
pub use input::{InputController, InputError};
pub use launcher::{Platform, launch_command};
pub use ocr::{OcrEngine, OcrWord};
pub use screenshot::{Screenshot, capture_screen};
pub use tools::*;

/// Every desktop tool, bound to one automation backend.
pub fn desktop_tools(desktop: Arc<DesktopAutomation>) -> Vec<Arc<dyn Tool>> {
    let automation: Arc<dyn Automation> = desktop.clone();
    vec![
        Arc::new(MouseMoveTool::new(automation.clone())),
        Arc::new(MouseClickTool::new(automation.clone())),
        Arc::new(TypeTextTool::new(automation.clone())),
        Arc::new(KeyPressTool::new(automation.clone())),
        Arc::new(HotkeyTool::new(automation.clone())),
        Arc::new(OpenAppTool::new(automation.clone())),
        Arc::new(FindTextTool::new(automation)),
        Arc::new(ScreenshotTool::new(desktop.clone())),
        Arc::new(AnalyzeScreenTool::new(desktop)),
    ]
}
