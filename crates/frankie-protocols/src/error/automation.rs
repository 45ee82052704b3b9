//! GUI automation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutomationError {
    #[error("Failed to open application '{app}': {reason}")]
    AppLaunch { app: String, reason: String },

    #[error("Input error: {0}")]
    Input(String),

    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("Screen text '{0}' not found")]
    AnchorNotFound(String),

    #[error("Screen capture failed: {0}")]
    Capture(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("Automation unavailable: {0}")]
    Unavailable(String),
}
