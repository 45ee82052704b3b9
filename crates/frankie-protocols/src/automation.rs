//! GUI automation protocol.
//!
//! Desktop macros drive the screen through this trait only, so the macro
//! layer can be exercised against a recording fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AutomationError;

/// A point on the primary display, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Mouse button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// GUI automation primitives.
#[async_trait]
pub trait Automation: Send + Sync {
    /// Launch or focus an application by name.
    async fn open_app(&self, app: &str) -> Result<(), AutomationError>;

    /// Move the pointer.
    async fn move_to(&self, point: ScreenPoint) -> Result<(), AutomationError>;

    /// Click at a point.
    async fn click(&self, point: ScreenPoint, button: MouseButton) -> Result<(), AutomationError>;

    /// Double-click at a point.
    async fn double_click(&self, point: ScreenPoint) -> Result<(), AutomationError>;

    /// Type literal text.
    async fn type_text(&self, text: &str) -> Result<(), AutomationError>;

    /// Press a key combination, modifiers first (e.g. `["cmd", "shift", "5"]`).
    async fn hotkey(&self, keys: &[String]) -> Result<(), AutomationError>;

    /// Press and release a single key.
    async fn press(&self, key: &str) -> Result<(), AutomationError>;

    /// Find the centre of on-screen text. `Ok(None)` means it is not visible.
    async fn locate_text(&self, label: &str) -> Result<Option<ScreenPoint>, AutomationError>;
}
