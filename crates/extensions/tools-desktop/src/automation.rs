//! [`Automation`] over the local desktop.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use frankie_protocols::automation::{Automation, MouseButton, ScreenPoint};
use frankie_protocols::error::AutomationError;

use crate::input::InputController;
use crate::launcher::{Platform, launch_app};
use crate::ocr::{self, OcrEngine, OcrWord};
use crate::screenshot::{self, Screenshot};

/// Run blocking desktop work off the async runtime.
pub(crate) async fn run_blocking<F, T>(f: F) -> Result<T, AutomationError>
where
    F: FnOnce() -> Result<T, AutomationError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AutomationError::Input(format!("desktop task aborted: {e}")))?
}

fn with_input<F>(f: F) -> Result<(), AutomationError>
where
    F: FnOnce(&mut InputController) -> Result<(), crate::input::InputError>,
{
    let mut input = InputController::new()?;
    f(&mut input)?;
    Ok(())
}

/// A word found on screen, positioned in logical coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenWord {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub confidence: f32,
}

/// OCR result for the whole screen.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenText {
    pub width: u32,
    pub height: u32,
    pub lines: Vec<String>,
    pub words: Vec<ScreenWord>,
}

impl ScreenText {
    fn from_words(shot: &Screenshot, words: &[OcrWord]) -> Self {
        let positioned = words
            .iter()
            .map(|w| {
                let (cx, cy) = w.center();
                let (x, y) = shot.to_logical(cx, cy);
                ScreenWord {
                    text: w.text.clone(),
                    x,
                    y,
                    confidence: w.confidence,
                }
            })
            .collect();
        Self {
            width: shot.width,
            height: shot.height,
            lines: ocr::lines(words),
            words: positioned,
        }
    }
}

/// Drives the real mouse, keyboard and screen.
#[derive(Debug, Clone)]
pub struct DesktopAutomation {
    ocr: OcrEngine,
    platform: Platform,
}

impl DesktopAutomation {
    pub fn new(ocr_language: impl Into<String>) -> Self {
        Self {
            ocr: OcrEngine::new(ocr_language),
            platform: Platform::current(),
        }
    }

    pub async fn capture(&self) -> Result<Screenshot, AutomationError> {
        run_blocking(screenshot::capture_screen).await
    }

    async fn recognize(&self) -> Result<(Screenshot, Vec<OcrWord>), AutomationError> {
        let engine = self.ocr.clone();
        run_blocking(move || {
            let shot = screenshot::capture_screen()?;
            let words = engine.recognize_png(&shot.png)?;
            Ok((shot, words))
        })
        .await
    }

    /// Capture the screen and OCR it.
    pub async fn read_screen(&self) -> Result<ScreenText, AutomationError> {
        let (shot, words) = self.recognize().await?;
        Ok(ScreenText::from_words(&shot, &words))
    }
}

impl Default for DesktopAutomation {
    fn default() -> Self {
        Self::new("eng")
    }
}

#[async_trait]
impl Automation for DesktopAutomation {
    async fn open_app(&self, app: &str) -> Result<(), AutomationError> {
        launch_app(self.platform, app).await
    }

    async fn move_to(&self, point: ScreenPoint) -> Result<(), AutomationError> {
        debug!("Mouse move to {}", point);
        run_blocking(move || with_input(|i| i.mouse_move(point.x, point.y))).await
    }

    async fn click(&self, point: ScreenPoint, button: MouseButton) -> Result<(), AutomationError> {
        debug!("Mouse {:?} click at {}", button, point);
        run_blocking(move || {
            with_input(|i| {
                i.mouse_move(point.x, point.y)?;
                i.mouse_click(button)
            })
        })
        .await
    }

    async fn double_click(&self, point: ScreenPoint) -> Result<(), AutomationError> {
        debug!("Mouse double click at {}", point);
        run_blocking(move || {
            with_input(|i| {
                i.mouse_move(point.x, point.y)?;
                i.mouse_double_click(MouseButton::Left)
            })
        })
        .await
    }

    async fn type_text(&self, text: &str) -> Result<(), AutomationError> {
        debug!("Typing {} chars", text.chars().count());
        let text = text.to_string();
        run_blocking(move || with_input(|i| i.type_text(&text))).await
    }

    async fn hotkey(&self, keys: &[String]) -> Result<(), AutomationError> {
        debug!("Hotkey {}", keys.join("+"));
        let keys = keys.to_vec();
        run_blocking(move || with_input(|i| i.hotkey(keys.as_slice()))).await
    }

    async fn press(&self, key: &str) -> Result<(), AutomationError> {
        debug!("Key press {}", key);
        let key = key.to_string();
        run_blocking(move || with_input(|i| i.key_press(&key))).await
    }

    async fn locate_text(&self, label: &str) -> Result<Option<ScreenPoint>, AutomationError> {
        let (shot, words) = self.recognize().await?;
        let found = ocr::find_text(&words, label).map(|(x, y)| {
            let (x, y) = shot.to_logical(x, y);
            ScreenPoint::new(x, y)
        });
        match found {
            Some(point) => info!("Located \"{}\" at {}", label, point),
            None => debug!("\"{}\" not visible among {} words", label, words.len()),
        }
        Ok(found)
    }
}
