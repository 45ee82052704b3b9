//! Mouse and keyboard input control.

use std::thread;
use std::time::Duration;

use enigo::{Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse, Settings};
use thiserror::Error;

use frankie_protocols::automation::MouseButton;
use frankie_protocols::error::AutomationError;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Input failed: {0}")]
    Failed(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl From<InputError> for AutomationError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::Failed(msg) => AutomationError::Input(msg),
            InputError::InvalidKey(key) => AutomationError::UnknownKey(key),
        }
    }
}

fn to_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
        MouseButton::Middle => Button::Middle,
    }
}

/// Thin wrapper over an `Enigo` handle. Create one per blocking task.
pub struct InputController {
    enigo: Enigo,
}

impl InputController {
    pub fn new() -> Result<Self, InputError> {
        let enigo =
            Enigo::new(&Settings::default()).map_err(|e| InputError::Failed(e.to_string()))?;
        Ok(Self { enigo })
    }

    pub fn mouse_move(&mut self, x: i32, y: i32) -> Result<(), InputError> {
        self.enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(|e| InputError::Failed(e.to_string()))
    }

    pub fn mouse_click(&mut self, button: MouseButton) -> Result<(), InputError> {
        self.enigo
            .button(to_button(button), Direction::Click)
            .map_err(|e| InputError::Failed(e.to_string()))
    }

    pub fn mouse_double_click(&mut self, button: MouseButton) -> Result<(), InputError> {
        self.mouse_click(button)?;
        thread::sleep(Duration::from_millis(50));
        self.mouse_click(button)
    }

    pub fn type_text(&mut self, text: &str) -> Result<(), InputError> {
        self.enigo
            .text(text)
            .map_err(|e| InputError::Failed(e.to_string()))
    }

    pub fn key_press(&mut self, key: &str) -> Result<(), InputError> {
        self.key(key, Direction::Click)
    }

    fn key(&mut self, key: &str, direction: Direction) -> Result<(), InputError> {
        let k = parse_key(key)?;
        self.enigo
            .key(k, direction)
            .map_err(|e| InputError::Failed(e.to_string()))
    }

    /// Hold every key but the last, click the last, release in reverse.
    pub fn hotkey<S: AsRef<str>>(&mut self, keys: &[S]) -> Result<(), InputError> {
        let Some((last, modifiers)) = keys.split_last() else {
            return Err(InputError::InvalidKey("empty key combination".to_string()));
        };
        // Validate everything before pressing anything.
        for key in keys {
            parse_key(key.as_ref())?;
        }

        for key in modifiers {
            self.key(key.as_ref(), Direction::Press)?;
        }
        let pressed = self.key(last.as_ref(), Direction::Click);
        for key in modifiers.iter().rev() {
            self.key(key.as_ref(), Direction::Release)?;
        }
        pressed
    }
}

/// Map a key name to an enigo key. Names are case-insensitive.
pub(crate) fn parse_key(key: &str) -> Result<Key, InputError> {
    let lower = key.trim().to_lowercase();
    let k = match lower.as_str() {
        "enter" | "return" => Key::Return,
        "tab" => Key::Tab,
        "space" => Key::Space,
        "backspace" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "escape" | "esc" => Key::Escape,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "up" => Key::UpArrow,
        "down" => Key::DownArrow,
        "left" => Key::LeftArrow,
        "right" => Key::RightArrow,

        "ctrl" | "control" => Key::Control,
        "alt" | "option" | "opt" => Key::Alt,
        "shift" => Key::Shift,
        "meta" | "cmd" | "command" | "win" | "super" => Key::Meta,

        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f4" => Key::F4,
        "f5" => Key::F5,
        "f6" => Key::F6,
        "f7" => Key::F7,
        "f8" => Key::F8,
        "f9" => Key::F9,
        "f10" => Key::F10,
        "f11" => Key::F11,
        "f12" => Key::F12,

        s => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Unicode(c),
                _ => return Err(InputError::InvalidKey(key.to_string())),
            }
        }
    };
    Ok(k)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
