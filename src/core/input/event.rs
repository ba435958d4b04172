//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level input events and the
// input symbols hotkeys are bound to.
//
// This module abstracts away platform-specific input (e.g. Winit) into
// a unified format used by the state tracker and the hotkey sampler.
//
// Responsibilities:
// - Represent keyboard and mouse inputs in a stable, portable way
// - Unify keys and buttons under a single bindable `InputSymbol`
// - Parse the textual symbols used in hotkey configuration ("F", "Mouse4")
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (edge detection)
//         ↓
//    HotkeyLevels (per binding)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::str::FromStr;

//=== External Dependencies ===============================================

use thiserror::Error;

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// `Back` and `Forward` are the side buttons (often reported as X1/X2),
/// which are popular hotkey targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Side button, "back".
    Back,

    /// Side button, "forward".
    Forward,

    /// Any other button (macro keys, extra thumb buttons).
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

const LETTERS: [KeyCode; 26] = [
    KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC, KeyCode::KeyD, KeyCode::KeyE,
    KeyCode::KeyF, KeyCode::KeyG, KeyCode::KeyH, KeyCode::KeyI, KeyCode::KeyJ,
    KeyCode::KeyK, KeyCode::KeyL, KeyCode::KeyM, KeyCode::KeyN, KeyCode::KeyO,
    KeyCode::KeyP, KeyCode::KeyQ, KeyCode::KeyR, KeyCode::KeyS, KeyCode::KeyT,
    KeyCode::KeyU, KeyCode::KeyV, KeyCode::KeyW, KeyCode::KeyX, KeyCode::KeyY,
    KeyCode::KeyZ,
];

const DIGITS: [KeyCode; 10] = [
    KeyCode::Digit0, KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4,
    KeyCode::Digit5, KeyCode::Digit6, KeyCode::Digit7, KeyCode::Digit8, KeyCode::Digit9,
];

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Only discrete events matter to hotkey arbitration, so cursor movement
/// is not represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Mouse button pressed.
    MouseButtonDown(MouseButton),

    /// Mouse button released.
    MouseButtonUp(MouseButton),

    /// Unrecognized or unsupported event, ignored by the tracker.
    Unidentified,
}

impl InputEvent {
    /// Returns the symbol this event refers to and whether it is a press.
    ///
    /// `None` for `Unidentified` events.
    pub fn symbol_transition(&self) -> Option<(InputSymbol, bool)> {
        match *self {
            Self::KeyDown(key) => Some((InputSymbol::Key(key), true)),
            Self::KeyUp(key) => Some((InputSymbol::Key(key), false)),
            Self::MouseButtonDown(btn) => Some((InputSymbol::Button(btn), true)),
            Self::MouseButtonUp(btn) => Some((InputSymbol::Button(btn), false)),
            Self::Unidentified => None,
        }
    }
}

//=== InputSymbol =========================================================

/// Anything a hotkey can be bound to: a keyboard key or a mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSymbol {
    Key(KeyCode),
    Button(MouseButton),
}

impl From<KeyCode> for InputSymbol {
    fn from(key: KeyCode) -> Self {
        Self::Key(key)
    }
}

impl From<MouseButton> for InputSymbol {
    fn from(button: MouseButton) -> Self {
        Self::Button(button)
    }
}

/// Error returned when a textual input symbol is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized input symbol `{symbol}`")]
pub struct ParseSymbolError {
    pub symbol: String,
}

impl FromStr for InputSymbol {
    type Err = ParseSymbolError;

    /// Parses configuration symbols, case-insensitive.
    ///
    /// Accepted forms: single letters and digits, `Space`, `Enter`,
    /// `Escape`, `Tab`, `Backspace`, `Delete`, `Up`/`ArrowUp` (and the
    /// other arrows), `Mouse1`..`Mouse5`, `LeftMouse`, `RightMouse`,
    /// `MiddleMouse`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();

        let mut chars = upper.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_uppercase() {
                return Ok(Self::Key(LETTERS[(c as u8 - b'A') as usize]));
            }
            if c.is_ascii_digit() {
                return Ok(Self::Key(DIGITS[(c as u8 - b'0') as usize]));
            }
        }

        let symbol = match upper.as_str() {
            "SPACE" => Self::Key(KeyCode::Space),
            "ENTER" | "RETURN" => Self::Key(KeyCode::Enter),
            "ESCAPE" | "ESC" => Self::Key(KeyCode::Escape),
            "TAB" => Self::Key(KeyCode::Tab),
            "BACKSPACE" => Self::Key(KeyCode::Backspace),
            "DELETE" | "DEL" => Self::Key(KeyCode::Delete),
            "UP" | "ARROWUP" => Self::Key(KeyCode::ArrowUp),
            "DOWN" | "ARROWDOWN" => Self::Key(KeyCode::ArrowDown),
            "LEFT" | "ARROWLEFT" => Self::Key(KeyCode::ArrowLeft),
            "RIGHT" | "ARROWRIGHT" => Self::Key(KeyCode::ArrowRight),
            "MOUSE1" | "LEFTMOUSE" => Self::Button(MouseButton::Left),
            "MOUSE2" | "RIGHTMOUSE" => Self::Button(MouseButton::Right),
            "MOUSE3" | "MIDDLEMOUSE" => Self::Button(MouseButton::Middle),
            "MOUSE4" | "XBUTTON1" => Self::Button(MouseButton::Back),
            "MOUSE5" | "XBUTTON2" => Self::Button(MouseButton::Forward),
            _ => {
                return Err(ParseSymbolError {
                    symbol: trimmed.to_owned(),
                })
            }
        };

        Ok(symbol)
    }
}

impl fmt::Display for InputSymbol {
    /// Formats the symbol in the same notation `from_str` accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => {
                if let Some(i) = LETTERS.iter().position(|k| k == key) {
                    return write!(f, "{}", (b'A' + i as u8) as char);
                }
                if let Some(i) = DIGITS.iter().position(|k| k == key) {
                    return write!(f, "{}", i);
                }
                let name = match key {
                    KeyCode::ArrowUp => "Up",
                    KeyCode::ArrowDown => "Down",
                    KeyCode::ArrowLeft => "Left",
                    KeyCode::ArrowRight => "Right",
                    KeyCode::Space => "Space",
                    KeyCode::Enter => "Enter",
                    KeyCode::Escape => "Escape",
                    KeyCode::Tab => "Tab",
                    KeyCode::Backspace => "Backspace",
                    KeyCode::Delete => "Delete",
                    _ => "Unidentified",
                };
                f.write_str(name)
            }
            Self::Button(btn) => {
                let name = match btn {
                    MouseButton::Left => "Mouse1",
                    MouseButton::Right => "Mouse2",
                    MouseButton::Middle => "Mouse3",
                    MouseButton::Back => "Mouse4",
                    MouseButton::Forward => "Mouse5",
                    MouseButton::Other => "MouseOther",
                };
                f.write_str(name)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
