//! Keybinding system
//!
//! Maps keyboard input to commands.
//!
//! - `KeyBinding`: A mapping from a key pattern to a command ID
//! - `Keymap`: Collection of bindings with matching logic
//!
//! Key patterns are textual ("q", "ctrl+c", "down") and serializable.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

pub use crate::command_id::CommandId;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key - e.g., "ctrl+c", "esc", "j"
    pub keys: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "j", "G" (case-sensitive)
/// - With modifiers: "ctrl+c", "alt+x", "shift+tab"
/// - Special keys: "enter", "esc", "up", "down", "tab", ...
pub fn parse_key_pattern(pattern: &str) -> Option<KeyPattern> {
    let pattern = pattern.trim();

    // Uppercase letters come with SHIFT from the terminal
    let mut chars = pattern.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(KeyPattern {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
        key_part = rest;
    }

    Some(KeyPattern {
        code: parse_key_code(key_part)?,
        modifiers,
    })
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" => Some(KeyCode::Backspace),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" => Some(KeyCode::PageUp),
        "pagedown" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
        _ => None,
    }
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, KeyPattern)>,
}

impl Keymap {
    /// Create a keymap, skipping bindings whose pattern does not parse
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// Command bound to a key event, if any
    pub fn match_key(&self, key: &KeyEvent) -> Option<CommandId> {
        self.bindings
            .iter()
            .find(|(_, pattern)| pattern.code == key.code && pattern.modifiers == key.modifiers)
            .map(|(binding, _)| binding.command)
    }
}

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    Keymap::new(vec![
        // Navigation
        KeyBinding::new("j", NavigateNext),
        KeyBinding::new("down", NavigateNext),
        KeyBinding::new("k", NavigatePrevious),
        KeyBinding::new("up", NavigatePrevious),
        // Session
        KeyBinding::new("enter", Activate),
        KeyBinding::new("esc", Back),
        KeyBinding::new("r", Refresh),
        KeyBinding::new("s", ToggleSkipped),
        // General
        KeyBinding::new("q", Quit),
        KeyBinding::new("ctrl+c", Quit),
    ])
}
