//! Logical key roles of the setup utility.
//!
//! Translates raw `KeyEvent`s and textual keybinds into comparable strings so
//! the configured `[keybinds]` table can resolve a key to a `KeyRole`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything a key can mean to the setup screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    // Navigation
    Up,
    Down,

    // Selection
    Confirm, // Enter - open entry / accept password
    Cancel,  // Esc - back to main menu

    // Function keys
    Help,      // F1
    QuickSave, // F10

    // Value editing
    IncrementValue, // +
    DecrementValue, // -

    // Y/N prompts
    ConfirmYes,
    ConfirmNo,
}

impl KeyRole {
    pub const ALL: [KeyRole; 10] = [
        KeyRole::Up,
        KeyRole::Down,
        KeyRole::Confirm,
        KeyRole::Cancel,
        KeyRole::Help,
        KeyRole::QuickSave,
        KeyRole::IncrementValue,
        KeyRole::DecrementValue,
        KeyRole::ConfirmYes,
        KeyRole::ConfirmNo,
    ];

    /// Name of the role in the `[keybinds]` config table
    pub fn config_name(self) -> &'static str {
        match self {
            KeyRole::Up => "up",
            KeyRole::Down => "down",
            KeyRole::Confirm => "confirm",
            KeyRole::Cancel => "cancel",
            KeyRole::Help => "help",
            KeyRole::QuickSave => "quick_save",
            KeyRole::IncrementValue => "increment_value",
            KeyRole::DecrementValue => "decrement_value",
            KeyRole::ConfirmYes => "confirm_yes",
            KeyRole::ConfirmNo => "confirm_no",
        }
    }
}

/// Convert KeyEvent to string representation for matching against keybinds
///
/// Character keys ignore Shift (it is already folded into the character) and
/// are lowercased, so `Y` and `y` resolve the same binding.
pub fn key_event_to_string(key: KeyEvent) -> String {
    let mut parts = Vec::new();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
        parts.push("Shift");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match key.code {
        KeyCode::Char(c) => c.to_lowercase().to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => {
            parts.retain(|p| *p != "Shift");
            "Shift+Tab".to_string()
        }
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => return String::new(), // Unrecognized key
    };

    parts.push(&key_str);
    parts.join("+")
}

/// Parse a keybind string into the form produced by `key_event_to_string`
pub fn normalize_keybind(s: &str) -> String {
    let s = s.trim();
    if s.is_empty() {
        return String::new();
    }

    // `+` is both the separator and a bindable key
    let (prefix, key) = if s == "+" {
        ("", "+")
    } else if let Some(prefix) = s.strip_suffix("++") {
        (prefix, "+")
    } else {
        match s.rfind('+') {
            Some(pos) => (&s[..pos], &s[pos + 1..]),
            None => ("", s),
        }
    };

    let mut modifiers = Vec::new();
    for part in prefix.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.push("Ctrl"),
            "shift" => modifiers.push("Shift"),
            "alt" => modifiers.push("Alt"),
            other => tracing::warn!("Unknown modifier '{}' in keybind '{}'", other, s),
        }
    }

    let key = key.trim();
    let mut chars = key.chars();
    let key = match (chars.next(), chars.next()) {
        (Some(c), None) => {
            // Single characters ignore Shift, same as key_event_to_string
            modifiers.retain(|m| *m != "Shift");
            c.to_lowercase().to_string()
        }
        _ => canonical_key_name(key),
    };

    // Same modifier order key_event_to_string emits
    let mut parts: Vec<&str> = ["Ctrl", "Shift", "Alt"]
        .into_iter()
        .filter(|m| modifiers.contains(m))
        .collect();
    parts.push(&key);
    parts.join("+")
}

fn canonical_key_name(key: &str) -> String {
    let lower = key.to_ascii_lowercase();
    let name = match lower.as_str() {
        "up" => "Up",
        "down" => "Down",
        "left" => "Left",
        "right" => "Right",
        "enter" | "return" => "Enter",
        "esc" | "escape" => "Esc",
        "tab" => "Tab",
        "backspace" => "Backspace",
        "delete" | "del" => "Delete",
        "home" => "Home",
        "end" => "End",
        "pageup" | "pgup" => "PageUp",
        "pagedown" | "pgdn" => "PageDown",
        "insert" | "ins" => "Insert",
        "space" => " ",
        "plus" => "+",
        "minus" => "-",
        _ => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return format!("F{}", n);
            }
            return key.to_string();
        }
    };
    name.to_string()
}
