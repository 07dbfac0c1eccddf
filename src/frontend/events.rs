//! Frontend-agnostic input events.
//!
//! The terminal frontend translates its native crossterm event stream into
//! this enum so the application loop only handles one event shape.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

/// Events emitted by frontends, converted to a unified format
#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Mouse input
    Mouse {
        kind: MouseEventKind,
        x: u16,
        y: u16,
        modifiers: KeyModifiers,
    },
    /// Terminal resize
    Resize { width: u16, height: u16 },
    /// Application quit signal (Ctrl+C / Ctrl+Q)
    Quit,
}

impl FrontendEvent {
    /// Create a key event
    pub fn key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self::Key { code, modifiers }
    }

    /// Create a mouse event
    pub fn mouse(kind: MouseEventKind, x: u16, y: u16, modifiers: KeyModifiers) -> Self {
        Self::Mouse {
            kind,
            x,
            y,
            modifiers,
        }
    }

    /// Create a resize event
    pub fn resize(width: u16, height: u16) -> Self {
        Self::Resize { width, height }
    }

    /// Create a quit event
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Key press as a crossterm `KeyEvent`, for keybind resolution
    pub fn as_key_event(&self) -> Option<KeyEvent> {
        match self {
            Self::Key { code, modifiers } => Some(KeyEvent::new(*code, *modifiers)),
            _ => None,
        }
    }

    /// Position of a left click
    pub fn left_click(&self) -> Option<(u16, u16)> {
        match self {
            Self::Mouse {
                kind: MouseEventKind::Down(MouseButton::Left),
                x,
                y,
                ..
            } => Some((*x, *y)),
            _ => None,
        }
    }

    /// Host-level quit chords, handled before any keybind
    pub fn is_quit_chord(code: KeyCode, modifiers: KeyModifiers) -> bool {
        modifiers.contains(KeyModifiers::CONTROL)
            && matches!(code, KeyCode::Char('c') | KeyCode::Char('q'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let key_event = FrontendEvent::key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(key_event, FrontendEvent::Key { .. }));

        let resize_event = FrontendEvent::resize(120, 40);
        assert!(matches!(
            resize_event,
            FrontendEvent::Resize {
                width: 120,
                height: 40
            }
        ));

        let quit_event = FrontendEvent::quit();
        assert!(matches!(quit_event, FrontendEvent::Quit));
    }

    #[test]
    fn test_as_key_event() {
        let event = FrontendEvent::key(KeyCode::F(10), KeyModifiers::NONE);
        assert_eq!(
            event.as_key_event(),
            Some(KeyEvent::new(KeyCode::F(10), KeyModifiers::NONE))
        );
        assert_eq!(FrontendEvent::resize(1, 1).as_key_event(), None);
    }

    #[test]
    fn test_left_click_only() {
        let click = FrontendEvent::mouse(
            MouseEventKind::Down(MouseButton::Left),
            5,
            7,
            KeyModifiers::NONE,
        );
        assert_eq!(click.left_click(), Some((5, 7)));

        let scroll = FrontendEvent::mouse(MouseEventKind::ScrollDown, 5, 7, KeyModifiers::NONE);
        assert_eq!(scroll.left_click(), None);
    }

    #[test]
    fn test_quit_chords() {
        assert!(FrontendEvent::is_quit_chord(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        ));
        assert!(FrontendEvent::is_quit_chord(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL
        ));
        assert!(!FrontendEvent::is_quit_chord(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        ));
    }
}
