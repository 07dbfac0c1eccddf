//! Input routing for the setup screens
//!
//! Routes keyboard input to a KeyRole based on:
//! - Current ModalMode (which roles the screen honours)
//! - Keybinds configuration

use crate::config::Keybinds;
use crate::core::key_roles::KeyRole;
use crate::data::ModalMode;
use crossterm::event::KeyEvent;

/// Where a key ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// Drive the navigation state machine
    Role(KeyRole),
    /// Hand the raw key to the password form
    PassThrough,
    /// Nothing to do
    Ignored,
}

/// Route a key event based on the current modal mode
pub fn route_key(key: KeyEvent, mode: ModalMode, keybinds: &Keybinds) -> Routed {
    let honoured = keybinds
        .roles_for(key)
        .into_iter()
        .find(|role| is_honoured(*role, mode));

    match (honoured, mode) {
        (Some(role), _) => Routed::Role(role),
        (None, ModalMode::PasswordEntry) => Routed::PassThrough,
        (None, _) => Routed::Ignored,
    }
}

/// Roles each modal mode reacts to
pub fn is_honoured(role: KeyRole, mode: ModalMode) -> bool {
    match mode {
        ModalMode::None => true,
        ModalMode::PasswordEntry => matches!(role, KeyRole::Confirm | KeyRole::Cancel),
        ModalMode::Confirmation => matches!(
            role,
            KeyRole::ConfirmYes | KeyRole::ConfirmNo | KeyRole::Cancel
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_all_roles_outside_modals() {
        let keybinds = Keybinds::default();
        for role in KeyRole::ALL {
            assert!(is_honoured(role, ModalMode::None));
        }
        assert_eq!(
            route_key(key(KeyCode::Char('+')), ModalMode::None, &keybinds),
            Routed::Role(KeyRole::IncrementValue)
        );
        assert_eq!(
            route_key(key(KeyCode::Char('y')), ModalMode::None, &keybinds),
            Routed::Role(KeyRole::ConfirmYes)
        );
    }

    #[test]
    fn test_password_entry_passes_text_through() {
        let keybinds = Keybinds::default();
        let mode = ModalMode::PasswordEntry;

        assert_eq!(
            route_key(key(KeyCode::Char('y')), mode, &keybinds),
            Routed::PassThrough
        );
        assert_eq!(
            route_key(key(KeyCode::Up), mode, &keybinds),
            Routed::PassThrough
        );
        assert_eq!(
            route_key(key(KeyCode::Backspace), mode, &keybinds),
            Routed::PassThrough
        );
        assert_eq!(
            route_key(key(KeyCode::F(10)), mode, &keybinds),
            Routed::PassThrough
        );
        assert_eq!(
            route_key(key(KeyCode::Enter), mode, &keybinds),
            Routed::Role(KeyRole::Confirm)
        );
        assert_eq!(
            route_key(key(KeyCode::Esc), mode, &keybinds),
            Routed::Role(KeyRole::Cancel)
        );
    }

    #[test]
    fn test_confirmation_only_yes_no_cancel() {
        let keybinds = Keybinds::default();
        let mode = ModalMode::Confirmation;

        assert_eq!(
            route_key(key(KeyCode::Char('+')), mode, &keybinds),
            Routed::Ignored
        );
        assert_eq!(
            route_key(key(KeyCode::Enter), mode, &keybinds),
            Routed::Ignored
        );
        assert_eq!(
            route_key(key(KeyCode::Down), mode, &keybinds),
            Routed::Ignored
        );
        assert_eq!(
            route_key(
                KeyEvent::new(KeyCode::Char('Y'), KeyModifiers::SHIFT),
                mode,
                &keybinds
            ),
            Routed::Role(KeyRole::ConfirmYes)
        );
        assert_eq!(
            route_key(key(KeyCode::Char('n')), mode, &keybinds),
            Routed::Role(KeyRole::ConfirmNo)
        );
        assert_eq!(
            route_key(key(KeyCode::Esc), mode, &keybinds),
            Routed::Role(KeyRole::Cancel)
        );
    }

    #[test]
    fn test_duplicate_binding_resolves_per_mode() {
        let mut keybinds = Keybinds::default();
        keybinds.confirm_yes = "Enter".to_string();

        assert_eq!(
            route_key(key(KeyCode::Enter), ModalMode::None, &keybinds),
            Routed::Role(KeyRole::Confirm)
        );
        assert_eq!(
            route_key(key(KeyCode::Enter), ModalMode::Confirmation, &keybinds),
            Routed::Role(KeyRole::ConfirmYes)
        );
    }

    #[test]
    fn test_unbound_key_ignored_outside_password() {
        let keybinds = Keybinds::default();
        assert_eq!(
            route_key(key(KeyCode::Char('q')), ModalMode::None, &keybinds),
            Routed::Ignored
        );
    }
}
