//! Key dispatch: physical key → role → transition, or straight to the
//! password form while the password dialog is open.

use crate::config::Keybinds;
use crate::core::effect::Effect;
use crate::core::input_router::{route_key, Routed};
use crate::core::navigation::{NavEvent, Session};
use crossterm::event::KeyEvent;

pub fn dispatch_key(session: &mut Session, key: KeyEvent, keybinds: &Keybinds) -> Vec<Effect> {
    match route_key(key, session.nav().modal_mode(), keybinds) {
        Routed::Role(role) => session.apply(NavEvent::Role(role)),
        Routed::PassThrough => {
            session.password_form_mut().input(key);
            vec![Effect::Render]
        }
        Routed::Ignored => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effect::Notice;
    use crate::data::{ConfirmAction, PasswordTarget, Screen};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(session: &mut Session, keybinds: &Keybinds, code: KeyCode) -> Vec<Effect> {
        dispatch_key(session, KeyEvent::new(code, KeyModifiers::NONE), keybinds)
    }

    fn type_text(session: &mut Session, keybinds: &Keybinds, text: &str) {
        for c in text.chars() {
            press(session, keybinds, KeyCode::Char(c));
        }
    }

    fn open_supervisor_password(session: &mut Session, keybinds: &Keybinds) {
        for _ in 0..10 {
            press(session, keybinds, KeyCode::Down);
        }
        press(session, keybinds, KeyCode::Enter);
        assert_eq!(
            session.nav().screen,
            Screen::PasswordEntry(PasswordTarget::Supervisor)
        );
    }

    #[test]
    fn test_arrow_keys_move_selection() {
        let keybinds = Keybinds::default();
        let mut session = Session::new();
        press(&mut session, &keybinds, KeyCode::Down);
        press(&mut session, &keybinds, KeyCode::Down);
        assert_eq!(session.nav().selected, 2);
        press(&mut session, &keybinds, KeyCode::Up);
        assert_eq!(session.nav().selected, 1);
    }

    #[test]
    fn test_password_mismatch_then_match() {
        let keybinds = Keybinds::default();
        let mut session = Session::new();
        open_supervisor_password(&mut session, &keybinds);

        type_text(&mut session, &keybinds, "abc");
        press(&mut session, &keybinds, KeyCode::Tab);
        type_text(&mut session, &keybinds, "abd");
        let effects = press(&mut session, &keybinds, KeyCode::Enter);

        assert!(effects.contains(&Effect::Notify(Notice::PasswordMismatch)));
        assert_eq!(
            session.nav().screen,
            Screen::PasswordEntry(PasswordTarget::Supervisor)
        );
        assert_eq!(session.password_form().new_password(), "");
        assert_eq!(session.password_form().confirm_password(), "");
        assert_eq!(session.password_form().focused_field(), 0);

        type_text(&mut session, &keybinds, "abc");
        press(&mut session, &keybinds, KeyCode::Tab);
        type_text(&mut session, &keybinds, "abc");
        let effects = press(&mut session, &keybinds, KeyCode::Enter);

        assert_eq!(
            effects[0].notice().map(Notice::message),
            Some("Supervisor password set.".to_string())
        );
        assert_eq!(session.nav().screen, Screen::MainMenu);
    }

    #[test]
    fn test_letters_in_password_are_text() {
        let keybinds = Keybinds::default();
        let mut session = Session::new();
        open_supervisor_password(&mut session, &keybinds);

        type_text(&mut session, &keybinds, "yn+-");
        press(&mut session, &keybinds, KeyCode::F(10));

        assert_eq!(session.password_form().new_password(), "yn+-");
        assert_eq!(
            session.nav().screen,
            Screen::PasswordEntry(PasswordTarget::Supervisor)
        );
    }

    #[test]
    fn test_uppercase_y_confirms() {
        let keybinds = Keybinds::default();
        let mut session = Session::new();
        press(&mut session, &keybinds, KeyCode::F(10));

        let effects = dispatch_key(
            &mut session,
            KeyEvent::new(KeyCode::Char('Y'), KeyModifiers::SHIFT),
            &keybinds,
        );
        assert!(effects.contains(&Effect::Notify(Notice::ActionDone(ConfirmAction::Save))));
    }

    #[test]
    fn test_plus_ignored_in_confirmation() {
        let keybinds = Keybinds::default();
        let mut session = Session::new();
        press(&mut session, &keybinds, KeyCode::Esc);

        assert!(press(&mut session, &keybinds, KeyCode::Char('+')).is_empty());
        assert_eq!(
            session.nav().screen,
            Screen::Confirmation(ConfirmAction::Exit)
        );
    }

    #[test]
    fn test_rebound_keys() {
        let mut keybinds = Keybinds::default();
        keybinds.increment_value = "PageUp".to_string();
        let mut session = Session::new();

        // Advanced BIOS Features, first row is virus-warning
        press(&mut session, &keybinds, KeyCode::Down);
        press(&mut session, &keybinds, KeyCode::Enter);
        assert!(press(&mut session, &keybinds, KeyCode::Char('+')).is_empty());
        press(&mut session, &keybinds, KeyCode::PageUp);
        assert_eq!(session.store().get("virus-warning"), Some("[Enabled]"));
    }
}
