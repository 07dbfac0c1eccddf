use crate::config::Config;
use crate::core::dispatcher::dispatch_key;
use crate::core::effect::{Effect, Notice};
use crate::core::navigation::{NavEvent, Session};
use crossterm::event::KeyEvent;

/// Core application state (frontend-agnostic)
///
/// AppCore wraps the setup session with everything the run loop needs on top
/// of it: configuration, the notice currently on screen and the running flag.
/// Frontends read it to render and feed it translated input.
#[derive(Debug)]
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// The simulated setup session
    pub session: Session,

    /// Acknowledgement popup waiting for a key press
    pub notice: Option<Notice>,

    /// Application running flag
    pub running: bool,

    /// Set by any effect that changed what is on screen
    needs_render: bool,
}

impl AppCore {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session: Session::new(),
            notice: None,
            running: true,
            needs_render: true,
        }
    }

    /// Feed one key press through the dispatcher
    ///
    /// While a notice is shown the key only dismisses it.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(notice) = self.notice.take() {
            tracing::debug!("Dismissed notice {:?}", notice);
            self.needs_render = true;
            return;
        }

        let effects = dispatch_key(&mut self.session, key, &self.config.keybinds);
        self.apply_effects(effects);
    }

    /// Mouse click on a selectable row
    pub fn handle_select(&mut self, index: usize) {
        if self.notice.is_some() {
            return;
        }
        let effects = self.session.apply(NavEvent::Select(index));
        self.apply_effects(effects);
    }

    pub fn quit(&mut self) {
        tracing::info!("Quit requested");
        self.running = false;
    }

    pub fn request_render(&mut self) {
        self.needs_render = true;
    }

    /// Returns true once per batch of changes
    pub fn take_render(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Notify(notice) => {
                    tracing::info!("Notice: {}", notice.message());
                    self.notice = Some(notice);
                    self.needs_render = true;
                }
                Effect::Render => self.needs_render = true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ConfirmAction, Screen};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_first_frame_renders() {
        let mut core = AppCore::new(Config::default());
        assert!(core.take_render());
        assert!(!core.take_render());
    }

    #[test]
    fn test_notice_swallows_next_key() {
        let mut core = AppCore::new(Config::default());
        core.handle_key(key(KeyCode::F(1)));
        assert_eq!(core.notice, Some(Notice::Help));

        // Dismissing doesn't move the selection
        core.handle_key(key(KeyCode::Down));
        assert_eq!(core.notice, None);
        assert_eq!(core.session.nav().selected, 0);

        core.handle_key(key(KeyCode::Down));
        assert_eq!(core.session.nav().selected, 1);
    }

    #[test]
    fn test_confirmed_save_shows_notice() {
        let mut core = AppCore::new(Config::default());
        core.handle_key(key(KeyCode::F(10)));
        assert_eq!(
            core.session.nav().screen,
            Screen::Confirmation(ConfirmAction::Save)
        );
        core.handle_key(key(KeyCode::Char('y')));
        assert_eq!(
            core.notice,
            Some(Notice::ActionDone(ConfirmAction::Save))
        );
        assert!(core.running);
    }

    #[test]
    fn test_click_ignored_under_notice() {
        let mut core = AppCore::new(Config::default());
        core.handle_key(key(KeyCode::F(1)));
        core.handle_select(3);
        assert_eq!(core.session.nav().selected, 0);

        core.handle_key(key(KeyCode::Esc));
        core.handle_select(3);
        assert_eq!(core.session.nav().selected, 3);
    }

    #[test]
    fn test_quit_clears_running() {
        let mut core = AppCore::new(Config::default());
        core.quit();
        assert!(!core.running);
    }
}
