//! UI State - screen, selection and modal state of the setup session
//!
//! Pure data. `core::navigation` mutates it, frontends only read it.

use super::settings::NO_HELP;

/// Action that has to be confirmed with Y/N before it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Save,
    Exit,
    /// Load Fail-Safe Defaults
    Defaults,
    /// Load Optimized Defaults
    Optimized,
}

impl ConfirmAction {
    pub fn title(self) -> &'static str {
        match self {
            Self::Save => "Save & Exit Setup",
            Self::Exit => "Exit Without Saving",
            Self::Defaults => "Load Fail-Safe Defaults",
            Self::Optimized => "Load Optimized Defaults",
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            Self::Save => "Save configuration changes and exit?",
            Self::Exit => "Discard all changes and exit?",
            Self::Defaults => "Load fail-safe default settings?",
            Self::Optimized => "Load optimized default settings?",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Save => "Saving changes will restart your computer.",
            Self::Exit => "Exiting without saving will not affect your current settings.",
            Self::Defaults => "These settings are optimized for stability.",
            Self::Optimized => "These settings are optimized for performance.",
        }
    }
}

/// Which password the password dialog sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordTarget {
    Supervisor,
    User,
}

impl PasswordTarget {
    pub fn title(self) -> &'static str {
        match self {
            Self::Supervisor => "Set Supervisor Password",
            Self::User => "Set User Password",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Supervisor => "Password is required to access BIOS settings.",
            Self::User => "Password is required to boot the system.",
        }
    }
}

/// States of the navigation state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    SubMenu(String),
    PasswordEntry(PasswordTarget),
    Confirmation(ConfirmAction),
}

/// Input narrowing mode derived from the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    None,
    PasswordEntry,
    Confirmation,
}

impl Screen {
    pub fn modal_mode(&self) -> ModalMode {
        match self {
            Screen::MainMenu | Screen::SubMenu(_) => ModalMode::None,
            Screen::PasswordEntry(_) => ModalMode::PasswordEntry,
            Screen::Confirmation(_) => ModalMode::Confirmation,
        }
    }
}

/// Where the user is and what is highlighted
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub screen: Screen,

    /// Menu drawn underneath the screen (stays put while a dialog is open)
    pub menu_id: String,

    /// Index into the current menu's selectable entries
    pub selected: usize,

    /// Item help bound to the selected entry
    pub help_text: String,
}

impl NavigationState {
    pub fn new(root_menu: &str) -> Self {
        Self {
            screen: Screen::MainMenu,
            menu_id: root_menu.to_string(),
            selected: 0,
            help_text: NO_HELP.to_string(),
        }
    }

    pub fn modal_mode(&self) -> ModalMode {
        self.screen.modal_mode()
    }

    pub fn is_modal(&self) -> bool {
        self.modal_mode() != ModalMode::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_modes_follow_screen() {
        assert_eq!(Screen::MainMenu.modal_mode(), ModalMode::None);
        assert_eq!(
            Screen::SubMenu("standard".to_string()).modal_mode(),
            ModalMode::None
        );
        assert_eq!(
            Screen::PasswordEntry(PasswordTarget::User).modal_mode(),
            ModalMode::PasswordEntry
        );
        assert_eq!(
            Screen::Confirmation(ConfirmAction::Save).modal_mode(),
            ModalMode::Confirmation
        );
    }

    #[test]
    fn test_initial_navigation_state() {
        let nav = NavigationState::new("main");
        assert_eq!(nav.screen, Screen::MainMenu);
        assert_eq!(nav.selected, 0);
        assert!(!nav.is_modal());
    }
}
