//! What the frontend should do after a transition.
//!
//! Transitions never draw anything themselves; they return effects and the
//! frontend applies them.

use crate::data::{ConfirmAction, PasswordTarget};

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a transient acknowledgement popup
    Notify(Notice),
    /// State changed, redraw
    Render,
}

/// Acknowledgements shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A confirmed action ran
    ActionDone(ConfirmAction),
    PasswordSet {
        target: PasswordTarget,
        disabled: bool,
    },
    PasswordMismatch,
    /// General help (F1)
    Help,
}

pub const GENERAL_HELP: &str = "General Help\n\n\
    \u{2191}\u{2193} : Move between items\n\
    Enter : Select a menu or open a dialog\n\
    +/- : Change the selected value\n\
    F10 : Save & Exit Setup\n\
    Esc : Return to the main menu / Quit\n\
    F1 : This help";

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::ActionDone(action) => action.title(),
            Notice::PasswordSet { target, .. } => target.title(),
            Notice::PasswordMismatch => "Error",
            Notice::Help => "Help",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::ActionDone(ConfirmAction::Save) => {
                "Configuration saved! System restarting...".to_string()
            }
            Notice::ActionDone(ConfirmAction::Exit) => "Exiting without saving...".to_string(),
            Notice::ActionDone(ConfirmAction::Defaults) => {
                "Fail-safe defaults loaded.".to_string()
            }
            Notice::ActionDone(ConfirmAction::Optimized) => {
                "Optimized defaults loaded.".to_string()
            }
            Notice::PasswordSet { target, disabled } => {
                let who = match target {
                    PasswordTarget::Supervisor => "Supervisor",
                    PasswordTarget::User => "User",
                };
                if *disabled {
                    format!("{} password disabled.", who)
                } else {
                    format!("{} password set.", who)
                }
            }
            Notice::PasswordMismatch => "Passwords do not match!".to_string(),
            Notice::Help => GENERAL_HELP.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::PasswordMismatch)
    }
}

impl Effect {
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Effect::Notify(notice) => Some(notice),
            Effect::Render => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_messages() {
        assert_eq!(
            Notice::ActionDone(ConfirmAction::Save).message(),
            "Configuration saved! System restarting..."
        );
        assert_eq!(
            Notice::ActionDone(ConfirmAction::Exit).message(),
            "Exiting without saving..."
        );
        assert_eq!(
            Notice::ActionDone(ConfirmAction::Defaults).message(),
            "Fail-safe defaults loaded."
        );
        assert_eq!(
            Notice::ActionDone(ConfirmAction::Optimized).message(),
            "Optimized defaults loaded."
        );
    }

    #[test]
    fn test_password_messages() {
        let set = Notice::PasswordSet {
            target: PasswordTarget::Supervisor,
            disabled: false,
        };
        assert_eq!(set.message(), "Supervisor password set.");

        let disabled = Notice::PasswordSet {
            target: PasswordTarget::User,
            disabled: true,
        };
        assert_eq!(disabled.message(), "User password disabled.");

        assert!(Notice::PasswordMismatch.is_error());
        assert!(!set.is_error());
    }

    #[test]
    fn test_effect_notice_accessor() {
        assert_eq!(Effect::Render.notice(), None);
        assert_eq!(
            Effect::Notify(Notice::Help).notice(),
            Some(&Notice::Help)
        );
    }
}
