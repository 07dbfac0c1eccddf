//! Data layer - Pure state without UI coupling
//!
//! Setting catalog, settings store, menu registry and navigation state.
//! NO imports from frontend/ or any rendering code.

pub mod catalog;
pub mod menus;
pub mod settings;
pub mod ui_state;

pub use menus::{EntryKind, Menu, MenuAction, MenuEntry, MenuLayout, MenuRegistry, MAIN_MENU};
pub use settings::{SettingCatalog, SettingsStore, NO_HELP};
pub use ui_state::{ConfirmAction, ModalMode, NavigationState, PasswordTarget, Screen};
