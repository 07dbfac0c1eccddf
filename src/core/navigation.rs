//! Navigation state machine of the setup utility.
//!
//! `Session` owns everything that changes while the simulator runs: the
//! settings store, the navigation state and the password form. Every change
//! goes through `Session::apply`, which returns the effects the frontend
//! should show.

use crate::core::effect::{Effect, Notice};
use crate::core::input_router::is_honoured;
use crate::core::key_roles::KeyRole;
use crate::core::password_form::PasswordForm;
use crate::core::value_cycle::{self, Direction};
use crate::data::{
    ConfirmAction, EntryKind, Menu, MenuAction, MenuEntry, MenuRegistry, NavigationState,
    PasswordTarget, Screen, SettingCatalog, SettingsStore, MAIN_MENU, NO_HELP,
};

/// Values written by "Load Fail-Safe Defaults"
const FAIL_SAFE_DEFAULTS: &[(&str, &str)] = &[
    ("cpu-cache", "[Enabled]"),
    ("external-cache", "[Enabled]"),
    ("first-boot", "[HDD-0]"),
    ("security", "[Setup]"),
    ("halt-on", "[All Errors]"),
];

/// Values written by "Load Optimized Defaults"
const OPTIMIZED_DEFAULTS: &[(&str, &str)] = &[
    ("cpu-cache", "[Enabled]"),
    ("external-cache", "[Enabled]"),
    ("first-boot", "[HDD-0]"),
    ("cpu-freq", "[1000MHz]"),
    ("cpu-mult", "[10x]"),
    ("security", "[System]"),
];

/// Input to the state machine; keyboard and mouse both produce these
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Role(KeyRole),
    /// Highlight a selectable row directly (mouse click)
    Select(usize),
}

#[derive(Debug)]
pub struct Session {
    registry: MenuRegistry,
    catalog: SettingCatalog,
    store: SettingsStore,
    nav: NavigationState,
    password: PasswordForm,
    /// Shown when a submenu id has no definition
    placeholder: Menu,
}

impl Session {
    pub fn new() -> Self {
        Self::with_registry(MenuRegistry::new(), SettingCatalog::new())
    }

    pub fn with_registry(registry: MenuRegistry, catalog: SettingCatalog) -> Self {
        let store = SettingsStore::with_defaults(&catalog);
        let mut session = Self {
            registry,
            catalog,
            store,
            nav: NavigationState::new(MAIN_MENU),
            password: PasswordForm::new(),
            placeholder: Menu::missing(""),
        };
        session.rebind_help();
        session
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn catalog(&self) -> &SettingCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &MenuRegistry {
        &self.registry
    }

    pub fn password_form(&self) -> &PasswordForm {
        &self.password
    }

    /// Only the dispatcher's pass-through path writes here
    pub(crate) fn password_form_mut(&mut self) -> &mut PasswordForm {
        &mut self.password
    }

    /// Menu currently on screen (under any open dialog)
    pub fn current_menu(&self) -> &Menu {
        self.registry
            .get(&self.nav.menu_id)
            .unwrap_or(&self.placeholder)
    }

    pub fn selected_entry(&self) -> Option<&MenuEntry> {
        self.current_menu().selectable_entry(self.nav.selected)
    }

    pub fn help_text(&self) -> &str {
        &self.nav.help_text
    }

    /// Transition function
    pub fn apply(&mut self, event: NavEvent) -> Vec<Effect> {
        match event {
            NavEvent::Select(index) => self.select(index),
            NavEvent::Role(role) => {
                if !is_honoured(role, self.nav.modal_mode()) {
                    return Vec::new();
                }
                match self.nav.screen.clone() {
                    Screen::MainMenu | Screen::SubMenu(_) => self.apply_in_menu(role),
                    Screen::Confirmation(action) => self.apply_in_confirmation(action, role),
                    Screen::PasswordEntry(target) => self.apply_in_password(target, role),
                }
            }
        }
    }

    fn apply_in_menu(&mut self, role: KeyRole) -> Vec<Effect> {
        match role {
            KeyRole::Up => self.move_selection(-1),
            KeyRole::Down => self.move_selection(1),
            KeyRole::Confirm => self.activate_selected(),
            KeyRole::Cancel => {
                if self.nav.screen == Screen::MainMenu {
                    self.open_confirmation(ConfirmAction::Exit)
                } else {
                    self.go_main();
                    vec![Effect::Render]
                }
            }
            KeyRole::Help => vec![Effect::Notify(Notice::Help)],
            KeyRole::QuickSave => self.open_confirmation(ConfirmAction::Save),
            KeyRole::IncrementValue => self.cycle_selected(Direction::Increment),
            KeyRole::DecrementValue => self.cycle_selected(Direction::Decrement),
            KeyRole::ConfirmYes | KeyRole::ConfirmNo => Vec::new(),
        }
    }

    fn apply_in_confirmation(&mut self, action: ConfirmAction, role: KeyRole) -> Vec<Effect> {
        match role {
            KeyRole::ConfirmYes => {
                self.run_action(action);
                self.go_main();
                vec![Effect::Notify(Notice::ActionDone(action)), Effect::Render]
            }
            KeyRole::ConfirmNo | KeyRole::Cancel => {
                tracing::debug!("Declined {:?}", action);
                self.go_main();
                vec![Effect::Render]
            }
            _ => Vec::new(),
        }
    }

    fn apply_in_password(&mut self, target: PasswordTarget, role: KeyRole) -> Vec<Effect> {
        match role {
            KeyRole::Confirm => {
                let new_password = self.password.new_password();
                if new_password == self.password.confirm_password() {
                    let disabled = new_password.is_empty();
                    tracing::info!("{:?} password accepted (disabled: {})", target, disabled);
                    self.password.reset();
                    self.go_main();
                    vec![
                        Effect::Notify(Notice::PasswordSet { target, disabled }),
                        Effect::Render,
                    ]
                } else {
                    tracing::debug!("{:?} password entries differ", target);
                    self.password.reset();
                    vec![Effect::Notify(Notice::PasswordMismatch), Effect::Render]
                }
            }
            KeyRole::Cancel => {
                self.password.reset();
                self.go_main();
                vec![Effect::Render]
            }
            _ => Vec::new(),
        }
    }

    fn select(&mut self, index: usize) -> Vec<Effect> {
        if self.nav.is_modal() || index >= self.current_menu().selectable_len() {
            return Vec::new();
        }
        self.nav.selected = index;
        self.rebind_help();
        vec![Effect::Render]
    }

    fn move_selection(&mut self, delta: isize) -> Vec<Effect> {
        let len = self.current_menu().selectable_len();
        if len == 0 {
            return Vec::new();
        }

        let next = self
            .nav
            .selected
            .saturating_add_signed(delta)
            .min(len - 1);
        if next == self.nav.selected {
            return Vec::new();
        }

        self.nav.selected = next;
        self.rebind_help();
        vec![Effect::Render]
    }

    fn activate_selected(&mut self) -> Vec<Effect> {
        let Some(kind) = self.selected_entry().map(|e| e.kind.clone()) else {
            return Vec::new();
        };

        match kind {
            EntryKind::Navigate(target) => {
                self.open_submenu(target);
                vec![Effect::Render]
            }
            EntryKind::Action(MenuAction::Confirm(action)) => self.open_confirmation(action),
            EntryKind::Action(MenuAction::Password(target)) => {
                self.password.reset();
                self.nav.screen = Screen::PasswordEntry(target);
                tracing::debug!("Opened password dialog for {:?}", target);
                vec![Effect::Render]
            }
            // Values are edited with +/-, not Enter
            EntryKind::Setting(_) | EntryKind::Static(_) => Vec::new(),
        }
    }

    /// Enter a submenu with the first selectable row highlighted
    pub fn open_submenu(&mut self, id: &str) {
        if self.registry.get(id).is_none() {
            tracing::warn!("Submenu '{}' is not defined, showing placeholder", id);
            self.placeholder = Menu::missing(id);
        }

        self.nav.screen = Screen::SubMenu(id.to_string());
        self.nav.menu_id = id.to_string();
        self.nav.selected = 0;
        self.rebind_help();
        tracing::debug!("Entered submenu {}", id);
    }

    fn open_confirmation(&mut self, action: ConfirmAction) -> Vec<Effect> {
        self.nav.screen = Screen::Confirmation(action);
        tracing::debug!("Asking to confirm {:?}", action);
        vec![Effect::Render]
    }

    fn go_main(&mut self) {
        self.nav.screen = Screen::MainMenu;
        self.nav.menu_id = MAIN_MENU.to_string();
        self.nav.selected = 0;
        self.rebind_help();
    }

    fn cycle_selected(&mut self, direction: Direction) -> Vec<Effect> {
        let Some(id) = self.selected_entry().and_then(MenuEntry::setting_id) else {
            return Vec::new();
        };

        match value_cycle::cycle(&mut self.store, &self.catalog, id, direction) {
            Some(_) => vec![Effect::Render],
            None => Vec::new(),
        }
    }

    fn run_action(&mut self, action: ConfirmAction) {
        let values = match action {
            ConfirmAction::Save => {
                tracing::info!("Simulated save of {} settings", self.store.len());
                return;
            }
            ConfirmAction::Exit => {
                tracing::info!("Simulated exit without saving");
                return;
            }
            ConfirmAction::Defaults => FAIL_SAFE_DEFAULTS,
            ConfirmAction::Optimized => OPTIMIZED_DEFAULTS,
        };

        for (id, value) in values {
            self.store.set(id, value);
        }
        tracing::info!("Loaded {:?} ({} settings)", action, values.len());
    }

    /// Help text for the highlighted row
    fn rebind_help(&mut self) {
        let help = match self.selected_entry() {
            Some(MenuEntry {
                kind: EntryKind::Setting(id),
                ..
            }) => self.catalog.help(id),
            Some(entry) => entry.description.unwrap_or(NO_HELP),
            None => NO_HELP,
        };
        self.nav.help_text = help.to_string();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
