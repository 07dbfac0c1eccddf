//! Menu registry: the main menu and every category submenu.
//!
//! Menus are plain data. Which entries can be highlighted is decided here
//! (`Menu::selectable`), what happens when one is activated is decided in
//! `core::navigation`.

use super::ui_state::{ConfirmAction, PasswordTarget};
use std::collections::HashMap;

pub const MAIN_MENU: &str = "main";

/// Label of the row shown for a submenu id with no definition
pub const MISSING_MENU_LABEL: &str = "[Submenu Content Not Found]";

/// What activating an action entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Confirm(ConfirmAction),
    Password(PasswordTarget),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Opens another menu
    Navigate(&'static str),
    /// Opens a confirmation prompt or the password dialog
    Action(MenuAction),
    /// Row bound to a setting in the store
    Setting(&'static str),
    /// Display-only row with a fixed value
    Static(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub kind: EntryKind,
    /// Status-line description for navigation and action entries
    pub description: Option<&'static str>,
}

impl MenuEntry {
    pub fn is_selectable(&self) -> bool {
        !matches!(self.kind, EntryKind::Static(_))
    }

    pub fn setting_id(&self) -> Option<&'static str> {
        match self.kind {
            EntryKind::Setting(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLayout {
    /// Entries before `split` go in the left column
    TwoColumn { split: usize },
    /// Setting rows with an item help panel
    List,
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub id: String,
    pub title: &'static str,
    pub layout: MenuLayout,
    pub entries: Vec<MenuEntry>,
}

impl Menu {
    /// Entries that take part in up/down navigation, in display order
    pub fn selectable(&self) -> Vec<&MenuEntry> {
        self.entries.iter().filter(|e| e.is_selectable()).collect()
    }

    pub fn selectable_len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_selectable()).count()
    }

    pub fn selectable_entry(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.iter().filter(|e| e.is_selectable()).nth(index)
    }

    /// Position of a selectable index inside `entries`
    pub fn entry_position(&self, index: usize) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_selectable())
            .nth(index)
            .map(|(pos, _)| pos)
    }

    /// Stand-in for a submenu id the registry doesn't know
    pub fn missing(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: "Unknown Menu",
            layout: MenuLayout::List,
            entries: vec![fixed(MISSING_MENU_LABEL, "")],
        }
    }
}

/// All menus: the root menu plus submenus keyed by id
#[derive(Debug, Clone)]
pub struct MenuRegistry {
    main: Menu,
    submenus: HashMap<String, Menu>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        let mut submenus = HashMap::new();
        for menu in [
            standard_menu(),
            advanced_menu(),
            chipset_menu(),
            peripherals_menu(),
            power_menu(),
            pnp_pci_menu(),
            health_menu(),
            frequency_menu(),
        ] {
            submenus.insert(menu.id.clone(), menu);
        }
        Self {
            main: main_menu(),
            submenus,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Menu> {
        if id == MAIN_MENU {
            Some(&self.main)
        } else {
            self.submenus.get(id)
        }
    }

    pub fn main(&self) -> &Menu {
        &self.main
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        std::iter::once(MAIN_MENU).chain(self.submenus.keys().map(String::as_str))
    }
}

impl Default for MenuRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn nav(label: &'static str, target: &'static str, description: &'static str) -> MenuEntry {
    MenuEntry {
        label,
        kind: EntryKind::Navigate(target),
        description: Some(description),
    }
}

fn action(label: &'static str, action: MenuAction, description: &'static str) -> MenuEntry {
    MenuEntry {
        label,
        kind: EntryKind::Action(action),
        description: Some(description),
    }
}

fn setting(label: &'static str, id: &'static str) -> MenuEntry {
    MenuEntry {
        label,
        kind: EntryKind::Setting(id),
        description: None,
    }
}

fn fixed(label: &'static str, value: &'static str) -> MenuEntry {
    MenuEntry {
        label,
        kind: EntryKind::Static(value),
        description: None,
    }
}

fn list_menu(id: &str, title: &'static str, entries: Vec<MenuEntry>) -> Menu {
    Menu {
        id: id.to_string(),
        title,
        layout: MenuLayout::List,
        entries,
    }
}

fn main_menu() -> Menu {
    let entries = vec![
        nav(
            "Standard CMOS Features",
            "standard",
            "Time, Date, Hard Disk Type...",
        ),
        nav(
            "Advanced BIOS Features",
            "advanced",
            "Virus Protection, Caches, Boot Device Order",
        ),
        nav(
            "Advanced Chipset Features",
            "chipset",
            "DRAM Timing, AGP and USB Configuration",
        ),
        nav(
            "Integrated Peripherals",
            "peripherals",
            "Onboard I/O Ports and Controllers",
        ),
        nav(
            "Power Management Setup",
            "power",
            "ACPI, Suspend and Wake-Up Options",
        ),
        nav(
            "PnP/PCI Configurations",
            "pnppci",
            "IRQ and DMA Resource Assignment",
        ),
        nav(
            "PC Health Status",
            "health",
            "Temperatures, Fan Speeds and Voltages",
        ),
        nav(
            "Frequency/Voltage Control",
            "frequency",
            "CPU Clock, Multiplier and Voltage Control",
        ),
        action(
            "Load Fail-Safe Defaults",
            MenuAction::Confirm(ConfirmAction::Defaults),
            "Load Fail-Safe Defaults for Stable Operation",
        ),
        action(
            "Load Optimized Defaults",
            MenuAction::Confirm(ConfirmAction::Optimized),
            "Load Optimized Defaults for Performance",
        ),
        action(
            "Set Supervisor Password",
            MenuAction::Password(PasswordTarget::Supervisor),
            "Change/Set/Disable Password",
        ),
        action(
            "Set User Password",
            MenuAction::Password(PasswordTarget::User),
            "Change/Set/Disable Password",
        ),
        action(
            "Save & Exit Setup",
            MenuAction::Confirm(ConfirmAction::Save),
            "Save Data to CMOS",
        ),
        action(
            "Exit Without Saving",
            MenuAction::Confirm(ConfirmAction::Exit),
            "Abandon all Data",
        ),
    ];

    Menu {
        id: MAIN_MENU.to_string(),
        title: "CMOS Setup Utility",
        layout: MenuLayout::TwoColumn { split: 7 },
        entries,
    }
}

fn standard_menu() -> Menu {
    list_menu(
        "standard",
        "Standard CMOS Features",
        vec![
            setting("Date (mm/dd/yyyy)", "date"),
            setting("Time (hh:mm:ss)", "time"),
            setting("IDE Primary Master", "ide-primary-master"),
            setting("IDE Primary Slave", "ide-primary-slave"),
            setting("IDE Secondary Master", "ide-secondary-master"),
            setting("IDE Secondary Slave", "ide-secondary-slave"),
            setting("Drive A", "drive-a"),
            setting("Drive B", "drive-b"),
            setting("Video", "video"),
            setting("Halt On", "halt-on"),
            fixed("Base Memory", "640K"),
            fixed("Extended Memory", "256MB"),
            fixed("Total Memory", "256MB"),
        ],
    )
}

fn advanced_menu() -> Menu {
    list_menu(
        "advanced",
        "Advanced BIOS Features",
        vec![
            setting("Virus Warning", "virus-warning"),
            setting("CPU Level 1 Cache", "cpu-cache"),
            setting("CPU Level 2 Cache", "external-cache"),
            setting("Quick Power On Self Test", "quick-powertest"),
            setting("First Boot Device", "first-boot"),
            setting("Second Boot Device", "second-boot"),
            setting("Third Boot Device", "third-boot"),
            setting("Boot Other Device", "boot-other"),
            setting("Swap Floppy Drive", "swap-floppy"),
            setting("Floppy Drive Seek", "floppy-seek"),
            setting("Boot Up NumLock Status", "numlock"),
            setting("Gate A20 Option", "gate-a20"),
            setting("Typematic Rate Setting", "typematic"),
            setting("Security Option", "security"),
        ],
    )
}

fn chipset_menu() -> Menu {
    list_menu(
        "chipset",
        "Advanced Chipset Features",
        vec![
            setting("DRAM Timing Settings", "dram-timing"),
            setting("SDRAM CAS Latency", "cas-latency"),
            setting("SDRAM RAS# to CAS# Delay", "ras-to-cas"),
            setting("SDRAM RAS# Precharge", "ras-precharge"),
            setting("System BIOS Cacheable", "bios-cache"),
            setting("Video BIOS Cacheable", "video-cache"),
            setting("Memory Hole at 15M-16M", "memory-hole"),
            setting("AGP Aperture Size", "agp-aperture"),
            setting("AGP Mode", "agp-mode"),
            setting("AGP Fast Write", "agp-fast"),
            setting("AGP Graphics Aperture Size", "agp-graphics"),
            setting("USB Controller", "usb-controller"),
            setting("USB Keyboard Support", "usb-keyboard"),
        ],
    )
}

fn peripherals_menu() -> Menu {
    list_menu(
        "peripherals",
        "Integrated Peripherals",
        vec![
            setting("Onboard FDC Controller", "fdc-controller"),
            setting("Onboard Serial Port 1", "serial-port1"),
            setting("Onboard Serial Port 2", "serial-port2"),
            setting("Onboard Parallel Port", "parallel-port"),
            setting("Parallel Port Mode", "parallel-mode"),
            setting("ECP Mode Use DMA", "ecp-dma"),
            setting("EPP Mode", "epp-mode"),
            setting("Onboard IDE Controller", "ide-controller"),
            setting("Primary IDE Master", "primary-master"),
            setting("Primary IDE Slave", "primary-slave"),
            setting("Secondary IDE Master", "secondary-master"),
            setting("Secondary IDE Slave", "secondary-slave"),
            setting("Onboard Audio Controller", "audio-controller"),
            setting("Onboard LAN Controller", "lan-controller"),
        ],
    )
}

fn power_menu() -> Menu {
    list_menu(
        "power",
        "Power Management Setup",
        vec![
            setting("ACPI Function", "acpi"),
            setting("Power Management", "power-mgmt"),
            setting("PM Control by APM", "pm-apm"),
            setting("Video Off Method", "video-off"),
            setting("Video Off in Suspend", "video-suspend"),
            setting("Suspend Type", "suspend-type"),
            setting("HDD Power Down", "hdd-power"),
            setting("Soft-Off by PWR-BTTN", "soft-off"),
            setting("Power On by Ring", "ring-power"),
            setting("Power On by Mouse", "mouse-power"),
            setting("Power On by Keyboard", "kbd-power"),
            setting("Wake-Up Events", "wake-events"),
        ],
    )
}

fn pnp_pci_menu() -> Menu {
    list_menu(
        "pnppci",
        "PnP/PCI Configurations",
        vec![
            setting("Reset Configuration Data", "reset-config"),
            setting("Resources Controlled By", "resources"),
            setting("IRQ Resources", "irq-resources"),
            setting("DMA Resources", "dma-resources"),
            setting("PCI IRQ Assignment", "pci-irq"),
            setting("PCI IRQ3 Assigned To", "irq3"),
            setting("PCI IRQ4 Assigned To", "irq4"),
            setting("PCI IRQ5 Assigned To", "irq5"),
            setting("PCI IRQ7 Assigned To", "irq7"),
            setting("PCI IRQ9 Assigned To", "irq9"),
            setting("PCI IRQ10 Assigned To", "irq10"),
            setting("PCI IRQ11 Assigned To", "irq11"),
            setting("PCI IRQ12 Assigned To", "irq12"),
            setting("PCI IRQ14 Assigned To", "irq14"),
            setting("PCI IRQ15 Assigned To", "irq15"),
        ],
    )
}

fn health_menu() -> Menu {
    list_menu(
        "health",
        "PC Health Status",
        vec![
            fixed("CPU Temperature", "[45°C]"),
            fixed("System Temperature", "[38°C]"),
            fixed("CPU Fan Speed", "[3200 RPM]"),
            fixed("System Fan Speed", "[2800 RPM]"),
            fixed("Voltage +12V", "[12.1V]"),
            fixed("Voltage +5V", "[5.05V]"),
            fixed("Voltage +3.3V", "[3.32V]"),
            fixed("Voltage Vcore", "[1.65V]"),
            setting("Chassis Intrusion", "chassis"),
            setting("Temperature Alarm", "temp-alarm"),
            setting("Fan Alarm", "fan-alarm"),
            setting("Voltage Alarm", "voltage-alarm"),
        ],
    )
}

fn frequency_menu() -> Menu {
    list_menu(
        "frequency",
        "Frequency/Voltage Control",
        vec![
            setting("CPU Frequency", "cpu-freq"),
            setting("CPU Multiplier", "cpu-mult"),
            setting("FSB Frequency", "fsb-freq"),
            setting("DRAM Frequency", "dram-freq"),
            setting("AGP Frequency", "agp-freq"),
            setting("CPU Voltage", "cpu-voltage"),
            setting("AGP Voltage", "agp-voltage"),
            setting("DRAM Voltage", "dram-voltage"),
            setting("CPU Core Voltage Control", "cpu-vcore"),
            setting("DRAM Voltage Control", "dram-vcore"),
            setting("AGP Voltage Control", "agp-vcore"),
            setting("Overclocking Feature", "overclock"),
            setting("Memory Timing Control", "mem-timing"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::settings::SettingCatalog;

    #[test]
    fn test_main_menu_has_two_columns_of_seven() {
        let registry = MenuRegistry::new();
        let main = registry.main();
        assert_eq!(main.entries.len(), 14);
        assert_eq!(main.selectable_len(), 14);
        assert_eq!(main.layout, MenuLayout::TwoColumn { split: 7 });
    }

    #[test]
    fn test_every_navigation_target_is_registered() {
        let registry = MenuRegistry::new();
        for entry in &registry.main().entries {
            if let EntryKind::Navigate(target) = entry.kind {
                assert!(registry.get(target).is_some(), "missing menu {}", target);
            }
        }
    }

    #[test]
    fn test_every_setting_row_is_in_catalog() {
        let registry = MenuRegistry::new();
        let catalog = SettingCatalog::new();
        for id in registry.ids() {
            let menu = registry.get(id).unwrap();
            for entry in &menu.entries {
                if let Some(setting_id) = entry.setting_id() {
                    assert!(
                        catalog.get(setting_id).is_some(),
                        "{} row {} has no catalog record",
                        id,
                        setting_id
                    );
                }
            }
        }
    }

    #[test]
    fn test_static_rows_are_skipped() {
        let registry = MenuRegistry::new();
        let health = registry.get("health").unwrap();
        assert_eq!(health.entries.len(), 12);
        assert_eq!(health.selectable_len(), 4);
        assert_eq!(
            health.selectable_entry(0).and_then(MenuEntry::setting_id),
            Some("chassis")
        );
        assert_eq!(health.entry_position(0), Some(8));

        let standard = registry.get("standard").unwrap();
        assert_eq!(standard.selectable_len(), 10);
    }

    #[test]
    fn test_missing_menu_placeholder() {
        let menu = Menu::missing("bogus");
        assert_eq!(menu.entries.len(), 1);
        assert_eq!(menu.entries[0].label, MISSING_MENU_LABEL);
        assert_eq!(menu.selectable_len(), 0);
        assert!(menu.selectable_entry(0).is_none());
    }
}
