//! Static setting catalog: default value, legal values and item help for every
//! simulated CMOS setting.
//!
//! Settings with an empty domain are fixed readouts and can't be edited.

/// One row of the catalog
#[derive(Debug, Clone, Copy)]
pub struct SettingSpec {
    pub id: &'static str,
    pub default: &'static str,
    pub domain: &'static [&'static str],
    pub help: &'static str,
}

const fn setting(
    id: &'static str,
    default: &'static str,
    domain: &'static [&'static str],
    help: &'static str,
) -> SettingSpec {
    SettingSpec {
        id,
        default,
        domain,
        help,
    }
}

const FIXED: &[&str] = &[];
const ENABLED_DISABLED: &[&str] = &["[Enabled]", "[Disabled]"];
const AUTO_MANUAL: &[&str] = &["[Auto]", "[Manual]"];
const IDE_DRIVE: &[&str] = &["[Auto]", "[None]", "[Manual]"];
const SDRAM_DELAY: &[&str] = &["[2]", "[3]", "[4]"];
const AGP_APERTURE: &[&str] = &[
    "[4MB]", "[8MB]", "[16MB]", "[32MB]", "[64MB]", "[128MB]", "[256MB]",
];
const FIRST_BOOT: &[&str] = &["[HDD-0]", "[HDD-1]", "[Floppy]", "[CDROM]", "[ZIP100]", "[LS120]"];
const OTHER_BOOT: &[&str] = &[
    "[HDD-0]", "[HDD-1]", "[Floppy]", "[CDROM]", "[ZIP100]", "[LS120]", "[Disabled]",
];

pub static SETTINGS: &[SettingSpec] = &[
    // Standard CMOS Features
    setting("date", "05/15/2000", FIXED, "Allows you to set the system date."),
    setting("time", "12:34:56", FIXED, "Allows you to set the system time."),
    setting(
        "ide-primary-master",
        "[Auto]",
        IDE_DRIVE,
        "Sets the IDE Primary Master configuration.",
    ),
    setting(
        "ide-primary-slave",
        "[None]",
        IDE_DRIVE,
        "Sets the IDE Primary Slave configuration.",
    ),
    setting(
        "ide-secondary-master",
        "[Auto]",
        IDE_DRIVE,
        "Sets the IDE Secondary Master configuration.",
    ),
    setting(
        "ide-secondary-slave",
        "[None]",
        IDE_DRIVE,
        "Sets the IDE Secondary Slave configuration.",
    ),
    setting(
        "drive-a",
        "[1.44M, 3.5\"]",
        &["[1.44M, 3.5\"]", "[2.88M, 3.5\"]", "[1.2M, 5.25\"]", "[None]"],
        "Sets the Drive A configuration.",
    ),
    setting(
        "drive-b",
        "[None]",
        &["[None]", "[1.44M, 3.5\"]", "[2.88M, 3.5\"]", "[1.2M, 5.25\"]"],
        "Sets the Drive B configuration.",
    ),
    setting(
        "video",
        "[EGA/VGA]",
        &["[EGA/VGA]", "[VGA]", "[EGA]", "[CGA4]", "[CGA8]", "[MONO]"],
        "Sets the Video configuration.",
    ),
    setting(
        "halt-on",
        "[All Errors]",
        &[
            "[All Errors]",
            "[No Errors]",
            "[All, But Keyboard]",
            "[All, But Disk]",
            "[All, But Memory]",
        ],
        "Sets the Halt On configuration.",
    ),
    // Advanced BIOS Features
    setting(
        "virus-warning",
        "[Disabled]",
        ENABLED_DISABLED,
        "Allows you to choose the VIRUS warning feature for IDE Hard Disk boot sector \
         protection. If this function is enabled and someone attempt to write data into \
         this area, BIOS will show a warning message on screen and alarm beep.",
    ),
    setting(
        "cpu-cache",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the CPU Level 1 cache.",
    ),
    setting(
        "external-cache",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the CPU Level 2 cache.",
    ),
    setting(
        "quick-powertest",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the Quick Power On Self Test feature.",
    ),
    setting(
        "first-boot",
        "[HDD-0]",
        FIRST_BOOT,
        "Sets the first boot device for the system.",
    ),
    setting(
        "second-boot",
        "[Floppy]",
        OTHER_BOOT,
        "Sets the second boot device for the system.",
    ),
    setting(
        "third-boot",
        "[CDROM]",
        OTHER_BOOT,
        "Sets the third boot device for the system.",
    ),
    setting(
        "boot-other",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the Boot Other Device feature.",
    ),
    setting(
        "swap-floppy",
        "[Disabled]",
        ENABLED_DISABLED,
        "Enables or disables the Swap Floppy Drive feature.",
    ),
    setting(
        "floppy-seek",
        "[Disabled]",
        ENABLED_DISABLED,
        "Enables or disables the Floppy Drive Seek feature.",
    ),
    setting(
        "numlock",
        "[On]",
        &["[On]", "[Off]"],
        "Sets the Boot Up NumLock Status.",
    ),
    setting(
        "gate-a20",
        "[Fast]",
        &["[Fast]", "[Normal]"],
        "Sets the Gate A20 Option.",
    ),
    setting(
        "typematic",
        "[Disabled]",
        ENABLED_DISABLED,
        "Enables or disables the Typematic Rate Setting.",
    ),
    setting(
        "security",
        "[Setup]",
        &["[Setup]", "[System]", "[Always]"],
        "Sets the Security Option.",
    ),
    // Advanced Chipset Features
    setting(
        "dram-timing",
        "[By SPD]",
        &["[By SPD]", "[Manual]"],
        "Sets the DRAM Timing Settings.",
    ),
    setting(
        "cas-latency",
        "[2.5]",
        &["[2]", "[2.5]", "[3]"],
        "Sets the SDRAM CAS Latency.",
    ),
    setting(
        "ras-to-cas",
        "[3]",
        SDRAM_DELAY,
        "Sets the SDRAM RAS# to CAS# Delay.",
    ),
    setting(
        "ras-precharge",
        "[3]",
        SDRAM_DELAY,
        "Sets the SDRAM RAS# Precharge.",
    ),
    setting(
        "bios-cache",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the System BIOS Cacheable feature.",
    ),
    setting(
        "video-cache",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the Video BIOS Cacheable feature.",
    ),
    setting(
        "memory-hole",
        "[Disabled]",
        ENABLED_DISABLED,
        "Enables or disables the Memory Hole at 15M-16M.",
    ),
    setting(
        "agp-aperture",
        "[64MB]",
        AGP_APERTURE,
        "Sets the AGP Aperture Size.",
    ),
    setting("agp-mode", "[4X]", &["[1X]", "[2X]", "[4X]"], "Sets the AGP Mode."),
    setting(
        "agp-fast",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the AGP Fast Write feature.",
    ),
    setting(
        "agp-graphics",
        "[64MB]",
        AGP_APERTURE,
        "Sets the AGP Graphics Aperture Size.",
    ),
    setting(
        "usb-controller",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the USB Controller.",
    ),
    setting(
        "usb-keyboard",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the USB Keyboard Support.",
    ),
    // Integrated Peripherals
    setting(
        "fdc-controller",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the Onboard FDC Controller.",
    ),
    setting(
        "serial-port1",
        "[3F8/IRQ4]",
        FIXED,
        "Sets the Onboard Serial Port 1 configuration.",
    ),
    setting(
        "serial-port2",
        "[2F8/IRQ3]",
        FIXED,
        "Sets the Onboard Serial Port 2 configuration.",
    ),
    setting(
        "parallel-port",
        "[378/IRQ7]",
        FIXED,
        "Sets the Onboard Parallel Port configuration.",
    ),
    setting(
        "parallel-mode",
        "[ECP+EPP]",
        &["[SPP]", "[EPP]", "[ECP]", "[ECP+EPP]"],
        "Sets the Parallel Port Mode.",
    ),
    setting("ecp-dma", "[3]", &["[1]", "[3]"], "Sets the ECP Mode Use DMA."),
    setting(
        "epp-mode",
        "[EPP1.7]",
        &["[EPP1.7]", "[EPP1.9]"],
        "Sets the EPP Mode.",
    ),
    setting(
        "ide-controller",
        "[Both]",
        &["[Disabled]", "[Primary]", "[Secondary]", "[Both]"],
        "Sets the Onboard IDE Controller configuration.",
    ),
    setting(
        "primary-master",
        "[Auto]",
        FIXED,
        "Sets the Primary IDE Master configuration.",
    ),
    setting(
        "primary-slave",
        "[Auto]",
        FIXED,
        "Sets the Primary IDE Slave configuration.",
    ),
    setting(
        "secondary-master",
        "[Auto]",
        FIXED,
        "Sets the Secondary IDE Master configuration.",
    ),
    setting(
        "secondary-slave",
        "[Auto]",
        FIXED,
        "Sets the Secondary IDE Slave configuration.",
    ),
    setting(
        "audio-controller",
        "[Enabled]",
        FIXED,
        "Enables or disables the Onboard Audio Controller.",
    ),
    setting(
        "lan-controller",
        "[Enabled]",
        FIXED,
        "Enables or disables the Onboard LAN Controller.",
    ),
    // Power Management Setup
    setting(
        "acpi",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the ACPI Function.",
    ),
    setting(
        "power-mgmt",
        "[User Define]",
        &["[Disabled]", "[User Define]", "[Min Power]", "[Max Performance]"],
        "Sets the Power Management configuration.",
    ),
    setting(
        "pm-apm",
        "[Yes]",
        &["[Yes]", "[No]"],
        "Enables or disables the PM Control by APM feature.",
    ),
    setting(
        "video-off",
        "[DPMS]",
        &["[Disabled]", "[VESA]", "[DPMS]"],
        "Sets the Video Off Method.",
    ),
    setting(
        "video-suspend",
        "[Yes]",
        &["[Yes]", "[No]"],
        "Enables or disables the Video Off in Suspend feature.",
    ),
    setting(
        "suspend-type",
        "[Stop Grant]",
        &["[Disabled]", "[Stop Grant]", "[Sleep]", "[Suspend]"],
        "Sets the Suspend Type.",
    ),
    setting(
        "hdd-power",
        "[15 Min]",
        &[
            "[Never]", "[1 Min]", "[5 Min]", "[10 Min]", "[15 Min]", "[20 Min]", "[30 Min]",
        ],
        "Sets the HDD Power Down configuration.",
    ),
    setting(
        "soft-off",
        "[Delay 4 Sec]",
        &["[Instant-Off]", "[Delay 4 Sec]"],
        "Sets the Soft-Off by PWR-BTTN configuration.",
    ),
    setting(
        "ring-power",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the Power On by Ring feature.",
    ),
    setting(
        "mouse-power",
        "[Disabled]",
        ENABLED_DISABLED,
        "Enables or disables the Power On by Mouse feature.",
    ),
    setting(
        "kbd-power",
        "[Disabled]",
        ENABLED_DISABLED,
        "Enables or disables the Power On by Keyboard feature.",
    ),
    setting(
        "wake-events",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the Wake-Up Events feature.",
    ),
    // PnP/PCI Configurations
    setting(
        "reset-config",
        "[Disabled]",
        ENABLED_DISABLED,
        "Enables or disables the Reset Configuration Data feature.",
    ),
    setting(
        "resources",
        "[Auto]",
        AUTO_MANUAL,
        "Sets the Resources Controlled By configuration.",
    ),
    setting(
        "irq-resources",
        "[Available IRQs]",
        FIXED,
        "Sets the IRQ Resources configuration.",
    ),
    setting(
        "dma-resources",
        "[Available DMAs]",
        FIXED,
        "Sets the DMA Resources configuration.",
    ),
    setting(
        "pci-irq",
        "[Auto]",
        FIXED,
        "Sets the PCI IRQ Assignment configuration.",
    ),
    setting(
        "irq3",
        "[Legacy ISA]",
        FIXED,
        "Sets the PCI IRQ3 Assigned To configuration.",
    ),
    setting(
        "irq4",
        "[Legacy ISA]",
        FIXED,
        "Sets the PCI IRQ4 Assigned To configuration.",
    ),
    setting(
        "irq5",
        "[Legacy ISA]",
        FIXED,
        "Sets the PCI IRQ5 Assigned To configuration.",
    ),
    setting(
        "irq7",
        "[Legacy ISA]",
        FIXED,
        "Sets the PCI IRQ7 Assigned To configuration.",
    ),
    setting(
        "irq9",
        "[Legacy ISA]",
        FIXED,
        "Sets the PCI IRQ9 Assigned To configuration.",
    ),
    setting(
        "irq10",
        "[Legacy ISA]",
        FIXED,
        "Sets the PCI IRQ10 Assigned To configuration.",
    ),
    setting(
        "irq11",
        "[Legacy ISA]",
        FIXED,
        "Sets the PCI IRQ11 Assigned To configuration.",
    ),
    setting(
        "irq12",
        "[Legacy ISA]",
        FIXED,
        "Sets the PCI IRQ12 Assigned To configuration.",
    ),
    setting(
        "irq14",
        "[Legacy ISA]",
        FIXED,
        "Sets the PCI IRQ14 Assigned To configuration.",
    ),
    setting(
        "irq15",
        "[Legacy ISA]",
        FIXED,
        "Sets the PCI IRQ15 Assigned To configuration.",
    ),
    // PC Health Status
    setting(
        "chassis",
        "[Disabled]",
        ENABLED_DISABLED,
        "Enables or disables the Chassis Intrusion feature.",
    ),
    setting(
        "temp-alarm",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the Temperature Alarm feature.",
    ),
    setting(
        "fan-alarm",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the Fan Alarm feature.",
    ),
    setting(
        "voltage-alarm",
        "[Enabled]",
        ENABLED_DISABLED,
        "Enables or disables the Voltage Alarm feature.",
    ),
    // Frequency/Voltage Control
    setting("cpu-freq", "[800MHz]", FIXED, "Sets the CPU Frequency."),
    setting("cpu-mult", "[8x]", FIXED, "Sets the CPU Multiplier."),
    setting("fsb-freq", "[100MHz]", FIXED, "Sets the FSB Frequency."),
    setting("dram-freq", "[100MHz]", FIXED, "Sets the DRAM Frequency."),
    setting("agp-freq", "[66MHz]", FIXED, "Sets the AGP Frequency."),
    setting("cpu-voltage", "[1.65V]", FIXED, "Sets the CPU Voltage."),
    setting("agp-voltage", "[1.5V]", FIXED, "Sets the AGP Voltage."),
    setting("dram-voltage", "[2.5V]", FIXED, "Sets the DRAM Voltage."),
    setting(
        "cpu-vcore",
        "[Auto]",
        AUTO_MANUAL,
        "Sets the CPU Core Voltage Control.",
    ),
    setting(
        "dram-vcore",
        "[Auto]",
        AUTO_MANUAL,
        "Sets the DRAM Voltage Control.",
    ),
    setting(
        "agp-vcore",
        "[Auto]",
        AUTO_MANUAL,
        "Sets the AGP Voltage Control.",
    ),
    setting(
        "overclock",
        "[Disabled]",
        ENABLED_DISABLED,
        "Enables or disables the Overclocking Feature.",
    ),
    setting(
        "mem-timing",
        "[Auto]",
        AUTO_MANUAL,
        "Sets the Memory Timing Control.",
    ),
];
