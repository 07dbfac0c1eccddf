//! bioshsim - retro BIOS setup utility simulator
//!
//! A keyboard-driven terminal recreation of an Award-style CMOS setup screen.
//! Nothing is written to real hardware; every setting lives in memory.

mod config;
mod core;
mod data;
mod frontend;
mod theme;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use frontend::{Frontend, FrontendEvent, TuiFrontend};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(ClapParser)]
#[command(name = "bioshsim")]
#[command(about = "Retro BIOS setup utility simulator", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.bioshsim)
    /// Can also be set via BIOSHSIM_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log file (default: debug.log in the data directory)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the setting catalog (defaults, allowed values and help)
    Settings {
        /// Only settings shown in this submenu (e.g. "advanced")
        #[arg(long, value_name = "ID")]
        menu: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Validate a config file's keybinds
    ValidateConfig {
        /// Config file to validate (defaults to the data directory's config.toml)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
struct SettingRow<'a> {
    id: &'a str,
    default: &'a str,
    domain: &'a [&'a str],
    help: &'a str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands (they print to stdout, no logging needed)
    if let Some(command) = &cli.command {
        return match command {
            Commands::Settings { menu, json } => print_settings(menu.as_deref(), *json),
            Commands::ValidateConfig { file } => {
                validate_config(file.as_deref(), cli.data_dir.as_deref())
            }
        };
    }

    init_logging(&cli)?;

    if let Some(data_dir) = &cli.data_dir {
        tracing::info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var(config::DATA_DIR_ENV) {
        tracing::info!("Using data directory from {}: {}", config::DATA_DIR_ENV, env_dir);
    }

    let config = if let Some(config_path) = &cli.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load_with_options(cli.data_dir.as_deref())?
    };

    run_tui(config)
}

/// Initialize logging to file (use RUST_LOG env var to control level, e.g. RUST_LOG=info)
/// TUI apps can't log to stdout, so we write to a file
fn init_logging(cli: &Cli) -> Result<()> {
    let log_path = match &cli.log_file {
        Some(path) => path.clone(),
        None => config::Config::log_path(cli.data_dir.as_deref())?,
    };
    if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create log directory {:?}", parent))?;
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context(format!("Failed to open log file {:?}", log_path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    Ok(())
}

/// Catalog rows in display order, optionally limited to one submenu
fn setting_rows<'a>(
    catalog: &'a data::SettingCatalog,
    registry: &'a data::MenuRegistry,
    menu: Option<&str>,
) -> Result<Vec<SettingRow<'a>>> {
    let ids: Vec<&'static str> = match menu {
        Some(id) => registry
            .get(id)
            .context(format!("Unknown menu '{}'", id))?
            .entries
            .iter()
            .filter_map(|e| e.setting_id())
            .collect(),
        None => catalog.ids().collect(),
    };

    Ok(ids
        .into_iter()
        .filter_map(|id| {
            catalog.get(id).map(|record| SettingRow {
                id,
                default: record.default,
                domain: record.domain,
                help: record.help,
            })
        })
        .collect())
}

fn print_settings(menu: Option<&str>, json: bool) -> Result<()> {
    let catalog = data::SettingCatalog::new();
    let registry = data::MenuRegistry::new();
    let rows = setting_rows(&catalog, &registry, menu)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("Failed to serialize settings")?
        );
        return Ok(());
    }

    let id_width = rows.iter().map(|r| r.id.len()).max().unwrap_or(0);
    for row in &rows {
        println!(
            "{:<width$}  {:<22}  {}",
            row.id,
            row.default,
            row.domain.join(" "),
            width = id_width
        );
    }
    println!("{} setting(s)", rows.len());
    Ok(())
}

fn validate_config(file: Option<&Path>, data_dir: Option<&Path>) -> Result<()> {
    let path = match file {
        Some(path) => path.to_path_buf(),
        None => config::Config::config_path(data_dir)?,
    };
    println!("Validating config file: {:?}", path);

    let parsed = std::fs::read_to_string(&path)
        .context(format!("Failed to read config file: {:?}", path))
        .and_then(|contents| config::Config::parse(&contents));
    let config = match parsed {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };
    println!("✓ Config loaded successfully");

    let result = config::keybind_validator::validate_keybinds(&config.keybinds);
    for error in result.errors() {
        eprintln!("✗ Error: {}", error.message());
    }
    for warning in result.warnings() {
        println!("⚠ Warning: {}", warning.message());
    }

    if result.issues.is_empty() {
        println!("✓ Keybinds are valid with no issues");
    }
    if !result.is_valid() {
        eprintln!("\n✗ Found {} error(s)", result.errors().len());
        std::process::exit(1);
    }
    Ok(())
}

/// Run TUI frontend
fn run_tui(config: config::Config) -> Result<()> {
    let mut app_core = core::AppCore::new(config);
    let mut frontend = TuiFrontend::new(&app_core)?;
    let (width, height) = frontend.size();
    tracing::info!("Entering setup at {}x{}", width, height);

    let result = run_loop(&mut app_core, &mut frontend);

    frontend.cleanup()?;
    tracing::info!("Exited setup");
    result
}

fn run_loop(app_core: &mut core::AppCore, frontend: &mut impl Frontend) -> Result<()> {
    while app_core.running {
        for event in frontend.poll_events()? {
            handle_frontend_event(app_core, &*frontend, event);
        }

        let clock_changed = frontend.tick();
        if app_core.take_render() || clock_changed {
            frontend.render(app_core)?;
        }
    }
    Ok(())
}

fn handle_frontend_event(
    app_core: &mut core::AppCore,
    frontend: &impl Frontend,
    event: FrontendEvent,
) {
    if let Some((x, y)) = event.left_click() {
        if let Some(index) = frontend.hit_test(x, y) {
            app_core.handle_select(index);
        }
        return;
    }

    match event {
        FrontendEvent::Quit => app_core.quit(),
        FrontendEvent::Resize { width, height } => {
            tracing::debug!("Terminal resized to {}x{}", width, height);
            app_core.request_render();
        }
        FrontendEvent::Key { .. } => {
            if let Some(key) = event.as_key_event() {
                app_core.handle_key(key);
            }
        }
        FrontendEvent::Mouse { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_rows_for_menu() {
        let catalog = data::SettingCatalog::new();
        let registry = data::MenuRegistry::new();

        let all = setting_rows(&catalog, &registry, None).unwrap();
        assert_eq!(all.len(), catalog.len());

        let advanced = setting_rows(&catalog, &registry, Some("advanced")).unwrap();
        assert!(!advanced.is_empty());
        assert!(advanced.len() < all.len());
        assert!(advanced.iter().any(|r| r.id == "virus-warning"));
    }

    #[test]
    fn test_setting_rows_unknown_menu() {
        let catalog = data::SettingCatalog::new();
        let registry = data::MenuRegistry::new();
        assert!(setting_rows(&catalog, &registry, Some("nope")).is_err());
    }

    #[test]
    fn test_setting_row_json() {
        let catalog = data::SettingCatalog::new();
        let registry = data::MenuRegistry::new();
        let rows = setting_rows(&catalog, &registry, Some("advanced")).unwrap();
        let json = serde_json::to_value(&rows).unwrap();
        assert!(json[0]["domain"].is_array());
        assert!(json[0]["help"].is_string());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["bioshsim", "settings", "--menu", "power", "--json"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Settings { ref menu, json: true }) if menu.as_deref() == Some("power")
        ));

        let cli = Cli::try_parse_from(["bioshsim", "--data-dir", "/tmp/x"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }
}
