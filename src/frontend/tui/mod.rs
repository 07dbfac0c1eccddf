//! TUI Frontend (ratatui-based)
//!
//! Implements the Frontend trait using ratatui for terminal rendering and
//! crossterm for event handling and terminal management.

pub mod dialogs;
pub mod main_menu;
pub mod screen;
pub mod setting_list;
pub mod status_bar;

use crate::core::AppCore;
use crate::frontend::{Frontend, FrontendEvent};
use crate::theme::{SetupTheme, ThemePresets};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use screen::HitMap;
use status_bar::{status_line, StatusClock};
use std::io;
use std::time::Duration;

/// TUI Frontend using ratatui
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
    theme: SetupTheme,
    clock: Option<StatusClock>,
    status_suffix: String,
    hits: HitMap,
    cleaned_up: bool,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode, enables mouse capture, and enters alternate screen.
    pub fn new(core: &AppCore) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        let ui = &core.config.ui;
        tracing::info!("Terminal initialized (theme: {})", ui.theme);

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(ui.poll_timeout_ms),
            theme: ThemePresets::by_name(&ui.theme),
            clock: ui.show_status_clock.then(StatusClock::new),
            status_suffix: ui.status_suffix.clone(),
            hits: HitMap::default(),
            cleaned_up: false,
        })
    }

    /// Convert crossterm event to FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (ignore repeats and releases)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                if FrontendEvent::is_quit_chord(key_event.code, key_event.modifiers) {
                    return Some(FrontendEvent::Quit);
                }
                Some(FrontendEvent::key(key_event.code, key_event.modifiers))
            }
            Event::Mouse(mouse_event) => Some(FrontendEvent::mouse(
                mouse_event.kind,
                mouse_event.column,
                mouse_event.row,
                mouse_event.modifiers,
            )),
            Event::Resize(w, h) => Some(FrontendEvent::resize(w, h)),
            _ => None,
        }
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        // Block up to the timeout for the first event, then drain the rest
        let mut timeout = self.poll_timeout;
        while event::poll(timeout)? {
            if let Ok(ev) = event::read() {
                if let Some(frontend_event) = Self::convert_event(ev) {
                    events.push(frontend_event);
                }
            }
            timeout = Duration::ZERO;
        }

        Ok(events)
    }

    fn tick(&mut self) -> bool {
        match self.clock.as_mut() {
            Some(clock) => clock.tick(chrono::Local::now().naive_local()),
            None => false,
        }
    }

    fn render(&mut self, core: &AppCore) -> Result<()> {
        let status = status_line(self.clock.as_ref(), &self.status_suffix);
        let theme = &self.theme;
        let mut hits = HitMap::default();

        self.terminal
            .draw(|f| hits = screen::draw(f, core, theme, &status))
            .context("Failed to draw frame")?;

        self.hits = hits;
        Ok(())
    }

    fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        self.hits.hit(x, y)
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.cleaned_up {
            return Ok(());
        }
        self.cleaned_up = true;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}
