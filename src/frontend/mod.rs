//! Frontend abstraction layer
//!
//! This module defines the `Frontend` trait the terminal frontend implements.
//! It provides a unified interface for event polling, rendering, and cleanup.

pub mod events;
pub mod tui;

use crate::core::AppCore;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Frontend trait
///
/// Separates rendering concerns from the setup state machine. The run loop
/// only talks to this trait.
pub trait Frontend {
    /// Poll for user input events
    ///
    /// Returns all pending events converted to the frontend-agnostic
    /// `FrontendEvent` enum (empty if none arrived before the poll timeout).
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Advance time-driven decorations (the status clock)
    ///
    /// Returns true when the frame should be redrawn.
    fn tick(&mut self) -> bool;

    /// Render the current application state
    fn render(&mut self, core: &AppCore) -> Result<()>;

    /// Selectable row under a screen position, from the last rendered frame
    fn hit_test(&self, x: u16, y: u16) -> Option<usize>;

    /// Cleanup and shutdown the frontend
    ///
    /// Restores the terminal before the application exits.
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal size as `(width, height)`
    fn size(&self) -> (u16, u16);
}
