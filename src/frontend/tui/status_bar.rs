//! Bottom status bar: wall clock plus simulated hardware info, and the key
//! hint line built from the configured keybinds.

use crate::config::Keybinds;
use crate::core::KeyRole;
use crate::theme::SetupTheme;
use chrono::{NaiveDateTime, SubsecRound};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Clock text that changes at most once per second
#[derive(Debug, Default)]
pub struct StatusClock {
    last_second: Option<NaiveDateTime>,
    text: String,
}

impl StatusClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the text for `now`; true when the displayed second changed
    pub fn tick(&mut self, now: NaiveDateTime) -> bool {
        let second = now.trunc_subsecs(0);
        if self.last_second == Some(second) {
            return false;
        }
        self.last_second = Some(second);
        self.text = second
            .format("System Time: %H:%M:%S | Date: %m/%d/%Y")
            .to_string();
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Compose the status line from the clock and the configured suffix
pub fn status_line(clock: Option<&StatusClock>, suffix: &str) -> String {
    match clock.map(StatusClock::text).filter(|t| !t.is_empty()) {
        Some(time) if suffix.is_empty() => time.to_string(),
        Some(time) => format!("{} | {}", time, suffix),
        None => suffix.to_string(),
    }
}

pub fn render_status(frame: &mut Frame, area: Rect, text: &str, theme: &SetupTheme) {
    let paragraph = Paragraph::new(Line::from(format!(" {}", text))).style(theme.status_style());
    frame.render_widget(paragraph, area);
}

/// Short display form of a keybind ("Up" becomes an arrow)
pub fn key_label(binding: &str) -> String {
    match binding {
        "Up" => "\u{2191}".to_string(),
        "Down" => "\u{2193}".to_string(),
        "Esc" => "ESC".to_string(),
        other => other.to_uppercase(),
    }
}

fn label(keybinds: &Keybinds, role: KeyRole) -> String {
    key_label(keybinds.binding(role))
}

/// Hints under the main menu: two columns, like the classic layout
pub fn main_menu_hints(keybinds: &Keybinds) -> (String, String) {
    (
        format!("{} : Quit", label(keybinds, KeyRole::Cancel)),
        format!(
            "{}{} : Select Item    {} : Save & Exit Setup",
            label(keybinds, KeyRole::Up),
            label(keybinds, KeyRole::Down),
            label(keybinds, KeyRole::QuickSave)
        ),
    )
}

/// Hint line under a submenu
pub fn submenu_hints(keybinds: &Keybinds) -> String {
    format!(
        "{}{}:Move  {}:Select  {}/{}:Value  {}:Save  {}:Exit  {}:General Help",
        label(keybinds, KeyRole::Up),
        label(keybinds, KeyRole::Down),
        label(keybinds, KeyRole::Confirm),
        label(keybinds, KeyRole::IncrementValue),
        label(keybinds, KeyRole::DecrementValue),
        label(keybinds, KeyRole::QuickSave),
        label(keybinds, KeyRole::Cancel),
        label(keybinds, KeyRole::Help),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, milli: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2000, 5, 15)
            .unwrap()
            .and_hms_milli_opt(h, m, s, milli)
            .unwrap()
    }

    #[test]
    fn test_clock_format() {
        let mut clock = StatusClock::new();
        assert!(clock.tick(at(12, 34, 56, 0)));
        assert_eq!(clock.text(), "System Time: 12:34:56 | Date: 05/15/2000");
    }

    #[test]
    fn test_clock_ticks_once_per_second() {
        let mut clock = StatusClock::new();
        assert!(clock.tick(at(9, 0, 0, 10)));
        assert!(!clock.tick(at(9, 0, 0, 500)));
        assert!(!clock.tick(at(9, 0, 0, 999)));
        assert!(clock.tick(at(9, 0, 1, 0)));
        assert_eq!(clock.text(), "System Time: 09:00:01 | Date: 05/15/2000");
    }

    #[test]
    fn test_status_line() {
        let mut clock = StatusClock::new();
        clock.tick(at(1, 2, 3, 0));
        assert_eq!(
            status_line(Some(&clock), "HDD: None | FDD: 1.44M"),
            "System Time: 01:02:03 | Date: 05/15/2000 | HDD: None | FDD: 1.44M"
        );
        assert_eq!(status_line(None, "FDD: 1.44M"), "FDD: 1.44M");
        assert_eq!(status_line(Some(&StatusClock::new()), "x"), "x");
    }

    #[test]
    fn test_hints_follow_keybinds() {
        let mut keybinds = Keybinds::default();
        assert!(submenu_hints(&keybinds).starts_with("\u{2191}\u{2193}:Move"));
        keybinds.quick_save = "F2".to_string();
        assert!(submenu_hints(&keybinds).contains("F2:Save"));
        assert_eq!(main_menu_hints(&keybinds).0, "ESC : Quit");
    }
}
