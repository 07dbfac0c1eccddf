//! Whole-frame projection of the application state.
//!
//! `draw` reads `AppCore` and never mutates it. While drawing it records the
//! rectangle of every selectable row so clicks can be mapped back to a
//! selection index.

use super::dialogs::{render_confirmation, render_notice, render_password};
use super::main_menu::render_main_menu;
use super::setting_list::render_setting_list;
use super::status_bar::render_status;
use crate::core::AppCore;
use crate::data::Screen;
use crate::theme::SetupTheme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    widgets::{Block, Paragraph},
    Frame,
};

/// Clickable rows of the last frame
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    rows: Vec<(Rect, usize)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, index: usize) {
        self.rows.push((area, index));
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Selectable index of the row under (x, y)
    pub fn hit(&self, x: u16, y: u16) -> Option<usize> {
        self.rows
            .iter()
            .find(|(area, _)| area.contains(Position { x, y }))
            .map(|(_, index)| *index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn draw(frame: &mut Frame, core: &AppCore, theme: &SetupTheme, status: &str) -> HitMap {
    let mut hits = HitMap::default();
    let area = frame.area();

    frame.render_widget(Block::default().style(theme.base_style()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(core.config.ui.title.as_str())
            .alignment(Alignment::Center)
            .style(theme.base_style().fg(theme.title)),
        chunks[0],
    );

    let nav = core.session.nav();
    if nav.menu_id == crate::data::MAIN_MENU {
        render_main_menu(frame, chunks[1], core, theme, &mut hits);
    } else {
        render_setting_list(frame, chunks[1], core, theme, &mut hits);
    }

    match nav.screen {
        Screen::Confirmation(action) => {
            render_confirmation(frame, chunks[1], action, &core.config.keybinds, theme);
        }
        Screen::PasswordEntry(target) => {
            render_password(frame, chunks[1], target, core.session.password_form(), theme);
        }
        Screen::MainMenu | Screen::SubMenu(_) => {}
    }

    // Rows under a dialog can't be clicked
    if nav.is_modal() {
        hits.clear();
    }

    if let Some(notice) = &core.notice {
        render_notice(frame, chunks[1], notice, theme);
        hits.clear();
    }

    render_status(frame, chunks[2], status, theme);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::theme::ThemePresets;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(core: &AppCore) -> (Vec<String>, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(80, 25)).unwrap();
        let theme = ThemePresets::award();
        let mut hits = HitMap::default();
        terminal
            .draw(|f| hits = draw(f, core, &theme, "System Time: 12:00:00"))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let lines = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
                    .collect::<String>()
            })
            .collect();
        (lines, hits)
    }

    fn press(core: &mut AppCore, code: KeyCode) {
        core.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen_contains(lines: &[String], text: &str) -> bool {
        lines.iter().any(|l| l.contains(text))
    }

    #[test]
    fn test_main_menu_frame() {
        let core = AppCore::new(Config::default());
        let (lines, hits) = render(&core);

        assert!(lines[0].contains("CMOS Setup Utility"));
        assert!(screen_contains(&lines, "Standard CMOS Features"));
        assert!(screen_contains(&lines, "Exit Without Saving"));
        assert!(screen_contains(&lines, "Time, Date, Hard Disk Type..."));
        assert!(lines[24].contains("System Time: 12:00:00"));
        assert_eq!(hits.len(), 14);
    }

    #[test]
    fn test_click_maps_to_selectable_index() {
        let core = AppCore::new(Config::default());
        let (lines, hits) = render(&core);

        let y = lines
            .iter()
            .position(|l| l.contains("Set User Password"))
            .unwrap() as u16;
        // Right column entries are 7..14 in selectable order
        assert_eq!(hits.hit(45, y), Some(11));
        assert_eq!(hits.hit(0, 0), None);
    }

    #[test]
    fn test_submenu_frame_shows_values_and_help() {
        let mut core = AppCore::new(Config::default());
        press(&mut core, KeyCode::Down);
        press(&mut core, KeyCode::Enter);
        let (lines, hits) = render(&core);

        assert!(screen_contains(&lines, "Advanced BIOS Features"));
        assert!(screen_contains(&lines, "Virus Warning"));
        assert!(screen_contains(&lines, "[Disabled]"));
        assert!(screen_contains(&lines, "Item Help"));
        assert_eq!(hits.len(), 14);
    }

    #[test]
    fn test_health_static_rows_not_clickable() {
        let mut core = AppCore::new(Config::default());
        for _ in 0..6 {
            press(&mut core, KeyCode::Down);
        }
        press(&mut core, KeyCode::Enter);
        let (lines, hits) = render(&core);

        assert!(screen_contains(&lines, "PC Health Status"));
        assert_eq!(hits.len(), 4);
    }

    #[test]
    fn test_confirmation_dialog_blocks_clicks() {
        let mut core = AppCore::new(Config::default());
        press(&mut core, KeyCode::F(10));
        let (lines, hits) = render(&core);

        assert!(screen_contains(&lines, "Save configuration changes and exit?"));
        assert!(screen_contains(&lines, "Press Y to confirm, N to cancel."));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_password_dialog_masks_input() {
        let mut core = AppCore::new(Config::default());
        for _ in 0..10 {
            press(&mut core, KeyCode::Down);
        }
        press(&mut core, KeyCode::Enter);
        for c in "abc".chars() {
            press(&mut core, KeyCode::Char(c));
        }
        let (lines, _) = render(&core);

        assert!(screen_contains(&lines, "Set Supervisor Password"));
        assert!(screen_contains(&lines, "Enter New Password:"));
        assert!(screen_contains(&lines, "***"));
        assert!(!screen_contains(&lines, "abc"));
    }

    #[test]
    fn test_notice_popup() {
        let mut core = AppCore::new(Config::default());
        press(&mut core, KeyCode::F(10));
        press(&mut core, KeyCode::Char('y'));
        let (lines, hits) = render(&core);

        assert!(screen_contains(&lines, "Configuration saved! System restarting..."));
        assert!(screen_contains(&lines, "Press any key to continue"));
        assert!(hits.is_empty());
    }
}
