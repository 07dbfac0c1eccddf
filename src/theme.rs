//! Colour themes for the setup screens
//!
//! A theme is a flat set of named colours; the renderer never hard-codes a
//! colour. Built-in presets mimic the common firmware vendors' palettes.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

/// Every colour the setup screens use
#[derive(Debug, Clone, PartialEq)]
pub struct SetupTheme {
    pub name: String,
    pub description: String,

    // Screen
    pub background: Color,
    pub border: Color,
    pub title: Color,

    // Menu entries
    pub item_normal: Color,
    pub item_disabled: Color,
    pub item_selected_fg: Color,
    pub item_selected_bg: Color,

    // Setting values
    pub value_normal: Color,
    pub value_readonly: Color,

    // Item help panel
    pub help_text: Color,

    // Dialogs and notices
    pub dialog_background: Color,
    pub dialog_border: Color,
    pub dialog_text: Color,
    pub dialog_error: Color,
    pub field_background: Color,
    pub field_text: Color,

    // Bottom bars
    pub hint_text: Color,
    pub status_fg: Color,
    pub status_bg: Color,
}

impl SetupTheme {
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.item_normal).bg(self.background)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.item_selected_fg)
            .bg(self.item_selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dialog_style(&self) -> Style {
        Style::default()
            .fg(self.dialog_text)
            .bg(self.dialog_background)
    }

    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_fg).bg(self.status_bg)
    }
}

pub struct ThemePresets;

impl ThemePresets {
    pub fn all() -> HashMap<String, SetupTheme> {
        [Self::award(), Self::ami(), Self::mono()]
            .into_iter()
            .map(|theme| (theme.name.clone(), theme))
            .collect()
    }

    /// Look up a preset by name, falling back to the Award palette
    pub fn by_name(name: &str) -> SetupTheme {
        match Self::all().remove(&name.to_ascii_lowercase()) {
            Some(theme) => theme,
            None => {
                tracing::warn!("Unknown theme '{}', using award", name);
                Self::award()
            }
        }
    }

    /// Blue screen, yellow labels, red highlight bar
    pub fn award() -> SetupTheme {
        SetupTheme {
            name: "award".to_string(),
            description: "Blue Award-style setup screen".to_string(),
            background: Color::Blue,
            border: Color::White,
            title: Color::White,
            item_normal: Color::Yellow,
            item_disabled: Color::Gray,
            item_selected_fg: Color::White,
            item_selected_bg: Color::Red,
            value_normal: Color::Yellow,
            value_readonly: Color::White,
            help_text: Color::White,
            dialog_background: Color::Red,
            dialog_border: Color::White,
            dialog_text: Color::White,
            dialog_error: Color::Yellow,
            field_background: Color::Black,
            field_text: Color::White,
            hint_text: Color::White,
            status_fg: Color::Black,
            status_bg: Color::Cyan,
        }
    }

    /// Grey AMI-style screen with blue highlight
    pub fn ami() -> SetupTheme {
        SetupTheme {
            name: "ami".to_string(),
            description: "Grey AMI-style setup screen".to_string(),
            background: Color::Gray,
            border: Color::Black,
            title: Color::Blue,
            item_normal: Color::Black,
            item_disabled: Color::DarkGray,
            item_selected_fg: Color::White,
            item_selected_bg: Color::Blue,
            value_normal: Color::Blue,
            value_readonly: Color::DarkGray,
            help_text: Color::Black,
            dialog_background: Color::Blue,
            dialog_border: Color::White,
            dialog_text: Color::White,
            dialog_error: Color::LightRed,
            field_background: Color::Black,
            field_text: Color::White,
            hint_text: Color::Blue,
            status_fg: Color::White,
            status_bg: Color::Blue,
        }
    }

    /// Monochrome for terminals without colour
    pub fn mono() -> SetupTheme {
        SetupTheme {
            name: "mono".to_string(),
            description: "Black and white".to_string(),
            background: Color::Black,
            border: Color::White,
            title: Color::White,
            item_normal: Color::White,
            item_disabled: Color::Gray,
            item_selected_fg: Color::Black,
            item_selected_bg: Color::White,
            value_normal: Color::White,
            value_readonly: Color::Gray,
            help_text: Color::White,
            dialog_background: Color::Black,
            dialog_border: Color::White,
            dialog_text: Color::White,
            dialog_error: Color::White,
            field_background: Color::White,
            field_text: Color::Black,
            hint_text: Color::White,
            status_fg: Color::Black,
            status_bg: Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_keyed_by_name() {
        let all = ThemePresets::all();
        assert_eq!(all.len(), 3);
        for (name, theme) in &all {
            assert_eq!(name, &theme.name);
        }
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert_eq!(ThemePresets::by_name("AMI").name, "ami");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_award() {
        assert_eq!(ThemePresets::by_name("phoenix"), ThemePresets::award());
    }

    #[test]
    fn test_selection_is_visible() {
        for theme in ThemePresets::all().values() {
            assert_ne!(theme.item_selected_bg, theme.background, "{}", theme.name);
        }
    }
}
