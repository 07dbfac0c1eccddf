//! Submenu screen: setting rows on the left, item help on the right.

use super::screen::HitMap;
use super::status_bar::submenu_hints;
use crate::core::AppCore;
use crate::data::{EntryKind, MenuEntry};
use crate::theme::SetupTheme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// First entry to draw so the highlighted row stays inside `height` rows
pub fn scroll_offset(selected_pos: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    selected_pos.saturating_sub(height - 1)
}

pub fn render_setting_list(
    frame: &mut Frame,
    area: Rect,
    core: &AppCore,
    theme: &SetupTheme,
    hits: &mut HitMap,
) {
    let session = &core.session;
    let menu = session.current_menu();
    let selected = session.nav().selected;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(menu.title)
            .alignment(Alignment::Center)
            .style(theme.base_style().fg(theme.title)),
        chunks[0],
    );

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(chunks[1]);

    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.base_style().fg(theme.border))
        .style(theme.base_style());
    let list_area = list_block.inner(body[0]);
    frame.render_widget(list_block, body[0]);

    let label_width = menu
        .entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let selected_pos = menu.entry_position(selected).unwrap_or(0);
    let height = list_area.height as usize;
    let offset = scroll_offset(selected_pos, height);

    // Selectable index of every entry before the visible window
    let mut selectable_index = menu.entries[..offset.min(menu.entries.len())]
        .iter()
        .filter(|e| e.is_selectable())
        .count();

    for (row, entry) in menu.entries.iter().skip(offset).take(height).enumerate() {
        let row_area = Rect::new(list_area.x, list_area.y + row as u16, list_area.width, 1);
        let is_selected = entry.is_selectable() && selectable_index == selected;

        let line = entry_line(core, entry, label_width, is_selected, theme);
        frame.render_widget(Paragraph::new(line), row_area);

        if entry.is_selectable() {
            hits.push(row_area, selectable_index);
            selectable_index += 1;
        }
    }

    // Scroll arrows when the list doesn't fit
    if menu.entries.len() > height && list_area.width > 0 && height > 0 {
        let x = list_area.x + list_area.width - 1;
        let arrow_style = theme.base_style().fg(theme.border);
        if offset > 0 {
            frame.render_widget(
                Paragraph::new("\u{25b2}").style(arrow_style),
                Rect::new(x, list_area.y, 1, 1),
            );
        }
        if offset + height < menu.entries.len() {
            frame.render_widget(
                Paragraph::new("\u{25bc}").style(arrow_style),
                Rect::new(x, list_area.y + list_area.height - 1, 1, 1),
            );
        }
    }

    let help = Paragraph::new(vec![
        Line::from(Span::styled(
            "Menu Level  \u{25ba}",
            theme.base_style().fg(theme.help_text),
        )),
        Line::from(""),
        Line::from(session.help_text().to_string()),
    ])
    .style(theme.base_style().fg(theme.help_text))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                " Item Help ",
                theme.base_style().fg(theme.title).add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center)
            .border_style(theme.base_style().fg(theme.border)),
    );
    frame.render_widget(help, body[1]);

    frame.render_widget(
        Paragraph::new(submenu_hints(&core.config.keybinds))
            .alignment(Alignment::Center)
            .style(theme.base_style().fg(theme.hint_text)),
        chunks[2],
    );
}

fn entry_line<'a>(
    core: &'a AppCore,
    entry: &'a MenuEntry,
    label_width: usize,
    is_selected: bool,
    theme: &SetupTheme,
) -> Line<'a> {
    let label = format!(" {:<width$}", entry.label, width = label_width);

    let (value, editable) = match entry.kind {
        EntryKind::Setting(id) => (
            core.session.store().get(id).unwrap_or(""),
            core.session.catalog().is_editable(id),
        ),
        EntryKind::Static(value) => (value, false),
        EntryKind::Navigate(_) | EntryKind::Action(_) => ("", false),
    };

    let label_style = if entry.is_selectable() {
        theme.base_style()
    } else {
        theme.base_style().fg(theme.item_disabled)
    };
    let value_style = if is_selected {
        theme.selected_style()
    } else if editable {
        theme.base_style().fg(theme.value_normal)
    } else {
        theme.base_style().fg(theme.value_readonly)
    };

    Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(value, value_style),
    ])
}
