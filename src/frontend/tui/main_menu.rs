//! Two-column main menu with the key hint and description bars below it.

use super::screen::HitMap;
use super::status_bar::main_menu_hints;
use crate::core::AppCore;
use crate::data::MenuLayout;
use crate::theme::SetupTheme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_main_menu(
    frame: &mut Frame,
    area: Rect,
    core: &AppCore,
    theme: &SetupTheme,
    hits: &mut HitMap,
) {
    let menu = core.session.current_menu();
    let selected = core.session.nav().selected;
    let help_text = core.session.help_text();
    let keybinds = &core.config.keybinds;

    let split = match menu.layout {
        MenuLayout::TwoColumn { split } => split,
        MenuLayout::List => menu.entries.len(),
    };
    let rows = split.max(menu.entries.len().saturating_sub(split)) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows + 2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.base_style().fg(theme.border))
        .style(theme.base_style());
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    // Selectable indices follow entry order; static rows don't get one
    let mut selectable_index = 0;
    for (pos, entry) in menu.entries.iter().enumerate() {
        let (column, row) = if pos < split {
            (columns[0], pos)
        } else {
            (columns[1], pos - split)
        };
        if row as u16 >= column.height {
            continue;
        }
        let row_area = Rect::new(column.x, column.y + row as u16, column.width, 1);

        let (style, marker) = if entry.is_selectable() && selectable_index == selected {
            (theme.selected_style(), "\u{25ba} ")
        } else if entry.is_selectable() {
            (theme.base_style(), "\u{25ba} ")
        } else {
            (theme.base_style().fg(theme.item_disabled), "  ")
        };

        let line = Line::from(vec![
            Span::styled(" ", theme.base_style()),
            Span::styled(format!("{}{}", marker, entry.label), style),
        ]);
        frame.render_widget(Paragraph::new(line), row_area);

        if entry.is_selectable() {
            hits.push(row_area, selectable_index);
            selectable_index += 1;
        }
    }

    // Key hints
    let (left_hint, right_hint) = main_menu_hints(keybinds);
    let hint_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.base_style().fg(theme.border))
        .style(theme.base_style());
    let hint_inner = hint_block.inner(chunks[1]);
    frame.render_widget(hint_block, chunks[1]);
    let hint_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(hint_inner);
    frame.render_widget(
        Paragraph::new(format!(" {}", left_hint)).style(theme.base_style().fg(theme.hint_text)),
        hint_cols[0],
    );
    frame.render_widget(
        Paragraph::new(format!(" {}", right_hint)).style(theme.base_style().fg(theme.hint_text)),
        hint_cols[1],
    );

    // Description of the highlighted entry
    let description = Paragraph::new(help_text.to_string())
        .alignment(Alignment::Center)
        .style(theme.base_style().fg(theme.help_text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.base_style().fg(theme.border)),
        );
    frame.render_widget(description, chunks[2]);
}
