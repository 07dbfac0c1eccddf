//! Popups drawn over the menus: Y/N confirmation, password entry and the
//! acknowledgement notice.

use super::status_bar::key_label;
use crate::config::Keybinds;
use crate::core::password_form::{PasswordForm, FIELD_LABELS};
use crate::core::{KeyRole, Notice};
use crate::data::{ConfirmAction, PasswordTarget};
use crate::theme::SetupTheme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Rect of `width` x `height` centered in `area`, clipped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn dialog_block<'a>(title: &'a str, theme: &SetupTheme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", title),
            theme.dialog_style().add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .border_style(theme.dialog_style().fg(theme.dialog_border))
        .style(theme.dialog_style())
}

pub fn render_confirmation(
    frame: &mut Frame,
    area: Rect,
    action: ConfirmAction,
    keybinds: &Keybinds,
    theme: &SetupTheme,
) {
    let popup = centered_rect(60, 9, area);
    frame.render_widget(Clear, popup);

    let prompt = format!(
        "Press {} to confirm, {} to cancel.",
        key_label(keybinds.binding(KeyRole::ConfirmYes)),
        key_label(keybinds.binding(KeyRole::ConfirmNo))
    );
    let lines = vec![
        Line::from(""),
        Line::from(action.question()),
        Line::from(""),
        Line::from(prompt),
        Line::from(action.description()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(dialog_block(action.title(), theme));
    frame.render_widget(paragraph, popup);
}

pub fn render_password(
    frame: &mut Frame,
    area: Rect,
    target: PasswordTarget,
    form: &PasswordForm,
    theme: &SetupTheme,
) {
    let popup = centered_rect(56, 9, area);
    frame.render_widget(Clear, popup);

    let block = dialog_block(target.title(), theme);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if inner.height == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new(target.description()).alignment(Alignment::Center),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    let label_width = FIELD_LABELS
        .iter()
        .map(|l| l.chars().count() as u16)
        .max()
        .unwrap_or(0)
        + 2;

    for (i, label) in FIELD_LABELS.iter().enumerate() {
        let y = inner.y + 2 + i as u16 * 2;
        if y >= inner.y + inner.height {
            break;
        }

        let label_style = if i == form.focused_field() {
            theme.dialog_style().add_modifier(Modifier::BOLD)
        } else {
            theme.dialog_style()
        };
        let label_area = Rect::new(inner.x + 1, y, label_width.min(inner.width), 1);
        frame.render_widget(Paragraph::new(*label).style(label_style), label_area);

        let field_x = label_area.x + label_area.width;
        let field_width = (inner.x + inner.width).saturating_sub(field_x + 1);
        let field_area = Rect::new(field_x, y, field_width, 1);
        frame.render_widget(
            Block::default().style(
                theme
                    .dialog_style()
                    .fg(theme.field_text)
                    .bg(theme.field_background),
            ),
            field_area,
        );
        if let Some(field) = form.field(i) {
            frame.render_widget(field, field_area);
        }
    }
}

pub fn render_notice(frame: &mut Frame, area: Rect, notice: &Notice, theme: &SetupTheme) {
    let message = notice.message();
    let message_lines: Vec<&str> = message.lines().collect();
    let widest = message_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0) as u16;

    let popup = centered_rect(
        (widest + 6).max(36),
        message_lines.len() as u16 + 5,
        area,
    );
    frame.render_widget(Clear, popup);

    let text_style = if notice.is_error() {
        theme.dialog_style().fg(theme.dialog_error).add_modifier(Modifier::BOLD)
    } else {
        theme.dialog_style()
    };

    let mut lines = vec![Line::from("")];
    lines.extend(
        message_lines
            .iter()
            .map(|l| Line::from(Span::styled(l.to_string(), text_style))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from("Press any key to continue"));

    let alignment = if message_lines.len() > 1 {
        Alignment::Left
    } else {
        Alignment::Center
    };
    let paragraph = Paragraph::new(lines)
        .alignment(alignment)
        .block(dialog_block(notice.title(), theme));
    frame.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 25);
        assert_eq!(centered_rect(40, 5, area), Rect::new(20, 10, 40, 5));
    }

    #[test]
    fn test_centered_rect_clips_to_area() {
        let area = Rect::new(2, 1, 20, 6);
        assert_eq!(centered_rect(60, 9, area), area);
    }
}
