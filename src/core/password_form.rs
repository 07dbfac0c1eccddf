//! Masked two-field password form used while a password dialog is open.
//!
//! Keys the dispatcher passes through land here. Tab/Shift+Tab/Up/Down move
//! between the fields, everything else edits the focused field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use tui_textarea::{Input, Key, TextArea};

pub const FIELD_LABELS: [&str; 2] = ["Enter New Password:", "Confirm Password:"];

const MASK_CHAR: char = '*';

pub struct PasswordForm {
    fields: [TextArea<'static>; 2],
    focused_field: usize,
}

impl PasswordForm {
    pub fn new() -> Self {
        let mut form = Self {
            fields: [masked_field(), masked_field()],
            focused_field: 0,
        };
        form.update_cursor_styles();
        form
    }

    /// Empty both fields and focus the first one
    pub fn reset(&mut self) {
        self.fields = [masked_field(), masked_field()];
        self.focused_field = 0;
        self.update_cursor_styles();
    }

    pub fn input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.previous_field(),
            // Fields are single-line
            KeyCode::Enter => {}
            _ => {
                if let Some(input) = to_textarea_input(key) {
                    self.fields[self.focused_field].input(input);
                }
            }
        }
    }

    fn next_field(&mut self) {
        self.focused_field = (self.focused_field + 1) % self.fields.len();
        self.update_cursor_styles();
    }

    fn previous_field(&mut self) {
        self.focused_field = (self.focused_field + self.fields.len() - 1) % self.fields.len();
        self.update_cursor_styles();
    }

    fn update_cursor_styles(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            if i == self.focused_field {
                field.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
            } else {
                field.set_cursor_style(Style::default());
            }
        }
    }

    pub fn focused_field(&self) -> usize {
        self.focused_field
    }

    pub fn field(&self, index: usize) -> Option<&TextArea<'static>> {
        self.fields.get(index)
    }

    pub fn value(&self, index: usize) -> String {
        self.fields
            .get(index)
            .map(|f| f.lines().concat())
            .unwrap_or_default()
    }

    pub fn new_password(&self) -> String {
        self.value(0)
    }

    pub fn confirm_password(&self) -> String {
        self.value(1)
    }
}

impl Default for PasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PasswordForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the typed secrets
        f.debug_struct("PasswordForm")
            .field("focused_field", &self.focused_field)
            .field("new_len", &self.new_password().chars().count())
            .field("confirm_len", &self.confirm_password().chars().count())
            .finish()
    }
}

fn masked_field() -> TextArea<'static> {
    let mut field = TextArea::default();
    field.set_mask_char(MASK_CHAR);
    field.set_cursor_line_style(Style::default());
    field
}

/// Convert a crossterm key into the textarea's own input type
fn to_textarea_input(key: KeyEvent) -> Option<Input> {
    let key_code = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => return None,
    };

    Some(Input {
        key: key_code,
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
    })
}
