//! Decorative shortcuts row.

use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// The eight static shortcut entries. Purely decorative; no handlers.
pub const SHORTCUTS: [&str; 8] = [
    "Pix",
    "Pagar",
    "Transferir",
    "Depositar",
    "Empréstimo",
    "Cartão virtual",
    "Recarga",
    "Cobrar",
];

/// Horizontal row of shortcut chips, clipped to the available width.
pub struct ShortcutsRow {
    chip_style: Style,
}

impl ShortcutsRow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            chip_style: Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        }
    }

    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            chip_style: Style::default()
                .bg(theme.accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for ShortcutsRow {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ShortcutsRow {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans: Vec<Span<'static>> = Vec::with_capacity(SHORTCUTS.len() * 2);
        let mut used: usize = 0;

        for label in SHORTCUTS {
            let chip = format!(" {label} ");
            let width = chip.chars().count() + 1;
            if used + width > area.width as usize {
                break;
            }
            used += width;
            spans.push(Span::styled(chip, self.chip_style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_eight_entries() {
        assert_eq!(SHORTCUTS.len(), 8);
        assert_eq!(SHORTCUTS[0], "Pix");
    }

    #[test]
    fn test_clips_to_width() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        ShortcutsRow::new().render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.contains("Pix"));
        assert!(!row.contains("Transferir"));
    }
}
