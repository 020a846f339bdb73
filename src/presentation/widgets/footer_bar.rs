//! Key-hint footer bar.

use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Footer bar listing the active keybindings as `key label` chips.
pub struct FooterBar<'a> {
    hints: &'a [(&'a str, &'a str)],
    key_style: Style,
    label_style: Style,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            hints,
            key_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            label_style: Style::default().fg(Color::DarkGray),
        }
    }

    #[must_use]
    pub fn from_theme(theme: &Theme, hints: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            hints,
            key_style: Style::default()
                .fg(Color::White)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
            label_style: theme.dimmed_style,
        }
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans: Vec<Span<'static>> = Vec::with_capacity(self.hints.len() * 3);
        for (key, label) in self.hints {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!(" {key} "), self.key_style));
            spans.push(Span::styled(format!(" {label}"), self.label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_hints() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(&[("h", "exibir/ocultar"), ("q", "sair")]).render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.contains("h"));
        assert!(row.contains("exibir/ocultar"));
        assert!(row.contains("sair"));
    }
}
