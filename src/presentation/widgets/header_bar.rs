//! Home screen header bar.

use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Profile placeholder glyph; there is no real profile behind it.
const PROFILE_GLYPH: &str = "( ☻ )";

pub struct HeaderBarStyle {
    pub background: Style,
    pub greeting: Style,
    pub eye: Style,
    pub profile: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            background: Style::default().bg(theme.accent),
            greeting: Style::default()
                .bg(theme.accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            eye: Style::default().bg(theme.accent).fg(Color::White),
            profile: Style::default().bg(theme.accent).fg(Color::White),
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            greeting: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            eye: Style::default().fg(Color::White),
            profile: Style::default().fg(Color::White),
        }
    }
}

/// Greeting, visibility indicator, and profile placeholder.
pub struct HeaderBar<'a> {
    user_name: &'a str,
    values_visible: bool,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(user_name: &'a str, values_visible: bool) -> Self {
        Self {
            user_name,
            values_visible,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    const fn eye_indicator(&self) -> &'static str {
        if self.values_visible { "◉" } else { "◌" }
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let greeting = format!(" Olá, {} ", self.user_name);
        let left_width = (greeting.chars().count() as u16).min(area.width);
        let left_area = Rect::new(area.x, area.y, left_width, 1);
        Paragraph::new(Line::from(Span::styled(greeting, self.style.greeting)))
            .render(left_area, buf);

        let right = format!("{} {} ", self.eye_indicator(), PROFILE_GLYPH);
        let right_width = right.chars().count() as u16;

        if right_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            let spans = vec![
                Span::styled(self.eye_indicator(), self.style.eye),
                Span::raw(" "),
                Span::styled(PROFILE_GLYPH, self.style.profile),
                Span::raw(" "),
            ];
            Paragraph::new(Line::from(spans)).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_indicator_tracks_visibility() {
        assert_eq!(HeaderBar::new("Maria", true).eye_indicator(), "◉");
        assert_eq!(HeaderBar::new("Maria", false).eye_indicator(), "◌");
    }

    #[test]
    fn test_renders_greeting() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("Maria", false).render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.contains("Olá, Maria"));
    }
}
