//! Color theme derived from the configured accent color.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// The original NooBank purple, used when the configured accent is invalid.
const DEFAULT_ACCENT: Color = Color::Rgb(0x8a, 0x05, 0xbe);

/// Styles shared by the screens and widgets.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent color for borders, chips, and highlights.
    pub accent: Color,
    /// Style for credit amounts.
    pub credit_style: Style,
    /// Style for debit amounts.
    pub debit_style: Style,
    /// Style for secondary text.
    pub dimmed_style: Style,
    /// Style for primary text.
    pub base_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(DEFAULT_ACCENT)
    }
}

impl Theme {
    /// Builds a theme from a color name or `#hex` string.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Builds a theme from a concrete accent color.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            credit_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            debit_style: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    DEFAULT_ACCENT
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&format!("{}{}", &s[0..1], &s[0..1]), 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&format!("{}{}", &s[1..2], &s[1..2]), 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&format!("{}{}", &s[2..3], &s[2..3]), 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else {
        Err(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Invalid"), DEFAULT_ACCENT);
    }

    #[test]
    fn test_default_accent() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Rgb(0x8a, 0x05, 0xbe));
    }
}
