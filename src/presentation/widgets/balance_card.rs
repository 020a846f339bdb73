//! Aggregate balance card.

use crate::domain::money::Money;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct BalanceCardStyle {
    pub border: Style,
    pub label: Style,
    pub amount: Style,
    pub amount_hidden: Style,
}

impl BalanceCardStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            border: Style::default().fg(theme.accent),
            label: theme.dimmed_style,
            amount: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            amount_hidden: theme.dimmed_style.add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for BalanceCardStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Gray),
            label: Style::default().fg(Color::DarkGray),
            amount: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            amount_hidden: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Card showing the aggregate balance, masked while values are hidden.
pub struct BalanceCard {
    balance: Money,
    visible: bool,
    style: BalanceCardStyle,
}

impl BalanceCard {
    #[must_use]
    pub fn new(balance: Money, visible: bool) -> Self {
        Self {
            balance,
            visible,
            style: BalanceCardStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: BalanceCardStyle) -> Self {
        self.style = style;
        self
    }

    fn amount_style(&self) -> Style {
        if self.visible {
            self.style.amount
        } else {
            self.style.amount_hidden
        }
    }
}

impl Widget for BalanceCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style.border)
            .title(" Saldo disponível ")
            .title_style(self.style.label);

        let inner = block.inner(area);
        block.render(area, buf);

        let amount = self.balance.format_masked(self.visible);
        Paragraph::new(amount)
            .style(self.amount_style())
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_text(card: BalanceCard) -> String {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);

        (0..3)
            .map(|y| {
                (0..30)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_masked_by_default() {
        let text = render_to_text(BalanceCard::new(Money::from_reais(9_095, 0), false));
        assert!(text.contains("R$ ****,**"));
        assert!(!text.contains("9.095"));
    }

    #[test]
    fn test_visible_amount() {
        let text = render_to_text(BalanceCard::new(Money::from_reais(9_095, 0), true));
        assert!(text.contains("R$ 9.095,00"));
    }
}
