//! Statement list widget.

use crate::domain::entities::{Transaction, TransactionKind};
use crate::domain::money::Money;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const ROW_HEIGHT: u16 = 3;

pub struct StatementStyle {
    pub border: Style,
    pub title: Style,
    pub label: Style,
    pub date: Style,
    pub credit: Style,
    pub debit: Style,
    pub hidden: Style,
}

impl StatementStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            border: Style::default().fg(theme.accent),
            title: theme.dimmed_style,
            label: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            date: theme.dimmed_style,
            credit: theme.credit_style,
            debit: theme.debit_style,
            hidden: theme.dimmed_style,
        }
    }
}

impl Default for StatementStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Gray),
            title: Style::default().fg(Color::DarkGray),
            label: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            date: Style::default().fg(Color::DarkGray),
            credit: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            debit: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            hidden: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Display text for a statement amount: signed when visible, the mask
/// literal otherwise.
#[must_use]
pub fn amount_text(transaction: &Transaction, visible: bool) -> String {
    if visible {
        let sign = match transaction.kind() {
            TransactionKind::Credit => "+",
            TransactionKind::Debit => "-",
        };
        format!("{sign} {}", transaction.amount().format())
    } else {
        Money::MASKED.to_string()
    }
}

/// The transaction list: one row per entry with label, date, and amount.
/// Rows stay color-coded by kind even while amounts are masked.
pub struct StatementList<'a> {
    transactions: &'a [Transaction],
    visible: bool,
    style: StatementStyle,
}

impl<'a> StatementList<'a> {
    #[must_use]
    pub fn new(transactions: &'a [Transaction], visible: bool) -> Self {
        Self {
            transactions,
            visible,
            style: StatementStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: StatementStyle) -> Self {
        self.style = style;
        self
    }

    fn amount_style(&self, kind: TransactionKind) -> Style {
        if !self.visible {
            return self.style.hidden;
        }
        match kind {
            TransactionKind::Credit => self.style.credit,
            TransactionKind::Debit => self.style.debit,
        }
    }
}

impl Widget for StatementList<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style.border)
            .title(" Movimentações ")
            .title_style(self.style.title);

        let inner = block.inner(area);
        block.render(area, buf);

        let mut y = inner.y;
        for transaction in self.transactions {
            if y + 1 >= inner.bottom() {
                break;
            }

            let label_area = Rect::new(inner.x, y, inner.width, 1);
            Paragraph::new(Line::from(Span::styled(
                transaction.label().to_string(),
                self.style.label,
            )))
            .render(label_area, buf);

            let amount = amount_text(transaction, self.visible);
            let amount_width = (amount.chars().count() as u16).min(inner.width);
            if amount_width > 0 {
                let amount_x = inner.right().saturating_sub(amount_width);
                let amount_area = Rect::new(amount_x, y, amount_width, 1);
                Paragraph::new(Line::from(Span::styled(
                    amount,
                    self.amount_style(transaction.kind()),
                )))
                .render(amount_area, buf);
            }

            let date_area = Rect::new(inner.x, y + 1, inner.width, 1);
            Paragraph::new(Line::from(Span::styled(
                transaction.display_date(),
                self.style.date,
            )))
            .render(date_area, buf);

            y += ROW_HEIGHT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::sample_statement;

    fn render_to_text(widget: StatementList<'_>, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_amount_text_masked() {
        let statement = sample_statement();
        for transaction in &statement {
            assert_eq!(amount_text(transaction, false), "R$ ****,**");
        }
    }

    #[test]
    fn test_amount_text_signed() {
        let statement = sample_statement();
        assert_eq!(amount_text(&statement[0], true), "+ R$ 4.395,90");
        assert_eq!(amount_text(&statement[1], true), "- R$ 300,90");
        assert_eq!(amount_text(&statement[2], true), "+ R$ 7.350,00");
        assert_eq!(amount_text(&statement[3], true), "- R$ 2.350,00");
    }

    #[test]
    fn test_renders_all_rows() {
        let statement = sample_statement();
        let text = render_to_text(StatementList::new(&statement, true), 50, 16);

        for transaction in &statement {
            assert!(text.contains(transaction.label()));
            assert!(text.contains(&transaction.display_date()));
        }
        assert!(text.contains("+ R$ 4.395,90"));
        assert!(text.contains("- R$ 2.350,00"));
    }

    #[test]
    fn test_stops_at_area_bottom() {
        let statement = sample_statement();
        // Room for only the first row inside the borders.
        let text = render_to_text(StatementList::new(&statement, true), 50, 5);

        assert!(text.contains("Depósito Bancário"));
        assert!(!text.contains("Supermercado"));
    }
}
