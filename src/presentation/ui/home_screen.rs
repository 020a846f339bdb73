//! Home screen: header, balance card, shortcuts, and statement.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use crate::domain::entities::AccountState;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    BalanceCard, BalanceCardStyle, FooterBar, HeaderBar, HeaderBarStyle, ShortcutsRow,
    StatementList, StatementStyle,
};

const FOOTER_HINTS: [(&str, &str); 2] = [("h", "exibir/ocultar valores"), ("q", "sair")];

/// Home screen view. Built fresh from the account state on every render;
/// nothing here outlives a frame.
pub struct HomeScreen<'a> {
    account: &'a AccountState,
    theme: &'a Theme,
}

impl<'a> HomeScreen<'a> {
    /// Creates the view over the current state.
    #[must_use]
    pub const fn new(account: &'a AccountState, theme: &'a Theme) -> Self {
        Self { account, theme }
    }
}

impl Widget for HomeScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [
            header_area,
            _,
            balance_area,
            _,
            shortcuts_area,
            _,
            statement_area,
            footer_area,
        ] = layout.areas(area);

        HeaderBar::new(self.account.user_name(), self.account.values_visible())
            .style(HeaderBarStyle::from_theme(self.theme))
            .render(header_area, buf);

        BalanceCard::new(self.account.balance(), self.account.values_visible())
            .style(BalanceCardStyle::from_theme(self.theme))
            .render(balance_area, buf);

        ShortcutsRow::from_theme(self.theme).render(shortcuts_area, buf);

        StatementList::new(self.account.transactions(), self.account.values_visible())
            .style(StatementStyle::from_theme(self.theme))
            .render(statement_area, buf);

        FooterBar::from_theme(self.theme, &FOOTER_HINTS).render(footer_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::sample_statement;

    fn render_to_text(account: &AccountState) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 30);
        let mut buf = Buffer::empty(area);
        HomeScreen::new(account, &theme).render(area, &mut buf);

        (0..30)
            .map(|y| (0..60).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_masked_home_screen() {
        let account = AccountState::new(sample_statement());
        let text = render_to_text(&account);

        assert!(text.contains("Olá, Cliente"));
        assert!(text.contains("R$ ****,**"));
        assert!(!text.contains("9.095"));
        assert!(text.contains("Pix"));
        assert!(text.contains("Depósito Bancário"));
    }

    #[test]
    fn test_visible_home_screen() {
        let mut account = AccountState::new(sample_statement());
        account.set_user_name("Maria");
        account.toggle_visibility();
        let text = render_to_text(&account);

        assert!(text.contains("Olá, Maria"));
        assert!(text.contains("R$ 9.095,00"));
        assert!(text.contains("+ R$ 4.395,90"));
        assert!(text.contains("- R$ 300,90"));
    }
}
