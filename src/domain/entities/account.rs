//! Account view state.

use crate::domain::entities::transaction::Transaction;
use crate::domain::money::Money;

/// Fallback display name used when the user submits an empty name.
pub const DEFAULT_USER_NAME: &str = "Cliente";

/// The session's account state: display name, value visibility, and the
/// fixed statement. One instance per run; never persisted.
///
/// All display text is derived from this state on every render, so toggling
/// visibility never touches previously built display nodes.
#[derive(Debug, Clone)]
pub struct AccountState {
    user_name: String,
    values_visible: bool,
    transactions: Vec<Transaction>,
}

impl AccountState {
    /// Creates the state with the default name and values hidden.
    #[must_use]
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            values_visible: false,
            transactions,
        }
    }

    /// Current display name. Never empty.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Whether financial values are currently shown.
    #[must_use]
    pub const fn values_visible(&self) -> bool {
        self.values_visible
    }

    /// Statement entries in display order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Sets the display name. Empty or whitespace-only input is coerced to
    /// [`DEFAULT_USER_NAME`] here, at the point of change.
    pub fn set_user_name(&mut self, input: &str) {
        let trimmed = input.trim();
        self.user_name = if trimmed.is_empty() {
            DEFAULT_USER_NAME.to_string()
        } else {
            trimmed.to_string()
        };
    }

    /// Flips value visibility.
    pub fn toggle_visibility(&mut self) {
        self.values_visible = !self.values_visible;
    }

    /// Aggregate balance: credits minus debits, computed from the statement.
    #[must_use]
    pub fn balance(&self) -> Money {
        self.transactions
            .iter()
            .map(Transaction::signed_amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::transaction::sample_statement;

    #[test]
    fn test_defaults() {
        let state = AccountState::new(sample_statement());
        assert_eq!(state.user_name(), "Cliente");
        assert!(!state.values_visible());
        assert_eq!(state.transactions().len(), 4);
    }

    #[test]
    fn test_set_user_name_coerces_empty() {
        let mut state = AccountState::new(Vec::new());

        state.set_user_name("Ana");
        assert_eq!(state.user_name(), "Ana");

        state.set_user_name("");
        assert_eq!(state.user_name(), "Cliente");

        state.set_user_name("   ");
        assert_eq!(state.user_name(), "Cliente");
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = AccountState::new(sample_statement());
        let masked = state.balance().format_masked(state.values_visible());

        state.toggle_visibility();
        assert!(state.values_visible());

        state.toggle_visibility();
        assert_eq!(
            state.balance().format_masked(state.values_visible()),
            masked
        );
    }

    #[test]
    fn test_balance_is_computed_from_statement() {
        // Credits 4.395,90 + 7.350,00 minus debits 300,90 + 2.350,00.
        let state = AccountState::new(sample_statement());
        assert_eq!(state.balance(), Money::from_reais(9_095, 0));
        assert_eq!(state.balance().format(), "R$ 9.095,00");
    }

    #[test]
    fn test_balance_empty_statement() {
        let state = AccountState::new(Vec::new());
        assert_eq!(state.balance(), Money::ZERO);
    }
}
