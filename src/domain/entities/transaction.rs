//! Bank transaction entity.

use chrono::NaiveDate;

use crate::domain::money::Money;

/// Unique transaction identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionId(pub u32);

impl TransactionId {
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TransactionId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Whether a transaction increases or decreases the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Incoming amount.
    Credit,
    /// Outgoing amount.
    Debit,
}

/// A single statement entry. Immutable once created; the statement set is
/// fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: TransactionId,
    label: String,
    amount: Money,
    date: NaiveDate,
    kind: TransactionKind,
}

impl Transaction {
    /// Creates a transaction. `amount` is the unsigned magnitude; the sign
    /// comes from `kind`.
    #[must_use]
    pub fn new(
        id: impl Into<TransactionId>,
        label: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            amount,
            date,
            kind,
        }
    }

    #[must_use]
    pub const fn id(&self) -> TransactionId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Amount with the sign implied by the kind: positive for credits,
    /// negative for debits.
    #[must_use]
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Credit => self.amount,
            TransactionKind::Debit => -self.amount,
        }
    }

    /// Date rendered as `DD/MM/YYYY`.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

/// The fixed mock statement shown on the home screen. Insertion order is
/// display order.
#[must_use]
pub fn sample_statement() -> Vec<Transaction> {
    let date = |y: i32, m: u32, d: u32| {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
    };

    vec![
        Transaction::new(
            1_u32,
            "Depósito Bancário",
            Money::from_reais(4_395, 90),
            date(2025, 2, 3),
            TransactionKind::Credit,
        ),
        Transaction::new(
            2_u32,
            "Conta de Luz",
            Money::from_reais(300, 90),
            date(2025, 2, 9),
            TransactionKind::Debit,
        ),
        Transaction::new(
            3_u32,
            "Salário",
            Money::from_reais(7_350, 0),
            date(2025, 3, 5),
            TransactionKind::Credit,
        ),
        Transaction::new(
            4_u32,
            "Supermercado",
            Money::from_reais(2_350, 0),
            date(2025, 4, 5),
            TransactionKind::Debit,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_amount() {
        let statement = sample_statement();
        assert_eq!(statement[0].signed_amount(), Money::from_reais(4_395, 90));
        assert_eq!(statement[1].signed_amount(), -Money::from_reais(300, 90));
    }

    #[test]
    fn test_display_date() {
        let statement = sample_statement();
        assert_eq!(statement[0].display_date(), "03/02/2025");
        assert_eq!(statement[3].display_date(), "05/04/2025");
    }

    #[test]
    fn test_sample_statement_ids_unique() {
        let statement = sample_statement();
        let mut ids: Vec<u32> = statement.iter().map(|t| t.id().as_u32()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), statement.len());
    }
}
