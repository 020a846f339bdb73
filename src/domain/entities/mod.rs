//! Domain entity definitions.

mod account;
mod transaction;

pub use account::AccountState;
pub use transaction::{Transaction, TransactionId, TransactionKind, sample_statement};
