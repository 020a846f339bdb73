//! Domain layer with the account state and money handling.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Money representation and Brazilian-real formatting.
pub mod money;

pub use entities::{AccountState, Transaction, TransactionKind};
pub use errors::ConfigError;
pub use money::Money;
