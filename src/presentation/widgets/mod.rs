mod balance_card;
mod footer_bar;
mod header_bar;
mod input;
mod shortcuts;
mod statement;

pub use balance_card::{BalanceCard, BalanceCardStyle};
pub use footer_bar::FooterBar;
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use shortcuts::{SHORTCUTS, ShortcutsRow};
pub use statement::{StatementList, StatementStyle, amount_text};
