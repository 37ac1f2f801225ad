mod transaction_ledger;

use rust_decimal::Decimal;

use crate::types::{AccountId, TransactionId};

pub use transaction_ledger::TransactionLedger;

/// Shared aggregation state of a batch: the dedup set and the per-account totals.
///
/// Every method may be called from any worker at any time; implementations must make `claim` exclusive
/// and `credit`/`debit` atomic per account.
pub trait Ledger: Send + Sync + 'static {
    /// Registers a transaction ID. Returns `false` when it was already claimed.
    fn claim(&self, transaction_id: &TransactionId) -> bool;
    /// Adds `amount` to the account total, creating the entry at zero when absent.
    fn credit(&self, account_id: &AccountId, amount: Decimal);
    /// Subtracts `amount` from an existing account total. Unknown accounts are left alone.
    fn debit(&self, account_id: &AccountId, amount: Decimal);
    fn total(&self, account_id: &AccountId) -> Option<Decimal>;
    /// Copies every account total out of the ledger.
    fn totals(&self) -> Vec<(AccountId, Decimal)>;
}
