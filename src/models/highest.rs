use rust_decimal::Decimal;

use crate::models::Transfer;
use crate::types::AccountId;

/// The largest transfer seen so far, and the shape of every candidate offered to the resolver.
///
/// The default value (empty account, zero amount) is what gets reported when a batch accepted nothing.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct HighestTransfer {
    pub account_id: AccountId,
    pub amount: Decimal
}

impl HighestTransfer {
    pub fn new(account_id: impl Into<AccountId>, amount: Decimal) -> Self {
        Self {
            account_id: account_id.into(),
            amount
        }
    }

    /// Whether `amount` strictly exceeds `current`. Nothing has been committed yet when `current` is `None`,
    /// so any amount, negative ones included, wins.
    pub fn beats(amount: Decimal, current: Option<&HighestTransfer>) -> bool {
        current.is_none_or(|highest| amount > highest.amount)
    }
}

impl From<&Transfer> for HighestTransfer {
    fn from(transfer: &Transfer) -> Self {
        Self::new(transfer.account_id.clone(), transfer.amount)
    }
}
