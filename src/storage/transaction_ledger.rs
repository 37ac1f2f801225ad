use dashmap::{DashMap, DashSet};
use rust_decimal::Decimal;
use tracing::error;

use crate::storage::Ledger;
use crate::types::{AccountId, TransactionId};

pub struct TransactionLedger {
    claimed: DashSet<TransactionId>,
    totals: DashMap<AccountId, Decimal>
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self {
            claimed: DashSet::new(),
            totals: DashMap::new()
        }
    }

    #[cfg(test)]
    pub fn claimed_count(&self) -> usize {
        self.claimed.len()
    }
}

impl Default for TransactionLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger for TransactionLedger {
    fn claim(&self, transaction_id: &TransactionId) -> bool {
        //NOTE: Checking first keeps the common duplicate path free of an allocation, insert() is still the arbiter
        if self.claimed.contains(transaction_id) {
            return false;
        }

        self.claimed.insert(transaction_id.clone())
    }

    fn credit(&self, account_id: &AccountId, amount: Decimal) {
        //NOTE: get_mut() avoids cloning the key for accounts that already exist
        if let Some(mut total) = self.totals.get_mut(account_id) {
            apply(account_id, &mut total, amount, Decimal::checked_add);
            return;
        }

        let mut total = self.totals.entry(account_id.clone()).or_insert(Decimal::ZERO);
        apply(account_id, &mut total, amount, Decimal::checked_add);
    }

    fn debit(&self, account_id: &AccountId, amount: Decimal) {
        if let Some(mut total) = self.totals.get_mut(account_id) {
            apply(account_id, &mut total, amount, Decimal::checked_sub);
        }
    }

    fn total(&self, account_id: &AccountId) -> Option<Decimal> {
        self.totals.get(account_id).map(|total| *total)
    }

    fn totals(&self) -> Vec<(AccountId, Decimal)> {
        self.totals.iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}

fn apply(account_id: &AccountId, total: &mut Decimal, amount: Decimal, operation: fn(Decimal, Decimal) -> Option<Decimal>) {
    match operation(*total, amount) {
        Some(value) => *total = value,
        None => error!("Numeric overflow applying [{amount}] to account [{account_id}], amount dropped")
    }
}
