use rust_decimal::Decimal;
use tracing::debug;

use crate::models::HighestTransfer;
use crate::storage::Ledger;
use crate::types::AccountId;

/// Excludes the batch's highest transfer from the commission base of its own account and returns the adjusted
/// totals ordered by account.
///
/// Must run exactly once per batch, after the workers and the resolver are done. If the winning account had no
/// other transfers its adjusted total is zero, and it goes negative when the rest of its transfers net below zero;
/// both are reported as they are. Without a highest transfer nothing is adjusted.
pub fn reconcile<L: Ledger>(ledger: &L, highest: Option<&HighestTransfer>) -> Vec<(AccountId, Decimal)> {
    if let Some(highest) = highest {
        ledger.debit(&highest.account_id, highest.amount);

        debug!(
            "Excluded highest transfer [{}] from account [{}], adjusted total [{:?}]",
            highest.amount,
            highest.account_id,
            ledger.total(&highest.account_id)
        );
    }

    let mut totals = ledger.totals();
    totals.sort_unstable_by(|(left, _), (right, _)| left.cmp(right));
    totals
}
