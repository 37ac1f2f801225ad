use csv::ByteRecord;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::models::errors::TransferError;
use crate::types::{deserialize_amount, AccountId, TransactionId};

/// A single accepted row of the transfer ledger: `account,transaction,amount`.
///
/// The transaction ID is the deduplication key, the account ID is where the amount is credited.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct Transfer {
    /// The account the transfer is credited to, taken verbatim.
    pub account_id: AccountId,
    /// Ledger-wide transaction ID, may appear at most once per batch.
    pub transaction_id: TransactionId,
    /// Signed amount of the transfer, a plain decimal literal. The only field tolerating surrounding whitespace.
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: Decimal
}

impl Transfer {
    pub const FIELD_COUNT: usize = 3;
}

impl TryFrom<&ByteRecord> for Transfer {
    type Error = TransferError;

    fn try_from(record: &ByteRecord) -> Result<Self, Self::Error> {
        if record.len() != Self::FIELD_COUNT {
            return Err(TransferError::field_count(record))
        }

        let transfer: Transfer = record.deserialize(None)
            .map_err(|error| TransferError::malformed(record, error))?;

        if transfer.account_id.is_empty() {
            return Err(TransferError::missing_account(record))
        }

        Ok(transfer)
    }
}

impl FromStr for Transfer {
    type Err = TransferError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let record: ByteRecord = line.split(',').collect();
        Transfer::try_from(&record)
    }
}

/// Rebuilds the line a record was read from, for diagnostics.
pub fn render_record(record: &ByteRecord) -> String {
    let mut line = Vec::with_capacity(record.as_slice().len() + record.len());

    for (index, field) in record.iter().enumerate() {
        if index > 0 {
            line.push(b',');
        }
        line.extend_from_slice(field);
    }

    String::from_utf8_lossy(&line).into_owned()
}
