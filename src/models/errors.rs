use csv::ByteRecord;
use thiserror::Error;

use crate::models::transfer::render_record;
use crate::models::Transfer;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Line [{line}] has {found} fields, expected {expected}", expected = Transfer::FIELD_COUNT)]
    FieldCount {
        line: String,
        found: usize
    },
    #[error("Line [{line}] has an empty account")]
    MissingAccount {
        line: String
    },
    #[error("Line [{line}] could not be parsed: {reason}")]
    Malformed {
        line: String,
        reason: String
    }
}

impl TransferError {
    pub fn field_count(record: &ByteRecord) -> Self {
        Self::FieldCount {
            line: render_record(record),
            found: record.len()
        }
    }

    pub fn missing_account(record: &ByteRecord) -> Self {
        Self::MissingAccount {
            line: render_record(record)
        }
    }

    pub fn malformed(record: &ByteRecord, error: csv::Error) -> Self {
        Self::Malformed {
            line: render_record(record),
            reason: error.to_string()
        }
    }

    /// The offending input line, as close to the original text as the reader allows.
    pub fn line(&self) -> &str {
        match self {
            Self::FieldCount { line, .. } | Self::MissingAccount { line } | Self::Malformed { line, .. } => line
        }
    }
}
