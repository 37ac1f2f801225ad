use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

/// Failures that abort a whole batch. Malformed and duplicate lines are never reported through here.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Failed to open ledger file [{}]: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: io::Error
    },
    #[error("Failed to read ledger: {0}")]
    Read(io::Error),
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("Batch task did not complete: {0}")]
    Task(#[from] JoinError)
}
