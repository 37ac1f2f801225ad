use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("FilePath must be a valid path of a existing file.")]
    FilePath(PathBuf),
    #[error("WorkerCount must be between 1 and 100.")]
    WorkerCount(usize),
    #[error("ComissionRate must be greater than 0.")]
    CommissionRate(Decimal),
    #[error("Precision must be at most 28.")]
    Precision(u32),
    #[error("ProgressInterval must be greater than 0.")]
    ProgressInterval
}
