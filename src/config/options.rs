use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::thread::available_parallelism;
use std::time::Duration;

use rust_decimal::Decimal;

use crate::config::ConfigError;
use crate::types::{DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};

pub const MAX_WORKERS: usize = 100;

/// Everything a batch run needs. The engine assumes `validate` has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOptions {
    /// Ledger file to process.
    pub file_path: PathBuf,
    /// Multiplier applied to each account's adjusted total.
    pub commission_rate: Decimal,
    /// Number of workers pulling from the ledger file.
    pub worker_count: usize,
    /// Prints diagnostics, progress, and the labelled report instead of compact lines.
    pub verbose: bool,
    /// Decimal places commissions and amounts are rounded to.
    pub decimal_places: u32,
    /// How often the progress monitor samples.
    pub progress_interval: Duration
}

impl BatchOptions {
    #[cfg(test)]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Self::default()
        }
    }

    pub fn default_worker_count() -> usize {
        available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
            .min(MAX_WORKERS)
    }

    /// Checks every option and reports all failures at once.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if !self.file_path.is_file() {
            errors.push(ConfigError::FilePath(self.file_path.clone()));
        }

        if !(1..=MAX_WORKERS).contains(&self.worker_count) {
            errors.push(ConfigError::WorkerCount(self.worker_count));
        }

        if self.commission_rate <= Decimal::ZERO {
            errors.push(ConfigError::CommissionRate(self.commission_rate));
        }

        if self.decimal_places > MAX_DECIMAL_PLACES {
            errors.push(ConfigError::Precision(self.decimal_places));
        }

        if self.progress_interval.is_zero() {
            errors.push(ConfigError::ProgressInterval);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            file_path: PathBuf::new(),
            commission_rate: Decimal::new(1, 1),
            worker_count: Self::default_worker_count(),
            verbose: false,
            decimal_places: DEFAULT_DECIMAL_PLACES,
            progress_interval: Duration::from_millis(100)
        }
    }
}
