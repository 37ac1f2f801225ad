use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rust_decimal::Decimal;

use crate::config::BatchOptions;
use crate::types::DEFAULT_DECIMAL_PLACES;

/// Computes per-account commissions from a transfer ledger
#[derive(Parser, Debug)]
#[command(name = "transfer-batch")]
#[command(about = "Computes per-account commissions from a transfer ledger", long_about = None)]
pub struct Args {
    /// Ledger file, one `account,transaction,amount` record per line
    #[arg(value_name = "FILE_PATH")]
    pub file_path: PathBuf,

    /// Multiplier applied to each account's total
    #[arg(long, value_name = "RATE", default_value = "0.1", allow_negative_numbers = true)]
    pub commission_rate: Decimal,

    /// Number of concurrent workers (default: available CPUs)
    #[arg(long, value_name = "COUNT")]
    pub worker_count: Option<usize>,

    /// Decimal places of the reported figures
    #[arg(long, value_name = "PLACES", default_value_t = DEFAULT_DECIMAL_PLACES)]
    pub precision: u32,

    /// Progress sampling interval in milliseconds
    #[arg(long, value_name = "MILLISECONDS", default_value_t = 100)]
    pub progress_interval: u64,

    /// Print diagnostics, progress, and the labelled report
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level written to stderr: error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", default_value = "error")]
    pub log_level: String
}

impl From<&Args> for BatchOptions {
    fn from(args: &Args) -> Self {
        Self {
            file_path: args.file_path.clone(),
            commission_rate: args.commission_rate,
            worker_count: args.worker_count.unwrap_or_else(BatchOptions::default_worker_count),
            verbose: args.verbose,
            decimal_places: args.precision,
            progress_interval: Duration::from_millis(args.progress_interval)
        }
    }
}
