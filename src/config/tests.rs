use super::options::MAX_WORKERS;
use super::{Args, BatchOptions, ConfigError};

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;
use std::str::FromStr;
use tempfile::NamedTempFile;

#[test]
fn test_valid_options_pass_validation() -> Result<()> {
    let file = NamedTempFile::new()?;
    let options = BatchOptions {
        commission_rate: Decimal::from_str("0.2")?,
        worker_count: 2,
        verbose: true,
        ..BatchOptions::new(file.path())
    };

    assert!(options.validate().is_ok());

    Ok(())
}

#[test]
fn test_validation_reports_every_failure() -> Result<()> {
    let options = BatchOptions {
        commission_rate: Decimal::from(-1),
        worker_count: 0,
        ..BatchOptions::new("#!@%$**)\" + _{ }\":??COM3>?<>?")
    };

    let errors = options.validate().err().unwrap_or_default();
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();

    assert_eq!(messages, vec![
        "FilePath must be a valid path of a existing file.",
        "WorkerCount must be between 1 and 100.",
        "ComissionRate must be greater than 0.",
    ]);

    Ok(())
}

#[test]
fn test_validation_bounds() -> Result<()> {
    let file = NamedTempFile::new()?;
    let base = BatchOptions::new(file.path());

    let too_many_workers = BatchOptions { worker_count: MAX_WORKERS + 1, ..base.clone() };
    let max_workers = BatchOptions { worker_count: MAX_WORKERS, ..base.clone() };
    let zero_rate = BatchOptions { commission_rate: Decimal::ZERO, ..base.clone() };
    let precise = BatchOptions { decimal_places: 29, ..base.clone() };
    let no_interval = BatchOptions { progress_interval: Duration::ZERO, ..base.clone() };

    assert_eq!(too_many_workers.validate(), Err(vec![ConfigError::WorkerCount(MAX_WORKERS + 1)]));
    assert!(max_workers.validate().is_ok());
    assert_eq!(zero_rate.validate(), Err(vec![ConfigError::CommissionRate(Decimal::ZERO)]));
    assert_eq!(precise.validate(), Err(vec![ConfigError::Precision(29)]));
    assert_eq!(no_interval.validate(), Err(vec![ConfigError::ProgressInterval]));

    Ok(())
}

#[test]
fn test_directories_are_not_valid_ledger_files() -> Result<()> {
    let directory = tempfile::tempdir()?;
    let options = BatchOptions::new(directory.path());

    assert_eq!(options.validate(), Err(vec![ConfigError::FilePath(directory.path().to_path_buf())]));

    Ok(())
}

#[test]
fn test_defaults() {
    let options = BatchOptions::default();

    assert_eq!(options.commission_rate, Decimal::new(1, 1));
    assert_eq!(options.decimal_places, 6);
    assert_eq!(options.progress_interval, Duration::from_millis(100));
    assert!((1..=MAX_WORKERS).contains(&options.worker_count));
    assert!(!options.verbose);
}

#[test]
fn test_args_map_onto_options() -> Result<()> {
    let args = Args::try_parse_from([
        "transfer-batch", "--verbose", "--commission-rate", "0.25", "--worker-count", "8",
        "--precision", "2", "--progress-interval", "250", "ledger.csv"
    ])?;

    let options = BatchOptions::from(&args);

    assert_eq!(options.file_path.to_str(), Some("ledger.csv"));
    assert_eq!(options.commission_rate, Decimal::from_str("0.25")?);
    assert_eq!(options.worker_count, 8);
    assert_eq!(options.decimal_places, 2);
    assert_eq!(options.progress_interval, Duration::from_millis(250));
    assert!(options.verbose);
    assert_eq!(args.log_level, "error");

    Ok(())
}

#[test]
fn test_args_defaults() -> Result<()> {
    let args = Args::try_parse_from(["transfer-batch", "ledger.csv"])?;
    let options = BatchOptions::from(&args);

    assert_eq!(options.commission_rate, Decimal::new(1, 1));
    assert_eq!(options.worker_count, BatchOptions::default_worker_count());
    assert!(!options.verbose);

    Ok(())
}

#[test]
fn test_negative_rates_reach_validation() -> Result<()> {
    let args = Args::try_parse_from(["transfer-batch", "--commission-rate", "-1", "ledger.csv"])?;

    assert_eq!(args.commission_rate, Decimal::from(-1));

    Ok(())
}

#[test]
fn test_args_parsing_errors() {
    assert!(Args::try_parse_from(["transfer-batch"]).is_err());
    assert!(Args::try_parse_from(["transfer-batch", "--worker-count", "many", "ledger.csv"]).is_err());
    assert!(Args::try_parse_from(["transfer-batch", "--commission-rate", "ten", "ledger.csv"]).is_err());
}
