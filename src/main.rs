mod actors;
mod config;
mod engine;
mod models;
mod monitor;
mod report;
mod source;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{Args, BatchOptions};
use crate::engine::process_transfers;
use crate::report::Console;

const USAGE: &str = "Usage: transfer-batch [--verbose] [--commission-rate <0.1>] [--worker-count <num_of_CPUs>] \
    [--precision <6>] [--progress-interval <100>] [--log-level <error>] <FILE_PATH>";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(parse_log_level(&args.log_level));

    let options = BatchOptions::from(&args);

    if let Err(errors) = options.validate() {
        eprintln!("There are some issues:");
        for error in errors {
            eprintln!("\t{error}");
        }
        eprintln!("{USAGE}");
        exit(1);
    }

    //NOTE: Worker diagnostics and the report share stdout, Console keeps their lines whole
    let console = Arc::new(Console::new(BufWriter::new(stdout())));

    let timer = Instant::now();
    let summary = process_transfers(&options, console.clone()).await?;
    let duration = timer.elapsed();

    info!(
        "Processed [{}] transfers for [{}] accounts in: {duration:?}",
        summary.stats.accepted,
        summary.totals.len()
    );

    if let Some(highest) = &summary.highest {
        info!("Highest transfer [{}] for account [{}]", highest.amount, highest.account_id);
    }

    console.flush()?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout is the report, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
