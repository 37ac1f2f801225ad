use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tokio::spawn;
use tokio::sync::oneshot;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::actors::MaximumResolver;
use crate::config::BatchOptions;
use crate::engine::worker::Worker;
use crate::engine::{BatchError, BatchStats};
use crate::models::HighestTransfer;
use crate::monitor::{Progress, ProgressMonitor, ProgressSample};
use crate::report::{reconcile, Console, Reporter};
use crate::source::LineSource;
use crate::storage::{Ledger, TransactionLedger};
use crate::types::AccountId;

const MIN_PROGRESS_INTERVAL: Duration = Duration::from_millis(1);

/// What a batch run produced before reconciliation.
#[derive(Debug)]
pub struct BatchOutcome {
    /// The committed highest transfer, `None` when no line was accepted.
    pub highest: Option<HighestTransfer>,
    pub stats: BatchStats,
    pub progress: ProgressSample
}

/// A fully reported batch.
#[derive(Debug)]
pub struct BatchSummary {
    pub highest: Option<HighestTransfer>,
    pub stats: BatchStats,
    /// Account totals after the highest transfer was excluded, ordered by account.
    pub totals: Vec<(AccountId, Decimal)>
}

/// Fans a ledger file out over a pool of workers.
///
/// Per run: one resolver task owns the highest transfer, one monitor task samples progress and `worker_count`
/// blocking workers share the source. The run ends only after every worker exhausted the source, then the
/// resolver is drained.
pub struct BatchEngine<L: Ledger> {
    ledger: Arc<L>,
    worker_count: usize,
    progress_interval: Duration,
    verbose: bool
}

impl<L: Ledger> BatchEngine<L> {
    pub fn new(ledger: Arc<L>, options: &BatchOptions) -> Self {
        Self {
            ledger,
            worker_count: options.worker_count.max(1),
            progress_interval: options.progress_interval.max(MIN_PROGRESS_INTERVAL),
            verbose: options.verbose
        }
    }

    /// Processes the ledger file at `path`.
    pub async fn run<W>(&self, path: &Path, console: Arc<Console<W>>) -> Result<BatchOutcome, BatchError>
    where
        W: Write + Send + 'static
    {
        let source = LineSource::open(path).map_err(|source| BatchError::Open {
            path: path.to_path_buf(),
            source
        })?;

        self.process(source, console).await
    }

    /// Processes every record of `source`.
    ///
    /// # Errors
    /// A failing source, a failing console or a panicked task fails the batch. The remaining workers are still
    /// joined so no task outlives the run.
    pub async fn process<R, W>(&self, source: LineSource<R>, console: Arc<Console<W>>) -> Result<BatchOutcome, BatchError>
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static
    {
        let source = Arc::new(source);
        let progress = Arc::new(Progress::new(source.total_bytes()));
        let resolver = MaximumResolver::spawn();

        let (done_sender, done_receiver) = oneshot::channel();
        let monitor = ProgressMonitor::new(progress.clone(), self.progress_interval, self.verbose);
        let monitor_handle = spawn(monitor.watch(done_receiver));

        let mut workers = JoinSet::new();

        for id in 0..self.worker_count {
            let worker = Worker {
                id,
                source: source.clone(),
                ledger: self.ledger.clone(),
                nominator: resolver.nominator(),
                progress: progress.clone(),
                console: console.clone(),
                verbose: self.verbose
            };

            workers.spawn_blocking(move || worker.run());
        }

        let mut stats = BatchStats::default();
        let mut failure = None;

        while let Some(result) = workers.join_next().await {
            let error = match result {
                Ok(Ok(worker_stats)) => {
                    stats += worker_stats;
                    continue;
                }
                Ok(Err(error)) => error,
                Err(error) => BatchError::Task(error)
            };

            error!("Worker failed: {error}");

            if failure.is_none() {
                failure = Some(error);
            }
        }

        //NOTE: Every nominator was owned by a worker, so finish() is the last sender going away
        let _ = done_sender.send(());
        let highest = resolver.finish().await;
        let progress = monitor_handle.await;

        if let Some(error) = failure {
            return Err(error);
        }

        let outcome = BatchOutcome {
            highest: highest?,
            stats,
            progress: progress?
        };

        info!(
            "Read [{}] lines: [{}] accepted, [{}] invalid, [{}] duplicates",
            stats.lines, stats.accepted, stats.invalid, stats.duplicates
        );
        info!("{}", outcome.progress);

        Ok(outcome)
    }
}

/// Runs a complete batch for `options`: aggregate, reconcile, then report through `console`.
///
/// Nothing is written to `console` besides verbose diagnostics unless the whole file was processed.
pub async fn process_transfers<W>(options: &BatchOptions, console: Arc<Console<W>>) -> Result<BatchSummary, BatchError>
where
    W: Write + Send + 'static
{
    let ledger = Arc::new(TransactionLedger::new());
    let engine = BatchEngine::new(ledger.clone(), options);

    let outcome = engine.run(&options.file_path, console.clone()).await?;
    let totals = reconcile(ledger.as_ref(), outcome.highest.as_ref());

    Reporter::from_options(options).write(&console, outcome.highest.as_ref(), &totals)?;

    Ok(BatchSummary {
        highest: outcome.highest,
        stats: outcome.stats,
        totals
    })
}
