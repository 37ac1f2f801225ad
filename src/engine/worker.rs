use std::io::{BufRead, Write};
use std::sync::Arc;

use csv::ByteRecord;
use tracing::{debug, warn};

use crate::actors::Nominator;
use crate::engine::{BatchError, BatchStats};
use crate::models::{render_record, Transfer};
use crate::monitor::Progress;
use crate::report::Console;
use crate::source::LineSource;
use crate::storage::Ledger;

/// One member of the worker pool. Runs on a blocking thread until the shared source is exhausted.
pub struct Worker<R: BufRead, W: Write, L: Ledger> {
    pub id: usize,
    pub source: Arc<LineSource<R>>,
    pub ledger: Arc<L>,
    pub nominator: Nominator,
    pub progress: Arc<Progress>,
    pub console: Arc<Console<W>>,
    pub verbose: bool
}

impl<R: BufRead, W: Write, L: Ledger> Worker<R, W, L> {
    /// Pulls records until end-of-input. Only a failing source or console stops a worker early.
    pub fn run(self) -> Result<BatchStats, BatchError> {
        let mut stats = BatchStats::default();

        while let Some(record) = self.source.next_record().map_err(BatchError::Read)? {
            stats.lines += 1;
            self.process(&record, &mut stats)?;
            self.progress.record_line(self.source.bytes_read());
        }

        debug!("Worker [{}] finished: {stats:?}", self.id);

        Ok(stats)
    }

    fn process(&self, record: &ByteRecord, stats: &mut BatchStats) -> Result<(), BatchError> {
        let transfer = match Transfer::try_from(record) {
            Ok(transfer) => transfer,
            Err(error) => {
                stats.invalid += 1;
                warn!("{error}");

                if self.verbose {
                    self.console.line(format_args!("Invalid line: \"{}\"", error.line()))?;
                }

                return Ok(());
            }
        };

        if !self.ledger.claim(&transfer.transaction_id) {
            stats.duplicates += 1;
            warn!("Duplicate transaction [{}] for account [{}]", transfer.transaction_id, transfer.account_id);

            if self.verbose {
                self.console.line(format_args!("Duplicate transaction: \"{}\"", render_record(record)))?;
            }

            return Ok(());
        }

        self.ledger.credit(&transfer.account_id, transfer.amount);
        self.nominator.nominate(&transfer);
        stats.accepted += 1;

        Ok(())
    }
}
