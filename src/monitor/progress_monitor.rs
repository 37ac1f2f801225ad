use std::io::{stderr, Write};
use std::sync::Arc;
use std::time::Duration;

use tokio::select;
use tokio::sync::oneshot;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use crate::monitor::{Progress, ProgressSample};

pub struct ProgressMonitor {
    progress: Arc<Progress>,
    period: Duration,
    verbose: bool
}

impl ProgressMonitor {
    pub fn new(progress: Arc<Progress>, period: Duration, verbose: bool) -> Self {
        Self {
            progress,
            period,
            verbose
        }
    }

    /// Samples the shared counters every period until `done` fires (or its sender goes away),
    /// then returns the final sample, always reported as 100%.
    pub async fn watch(self, mut done: oneshot::Receiver<()>) -> ProgressSample {
        let started = Instant::now();
        let mut ticker = interval_at(started + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            select! {
                biased;
                _ = &mut done => break,
                _ = ticker.tick() => {
                    let sample = self.progress.sample(started.elapsed());
                    debug!("{sample}");

                    if self.verbose {
                        self.render(&sample, "");
                    }
                }
            }
        }

        let last = self.progress.sample(started.elapsed()).complete();
        debug!("{last}");

        if self.verbose {
            self.render(&last, "\n");
        }

        last
    }

    fn render(&self, sample: &ProgressSample, terminator: &str) {
        let mut output = stderr().lock();

        //NOTE: Progress is cosmetic, a closed stderr must never fail the batch
        let _ = write!(output, "\r{sample}{terminator}").and_then(|_| output.flush());
    }
}
