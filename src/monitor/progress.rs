use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Counters shared between the workers and the progress monitor.
///
/// Updates use relaxed atomics. A sample taken mid-run may pair a byte count with a slightly older line count;
/// the numbers are only ever displayed, never used for accounting.
#[derive(Debug)]
pub struct Progress {
    bytes_read: AtomicU64,
    lines_read: AtomicU64,
    total_bytes: u64
}

impl Progress {
    pub fn new(total_bytes: u64) -> Self {
        Self {
            bytes_read: AtomicU64::new(0),
            lines_read: AtomicU64::new(0),
            total_bytes
        }
    }

    /// Records one consumed line, `bytes_read` being the source position right after it.
    pub fn record_line(&self, bytes_read: u64) {
        self.lines_read.fetch_add(1, Ordering::Relaxed);
        self.bytes_read.fetch_max(bytes_read, Ordering::Relaxed);
    }

    pub fn lines_read(&self) -> u64 {
        self.lines_read.load(Ordering::Relaxed)
    }

    pub fn sample(&self, elapsed: Duration) -> ProgressSample {
        ProgressSample {
            percent: percent(self.bytes_read.load(Ordering::Relaxed), self.total_bytes),
            elapsed,
            lines: self.lines_read()
        }
    }
}

/// `min(bytes_read / total_bytes, 1) * 100`. An empty input counts as complete.
pub fn percent(bytes_read: u64, total_bytes: u64) -> f64 {
    if total_bytes == 0 {
        return 100.0;
    }

    (bytes_read as f64 / total_bytes as f64).min(1.0) * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSample {
    pub percent: f64,
    pub elapsed: Duration,
    pub lines: u64
}

impl ProgressSample {
    /// The same sample reported as finished, regardless of rounding in the byte count.
    pub fn complete(self) -> Self {
        Self {
            percent: 100.0,
            ..self
        }
    }
}

impl Display for ProgressSample {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Progress: {:.2}%, Elapsed {}s, {} lines processed",
            self.percent,
            self.elapsed.as_secs(),
            self.lines
        )
    }
}
