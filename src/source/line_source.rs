use csv::ByteRecord;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// The single sequential reader every worker pulls from.
///
/// `next_record` is a mutually exclusive "take the next line" operation: each call hands out a distinct record
/// and the underlying reader is exhausted exactly once. Records come out in file order, but which worker gets
/// which record is up to the scheduler, so consumers must not depend on ordering.
///
/// Every physical line becomes one record, split on `,` with the fields kept verbatim. A blank line is a record
/// with a single empty field, so it surfaces as an invalid line instead of disappearing.
pub struct LineSource<R: BufRead> {
    reader: Mutex<R>,
    bytes_read: AtomicU64,
    total_bytes: u64
}

impl LineSource<BufReader<File>> {
    /// Opens a ledger file. The file size is captured up front for progress reporting.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        let total_bytes = file.metadata()?.len();

        Ok(Self::new(BufReader::new(file), total_bytes))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R, total_bytes: u64) -> Self {
        Self {
            reader: Mutex::new(reader),
            bytes_read: AtomicU64::new(0),
            total_bytes
        }
    }

    /// Takes the next record, `None` once the input is exhausted.
    ///
    /// # Errors
    /// Returns the reader's error when the underlying input fails; callers treat this as fatal.
    pub fn next_record(&self) -> io::Result<Option<ByteRecord>> {
        let mut line = Vec::new();

        let read = {
            let mut reader = self.reader.lock().unwrap_or_else(PoisonError::into_inner);
            let read = reader.read_until(b'\n', &mut line)?;
            //NOTE: Updated under the lock so the position never goes backwards
            self.bytes_read.fetch_add(read as u64, Ordering::Relaxed);
            read
        };

        if read == 0 {
            return Ok(None);
        }

        Ok(Some(split_line(strip_line_ending(&line))))
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read.load(Ordering::Relaxed)
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn split_line(line: &[u8]) -> ByteRecord {
    line.split(|byte| *byte == b',').collect()
}
