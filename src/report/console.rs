use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Line-atomic output shared by the workers' diagnostics and the final report.
pub struct Console<W: Write> {
    output: Mutex<W>
}

impl<W: Write> Console<W> {
    pub fn new(output: W) -> Self {
        Self {
            output: Mutex::new(output)
        }
    }

    /// Writes `line` followed by a newline while holding the lock, so lines from concurrent callers never interleave.
    pub fn line(&self, line: fmt::Arguments<'_>) -> io::Result<()> {
        let mut output = self.lock();
        output.write_fmt(line)?;
        output.write_all(b"\n")
    }

    pub fn blank_line(&self) -> io::Result<()> {
        self.lock().write_all(b"\n")
    }

    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.output.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.output.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
