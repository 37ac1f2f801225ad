mod progress;
mod progress_monitor;

pub use progress::{Progress, ProgressSample};
pub use progress_monitor::ProgressMonitor;
