mod batch_engine;
mod errors;
mod stats;
mod worker;

pub use batch_engine::process_transfers;
pub use errors::BatchError;
pub use stats::BatchStats;
