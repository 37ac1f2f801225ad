mod errors;
mod highest;
mod transfer;

pub use highest::HighestTransfer;
pub use transfer::{render_record, Transfer};
