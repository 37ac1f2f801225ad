mod errors;
mod monetary;

pub use errors::AmountError;
pub use monetary::{deserialize_amount, Rounded, DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};

pub type AccountId = String;
pub type TransactionId = String;
