use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum AmountError {
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: [{0}] is out of range")]
    Overflow(String)
}
