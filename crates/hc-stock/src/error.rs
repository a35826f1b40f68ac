//! Error types for rolling stock operations.

use hc_core::error::HcError;
use thiserror::Error;

/// Errors that can occur while building or measuring rolling stock.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StockError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Empty {what}")]
    Empty { what: &'static str },

    #[error("Range {start}..{end} out of bounds for train of length {len}")]
    OutOfRange { start: usize, end: usize, len: usize },

    #[error("{0}")]
    Core(#[from] HcError),
}

pub type StockResult<T> = Result<T, StockError>;

impl From<StockError> for HcError {
    fn from(e: StockError) -> Self {
        match e {
            StockError::NonPhysical { what } => HcError::InvalidArg { what },
            StockError::Empty { what } => HcError::InvalidArg { what },
            StockError::OutOfRange { .. } => HcError::InvalidArg {
                what: "train range",
            },
            StockError::Core(inner) => inner,
        }
    }
}
