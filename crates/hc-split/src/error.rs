//! Error types for splitting operations.
//!
//! Infeasibility is not an error: splitters report it as `Ok(None)`.

use hc_core::error::HcError;
use hc_core::numeric::Real;
use hc_stock::StockError;
use thiserror::Error;

/// Errors that can occur while computing or materializing a split.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Head capacity must be positive and finite, got {value}")]
    InvalidCapacity { value: Real },

    #[error("Invalid option: {what}")]
    InvalidOption { what: &'static str },

    #[error("Invalid split: {what}")]
    InvalidSplit { what: &'static str },

    #[error("Split covers {total} units but the cut has {len}")]
    SplitMismatch { total: usize, len: usize },

    #[error("Stock error: {0}")]
    Stock(#[from] StockError),

    #[error("{0}")]
    Core(#[from] HcError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SplitResult<T> = Result<T, SplitError>;

impl From<SplitError> for HcError {
    fn from(e: SplitError) -> Self {
        match e {
            SplitError::InvalidCapacity { .. } => HcError::InvalidArg {
                what: "head capacity",
            },
            SplitError::InvalidOption { what } => HcError::InvalidArg { what },
            SplitError::InvalidSplit { what } => HcError::InvalidArg { what },
            SplitError::SplitMismatch { .. } => HcError::Invariant {
                what: "split must cover the cut",
            },
            SplitError::Stock(inner) => inner.into(),
            SplitError::Core(inner) => inner,
            SplitError::Yaml(_) => HcError::InvalidArg { what: "yaml" },
            SplitError::Json(_) => HcError::InvalidArg { what: "json" },
        }
    }
}
