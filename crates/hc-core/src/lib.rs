//! hc-core: shared foundation for hillclimber.
//!
//! Contains:
//! - units (uom SI types + constructors for railway units)
//! - numeric (Real + float checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HcError, HcResult};
pub use numeric::*;
pub use units::*;
