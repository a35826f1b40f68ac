//! hc-stock: rolling stock model and starting-force physics.
//!
//! Provides:
//! - Plain cars, tractive cars (locomotives) and car groups
//! - `Train`, the ordered consist every computation works on
//! - The `Calculative` trait exposing mass, tractive effort and the derived
//!   starting-force quantities for any aggregate
//!
//! # Example
//!
//! ```
//! use hc_core::units::{lb, lbf};
//! use hc_stock::{Calculative, Car, TractiveCar, Train};
//!
//! let loco = TractiveCar::new("GP9", lb(250_000.0), lbf(60_000.0)).unwrap();
//! let boxcar = Car::new("boxcar", lb(120_000.0)).unwrap();
//!
//! let train = Train::from(loco).concat(&Train::repeat_unit(boxcar, 10));
//! assert_eq!(train.len(), 11);
//! assert!(train.starting_power(0.05).unwrap() > 1.0);
//! ```

pub mod error;
pub mod physics;
pub mod stock;
pub mod traits;
pub mod train;

// Re-exports
pub use error::{StockError, StockResult};
pub use stock::{Car, CarGroup, RollingStock, TractiveCar};
pub use traits::Calculative;
pub use train::{FlatIter, Train};
