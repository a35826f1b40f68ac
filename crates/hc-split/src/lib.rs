//! Hill-climb splitting engine.
//!
//! Given the power available at the head of a train and a cut of rolling
//! stock that has to go up a grade, this crate works out how to divide the
//! cut into the fewest contiguous subcuts the power can start, and turns that
//! division into an ordered list of trips.
//!
//! Two splitters are provided:
//! - [`fastsplit`]: one greedy pass taking the longest feasible prefix each
//!   time, optionally adding self-propelling units to the power as it goes
//! - [`smartsplit`]: branch-and-bound search for the minimum number of
//!   subcuts, with power never replenished
//!
//! [`compute_split`] picks between them.
//!
//! # Example
//!
//! ```
//! use hc_core::units::{lb, lbf};
//! use hc_split::{SplitOptions, compute_split, split_to_subcuts};
//! use hc_stock::{Car, TractiveCar, Train};
//!
//! let power = Train::from(TractiveCar::new("2-6-0", lb(150_000.0), lbf(25_000.0)).unwrap());
//! let cut = Train::repeat_unit(Car::new("boxcar", lb(90_000.0)).unwrap(), 12);
//!
//! let split = compute_split(&power, &cut, 0.03, &SplitOptions::default())
//!     .unwrap()
//!     .expect("each boxcar can be moved on its own");
//! assert_eq!(split.total(), cut.len());
//!
//! for subcut in split_to_subcuts(&cut, &split).unwrap() {
//!     println!("{subcut}");
//! }
//! ```

pub mod capacity;
pub mod compute;
pub mod error;
pub mod fastsplit;
pub mod materialize;
pub mod options;
pub mod smartsplit;
pub mod split;

pub use capacity::{DEFAULT_MAX_POWER, net_force_capacity};
pub use compute::{compute_split, plan_trips};
pub use error::{SplitError, SplitResult};
pub use fastsplit::fastsplit;
pub use materialize::{Trip, split_to_ranges, split_to_subcuts, split_to_trips};
pub use options::{SplitOptions, TripPower};
pub use smartsplit::smartsplit;
pub use split::Split;
