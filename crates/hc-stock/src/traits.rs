//! Core trait for anything that can be weighed and pulled.

use hc_core::numeric::Real;
use hc_core::units::{Force, Mass};

use crate::error::StockResult;
use crate::physics;

/// Aggregate mass and tractive effort, plus the starting-force quantities
/// derived from them.
///
/// Implemented by single pieces of rolling stock and by whole trains, so the
/// same questions can be asked of a locomotive, a car group or a full cut.
pub trait Calculative {
    /// Total mass.
    fn mass(&self) -> Mass;

    /// Total tractive effort. Zero for unpowered stock.
    fn tractive_effort(&self) -> Force;

    /// Force needed to start this on `grade`.
    fn starting_force(&self, grade: Real) -> Force {
        physics::starting_force(self.mass(), grade)
    }

    /// Fraction of own tractive effort needed to start on `grade`.
    fn starting_power(&self, grade: Real) -> StockResult<Real> {
        physics::starting_power(self.mass(), self.tractive_effort(), grade)
    }

    /// Extra mass that could still be started on `grade`.
    fn spare_capacity(&self, grade: Real) -> StockResult<Mass> {
        physics::spare_capacity(self.mass(), self.tractive_effort(), grade)
    }

    /// Steepest grade this can start on under its own power.
    fn maximum_grade(&self) -> StockResult<Real> {
        physics::maximum_grade(self.mass(), self.tractive_effort())
    }
}
