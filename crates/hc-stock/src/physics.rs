//! Starting-force model for rolling stock on a grade.
//!
//! All functions work on aggregate quantities: the total mass `M` and total
//! tractive effort `F` of whatever is being moved. With weight `W = M·g0`,
//! grade `α` (as slope) and rolling resistance `μ`, the force needed to start
//! the aggregate is
//!
//! ```text
//!         W·(α + μ)
//! F_s = ─────────────
//!        √(α² + 1)
//! ```
//!
//! Everything else here is that equation rearranged.

use hc_core::numeric::{Real, ensure_finite};
use hc_core::units::constants::{FRICTION_COEFFICIENT, G0_MPS2};
use hc_core::units::{Force, Mass, kg, newtons};

use crate::error::StockResult;

/// Weight of `mass` in newtons.
#[inline]
fn weight(mass: Mass) -> Real {
    mass.value * G0_MPS2
}

/// Force needed to start `mass` moving up `grade`.
pub fn starting_force(mass: Mass, grade: Real) -> Force {
    newtons(weight(mass) * (grade + FRICTION_COEFFICIENT) / (grade * grade + 1.0).sqrt())
}

/// Fraction of `tractive_effort` consumed just to start `mass` on `grade`.
///
/// Values above 1.0 mean the aggregate cannot start. Zero tractive effort has
/// no meaningful ratio and is reported as a non-finite error.
pub fn starting_power(mass: Mass, tractive_effort: Force, grade: Real) -> StockResult<Real> {
    let ratio = starting_force(mass, grade).value / tractive_effort.value;
    Ok(ensure_finite(ratio, "starting power")?)
}

/// Additional mass that `tractive_effort` could still start on `grade`.
///
/// Negative when the aggregate is already over its limit.
pub fn spare_capacity(mass: Mass, tractive_effort: Force, grade: Real) -> StockResult<Mass> {
    let movable = tractive_effort.value * (grade * grade + 1.0).sqrt()
        / (grade + FRICTION_COEFFICIENT)
        / G0_MPS2;
    let spare = ensure_finite(movable - mass.value, "spare capacity")?;
    Ok(kg(spare))
}

/// Steepest grade on which `tractive_effort` can still start `mass`.
///
/// Solves the starting-force equation for `α`. When `F = W` the equation is
/// degenerate, and when `F > W·√(μ² + 1)` there is no real root; both are
/// reported as non-finite errors.
pub fn maximum_grade(mass: Mass, tractive_effort: Force) -> StockResult<Real> {
    let f = tractive_effort.value;
    let w = weight(mass);
    let mu = FRICTION_COEFFICIENT;

    let discriminant = w * w * (mu * mu + 1.0) - f * f;
    let grade = (w * w * mu - f * discriminant.sqrt()) / (f * f - w * w);
    Ok(ensure_finite(grade, "maximum grade")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_core::units::{lb, lbf};
    use uom::si::force::pound_force;
    use uom::si::mass::pound;

    #[test]
    fn starting_force_heavy_train() {
        let f = starting_force(lb(1_000_000.0), 0.01);
        // 1e6 * 0.014 / sqrt(1.0001)
        assert!((f.get::<pound_force>() - 13_999.3).abs() < 0.1);
    }

    #[test]
    fn starting_force_on_level_track_is_rolling_resistance() {
        let f = starting_force(lb(100_000.0), 0.0);
        assert!((f.get::<pound_force>() - 400.0).abs() < 1e-3);
    }

    #[test]
    fn starting_power_ratio() {
        let p = starting_power(lb(1_000_000.0), lbf(50_000.0), 0.01).unwrap();
        assert!((p - 0.28).abs() < 1e-3);
    }

    #[test]
    fn starting_power_without_tractive_effort_is_error() {
        let err = starting_power(lb(50_000.0), lbf(0.0), 0.01).unwrap_err();
        assert!(err.to_string().contains("starting power"));
    }

    #[test]
    fn spare_capacity_reaches_the_boundary() {
        let mass = lb(1_000_000.0);
        let te = lbf(50_000.0);
        let spare = spare_capacity(mass, te, 0.01).unwrap();
        assert!(spare.get::<pound>() > 0.0);

        let at_limit = starting_force(mass + spare, 0.01);
        assert!((at_limit.get::<pound_force>() - 50_000.0).abs() < 1e-3);
    }

    #[test]
    fn spare_capacity_negative_when_overloaded() {
        let spare = spare_capacity(lb(5_000_000.0), lbf(50_000.0), 0.02).unwrap();
        assert!(spare.value < 0.0);
    }

    #[test]
    fn maximum_grade_is_the_starting_limit() {
        let mass = lb(1_000_000.0);
        let te = lbf(50_000.0);
        let grade = maximum_grade(mass, te).unwrap();
        assert!((grade - 0.046).abs() < 1e-3);

        let needed = starting_force(mass, grade);
        assert!((needed.get::<pound_force>() - 50_000.0).abs() < 1e-3);
    }

    #[test]
    fn maximum_grade_without_power_is_downhill() {
        let grade = maximum_grade(lb(80_000.0), lbf(0.0)).unwrap();
        assert!((grade + FRICTION_COEFFICIENT).abs() < 1e-12);
    }

    #[test]
    fn maximum_grade_rejects_negative_discriminant() {
        let err = maximum_grade(lb(1_000.0), lbf(2_000.0)).unwrap_err();
        assert!(err.to_string().contains("maximum grade"));
    }
}
