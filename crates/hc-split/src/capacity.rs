//! Net force capacity: the one number each splitter needs per unit.

use hc_core::numeric::Real;
use hc_core::units::{Force, newtons};
use hc_stock::Calculative;

/// Use the full rated tractive effort.
pub const DEFAULT_MAX_POWER: Real = 1.0;

/// Tractive effort left over once `unit` has started itself on `grade`.
///
/// `max_power` derates the tractive effort before the starting force is taken
/// off. For the head power this is the capacity it can spend on a subcut; for
/// a unit in the cut it is that unit's signed contribution (negative for dead
/// weight, positive for stock that could climb on its own).
pub fn net_force_capacity<C: Calculative + ?Sized>(unit: &C, grade: Real, max_power: Real) -> Force {
    newtons(unit.tractive_effort().value * max_power - unit.starting_force(grade).value)
}
