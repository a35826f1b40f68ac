// hc-core/src/units.rs

use uom::si::f64::{Force as UomForce, Mass as UomMass};

// Public canonical unit types (SI, f64)
pub type Force = UomForce;
pub type Mass = UomMass;

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

/// Mass in avoirdupois pounds.
#[inline]
pub fn lb(v: f64) -> Mass {
    use uom::si::mass::pound;
    Mass::new::<pound>(v)
}

#[inline]
pub fn newtons(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

/// Force in pounds-force.
#[inline]
pub fn lbf(v: f64) -> Force {
    use uom::si::force::pound_force;
    Force::new::<pound_force>(v)
}

pub mod constants {
    /// Standard gravity, m/s².
    pub const G0_MPS2: f64 = 9.806_65;

    /// Rolling resistance used by the starting-force model.
    pub const FRICTION_COEFFICIENT: f64 = 0.004;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::force::pound_force;
    use uom::si::mass::pound;

    #[test]
    fn si_constructors_store_si_values() {
        assert_eq!(kg(1_000.0).value, 1_000.0);
        assert_eq!(newtons(10.0).value, 10.0);
    }

    #[test]
    fn imperial_round_trip() {
        assert!((lb(2_000.0).get::<pound>() - 2_000.0).abs() < 1e-9);
        assert!((lbf(50_000.0).get::<pound_force>() - 50_000.0).abs() < 1e-6);
    }

    #[test]
    fn pound_weight_is_about_one_pound_force() {
        let weight = lb(1.0).value * constants::G0_MPS2;
        assert!((newtons(weight).get::<pound_force>() - 1.0).abs() < 1e-6);
    }
}
