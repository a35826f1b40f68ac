//! Choosing a splitter for a real cut of rolling stock.

use hc_core::numeric::{Real, ensure_finite};
use hc_stock::{Calculative, Train};
use tracing::debug;

use crate::capacity::net_force_capacity;
use crate::error::SplitResult;
use crate::fastsplit::fastsplit;
use crate::materialize::{Trip, split_to_trips, trips_collecting};
use crate::options::SplitOptions;
use crate::smartsplit::smartsplit;
use crate::split::Split;

/// Splits `cut` so that `power` can start each subcut on `grade`.
///
/// If no unit in the cut could ever add capacity, or collection was asked
/// for, the greedy splitter runs with collection on: an exhaustive search
/// gains nothing there. Otherwise the exact splitter looks for the fewest
/// subcuts, allowing up to one per unit.
///
/// Returns `Ok(None)` when the cut cannot be split, and an error when `power`
/// cannot even start itself on `grade`.
pub fn compute_split<P: Calculative + ?Sized>(
    power: &P,
    cut: &Train,
    grade: Real,
    options: &SplitOptions,
) -> SplitResult<Option<Split>> {
    options.validate()?;
    ensure_finite(grade, "grade")?;

    let capacity = net_force_capacity(power, grade, options.max_power).value;
    let forces: Vec<Real> = cut
        .iter()
        .map(|unit| net_force_capacity(unit, grade, options.max_power).value)
        .collect();

    let no_providers = forces.iter().all(|&f| f <= 0.0);
    let split = if no_providers || options.collect_net {
        debug!(
            units = forces.len(),
            capacity,
            no_providers,
            "compute_split: using fastsplit"
        );
        fastsplit(capacity, &forces, true)?
    } else {
        debug!(
            units = forces.len(),
            capacity, "compute_split: using smartsplit"
        );
        smartsplit(capacity, &forces, forces.len())?
    };

    match &split {
        Some(split) => debug!(parts = split.len(), "compute_split: {split}"),
        None => debug!("compute_split: infeasible"),
    }
    Ok(split)
}

/// Computes the split for `cut` and turns it into trips led by `power`.
///
/// Trip power follows [`SplitOptions::trip_power`], except with
/// [`SplitOptions::collect_net`]: the split then counted on every delivered
/// unit with positive net force helping afterwards, so exactly those units
/// join the power.
pub fn plan_trips(
    power: &Train,
    cut: &Train,
    grade: Real,
    options: &SplitOptions,
) -> SplitResult<Option<Vec<Trip>>> {
    let Some(split) = compute_split(power, cut, grade, options)? else {
        return Ok(None);
    };
    let trips: Vec<Trip> = if options.collect_net {
        let max_power = options.max_power;
        trips_collecting(power.clone(), cut, &split, move |unit| {
            net_force_capacity(unit, grade, max_power).value > 0.0
        })?
        .collect()
    } else {
        split_to_trips(power.clone(), cut, &split, options.trip_power)?.collect()
    };
    Ok(Some(trips))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SplitError;
    use crate::options::TripPower;
    use hc_core::units::{lb, lbf};
    use hc_stock::{Car, RollingStock, TractiveCar};

    fn mogul() -> TractiveCar {
        TractiveCar::new("2-6-0", lb(150_000.0), lbf(25_000.0)).unwrap()
    }

    fn boxcar() -> RollingStock {
        Car::new("boxcar", lb(90_000.0)).unwrap().into()
    }

    #[test]
    fn dead_cut_covers_every_unit() {
        let cut = Train::repeat_unit(boxcar(), 12);
        let split = compute_split(&mogul(), &cut, 0.03, &SplitOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!(split.total(), 12);
        assert!(split.len() > 1);
    }

    #[test]
    fn light_cut_goes_in_one_trip() {
        let cut = Train::repeat_unit(boxcar(), 2);
        let split = compute_split(&mogul(), &cut, 0.0, &SplitOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!(split.parts(), &[2]);
    }

    #[test]
    fn power_that_cannot_start_itself_is_rejected() {
        let weak = TractiveCar::new("weak", lb(200_000.0), lbf(500.0)).unwrap();
        let cut = Train::repeat_unit(boxcar(), 2);
        let err = compute_split(&weak, &cut, 0.02, &SplitOptions::default()).unwrap_err();
        assert!(matches!(err, SplitError::InvalidCapacity { .. }));
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let cut = Train::repeat_unit(boxcar(), 2);
        let bad_options = SplitOptions::default().with_max_power(0.0);
        assert!(matches!(
            compute_split(&mogul(), &cut, 0.01, &bad_options),
            Err(SplitError::InvalidOption { .. })
        ));
        assert!(matches!(
            compute_split(&mogul(), &cut, Real::NAN, &SplitOptions::default()),
            Err(SplitError::Core(_))
        ));
    }

    #[test]
    fn empty_cut() {
        let split = compute_split(&mogul(), &Train::default(), 0.02, &SplitOptions::default())
            .unwrap()
            .unwrap();
        assert!(split.is_empty());
    }

    #[test]
    fn plan_trips_collects_delivered_power() {
        let cut = Train::repeat_unit(boxcar(), 5)
            .then(mogul())
            .concat(&Train::repeat_unit(boxcar(), 5));
        let options = SplitOptions::default().with_trip_power(TripPower::CollectDelivered);
        let trips = plan_trips(&Train::from(mogul()), &cut, 0.04, &options)
            .unwrap()
            .unwrap();

        assert!(trips.len() > 1);
        let delivered: usize = trips.iter().map(|t| t.subcut.len()).sum();
        assert_eq!(delivered, cut.len());
        for pair in trips.windows(2) {
            assert_eq!(
                pair[1].power,
                pair[0].power.concat(&pair[0].subcut),
                "each trip adds the previous subcut to the power"
            );
        }
    }
}
