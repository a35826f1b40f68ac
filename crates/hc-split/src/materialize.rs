//! Turning a split back into trains.

use core::ops::Range;

use hc_stock::{RollingStock, Train};

use crate::error::{SplitError, SplitResult};
use crate::options::TripPower;
use crate::split::Split;

/// One movement up the hill: the power and the subcut it takes along.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub power: Train,
    pub subcut: Train,
}

impl Trip {
    /// The complete consist for this trip, power leading.
    pub fn train(&self) -> Train {
        self.power.concat(&self.subcut)
    }
}

/// Index range of each subcut, in order.
pub fn split_to_ranges(split: &Split) -> impl Iterator<Item = Range<usize>> + '_ {
    split.ranges()
}

fn check_covers(cut: &Train, split: &Split) -> SplitResult<()> {
    let total = split.total();
    if total != cut.len() {
        return Err(SplitError::SplitMismatch {
            total,
            len: cut.len(),
        });
    }
    Ok(())
}

/// The subcuts of `cut` described by `split`, in order.
///
/// Fails up front if `split` does not cover `cut` exactly.
pub fn split_to_subcuts<'a>(
    cut: &'a Train,
    split: &'a Split,
) -> SplitResult<impl Iterator<Item = Train> + 'a> {
    check_covers(cut, split)?;
    let units = cut.as_slice();
    Ok(split_to_ranges(split).map(move |range| Train::new(units[range].iter().cloned())))
}

/// The trips needed to take `cut` up the hill with `power`, in order.
///
/// With [`TripPower::Fixed`] every trip is led by `power`. The collecting
/// modes grow the power after each trip with what that trip delivered.
pub fn split_to_trips<'a>(
    power: Train,
    cut: &'a Train,
    split: &'a Split,
    mode: TripPower,
) -> SplitResult<impl Iterator<Item = Trip> + 'a> {
    trips_collecting(power, cut, split, move |unit| match mode {
        TripPower::Fixed => false,
        TripPower::CollectDelivered => true,
        TripPower::CollectTractive => unit.is_tractive(),
    })
}

/// Like [`split_to_trips`], with the delivered units for which `joins` holds
/// added to the power after each trip.
pub(crate) fn trips_collecting<'a, F>(
    power: Train,
    cut: &'a Train,
    split: &'a Split,
    mut joins: F,
) -> SplitResult<impl Iterator<Item = Trip> + 'a>
where
    F: FnMut(&RollingStock) -> bool + 'a,
{
    let subcuts = split_to_subcuts(cut, split)?;
    let mut running = power;
    Ok(subcuts.map(move |subcut| {
        let trip = Trip {
            power: running.clone(),
            subcut,
        };
        let joining = Train::new(trip.subcut.iter().filter(|&unit| joins(unit)).cloned());
        if !joining.is_empty() {
            running = running.concat(&joining);
        }
        trip
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_core::units::{lb, lbf};
    use hc_stock::{Car, TractiveCar};

    fn car(name: &str) -> RollingStock {
        Car::new(name, lb(80_000.0)).unwrap().into()
    }

    fn loco(name: &str) -> RollingStock {
        TractiveCar::new(name, lb(200_000.0), lbf(40_000.0))
            .unwrap()
            .into()
    }

    fn names(train: &Train) -> Vec<&str> {
        train.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn ranges_are_contiguous() {
        let split = Split::new(vec![2, 3, 1]).unwrap();
        let ranges: Vec<_> = split_to_ranges(&split).collect();
        assert_eq!(ranges, vec![0..2, 2..5, 5..6]);
    }

    #[test]
    fn subcuts_preserve_order() {
        let cut = Train::new(["a", "b", "c", "d"].map(car));
        let split = Split::new(vec![3, 1]).unwrap();
        let subcuts: Vec<Train> = split_to_subcuts(&cut, &split).unwrap().collect();
        assert_eq!(subcuts.len(), 2);
        assert_eq!(names(&subcuts[0]), ["a", "b", "c"]);
        assert_eq!(names(&subcuts[1]), ["d"]);
    }

    #[test]
    fn mismatched_split_is_rejected() {
        let cut = Train::new(["a", "b"].map(car));
        let split = Split::new(vec![1, 2]).unwrap();
        let err = split_to_subcuts(&cut, &split).err().unwrap();
        assert!(matches!(err, SplitError::SplitMismatch { total: 3, len: 2 }));
    }

    #[test]
    fn fixed_power_on_every_trip() {
        let power = Train::from(loco("L1"));
        let cut = Train::new(["a", "b", "c"].map(car));
        let split = Split::new(vec![2, 1]).unwrap();

        let trips: Vec<Trip> = split_to_trips(power.clone(), &cut, &split, TripPower::Fixed)
            .unwrap()
            .collect();
        assert_eq!(trips.len(), 2);
        assert!(trips.iter().all(|t| t.power == power));
        assert_eq!(names(&trips[0].train()), ["L1", "a", "b"]);
        assert_eq!(names(&trips[1].train()), ["L1", "c"]);
    }

    #[test]
    fn delivered_subcuts_join_the_power() {
        let power = Train::from(loco("L1"));
        let cut = Train::new([car("a"), loco("L2"), car("b"), car("c")]);
        let split = Split::new(vec![2, 1, 1]).unwrap();

        let trips: Vec<Trip> = split_to_trips(power, &cut, &split, TripPower::CollectDelivered)
            .unwrap()
            .collect();
        assert_eq!(names(&trips[0].power), ["L1"]);
        assert_eq!(names(&trips[1].power), ["L1", "a", "L2"]);
        assert_eq!(names(&trips[2].power), ["L1", "a", "L2", "b"]);
    }

    #[test]
    fn only_tractive_units_join_the_power() {
        let power = Train::from(loco("L1"));
        let cut = Train::new([car("a"), loco("L2"), car("b"), car("c")]);
        let split = Split::new(vec![2, 1, 1]).unwrap();

        let trips: Vec<Trip> = split_to_trips(power, &cut, &split, TripPower::CollectTractive)
            .unwrap()
            .collect();
        assert_eq!(names(&trips[0].power), ["L1"]);
        assert_eq!(names(&trips[1].power), ["L1", "L2"]);
        assert_eq!(names(&trips[2].power), ["L1", "L2"]);
    }

    #[test]
    fn materializing_twice_is_identical() {
        let cut = Train::new(["a", "b", "c", "d", "e"].map(car));
        let split = Split::new(vec![1, 3, 1]).unwrap();
        let first: Vec<Train> = split_to_subcuts(&cut, &split).unwrap().collect();
        let second: Vec<Train> = split_to_subcuts(&cut, &split).unwrap().collect();
        assert_eq!(first, second);
    }
}
