//! Smartsplit: branch-and-bound search for the fewest subcuts.
//!
//! The search tries first subcuts from longest to shortest and solves the
//! remainder recursively. Each recursive call only gets enough parts to beat
//! the best split found so far, which prunes most of the tree.
//!
//! Once a first subcut of length `ℓ` has produced a valid split, shorter first
//! subcuts that only give up trailing units with non-positive force are not
//! tried: moving dead weight from the end of the first subcut to the front of
//! the remainder never lets the remainder use fewer parts.

use hc_core::numeric::Real;
use tracing::trace;

use crate::error::SplitResult;
use crate::fastsplit::{check_capacity, is_feasible};
use crate::split::Split;

/// Splits `cut` into the fewest subcuts that `capacity` can each start,
/// using at most `max_parts` of them.
///
/// `cut` holds the net force of each unit. Unlike
/// [`fastsplit`](crate::fastsplit()), capacity is never replenished between
/// subcuts. Returns `Ok(None)` when no split within `max_parts` exists.
pub fn smartsplit(capacity: Real, cut: &[Real], max_parts: usize) -> SplitResult<Option<Split>> {
    let capacity = check_capacity(capacity)?;
    // A split never needs more parts than there are units.
    let max_parts = max_parts.min(cut.len());
    Ok(search(capacity, cut, max_parts).map(Split::from_parts))
}

/// Best split found so far at one level of the search.
struct Best {
    parts: Option<Vec<usize>>,
    /// Part count a new candidate has to beat.
    bound: usize,
}

impl Best {
    fn new(max_parts: usize) -> Self {
        Self {
            parts: None,
            bound: max_parts + 1,
        }
    }

    /// Parts left for the remainder once a first subcut is chosen.
    fn remainder_budget(&self) -> usize {
        // bound >= 2 here: a bound of 1 ends the search immediately
        self.bound - 2
    }

    /// Keeps `candidate` if it beats the bound. Returns whether it did.
    fn offer(&mut self, candidate: Vec<usize>) -> bool {
        if candidate.len() >= self.bound {
            return false;
        }
        self.bound = candidate.len();
        self.parts = Some(candidate);
        true
    }

    fn is_unbeatable(&self) -> bool {
        self.bound == 1
    }
}

fn search(capacity: Real, cut: &[Real], max_parts: usize) -> Option<Vec<usize>> {
    if cut.is_empty() {
        return Some(Vec::new());
    }
    match max_parts {
        0 => return None,
        1 => return is_feasible(capacity, cut).then(|| vec![cut.len()]),
        _ => {}
    }

    let mut best = Best::new(max_parts);
    let mut len = cut.len();
    while len > 0 {
        let (head, tail) = cut.split_at(len);
        if !is_feasible(capacity, head) {
            len -= 1;
            continue;
        }
        let Some(rest) = search(capacity, tail, best.remainder_budget()) else {
            len -= 1;
            continue;
        };

        let mut candidate = Vec::with_capacity(rest.len() + 1);
        candidate.push(len);
        candidate.extend(rest);
        if best.offer(candidate) {
            trace!(first = len, parts = best.bound, "smartsplit: improved");
        }
        if best.is_unbeatable() {
            return best.parts;
        }

        // Drop trailing units up to and including the last force provider.
        len = head.iter().rposition(|&f| f > 0.0).unwrap_or(0);
    }
    best.parts
}
