//! Fastsplit: greedy longest-prefix splitting.

use hc_core::numeric::{Real, ensure_positive};
use tracing::trace;

use crate::error::{SplitError, SplitResult};
use crate::split::Split;

/// Rejects head capacity that could never move anything.
pub(crate) fn check_capacity(capacity: Real) -> SplitResult<Real> {
    ensure_positive(capacity, "capacity").map_err(|_| SplitError::InvalidCapacity { value: capacity })
}

/// True when `capacity` can start a subcut with these unit forces.
#[inline]
pub(crate) fn is_feasible(capacity: Real, forces: &[Real]) -> bool {
    capacity + forces.iter().sum::<Real>() > 0.0
}

/// Splits `cut` by repeatedly taking the longest prefix `capacity` can start.
///
/// `cut` holds the net force of each unit. With `collect_net`, the positive
/// forces in each subcut are added to the capacity for every later subcut,
/// since those units can help once they are moving.
///
/// Returns `Ok(None)` when some unit cannot be moved even on its own. The
/// result is not guaranteed to use the fewest subcuts; see
/// [`smartsplit`](crate::smartsplit()) for that.
pub fn fastsplit(capacity: Real, cut: &[Real], collect_net: bool) -> SplitResult<Option<Split>> {
    let mut capacity = check_capacity(capacity)?;
    let mut parts = Vec::new();
    let mut rest = cut;

    while !rest.is_empty() {
        let Some(len) = (1..=rest.len())
            .rev()
            .find(|&len| is_feasible(capacity, &rest[..len]))
        else {
            trace!(
                offset = cut.len() - rest.len(),
                capacity, "fastsplit: unit cannot be moved"
            );
            return Ok(None);
        };

        let (head, tail) = rest.split_at(len);
        if collect_net {
            capacity += head.iter().filter(|&&f| f > 0.0).sum::<Real>();
        }
        trace!(len, capacity, "fastsplit: subcut");
        parts.push(len);
        rest = tail;
    }

    Ok(Some(Split::from_parts(parts)))
}
