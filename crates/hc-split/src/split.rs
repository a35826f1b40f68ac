//! The result of splitting a cut.

use core::fmt;
use core::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{SplitError, SplitResult};

/// Lengths of consecutive subcuts, in cut order.
///
/// Every part is at least one unit long and the parts add up to the length of
/// the cut they were computed for. An empty split is the (valid) split of an
/// empty cut; infeasibility is represented by the absence of a split.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Split(Vec<usize>);

impl Split {
    /// Builds a split from explicit part lengths.
    pub fn new(parts: Vec<usize>) -> SplitResult<Self> {
        if parts.contains(&0) {
            return Err(SplitError::InvalidSplit {
                what: "subcut lengths must be positive",
            });
        }
        Ok(Self(parts))
    }

    /// Parts produced by a splitter, which never emits an empty subcut.
    pub(crate) fn from_parts(parts: Vec<usize>) -> Self {
        debug_assert!(!parts.contains(&0));
        Self(parts)
    }

    pub fn parts(&self) -> &[usize] {
        &self.0
    }

    /// Number of subcuts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of units covered.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Index range of each subcut within the cut.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.0.iter().scan(0, |start, &len| {
            let range = *start..*start + len;
            *start += len;
            Some(range)
        })
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, len) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{len}")?;
        }
        write!(f, ")")
    }
}
