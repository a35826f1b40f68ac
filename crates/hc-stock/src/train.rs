//! Ordered consists of rolling stock.

use core::fmt;
use core::ops::Range;

use hc_core::units::{Force, Mass, kg, newtons};

use crate::error::{StockError, StockResult};
use crate::stock::{Car, CarGroup, RollingStock, TractiveCar};
use crate::traits::Calculative;

/// Rolling stock in coupling order.
///
/// Order matters: every operation here (concatenation, repetition, slicing)
/// preserves it. A train never changes after it is built; operations return
/// new trains.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Train {
    stock: Vec<RollingStock>,
}

impl Train {
    pub fn new(stock: impl IntoIterator<Item = RollingStock>) -> Self {
        Self {
            stock: stock.into_iter().collect(),
        }
    }

    /// A train of `n` copies of `unit`.
    pub fn repeat_unit(unit: impl Into<RollingStock>, n: usize) -> Self {
        let unit = unit.into();
        Self {
            stock: vec![unit; n],
        }
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RollingStock> {
        self.stock.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, RollingStock> {
        self.stock.iter()
    }

    pub fn as_slice(&self) -> &[RollingStock] {
        &self.stock
    }

    /// This train followed by `other`.
    pub fn concat(&self, other: &Train) -> Train {
        let mut stock = Vec::with_capacity(self.len() + other.len());
        stock.extend_from_slice(&self.stock);
        stock.extend_from_slice(&other.stock);
        Self { stock }
    }

    /// This train with `unit` coupled to the end.
    pub fn then(mut self, unit: impl Into<RollingStock>) -> Train {
        self.stock.push(unit.into());
        self
    }

    /// The whole train repeated `n` times, end to end.
    ///
    /// Car groups stay intact; the members are not regrouped.
    pub fn repeat(&self, n: usize) -> Train {
        (0..n).flat_map(|_| self.stock.iter().cloned()).collect()
    }

    /// Contiguous part of the train.
    pub fn slice(&self, range: Range<usize>) -> StockResult<Train> {
        match self.stock.get(range.clone()) {
            Some(part) => Ok(Self {
                stock: part.to_vec(),
            }),
            None => Err(StockError::OutOfRange {
                start: range.start,
                end: range.end,
                len: self.len(),
            }),
        }
    }

    /// Members that contribute tractive effort, in order.
    pub fn tractive_units(&self) -> Train {
        Self::new(self.iter().filter(|s| s.is_tractive()).cloned())
    }

    /// Every individual car, with car groups decomposed into their members.
    pub fn flat_iter(&self) -> FlatIter<'_> {
        FlatIter {
            stack: vec![self.stock.iter()],
        }
    }
}

impl Calculative for Train {
    fn mass(&self) -> Mass {
        kg(self.iter().map(|s| s.mass().value).sum())
    }

    fn tractive_effort(&self) -> Force {
        newtons(self.iter().map(|s| s.tractive_effort().value).sum())
    }
}

/// Depth-first iterator over the cars of a train. See [`Train::flat_iter`].
pub struct FlatIter<'a> {
    stack: Vec<core::slice::Iter<'a, RollingStock>>,
}

impl<'a> Iterator for FlatIter<'a> {
    type Item = &'a RollingStock;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(RollingStock::Group(group)) => self.stack.push(group.train().iter()),
                Some(unit) => return Some(unit),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, unit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{unit}")?;
        }
        write!(f, "]")
    }
}

impl FromIterator<RollingStock> for Train {
    fn from_iter<I: IntoIterator<Item = RollingStock>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Train {
    type Item = &'a RollingStock;
    type IntoIter = core::slice::Iter<'a, RollingStock>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<RollingStock> for Train {
    fn from(unit: RollingStock) -> Self {
        Self { stock: vec![unit] }
    }
}

impl From<Car> for Train {
    fn from(c: Car) -> Self {
        Self::from(RollingStock::from(c))
    }
}

impl From<TractiveCar> for Train {
    fn from(t: TractiveCar) -> Self {
        Self::from(RollingStock::from(t))
    }
}

impl From<CarGroup> for Train {
    fn from(g: CarGroup) -> Self {
        Self::from(RollingStock::from(g))
    }
}

impl From<Vec<RollingStock>> for Train {
    fn from(stock: Vec<RollingStock>) -> Self {
        Self { stock }
    }
}
