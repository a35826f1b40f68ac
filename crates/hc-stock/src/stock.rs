//! Individual pieces of rolling stock.

use core::fmt;

use hc_core::numeric::ensure_finite;
use hc_core::units::{Force, Mass, newtons};

use crate::error::{StockError, StockResult};
use crate::traits::Calculative;
use crate::train::Train;

fn check_mass(mass: Mass) -> StockResult<Mass> {
    ensure_finite(mass.value, "mass")?;
    if mass.value < 0.0 {
        return Err(StockError::NonPhysical {
            what: "mass must be non-negative",
        });
    }
    Ok(mass)
}

/// Unpowered piece of rolling stock.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    name: String,
    mass: Mass,
}

impl Car {
    pub fn new(name: impl Into<String>, mass: Mass) -> StockResult<Self> {
        Ok(Self {
            name: name.into(),
            mass: check_mass(mass)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Calculative for Car {
    fn mass(&self) -> Mass {
        self.mass
    }

    fn tractive_effort(&self) -> Force {
        newtons(0.0)
    }
}

/// Piece of rolling stock that applies tractive effort, e.g. a locomotive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TractiveCar {
    name: String,
    mass: Mass,
    tractive_effort: Force,
}

impl TractiveCar {
    pub fn new(name: impl Into<String>, mass: Mass, tractive_effort: Force) -> StockResult<Self> {
        ensure_finite(tractive_effort.value, "tractive effort")?;
        if tractive_effort.value <= 0.0 {
            return Err(StockError::NonPhysical {
                what: "tractive effort must be positive",
            });
        }
        Ok(Self {
            name: name.into(),
            mass: check_mass(mass)?,
            tractive_effort,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Calculative for TractiveCar {
    fn mass(&self) -> Mass {
        self.mass
    }

    fn tractive_effort(&self) -> Force {
        self.tractive_effort
    }
}

/// A train treated as one indivisible piece of rolling stock.
///
/// Useful for stock that is separate for some purposes but must never be
/// split up, such as a steam locomotive and its tender.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarGroup {
    name: String,
    train: Train,
}

impl CarGroup {
    pub fn new(name: impl Into<String>, train: impl Into<Train>) -> StockResult<Self> {
        let train = train.into();
        if train.is_empty() {
            return Err(StockError::Empty { what: "car group" });
        }
        Ok(Self {
            name: name.into(),
            train,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members of the group, in coupling order.
    pub fn train(&self) -> &Train {
        &self.train
    }
}

impl Calculative for CarGroup {
    fn mass(&self) -> Mass {
        self.train.mass()
    }

    fn tractive_effort(&self) -> Force {
        self.train.tractive_effort()
    }
}

/// Any unit that can appear in a [`Train`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum RollingStock {
    Car(Car),
    Tractive(TractiveCar),
    Group(CarGroup),
}

impl RollingStock {
    pub fn name(&self) -> &str {
        match self {
            RollingStock::Car(c) => c.name(),
            RollingStock::Tractive(t) => t.name(),
            RollingStock::Group(g) => g.name(),
        }
    }

    /// True when this unit contributes tractive effort.
    pub fn is_tractive(&self) -> bool {
        self.tractive_effort().value > 0.0
    }
}

impl Calculative for RollingStock {
    fn mass(&self) -> Mass {
        match self {
            RollingStock::Car(c) => c.mass(),
            RollingStock::Tractive(t) => t.mass(),
            RollingStock::Group(g) => g.mass(),
        }
    }

    fn tractive_effort(&self) -> Force {
        match self {
            RollingStock::Car(c) => c.tractive_effort(),
            RollingStock::Tractive(t) => t.tractive_effort(),
            RollingStock::Group(g) => g.tractive_effort(),
        }
    }
}

impl fmt::Display for RollingStock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Car> for RollingStock {
    fn from(c: Car) -> Self {
        RollingStock::Car(c)
    }
}

impl From<TractiveCar> for RollingStock {
    fn from(t: TractiveCar) -> Self {
        RollingStock::Tractive(t)
    }
}

impl From<CarGroup> for RollingStock {
    fn from(g: CarGroup) -> Self {
        RollingStock::Group(g)
    }
}
