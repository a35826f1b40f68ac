//! Options controlling how a cut is split and how trips are formed.

use hc_core::numeric::Real;
use serde::{Deserialize, Serialize};

use crate::capacity::DEFAULT_MAX_POWER;
use crate::error::{SplitError, SplitResult};

/// What the power of each trip is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripPower {
    /// Every trip uses the original power.
    #[default]
    Fixed,
    /// Each trip's power is the original power plus every subcut already
    /// delivered.
    CollectDelivered,
    /// Like `CollectDelivered`, but only the delivered units that have
    /// tractive effort join the power.
    CollectTractive,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitOptions {
    /// Fraction of rated tractive effort that may be used.
    pub max_power: Real,
    /// Add self-propelling units to the power once they have been delivered.
    /// Forces the greedy splitter.
    pub collect_net: bool,
    pub trip_power: TripPower,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            max_power: DEFAULT_MAX_POWER,
            collect_net: false,
            trip_power: TripPower::Fixed,
        }
    }
}

impl SplitOptions {
    pub fn with_max_power(mut self, max_power: Real) -> Self {
        self.max_power = max_power;
        self
    }

    pub fn with_collect_net(mut self, collect_net: bool) -> Self {
        self.collect_net = collect_net;
        self
    }

    pub fn with_trip_power(mut self, trip_power: TripPower) -> Self {
        self.trip_power = trip_power;
        self
    }

    pub fn validate(&self) -> SplitResult<()> {
        if !(self.max_power.is_finite() && self.max_power > 0.0) {
            return Err(SplitError::InvalidOption {
                what: "max_power must be positive and finite",
            });
        }
        Ok(())
    }

    /// Parses and validates options from YAML. Missing keys take their
    /// defaults.
    pub fn from_yaml_str(content: &str) -> SplitResult<Self> {
        let options: SplitOptions = serde_yaml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Parses and validates options from JSON. Missing keys take their
    /// defaults.
    pub fn from_json_str(content: &str) -> SplitResult<Self> {
        let options: SplitOptions = serde_json::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_yaml_string(&self) -> SplitResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
