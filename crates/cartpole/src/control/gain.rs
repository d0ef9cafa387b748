use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};

use crate::State;

/// A 1×4 state-feedback gain row vector.
///
/// The tabulated gains were tuned offline for the default
/// [`PhysicalParameters`](crate::PhysicalParameters) and do not depend on
/// them at runtime. They follow the sign convention of
/// [`LinearModel`](crate::LinearModel), where the input enters as `−B · u`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlGain([f64; 4]);

impl ControlGain {
    /// Gain tuned for a frictionless cart.
    pub const FRICTION_FREE: Self = Self([-70.711, -37.734, 105.528, 20.923]);

    /// Gain tuned for a friction coefficient of 0.1 N·s/m.
    pub const FRICTION_0_1: Self = Self([-70.711, -37.834, 105.530, 20.924]);

    #[must_use]
    pub const fn new(k: [f64; 4]) -> Self {
        Self(k)
    }

    /// Returns the tabulated gain whose friction is closest to `friction`.
    #[must_use]
    pub fn for_friction(friction: MassRate) -> Self {
        let b = friction.get::<kilogram_per_second>();
        if (b - 0.1).abs() < b.abs() {
            Self::FRICTION_0_1
        } else {
            Self::FRICTION_FREE
        }
    }

    #[must_use]
    pub const fn as_array(&self) -> [f64; 4] {
        self.0
    }

    /// Returns `K · state`.
    #[must_use]
    pub fn apply(&self, state: &State) -> f64 {
        self.0
            .iter()
            .zip(state.to_array())
            .map(|(k, s)| k * s)
            .sum()
    }
}

impl Default for ControlGain {
    fn default() -> Self {
        Self::FRICTION_FREE
    }
}

impl From<[f64; 4]> for ControlGain {
    fn from(k: [f64; 4]) -> Self {
        Self::new(k)
    }
}
