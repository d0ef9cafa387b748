use cartpole_core::Controller;

use crate::{ControlGain, State};

/// Fixed-gain linear quadratic regulator.
///
/// Computes `u = K · state` for a precomputed gain `K`. The gain is not
/// derived from the plant at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LqrController {
    gain: ControlGain,
}

impl LqrController {
    #[must_use]
    pub const fn new(gain: ControlGain) -> Self {
        Self { gain }
    }

    #[must_use]
    pub const fn gain(&self) -> ControlGain {
        self.gain
    }
}

impl Controller<State> for LqrController {
    fn control(&self, state: &State) -> f64 {
        self.gain.apply(state)
    }
}
