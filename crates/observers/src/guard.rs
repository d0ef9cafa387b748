use std::f64::consts::FRAC_PI_2;

use cartpole::State;
use cartpole_core::Observer;
use cartpole_solvers::transient::trajectory::Event;

use crate::traits::CanStopEarly;

/// Stops a simulation once the trajectory diverges.
///
/// A sample is considered divergent if any state component or the control
/// is non-finite, or if the pole angle magnitude exceeds `max_angle`
/// radians. The default bound is π/2, beyond which the linearization no
/// longer describes the pole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergenceGuard {
    max_angle: f64,
}

impl DivergenceGuard {
    /// Creates a guard with the given angle bound in radians.
    ///
    /// A non-finite bound only stops on non-finite samples.
    #[must_use]
    pub fn new(max_angle: f64) -> Self {
        Self {
            max_angle: max_angle.abs(),
        }
    }

    #[must_use]
    pub fn max_angle(&self) -> f64 {
        self.max_angle
    }

    /// Returns `true` if the state and control describe a diverged run.
    #[must_use]
    pub fn is_divergent(&self, state: &State, control: f64) -> bool {
        !state.is_finite() || !control.is_finite() || state.theta.abs() > self.max_angle
    }
}

impl Default for DivergenceGuard {
    fn default() -> Self {
        Self::new(FRAC_PI_2)
    }
}

impl<A: CanStopEarly> Observer<Event<State>, A> for DivergenceGuard {
    fn observe(&mut self, event: &Event<State>) -> Option<A> {
        let sample = &event.sample;
        if self.is_divergent(&sample.state, sample.control) {
            tracing::warn!(
                step = event.step,
                t = sample.seconds(),
                theta = sample.state.theta,
                u = sample.control,
                "trajectory diverged, stopping"
            );
            return Some(A::stop_early());
        }
        None
    }
}
