use cartpole_core::{StepIntegrable, Stepper, TimeIncrement};

use crate::{PhysicalParameters, State, StateDerivative};

/// Steps the full nonlinear cart-pole equations of motion.
///
/// The accelerations are
///
/// ```text
/// k      = 1 / (m_c + m_p·sin²θ)
/// x_dd   = k · (u + m_p·sinθ·(l·θ_d² + g·cosθ))
/// θ_dd   = (k / l) · (−u·cosθ − m_p·l·θ_d²·cosθ·sinθ − (m_c + m_p)·g·sinθ)
/// ```
///
/// These treat the pole as a point mass, so the moment of inertia and the
/// friction coefficient do not enter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonlinearStepper {
    params: PhysicalParameters,
}

impl NonlinearStepper {
    #[must_use]
    pub fn new(params: PhysicalParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &PhysicalParameters {
        &self.params
    }

    /// Returns the state derivative for `state` under `control`.
    #[must_use]
    pub fn derivative(&self, state: &State, control: f64) -> StateDerivative {
        let si = self.params.si();
        let (m_c, m_p, l, g) = (si.m_c, si.m_p, si.l, si.g);
        let u = control;

        let (sin_theta, cos_theta) = state.theta.sin_cos();

        let common = 1.0 / (m_c + m_p * sin_theta * sin_theta);
        let l_theta_dot_sq = l * state.theta_dot * state.theta_dot;

        let x_dot_dot = common * (u + m_p * sin_theta * (l_theta_dot_sq + g * cos_theta));

        let coupling = -u * cos_theta - m_p * l_theta_dot_sq * cos_theta * sin_theta;
        let gravity = -((m_c + m_p) * g * sin_theta);
        let theta_dot_dot = (common / l) * (coupling + gravity);

        StateDerivative {
            x_dot: state.x_dot,
            x_dot_dot,
            theta_dot: state.theta_dot,
            theta_dot_dot,
        }
    }
}

impl Default for NonlinearStepper {
    fn default() -> Self {
        Self::new(PhysicalParameters::default())
    }
}

impl Stepper<State> for NonlinearStepper {
    fn step(&self, state: &State, dt: TimeIncrement, control: f64) -> State {
        state.step(self.derivative(state, control), dt)
    }
}
