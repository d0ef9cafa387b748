use cartpole_core::{StepIntegrable, TimeIncrement};

/// The state of a cart-pole.
///
/// `theta` is the pole angle in radians, with zero meaning upright.
/// Positions are in meters and velocities in SI units per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct State {
    pub x: f64,
    pub x_dot: f64,
    pub theta: f64,
    pub theta_dot: f64,
}

/// Time derivative of a [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateDerivative {
    pub x_dot: f64,
    pub x_dot_dot: f64,
    pub theta_dot: f64,
    pub theta_dot_dot: f64,
}

impl State {
    #[must_use]
    pub const fn new(x: f64, x_dot: f64, theta: f64, theta_dot: f64) -> Self {
        Self {
            x,
            x_dot,
            theta,
            theta_dot,
        }
    }

    /// Returns the state as `[x, x_dot, theta, theta_dot]`.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.x, self.x_dot, self.theta, self.theta_dot]
    }

    /// Builds a state from `[x, x_dot, theta, theta_dot]`.
    #[must_use]
    pub const fn from_array([x, x_dot, theta, theta_dot]: [f64; 4]) -> Self {
        Self::new(x, x_dot, theta, theta_dot)
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

impl From<[f64; 4]> for State {
    fn from(values: [f64; 4]) -> Self {
        Self::from_array(values)
    }
}

impl StateDerivative {
    /// Builds a derivative from `[x_dot, x_dot_dot, theta_dot, theta_dot_dot]`.
    #[must_use]
    pub const fn from_array([x_dot, x_dot_dot, theta_dot, theta_dot_dot]: [f64; 4]) -> Self {
        Self {
            x_dot,
            x_dot_dot,
            theta_dot,
            theta_dot_dot,
        }
    }

    #[must_use]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.x_dot, self.x_dot_dot, self.theta_dot, self.theta_dot_dot]
    }
}

/// Explicit Euler: every component moves by its pre-step derivative.
impl StepIntegrable<TimeIncrement> for State {
    type Derivative = StateDerivative;

    fn step(&self, derivative: StateDerivative, dt: TimeIncrement) -> Self {
        let dt = dt.seconds();
        Self {
            x: self.x + derivative.x_dot * dt,
            x_dot: self.x_dot + derivative.x_dot_dot * dt,
            theta: self.theta + derivative.theta_dot * dt,
            theta_dot: self.theta_dot + derivative.theta_dot_dot * dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn array_layout_is_position_velocity_angle_rate() {
        let state = State::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(state.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(State::from([1.0, 2.0, 3.0, 4.0]), state);
    }

    #[test]
    fn step_applies_derivative_times_dt() {
        let state = State::new(0.0, 1.0, 0.1, -0.5);
        let derivative = StateDerivative::from_array([1.0, 2.0, -0.5, 10.0]);
        let dt = TimeIncrement::from_seconds(0.1).unwrap();

        let next = state.step(derivative, dt);

        assert_relative_eq!(next.x, 0.1);
        assert_relative_eq!(next.x_dot, 1.2);
        assert_relative_eq!(next.theta, 0.05);
        assert_relative_eq!(next.theta_dot, 0.5);
    }

    #[test]
    fn non_finite_components_are_detected() {
        assert!(State::new(0.0, 0.0, 0.1, 0.0).is_finite());
        assert!(!State::new(0.0, f64::NAN, 0.0, 0.0).is_finite());
        assert!(!State::new(0.0, 0.0, 0.0, f64::NEG_INFINITY).is_finite());
    }
}
