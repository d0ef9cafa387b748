use crate::TimeIncrement;

/// Advances a dynamic state by one fixed time step.
///
/// A `Stepper` is the dynamics half of a closed-loop simulation: given the
/// current state, a step size, and the control input chosen for this step, it
/// returns the state at the end of the step. Implementations must be pure so
/// that independent runs never share hidden state.
///
/// Any closure or function with the signature
/// `Fn(&S, TimeIncrement, f64) -> S` is a `Stepper`.
pub trait Stepper<S> {
    /// Returns the state after advancing `state` by `dt` under `control`.
    #[must_use]
    fn step(&self, state: &S, dt: TimeIncrement, control: f64) -> S;
}

impl<S, F> Stepper<S> for F
where
    F: Fn(&S, TimeIncrement, f64) -> S,
{
    fn step(&self, state: &S, dt: TimeIncrement, control: f64) -> S {
        self(state, dt, control)
    }
}
