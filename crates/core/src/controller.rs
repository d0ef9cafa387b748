/// Computes the control input for a state.
///
/// A `Controller` is the feedback half of a closed-loop simulation. It is
/// queried once per step with the pre-step state, and the returned scalar is
/// handed to the [`Stepper`](crate::Stepper) for that step.
///
/// Any closure or function with the signature `Fn(&S) -> f64` is a
/// `Controller`.
pub trait Controller<S> {
    /// Returns the control input for `state`.
    fn control(&self, state: &S) -> f64;
}

impl<S, F> Controller<S> for F
where
    F: Fn(&S) -> f64,
{
    fn control(&self, state: &S) -> f64 {
        self(state)
    }
}
