use cartpole_core::{StepIntegrable, Stepper, TimeIncrement};

use crate::{LinearModel, PhysicalParameters, State, StateDerivative};

/// Steps the linearized cart-pole model.
///
/// The stepper owns a [`LinearModel`] built once at construction; each step
/// evaluates `A · state − B · u` and applies it over `dt`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearStepper {
    model: LinearModel,
}

impl LinearStepper {
    /// Linearizes `params` and returns a stepper for the resulting model.
    #[must_use]
    pub fn new(params: &PhysicalParameters) -> Self {
        Self::from_model(LinearModel::new(params))
    }

    /// Wraps an already-built model.
    #[must_use]
    pub fn from_model(model: LinearModel) -> Self {
        Self { model }
    }

    #[must_use]
    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    /// Returns the state derivative for `state` under `control`.
    #[must_use]
    pub fn derivative(&self, state: &State, control: f64) -> StateDerivative {
        self.model.derivative(state, control)
    }
}

impl Stepper<State> for LinearStepper {
    fn step(&self, state: &State, dt: TimeIncrement, control: f64) -> State {
        state.step(self.derivative(state, control), dt)
    }
}
