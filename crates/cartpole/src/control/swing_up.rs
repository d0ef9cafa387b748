use cartpole_core::Controller;

use crate::State;

/// Swing-up controller placeholder.
///
/// Energy-based swing-up is not implemented; this controller always applies
/// zero force, which leaves the cart-pole to its open-loop dynamics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwingUpController;

impl Controller<State> for SwingUpController {
    fn control(&self, _state: &State) -> f64 {
        0.0
    }
}
