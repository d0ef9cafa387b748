//! Cart-pole dynamics and feedback control.
//!
//! The crate models an inverted pendulum on a cart:
//!
//! - [`PhysicalParameters`] — masses, pole length, inertia, friction, gravity
//! - [`State`] — cart position and velocity, pole angle and angular velocity
//! - [`LinearModel`] — the `A`, `B`, `C`, `D` matrices of the state-space
//!   model linearized about the upright equilibrium
//! - [`dynamics`] — linear and nonlinear explicit-Euler steppers
//! - [`control`] — fixed-gain LQR feedback and a swing-up placeholder
//!
//! Steppers and controllers implement [`cartpole_core::Stepper`] and
//! [`cartpole_core::Controller`], so they plug into any simulator built on
//! those traits.
//!
//! # Features
//!
//! - `serde` — derives `Serialize`/`Deserialize` for parameters, states, and
//!   gains. Dimensioned quantities are (de)serialized in SI base units.

pub mod control;
pub mod dynamics;

mod linear;
mod params;
mod state;

pub use control::{ControlGain, LqrController, SwingUpController};
pub use dynamics::{LinearStepper, NonlinearStepper};
pub use linear::LinearModel;
pub use params::{ParametersError, PhysicalParameters};
pub use state::{State, StateDerivative};
