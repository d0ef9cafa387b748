//! Explicit-Euler steppers for cart-pole dynamics.
//!
//! Both steppers implement [`Stepper<State>`](cartpole_core::Stepper) and
//! advance the state with
//!
//! ```text
//! state_{n+1} = state_n + derivative(state_n, u_n) * dt
//! ```
//!
//! using only the pre-step derivative for all four components. They differ in
//! how the derivative is computed:
//!
//! - [`LinearStepper`] — from the [`LinearModel`](crate::LinearModel)
//!   matrices, valid near the upright equilibrium.
//! - [`NonlinearStepper`] — from the full nonlinear equations of motion.
//!
//! The two are interchangeable wherever a `Stepper<State>` is expected.

mod linear;
mod nonlinear;

pub use linear::LinearStepper;
pub use nonlinear::NonlinearStepper;
