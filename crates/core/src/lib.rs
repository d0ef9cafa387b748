//! Core traits and types for cart-pole simulation.
//!
//! This crate defines the abstractions that the dynamics, simulator, and
//! observers build on:
//!
//! - [`Stepper`] — advances a state by one time step under a control input
//! - [`Controller`] — maps a state to a scalar control input
//! - [`Observer`] — receives simulator events and optionally returns actions
//! - [`StepIntegrable`] — steps a state forward using its derivative
//! - [`TimeIncrement`] — a strictly positive simulation time step

mod controller;
mod observer;
mod step;
mod stepper;
mod time_increment;

pub use controller::Controller;
pub use observer::Observer;
pub use step::{DerivativeOf, StepIntegrable};
pub use stepper::Stepper;
pub use time_increment::{TimeIncrement, TimeIncrementError};
