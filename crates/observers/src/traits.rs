//! Capability traits for simulator-agnostic observers.
//!
//! These traits abstract over simulator-specific action types, so an observer
//! can be written once and used with any simulator whose actions support the
//! capability.
//!
//! # Example
//!
//! ```rust
//! use cartpole_core::Observer;
//! use cartpole_observers::traits::CanStopEarly;
//!
//! struct StopAfter {
//!     remaining: usize,
//! }
//!
//! impl<E, A: CanStopEarly> Observer<E, A> for StopAfter {
//!     fn observe(&mut self, _event: &E) -> Option<A> {
//!         if self.remaining == 0 {
//!             return Some(A::stop_early());
//!         }
//!         self.remaining -= 1;
//!         None
//!     }
//! }
//! ```

use cartpole_solvers::transient::trajectory;

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the simulator early.
    fn stop_early() -> Self;
}

impl CanStopEarly for trajectory::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
