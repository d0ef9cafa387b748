//! Reusable observers and reporting for cart-pole trajectories.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for simulator-agnostic observers
//!   ([`CanStopEarly`])
//! - [`report`] — The `# t x theta u` text report, written from a finished
//!   [`Trajectory`] or streamed by [`ReportObserver`]
//! - [`guard`] — [`DivergenceGuard`], which stops a run once it blows up
//!
//! [`Trajectory`]: cartpole_solvers::transient::trajectory::Trajectory
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod guard;
pub mod report;
pub mod traits;

pub use guard::DivergenceGuard;
pub use report::{Report, ReportError, ReportObserver};
