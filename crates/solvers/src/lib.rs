//! Simulators built on the `cartpole-core` traits.
//!
//! - [`transient::trajectory`] — fixed-step closed-loop trajectory simulation

pub mod transient;
