//! Feedback controllers for the cart-pole.
//!
//! - [`LqrController`] — `u = K · state` with a fixed [`ControlGain`]
//! - [`SwingUpController`] — placeholder that applies no force

mod gain;
mod lqr;
mod swing_up;

pub use gain::ControlGain;
pub use lqr::LqrController;
pub use swing_up::SwingUpController;
