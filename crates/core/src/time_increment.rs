use std::{fmt, ops::Deref};

use thiserror::Error;
use uom::{
    Conversion,
    si::{f64::Time, time},
};

/// A unit-safe, strictly positive duration used to advance a simulation.
///
/// `TimeIncrement` wraps a [`Time`] and guarantees it is finite and greater
/// than zero, so steppers never have to handle a zero or negative `dt`.
///
/// ```
/// use cartpole_core::TimeIncrement;
/// use uom::si::time::millisecond;
///
/// let dt = TimeIncrement::new::<millisecond>(0.1).unwrap();
/// assert!((dt.seconds() - 1e-4).abs() < 1e-18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeIncrement(Time);

/// Error returned when constructing an invalid [`TimeIncrement`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeIncrementError {
    #[error("time increment must be greater than zero, got {0} s")]
    NotPositive(f64),

    #[error("time increment must be finite, got {0} s")]
    NotFinite(f64),
}

impl TimeIncrement {
    /// Constructs a `TimeIncrement` from a value in the unit `U`.
    ///
    /// # Errors
    ///
    /// Returns a [`TimeIncrementError`] if `value` is not finite or not
    /// strictly positive.
    pub fn new<U>(value: f64) -> Result<Self, TimeIncrementError>
    where
        U: time::Unit + Conversion<f64, T = f64>,
    {
        Self::from_time(Time::new::<U>(value))
    }

    /// Constructs a `TimeIncrement` from a value in seconds.
    ///
    /// # Errors
    ///
    /// Returns a [`TimeIncrementError`] if `seconds` is not finite or not
    /// strictly positive.
    pub fn from_seconds(seconds: f64) -> Result<Self, TimeIncrementError> {
        Self::new::<time::second>(seconds)
    }

    /// Constructs a `TimeIncrement` from an existing [`Time`].
    ///
    /// # Errors
    ///
    /// Returns a [`TimeIncrementError`] if the time is not finite or not
    /// strictly positive.
    pub fn from_time(time: Time) -> Result<Self, TimeIncrementError> {
        let seconds = time.get::<time::second>();
        if !seconds.is_finite() {
            Err(TimeIncrementError::NotFinite(seconds))
        } else if seconds > 0.0 {
            Ok(Self(time))
        } else {
            Err(TimeIncrementError::NotPositive(seconds))
        }
    }

    /// Returns the increment in seconds.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.0.get::<time::second>()
    }

    /// Consumes the increment and returns the underlying [`Time`].
    #[must_use]
    pub fn into_inner(self) -> Time {
        self.0
    }
}

impl TryFrom<Time> for TimeIncrement {
    type Error = TimeIncrementError;

    fn try_from(time: Time) -> Result<Self, Self::Error> {
        Self::from_time(time)
    }
}

impl Deref for TimeIncrement {
    type Target = Time;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for TimeIncrement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s", self.seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::{millisecond, second};

    #[test]
    fn converts_units_to_seconds() {
        let dt = TimeIncrement::new::<millisecond>(2.5).unwrap();
        assert_relative_eq!(dt.seconds(), 0.0025);
        assert_relative_eq!(dt.into_inner().get::<second>(), 0.0025);
    }

    #[test]
    fn seconds_round_trip_exactly() {
        let dt = TimeIncrement::from_seconds(1e-4).unwrap();
        assert_eq!(dt.seconds(), 1e-4);
    }

    #[test]
    fn zero_increment_fails() {
        assert_eq!(
            TimeIncrement::from_seconds(0.0),
            Err(TimeIncrementError::NotPositive(0.0))
        );
    }

    #[test]
    fn negative_increment_fails() {
        assert!(matches!(
            TimeIncrement::from_seconds(-0.1),
            Err(TimeIncrementError::NotPositive(_))
        ));
    }

    #[test]
    fn non_finite_increment_fails() {
        assert!(matches!(
            TimeIncrement::from_seconds(f64::INFINITY),
            Err(TimeIncrementError::NotFinite(_))
        ));
        assert!(matches!(
            TimeIncrement::from_seconds(f64::NAN),
            Err(TimeIncrementError::NotFinite(_))
        ));
    }

    #[test]
    fn try_from_time() {
        let dt = TimeIncrement::try_from(Time::new::<second>(0.01)).unwrap();
        assert_eq!(dt.to_string(), "0.01 s");
    }
}
