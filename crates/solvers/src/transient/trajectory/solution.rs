use std::slice;

use uom::si::{f64::Time, time::second};

/// Indicates how the simulation terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Produced every requested sample.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// A single point of a simulated trajectory.
///
/// `control` is the input that was applied over the step which produced
/// `state`. The initial sample has no preceding step and records zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<S> {
    pub time: Time,
    pub state: S,
    pub control: f64,
}

impl<S> Sample<S> {
    /// Creates the sample at time zero for an initial state.
    pub fn initial(state: S) -> Self {
        Self {
            time: Time::new::<second>(0.0),
            state,
            control: 0.0,
        }
    }

    /// Returns the sample time in seconds.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.time.get::<second>()
    }
}

/// The result of a trajectory simulation.
///
/// A trajectory always holds at least the initial sample, and sample times
/// are strictly increasing from zero.
#[derive(Debug, Clone)]
pub struct Trajectory<S> {
    status: Status,
    samples: Vec<Sample<S>>,
}

impl<S> Trajectory<S> {
    /// Builds a trajectory from samples recorded by the simulator.
    ///
    /// `samples` must be non-empty.
    pub(crate) fn new(status: Status, samples: Vec<Sample<S>>) -> Self {
        debug_assert!(!samples.is_empty(), "trajectory must contain the initial sample");
        Self { status, samples }
    }

    /// How the simulation terminated.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// All samples in time order.
    #[must_use]
    pub fn samples(&self) -> &[Sample<S>] {
        &self.samples
    }

    /// Number of samples, including the initial one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; every trajectory holds its initial sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The initial sample.
    #[must_use]
    pub fn first(&self) -> &Sample<S> {
        &self.samples[0]
    }

    /// The final sample.
    #[must_use]
    pub fn last(&self) -> &Sample<S> {
        &self.samples[self.samples.len() - 1]
    }

    pub fn iter(&self) -> slice::Iter<'_, Sample<S>> {
        self.samples.iter()
    }

    /// Consumes the trajectory and returns its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<Sample<S>> {
        self.samples
    }
}

impl<'a, S> IntoIterator for &'a Trajectory<S> {
    type Item = &'a Sample<S>;
    type IntoIter = slice::Iter<'a, Sample<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
