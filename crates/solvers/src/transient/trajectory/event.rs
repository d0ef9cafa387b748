use super::Sample;

/// Event emitted by the trajectory simulator for each recorded sample.
///
/// Step 0 carries the initial sample. Steps `1..N` are emitted after each
/// integration step, in order.
#[derive(Debug, Clone)]
pub struct Event<S> {
    /// Index of the sample within the trajectory.
    pub step: usize,

    /// The sample recorded at this step.
    pub sample: Sample<S>,
}
