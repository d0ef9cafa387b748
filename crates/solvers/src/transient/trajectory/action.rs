/// Control actions supported by the trajectory simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the simulation and return the samples produced so far.
    StopEarly,
}
