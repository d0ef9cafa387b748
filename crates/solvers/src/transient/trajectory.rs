//! Fixed-step closed-loop trajectory simulation.
//!
//! Starting from an initial state, the simulator alternates a
//! [`Controller`] query and a [`Stepper`] update:
//!
//! ```text
//! u_i       = controller(state_{i-1})
//! state_i   = stepper(state_{i-1}, dt, u_i)
//! sample_i  = (i * dt, state_i, u_i)
//! ```
//!
//! Sample 0 is `(0, initial, 0)`; the controller is not queried for it.
//!
//! # Example
//!
//! ```ignore
//! use cartpole_solvers::transient::trajectory;
//!
//! let trajectory = trajectory::simulate_unobserved(initial, samples, dt, &stepper, &controller);
//!
//! for sample in &trajectory {
//!     println!("t={:?}: {:?} u={}", sample.time, sample.state, sample.control);
//! }
//! ```

mod action;
mod event;
mod solution;

pub use action::Action;
pub use event::Event;
pub use solution::{Sample, Status, Trajectory};

use std::num::NonZeroUsize;

use cartpole_core::{Controller, Observer, Stepper, TimeIncrement};
use tracing::debug;

/// Simulates a closed-loop trajectory of `samples` points spaced `dt` apart.
///
/// # Algorithm
///
/// 1. Record the initial sample `(0, initial, 0)` and emit it as step 0.
/// 2. For each step `i` in `1..samples`:
///    - Query the controller with the current state.
///    - Advance the state with the stepper over `dt`.
///    - Record `(i * dt, next_state, u)` and emit it to the observer.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 3. Return the trajectory with its [`Status`].
///
/// Non-finite states or controls are recorded as-is; use an observer to
/// detect divergence if needed.
pub fn simulate<S, St, C, Obs>(
    initial: S,
    samples: NonZeroUsize,
    dt: TimeIncrement,
    stepper: &St,
    controller: &C,
    mut observer: Obs,
) -> Trajectory<S>
where
    S: Clone,
    St: Stepper<S> + ?Sized,
    C: Controller<S> + ?Sized,
    Obs: Observer<Event<S>, Action>,
{
    let count = samples.get();
    debug!(samples = count, %dt, "starting trajectory simulation");

    let mut history = Vec::with_capacity(count);
    let first = Sample::initial(initial);
    history.push(first.clone());

    let event = Event {
        step: 0,
        sample: first,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return finish(Status::StoppedByObserver, history);
    }

    let mut state = event.sample.state;

    for step in 1..count {
        let control = controller.control(&state);
        let next = stepper.step(&state, dt, control);

        #[allow(clippy::cast_precision_loss)]
        let time = dt.into_inner() * step as f64;
        let sample = Sample {
            time,
            state: next,
            control,
        };
        history.push(sample.clone());

        let event = Event { step, sample };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(Status::StoppedByObserver, history);
        }

        state = event.sample.state;
    }

    finish(Status::Complete, history)
}

/// Simulates a closed-loop trajectory without observation.
///
/// Always returns exactly `samples` samples. This is a convenience wrapper
/// around [`simulate`] that discards events.
pub fn simulate_unobserved<S, St, C>(
    initial: S,
    samples: NonZeroUsize,
    dt: TimeIncrement,
    stepper: &St,
    controller: &C,
) -> Trajectory<S>
where
    S: Clone,
    St: Stepper<S> + ?Sized,
    C: Controller<S> + ?Sized,
{
    simulate(initial, samples, dt, stepper, controller, ())
}

fn finish<S>(status: Status, history: Vec<Sample<S>>) -> Trajectory<S> {
    debug!(samples = history.len(), ?status, "trajectory simulation finished");
    Trajectory::new(status, history)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;

    // --- Test fixtures ---

    /// Scalar plant `x' = u`.
    fn integrate(x: &f64, dt: TimeIncrement, u: f64) -> f64 {
        x + u * dt.seconds()
    }

    /// Proportional feedback toward zero.
    fn damp(x: &f64) -> f64 {
        -x
    }

    fn samples(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn dt(seconds: f64) -> TimeIncrement {
        TimeIncrement::from_seconds(seconds).unwrap()
    }

    // --- Tests ---

    #[test]
    fn produces_exactly_the_requested_sample_count() {
        for n in [1, 2, 10, 257] {
            let trajectory = simulate_unobserved(1.0, samples(n), dt(0.1), &integrate, &damp);
            assert_eq!(trajectory.len(), n);
            assert_eq!(trajectory.status(), Status::Complete);
        }
    }

    #[test]
    fn sample_times_are_multiples_of_dt() {
        let h = 1e-4;
        let trajectory = simulate_unobserved(0.5, samples(1000), dt(h), &integrate, &damp);

        for (i, sample) in trajectory.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = i as f64 * h;
            assert_relative_eq!(sample.seconds(), expected, epsilon = 1e-15);
        }
        assert!(
            trajectory
                .samples()
                .windows(2)
                .all(|pair| pair[1].seconds() > pair[0].seconds())
        );
    }

    #[test]
    fn initial_sample_records_zero_control_without_querying_controller() {
        let calls = Cell::new(0_usize);
        let counting = |x: &f64| {
            calls.set(calls.get() + 1);
            5.0 - x
        };

        let trajectory = simulate_unobserved(2.0, samples(1), dt(0.1), &integrate, &counting);

        assert_eq!(trajectory.len(), 1);
        let first = trajectory.first();
        assert_eq!(first.seconds(), 0.0);
        assert_eq!(first.state, 2.0);
        assert_eq!(first.control, 0.0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn each_sample_records_the_control_that_produced_it() {
        let trajectory = simulate_unobserved(1.0, samples(3), dt(0.5), &integrate, &damp);
        let s = trajectory.samples();

        // u1 = -1.0, x1 = 1.0 - 0.5 = 0.5
        assert_relative_eq!(s[1].control, -1.0);
        assert_relative_eq!(s[1].state, 0.5);
        // u2 = -0.5, x2 = 0.5 - 0.25 = 0.25
        assert_relative_eq!(s[2].control, -0.5);
        assert_relative_eq!(s[2].state, 0.25);
        assert_relative_eq!(trajectory.last().seconds(), 1.0);
    }

    #[test]
    fn non_finite_values_propagate_unchecked() {
        let explode = |_: &f64| f64::INFINITY;
        let trajectory = simulate_unobserved(0.0, samples(4), dt(0.1), &integrate, &explode);

        assert_eq!(trajectory.status(), Status::Complete);
        assert_eq!(trajectory.len(), 4);
        assert!(trajectory.last().state.is_infinite());
    }

    #[test]
    fn observer_can_stop_early() {
        let observer = |event: &Event<f64>| (event.step >= 5).then_some(Action::StopEarly);

        let trajectory = simulate(1.0, samples(100), dt(0.1), &integrate, &damp, observer);

        assert_eq!(trajectory.status(), Status::StoppedByObserver);
        assert_eq!(trajectory.len(), 6); // initial + 5 steps
    }

    #[test]
    fn observer_sees_steps_in_order_starting_at_zero() {
        let mut steps = Vec::new();
        simulate(
            0.0,
            samples(5),
            dt(0.25),
            &integrate,
            &damp,
            |event: &Event<f64>| {
                steps.push(event.step);
                None
            },
        );

        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn independent_runs_do_not_share_state() {
        let a = simulate_unobserved(1.0, samples(50), dt(0.01), &integrate, &damp);
        let b = simulate_unobserved(1.0, samples(50), dt(0.01), &integrate, &damp);

        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    fn accepts_trait_objects() {
        let stepper: Box<dyn Stepper<f64>> = Box::new(integrate);
        let controller: Box<dyn Controller<f64>> = Box::new(damp);

        let trajectory = simulate_unobserved(1.0, samples(3), dt(0.5), &*stepper, &*controller);

        assert_relative_eq!(trajectory.last().state, 0.25);
    }
}
