use std::io::Write;

use cartpole::{LinearStepper, LqrController, NonlinearStepper, State, SwingUpController};
use cartpole_core::{Controller, Observer, Stepper};
use cartpole_observers::{DivergenceGuard, Report, ReportError, ReportObserver};
use cartpole_solvers::transient::trajectory::{self, Action, Event, Status};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{ControllerKind, Run, StepperKind};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// What a finished run produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub status: Status,
    pub samples: usize,
    pub final_state: State,
}

/// Simulates `run` and streams its report to `out`.
///
/// # Errors
///
/// Returns [`RunError::Report`] if the report cannot be written.
pub fn execute<W: Write>(run: &Run, out: W) -> Result<Summary, RunError> {
    let stepper = build_stepper(run);
    let controller = build_controller(run);

    let mut report = ReportObserver::new(out, Report::new().every(run.stride));
    let mut guard = run.max_angle.map(DivergenceGuard::new);

    info!(
        samples = run.samples.get(),
        dt = %run.time_step,
        stepper = ?run.stepper,
        controller = ?run.controller,
        "running simulation"
    );

    let trajectory = trajectory::simulate(
        run.initial_state,
        run.samples,
        run.time_step,
        &*stepper,
        &*controller,
        |event: &Event<State>| {
            let action: Option<Action> = report.observe(event);
            action.or_else(|| guard.as_mut().and_then(|guard| guard.observe(event)))
        },
    );

    report.finish()?;

    let summary = Summary {
        status: trajectory.status(),
        samples: trajectory.len(),
        final_state: trajectory.last().state,
    };

    match summary.status {
        Status::Complete => info!(
            samples = summary.samples,
            theta = summary.final_state.theta,
            x = summary.final_state.x,
            "simulation complete"
        ),
        Status::StoppedByObserver => warn!(
            samples = summary.samples,
            requested = run.samples.get(),
            "simulation stopped early"
        ),
    }

    Ok(summary)
}

fn build_stepper(run: &Run) -> Box<dyn Stepper<State>> {
    match run.stepper {
        StepperKind::Linear => Box::new(LinearStepper::new(&run.parameters)),
        StepperKind::Nonlinear => Box::new(NonlinearStepper::new(run.parameters)),
    }
}

fn build_controller(run: &Run) -> Box<dyn Controller<State>> {
    match run.controller {
        ControllerKind::Lqr => Box::new(LqrController::new(run.gain)),
        ControllerKind::SwingUp => Box::new(SwingUpController),
    }
}
