//! Plain-text trajectory reports.
//!
//! The report starts with the header line `# t x theta u`, followed by one
//! space-separated line per sample: time in seconds, cart position, pole
//! angle, and the applied control.
//!
//! Use [`Report`] for a finished [`Trajectory`], or [`ReportObserver`] to
//! write samples as the simulator produces them.

use std::{
    io::{self, Write},
    num::NonZeroUsize,
};

use cartpole::State;
use cartpole_core::Observer;
use cartpole_solvers::transient::trajectory::{Event, Sample, Trajectory};
use thiserror::Error;

use crate::traits::CanStopEarly;

/// The header line written before any samples.
pub const HEADER: &str = "# t x theta u";

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Writes a finished trajectory as text.
///
/// By default every sample is written. [`Report::every`] keeps only every
/// `n`-th sample (always including the first), which is useful for long runs
/// with a small time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    stride: NonZeroUsize,
}

impl Report {
    /// Creates a report that writes every sample.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stride: NonZeroUsize::MIN,
        }
    }

    /// Writes only every `stride`-th sample.
    #[must_use]
    pub fn every(mut self, stride: NonZeroUsize) -> Self {
        self.stride = stride;
        self
    }

    #[must_use]
    pub fn stride(&self) -> NonZeroUsize {
        self.stride
    }

    /// Writes the header and the selected samples of `trajectory` to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if writing fails.
    pub fn write<W: Write>(
        &self,
        trajectory: &Trajectory<State>,
        mut out: W,
    ) -> Result<(), ReportError> {
        writeln!(out, "{HEADER}")?;
        for sample in trajectory.iter().step_by(self.stride.get()) {
            write_row(&mut out, sample)?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

/// An observer that streams report lines as samples are produced.
///
/// The header is written before the first sample. If a write fails, the
/// observer stops the simulation and the error is returned by
/// [`ReportObserver::finish`].
#[derive(Debug)]
pub struct ReportObserver<W: Write> {
    out: W,
    report: Report,
    header_written: bool,
    error: Option<io::Error>,
}

impl<W: Write> ReportObserver<W> {
    pub fn new(out: W, report: Report) -> Self {
        Self {
            out,
            report,
            header_written: false,
            error: None,
        }
    }

    /// Flushes the writer and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first write error encountered while observing, or the
    /// flush error.
    pub fn finish(mut self) -> Result<W, ReportError> {
        if let Some(err) = self.error.take() {
            return Err(err.into());
        }
        if !self.header_written {
            writeln!(self.out, "{HEADER}")?;
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn record(&mut self, step: usize, sample: &Sample<State>) -> io::Result<()> {
        if !self.header_written {
            writeln!(self.out, "{HEADER}")?;
            self.header_written = true;
        }
        if step % self.report.stride.get() == 0 {
            write_row(&mut self.out, sample)?;
        }
        Ok(())
    }
}

impl<W: Write, A: CanStopEarly> Observer<Event<State>, A> for ReportObserver<W> {
    fn observe(&mut self, event: &Event<State>) -> Option<A> {
        if self.error.is_some() {
            return Some(A::stop_early());
        }
        match self.record(event.step, &event.sample) {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(step = event.step, %err, "report write failed, stopping");
                self.error = Some(err);
                Some(A::stop_early())
            }
        }
    }
}

/// Allows `&mut ReportObserver` to be passed to simulators that take an
/// observer by value, so [`ReportObserver::finish`] can be called afterwards.
impl<W: Write, A: CanStopEarly> Observer<Event<State>, A> for &mut ReportObserver<W> {
    fn observe(&mut self, event: &Event<State>) -> Option<A> {
        (**self).observe(event)
    }
}

fn write_row<W: Write>(out: &mut W, sample: &Sample<State>) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {} {}",
        sample.seconds(),
        sample.state.x,
        sample.state.theta,
        sample.control
    )
}
