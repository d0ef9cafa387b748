//! Run configuration.
//!
//! A run is described by a TOML document. Every key is optional and falls
//! back to the reference setup: default parameters, `theta = 0.1`, 100000
//! samples of 0.1 ms, the linear stepper, and LQR with the friction-free gain.
//!
//! ```toml
//! samples = 50000
//! time_step = 0.0002
//! stepper = "nonlinear"
//! gain = { custom = [-70.0, -37.0, 105.0, 21.0] }
//! stride = 100
//! stop_on_divergence = true
//!
//! [parameters]
//! friction = 0.1
//!
//! [initial_state]
//! theta = 0.05
//! ```
//!
//! Dimensioned parameters are given in SI base units.

use std::{fs, io, num::NonZeroUsize, path::Path};

use cartpole::{ControlGain, ParametersError, PhysicalParameters, State};
use cartpole_core::{TimeIncrement, TimeIncrementError};
use serde::Deserialize;
use thiserror::Error;

/// The initial pole angle of the reference run, in radians.
pub const DEFAULT_THETA: f64 = 0.1;

/// Errors returned while loading or validating a [`RunConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("samples must be at least 1")]
    NoSamples,

    #[error("stride must be at least 1")]
    NoStride,

    #[error("invalid time_step: {0}")]
    TimeStep(#[from] TimeIncrementError),

    #[error("invalid parameters: {0}")]
    Parameters(#[from] ParametersError),

    #[error("initial state must be finite, got {0:?}")]
    InitialState(State),
}

/// Which dynamics model advances the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepperKind {
    #[default]
    Linear,
    Nonlinear,
}

/// Which feedback law computes the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerKind {
    #[default]
    Lqr,
    SwingUp,
}

/// The LQR gain to use.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GainChoice {
    #[default]
    FrictionFree,
    #[serde(rename = "friction_0_1")]
    Friction01,
    /// The tabulated gain closest to the configured friction.
    Matched,
    Custom([f64; 4]),
}

impl GainChoice {
    /// Resolves the choice into a gain for the given parameters.
    #[must_use]
    pub fn resolve(self, parameters: &PhysicalParameters) -> ControlGain {
        match self {
            Self::FrictionFree => ControlGain::FRICTION_FREE,
            Self::Friction01 => ControlGain::FRICTION_0_1,
            Self::Matched => ControlGain::for_friction(parameters.friction),
            Self::Custom(k) => ControlGain::new(k),
        }
    }
}

/// A run as written in a config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub parameters: PhysicalParameters,
    pub initial_state: State,
    pub samples: usize,
    /// Step size in seconds.
    pub time_step: f64,
    pub stepper: StepperKind,
    pub controller: ControllerKind,
    pub gain: GainChoice,
    /// Report every `stride`-th sample.
    pub stride: usize,
    pub stop_on_divergence: bool,
    /// Pole angle bound in radians used when `stop_on_divergence` is set.
    pub max_angle: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            parameters: PhysicalParameters::default(),
            initial_state: State::new(0.0, 0.0, DEFAULT_THETA, 0.0),
            samples: 100_000,
            time_step: 1e-4,
            stepper: StepperKind::default(),
            controller: ControllerKind::default(),
            gain: GainChoice::default(),
            stride: 1,
            stop_on_divergence: false,
            max_angle: std::f64::consts::FRAC_PI_2,
        }
    }
}

/// A validated [`RunConfig`], ready to simulate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Run {
    pub parameters: PhysicalParameters,
    pub initial_state: State,
    pub samples: NonZeroUsize,
    pub time_step: TimeIncrement,
    pub stepper: StepperKind,
    pub controller: ControllerKind,
    pub gain: ControlGain,
    pub stride: NonZeroUsize,
    pub max_angle: Option<f64>,
}

impl RunConfig {
    /// Parses a config from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys, or
    /// values of the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Checks the config and converts it into a [`Run`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the sample count or stride is zero, the
    /// time step is not finite and positive, the parameters are not
    /// physically sensible, or the initial state is not finite.
    pub fn validate(&self) -> Result<Run, ConfigError> {
        let samples = NonZeroUsize::new(self.samples).ok_or(ConfigError::NoSamples)?;
        let stride = NonZeroUsize::new(self.stride).ok_or(ConfigError::NoStride)?;
        let time_step = TimeIncrement::from_seconds(self.time_step)?;
        self.parameters.validate()?;
        if !self.initial_state.is_finite() {
            return Err(ConfigError::InitialState(self.initial_state));
        }

        Ok(Run {
            parameters: self.parameters,
            initial_state: self.initial_state,
            samples,
            time_step,
            stepper: self.stepper,
            controller: self.controller,
            gain: self.gain.resolve(&self.parameters),
            stride,
            max_angle: self.stop_on_divergence.then_some(self.max_angle),
        })
    }
}
