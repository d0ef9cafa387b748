//! Simulates a cart-pole under LQR feedback and prints the trajectory.
//!
//! # Usage
//!
//! ```text
//! cartpole > trajectory.txt
//! CARTPOLE_CONFIG=run.toml cartpole
//! RUST_LOG=debug cartpole
//! ```
//!
//! The report (`# t x theta u` followed by one line per sample) goes to
//! stdout and log output goes to stderr. Without `CARTPOLE_CONFIG` the
//! reference run is simulated; see [`config`] for the file format.

mod config;
mod run;

use std::{
    env,
    error::Error,
    io::{self, BufWriter},
};

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::RunConfig;

/// Environment variable naming a TOML run configuration.
const CONFIG_ENV: &str = "CARTPOLE_CONFIG";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match env::var_os(CONFIG_ENV) {
        Some(path) => {
            info!(path = %path.to_string_lossy(), "loading run configuration");
            RunConfig::load(path)?
        }
        None => RunConfig::default(),
    };
    let run = config.validate()?;

    let stdout = io::stdout();
    run::execute(&run, BufWriter::new(stdout.lock()))?;

    Ok(())
}
