//! Sensitivity sweeps
//!
//! Hold every contract input fixed except one, step that one across a linearly
//! spaced grid and price the contract at each step.

pub mod config;
pub mod pipeline;
pub mod types;

pub use config::SweepConfig;
pub use pipeline::{linspace, run_sweep, run_sweep_with, sweep_iter};
pub use types::{SweepParameter, SweepPoint, SweepResult};
