// src/config/mod.rs

pub mod parameters;
pub mod scenario;

pub use parameters::{GameParameters, Mode};
pub use scenario::{CylinderTarget, GridSpec, Scenario};
