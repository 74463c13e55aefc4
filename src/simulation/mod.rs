// src/simulation/mod.rs

pub mod csv;
pub mod framework;
pub mod load_parameters;

pub use framework::{
    cylinder_costate, cylinder_value, grid_states, summarize, sweep, SweepSummary,
};
