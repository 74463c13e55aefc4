// src/models/mod.rs

pub mod air3d;

pub use air3d::{
    dynamics, evaluate, hamiltonian, optimal_control, optimal_disturbance, switching_value, Air3D,
    Costate, Evaluation, RelativeState,
};
