// src/math/mod.rs

pub mod error;
pub mod finite;

pub use error::DynamicsError;
pub use finite::ensure_finite;
