// src/lib.rs

//! Air3D 追跡・回避ゲームのハミルトニアン極値計算
//!
//! HJI 到達可能性解析のソルバが格子点ごとに呼び出す純粋関数群。
//! 典型的な呼び出し順は `optimal_control` → `optimal_disturbance` → `dynamics`。

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;

pub use config::{GameParameters, Mode, Scenario};
pub use math::DynamicsError;
pub use models::{
    dynamics, evaluate, hamiltonian, optimal_control, optimal_disturbance, switching_value, Air3D,
    Costate, Evaluation, RelativeState,
};
