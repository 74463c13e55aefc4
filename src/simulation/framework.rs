// src/simulation/framework.rs

use log::{debug, info};
use rayon::prelude::*;

use crate::config::scenario::{CylinderTarget, GridSpec};
use crate::math::error::DynamicsError;
use crate::models::air3d::{evaluate, Air3D, Costate, Evaluation, RelativeState};

/// 掃引結果の集計
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSummary {
    pub points: usize,
    pub control_at_min: usize,
    pub control_at_max: usize,
    pub disturbance_at_min: usize,
    pub disturbance_at_max: usize,
    pub max_abs_hamiltonian: f64,
}

/// 1軸分の格子座標
///
/// 周期軸では上端が下端と同一点になるため、上端を含めない。
fn axis_coordinates(min: f64, max: f64, points: usize, periodic: bool) -> Vec<f64> {
    if points == 1 {
        return vec![min];
    }
    let intervals = if periodic { points } else { points - 1 };
    let step = (max - min) / intervals as f64;
    (0..points).map(|k| min + k as f64 * step).collect()
}

/// グリッドの全格子点を [x, y, θ] の行優先順で生成する
pub fn grid_states(grid: &GridSpec) -> Result<Vec<RelativeState>, DynamicsError> {
    for dim in 0..3 {
        if grid.points[dim] == 0 {
            return Err(DynamicsError::InvalidConfiguration(format!(
                "軸 {} の格子点数が 0 です",
                dim
            )));
        }
        if !(grid.min[dim] <= grid.max[dim]) {
            return Err(DynamicsError::InvalidConfiguration(format!(
                "軸 {} の範囲が不正です: [{}, {}]",
                dim, grid.min[dim], grid.max[dim]
            )));
        }
    }
    if let Some(dim) = grid.periodic_dims.iter().find(|&&d| d >= 3) {
        return Err(DynamicsError::InvalidConfiguration(format!(
            "周期軸 {} は存在しません",
            dim
        )));
    }

    let axes: Vec<Vec<f64>> = (0..3)
        .map(|dim| {
            axis_coordinates(
                grid.min[dim],
                grid.max[dim],
                grid.points[dim],
                grid.periodic_dims.contains(&dim),
            )
        })
        .collect();

    let (ys, thetas) = (&axes[1], &axes[2]);
    let states: Vec<RelativeState> = axes[0]
        .iter()
        .flat_map(|&x| {
            ys.iter()
                .flat_map(move |&y| thetas.iter().map(move |&theta| [x, y, theta]))
        })
        .collect();
    debug!("格子点を {} 個生成しました", states.len());
    Ok(states)
}

/// 中心からの変位（ignore_dims の成分は 0）と距離
fn cylinder_offset(target: &CylinderTarget, state: &RelativeState) -> ([f64; 3], f64) {
    let mut diff = [0.0; 3];
    for dim in 0..3 {
        if !target.ignore_dims.contains(&dim) {
            diff[dim] = state[dim] - target.center[dim];
        }
    }
    let distance = (diff[0].powi(2) + diff[1].powi(2) + diff[2].powi(2)).sqrt();
    (diff, distance)
}

/// 円柱目標の符号付き距離（初期価値関数）。目標内部で負になる
pub fn cylinder_value(target: &CylinderTarget, state: &RelativeState) -> f64 {
    let (_, distance) = cylinder_offset(target, state);
    distance - target.radius
}

/// 円柱目標の符号付き距離関数の勾配
///
/// 中心上では勾配が定義されないため零ベクトルを返す。
pub fn cylinder_costate(target: &CylinderTarget, state: &RelativeState) -> Costate {
    let (diff, distance) = cylinder_offset(target, state);
    if distance == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    [diff[0] / distance, diff[1] / distance, diff[2] / distance]
}

/// 全格子点でハミルトニアンを並列評価する
///
/// # 引数
/// - `game`: 検証済みのゲーム設定（全スレッドで共有）
/// - `states`: 格子点の相対状態
/// - `costates`: 各格子点の共状態
///
/// # 戻り値
/// - 入力と同じ順序の評価結果。非有限な入力があれば `DomainError`
pub fn sweep(
    game: &Air3D,
    states: &[RelativeState],
    costates: &[Costate],
) -> Result<Vec<Evaluation>, DynamicsError> {
    if states.len() != costates.len() {
        return Err(DynamicsError::InvalidConfiguration(format!(
            "状態数 ({}) と共状態数 ({}) が一致しません",
            states.len(),
            costates.len()
        )));
    }
    info!("{} 点の掃引を開始します", states.len());
    let evaluations = states
        .par_iter()
        .zip(costates.par_iter())
        .map(|(state, costate)| evaluate(game, state, costate))
        .collect::<Result<Vec<_>, _>>()?;
    info!("掃引が完了しました");
    Ok(evaluations)
}

/// 評価結果の集計
pub fn summarize(game: &Air3D, evaluations: &[Evaluation]) -> SweepSummary {
    let (u_min, _) = game.control_bounds();
    let (d_min, _) = game.disturbance_bounds();
    evaluations.iter().fold(
        SweepSummary {
            points: 0,
            control_at_min: 0,
            control_at_max: 0,
            disturbance_at_min: 0,
            disturbance_at_max: 0,
            max_abs_hamiltonian: 0.0,
        },
        |mut summary, eval| {
            summary.points += 1;
            if eval.u_opt == u_min {
                summary.control_at_min += 1;
            } else {
                summary.control_at_max += 1;
            }
            if eval.d_opt == d_min {
                summary.disturbance_at_min += 1;
            } else {
                summary.disturbance_at_max += 1;
            }
            summary.max_abs_hamiltonian = summary.max_abs_hamiltonian.max(eval.hamiltonian.abs());
            summary
        },
    )
}
