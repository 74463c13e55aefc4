// src/models/air3d.rs

use log::debug;

use crate::config::parameters::{GameParameters, Mode};
use crate::math::error::DynamicsError;
use crate::math::finite::ensure_finite;

/// 相対状態 [x, y, θ]（相手機から見た自機の位置と相対方位）
pub type RelativeState = [f64; 3];

/// 共状態 [p_x, p_y, p_θ]（価値関数の空間勾配）
pub type Costate = [f64; 3];

/// 検証済みの Air3D 追跡・回避ゲーム
///
/// 生成後は変更されないため、任意個のスレッドから同時に参照できる。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Air3D {
    plane_speed: f64,
    u_bounds: (f64, f64),
    d_bounds: (f64, f64),
    u_mode: Mode,
    d_mode: Mode,
}

impl Air3D {
    /// パラメータを検証して生成する
    ///
    /// # 引数
    /// - `params`: ユーザパラメータ
    ///
    /// # 戻り値
    /// - 役割が同一、上下限が逆転、または値が非有限なら `DynamicsError::InvalidConfiguration`
    pub fn new(params: &GameParameters) -> Result<Air3D, DynamicsError> {
        if params.u_mode == params.d_mode {
            return Err(DynamicsError::InvalidConfiguration(format!(
                "u_mode と d_mode は逆の役割でなければなりません (u_mode={:?}, d_mode={:?})",
                params.u_mode, params.d_mode
            )));
        }
        let values = [
            ("plane_speed", params.plane_speed),
            ("u_min", params.u_min),
            ("u_max", params.u_max),
            ("d_min", params.d_min),
            ("d_max", params.d_max),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(DynamicsError::InvalidConfiguration(format!(
                "{} が有限ではありません: {}",
                name, value
            )));
        }
        if params.u_min > params.u_max {
            return Err(DynamicsError::InvalidConfiguration(format!(
                "u_min ({}) が u_max ({}) を超えています",
                params.u_min, params.u_max
            )));
        }
        if params.d_min > params.d_max {
            return Err(DynamicsError::InvalidConfiguration(format!(
                "d_min ({}) が d_max ({}) を超えています",
                params.d_min, params.d_max
            )));
        }

        let game = Air3D {
            plane_speed: params.plane_speed,
            u_bounds: (params.u_min, params.u_max),
            d_bounds: (params.d_min, params.d_max),
            u_mode: params.u_mode,
            d_mode: params.d_mode,
        };
        debug!("Air3D を生成しました: {:?}", game);
        Ok(game)
    }

    pub fn plane_speed(&self) -> f64 {
        self.plane_speed
    }

    /// (u_min, u_max)
    pub fn control_bounds(&self) -> (f64, f64) {
        self.u_bounds
    }

    /// (d_min, d_max)
    pub fn disturbance_bounds(&self) -> (f64, f64) {
        self.d_bounds
    }

    pub fn u_mode(&self) -> Mode {
        self.u_mode
    }

    pub fn d_mode(&self) -> Mode {
        self.d_mode
    }
}

/// 制御の切替関数 `det = p_x*y - p_y*x - p_θ`
pub fn switching_value(state: &RelativeState, costate: &Costate) -> f64 {
    costate[0] * state[1] - costate[1] * state[0] - costate[2]
}

/// 最適制御（自機旋回率）を求める純粋関数
///
/// 制御はハミルトニアンに `u * det` の形でのみ現れる（[`switching_value`]）。
/// `det == 0`（`-0.0` を含む）のときは `det >= 0` 側の上下限を選ぶ。
///
/// 有限な入力でも積がオーバーフローすると `det` は NaN になり、`det < 0` 側の上下限が返る。
/// この場合の結果は意味をもたないため、検査付きの [`evaluate`] を使うこと。
///
/// # 引数
/// - `game`: 検証済みのゲーム設定
/// - `state`: 相対状態
/// - `costate`: 共状態
///
/// # 戻り値
/// - 制御の上下限のいずれか
pub fn optimal_control(game: &Air3D, state: &RelativeState, costate: &Costate) -> f64 {
    let det = switching_value(state, costate);
    let (u_min, u_max) = game.u_bounds;
    match game.u_mode {
        Mode::Min => {
            if det >= 0.0 {
                u_min
            } else {
                u_max
            }
        }
        Mode::Max => {
            if det >= 0.0 {
                u_max
            } else {
                u_min
            }
        }
    }
}

/// 最適外乱（相手機旋回率）を求める純粋関数
///
/// 外乱は `d * p_θ` の形でのみ現れ、位置には依存しない。
/// `p_θ == 0` のときは `p_θ >= 0` 側の上下限を選ぶ。
///
/// # 引数
/// - `game`: 検証済みのゲーム設定
/// - `costate`: 共状態
///
/// # 戻り値
/// - 外乱の上下限のいずれか
pub fn optimal_disturbance(game: &Air3D, costate: &Costate) -> f64 {
    let p_theta = costate[2];
    let (d_min, d_max) = game.d_bounds;
    match game.d_mode {
        Mode::Max => {
            if p_theta >= 0.0 {
                d_max
            } else {
                d_min
            }
        }
        Mode::Min => {
            if p_theta >= 0.0 {
                d_min
            } else {
                d_max
            }
        }
    }
}

/// 相対運動の時間微分
///
/// ```text
/// x_dot     = -v + v*cos(θ) + u*y
/// y_dot     =  v*sin(θ) - u*x
/// theta_dot =  d - u
/// ```
pub fn dynamics(game: &Air3D, state: &RelativeState, u_opt: f64, d_opt: f64) -> [f64; 3] {
    let v = game.plane_speed;
    [
        -v + v * state[2].cos() + u_opt * state[1],
        v * state[2].sin() - u_opt * state[0],
        d_opt - u_opt,
    ]
}

/// ハミルトニアン `p · f`
pub fn hamiltonian(costate: &Costate, derivative: &[f64; 3]) -> f64 {
    costate[0] * derivative[0] + costate[1] * derivative[1] + costate[2] * derivative[2]
}

/// 1格子点での評価結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub u_opt: f64,
    pub d_opt: f64,
    pub derivative: [f64; 3],
    pub hamiltonian: f64,
}

/// 最適制御・最適外乱・時間微分・ハミルトニアンをまとめて評価する
///
/// 非有限な値は下流のグリッド全体を壊すため `DomainError` として返す。
/// 入力に加えて、オーバーフローしうる `det`・時間微分・ハミルトニアンも検査する。
pub fn evaluate(
    game: &Air3D,
    state: &RelativeState,
    costate: &Costate,
) -> Result<Evaluation, DynamicsError> {
    ensure_finite("state", state)?;
    ensure_finite("costate", costate)?;
    ensure_finite("det", &[switching_value(state, costate)])?;

    let u_opt = optimal_control(game, state, costate);
    let d_opt = optimal_disturbance(game, costate);
    let derivative = dynamics(game, state, u_opt, d_opt);
    ensure_finite("derivative", &derivative)?;

    let hamiltonian = hamiltonian(costate, &derivative);
    ensure_finite("hamiltonian", &[hamiltonian])?;

    Ok(Evaluation {
        u_opt,
        d_opt,
        derivative,
        hamiltonian,
    })
}
