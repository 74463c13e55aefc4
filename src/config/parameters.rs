// src/config/parameters.rs

use serde::Deserialize;

/// 最小化側か最大化側か
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[serde(rename = "min")]
    Min,
    #[serde(rename = "max")]
    Max,
}

impl Mode {
    /// 相手側の役割
    pub fn opposite(self) -> Mode {
        match self {
            Mode::Min => Mode::Max,
            Mode::Max => Mode::Min,
        }
    }
}

/// Air3D のユーザパラメータ（未検証）
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GameParameters {
    pub plane_speed: f64, // 両機共通の前進速度
    #[serde(default = "default_lower")]
    pub u_min: f64, // 制御（自機旋回率）の下限
    #[serde(default = "default_upper")]
    pub u_max: f64, // 制御の上限
    #[serde(default = "default_lower")]
    pub d_min: f64, // 外乱（相手機旋回率）の下限
    #[serde(default = "default_upper")]
    pub d_max: f64, // 外乱の上限
    #[serde(default = "default_u_mode")]
    pub u_mode: Mode, // "min": 目標に到達させる, "max": 目標を回避させる
    #[serde(default = "default_d_mode")]
    pub d_mode: Mode, // u_mode の逆でなければならない
}

impl GameParameters {
    /// 既定の上下限と役割で生成する
    pub fn with_speed(plane_speed: f64) -> Self {
        GameParameters {
            plane_speed,
            u_min: default_lower(),
            u_max: default_upper(),
            d_min: default_lower(),
            d_max: default_upper(),
            u_mode: default_u_mode(),
            d_mode: default_d_mode(),
        }
    }
}

fn default_lower() -> f64 {
    -1.0
}

fn default_upper() -> f64 {
    1.0
}

fn default_u_mode() -> Mode {
    Mode::Min
}

fn default_d_mode() -> Mode {
    Mode::Max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_opposite() {
        assert_eq!(Mode::Min.opposite(), Mode::Max);
        assert_eq!(Mode::Max.opposite(), Mode::Min);
    }

    #[test]
    fn test_with_speed_uses_defaults() {
        let params = GameParameters::with_speed(5.0);
        assert_eq!(params.plane_speed, 5.0);
        assert_eq!((params.u_min, params.u_max), (-1.0, 1.0));
        assert_eq!((params.d_min, params.d_max), (-1.0, 1.0));
        assert_eq!(params.u_mode, Mode::Min);
        assert_eq!(params.d_mode, Mode::Max);
    }
}
