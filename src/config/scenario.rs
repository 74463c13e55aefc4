// src/config/scenario.rs

use serde::Deserialize;
use std::f64::consts::PI;

/// 評価グリッドと初期目標集合
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Scenario {
    #[serde(default)]
    pub grid: GridSpec,
    #[serde(default)]
    pub target: CylinderTarget,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GridSpec {
    pub min: [f64; 3],          // 各軸の下端 [x, y, θ]
    pub max: [f64; 3],          // 各軸の上端
    pub points: [usize; 3],     // 各軸の格子点数
    #[serde(default)]
    pub periodic_dims: Vec<usize>, // 周期境界をもつ軸
}

impl Default for GridSpec {
    fn default() -> Self {
        GridSpec {
            min: [-6.0, -10.0, 0.0],
            max: [20.0, 10.0, 2.0 * PI],
            points: [51, 40, 50],
            periodic_dims: vec![2],
        }
    }
}

/// 円柱（ignore_dims が空なら球）の目標集合
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CylinderTarget {
    #[serde(default)]
    pub center: [f64; 3],
    pub radius: f64,
    #[serde(default)]
    pub ignore_dims: Vec<usize>, // 円柱の軸方向（距離に含めない軸）
}

impl Default for CylinderTarget {
    fn default() -> Self {
        CylinderTarget {
            center: [0.0; 3],
            radius: 5.0,
            ignore_dims: Vec::new(),
        }
    }
}
