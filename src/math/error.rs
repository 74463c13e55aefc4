// src/math/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DynamicsError {
    /// 役割の重複・上下限の逆転・非有限なパラメータ
    #[error("設定が不正です: {0}")]
    InvalidConfiguration(String),
    /// 入力または途中結果に NaN / ∞ が含まれる
    #[error("{name} に非有限な値が含まれています: {values:?}")]
    DomainError { name: &'static str, values: Vec<f64> },
}
