// src/math/finite.rs

use crate::math::error::DynamicsError;

/// 全成分が有限であることを確認する
///
/// # 引数
/// - `name`: エラー時に表示するベクトル名
/// - `values`: 検査対象のベクトル
///
/// # 戻り値
/// - 全成分が有限なら `Ok(())`、そうでなければ `DynamicsError::DomainError`
pub fn ensure_finite(name: &'static str, values: &[f64]) -> Result<(), DynamicsError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(DynamicsError::DomainError {
            name,
            values: values.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite_accepts_regular_values() {
        assert!(ensure_finite("state", &[0.0, -3.5, 1e300]).is_ok());
    }

    #[test]
    fn test_ensure_finite_rejects_nan() {
        let result = ensure_finite("costate", &[0.0, f64::NAN, 1.0]);
        match result {
            Err(DynamicsError::DomainError { name, .. }) => assert_eq!(name, "costate"),
            _ => panic!("Expected DynamicsError::DomainError"),
        }
    }

    #[test]
    fn test_ensure_finite_scalar() {
        assert!(ensure_finite("det", &[0.0]).is_ok());
        match ensure_finite("det", &[f64::INFINITY - f64::INFINITY]) {
            Err(DynamicsError::DomainError { name, values }) => {
                assert_eq!(name, "det");
                assert_eq!(values.len(), 1);
                assert!(values[0].is_nan());
            }
            _ => panic!("Expected DynamicsError::DomainError"),
        }
    }

    #[test]
    fn test_ensure_finite_rejects_infinity() {
        assert!(ensure_finite("state", &[f64::NEG_INFINITY, 0.0, 0.0]).is_err());
    }
}
