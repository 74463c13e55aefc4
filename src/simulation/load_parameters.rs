// src/simulation/load_parameters.rs

use std::error::Error;
use std::fs::File;
use std::io::Read;

use log::info;
use serde_yaml::from_reader;

use crate::config::{parameters::GameParameters, scenario::Scenario};
use crate::models::air3d::Air3D;

/// ゲームパラメータの読み込み（任意のリーダから）
pub fn read_game_parameters<R: Read>(reader: R) -> Result<GameParameters, Box<dyn Error>> {
    let params: GameParameters = from_reader(reader)?;
    Ok(params)
}

/// ゲームパラメータの読み込み
pub fn load_game_parameters(path: &str) -> Result<GameParameters, Box<dyn Error>> {
    let file = File::open(path)?;
    read_game_parameters(file)
}

/// ゲームパラメータを読み込み、検証済みの Air3D を生成する
pub fn load_game(path: &str) -> Result<Air3D, Box<dyn Error>> {
    let params = load_game_parameters(path)?;
    let game = Air3D::new(&params)?;
    info!(
        "ゲーム設定を読み込みました: {} (v={}, u={:?}, d={:?})",
        path,
        game.plane_speed(),
        game.u_mode(),
        game.d_mode()
    );
    Ok(game)
}

/// シナリオの読み込み（任意のリーダから）
pub fn read_scenario<R: Read>(reader: R) -> Result<Scenario, Box<dyn Error>> {
    let scenario: Scenario = from_reader(reader)?;
    Ok(scenario)
}

/// シナリオの読み込み
pub fn load_scenario(path: &str) -> Result<Scenario, Box<dyn Error>> {
    let file = File::open(path)?;
    read_scenario(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;
    use crate::math::error::DynamicsError;

    #[test]
    fn test_read_game_parameters_with_defaults() {
        let yaml = "plane_speed: 5.0\n";
        let params = read_game_parameters(yaml.as_bytes()).unwrap();
        assert_eq!(params, GameParameters::with_speed(5.0));
    }

    #[test]
    fn test_read_game_parameters_full() {
        let yaml = "\
plane_speed: 3.5
u_min: -2.0
u_max: 1.5
d_min: -0.5
d_max: 0.5
u_mode: max
d_mode: min
";
        let params = read_game_parameters(yaml.as_bytes()).unwrap();
        assert_eq!(params.plane_speed, 3.5);
        assert_eq!((params.u_min, params.u_max), (-2.0, 1.5));
        assert_eq!((params.d_min, params.d_max), (-0.5, 0.5));
        assert_eq!(params.u_mode, Mode::Max);
        assert_eq!(params.d_mode, Mode::Min);
    }

    #[test]
    fn test_read_game_parameters_rejects_unknown_mode() {
        let yaml = "plane_speed: 5.0\nu_mode: minimize\n";
        assert!(read_game_parameters(yaml.as_bytes()).is_err());
    }

    #[test]
    fn test_same_roles_are_parsed_but_not_validated() {
        let yaml = "plane_speed: 5.0\nu_mode: min\nd_mode: min\n";
        let params = read_game_parameters(yaml.as_bytes()).unwrap();
        assert!(matches!(
            Air3D::new(&params),
            Err(DynamicsError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_read_scenario_defaults() {
        let scenario = read_scenario("{}".as_bytes()).unwrap();
        assert_eq!(scenario.grid.points, [51, 40, 50]);
        assert_eq!(scenario.grid.periodic_dims, vec![2]);
        assert_eq!(scenario.target.radius, 5.0);
        assert!(scenario.target.ignore_dims.is_empty());
    }

    #[test]
    fn test_read_scenario_explicit() {
        let yaml = "\
grid:
  min: [-1.0, -1.0, 0.0]
  max: [1.0, 1.0, 3.0]
  points: [3, 3, 4]
  periodic_dims: []
target:
  center: [0.5, 0.0, 0.0]
  radius: 0.25
  ignore_dims: [2]
";
        let scenario = read_scenario(yaml.as_bytes()).unwrap();
        assert_eq!(scenario.grid.points, [3, 3, 4]);
        assert!(scenario.grid.periodic_dims.is_empty());
        assert_eq!(scenario.target.center, [0.5, 0.0, 0.0]);
        assert_eq!(scenario.target.ignore_dims, vec![2]);
    }

    #[test]
    fn test_load_game_missing_file() {
        assert!(load_game("config/does_not_exist.yaml").is_err());
    }
}
