// src/main.rs

use std::error::Error;
use std::fs;

use log::{info, warn};

use air3d::simulation::csv::{setup_csv_output, write_evaluations};
use air3d::simulation::framework::{
    cylinder_costate, cylinder_value, grid_states, summarize, sweep,
};
use air3d::simulation::load_parameters::{load_game, load_scenario};
use air3d::Costate;

fn init_logger() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if let Err(e) = simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("ロガーの初期化に失敗しました: {}", e);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logger();

    // 設定とシナリオの読み込み
    let game = load_game("config/air3d.yaml")?;
    let scenario = load_scenario("config/scenario.yaml")?;

    // 格子点と初期価値関数の勾配
    let states = grid_states(&scenario.grid)?;
    let costates: Vec<Costate> = states
        .iter()
        .map(|state| cylinder_costate(&scenario.target, state))
        .collect();
    let inside = states
        .iter()
        .filter(|state| cylinder_value(&scenario.target, state) <= 0.0)
        .count();
    info!(
        "目標集合（半径 {}）内の格子点: {} / {}",
        scenario.target.radius,
        inside,
        states.len()
    );

    // 全格子点の評価
    let evaluations = sweep(&game, &states, &costates)?;
    let summary = summarize(&game, &evaluations);
    info!(
        "格子点 {}: u_min {} / u_max {}, d_min {} / d_max {}, max|H| = {:.4}",
        summary.points,
        summary.control_at_min,
        summary.control_at_max,
        summary.disturbance_at_min,
        summary.disturbance_at_max,
        summary.max_abs_hamiltonian
    );
    if summary.control_at_min == 0 || summary.control_at_max == 0 {
        warn!("制御がグリッド全体で一方の上下限に張り付いています");
    }

    // CSV出力
    fs::create_dir_all("output")?;
    let path = "output/hamiltonian_sweep.csv";
    let mut writer = setup_csv_output(path)?;
    write_evaluations(writer.as_mut(), &states, &costates, &evaluations)?;
    info!("結果を {} に保存しました", path);

    Ok(())
}
