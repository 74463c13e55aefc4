// src/simulation/csv.rs

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;

use crate::models::air3d::{Costate, Evaluation, RelativeState};

/// CSV出力の設定とヘッダーの書き込み
pub fn setup_csv_output(path: &str) -> Result<Box<dyn Write>, Box<dyn Error>> {
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_csv_header(&mut writer)?;
    Ok(Box::new(writer))
}

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writer.write_all(
        b"x,y,theta,p_x,p_y,p_theta,u_opt,d_opt,x_dot,y_dot,theta_dot,hamiltonian\n",
    )
}

/// CSV行の作成
pub fn create_csv_row(state: &RelativeState, costate: &Costate, eval: &Evaluation) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{},{},{},{}\n",
        state[0],
        state[1],
        state[2],
        costate[0],
        costate[1],
        costate[2],
        eval.u_opt,
        eval.d_opt,
        eval.derivative[0],
        eval.derivative[1],
        eval.derivative[2],
        eval.hamiltonian
    )
}

/// 全評価結果の書き込み
pub fn write_evaluations<W: Write + ?Sized>(
    writer: &mut W,
    states: &[RelativeState],
    costates: &[Costate],
    evaluations: &[Evaluation],
) -> Result<(), std::io::Error> {
    for ((state, costate), eval) in states.iter().zip(costates).zip(evaluations) {
        writer.write_all(create_csv_row(state, costate, eval).as_bytes())?;
    }
    writer.flush()
}
