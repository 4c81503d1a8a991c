//! Table command implementation
//!
//! Prints the 512-entry permutation table for a seed.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use super::generator;

/// Values per printed row.
const ROW: usize = 16;

/// Run the table command
pub fn run(seed: &str, engine: &str, json: bool) -> Result<ExitCode> {
    let gen = generator(seed, engine)?;
    let table = gen.build_permutation_table();
    let engine_name = gen.engine().map_or("custom", |e| e.as_str());

    if json {
        let report = serde_json::json!({
            "seed": gen.seed().0,
            "engine": engine_name,
            "table": table,
        });
        println!("{}", serde_json::to_string(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} seed {} ({}), {} entries",
        "Permutation table:".cyan().bold(),
        gen.seed(),
        engine_name,
        table.len()
    );
    for (row, chunk) in table.chunks(ROW).enumerate() {
        let line = chunk
            .iter()
            .map(|v| format!("{:3}", v))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{} {}", format!("{:3}:", row * ROW).dimmed(), line);
    }

    Ok(ExitCode::SUCCESS)
}
