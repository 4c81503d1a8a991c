//! Sample command implementation
//!
//! Evaluates the noise field at a single 2D or 3D coordinate.

use anyhow::{bail, Result};
use colored::Colorize;
use simplexfield::{Noise2D, Noise3D};
use std::process::ExitCode;

use super::generator;

/// Evaluate the 2D or 3D evaluator at `coords`.
pub fn evaluate(seed: &str, engine: &str, coords: &[f64]) -> Result<f64> {
    let gen = generator(seed, engine)?;
    let value = match *coords {
        [x, y] => gen.noise_2d_evaluator().sample(x, y),
        [x, y, z] => gen.noise_3d_evaluator().sample(x, y, z),
        _ => bail!("expected 2 or 3 coordinates, got {}", coords.len()),
    };
    Ok(value)
}

/// Run the sample command
pub fn run(seed: &str, engine: &str, coords: &[f64], json: bool) -> Result<ExitCode> {
    let value = evaluate(seed, engine, coords)?;

    if json {
        let report = serde_json::json!({
            "seed": seed,
            "engine": engine,
            "coords": coords,
            "value": value,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let point = coords
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} ({}) = {}", "noise".cyan().bold(), point, value);
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_2d_reference() {
        let v = evaluate("12345", "mt64", &[0.5, 0.5]).unwrap();
        assert!((v - 0.3071565136272162).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_3d_origin() {
        let v = evaluate("12345", "mt64", &[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_wrong_arity_rejected() {
        assert!(evaluate("1", "mt64", &[1.0]).is_err());
        assert!(evaluate("1", "mt64", &[1.0, 2.0, 3.0, 4.0]).is_err());
    }

    #[test]
    fn test_bad_engine_rejected() {
        assert!(evaluate("1", "lcg", &[1.0, 2.0]).is_err());
    }
}
