//! Render command implementation
//!
//! Renders a noise field to a deterministic grayscale PNG and reports its
//! BLAKE3 hash.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use simplexfield::png::write_grayscale_to_vec_with_hash;
use simplexfield::{PngConfig, RenderParams};
use std::fs;
use std::process::ExitCode;

/// Command-line overrides applied on top of the config file (or defaults).
#[derive(Debug, Default, Clone)]
pub struct RenderOverrides {
    pub seed: Option<String>,
    pub engine: Option<String>,
    pub dimensions: Option<u8>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub frequency: Option<f64>,
    pub z: Option<f64>,
    pub octaves: Option<u8>,
}

#[derive(Debug, Serialize)]
struct RenderReport<'a> {
    output: &'a str,
    seed: i64,
    engine: &'static str,
    dimensions: u8,
    width: u32,
    height: u32,
    min: f64,
    max: f64,
    blake3: String,
}

/// Load params from `config` (if any) and apply `overrides`.
pub fn resolve_params(config: Option<&str>, overrides: &RenderOverrides) -> Result<RenderParams> {
    let mut params = match config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            RenderParams::from_json(&json)
                .with_context(|| format!("Failed to parse config file: {}", path))?
        }
        None => RenderParams::default(),
    };

    if let Some(seed) = &overrides.seed {
        params.seed = seed.parse()?;
    }
    if let Some(engine) = &overrides.engine {
        params.engine = engine.parse()?;
    }
    if let Some(dimensions) = overrides.dimensions {
        params.dimensions = dimensions;
    }
    if let Some(width) = overrides.width {
        params.width = width;
    }
    if let Some(height) = overrides.height {
        params.height = height;
    }
    if let Some(frequency) = overrides.frequency {
        params.frequency = frequency;
    }
    if let Some(z) = overrides.z {
        params.z = z;
    }
    if let Some(octaves) = overrides.octaves {
        params.octaves = octaves;
    }

    params.validate()?;
    Ok(params)
}

/// Run the render command
///
/// # Arguments
/// * `out` - Output PNG path
/// * `config` - Optional JSON render params file
/// * `overrides` - Flag values that replace config values
/// * `json` - Print a machine-readable report instead of colored text
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(out: &str, config: Option<&str>, overrides: &RenderOverrides, json: bool) -> Result<ExitCode> {
    let params = resolve_params(config, overrides)?;

    if !json {
        println!(
            "{} {}x{} {}D noise (seed {}, {})",
            "Rendering:".cyan().bold(),
            params.width,
            params.height,
            params.dimensions,
            params.seed,
            params.engine
        );
    }

    let buffer = params.render()?;
    let (bytes, hash) = write_grayscale_to_vec_with_hash(&buffer, &PngConfig::default())
        .context("Failed to encode PNG")?;
    fs::write(out, &bytes).with_context(|| format!("Failed to write to: {}", out))?;

    let (min, max) = buffer.min_max().unwrap_or((0.0, 0.0));

    if json {
        let report = RenderReport {
            output: out,
            seed: params.seed.0,
            engine: params.engine.as_str(),
            dimensions: params.dimensions,
            width: params.width,
            height: params.height,
            min,
            max,
            blake3: hash,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("  {} {:.4} .. {:.4}", "range:".dimmed(), min, max);
        println!("  {} {}", "blake3:".dimmed(), hash);
        println!("{} Wrote {}", "SUCCESS".green().bold(), out);
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use simplexfield::{Engine, Seed};
    use tempfile::tempdir;

    #[test]
    fn test_overrides_replace_config() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("params.json");
        fs::write(&config, r#"{ "seed": 1, "width": 10, "height": 10 }"#).unwrap();

        let overrides = RenderOverrides {
            seed: Some("99".to_string()),
            engine: Some("pcg32".to_string()),
            width: Some(20),
            ..Default::default()
        };
        let params = resolve_params(config.to_str(), &overrides).unwrap();
        assert_eq!(params.seed, Seed(99));
        assert_eq!(params.engine, Engine::Pcg32);
        assert_eq!(params.width, 20);
        assert_eq!(params.height, 10);
    }

    #[test]
    fn test_bad_seed_rejected() {
        let overrides = RenderOverrides {
            seed: Some("1.5".to_string()),
            ..Default::default()
        };
        assert!(resolve_params(None, &overrides).is_err());
    }

    #[test]
    fn test_missing_config_reports_path() {
        let err = resolve_params(Some("/nonexistent/params.json"), &RenderOverrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/params.json"));
    }

    #[test]
    fn test_run_writes_png() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.png");
        let overrides = RenderOverrides {
            seed: Some("12345".to_string()),
            width: Some(16),
            height: Some(16),
            ..Default::default()
        };
        let code = run(out.to_str().unwrap(), None, &overrides, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let bytes = fs::read(&out).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }
}
