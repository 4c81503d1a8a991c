//! CLI command implementations

pub mod render;
pub mod sample;
pub mod table;

use anyhow::Result;
use simplexfield::{Engine, NoiseGenerator};

/// Build a generator from the raw `--seed` and `--engine` arguments.
pub(crate) fn generator(seed: &str, engine: &str) -> Result<NoiseGenerator> {
    let engine: Engine = engine.parse()?;
    Ok(NoiseGenerator::parse(seed, engine)?)
}
