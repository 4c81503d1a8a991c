//! Seed-reproducible simplex noise fields.
//!
//! A [`NoiseGenerator`] shuffles a 256-entry permutation table from a 64-bit
//! seed, doubles it to 512 entries and derives per-axis gradient lookups for
//! 2D and 3D. Evaluators borrow those tables and turn a coordinate into a
//! scalar nominally in `[-1, 1]`; sampling is allocation-free and can run on
//! any number of threads at once.
//!
//! # Features
//!
//! - **Simplex noise**: 2D and 3D evaluators sharing one generator's tables
//! - **Pinned engines**: MT19937-64 by default, PCG32 on request
//! - **FBM**: octave layering over either evaluator
//! - **Rendering**: parallel grid sampling and deterministic PNG output
//!
//! # Example
//!
//! ```
//! use simplexfield::{Noise2D, Noise3D, NoiseGenerator};
//!
//! let generator = NoiseGenerator::new(12345);
//! let noise2 = generator.noise_2d_evaluator();
//! let noise3 = generator.noise_3d_evaluator();
//!
//! let a = noise2.sample(0.5, 0.5);
//! let b = noise3.sample(0.0, 0.0, 0.0);
//! assert!(a.abs() <= 1.0 && b.abs() <= 1.0);
//! ```
//!
//! # Determinism
//!
//! - Same seed + same engine = identical permutation table
//! - Identical tables = bit-identical samples for identical inputs
//! - PNG encoding uses fixed compression settings

pub mod error;
pub mod maps;
pub mod noise;
pub mod params;
pub mod png;
pub mod rng;

// Re-export main types for convenience
pub use error::NoiseError;
pub use maps::{render_2d, render_3d_slice, GrayscaleBuffer, Window};
pub use noise::{Fbm, Noise2D, Noise3D, NoiseGenerator, PermutationTable, Simplex2, Simplex3};
pub use params::RenderParams;
pub use crate::png::{PngConfig, PngError};
pub use rng::{Engine, Mt64Source, Pcg32Source, Seed, SeededIntSource};
