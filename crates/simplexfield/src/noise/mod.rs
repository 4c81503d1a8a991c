//! Simplex noise primitives.
//!
//! All noise here is deterministic: the same seed and engine always produce
//! the same permutation table, and therefore the same samples.

mod fbm;
mod generator;
pub mod gradient;
mod lookup;
mod permutation;
mod simplex2;
mod simplex3;

pub use fbm::Fbm;
pub use generator::NoiseGenerator;
pub use lookup::GradientLookup;
pub use permutation::{PermutationTable, PERM_SIZE, TABLE_LEN};
pub use simplex2::{Simplex2, F2, G2};
pub use simplex3::{Simplex3, F3, G3};

/// Trait for 2D noise generators.
pub trait Noise2D {
    /// Sample the noise at a given 2D coordinate.
    /// Returns a value nominally in `[-1, 1]`.
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Sample the noise and normalize to [0, 1] range.
    fn sample_01(&self, x: f64, y: f64) -> f64 {
        (self.sample(x, y) + 1.0) * 0.5
    }
}

/// Trait for 3D noise generators.
pub trait Noise3D {
    /// Sample the noise at a given 3D coordinate.
    fn sample(&self, x: f64, y: f64, z: f64) -> f64;

    /// Sample the noise and normalize to [0, 1] range.
    fn sample_01(&self, x: f64, y: f64, z: f64) -> f64 {
        (self.sample(x, y, z) + 1.0) * 0.5
    }
}
