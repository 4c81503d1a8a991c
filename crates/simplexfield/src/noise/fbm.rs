//! Fractal Brownian Motion (FBM) noise.
//!
//! FBM layers multiple octaves of noise to create natural-looking patterns.

use super::{Noise2D, Noise3D};

/// Fractal Brownian Motion generator.
///
/// Combines multiple octaves of a base noise function. Works over any
/// [`Noise2D`] and/or [`Noise3D`] base.
#[derive(Clone, Copy, Debug)]
pub struct Fbm<N> {
    /// The base noise function.
    noise: N,
    /// Number of octaves to combine.
    octaves: u8,
    /// Amplitude multiplier per octave. Typical value: 0.5.
    persistence: f64,
    /// Frequency multiplier per octave. Typical value: 2.0.
    lacunarity: f64,
}

impl<N> Fbm<N> {
    /// Create a new FBM generator with default settings.
    ///
    /// Default: 4 octaves, 0.5 persistence, 2.0 lacunarity.
    pub fn new(noise: N) -> Self {
        Self {
            noise,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }

    /// Set the number of octaves (at least one).
    pub fn with_octaves(mut self, octaves: u8) -> Self {
        self.octaves = octaves.max(1);
        self
    }

    /// Set the persistence (amplitude multiplier per octave).
    pub fn with_persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    /// Set the lacunarity (frequency multiplier per octave).
    pub fn with_lacunarity(mut self, lacunarity: f64) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    pub fn octaves(&self) -> u8 {
        self.octaves
    }

    /// Sum `octave(frequency)` weighted by amplitude, normalized by the
    /// total amplitude.
    #[inline]
    fn accumulate(&self, mut octave: impl FnMut(f64) -> f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for _ in 0..self.octaves {
            total += octave(frequency) * amplitude;
            max_value += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        total / max_value
    }
}

impl<N: Noise2D> Noise2D for Fbm<N> {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.accumulate(|f| self.noise.sample(x * f, y * f))
    }
}

impl<N: Noise3D> Noise3D for Fbm<N> {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self.accumulate(|f| self.noise.sample(x * f, y * f, z * f))
    }
}
