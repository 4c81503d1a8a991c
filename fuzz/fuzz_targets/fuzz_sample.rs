//! Fuzz the evaluators with arbitrary seeds and coordinates.
//!
//! Sampling must never panic, and finite input must give finite output.

#![no_main]

use libfuzzer_sys::fuzz_target;
use simplexfield::{Noise2D, Noise3D, NoiseGenerator};

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }

    let word = |i: usize| {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[i * 8..i * 8 + 8]);
        bytes
    };

    let seed = i64::from_le_bytes(word(0));
    let x = f64::from_le_bytes(word(1));
    let y = f64::from_le_bytes(word(2));
    let z = f64::from_le_bytes(word(3));

    let generator = NoiseGenerator::new(seed);
    let v2 = generator.noise_2d_evaluator().sample(x, y);
    let v3 = generator.noise_3d_evaluator().sample(x, y, z);

    if [x, y].iter().all(|c| c.is_finite() && c.abs() < 1e300) {
        assert!(v2.is_finite(), "2D({x}, {y}) = {v2}");
    }
    if [x, y, z].iter().all(|c| c.is_finite() && c.abs() < 1e300) {
        assert!(v3.is_finite(), "3D({x}, {y}, {z}) = {v3}");
    }
});
