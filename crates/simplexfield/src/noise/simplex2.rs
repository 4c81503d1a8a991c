//! 2D simplex noise evaluator.
//!
//! Based on Stefan Gustavson's reference simplex algorithm, with every nested
//! permutation lookup wrapped into the table.

use super::lookup::GradientLookup;
use super::permutation::{wrap_cell, wrap_index, PermutationTable};
use super::Noise2D;

/// Skewing factor for 2D: `0.5 * (sqrt(3) - 1)`.
pub const F2: f64 = 0.3660254037844386;
/// Unskewing factor for 2D: `(3 - sqrt(3)) / 6`.
pub const G2: f64 = 0.21132486540518713;

/// A 2D evaluator borrowing a generator's tables.
///
/// Stateless and `Copy`; any number of evaluators may share one generator,
/// across threads.
#[derive(Clone, Copy)]
pub struct Simplex2<'a> {
    perm: &'a PermutationTable,
    grad: &'a GradientLookup<2>,
}

impl<'a> Simplex2<'a> {
    pub(crate) fn new(perm: &'a PermutationTable, grad: &'a GradientLookup<2>) -> Self {
        Self { perm, grad }
    }

    /// Turn the evaluator into a plain closure.
    pub fn into_fn(self) -> impl Fn(f64, f64) -> f64 + Copy + Send + Sync + 'a {
        move |x, y| self.sample(x, y)
    }

    /// Contribution of one corner at offset `(dx, dy)` using table slot `k`.
    #[inline]
    fn corner(&self, k: usize, dx: f64, dy: f64) -> f64 {
        let t = 0.5 - dx * dx - dy * dy;
        if t < 0.0 {
            0.0
        } else {
            let [gx, gy] = self.grad.gradient(k);
            let t = t * t;
            t * t * (gx * dx + gy * dy)
        }
    }
}

impl Noise2D for Simplex2<'_> {
    fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew the input space to find the containing cell
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        // Unskew the cell origin back to (x, y) space
        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Lower triangle (0,0)->(1,0)->(1,1) or upper (0,0)->(0,1)->(1,1)
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = wrap_cell(i);
        let jj = wrap_cell(j);
        let perm = self.perm;

        let k0 = wrap_index(ii + perm.at(jj));
        let k1 = wrap_index(ii + i1 + perm.at(jj + j1));
        let k2 = wrap_index(ii + 1 + perm.at(jj + 1));

        let n0 = self.corner(k0, x0, y0);
        let n1 = self.corner(k1, x1, y1);
        let n2 = self.corner(k2, x2, y2);

        // Scale to roughly [-1, 1]
        70.0 * (n0 + n1 + n2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoiseGenerator;

    #[test]
    fn test_skew_constants() {
        assert!((F2 - 0.5 * (3f64.sqrt() - 1.0)).abs() < 1e-16);
        assert!((G2 - (3.0 - 3f64.sqrt()) / 6.0).abs() < 1e-16);
    }

    #[test]
    fn test_simplex_deterministic() {
        let gen1 = NoiseGenerator::new(42);
        let gen2 = NoiseGenerator::new(42);
        let noise1 = gen1.noise_2d_evaluator();
        let noise2 = gen2.noise_2d_evaluator();

        for i in 0..100 {
            let x = i as f64 * 0.1;
            let y = i as f64 * 0.13;
            assert_eq!(noise1.sample(x, y), noise2.sample(x, y));
        }
    }

    #[test]
    fn test_lattice_origin_is_zero() {
        // Every corner either sits on the sample or is out of range.
        let gen = NoiseGenerator::new(3);
        let noise = gen.noise_2d_evaluator();
        assert_eq!(noise.sample(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_into_fn_matches_sample() {
        let gen = NoiseGenerator::new(11);
        let noise = gen.noise_2d_evaluator();
        let f = noise.into_fn();
        assert_eq!(f(0.25, -3.5), noise.sample(0.25, -3.5));
    }

    #[test]
    fn test_non_finite_input_propagates() {
        let gen = NoiseGenerator::new(1);
        let noise = gen.noise_2d_evaluator();
        assert!(noise.sample(f64::NAN, 0.5).is_nan());
        assert!(!noise.sample(f64::INFINITY, 0.5).is_finite());
    }
}
