//! 3D simplex noise evaluator.

use super::lookup::GradientLookup;
use super::permutation::{wrap_cell, wrap_index, PermutationTable};
use super::Noise3D;

/// Skewing factor for 3D.
pub const F3: f64 = 1.0 / 3.0;
/// Unskewing factor for 3D.
pub const G3: f64 = 1.0 / 6.0;

/// A 3D evaluator borrowing a generator's tables.
#[derive(Clone, Copy)]
pub struct Simplex3<'a> {
    perm: &'a PermutationTable,
    grad: &'a GradientLookup<3>,
}

/// Offsets of the second and third simplex corners, `(i1, j1, k1, i2, j2, k2)`.
type CornerOrder = (usize, usize, usize, usize, usize, usize);

impl<'a> Simplex3<'a> {
    pub(crate) fn new(perm: &'a PermutationTable, grad: &'a GradientLookup<3>) -> Self {
        Self { perm, grad }
    }

    /// Turn the evaluator into a plain closure.
    pub fn into_fn(self) -> impl Fn(f64, f64, f64) -> f64 + Copy + Send + Sync + 'a {
        move |x, y, z| self.sample(x, y, z)
    }

    /// Rank the in-cell offsets to pick one of the six tetrahedra.
    #[inline]
    fn corner_order(x0: f64, y0: f64, z0: f64) -> CornerOrder {
        if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0) // X Y Z
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1) // X Z Y
            } else {
                (0, 0, 1, 1, 0, 1) // Z X Y
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1) // Z Y X
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1) // Y Z X
        } else {
            (0, 1, 0, 1, 1, 0) // Y X Z
        }
    }

    /// Table slot for the corner at cell `(ii, jj, kk)` plus offset `(a, b, c)`,
    /// wrapped at every nesting level.
    #[inline]
    fn slot(&self, ii: usize, jj: usize, kk: usize, a: usize, b: usize, c: usize) -> usize {
        let perm = self.perm;
        let inner = perm.at(wrap_index(kk + c));
        let middle = perm.at(wrap_index(jj + b + inner));
        wrap_index(ii + a + middle)
    }

    #[inline]
    fn corner(&self, k: usize, dx: f64, dy: f64, dz: f64) -> f64 {
        let t = 0.6 - dx * dx - dy * dy - dz * dz;
        if t < 0.0 {
            0.0
        } else {
            let [gx, gy, gz] = self.grad.gradient(k);
            let t = t * t;
            t * t * (gx * dx + gy * dy + gz * dz)
        }
    }
}

impl Noise3D for Simplex3<'_> {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let s = (x + y + z) * F3;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let k = (z + s).floor();

        let t = (i + j + k) * G3;
        let x0 = x - (i - t);
        let y0 = y - (j - t);
        let z0 = z - (k - t);

        let (i1, j1, k1, i2, j2, k2) = Self::corner_order(x0, y0, z0);

        let x1 = x0 - i1 as f64 + G3;
        let y1 = y0 - j1 as f64 + G3;
        let z1 = z0 - k1 as f64 + G3;
        let x2 = x0 - i2 as f64 + 2.0 * G3;
        let y2 = y0 - j2 as f64 + 2.0 * G3;
        let z2 = z0 - k2 as f64 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = wrap_cell(i);
        let jj = wrap_cell(j);
        let kk = wrap_cell(k);

        let n0 = self.corner(self.slot(ii, jj, kk, 0, 0, 0), x0, y0, z0);
        let n1 = self.corner(self.slot(ii, jj, kk, i1, j1, k1), x1, y1, z1);
        let n2 = self.corner(self.slot(ii, jj, kk, i2, j2, k2), x2, y2, z2);
        let n3 = self.corner(self.slot(ii, jj, kk, 1, 1, 1), x3, y3, z3);

        32.0 * (n0 + n1 + n2 + n3)
    }
}
