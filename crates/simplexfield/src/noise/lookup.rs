//! Per-axis gradient lookup arrays derived from a permutation table.

use super::permutation::{PermutationTable, TABLE_LEN};

/// For each axis, the gradient component selected by every table slot:
/// `axes[a][k] == gradients[perm[k] % 12][a]`.
#[derive(Clone, PartialEq, Eq)]
pub struct GradientLookup<const N: usize> {
    axes: [[i8; TABLE_LEN]; N],
}

impl<const N: usize> GradientLookup<N> {
    /// Derive the lookup arrays from `perm` and a gradient set.
    pub fn derive(perm: &PermutationTable, gradients: &[[i8; N]; 12]) -> Self {
        let mut axes = [[0i8; TABLE_LEN]; N];
        for (k, &p) in perm.iter().enumerate() {
            let g = &gradients[p as usize % gradients.len()];
            for (axis, component) in axes.iter_mut().zip(g.iter()) {
                axis[k] = *component;
            }
        }
        Self { axes }
    }

    /// Gradient vector stored at table slot `k` (already wrapped).
    #[inline]
    pub fn gradient(&self, k: usize) -> [f64; N] {
        let mut g = [0.0; N];
        for (out, axis) in g.iter_mut().zip(self.axes.iter()) {
            *out = f64::from(axis[k]);
        }
        g
    }

    #[cfg(test)]
    fn axis(&self, axis: usize) -> &[i8; TABLE_LEN] {
        &self.axes[axis]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::gradient::{GRAD2, GRAD3};
    use crate::rng::{Mt64Source, Seed};

    #[test]
    fn test_lookup_matches_definition() {
        let perm = PermutationTable::build::<Mt64Source>(Seed(99));
        let lookup2 = GradientLookup::derive(&perm, &GRAD2);
        let lookup3 = GradientLookup::derive(&perm, &GRAD3);

        for k in 0..TABLE_LEN {
            let p = perm[k] as usize % 12;
            assert_eq!(lookup2.axis(0)[k], GRAD2[p][0]);
            assert_eq!(lookup2.axis(1)[k], GRAD2[p][1]);
            for a in 0..3 {
                assert_eq!(lookup3.axis(a)[k], GRAD3[p][a]);
            }
        }
    }

    #[test]
    fn test_lookup_halves_agree() {
        let perm = PermutationTable::build::<Mt64Source>(Seed(5));
        let lookup = GradientLookup::derive(&perm, &GRAD3);
        for k in 0..256 {
            assert_eq!(lookup.gradient(k), lookup.gradient(k + 256));
        }
    }
}
