//! Seeded permutation table.

use std::ops::Deref;

use crate::rng::{Seed, SeededIntSource};

/// Number of distinct permutation values.
pub const PERM_SIZE: usize = 256;
/// Length of the doubled table.
pub const TABLE_LEN: usize = PERM_SIZE * 2;
/// Mask wrapping a lattice coordinate into `[0, 255]`.
pub const CELL_MASK: i64 = (PERM_SIZE - 1) as i64;
/// Mask wrapping any table index into `[0, 511]`.
pub const INDEX_MASK: usize = TABLE_LEN - 1;

/// A shuffled permutation of `0..=255`, doubled to 512 entries.
///
/// Entries `[256, 511]` are always an exact copy of `[0, 255]`. The table is
/// immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; TABLE_LEN],
}

impl PermutationTable {
    /// Shuffle `0..=255` with a source seeded from `seed` and double it.
    ///
    /// The shuffle walks forward: for `i` in `0..255` it swaps `i` with
    /// `i + next_bounded_int(256 - i)`, so the bounds drawn are
    /// `256, 255, ..., 2` in that order.
    pub fn build<R: SeededIntSource>(seed: Seed) -> Self {
        let mut rng = R::from_seed(seed);
        Self::shuffle_with(&mut rng)
    }

    /// Build a table from an already-seeded source.
    pub fn shuffle_with<R: SeededIntSource + ?Sized>(rng: &mut R) -> Self {
        let mut source = [0u8; PERM_SIZE];
        for (i, v) in source.iter_mut().enumerate() {
            *v = i as u8;
        }

        // Fisher-Yates shuffle
        for i in 0..PERM_SIZE - 1 {
            let r = i + rng.next_bounded_int((PERM_SIZE - i) as u32) as usize;
            source.swap(i, r);
        }

        let mut perm = [0u8; TABLE_LEN];
        perm[..PERM_SIZE].copy_from_slice(&source);
        perm[PERM_SIZE..].copy_from_slice(&source);

        Self { perm }
    }

    /// Table value at `index`, wrapped into `[0, 511]`.
    #[inline]
    pub fn at(&self, index: usize) -> usize {
        self.perm[index & INDEX_MASK] as usize
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.perm
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.perm.to_vec()
    }
}

impl Deref for PermutationTable {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.perm
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

/// Wrap a lattice coordinate into `[0, 255]`.
#[inline]
pub(crate) fn wrap_cell(c: f64) -> usize {
    ((c as i64) & CELL_MASK) as usize
}

/// Wrap a composed table index into `[0, 511]`.
#[inline]
pub(crate) fn wrap_index(i: usize) -> usize {
    i & INDEX_MASK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{Mt64Source, Pcg32Source};

    #[test]
    fn test_table_is_doubled_permutation() {
        let table = PermutationTable::build::<Mt64Source>(Seed(42));
        assert_eq!(table.len(), TABLE_LEN);

        let mut seen = [false; PERM_SIZE];
        for &v in &table[..PERM_SIZE] {
            assert!(!seen[v as usize], "value {v} appears twice");
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(&table[..PERM_SIZE], &table[PERM_SIZE..]);
    }

    #[test]
    fn test_known_prefix_mt64() {
        let table = PermutationTable::build::<Mt64Source>(Seed(12345));
        assert_eq!(&table[..8], &[186, 117, 83, 90, 216, 180, 114, 126]);
        assert_eq!(&table[256..264], &[186, 117, 83, 90, 216, 180, 114, 126]);
    }

    #[test]
    fn test_engines_differ() {
        let mt = PermutationTable::build::<Mt64Source>(Seed(7));
        let pcg = PermutationTable::build::<Pcg32Source>(Seed(7));
        assert_ne!(mt, pcg);
    }

    #[test]
    fn test_at_wraps_index() {
        let table = PermutationTable::build::<Mt64Source>(Seed(1));
        assert_eq!(table.at(0), table.at(512));
        assert_eq!(table.at(3), table.at(256 + 3));
        assert_eq!(table.at(usize::MAX), table[511] as usize);
    }

    #[test]
    fn test_wrap_cell_negative() {
        assert_eq!(wrap_cell(-1.0), 255);
        assert_eq!(wrap_cell(256.0), 0);
        assert_eq!(wrap_cell(-256.0), 0);
        assert_eq!(wrap_cell(f64::NAN), 0);
        assert!(wrap_cell(f64::INFINITY) <= 255);
    }
}
