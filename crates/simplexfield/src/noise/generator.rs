//! Seeded noise generator owning the permutation and gradient tables.

use tracing::debug;

use super::gradient::{GRAD2, GRAD3};
use super::lookup::GradientLookup;
use super::permutation::PermutationTable;
use super::simplex2::Simplex2;
use super::simplex3::Simplex3;
use crate::error::NoiseError;
use crate::rng::{Engine, Mt64Source, Pcg32Source, Seed, SeededIntSource};

/// A seeded simplex noise generator.
///
/// All tables are built eagerly in the constructor and never change
/// afterwards, so a generator can be shared across threads by reference and
/// sampled concurrently without locking.
#[derive(Clone)]
pub struct NoiseGenerator {
    seed: Seed,
    engine: Option<Engine>,
    /// Shuffle used for `perm`; kept so the table can be rebuilt on demand.
    builder: fn(Seed) -> PermutationTable,
    perm: PermutationTable,
    grad2: GradientLookup<2>,
    grad3: GradientLookup<3>,
}

impl NoiseGenerator {
    /// Create a generator using the default MT19937-64 engine.
    pub fn new(seed: impl Into<Seed>) -> Self {
        Self::with_engine(seed, Engine::default())
    }

    /// Create a generator with an explicit engine.
    pub fn with_engine(seed: impl Into<Seed>, engine: Engine) -> Self {
        let builder: fn(Seed) -> PermutationTable = match engine {
            Engine::Mt64 => PermutationTable::build::<Mt64Source>,
            Engine::Pcg32 => PermutationTable::build::<Pcg32Source>,
        };
        let generator = Self::from_builder(seed.into(), Some(engine), builder);
        debug!(seed = %generator.seed, %engine, "built noise tables");
        generator
    }

    /// Create a generator from untyped seed text, e.g. a CLI argument.
    pub fn parse(seed: &str, engine: Engine) -> Result<Self, NoiseError> {
        let seed: Seed = seed.parse()?;
        Ok(Self::with_engine(seed, engine))
    }

    /// Create a generator from a custom seeded integer source.
    ///
    /// [`engine`](Self::engine) reports `None`; the tables, including those
    /// returned by [`build_permutation_table`](Self::build_permutation_table),
    /// come from `R`.
    pub fn from_source<R: SeededIntSource>(seed: impl Into<Seed>) -> Self {
        Self::from_builder(seed.into(), None, PermutationTable::build::<R>)
    }

    fn from_builder(
        seed: Seed,
        engine: Option<Engine>,
        builder: fn(Seed) -> PermutationTable,
    ) -> Self {
        let perm = builder(seed);
        let grad2 = GradientLookup::derive(&perm, &GRAD2);
        let grad3 = GradientLookup::derive(&perm, &GRAD3);
        Self {
            seed,
            engine,
            builder,
            perm,
            grad2,
            grad3,
        }
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// The built-in engine behind this generator, or `None` for a custom
    /// source.
    pub fn engine(&self) -> Option<Engine> {
        self.engine
    }

    /// Rebuild the permutation table from this generator's seed.
    ///
    /// Always equal to [`NoiseGenerator::permutation`].
    pub fn build_permutation_table(&self) -> Vec<u8> {
        (self.builder)(self.seed).to_vec()
    }

    /// The cached permutation table.
    pub fn permutation(&self) -> &PermutationTable {
        &self.perm
    }

    /// A 2D evaluator sharing this generator's tables.
    pub fn noise_2d_evaluator(&self) -> Simplex2<'_> {
        Simplex2::new(&self.perm, &self.grad2)
    }

    /// A 3D evaluator sharing this generator's tables.
    pub fn noise_3d_evaluator(&self) -> Simplex3<'_> {
        Simplex3::new(&self.perm, &self.grad3)
    }
}

impl std::fmt::Debug for NoiseGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseGenerator")
            .field("seed", &self.seed)
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}
