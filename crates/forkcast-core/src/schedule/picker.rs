use rand::{prelude::IndexedRandom, rngs::StdRng, Rng, SeedableRng};

use crate::models::Recipe;

/// Source of the uniform draw from a day's candidate pool.
pub trait Picker {
    /// Picks one recipe from `pool`, or `None` when the pool is empty.
    fn pick<'a>(&mut self, pool: &[&'a Recipe]) -> Option<&'a Recipe>;
}

impl<R: Rng + ?Sized> Picker for R {
    fn pick<'a>(&mut self, pool: &[&'a Recipe]) -> Option<&'a Recipe> {
        pool.choose(self).copied()
    }
}

/// A reproducible picker: the same seed and inputs yield the same week.
pub fn seeded_picker(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
