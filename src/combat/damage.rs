//! Damage rolls
//!
//! Attacks draw their damage from a `DamageRoll`. The live loop uses a seeded
//! ChaCha RNG; scenarios that need forced damage use `FixedDamage`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;

use crate::combat::constants::{DAMAGE_MAX, DAMAGE_MIN};

/// Source of damage values for attacks
pub trait DamageRoll {
    fn roll(&mut self) -> u32;
}

/// Uniform integer damage over an inclusive range
#[derive(Debug, Clone)]
pub struct RandomDamage {
    rng: ChaCha8Rng,
    range: RangeInclusive<u32>,
}

impl RandomDamage {
    /// Default 5-14 range with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_range(seed, DAMAGE_MIN, DAMAGE_MAX)
    }

    /// Callers must ensure `min <= max` (checked by `FightConfig::validate`)
    pub fn with_range(seed: u64, min: u32, max: u32) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            range: min..=max,
        }
    }
}

impl DamageRoll for RandomDamage {
    fn roll(&mut self) -> u32 {
        self.rng.gen_range(self.range.clone())
    }
}

/// Always deals the same damage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDamage(pub u32);

impl DamageRoll for FixedDamage {
    fn roll(&mut self) -> u32 {
        self.0
    }
}

impl<D: DamageRoll + ?Sized> DamageRoll for Box<D> {
    fn roll(&mut self) -> u32 {
        (**self).roll()
    }
}
