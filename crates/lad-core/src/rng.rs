//! Regeneration randomness.
//!
//! World and item pools are refilled with a linear congruential generator
//! (`next = (prev * 9301 + 49297) mod 233280`) seeded from both parties'
//! seeds plus the last five digits of a millisecond clock. The recurrence
//! and seed formula are kept exact so refills reproduce across
//! implementations given the same inputs.

use crate::item::ItemKind;
use crate::world::WorldKind;

const MULTIPLIER: i64 = 9301;
const INCREMENT: i64 = 49297;
const MODULUS: i64 = 233_280;

/// Number of items handed out per refill, split evenly between parties.
pub const ITEMS_PER_REFILL: usize = 8;

/// Upper bound on worlds produced by one refill.
pub const MAX_WORLDS_PER_REFILL: usize = 8;

/// The regeneration LCG.
#[derive(Debug, Clone)]
pub struct Lcg {
    value: i64,
}

impl Lcg {
    /// Seed a new generator. Negative seeds wrap into `0..233280`.
    pub fn new(seed: i64) -> Self {
        Self {
            value: seed.rem_euclid(MODULUS),
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.value = (self.value * MULTIPLIER + INCREMENT) % MODULUS;
        self.value as f64 / MODULUS as f64
    }
}

/// Combine both seeds with the last five digits of `now_millis`.
pub fn derive_seed(player_seed: i64, ai_seed: i64, now_millis: i64) -> i64 {
    player_seed
        .wrapping_add(ai_seed)
        .wrapping_add(now_millis.rem_euclid(100_000))
}

/// Draw a pool of 1 to 8 worlds.
pub fn generate_worlds(rng: &mut Lcg) -> Vec<WorldKind> {
    let count = (rng.next_f64() * MAX_WORLDS_PER_REFILL as f64) as usize + 1;
    (0..count)
        .map(|_| {
            if rng.next_f64() > 0.5 {
                WorldKind::Dangerous
            } else {
                WorldKind::Safe
            }
        })
        .collect()
}

/// Draw eight item kinds. The first four go to the player, the rest to the AI.
pub fn generate_items(rng: &mut Lcg) -> Vec<ItemKind> {
    (0..ITEMS_PER_REFILL)
        .map(|_| {
            let slot = (rng.next_f64() * ItemKind::ALL.len() as f64) as usize;
            ItemKind::ALL[slot.min(ItemKind::ALL.len() - 1)]
        })
        .collect()
}
