use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{Card, CARD_MAX, CARD_MIN};

/// Card source for the table. There is no finite deck to exhaust; every
/// draw is an independent uniform pick from the card value range.
#[derive(Debug)]
pub struct Shoe {
    rng: ChaCha20Rng,
}

impl Shoe {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn draw(&mut self) -> Card {
        self.rng.random_range(CARD_MIN..=CARD_MAX)
    }
}
