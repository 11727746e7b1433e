//! Coin-flip decision policy.
//!
//! The bot hits or stands at random, except where the table's hard
//! limits leave it no choice. Randomness comes from a seeded ChaCha20
//! RNG so simulations and tests can pin bot behavior.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use twentyone_engine::player::{HAND_LIMIT, TARGET_TOTAL};

use crate::DecisionPolicy;

#[derive(Debug)]
pub struct RandomPolicy {
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl DecisionPolicy for RandomPolicy {
    fn decide(&mut self, total: u32, cards_drawn: usize) -> bool {
        // Hard limits override randomness.
        if cards_drawn >= HAND_LIMIT || total >= TARGET_TOTAL {
            return false;
        }
        self.rng.random()
    }

    fn name(&self) -> &str {
        "RandomPolicy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_policy;

    #[test]
    fn full_hand_never_hits() {
        let mut policy = RandomPolicy::new(1);
        for _ in 0..100 {
            assert!(!policy.decide(10, HAND_LIMIT));
            assert!(!policy.decide(10, HAND_LIMIT + 1));
        }
    }

    #[test]
    fn twenty_one_or_more_never_hits() {
        let mut policy = RandomPolicy::new(2);
        for total in [TARGET_TOTAL, TARGET_TOTAL + 1, 30] {
            for _ in 0..100 {
                assert!(!policy.decide(total, 1));
            }
        }
    }

    #[test]
    fn same_seed_gives_same_decisions() {
        let mut a = RandomPolicy::new(77);
        let mut b = RandomPolicy::new(77);
        let left: Vec<bool> = (0..50).map(|_| a.decide(10, 1)).collect();
        let right: Vec<bool> = (0..50).map(|_| b.decide(10, 1)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn unconstrained_decisions_go_both_ways() {
        let mut policy = RandomPolicy::new(3);
        let decisions: Vec<bool> = (0..200).map(|_| policy.decide(10, 1)).collect();
        assert!(decisions.iter().any(|&d| d));
        assert!(decisions.iter().any(|&d| !d));
    }

    #[test]
    fn factory_builds_the_random_policy() {
        let mut policy = create_policy("random", 5);
        assert_eq!(policy.name(), "RandomPolicy");
        assert!(!policy.decide(25, 1));
    }

    #[test]
    #[should_panic(expected = "Unknown policy kind")]
    fn factory_rejects_unknown_kinds() {
        let _ = create_policy("minimax", 5);
    }
}
