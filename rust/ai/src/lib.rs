//! # twentyone-ai: Bot Seats for the Twenty-One Table
//!
//! Provides decision policies for the automated seats. A policy answers
//! one question per loop iteration: given the hand total and the number
//! of cards drawn, draw another card or stand?
//!
//! ## Core Components
//!
//! - [`DecisionPolicy`] - Trait defining the interface for bot decisions
//! - [`random`] - Coin-flip policy bounded by the table's hard limits
//! - [`create_policy`] - Factory function for creating policies
//!
//! ## Quick Start
//!
//! ```rust
//! use twentyone_ai::create_policy;
//!
//! let mut policy = create_policy("random", 42);
//! // Hard limits always win: a full hand never draws again.
//! assert!(!policy.decide(15, 3));
//! assert!(!policy.decide(21, 1));
//! ```

pub mod random;

/// Interface for a bot seat's turn decisions.
///
/// Policies may carry internal RNG state, so `decide` takes `&mut self`.
/// The seat identity is not part of the contract; it is only used for
/// narration by the caller.
pub trait DecisionPolicy {
    /// Decide whether to draw another card (`true` = hit).
    ///
    /// Implementations must respect the table's hard limits: a seat
    /// holding the maximum number of cards, or already at or over
    /// twenty-one, never hits.
    fn decide(&mut self, total: u32, cards_drawn: usize) -> bool;

    /// Return the name of this policy implementation.
    fn name(&self) -> &str;
}

/// Factory for decision policies by kind string.
///
/// The seed makes the policy reproducible; two policies built with the
/// same kind and seed produce identical decision sequences.
///
/// # Panics
///
/// Panics if an unknown policy kind is requested. Currently only
/// "random" is supported.
pub fn create_policy(kind: &str, seed: u64) -> Box<dyn DecisionPolicy> {
    match kind {
        "random" => Box::new(random::RandomPolicy::new(seed)),
        _ => panic!("Unknown policy kind: {}", kind),
    }
}
