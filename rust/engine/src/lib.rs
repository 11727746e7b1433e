//! # twentyone-engine: Twenty-One Round Engine Core
//!
//! A deterministic engine for a simplified game of twenty-one: one human
//! seat against three bots, one round at a time. Provides round state
//! management, dealing, turn guards, winner determination, and round
//! record logging with reproducible RNG.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card value range for the simplified game
//! - [`shoe`] - Card source backed by a seeded ChaCha20 RNG
//! - [`player`] - Seat state, hand, cached total, and turn actions
//! - [`round`] - Round phase machine and turn-order bookkeeping
//! - [`turn`] - Per-turn status guards (card limit, twenty-one, bust)
//! - [`dealer`] - Dealing, narration, and winner announcement
//! - [`logger`] - Round record serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use twentyone_engine::dealer;
//! use twentyone_engine::round::RoundState;
//! use twentyone_engine::shoe::Shoe;
//!
//! let mut round = RoundState::new();
//! round.seat_players("You", &["AI_Player_1"]).unwrap();
//!
//! let mut shoe = Shoe::new_with_seed(42);
//! let card = dealer::deal_card(&mut round, 0, &mut shoe).unwrap();
//! assert!((2..=11).contains(&card));
//! assert_eq!(round.players()[0].total(), u32::from(card));
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All draws are reproducible using seeded RNG:
//!
//! ```rust
//! use twentyone_engine::shoe::Shoe;
//!
//! let mut a = Shoe::new_with_seed(7);
//! let mut b = Shoe::new_with_seed(7);
//! assert_eq!(a.draw(), b.draw());
//! ```

pub mod cards;
pub mod dealer;
pub mod errors;
pub mod logger;
pub mod player;
pub mod round;
pub mod shoe;
pub mod turn;
