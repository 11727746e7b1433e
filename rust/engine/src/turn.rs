//! Per-turn status guards.
//!
//! A turn is a tiny state machine: the seat receives an opening card,
//! then loops through decisions until a stopping condition. The guards
//! here run before every decision and every draw, so a hand can never
//! grow past the card limit and a seat at or over twenty-one is never
//! asked to decide. A draw that pushes the total over the target is
//! only observed on the next loop iteration.

use crate::player::{PlayerState, HAND_LIMIT, TARGET_TOTAL};

/// Why a turn stopped.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StopReason {
    /// The seat holds the maximum number of cards
    CardLimit,
    /// The hand totals exactly twenty-one
    TwentyOne,
    /// The hand total passed twenty-one
    Bust,
    /// The seat chose to stand
    Stand,
}

/// Observable state of one seat's turn, derived from its hand alone.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TurnStatus {
    /// Hand is empty; the opening card must be dealt unconditionally
    NeedsFirstCard,
    /// The seat may hit or stand
    Deciding { total: u32, cards_drawn: usize },
    /// Turn is over; a stopped turn is never re-entered
    Stopped(StopReason),
}

/// Card-limit is checked before the total, so a three-card bust reports
/// the limit rather than the bust.
pub fn turn_status(player: &PlayerState) -> TurnStatus {
    if player.cards_drawn() == 0 {
        return TurnStatus::NeedsFirstCard;
    }
    if player.cards_drawn() >= HAND_LIMIT {
        return TurnStatus::Stopped(StopReason::CardLimit);
    }
    let total = player.total();
    if total > TARGET_TOTAL {
        return TurnStatus::Stopped(StopReason::Bust);
    }
    if total == TARGET_TOTAL {
        return TurnStatus::Stopped(StopReason::TwentyOne);
    }
    TurnStatus::Deciding {
        total,
        cards_drawn: player.cards_drawn(),
    }
}
