//! Dealing and winner announcement.
//!
//! The dealer mutates the round on behalf of the current seat: it draws
//! from the shoe, appends to the hand, and narrates every card into the
//! round's dealer log. At the end of a round it names the winner.

use crate::cards::Card;
use crate::errors::GameError;
use crate::player::{PlayerState, HAND_LIMIT, TARGET_TOTAL};
use crate::round::{Phase, RoundState};
use crate::shoe::Shoe;
use crate::turn::{turn_status, TurnStatus};

/// Draw one card for the given seat. Every call produces exactly one
/// draw; the turn guards are responsible for not calling this on a full
/// hand during normal play.
pub fn deal_card(
    round: &mut RoundState,
    player_idx: usize,
    shoe: &mut Shoe,
) -> Result<Card, GameError> {
    if round.phase() != Phase::Playing {
        return Err(GameError::RoundNotInPlay);
    }
    let player = round
        .player_mut(player_idx)
        .ok_or(GameError::UnknownPlayer { index: player_idx })?;
    if player.cards_drawn() >= HAND_LIMIT {
        return Err(GameError::HandLimitReached {
            name: player.name().to_string(),
            limit: HAND_LIMIT,
        });
    }
    let card = shoe.draw();
    player.push_card(card);
    let line = format!(
        "Dealer: Dealt {} to {}. Total: {}",
        card,
        player.name(),
        player.total()
    );
    round.push_narration(line);
    Ok(card)
}

/// Deal the opening card to the current seat iff its hand is empty.
/// Every turn starts with at least one card.
pub fn open_turn(round: &mut RoundState, shoe: &mut Shoe) -> Result<Option<Card>, GameError> {
    let idx = round.current_index();
    let player = round
        .player(idx)
        .ok_or(GameError::UnknownPlayer { index: idx })?;
    if turn_status(player) == TurnStatus::NeedsFirstCard {
        deal_card(round, idx, shoe).map(Some)
    } else {
        Ok(None)
    }
}

fn qualifies(player: &PlayerState) -> bool {
    player.total() <= TARGET_TOTAL
}

/// Name the winner: the qualifying seat (total at most twenty-one) with
/// the highest total. Ties go to the earliest seat in turn order, which
/// the strict comparison below guarantees.
pub fn announce_winner(round: &RoundState) -> String {
    let mut best: Option<&PlayerState> = None;
    for player in round.players().iter().filter(|p| qualifies(p)) {
        if best.map_or(true, |b| player.total() > b.total()) {
            best = Some(player);
        }
    }
    match best {
        Some(winner) => format!("Winner: {} with {} points!", winner.name(), winner.total()),
        None => "No winner this round.".to_string(),
    }
}
