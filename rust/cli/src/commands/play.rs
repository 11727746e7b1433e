//! # Play Command
//!
//! One interactive round of twenty-one: the human seat against three
//! bot seats, in fixed turn order.
//!
//! The human's decisions arrive as free text and go through the intent
//! classifier; the bots consult their decision policies. The engine's
//! turn guards decide when each turn is over, and the dealer narrates
//! every card into the round log.
//!
//! ## Features
//!
//! - Natural-language hit/stand input ("deal me one", "I'll pass")
//! - Reproducible rounds via `--seed` (shoe and bot policies)
//! - Optional JSONL round record via `--log FILE`
//! - EOF on stdin is read as a stand, so piped input cannot wedge a turn

use std::io::{BufRead, Write};

use twentyone_ai::{DecisionPolicy, create_policy};
use twentyone_engine::dealer;
use twentyone_engine::logger::{RoundLogger, RoundRecord};
use twentyone_engine::player::{Action, Controller, PlayerState};
use twentyone_engine::round::{Phase, RoundState};
use twentyone_engine::shoe::Shoe;
use twentyone_engine::turn::{StopReason, TurnStatus, turn_status};
use twentyone_nlu::{Intent, IntentClassifier};

use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui;

/// Bot seats in turn order, after the human seat.
pub const BOT_NAMES: [&str; 3] = ["AI_Player_1", "AI_Player_2", "AI_Player_3"];
const HUMAN_NAME: &str = "You";

/// Handle the play command: one full round at the table.
///
/// # Arguments
///
/// * `seed` - RNG seed for shoe and bot policies (default: random)
/// * `log_path` - Optional JSONL file the finished round is appended to
/// * `classifier` - Intent classifier, built once at startup
/// * `out` - Output stream for the table display
/// * `err` - Error stream for warnings (e.g. a failed log write)
/// * `stdin` - Input stream for the human seat's decisions
pub fn handle_play_command(
    seed: Option<u64>,
    log_path: Option<String>,
    classifier: &IntentClassifier,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);

    ui::banner(out)?;

    let mut round = RoundState::new();
    writeln!(out, "\nSetting up players...")?;
    round
        .seat_players(HUMAN_NAME, &BOT_NAMES)
        .map_err(|e| CliError::Engine(e.to_string()))?;
    writeln!(
        out,
        "Players: {}, {}",
        HUMAN_NAME,
        BOT_NAMES.join(", ")
    )?;

    let mut shoe = Shoe::new_with_seed(seed);
    // One policy per bot seat, seeds offset so the bots do not mirror
    // each other's coin flips.
    let mut policies: Vec<Box<dyn DecisionPolicy>> = (0..BOT_NAMES.len())
        .map(|i| create_policy("random", seed.wrapping_add(i as u64 + 1)))
        .collect();

    while round.phase() == Phase::Playing {
        play_turn(&mut round, &mut shoe, &mut policies, classifier, out, stdin)?;
        let phase = round
            .advance_turn()
            .map_err(|e| CliError::Engine(e.to_string()))?;
        if phase == Phase::Playing {
            ui::turn_separator(out)?;
        }
    }

    let winner = dealer::announce_winner(&round);
    render_results(&round, &winner, out)?;

    if let Some(path) = log_path {
        let record = RoundRecord::from_round(&round, Some(seed), &winner);
        if let Err(e) = append_record(&path, &record) {
            ui::display_warning(err, &format!("Could not write round log: {}", e))?;
        }
    }

    writeln!(out, "\nThanks for playing!")?;
    Ok(())
}

fn append_record(path: &str, record: &RoundRecord) -> std::io::Result<()> {
    let mut logger = RoundLogger::append(path)?;
    logger.write(record)
}

/// Run the current seat's turn to completion.
fn play_turn(
    round: &mut RoundState,
    shoe: &mut Shoe,
    policies: &mut [Box<dyn DecisionPolicy>],
    classifier: &IntentClassifier,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let idx = round.current_index();
    loop {
        let player = round
            .player(idx)
            .ok_or_else(|| CliError::Engine(format!("no player at seat {}", idx)))?;
        match turn_status(player) {
            TurnStatus::NeedsFirstCard => {
                dealer::open_turn(round, shoe).map_err(|e| CliError::Engine(e.to_string()))?;
                print_last_narration(round, out)?;
            }
            TurnStatus::Deciding { total, cards_drawn } => {
                let decision = match player.controller() {
                    Controller::Human => {
                        show_human_hand(player, out)?;
                        write!(out, "Say what you want (e.g., 'deal me one', 'I'll pass'): ")?;
                        out.flush()?;
                        match read_stdin_line(stdin) {
                            // EOF ends the turn conservatively.
                            None => Action::Stand,
                            Some(text) => match classifier.classify(&text) {
                                Intent::Hit => Action::Hit,
                                Intent::Stand => Action::Stand,
                            },
                        }
                    }
                    Controller::Bot => {
                        // The human sits at seat 0; policies are indexed by bot seat.
                        let hit = policies[idx - 1].decide(total, cards_drawn);
                        writeln!(
                            out,
                            "\n{}: {} (random).",
                            player.name(),
                            if hit { "Hit" } else { "Stand" }
                        )?;
                        if hit { Action::Hit } else { Action::Stand }
                    }
                };
                match decision {
                    Action::Hit => {
                        dealer::deal_card(round, idx, shoe)
                            .map_err(|e| CliError::Engine(e.to_string()))?;
                        print_last_narration(round, out)?;
                    }
                    Action::Stand => {
                        if player_is_human(round, idx) {
                            writeln!(out, "You stand.")?;
                        }
                        break;
                    }
                }
            }
            TurnStatus::Stopped(reason) => {
                render_stop(player, reason, out)?;
                break;
            }
        }
    }
    Ok(())
}

fn player_is_human(round: &RoundState, idx: usize) -> bool {
    round
        .player(idx)
        .map(|p| p.controller() == Controller::Human)
        .unwrap_or(false)
}

fn show_human_hand(player: &PlayerState, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "\nYour current total: {}", player.total())?;
    writeln!(out, "Your cards: {:?}", player.hand())?;
    Ok(())
}

fn print_last_narration(round: &RoundState, out: &mut dyn Write) -> Result<(), CliError> {
    if let Some(line) = round.dealer_log().last() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn render_stop(
    player: &PlayerState,
    reason: StopReason,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match player.controller() {
        Controller::Human => {
            show_human_hand(player, out)?;
            match reason {
                StopReason::CardLimit => {
                    writeln!(out, "You've drawn 3 cards (maximum). Your turn ends.")?;
                }
                StopReason::TwentyOne => {
                    writeln!(out, "Blackjack!")?;
                }
                StopReason::Bust => {
                    writeln!(out, "Over 21!")?;
                }
                StopReason::Stand => {
                    writeln!(out, "You stand.")?;
                }
            }
        }
        Controller::Bot => match reason {
            StopReason::CardLimit => {
                writeln!(out, "\n{} reached 3 cards. Turn ends.", player.name())?;
            }
            StopReason::TwentyOne => {
                writeln!(out, "\n{}: Blackjack! (Total: {})", player.name(), player.total())?;
            }
            StopReason::Bust => {
                writeln!(out, "\n{}: Busted! (Total: {})", player.name(), player.total())?;
            }
            StopReason::Stand => {
                writeln!(out, "\n{}: Stand.", player.name())?;
            }
        },
    }
    Ok(())
}

fn render_results(
    round: &RoundState,
    winner: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    ui::results_header(out)?;
    for player in round.players() {
        let status = if player.is_bust() { "✗ BUST" } else { "✓" };
        writeln!(
            out,
            "{}: {:?} = {} {}",
            player.name(),
            player.hand(),
            player.total(),
            status
        )?;
    }
    writeln!(out, "\n{}", winner)?;
    ui::results_footer(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_play(seed: u64, input: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let classifier = IntentClassifier::heuristics_only();
        handle_play_command(
            Some(seed),
            None,
            &classifier,
            &mut out,
            &mut err,
            &mut stdin,
        )
        .expect("play round");
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_always_stand_round_reaches_results() {
        let (output, _) = run_play(7, "stand\n");
        assert!(output.contains("TWENTY-ONE TABLE"));
        assert!(output.contains("GAME OVER | FINAL RESULTS"));
        assert!(
            output.contains("Winner:") || output.contains("No winner this round."),
            "results must include a verdict: {}",
            output
        );
        assert!(output.contains("Thanks for playing!"));
        for name in ["You", "AI_Player_1", "AI_Player_2", "AI_Player_3"] {
            assert!(output.contains(name), "missing {} in {}", name, output);
        }
    }

    #[test]
    fn test_natural_language_hit_then_stand() {
        let (output, _) = run_play(3, "deal me one\ni'm good\n");
        // Opening card plus one requested hit, unless the guards stopped
        // the turn first.
        assert!(output.contains("Dealer: Dealt"));
        assert!(output.contains("GAME OVER | FINAL RESULTS"));
    }

    #[test]
    fn test_eof_input_is_a_stand() {
        let (output, _) = run_play(11, "");
        assert!(output.contains("GAME OVER | FINAL RESULTS"));
        assert!(output.contains("Thanks for playing!"));
    }

    #[test]
    fn test_same_seed_same_transcript() {
        let (a, _) = run_play(42, "stand\n");
        let (b, _) = run_play(42, "stand\n");
        assert_eq!(a, b, "seeded rounds must be reproducible");
    }

    #[test]
    fn test_round_log_written_when_requested() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.jsonl");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(b"stand\n".to_vec());
        let classifier = IntentClassifier::heuristics_only();
        handle_play_command(
            Some(5),
            Some(path.to_string_lossy().into_owned()),
            &classifier,
            &mut out,
            &mut err,
            &mut stdin,
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let record: RoundRecord = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        assert_eq!(record.seed, Some(5));
        assert_eq!(record.seats.len(), 4);
        assert!(err.is_empty(), "log write should not warn");
    }

    #[test]
    fn test_unwritable_log_warns_but_round_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        // A directory path cannot be opened as a file.
        let path = dir.path().to_string_lossy().into_owned();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(b"stand\n".to_vec());
        let classifier = IntentClassifier::heuristics_only();
        let result = handle_play_command(
            Some(5),
            Some(path),
            &classifier,
            &mut out,
            &mut err,
            &mut stdin,
        );
        assert!(result.is_ok(), "log failure must not fail the round");
        let warnings = String::from_utf8(err).unwrap();
        assert!(warnings.contains("WARNING"));
    }
}
