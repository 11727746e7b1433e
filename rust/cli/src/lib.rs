//! # Twentyone CLI Library
//!
//! Command-line interface for the twentyone table: a simplified game of
//! twenty-one where a human seat plays against three bot seats and the
//! human's free-text input is interpreted by an intent classifier.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["twentyone", "rng", "--seed", "42"];
//! let code = twentyone_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one round against the three bot seats
//! - `cfg`: Display current configuration settings
//! - `rng`: Sample card draws to verify RNG properties
//! - `doctor`: Run environment diagnostics

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
mod config;
mod error;
pub mod io_utils;
pub mod ui;

use cli::{Commands, TwentyoneCli};

use commands::{
    handle_cfg_command, handle_doctor_command, handle_play_command, handle_rng_command,
};

use twentyone_nlu::IntentClassifier;
use twentyone_nlu::openai::OpenAiBackend;

pub use error::CliError;

/// Build the intent classifier once at startup. The LLM tiers are
/// enabled only when the credential is present, the config switch is on,
/// and the user did not pass `--no-llm`; in every other case the
/// classifier runs on keyword heuristics and the reason is reported to
/// stderr. No per-call credential lookups happen after this point.
fn build_classifier(no_llm: bool, cfg: &config::Config, err: &mut dyn Write) -> IntentClassifier {
    if no_llm || !cfg.llm {
        return IntentClassifier::heuristics_only();
    }
    match config::api_key() {
        Some(key) => match OpenAiBackend::new(key, cfg.model.clone()) {
            Ok(backend) => IntentClassifier::new(Some(Box::new(backend))),
            Err(e) => {
                let _ = ui::display_warning(
                    err,
                    &format!(
                        "Could not build LLM backend ({}); falling back to keyword heuristics.",
                        e
                    ),
                );
                IntentClassifier::heuristics_only()
            }
        },
        None => {
            let _ = ui::display_warning(
                err,
                "OPENAI_API_KEY not set; interpreting input with keyword heuristics.",
            );
            IntentClassifier::heuristics_only()
        }
    }
}

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "cfg", "rng", "doctor"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = TwentyoneCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    // Print clap error first
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Twentyone CLI").is_err()
                        || writeln!(err, "Usage: twentyone <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return 2;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return 2;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: twentyone --help").is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Cfg => match handle_cfg_command(out, err) {
                Ok(()) => 0,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return 2;
                    }
                    2
                }
            },
            Commands::Play { seed, log, no_llm } => {
                let resolved = match config::load_with_sources() {
                    Ok(r) => r,
                    Err(e) => {
                        if writeln!(err, "Error: Invalid configuration: {}", e).is_err() {
                            return 2;
                        }
                        return 2;
                    }
                };
                let cfg = resolved.config;
                let seed = seed.or(cfg.seed);
                let classifier = build_classifier(no_llm, &cfg, err);

                // Use stdin for real input (supports both TTY and piped stdin)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                match handle_play_command(seed, log, &classifier, out, err, &mut stdin_lock) {
                    Ok(()) => 0,
                    Err(e) => {
                        if writeln!(err, "Error: {}", e).is_err() {
                            return 2;
                        }
                        2
                    }
                }
            }
            Commands::Rng { seed } => match handle_rng_command(seed, out) {
                Ok(()) => 0,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return 2;
                    }
                    2
                }
            },
            Commands::Doctor => match handle_doctor_command(out, err) {
                Ok(()) => 0,
                Err(_) => 2,
            },
        },
    }
}
