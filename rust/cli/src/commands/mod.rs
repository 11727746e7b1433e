//! Command handler modules for the twentyone CLI.
//!
//! Each subcommand is implemented in its own module file with a
//! consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) and, for
//!   interactive commands, the input stream (`&mut dyn BufRead`) passed
//!   as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod doctor;
mod play;
mod rng;

pub use cfg::handle_cfg_command;
pub use doctor::handle_doctor_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;
