//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface
//! output across CLI commands: error and warning lines, the table banner,
//! and the separators between turns and the final results block.

use std::io::Write;

const RULE_WIDTH: usize = 60;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Opening banner shown once at the start of a round
pub fn banner(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "\n{}", "*".repeat(RULE_WIDTH))?;
    writeln!(out, "TWENTY-ONE TABLE")?;
    writeln!(out, "{}", "*".repeat(RULE_WIDTH))
}

/// Horizontal rule between one seat's turn and the next
pub fn turn_separator(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "\n{}", "-".repeat(RULE_WIDTH))
}

/// Header above the final results table
pub fn results_header(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "\n{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "GAME OVER | FINAL RESULTS")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

/// Closing rule under the winner announcement
pub fn results_footer(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}
