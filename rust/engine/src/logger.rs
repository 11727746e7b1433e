use serde::{Deserialize, Serialize};

use crate::round::RoundState;

/// Final standing of one seat, as written to the round log.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatRecord {
    /// Seat name as shown at the table
    pub name: String,
    /// Cards in the order they were dealt
    pub cards: Vec<u8>,
    /// Hand total at the end of the round
    pub total: u32,
    /// Whether the seat went over twenty-one
    pub bust: bool,
}

/// Complete record of one finished round, serialized as one JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// RNG seed the round ran with (enables deterministic replay)
    pub seed: Option<u64>,
    /// Every seat in turn order
    pub seats: Vec<SeatRecord>,
    /// Winner announcement line, verbatim
    pub winner: String,
    /// Timestamp when the round finished (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Dealer narration in the order it was spoken
    #[serde(default)]
    pub narration: Vec<String>,
}

impl RoundRecord {
    pub fn from_round(round: &RoundState, seed: Option<u64>, winner: &str) -> Self {
        let seats = round
            .players()
            .iter()
            .map(|p| SeatRecord {
                name: p.name().to_string(),
                cards: p.hand().to_vec(),
                total: p.total(),
                bust: p.is_bust(),
            })
            .collect();
        Self {
            seed,
            seats,
            winner: winner.to_string(),
            ts: None,
            narration: round.dealer_log().to_vec(),
        }
    }
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: BufWriter<File>,
}

impl RoundLogger {
    /// Open the log for appending, creating the file and any missing
    /// parent directories on first use.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
