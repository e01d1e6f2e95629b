//! Offline dwell-time simulation.
//!
//! Reads JSON lines of `{userId, latitude, longitude, timestamp}` and feeds
//! them through a fresh tracker in file order, printing one outcome per line.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use geoquiz_core::{Config, LocationReport, LocationTracker, TrackOutcome, TrackerConfig};
use serde::{Deserialize, Serialize};

#[derive(Args)]
pub struct ReplayArgs {
    /// JSON-lines file of timestamped reports (reads stdin when omitted)
    pub file: Option<PathBuf>,
    /// Override tracker.proximity_meters
    #[arg(long)]
    pub proximity: Option<f64>,
    /// Override tracker.dwell_minutes
    #[arg(long)]
    pub dwell: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TimedReport {
    #[serde(flatten)]
    report: LocationReport,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplayEntry {
    line: usize,
    user_id: String,
    timestamp: DateTime<Utc>,
    outcome: TrackOutcome,
}

fn replay(input: &str, config: TrackerConfig) -> Result<Vec<ReplayEntry>, Box<dyn std::error::Error>> {
    let tracker = LocationTracker::in_memory(config);
    let mut entries = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        let timed: TimedReport =
            serde_json::from_str(line).map_err(|e| format!("line {line_no}: {e}"))?;
        let outcome = tracker.record(&timed.report, timed.timestamp);
        entries.push(ReplayEntry {
            line: line_no,
            user_id: timed.report.user_id,
            timestamp: timed.timestamp,
            outcome,
        });
    }

    Ok(entries)
}

pub fn run(args: ReplayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default().tracker;
    if let Some(proximity) = args.proximity {
        config.proximity_meters = proximity;
    }
    if let Some(dwell) = args.dwell {
        config.dwell_minutes = dwell;
    }

    let input = super::read_input(args.file.as_deref())?;
    for entry in replay(&input, config)? {
        println!("{}", serde_json::to_string(&entry)?);
    }
    Ok(())
}
