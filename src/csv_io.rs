//! CSV I/O - Load parking events for replay
//!
//! Event file layout (header required):
//!
//! ```text
//! venue,action,category,ref,timestamp
//! city_mall,park,motorcycle_or_scooter,bike-1,2022-05-29 14:04:07
//! city_mall,unpark,motorcycle_or_scooter,bike-1,2022-05-29 17:44:07
//! ```
//!
//! `ref` is a caller-side label for the vehicle: a park stores its ticket
//! under the label, the matching unpark presents it again.

use crate::models::SpotCategory;
use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EVENTS_CSV: &str = "fixtures/events.csv";

pub const ACTION_PARK: &str = "park";
pub const ACTION_UNPARK: &str = "unpark";

/// `YYYY-MM-DD HH:MM:SS`
pub const CSV_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    Park,
    Unpark,
}

/// One line of the event file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueEvent {
    pub venue: String,
    pub action: EventAction,
    pub category: SpotCategory,
    pub vehicle: String,
    pub at: NaiveDateTime,
}

/// Parse one data line (`line_no` is 1-based, for messages)
pub fn parse_event_line(line: &str, line_no: usize) -> Result<VenueEvent> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() < 5 {
        bail!(
            "Expected 5 columns at line {}, found {}",
            line_no,
            parts.len()
        );
    }

    let action = match parts[1] {
        ACTION_PARK => EventAction::Park,
        ACTION_UNPARK => EventAction::Unpark,
        other => bail!("Invalid action '{}' at line {}", other, line_no),
    };
    let category: SpotCategory = parts[2]
        .parse()
        .with_context(|| format!("Invalid category at line {}", line_no))?;
    let at = NaiveDateTime::parse_from_str(parts[4], CSV_TIMESTAMP_FORMAT)
        .with_context(|| format!("Invalid timestamp at line {}", line_no))?;

    Ok(VenueEvent {
        venue: parts[0].to_string(),
        action,
        category,
        vehicle: parts[3].to_string(),
        at,
    })
}

/// Load all events from a CSV file, skipping the header and blank lines
pub fn load_events(path: impl AsRef<Path>) -> Result<Vec<VenueEvent>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut events = Vec::new();
    for (line_num, line) in reader.lines().enumerate().skip(1) {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        events.push(parse_event_line(&line, line_num + 1)?);
    }
    tracing::info!(count = events.len(), path = %path.display(), "events loaded");
    Ok(events)
}
