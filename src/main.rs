//! Venue Parking - event replay
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│  Venues  │───▶│  Replay  │───▶│  Output  │
//! │  (YAML)  │    │(registry)│    │  (CSV)   │    │ (stdout) │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! Usage: `venue_parking [--env dev] [--input fixtures/events.csv] [--json]`

use anyhow::Result;
use venue_parking::config::AppConfig;
use venue_parking::csv_io::{EVENTS_CSV, load_events};
use venue_parking::replay::{ReplayOutcome, Replayer};

fn get_arg(names: &[&str]) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| names.contains(&a.as_str()))
        .and_then(|i| args.get(i + 1).cloned())
}

fn get_env() -> String {
    get_arg(&["--env", "-e"]).unwrap_or_else(|| "dev".to_string())
}

fn get_input() -> String {
    get_arg(&["--input"]).unwrap_or_else(|| EVENTS_CSV.to_string())
}

fn use_json_output() -> bool {
    std::env::args().any(|a| a == "--json")
}

fn main() -> Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = venue_parking::logging::init_logging(&app_config);
    let json = use_json_output();

    tracing::info!(
        "Starting venue parking replay in {} mode (build {})",
        env,
        env!("GIT_HASH")
    );

    let mut replayer = Replayer::from_config(&app_config.venues)?;
    let events = load_events(get_input())?;

    let mut rejected = 0usize;
    for event in &events {
        match replayer.apply(event) {
            Ok(ReplayOutcome::Parked(ticket)) => {
                if json {
                    println!("{}", serde_json::to_string(&ticket)?);
                } else {
                    println!("{}\n", ticket);
                }
            }
            Ok(ReplayOutcome::Unparked(receipt)) => {
                if json {
                    println!("{}", serde_json::to_string(&receipt)?);
                } else {
                    println!("{}\n", receipt);
                }
            }
            Ok(ReplayOutcome::Rejected(e)) => {
                rejected += 1;
                println!(
                    "[{}] {} {} rejected: {}\n",
                    event.venue, event.vehicle, event.category, e
                );
            }
            Err(e) => {
                rejected += 1;
                tracing::warn!("Skipping event for vehicle {}: {:#}", event.vehicle, e);
            }
        }
    }

    let numbering = replayer.registry().numbering();
    tracing::info!(
        events = events.len(),
        rejected,
        tickets = numbering.tickets_issued(),
        receipts = numbering.receipts_issued(),
        still_parked = replayer.parked_vehicles(),
        "Replay finished"
    );
    Ok(())
}
