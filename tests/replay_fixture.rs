//! Replays the bundled fixture against the dev config.

use venue_parking::ParkingError;
use venue_parking::config::AppConfig;
use venue_parking::csv_io::{EVENTS_CSV, load_events};
use venue_parking::replay::{ReplayOutcome, Replayer};

#[test]
fn test_replay_dev_fixture() {
    let config = AppConfig::load("dev").unwrap();
    let mut replayer = Replayer::from_config(&config.venues).unwrap();
    let events = load_events(EVENTS_CSV).unwrap();

    let mut fees = Vec::new();
    let mut rejections = Vec::new();
    for event in &events {
        match replayer.apply(event).unwrap() {
            ReplayOutcome::Parked(_) => {}
            ReplayOutcome::Unparked(receipt) => fees.push(receipt.fee()),
            ReplayOutcome::Rejected(e) => rejections.push(e),
        }
    }

    assert_eq!(fees, vec![10, 40, 140, 100, 390, 580, 160, 400]);
    assert_eq!(rejections.len(), 2);
    assert!(matches!(rejections[0], ParkingError::CapacityExhausted(_)));
    assert!(matches!(rejections[1], ParkingError::UnsupportedSpotCategory { .. }));

    // moto-2 is still parked at corner_mall
    assert_eq!(replayer.parked_vehicles(), 1);
    let numbering = replayer.registry().numbering();
    assert_eq!(numbering.tickets_issued(), 9);
    assert_eq!(numbering.receipts_issued(), 8);
}
