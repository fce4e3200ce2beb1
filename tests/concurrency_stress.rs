//! Concurrent park/unpark against shared venues.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use venue_parking::{ParkingError, ParkingRegistry, SpotCategory, VenueKind};

const MOTO: SpotCategory = SpotCategory::MotorcycleOrScooter;

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 5, 29)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

#[test]
fn test_last_spot_goes_to_exactly_one_caller() {
    const SPOTS: u32 = 50;
    const THREADS: usize = 8;
    const ATTEMPTS: usize = 20;

    let venue = Arc::new(
        ParkingRegistry::new()
            .create_venue(VenueKind::Mall, [(MOTO, SPOTS)])
            .unwrap(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let venue = Arc::clone(&venue);
            thread::spawn(move || {
                let mut won = Vec::new();
                let mut full = 0;
                for _ in 0..ATTEMPTS {
                    match venue.park(MOTO, t0()) {
                        Ok(ticket) => won.push(ticket),
                        Err(ParkingError::CapacityExhausted(_)) => full += 1,
                        Err(e) => panic!("unexpected error: {e}"),
                    }
                }
                (won, full)
            })
        })
        .collect();

    let mut tickets = Vec::new();
    let mut full = 0;
    for handle in handles {
        let (won, rejected) = handle.join().unwrap();
        tickets.extend(won);
        full += rejected;
    }

    assert_eq!(tickets.len(), SPOTS as usize);
    assert_eq!(full, THREADS * ATTEMPTS - SPOTS as usize);

    let spots: HashSet<u32> = tickets.iter().map(|t| t.spot()).collect();
    assert_eq!(spots, (1..=SPOTS).collect());

    // Failed parks never consumed a number
    let numbers: HashSet<u64> = tickets.iter().map(|t| t.number()).collect();
    assert_eq!(numbers, (1..=SPOTS as u64).collect());
    assert_eq!(venue.available(MOTO), 0);
}

#[test]
fn test_churn_keeps_partition_and_numbering() {
    const THREADS: usize = 6;
    const ROUNDS: usize = 200;

    let registry = ParkingRegistry::new();
    let mall = Arc::new(registry.create_venue(VenueKind::Mall, [(MOTO, 4)]).unwrap());
    let airport = Arc::new(
        registry
            .create_venue(VenueKind::Airport, [(MOTO, 4)])
            .unwrap(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let venue = if i % 2 == 0 {
                Arc::clone(&mall)
            } else {
                Arc::clone(&airport)
            };
            thread::spawn(move || {
                let mut tickets = Vec::new();
                let mut receipts = Vec::new();
                for _ in 0..ROUNDS {
                    if let Ok(ticket) = venue.park(MOTO, t0()) {
                        let receipt = venue
                            .unpark(MOTO, &ticket, t0() + Duration::minutes(90))
                            .unwrap();
                        tickets.push(ticket.number());
                        receipts.push(receipt.number());
                    }
                }
                (tickets, receipts)
            })
        })
        .collect();

    let mut tickets = Vec::new();
    let mut receipts = Vec::new();
    for handle in handles {
        let (t, r) = handle.join().unwrap();
        // Numbers observed by one thread are strictly increasing
        assert!(t.windows(2).all(|w| w[0] < w[1]));
        assert!(r.windows(2).all(|w| w[0] < w[1]));
        tickets.extend(t);
        receipts.extend(r);
    }

    let issued = tickets.len() as u64;
    tickets.sort_unstable();
    receipts.sort_unstable();
    assert_eq!(tickets, (1..=issued).collect::<Vec<_>>());
    assert_eq!(receipts, (1..=issued).collect::<Vec<_>>());
    assert_eq!(registry.numbering().tickets_issued(), issued);

    for venue in [&mall, &airport] {
        assert_eq!(venue.available(MOTO), 4);
        assert_eq!(venue.occupied(MOTO), 0);
    }
}
