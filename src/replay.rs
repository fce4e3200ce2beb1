//! Replay - drive configured venues from a stream of park/unpark events
//!
//! The caller side of the engine: owns the venues by name and holds the
//! tickets it was handed, keyed by vehicle label, until the vehicle leaves.

use crate::config::VenueConfig;
use crate::csv_io::{EventAction, VenueEvent};
use crate::error::ParkingError;
use crate::registry::ParkingRegistry;
use crate::ticket::{Receipt, Ticket};
use crate::venue::Venue;
use anyhow::{Context, Result, anyhow};
use rustc_hash::FxHashMap;

/// Result of applying one event
#[derive(Debug)]
pub enum ReplayOutcome {
    Parked(Ticket),
    Unparked(Receipt),
    /// The engine refused the operation; nothing changed
    Rejected(ParkingError),
}

pub struct Replayer {
    registry: ParkingRegistry,
    venues: FxHashMap<String, Venue>,
    tickets: FxHashMap<String, Ticket>,
}

impl Replayer {
    pub fn new(registry: ParkingRegistry) -> Self {
        Self {
            registry,
            venues: FxHashMap::default(),
            tickets: FxHashMap::default(),
        }
    }

    /// Build every configured venue from the shared registry
    pub fn from_config(venues: &[VenueConfig]) -> Result<Self> {
        let mut replayer = Self::new(ParkingRegistry::new());
        for venue in venues {
            replayer.add_venue(venue)?;
        }
        Ok(replayer)
    }

    pub fn add_venue(&mut self, config: &VenueConfig) -> Result<()> {
        let venue = self
            .registry
            .create_venue_named(&config.kind, config.spots.clone())
            .with_context(|| format!("Failed to create venue '{}'", config.name))?;
        self.venues.insert(config.name.clone(), venue);
        Ok(())
    }

    pub fn venue(&self, name: &str) -> Option<&Venue> {
        self.venues.get(name)
    }

    pub fn registry(&self) -> &ParkingRegistry {
        &self.registry
    }

    /// Vehicles currently holding a ticket
    pub fn parked_vehicles(&self) -> usize {
        self.tickets.len()
    }

    /// Apply one event.
    ///
    /// Engine refusals come back as [`ReplayOutcome::Rejected`]; an unknown
    /// venue, a vehicle that is already parked, or an unpark for a vehicle
    /// holding no ticket are input errors and return `Err`.
    pub fn apply(&mut self, event: &VenueEvent) -> Result<ReplayOutcome> {
        let venue = self
            .venues
            .get(&event.venue)
            .ok_or_else(|| anyhow!("Unknown venue '{}'", event.venue))?;

        match event.action {
            EventAction::Park => {
                if self.tickets.contains_key(&event.vehicle) {
                    return Err(anyhow!("Vehicle '{}' is already parked", event.vehicle));
                }
                match venue.park(event.category, event.at) {
                    Ok(ticket) => {
                        self.tickets.insert(event.vehicle.clone(), ticket.clone());
                        Ok(ReplayOutcome::Parked(ticket))
                    }
                    Err(e) => Ok(ReplayOutcome::Rejected(e)),
                }
            }
            EventAction::Unpark => {
                let ticket = self
                    .tickets
                    .get(&event.vehicle)
                    .ok_or_else(|| anyhow!("No ticket held for vehicle '{}'", event.vehicle))?;
                match venue.unpark(event.category, ticket, event.at) {
                    Ok(receipt) => {
                        self.tickets.remove(&event.vehicle);
                        Ok(ReplayOutcome::Unparked(receipt))
                    }
                    Err(e) => Ok(ReplayOutcome::Rejected(e)),
                }
            }
        }
    }
}
