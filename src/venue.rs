//! Venue - park/unpark against a spot inventory and a fee policy
//!
//! Spot state machine: `Available -> Occupied` on park,
//! `Occupied -> Available` on unpark. Nothing else moves a spot.
//!
//! # Atomicity
//! The inventory sits behind a mutex held for the whole check-and-mutate
//! sequence of park/unpark, including drawing the ticket/receipt number.
//! Every check runs before the first write, so a failed call changes
//! nothing and never consumes a number.

use crate::core_types::SpotNumber;
use crate::error::{ParkingError, Result};
use crate::fee::{FeePolicy, billable_hours};
use crate::inventory::{CategoryOccupancy, SpotInventory};
use crate::models::{SpotCategory, VenueKind};
use crate::registry::Numbering;
use crate::ticket::{Receipt, Ticket};
use chrono::NaiveDateTime;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
pub struct Venue {
    kind: VenueKind,
    policy: FeePolicy,
    inventory: Mutex<SpotInventory>,
    numbering: Arc<Numbering>,
}

impl Venue {
    /// Build a venue and stock its inventory.
    ///
    /// All categories are validated before any spot is created.
    pub(crate) fn new<I>(kind: VenueKind, spots: I, numbering: Arc<Numbering>) -> Result<Self>
    where
        I: IntoIterator<Item = (SpotCategory, SpotNumber)>,
    {
        let spots: Vec<(SpotCategory, SpotNumber)> = spots.into_iter().collect();
        if let Some(&(category, _)) = spots.iter().find(|(c, _)| !kind.supports(*c)) {
            tracing::warn!(%category, venue = %kind, "venue rejected: unsupported spot category");
            return Err(ParkingError::UnsupportedSpotCategory {
                category,
                venue: kind,
            });
        }

        let mut inventory = SpotInventory::new(kind);
        for (category, count) in spots {
            inventory.initialize(category, count)?;
        }
        tracing::info!(venue = %kind, categories = ?inventory.occupancy(), "venue created");

        Ok(Self {
            kind,
            policy: FeePolicy::new(kind),
            inventory: Mutex::new(inventory),
            numbering,
        })
    }

    // Mutations validate before writing, so a poisoned guard still
    // protects a consistent inventory.
    fn lock(&self) -> MutexGuard<'_, SpotInventory> {
        self.inventory.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub fn kind(&self) -> VenueKind {
        self.kind
    }

    #[inline]
    pub fn supported_categories(&self) -> &'static [SpotCategory] {
        self.kind.supported_categories()
    }

    #[inline]
    pub fn fee_policy(&self) -> &FeePolicy {
        &self.policy
    }

    /// Park a vehicle: take the lowest free spot and issue a ticket.
    ///
    /// # Errors
    /// - `UnsupportedSpotCategory` if this venue does not support `category`
    /// - `CapacityExhausted` if every spot of `category` is occupied
    pub fn park(&self, category: SpotCategory, entry: NaiveDateTime) -> Result<Ticket> {
        let mut inventory = self.lock();
        let (spot, number) = inventory
            .allocate(category, || self.numbering.next_ticket())
            .inspect_err(|e| {
                tracing::warn!(venue = %self.kind, %category, error = %e, "park rejected");
            })?;
        drop(inventory);
        let ticket = Ticket::new(number, spot.number, entry);

        tracing::info!(
            venue = %self.kind,
            %category,
            ticket = ticket.number(),
            spot = ticket.spot(),
            "parked"
        );
        Ok(ticket)
    }

    /// Unpark a vehicle: bill the stay, free the spot and issue a receipt.
    ///
    /// # Errors
    /// - `UnsupportedSpotCategory` if the fee policy does not bill `category`
    /// - `ExitBeforeEntry` if `exit` is earlier than the ticket's entry
    /// - `InvalidTicket` unless the ticket's spot is currently held by this
    ///   ticket (already used, re-issued spot, other venue, wrong category)
    pub fn unpark(
        &self,
        category: SpotCategory,
        ticket: &Ticket,
        exit: NaiveDateTime,
    ) -> Result<Receipt> {
        let receipt = self.settle(category, ticket, exit).inspect_err(|e| {
            tracing::warn!(
                venue = %self.kind,
                %category,
                ticket = ticket.number(),
                error = %e,
                "unpark rejected"
            );
        })?;

        tracing::info!(
            venue = %self.kind,
            %category,
            ticket = ticket.number(),
            receipt = receipt.number(),
            fee = receipt.fee(),
            "unparked"
        );
        Ok(receipt)
    }

    fn settle(
        &self,
        category: SpotCategory,
        ticket: &Ticket,
        exit: NaiveDateTime,
    ) -> Result<Receipt> {
        let tariff = self.policy.tariff(category)?;
        let hours = billable_hours(ticket.entry(), exit)?;
        let fee = tariff.fee(hours);
        tracing::debug!(%category, hours, fee, "fee calculated");

        let mut inventory = self.lock();
        inventory.release(category, ticket.spot(), ticket.number())?;
        Ok(Receipt::new(
            self.numbering.next_receipt(),
            ticket.entry(),
            exit,
            fee,
        ))
    }

    /// Free spots of `category`
    pub fn available(&self, category: SpotCategory) -> usize {
        self.lock().available(category)
    }

    /// Occupied spots of `category`
    pub fn occupied(&self, category: SpotCategory) -> usize {
        self.lock().occupied(category)
    }

    /// Total spots of `category`
    pub fn capacity(&self, category: SpotCategory) -> usize {
        self.lock().capacity(category)
    }

    /// Occupancy of every stocked category, taken under one lock
    pub fn occupancy(&self) -> Vec<CategoryOccupancy> {
        self.lock().occupancy()
    }
}
