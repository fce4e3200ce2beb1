//! ParkingRegistry - numbering context and venue factory
//!
//! Ticket and receipt numbers are scoped to a registry: every venue created
//! by the same registry draws from the same two counters, so numbers stay
//! unique and strictly increasing across all of them. Dropping the registry
//! (and its venues) ends the numbering scope.

use crate::core_types::{ReceiptNumber, SpotNumber, TicketNumber};
use crate::error::Result;
use crate::models::{SpotCategory, VenueKind};
use crate::venue::Venue;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket/receipt counters shared by the venues of one registry
#[derive(Debug, Default)]
pub struct Numbering {
    last_ticket: AtomicU64,
    last_receipt: AtomicU64,
}

impl Numbering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get next ticket number (increments counter)
    ///
    /// Venues only call this after the park has been validated, while
    /// holding their inventory lock.
    #[inline]
    pub(crate) fn next_ticket(&self) -> TicketNumber {
        self.last_ticket.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Get next receipt number (increments counter)
    #[inline]
    pub(crate) fn next_receipt(&self) -> ReceiptNumber {
        self.last_receipt.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Tickets issued so far
    #[inline]
    pub fn tickets_issued(&self) -> u64 {
        self.last_ticket.load(Ordering::Acquire)
    }

    /// Receipts issued so far
    #[inline]
    pub fn receipts_issued(&self) -> u64 {
        self.last_receipt.load(Ordering::Acquire)
    }
}

/// Creates venues that share one numbering context
#[derive(Debug, Clone, Default)]
pub struct ParkingRegistry {
    numbering: Arc<Numbering>,
}

impl ParkingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a venue of `kind` stocked with `spots` (category -> count).
    ///
    /// # Errors
    /// `UnsupportedSpotCategory` if any category is outside the kind's
    /// supported set; nothing is created in that case
    pub fn create_venue<I>(&self, kind: VenueKind, spots: I) -> Result<Venue>
    where
        I: IntoIterator<Item = (SpotCategory, SpotNumber)>,
    {
        Venue::new(kind, spots, Arc::clone(&self.numbering))
    }

    /// Like [`create_venue`](Self::create_venue), resolving the kind by name.
    ///
    /// # Errors
    /// `UnknownVenueKind` if `kind` names no venue kind, otherwise as
    /// [`create_venue`](Self::create_venue)
    pub fn create_venue_named<I>(&self, kind: &str, spots: I) -> Result<Venue>
    where
        I: IntoIterator<Item = (SpotCategory, SpotNumber)>,
    {
        self.create_venue(kind.parse()?, spots)
    }

    #[inline]
    pub fn numbering(&self) -> &Numbering {
        &self.numbering
    }
}

/// Build a standalone venue with its own numbering context
///
/// # Errors
/// `UnsupportedSpotCategory` if any category is outside the kind's supported set
pub fn create_venue<I>(kind: VenueKind, spots: I) -> Result<Venue>
where
    I: IntoIterator<Item = (SpotCategory, SpotNumber)>,
{
    ParkingRegistry::new().create_venue(kind, spots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParkingError;

    #[test]
    fn test_numbering_starts_at_one() {
        let numbering = Numbering::new();
        assert_eq!(numbering.tickets_issued(), 0);
        assert_eq!(numbering.next_ticket(), 1);
        assert_eq!(numbering.next_ticket(), 2);
        assert_eq!(numbering.next_receipt(), 1);
        assert_eq!(numbering.tickets_issued(), 2);
        assert_eq!(numbering.receipts_issued(), 1);
    }

    #[test]
    fn test_create_venue_named() {
        let registry = ParkingRegistry::new();
        let venue = registry
            .create_venue_named("airport", [(SpotCategory::CarOrSUV, 5)])
            .unwrap();
        assert_eq!(venue.kind(), VenueKind::Airport);

        let err = registry
            .create_venue_named("harbour", [(SpotCategory::CarOrSUV, 5)])
            .unwrap_err();
        assert_eq!(err, ParkingError::UnknownVenueKind("harbour".to_string()));
    }

    #[test]
    fn test_create_venue_rejects_unsupported() {
        let err = create_venue(
            VenueKind::Stadium,
            [(SpotCategory::MotorcycleOrScooter, 10), (SpotCategory::BusOrTruck, 2)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParkingError::UnsupportedSpotCategory {
                category: SpotCategory::BusOrTruck,
                venue: VenueKind::Stadium,
            }
        );
    }
}
