//! Parking Error Types
//!
//! Every failure of the allocation/fee engine is reported through
//! [`ParkingError`]. All errors are raised before any state is touched,
//! so a failed operation leaves the venue exactly as it was.

use crate::core_types::{SpotNumber, TicketNumber};
use crate::models::{SpotCategory, VenueKind};
use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParkingError {
    // === Lookup Errors ===
    #[error("Venue is [{0}] not having parking")]
    UnknownVenueKind(String),

    #[error("Unknown spot category: {0}")]
    UnknownSpotCategory(String),

    // === Venue Errors ===
    #[error("Spot [{category}] is not available in the venue [{venue}]")]
    UnsupportedSpotCategory {
        category: SpotCategory,
        venue: VenueKind,
    },

    #[error("Parking is Full")]
    CapacityExhausted(SpotCategory),

    // === Ticket Errors ===
    #[error("Invalid ticket {ticket:03}: spot [{category}] #{spot} is not held by it")]
    InvalidTicket {
        category: SpotCategory,
        spot: SpotNumber,
        ticket: TicketNumber,
    },

    #[error("Exit time {exit} is before entry time {entry}")]
    ExitBeforeEntry {
        entry: NaiveDateTime,
        exit: NaiveDateTime,
    },
}

pub type Result<T> = std::result::Result<T, ParkingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message() {
        let err = ParkingError::CapacityExhausted(SpotCategory::MotorcycleOrScooter);
        assert_eq!(err.to_string(), "Parking is Full");
    }

    #[test]
    fn test_unsupported_message() {
        let err = ParkingError::UnsupportedSpotCategory {
            category: SpotCategory::BusOrTruck,
            venue: VenueKind::Stadium,
        };
        assert_eq!(
            err.to_string(),
            "Spot [bus_or_truck] is not available in the venue [stadium]"
        );
    }
}
