//! Core types used throughout the system
//!
//! These are fundamental type aliases used by all modules.
//! They give semantic meaning to the raw integers that flow between
//! the inventory, the fee tables and the ticket/receipt records.

/// Spot number within a category.
///
/// # Constraints:
/// - **Starts at 1**: assigned 1..=count at venue construction
/// - **Immutable**: a spot keeps its number for the lifetime of the venue
/// - **Per category**: `CarOrSUV #1` and `BusOrTruck #1` are distinct spots
pub type SpotNumber = u32;

/// Ticket number - strictly increasing from 1 within a numbering context
pub type TicketNumber = u64;

/// Receipt number - strictly increasing from 1 within a numbering context
pub type ReceiptNumber = u64;

/// Fee amount in whole currency units
pub type Fee = u64;

/// Billable hours (elapsed whole hours, partial hours rounded up, minimum 1)
pub type Hours = u64;
