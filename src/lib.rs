//! Venue Parking - spot allocation and tiered fee engine
//!
//! Venues (mall, stadium, airport) hand out the lowest free spot of a
//! category on park and bill the stay on unpark using per-venue tariffs.
//!
//! # Modules
//!
//! - [`core_types`] - Core type aliases (SpotNumber, TicketNumber, Fee, ...)
//! - [`models`] - SpotCategory, VenueKind and SpotRecord
//! - [`error`] - ParkingError
//! - [`fee`] - Tariff tables and fee calculation
//! - [`inventory`] - Per-category available/occupied partition
//! - [`ticket`] - Ticket and Receipt value objects
//! - [`venue`] - Atomic park/unpark
//! - [`registry`] - Numbering context and venue factory
//! - [`config`] - YAML application config
//! - [`logging`] - tracing subscriber setup
//! - [`csv_io`] - Event file loading
//! - [`replay`] - Drive venues from an event stream
//!
//! ```
//! use chrono::NaiveDate;
//! use venue_parking::{SpotCategory, VenueKind, create_venue};
//!
//! let venue = create_venue(VenueKind::Mall, [(SpotCategory::CarOrSUV, 2)]).unwrap();
//! let entry = NaiveDate::from_ymd_opt(2022, 5, 30).unwrap().and_hms_opt(14, 0, 0).unwrap();
//! let ticket = venue.park(SpotCategory::CarOrSUV, entry).unwrap();
//! let exit = entry + chrono::Duration::minutes(6 * 60 + 1);
//! let receipt = venue.unpark(SpotCategory::CarOrSUV, &ticket, exit).unwrap();
//! assert_eq!(receipt.fee(), 140);
//! ```

// Core types - must be first!
pub mod core_types;

pub mod error;
pub mod models;

// Engine
pub mod fee;
pub mod inventory;
pub mod registry;
pub mod ticket;
pub mod venue;

// Application
pub mod config;
pub mod csv_io;
pub mod logging;
pub mod replay;

// Convenient re-exports at crate root
pub use core_types::{Fee, Hours, ReceiptNumber, SpotNumber, TicketNumber};
pub use error::{ParkingError, Result};
pub use fee::{FeePolicy, Tariff, billable_hours};
pub use inventory::{CategoryOccupancy, SpotInventory};
pub use models::{SpotCategory, SpotRecord, VenueKind};
pub use registry::{Numbering, ParkingRegistry, create_venue};
pub use ticket::{Receipt, Ticket};
pub use venue::Venue;
