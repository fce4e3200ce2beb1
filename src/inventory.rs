//! SpotInventory - per-category partition of spots into available/occupied
//!
//! # Key Design:
//! - Available spots live in a `BTreeSet`, so the lowest free number is
//!   always `first()` (deterministic first-fit allocation)
//! - Occupied spots live in an `FxHashMap` keyed by spot, holding the number
//!   of the ticket issued for it; a release must present that same number
//! - Spots are created once by [`SpotInventory::initialize`] and afterwards
//!   only move between the two sets
//!
//! # Complexity:
//! | Operation | Time |
//! |-----------|------|
//! | Allocate | O(log n) |
//! | Release | O(log n) |
//! | Counts | O(1) |

use crate::core_types::{SpotNumber, TicketNumber};
use crate::error::{ParkingError, Result};
use crate::models::{SpotCategory, SpotRecord, VenueKind};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeSet;

/// Spots of one category
#[derive(Debug, Default)]
struct SpotPool {
    available: BTreeSet<SpotNumber>,
    /// spot -> ticket holding it
    occupied: FxHashMap<SpotNumber, TicketNumber>,
}

impl SpotPool {
    fn with_capacity(count: SpotNumber) -> Self {
        Self {
            available: (1..=count).collect(),
            occupied: FxHashMap::default(),
        }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.available.len() + self.occupied.len()
    }
}

/// Occupancy snapshot of one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOccupancy {
    pub category: SpotCategory,
    pub capacity: usize,
    pub available: usize,
    pub occupied: usize,
}

/// Spot inventory of a single venue
#[derive(Debug)]
pub struct SpotInventory {
    kind: VenueKind,
    pools: FxHashMap<SpotCategory, SpotPool>,
}

impl SpotInventory {
    /// Create an empty inventory for a venue of `kind`
    pub fn new(kind: VenueKind) -> Self {
        Self {
            kind,
            pools: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn kind(&self) -> VenueKind {
        self.kind
    }

    fn ensure_supported(&self, category: SpotCategory) -> Result<()> {
        if self.kind.supports(category) {
            Ok(())
        } else {
            Err(ParkingError::UnsupportedSpotCategory {
                category,
                venue: self.kind,
            })
        }
    }

    /// Create `count` spots numbered `1..=count`, all available.
    ///
    /// Replaces any spots previously created for `category`; only meant to
    /// be called while the owning venue is being built.
    ///
    /// # Errors
    /// `UnsupportedSpotCategory` if the venue kind does not support `category`
    pub fn initialize(&mut self, category: SpotCategory, count: SpotNumber) -> Result<()> {
        self.ensure_supported(category)?;
        self.pools.insert(category, SpotPool::with_capacity(count));
        tracing::debug!(%category, count, venue = %self.kind, "spots initialized");
        Ok(())
    }

    /// Take the lowest-numbered available spot of `category` and mark it
    /// as held by the ticket `issue` returns.
    ///
    /// `issue` runs only once a spot has been found, so a failed allocation
    /// never draws a ticket number.
    ///
    /// # Errors
    /// - `UnsupportedSpotCategory` if the venue kind does not support `category`
    /// - `CapacityExhausted` if no spot is available (a supported category
    ///   that was never initialized has no spots)
    pub fn allocate<F>(
        &mut self,
        category: SpotCategory,
        issue: F,
    ) -> Result<(SpotRecord, TicketNumber)>
    where
        F: FnOnce() -> TicketNumber,
    {
        self.ensure_supported(category)?;
        let pool = self
            .pools
            .get_mut(&category)
            .ok_or(ParkingError::CapacityExhausted(category))?;
        let number = pool
            .available
            .pop_first()
            .ok_or(ParkingError::CapacityExhausted(category))?;
        let ticket = issue();
        pool.occupied.insert(number, ticket);
        tracing::debug!(%category, spot = number, ticket, "spot allocated");
        Ok((SpotRecord::new(category, number), ticket))
    }

    /// Whether spot `number` of `category` is currently occupied
    pub fn is_occupied(&self, category: SpotCategory, number: SpotNumber) -> bool {
        self.pools
            .get(&category)
            .is_some_and(|pool| pool.occupied.contains_key(&number))
    }

    /// Ticket currently holding spot `number` of `category`
    pub fn holder(&self, category: SpotCategory, number: SpotNumber) -> Option<TicketNumber> {
        self.pools
            .get(&category)
            .and_then(|pool| pool.occupied.get(&number).copied())
    }

    /// Return a spot held by `ticket` to the available set.
    ///
    /// # Errors
    /// - `UnsupportedSpotCategory` if the venue kind does not support `category`
    /// - `InvalidTicket` unless the spot is occupied under exactly `ticket`
    pub fn release(
        &mut self,
        category: SpotCategory,
        number: SpotNumber,
        ticket: TicketNumber,
    ) -> Result<SpotRecord> {
        self.ensure_supported(category)?;
        let pool = self
            .pools
            .get_mut(&category)
            .filter(|pool| pool.occupied.get(&number) == Some(&ticket))
            .ok_or(ParkingError::InvalidTicket {
                category,
                spot: number,
                ticket,
            })?;
        pool.occupied.remove(&number);
        pool.available.insert(number);
        tracing::debug!(%category, spot = number, ticket, "spot released");
        Ok(SpotRecord::new(category, number))
    }

    /// Number of free spots of `category`
    pub fn available(&self, category: SpotCategory) -> usize {
        self.pools.get(&category).map_or(0, |pool| pool.available.len())
    }

    /// Number of occupied spots of `category`
    pub fn occupied(&self, category: SpotCategory) -> usize {
        self.pools.get(&category).map_or(0, |pool| pool.occupied.len())
    }

    /// Total spots of `category` (available + occupied)
    pub fn capacity(&self, category: SpotCategory) -> usize {
        self.pools.get(&category).map_or(0, SpotPool::capacity)
    }

    /// Per-category occupancy, ordered by category
    pub fn occupancy(&self) -> Vec<CategoryOccupancy> {
        let mut snapshot: Vec<CategoryOccupancy> = self
            .pools
            .iter()
            .map(|(&category, pool)| CategoryOccupancy {
                category,
                capacity: pool.capacity(),
                available: pool.available.len(),
                occupied: pool.occupied.len(),
            })
            .collect();
        snapshot.sort_by_key(|o| o.category);
        snapshot
    }
}
