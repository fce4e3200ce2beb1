//! Fee calculation
//!
//! Each venue kind owns a fixed set of tariffs, one per supported spot
//! category. A tariff maps billable hours to a whole-unit fee.
//!
//! Billable hours are the whole hours between entry and exit plus one:
//! 56 minutes bills 1 hour, 3h40m bills 4 hours, exactly 3h bills 4 hours.

use crate::core_types::{Fee, Hours};
use crate::error::{ParkingError, Result};
use crate::models::{SpotCategory, VenueKind};
use chrono::NaiveDateTime;

/// Hours in one billing day (airport daily rate)
pub const HOURS_PER_DAY: Hours = 24;

/// Flat-fee band: any stay of at most `up_to` hours costs `fee`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub up_to: Hours,
    pub fee: Fee,
}

/// Fee schedule for one (venue kind, spot category) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tariff {
    /// `rate * hours`
    Hourly { rate: Fee },
    /// Flat `base`, plus `step` once past `step_after` hours,
    /// plus `rate` for every hour past `hourly_after`
    Stepped {
        base: Fee,
        step_after: Hours,
        step: Fee,
        hourly_after: Hours,
        rate: Fee,
    },
    /// First band covering the stay; past the last band
    /// `daily_rate * (hours / 24 + 1)`
    Banded {
        bands: &'static [Band],
        daily_rate: Fee,
    },
    /// Another tariff scaled by `factor`
    Multiple { base: &'static Tariff, factor: Fee },
}

impl Tariff {
    /// Fee for `hours` billable hours
    pub fn fee(&self, hours: Hours) -> Fee {
        match *self {
            Tariff::Hourly { rate } => rate.saturating_mul(hours),
            Tariff::Stepped {
                base,
                step_after,
                step,
                hourly_after,
                rate,
            } => {
                let mut total = base;
                if hours > step_after {
                    total = total.saturating_add(step);
                }
                if hours > hourly_after {
                    total = total.saturating_add(rate.saturating_mul(hours - hourly_after));
                }
                total
            }
            Tariff::Banded { bands, daily_rate } => bands
                .iter()
                .find(|band| hours <= band.up_to)
                .map(|band| band.fee)
                .unwrap_or_else(|| daily_rate.saturating_mul(hours / HOURS_PER_DAY + 1)),
            Tariff::Multiple { base, factor } => base.fee(hours).saturating_mul(factor),
        }
    }
}

// ============================================================
// TARIFF TABLES
// ============================================================

const MALL_MOTORCYCLE: Tariff = Tariff::Hourly { rate: 10 };
const MALL_CAR: Tariff = Tariff::Hourly { rate: 20 };
const MALL_BUS: Tariff = Tariff::Hourly { rate: 50 };

const STADIUM_MOTORCYCLE: Tariff = Tariff::Stepped {
    base: 30,
    step_after: 4,
    step: 60,
    hourly_after: 12,
    rate: 100,
};
const STADIUM_CAR: Tariff = Tariff::Multiple {
    base: &STADIUM_MOTORCYCLE,
    factor: 2,
};

const AIRPORT_MOTORCYCLE: Tariff = Tariff::Banded {
    bands: &[
        Band { up_to: 1, fee: 0 },
        Band { up_to: 8, fee: 40 },
        Band { up_to: 24, fee: 60 },
    ],
    daily_rate: 80,
};
const AIRPORT_CAR: Tariff = Tariff::Banded {
    bands: &[Band { up_to: 12, fee: 60 }, Band { up_to: 24, fee: 80 }],
    daily_rate: 100,
};

/// Fee policy of one venue kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeePolicy {
    kind: VenueKind,
}

impl FeePolicy {
    pub const fn new(kind: VenueKind) -> Self {
        Self { kind }
    }

    #[inline]
    pub const fn kind(&self) -> VenueKind {
        self.kind
    }

    /// Tariff for `category`, independent of what the venue stocks
    ///
    /// # Errors
    /// `UnsupportedSpotCategory` if this venue kind has no tariff for it
    pub fn tariff(&self, category: SpotCategory) -> Result<&'static Tariff> {
        use SpotCategory::*;
        match (self.kind, category) {
            (VenueKind::Mall, MotorcycleOrScooter) => Ok(&MALL_MOTORCYCLE),
            (VenueKind::Mall, CarOrSUV) => Ok(&MALL_CAR),
            (VenueKind::Mall, BusOrTruck) => Ok(&MALL_BUS),
            (VenueKind::Stadium, MotorcycleOrScooter) => Ok(&STADIUM_MOTORCYCLE),
            (VenueKind::Stadium, CarOrSUV) => Ok(&STADIUM_CAR),
            (VenueKind::Airport, MotorcycleOrScooter) => Ok(&AIRPORT_MOTORCYCLE),
            (VenueKind::Airport, CarOrSUV) => Ok(&AIRPORT_CAR),
            (venue, category) => Err(ParkingError::UnsupportedSpotCategory { category, venue }),
        }
    }

    /// Calculate the fee for `hours` billable hours.
    ///
    /// # Errors
    /// `UnsupportedSpotCategory` if this venue kind does not bill `category`
    ///
    /// # Example
    /// ```
    /// use venue_parking::fee::FeePolicy;
    /// use venue_parking::models::{SpotCategory, VenueKind};
    ///
    /// let stadium = FeePolicy::new(VenueKind::Stadium);
    /// // 15 billable hours: 30 + 60 + 3 * 100
    /// assert_eq!(stadium.calculate_fee(SpotCategory::MotorcycleOrScooter, 15), Ok(390));
    /// assert!(stadium.calculate_fee(SpotCategory::BusOrTruck, 1).is_err());
    /// ```
    pub fn calculate_fee(&self, category: SpotCategory, hours: Hours) -> Result<Fee> {
        Ok(self.tariff(category)?.fee(hours))
    }
}

/// Billable hours between entry and exit.
///
/// Whole elapsed hours (truncated) plus one, so every started hour is billed.
///
/// # Errors
/// `ExitBeforeEntry` if `exit` is earlier than `entry`
pub fn billable_hours(entry: NaiveDateTime, exit: NaiveDateTime) -> Result<Hours> {
    if exit < entry {
        return Err(ParkingError::ExitBeforeEntry { entry, exit });
    }
    // num_hours() is >= 0 here
    let whole = (exit - entry).num_hours() as Hours;
    Ok(whole + 1)
}
