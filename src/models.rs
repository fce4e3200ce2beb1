// models.rs - Spot categories, venue kinds and spot records

use crate::core_types::SpotNumber;
use crate::error::ParkingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Class of vehicle a spot accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpotCategory {
    MotorcycleOrScooter,
    #[serde(rename = "car_or_suv")]
    CarOrSUV,
    BusOrTruck,
}

impl SpotCategory {
    /// Every category, in declaration order
    pub const ALL: [SpotCategory; 3] = [
        SpotCategory::MotorcycleOrScooter,
        SpotCategory::CarOrSUV,
        SpotCategory::BusOrTruck,
    ];

    /// Config / CSV name of the category
    pub const fn as_str(&self) -> &'static str {
        match self {
            SpotCategory::MotorcycleOrScooter => "motorcycle_or_scooter",
            SpotCategory::CarOrSUV => "car_or_suv",
            SpotCategory::BusOrTruck => "bus_or_truck",
        }
    }
}

impl fmt::Display for SpotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpotCategory {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        SpotCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParkingError::UnknownSpotCategory(name.to_string()))
    }
}

/// Kind of venue - selects the supported categories and the fee tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueKind {
    Mall,
    Stadium,
    Airport,
}

impl VenueKind {
    pub const ALL: [VenueKind; 3] = [VenueKind::Mall, VenueKind::Stadium, VenueKind::Airport];

    pub const fn as_str(&self) -> &'static str {
        match self {
            VenueKind::Mall => "mall",
            VenueKind::Stadium => "stadium",
            VenueKind::Airport => "airport",
        }
    }

    /// Categories this kind of venue can stock and bill
    pub const fn supported_categories(&self) -> &'static [SpotCategory] {
        match self {
            VenueKind::Mall => &[
                SpotCategory::MotorcycleOrScooter,
                SpotCategory::CarOrSUV,
                SpotCategory::BusOrTruck,
            ],
            VenueKind::Stadium | VenueKind::Airport => {
                &[SpotCategory::MotorcycleOrScooter, SpotCategory::CarOrSUV]
            }
        }
    }

    #[inline]
    pub fn supports(&self, category: SpotCategory) -> bool {
        self.supported_categories().contains(&category)
    }
}

impl fmt::Display for VenueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VenueKind {
    type Err = ParkingError;

    /// Resolve a venue kind by name (config files, CLI input)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        VenueKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParkingError::UnknownVenueKind(name.to_string()))
    }
}

/// A single parking spot: category plus its number within the category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotRecord {
    pub category: SpotCategory,
    pub number: SpotNumber,
}

impl SpotRecord {
    #[inline]
    pub const fn new(category: SpotCategory, number: SpotNumber) -> Self {
        Self { category, number }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_kind_from_str() {
        assert_eq!("mall".parse::<VenueKind>().unwrap(), VenueKind::Mall);
        assert_eq!(" Airport ".parse::<VenueKind>().unwrap(), VenueKind::Airport);

        let err = "harbour".parse::<VenueKind>().unwrap_err();
        assert!(matches!(err, ParkingError::UnknownVenueKind(ref k) if k == "harbour"));
    }

    #[test]
    fn test_spot_category_from_str() {
        assert_eq!(
            "car_or_suv".parse::<SpotCategory>().unwrap(),
            SpotCategory::CarOrSUV
        );
        assert!("tractor".parse::<SpotCategory>().is_err());
    }

    #[test]
    fn test_supported_categories() {
        assert!(VenueKind::Mall.supports(SpotCategory::BusOrTruck));
        assert!(!VenueKind::Stadium.supports(SpotCategory::BusOrTruck));
        assert!(!VenueKind::Airport.supports(SpotCategory::BusOrTruck));
        assert_eq!(VenueKind::Airport.supported_categories().len(), 2);
    }

    #[test]
    fn test_serde_names_match_display() {
        for category in SpotCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
        let kind: VenueKind = serde_yaml::from_str("stadium").unwrap();
        assert_eq!(kind, VenueKind::Stadium);
    }
}
