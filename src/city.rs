//! Cities and their economic tags.
//!
//! The economic model itself lives outside this crate; the map only needs
//! the tag to decide name flavor at placement and whether a city is an
//! island (islands have no land routes).

use serde::{Deserialize, Serialize};

/// Economic/visual city type. Opaque to the transport engine except for
/// `is_island`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CityType {
    Island,
    Coastal,
    Delta,
    Farming,
    HighTech,
    Industrial,
    Culture,
    Undeveloped,
}

impl CityType {
    pub fn display_name(&self) -> &'static str {
        match self {
            CityType::Island => "island",
            CityType::Coastal => "coastal",
            CityType::Delta => "delta",
            CityType::Farming => "farming",
            CityType::HighTech => "high tech",
            CityType::Industrial => "industrial",
            CityType::Culture => "culture",
            CityType::Undeveloped => "undeveloped",
        }
    }

    pub fn is_island(&self) -> bool {
        matches!(self, CityType::Island)
    }

    /// Types a high inland settlement may take: anything that is not tied
    /// to water or farmland.
    pub const MOUNTAIN_CHOICES: &'static [CityType] = &[
        CityType::HighTech,
        CityType::Industrial,
        CityType::Culture,
        CityType::Undeveloped,
    ];

    /// Types a low inland settlement may take.
    pub const INLAND_CHOICES: &'static [CityType] = &[
        CityType::Farming,
        CityType::HighTech,
        CityType::Industrial,
        CityType::Culture,
        CityType::Undeveloped,
    ];
}

/// A named settlement. Created during map generation, never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub city_type: CityType,
}

impl City {
    pub fn new(name: impl Into<String>, city_type: CityType) -> Self {
        Self {
            name: name.into(),
            city_type,
        }
    }

    pub fn is_island(&self) -> bool {
        self.city_type.is_island()
    }
}
