//! Longitudinal region bands.
//!
//! The map is split into seven west-to-east bands by x alone: isles, coast
//! and delta on each side, and the inland band in the middle. Classification
//! checks the outermost bands first, so the bands are mutually exclusive and
//! cover all of `[0,1]`.

use serde::{Deserialize, Serialize};

/// One of the seven longitudinal bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    WestIsles,
    WestCoast,
    WestDelta,
    Inland,
    EastDelta,
    EastCoast,
    EastIsles,
}

impl Region {
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::WestIsles => "west isles",
            Region::WestCoast => "west coast",
            Region::WestDelta => "west delta",
            Region::Inland => "inland",
            Region::EastDelta => "east delta",
            Region::EastCoast => "east coast",
            Region::EastIsles => "east isles",
        }
    }

    /// Anything outside the central inland band counts as coastal terrain.
    pub fn coastal(&self) -> bool {
        !matches!(self, Region::Inland)
    }

    pub fn east(&self) -> bool {
        matches!(self, Region::EastDelta | Region::EastCoast | Region::EastIsles)
    }
}

/// The six x thresholds separating the bands, strictly increasing, with the
/// west deltas below 0.5 and the east deltas at or above it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bands {
    pub west_isles: f64,
    pub west_coast: f64,
    pub west_delta: f64,
    pub east_delta: f64,
    pub east_coast: f64,
    pub east_isles: f64,
}

impl Default for Bands {
    fn default() -> Self {
        Self {
            west_isles: 0.05,
            west_coast: 0.15,
            west_delta: 0.25,
            east_delta: 0.75,
            east_coast: 0.85,
            east_isles: 0.95,
        }
    }
}

impl Bands {
    pub fn valid(&self) -> bool {
        self.west_isles < self.west_coast
            && self.west_coast < self.west_delta
            && self.west_delta < 0.5
            && 0.5 <= self.east_delta
            && self.east_delta < self.east_coast
            && self.east_coast < self.east_isles
    }

    /// Band membership is a pure function of x; y and z never matter.
    pub fn classify(&self, x: f64) -> Region {
        if x <= self.west_isles {
            Region::WestIsles
        } else if x >= self.east_isles {
            Region::EastIsles
        } else if x <= self.west_coast {
            Region::WestCoast
        } else if x >= self.east_coast {
            Region::EastCoast
        } else if x <= self.west_delta {
            Region::WestDelta
        } else if x >= self.east_delta {
            Region::EastDelta
        } else {
            Region::Inland
        }
    }
}
