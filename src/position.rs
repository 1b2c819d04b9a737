//! Positions in the unit cube.
//!
//! Every settlement sits at a point in `[0,1]^3`: x runs west to east,
//! y south to north, z is altitude. Radial vectors, hemisphere flags and
//! centrality are derived once at construction and never change.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use thiserror::Error;

/// Center of the map in the xy plane (and of the cube in 3d).
pub const CENTER: f64 = 0.5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PositionError {
    #[error("position out of bounds: {0:.2} {1:.2} {2:.2}")]
    OutOfBounds(f64, f64, f64),
}

/// How close a position lies to the map center, by 2d radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Centrality {
    Inner,
    Core,
    Outer,
}

impl Centrality {
    pub fn display_name(&self) -> &'static str {
        match self {
            Centrality::Inner => "inner",
            Centrality::Core => "core",
            Centrality::Outer => "outer",
        }
    }
}

/// An immutable point in `[0,1]^3`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Position {
    x: f64,
    y: f64,
    z: f64,
    /// Radial vector from the cube center (0.5, 0.5, 0.5).
    r3: [f64; 3],
    /// Radial vector from the map center, ignoring altitude.
    r2: [f64; 2],
    north: bool,
    east: bool,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, PositionError> {
        if !Self::valid(x, y, z) {
            return Err(PositionError::OutOfBounds(x, y, z));
        }
        Ok(Self::from_parts(x, y, z))
    }

    /// Caller guarantees the coordinates are in bounds.
    fn from_parts(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            r3: [CENTER - x, CENTER - y, CENTER - z],
            r2: [CENTER - x, CENTER - y],
            north: y > CENTER,
            east: x > CENTER,
        }
    }

    fn valid(x: f64, y: f64, z: f64) -> bool {
        (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y) && (0.0..=1.0).contains(&z)
    }

    /// Random position with a deliberate low-altitude bias: x and y are
    /// uniform, z is uniform over `[0,1/3)`, `[0,1/2)` or `[0,1)` with equal
    /// probability, so most terrain ends up low or medium. This keeps
    /// apex/gulch selection stable when a river is synthesized.
    pub fn generate(rng: &mut ChaCha8Rng) -> Self {
        let x = rng.gen_range(0.0..1.0);
        let y = rng.gen_range(0.0..1.0);
        let z = match rng.gen_range(0..3) {
            0 => rng.gen_range(0.0..1.0 / 3.0),
            1 => rng.gen_range(0.0..0.5),
            _ => rng.gen_range(0.0..1.0),
        };
        Self::from_parts(x, y, z)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn r3(&self) -> [f64; 3] {
        self.r3
    }

    pub fn r2(&self) -> [f64; 2] {
        self.r2
    }

    pub fn north(&self) -> bool {
        self.north
    }

    pub fn east(&self) -> bool {
        self.east
    }

    /// 2d distance from the map center.
    pub fn radius(&self) -> f64 {
        (self.r2[0] * self.r2[0] + self.r2[1] * self.r2[1]).sqrt()
    }

    /// Two-letter NS/EW quadrant, e.g. "NE".
    pub fn quadrant(&self) -> &'static str {
        match (self.north, self.east) {
            (true, true) => "NE",
            (true, false) => "NW",
            (false, true) => "SE",
            (false, false) => "SW",
        }
    }

    pub fn centrality(&self) -> Centrality {
        let r = self.radius();
        if r < 0.2 {
            Centrality::Inner
        } else if r < 0.4 {
            Centrality::Core
        } else {
            Centrality::Outer
        }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Per-axis average; always in bounds for two valid positions.
    pub fn midpoint(&self, other: &Position) -> Position {
        Self::from_parts(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }

    /// Copy with the altitude scaled down by `factor` (> 1 flattens).
    /// Scaling toward zero cannot leave the cube.
    pub fn with_altitude_scaled(&self, factor: f64) -> Position {
        Self::from_parts(self.x, self.y, self.z / factor)
    }
}
