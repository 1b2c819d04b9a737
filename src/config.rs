//! Map generation and transport tunables.
//!
//! Everything adjustable lives here: the band thresholds, the river
//! synthesis knobs and the per-mode cost divisors. All fields have defaults
//! and the struct loads from a JSON file, so a run can be reshaped without
//! recompiling.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::region::Bands;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("band thresholds must increase strictly from west isles to east isles, straddling 0.5")]
    BandOrder,
    #[error("{0} must be positive")]
    NotPositive(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// Full configuration for one map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Longitudinal band thresholds.
    #[serde(default)]
    pub bands: Bands,

    /// Bound on how far off a river segment a midpoint candidate may sit:
    /// candidates beyond `segment_length / river_midpoint` are skipped.
    #[serde(default = "default_river_midpoint")]
    pub river_midpoint: f64,

    /// Settlements below this altitude never seed the gulch.
    #[serde(default = "default_gulch_floor")]
    pub gulch_floor: f64,

    /// How far from the gulch the river may reach for a coastal terminus.
    #[serde(default = "default_termination_radius")]
    pub termination_radius: f64,

    /// Sea travel: cost = distance / this.
    #[serde(default = "default_sea_divisor")]
    pub sea_divisor: f64,

    /// River travel with the current.
    #[serde(default = "default_downstream_divisor")]
    pub downstream_divisor: f64,

    /// River travel against the current; smaller divisor, higher cost.
    #[serde(default = "default_upstream_divisor")]
    pub upstream_divisor: f64,

    /// Feet per unit of z, used only for reporting.
    #[serde(default = "default_altitude_scale")]
    pub altitude_scale: f64,
}

fn default_river_midpoint() -> f64 {
    1.5
}
fn default_gulch_floor() -> f64 {
    0.01
}
fn default_termination_radius() -> f64 {
    0.5
}
fn default_sea_divisor() -> f64 {
    10.0
}
fn default_downstream_divisor() -> f64 {
    12.0
}
fn default_upstream_divisor() -> f64 {
    8.5
}
fn default_altitude_scale() -> f64 {
    10_000.0
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            bands: Bands::default(),
            river_midpoint: default_river_midpoint(),
            gulch_floor: default_gulch_floor(),
            termination_radius: default_termination_radius(),
            sea_divisor: default_sea_divisor(),
            downstream_divisor: default_downstream_divisor(),
            upstream_divisor: default_upstream_divisor(),
            altitude_scale: default_altitude_scale(),
        }
    }
}

impl MapConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bands.valid() {
            return Err(ConfigError::BandOrder);
        }
        for (name, value) in [
            ("river_midpoint", self.river_midpoint),
            ("termination_radius", self.termination_radius),
            ("sea_divisor", self.sea_divisor),
            ("downstream_divisor", self.downstream_divisor),
            ("upstream_divisor", self.upstream_divisor),
            ("altitude_scale", self.altitude_scale),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive(name));
            }
        }
        Ok(())
    }

    /// Load from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(MapConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config: MapConfig =
            serde_json::from_str(r#"{ "sea_divisor": 20.0 }"#).unwrap();
        assert_eq!(config.sea_divisor, 20.0);
        assert_eq!(config.river_midpoint, 1.5);
        assert_eq!(config.bands, Bands::default());
    }

    #[test]
    fn test_bad_bands_rejected() {
        let mut config = MapConfig::default();
        config.bands.east_delta = 0.4;
        assert!(matches!(config.validate(), Err(ConfigError::BandOrder)));
    }

    #[test]
    fn test_nonpositive_divisor_rejected() {
        let mut config = MapConfig::default();
        config.upstream_divisor = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive("upstream_divisor"))
        ));
    }
}
