//! Settlement landscape generation and multi-modal transport costs.
//!
//! Places settlements across a unit-cube world, classifies them into seven
//! longitudinal region bands, threads a single river from high ground down
//! to the sea and answers what it costs to move goods between any two
//! settlements by land, river or sea.

pub mod city;
pub mod config;
pub mod map;
pub mod names;
pub mod position;
pub mod region;
pub mod render;
pub mod transport;

pub use city::{City, CityType};
pub use config::{ConfigError, MapConfig};
pub use map::Map;
pub use names::{Locale, NameError};
pub use position::{Centrality, Position, PositionError};
pub use region::{Bands, Region};
pub use transport::TransportError;
