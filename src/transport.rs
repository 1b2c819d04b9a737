//! Transport cost resolution.
//!
//! Every settlement lives in one mode domain: the east sea, the west sea,
//! the river, or plain land. Same-domain queries use that mode's primitive
//! directly; mixed queries compose primitives through a port. Port choice is
//! greedy by raw distance, not globally optimal, and stays that way on
//! purpose. Route failures are deterministic facts about the map, so no
//! retry makes sense; callers fall back to another mode or report them.

use thiserror::Error;

use crate::map::Map;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("unknown city: {0}")]
    UnknownCity(String),
    #[error("no sea route from {from} to {to}")]
    NoSeaRoute { from: String, to: String },
    #[error("no river route from {from} to {to}")]
    NoRiverRoute { from: String, to: String },
    #[error("no land route from {from} to {to}")]
    NoLandRoute { from: String, to: String },
    #[error("no port reachable from {0}")]
    NoPort(String),
}

impl Map {
    /// Distance between two named settlements.
    pub fn distance(&self, from: &str, to: &str) -> Result<f64, TransportError> {
        let a = self.fetch(from)?;
        let b = self.fetch(to)?;
        Ok(a.distance(b))
    }

    /// Sea travel. Both endpoints must share a sea: east coast plus east
    /// isles, or west coast plus west isles.
    pub fn sea_cost(&self, from: &str, to: &str) -> Result<f64, TransportError> {
        let a = self.fetch(from)?;
        let b = self.fetch(to)?;
        if from == to {
            return Ok(0.0);
        }
        let both_east = self.in_east_sea(from) && self.in_east_sea(to);
        let both_west = self.in_west_sea(from) && self.in_west_sea(to);
        if both_east || both_west {
            Ok(a.distance(b) / self.config.sea_divisor)
        } else {
            Err(TransportError::NoSeaRoute {
                from: from.to_string(),
                to: to.to_string(),
            })
        }
    }

    /// River travel between two river members: the sub-path between them,
    /// each segment priced by its direction. Going with the current is
    /// cheaper per unit distance than against it.
    pub fn river_cost(&self, from: &str, to: &str) -> Result<f64, TransportError> {
        self.fetch(from)?;
        self.fetch(to)?;
        if from == to {
            return Ok(0.0);
        }
        let no_route = || TransportError::NoRiverRoute {
            from: from.to_string(),
            to: to.to_string(),
        };
        if !(self.river.contains(from) && self.river.contains(to)) {
            return Err(no_route());
        }

        let path = self.river_path();
        let start = path.iter().position(|n| n == from).ok_or_else(no_route)?;
        let finish = path.iter().position(|n| n == to).ok_or_else(no_route)?;
        let span = if start <= finish {
            path[start..=finish].to_vec()
        } else {
            let mut span = path[finish..=start].to_vec();
            span.reverse();
            span
        };

        let mut cost = 0.0;
        for pair in span.windows(2) {
            let a = &self.positions[pair[0].as_str()];
            let b = &self.positions[pair[1].as_str()];
            let divisor = if b.z() <= a.z() {
                self.config.downstream_divisor
            } else {
                self.config.upstream_divisor
            };
            cost += a.distance(b) / divisor;
        }
        Ok(cost)
    }

    /// Land travel. Islands have no land routes. Climbing costs extra,
    /// descending earns it back: `d + d * (z_to - z_from) * 0.5`.
    pub fn land_cost(&self, from: &str, to: &str) -> Result<f64, TransportError> {
        let a_city = self
            .cities
            .get(from)
            .ok_or_else(|| TransportError::UnknownCity(from.to_string()))?;
        let b_city = self
            .cities
            .get(to)
            .ok_or_else(|| TransportError::UnknownCity(to.to_string()))?;
        if from == to {
            return Ok(0.0);
        }
        if a_city.is_island() || b_city.is_island() {
            return Err(TransportError::NoLandRoute {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        let a = self.fetch(from)?;
        let b = self.fetch(to)?;
        let d = a.distance(b);
        let climb = b.z() - a.z();
        Ok(d + d * climb * 0.5)
    }

    /// Land travel that also prices the detour through the nearest river
    /// ports and takes whichever is cheaper.
    pub fn land_cost_river_checked(&self, from: &str, to: &str) -> Result<f64, TransportError> {
        let direct = self.land_cost(from, to)?;
        let (Ok(from_port), Ok(to_port)) = (self.river_port(from), self.river_port(to)) else {
            return Ok(direct);
        };
        if from_port == to_port {
            return Ok(direct);
        }
        let detour = self.land_cost(from, &from_port)?
            + self.river_cost(&from_port, &to_port)?
            + self.land_cost(&to_port, to)?;
        Ok(direct.min(detour))
    }

    /// Cost of moving goods between any two settlements, composing sea,
    /// river and land legs through ports as needed.
    pub fn transport_cost(&self, from: &str, to: &str) -> Result<f64, TransportError> {
        self.fetch(from)?;
        self.fetch(to)?;

        let path = self.river_path();
        let terminus = path.last().map(String::as_str);
        let east_terminus = terminus.filter(|t| self.east_coast.contains(*t));
        let west_terminus = terminus.filter(|t| self.west_coast.contains(*t));

        if self.in_east_sea(from) {
            if self.in_east_sea(to) {
                return self.sea_cost(from, to);
            }
            if self.river.contains(to) {
                // Sail to the river mouth and row up; only works when the
                // river empties into this sea.
                if let Some(t) = east_terminus {
                    return Ok(self.sea_cost(from, t)? + self.river_cost(t, to)?);
                }
            }
            let port = self.east_port(to)?;
            return Ok(self.sea_cost(from, &port)? + self.land_cost(&port, to)?);
        }

        if self.in_west_sea(from) {
            if self.in_west_sea(to) {
                return self.sea_cost(from, to);
            }
            if self.river.contains(to) {
                if let Some(t) = west_terminus {
                    return Ok(self.sea_cost(from, t)? + self.river_cost(t, to)?);
                }
            }
            let port = self.west_port(to)?;
            return Ok(self.sea_cost(from, &port)? + self.land_cost(&port, to)?);
        }

        if self.river.contains(from) {
            if self.river.contains(to) {
                return self.river_cost(from, to);
            }
            if self.in_east_sea(to) {
                if let Some(t) = east_terminus {
                    return Ok(self.river_cost(from, t)? + self.sea_cost(t, to)?);
                }
            }
            if self.in_west_sea(to) {
                if let Some(t) = west_terminus {
                    return Ok(self.river_cost(from, t)? + self.sea_cost(t, to)?);
                }
            }
            let port = self.river_port(to)?;
            return Ok(self.river_cost(from, &port)? + self.land_cost(&port, to)?);
        }

        // Plain land origin.
        if self.in_west_sea(to) {
            let port = self.west_port(from)?;
            return Ok(self.land_cost(from, &port)? + self.sea_cost(&port, to)?);
        }
        if self.in_east_sea(to) {
            let port = self.east_port(from)?;
            return Ok(self.land_cost(from, &port)? + self.sea_cost(&port, to)?);
        }
        if self.river.contains(to) {
            let port = self.river_port(from)?;
            return Ok(self.land_cost(from, &port)? + self.river_cost(&port, to)?);
        }
        self.land_cost_river_checked(from, to)
    }

    /// Nearest mainland port on the west coast. Isles never serve as ports:
    /// goods cannot continue overland from an island.
    pub fn west_port(&self, near: &str) -> Result<String, TransportError> {
        self.nearest_of(&self.west_coast, near)
    }

    /// Nearest mainland port on the east coast.
    pub fn east_port(&self, near: &str) -> Result<String, TransportError> {
        self.nearest_of(&self.east_coast, near)
    }

    /// Nearest river member.
    pub fn river_port(&self, near: &str) -> Result<String, TransportError> {
        self.nearest_of(&self.river, near)
    }

    pub(crate) fn in_east_sea(&self, name: &str) -> bool {
        self.east_coast.contains(name) || self.east_isles.contains(name)
    }

    pub(crate) fn in_west_sea(&self, name: &str) -> bool {
        self.west_coast.contains(name) || self.west_isles.contains(name)
    }

    fn fetch(&self, name: &str) -> Result<&crate::position::Position, TransportError> {
        self.positions
            .get(name)
            .ok_or_else(|| TransportError::UnknownCity(name.to_string()))
    }

    /// Greedy nearest member of `set`; ties keep the lexicographically
    /// first name since the set iterates sorted.
    fn nearest_of(
        &self,
        set: &std::collections::BTreeSet<String>,
        near: &str,
    ) -> Result<String, TransportError> {
        let origin = self.fetch(near)?;
        let mut best: Option<(&String, f64)> = None;
        for name in set {
            let d = origin.distance(&self.positions[name.as_str()]);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((name, d));
            }
        }
        best.map(|(name, _)| name.clone())
            .ok_or_else(|| TransportError::NoPort(near.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::CityType;
    use crate::position::Position;

    const EPS: f64 = 1e-9;

    fn pos(x: f64, y: f64, z: f64) -> Position {
        Position::new(x, y, z).unwrap()
    }

    /// Three inland settlements in a straight descending line; add_river
    /// links all three.
    fn river_map() -> Map {
        let mut map = Map::default();
        map.place("Aspen", CityType::HighTech, pos(0.5, 0.5, 0.9));
        map.place("Boise", CityType::Farming, pos(0.5, 0.6, 0.5));
        map.place("Chicago", CityType::Industrial, pos(0.5, 0.7, 0.1));
        map.add_river();
        assert_eq!(map.river_path(), vec!["Aspen", "Boise", "Chicago"]);
        map
    }

    #[test]
    fn test_sea_cost_same_sea() {
        let mut map = Map::default();
        map.place("Lima", CityType::Coastal, pos(0.12, 0.5, 0.05));
        map.place("Palma", CityType::Island, pos(0.02, 0.5, 0.1));
        map.place("Osaka", CityType::Coastal, pos(0.9, 0.5, 0.03));

        let d = map.distance("Lima", "Palma").unwrap();
        assert!((map.sea_cost("Lima", "Palma").unwrap() - d / 10.0).abs() < EPS);
        assert_eq!(map.sea_cost("Lima", "Lima").unwrap(), 0.0);

        // Opposite seas never connect directly.
        assert_eq!(
            map.sea_cost("Lima", "Osaka").unwrap_err(),
            TransportError::NoSeaRoute {
                from: "Lima".into(),
                to: "Osaka".into()
            }
        );
    }

    #[test]
    fn test_sea_cost_requires_sea_membership() {
        let mut map = Map::default();
        map.place("Denver", CityType::HighTech, pos(0.5, 0.5, 0.9));
        map.place("Lima", CityType::Coastal, pos(0.12, 0.5, 0.05));
        assert!(matches!(
            map.sea_cost("Denver", "Lima"),
            Err(TransportError::NoSeaRoute { .. })
        ));
    }

    #[test]
    fn test_river_cost_downstream_cheaper() {
        let map = river_map();
        let d = map.distance("Aspen", "Boise").unwrap()
            + map.distance("Boise", "Chicago").unwrap();

        let down = map.river_cost("Aspen", "Chicago").unwrap();
        let up = map.river_cost("Chicago", "Aspen").unwrap();
        assert!((down - d / 12.0).abs() < EPS);
        assert!((up - d / 8.5).abs() < EPS);
        assert!(down < up);
        assert_eq!(map.river_cost("Boise", "Boise").unwrap(), 0.0);
    }

    #[test]
    fn test_river_cost_requires_membership() {
        let mut map = river_map();
        map.place("Denver", CityType::HighTech, pos(0.4, 0.4, 0.7));
        assert!(matches!(
            map.river_cost("Denver", "Chicago"),
            Err(TransportError::NoRiverRoute { .. })
        ));
    }

    #[test]
    fn test_land_cost_uphill_costlier() {
        let mut map = Map::default();
        map.place("Denver", CityType::HighTech, pos(0.5, 0.5, 0.9));
        map.place("Omaha", CityType::Farming, pos(0.6, 0.5, 0.2));

        let d = map.distance("Denver", "Omaha").unwrap();
        let down = map.land_cost("Denver", "Omaha").unwrap();
        let up = map.land_cost("Omaha", "Denver").unwrap();
        assert!((down - (d + d * -0.7 * 0.5)).abs() < EPS);
        assert!((up - (d + d * 0.7 * 0.5)).abs() < EPS);
        assert!(up > down);
        assert_eq!(map.land_cost("Omaha", "Omaha").unwrap(), 0.0);
    }

    #[test]
    fn test_land_cost_rejects_islands() {
        let mut map = Map::default();
        map.place("Palma", CityType::Island, pos(0.02, 0.5, 0.1));
        map.place("Omaha", CityType::Farming, pos(0.6, 0.5, 0.2));
        assert!(matches!(
            map.land_cost("Palma", "Omaha"),
            Err(TransportError::NoLandRoute { .. })
        ));
        assert!(matches!(
            map.land_cost("Omaha", "Palma"),
            Err(TransportError::NoLandRoute { .. })
        ));
    }

    #[test]
    fn test_unknown_city() {
        let map = Map::default();
        assert_eq!(
            map.transport_cost("Atlantis", "Omaha").unwrap_err(),
            TransportError::UnknownCity("Atlantis".into())
        );
    }

    #[test]
    fn test_port_tie_breaks_lexicographically() {
        let mut map = Map::default();
        map.place("Denver", CityType::HighTech, pos(0.5, 0.5, 0.0));
        // Equidistant west coast ports.
        map.place("Bergen", CityType::Coastal, pos(0.12, 0.6, 0.0));
        map.place("Anchorage", CityType::Coastal, pos(0.12, 0.4, 0.0));
        assert_eq!(map.west_port("Denver").unwrap(), "Anchorage");
    }

    #[test]
    fn test_no_port_when_coast_empty() {
        let mut map = Map::default();
        map.place("Denver", CityType::HighTech, pos(0.5, 0.5, 0.9));
        map.place("Palma", CityType::Island, pos(0.02, 0.5, 0.1));
        // Destination is in the west sea but there is no mainland port.
        assert_eq!(
            map.transport_cost("Denver", "Palma").unwrap_err(),
            TransportError::NoPort("Denver".into())
        );
    }

    #[test]
    fn test_land_to_sea_through_nearest_port() {
        let mut map = Map::default();
        map.place("Denver", CityType::HighTech, pos(0.5, 0.5, 0.9));
        map.place("Lima", CityType::Coastal, pos(0.12, 0.5, 0.05));
        map.place("Palma", CityType::Island, pos(0.02, 0.5, 0.1));

        let expected = map.land_cost("Denver", "Lima").unwrap()
            + map.sea_cost("Lima", "Palma").unwrap();
        assert!((map.transport_cost("Denver", "Palma").unwrap() - expected).abs() < EPS);
    }

    #[test]
    fn test_sea_to_unbridgeable_island_fails() {
        let mut map = Map::default();
        map.place("Osaka", CityType::Coastal, pos(0.9, 0.5, 0.03));
        map.place("Palma", CityType::Island, pos(0.02, 0.5, 0.1));
        // East sea origin, west island destination: the only composition is
        // through an east port and a land leg, and islands take no land leg.
        assert!(matches!(
            map.transport_cost("Osaka", "Palma"),
            Err(TransportError::NoLandRoute { .. })
        ));
    }

    #[test]
    fn test_river_terminus_bridges_sea_and_river() {
        let mut map = Map::default();
        map.place("Denver", CityType::HighTech, pos(0.4, 0.5, 0.8));
        map.place("Chicago", CityType::Industrial, pos(0.45, 0.5, 0.3));
        map.place("Dublin", CityType::Delta, pos(0.2, 0.5, 0.02));
        map.place("Lima", CityType::Coastal, pos(0.12, 0.5, 0.01));
        map.add_river();

        // Dublin terminates the river and is promoted to the west coast.
        assert_eq!(map.river_path(), vec!["Denver", "Chicago", "Dublin"]);
        assert!(map.west_coast().contains("Dublin"));

        let expected = map.sea_cost("Lima", "Dublin").unwrap()
            + map.river_cost("Dublin", "Denver").unwrap();
        assert!((map.transport_cost("Lima", "Denver").unwrap() - expected).abs() < EPS);

        // And the reverse direction goes back out the river mouth.
        let expected = map.river_cost("Denver", "Dublin").unwrap()
            + map.sea_cost("Dublin", "Lima").unwrap();
        assert!((map.transport_cost("Denver", "Lima").unwrap() - expected).abs() < EPS);
    }

    #[test]
    fn test_land_land_takes_cheaper_river_detour() {
        let mut map = river_map();
        // Placed after add_river, so they stay plain land settlements.
        map.place("Denver", CityType::HighTech, pos(0.45, 0.5, 0.85));
        map.place("Omaha", CityType::Farming, pos(0.45, 0.7, 0.1));

        let direct = map.land_cost("Denver", "Omaha").unwrap();
        let detour = map.land_cost("Denver", "Aspen").unwrap()
            + map.river_cost("Aspen", "Chicago").unwrap()
            + map.land_cost("Chicago", "Omaha").unwrap();
        assert!(detour < direct, "detour should undercut the direct march");

        let got = map.transport_cost("Denver", "Omaha").unwrap();
        assert!((got - detour).abs() < EPS);
    }

    #[test]
    fn test_three_settlement_west_trade() {
        let mut map = Map::default();
        map.place("Palma", CityType::Island, pos(0.02, 0.5, 0.1));
        map.place("Denver", CityType::HighTech, pos(0.5, 0.5, 0.9));
        map.place("Lima", CityType::Coastal, pos(0.12, 0.5, 0.05));
        map.add_river();

        assert!(map.west_isles().contains("Palma"));
        assert!(map.west_coast().contains("Lima"));

        // The two west settlements trade by sea.
        let d = map.distance("Palma", "Lima").unwrap();
        assert!((map.transport_cost("Palma", "Lima").unwrap() - d / 10.0).abs() < EPS);

        // Inland to coast: no direct sea or river mode.
        assert!(matches!(
            map.sea_cost("Denver", "Lima"),
            Err(TransportError::NoSeaRoute { .. })
        ));
        assert!(matches!(
            map.river_cost("Lima", "Denver"),
            Err(TransportError::NoRiverRoute { .. })
        ));

        // But the composed route succeeds over land.
        let cost = map.transport_cost("Denver", "Lima").unwrap();
        assert!(cost > 0.0);
        let back = map.transport_cost("Lima", "Denver").unwrap();
        assert!(back > cost, "climbing back inland must cost more");
    }
}
