//! The settlement map.
//!
//! Owns the city and position tables, the six region name sets and the
//! river. Generation is a single atomic phase: place every settlement, then
//! synthesize the river. After that the map is read-only and cost queries
//! (see `transport`) may begin.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::city::{City, CityType};
use crate::config::MapConfig;
use crate::names::{self, Locale, NameError};
use crate::position::Position;
use crate::region::Region;

pub struct Map {
    pub(crate) config: MapConfig,
    pub(crate) cities: BTreeMap<String, City>,
    pub(crate) positions: BTreeMap<String, Position>,
    pub(crate) west_isles: BTreeSet<String>,
    pub(crate) west_coast: BTreeSet<String>,
    pub(crate) west_delta: BTreeSet<String>,
    pub(crate) east_delta: BTreeSet<String>,
    pub(crate) east_coast: BTreeSet<String>,
    pub(crate) east_isles: BTreeSet<String>,
    pub(crate) river: BTreeSet<String>,
    /// Delta settlements promoted into a coast set when the river reached
    /// them. The only region-membership change after placement; recorded so
    /// it stays auditable.
    pub(crate) delta_promotions: Vec<String>,
}

impl Default for Map {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}

impl Map {
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            cities: BTreeMap::new(),
            positions: BTreeMap::new(),
            west_isles: BTreeSet::new(),
            west_coast: BTreeSet::new(),
            west_delta: BTreeSet::new(),
            east_delta: BTreeSet::new(),
            east_coast: BTreeSet::new(),
            east_isles: BTreeSet::new(),
            river: BTreeSet::new(),
            delta_promotions: Vec::new(),
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn cities(&self) -> &BTreeMap<String, City> {
        &self.cities
    }

    pub fn positions(&self) -> &BTreeMap<String, Position> {
        &self.positions
    }

    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    pub fn position(&self, name: &str) -> Option<&Position> {
        self.positions.get(name)
    }

    pub fn west_isles(&self) -> &BTreeSet<String> {
        &self.west_isles
    }

    pub fn west_coast(&self) -> &BTreeSet<String> {
        &self.west_coast
    }

    pub fn west_delta(&self) -> &BTreeSet<String> {
        &self.west_delta
    }

    pub fn east_delta(&self) -> &BTreeSet<String> {
        &self.east_delta
    }

    pub fn east_coast(&self) -> &BTreeSet<String> {
        &self.east_coast
    }

    pub fn east_isles(&self) -> &BTreeSet<String> {
        &self.east_isles
    }

    pub fn river(&self) -> &BTreeSet<String> {
        &self.river
    }

    pub fn delta_promotions(&self) -> &[String] {
        &self.delta_promotions
    }

    /// Geometric region of a placed settlement.
    pub fn region_of(&self, name: &str) -> Option<Region> {
        self.positions
            .get(name)
            .map(|pos| self.config.bands.classify(pos.x()))
    }

    /// Place `count` settlements at random, then synthesize the river.
    /// Returns the new names in placement order. Fails only if a name pool
    /// runs dry.
    pub fn generate(
        &mut self,
        count: usize,
        rng: &mut ChaCha8Rng,
    ) -> Result<Vec<String>, NameError> {
        let mut placed = Vec::with_capacity(count);
        for i in 0..count {
            let letter = (b'a' + (i % 26) as u8) as char;
            let pos = Position::generate(rng);
            let region = self.config.bands.classify(pos.x());

            // Coastal terrain is lowland: flatten the drawn altitude before
            // the settlement is registered.
            let (pos, city_type, locale) = match region {
                Region::WestIsles | Region::EastIsles => (
                    pos.with_altitude_scaled(2.0),
                    CityType::Island,
                    Locale::Island,
                ),
                Region::WestCoast | Region::EastCoast => (
                    pos.with_altitude_scaled(10.0),
                    CityType::Coastal,
                    Locale::Coastal,
                ),
                Region::WestDelta | Region::EastDelta => (
                    pos.with_altitude_scaled(20.0),
                    CityType::Delta,
                    Locale::Delta,
                ),
                Region::Inland if pos.z() > 0.5 => (
                    pos,
                    *pick(rng, CityType::MOUNTAIN_CHOICES),
                    Locale::Mountain,
                ),
                Region::Inland => {
                    (pos, *pick(rng, CityType::INLAND_CHOICES), Locale::Inland)
                }
            };

            let used: BTreeSet<String> = self.cities.keys().cloned().collect();
            let name = names::name_for(locale, letter, &used, rng)?;
            self.place(name.clone(), city_type, pos);
            placed.push(name);
        }
        info!("placed {} settlements", placed.len());
        self.add_river();
        Ok(placed)
    }

    /// Register one settlement: store the city and position and file the
    /// name under its longitudinal band set. Inland names go in no set.
    pub fn place(&mut self, name: impl Into<String>, city_type: CityType, pos: Position) {
        let name = name.into();
        match self.config.bands.classify(pos.x()) {
            Region::WestIsles => {
                self.west_isles.insert(name.clone());
            }
            Region::WestCoast => {
                self.west_coast.insert(name.clone());
            }
            Region::WestDelta => {
                self.west_delta.insert(name.clone());
            }
            Region::EastDelta => {
                self.east_delta.insert(name.clone());
            }
            Region::EastCoast => {
                self.east_coast.insert(name.clone());
            }
            Region::EastIsles => {
                self.east_isles.insert(name.clone());
            }
            Region::Inland => {}
        }
        self.cities
            .insert(name.clone(), City::new(name.clone(), city_type));
        self.positions.insert(name, pos);
    }

    /// The river's settlements ordered by descending altitude; consecutive
    /// entries are navigable segments. Ties break lexicographically.
    pub fn river_path(&self) -> Vec<String> {
        let mut path: Vec<String> = self.river.iter().cloned().collect();
        path.sort_by(|a, b| {
            let za = self.positions[a.as_str()].z();
            let zb = self.positions[b.as_str()].z();
            zb.partial_cmp(&za)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.cmp(b))
        });
        path
    }

    /// Synthesize the single river: seed it at the highest and lowest
    /// non-coastal settlements, grow it by segment midpoints, then run it
    /// out to the nearest low coast or delta settlement if one is in reach.
    /// Deterministic given the placed settlements.
    pub fn add_river(&mut self) {
        let Some((apex, gulch)) = self.seed_river() else {
            debug!("no eligible river seeds; the map stays dry");
            return;
        };
        debug!("river runs from {apex} down to {gulch}");
        self.river.insert(apex);
        self.river.insert(gulch.clone());

        // Each accepted candidate reorders the path, so restart the pair
        // scan after every insertion. Terminates: every insertion consumes
        // a settlement not yet in the river.
        loop {
            let path = self.river_path();
            let mut inserted = false;
            for pair in path.windows(2) {
                if let Some(name) = self.find_river_midpoint(&pair[0], &pair[1]) {
                    debug!("river picks up {name} between {} and {}", pair[0], pair[1]);
                    self.river.insert(name);
                    inserted = true;
                    break;
                }
            }
            if !inserted {
                break;
            }
        }

        self.terminate_river(&gulch);
    }

    /// Highest and lowest non-coastal settlements. The gulch ignores
    /// anything below the configured altitude floor. Ties keep the
    /// lexicographically first name.
    fn seed_river(&self) -> Option<(String, String)> {
        let mut apex: Option<(String, f64)> = None;
        let mut gulch: Option<(String, f64)> = None;
        for (name, pos) in &self.positions {
            if self.coastal_member(name) {
                continue;
            }
            let z = pos.z();
            if apex.as_ref().map_or(true, |(_, az)| z > *az) {
                apex = Some((name.clone(), z));
            }
            if z >= self.config.gulch_floor
                && gulch.as_ref().map_or(true, |(_, gz)| z < *gz)
            {
                gulch = Some((name.clone(), z));
            }
        }
        match (apex, gulch) {
            (Some((apex, _)), Some((gulch, _))) => Some((apex, gulch)),
            _ => None,
        }
    }

    /// Best midpoint candidate for the river segment from `a` to `b`: the
    /// settlement closest to the segment midpoint whose altitude lies
    /// between the endpoints and which sits within the tolerance bound.
    /// Settlements already wet or in any band set never qualify; a delta
    /// only ever touches the river as the promoted terminus.
    fn find_river_midpoint(&self, a: &str, b: &str) -> Option<String> {
        let pos1 = &self.positions[a];
        let pos2 = &self.positions[b];
        let dist = pos1.distance(pos2);
        let mp = pos1.midpoint(pos2);
        let lo = pos1.z().min(pos2.z());
        let hi = pos1.z().max(pos2.z());

        let mut best: Option<(String, f64)> = None;
        for (name, pos) in &self.positions {
            if name == a || name == b || self.river.contains(name) {
                continue;
            }
            if self.coastal_member(name) {
                continue;
            }
            if pos.z() < lo || pos.z() > hi {
                continue;
            }
            let mp_dist = mp.distance(pos);
            if mp_dist > dist / self.config.river_midpoint {
                continue;
            }
            if best.as_ref().map_or(true, |(_, d)| mp_dist < *d) {
                best = Some((name.clone(), mp_dist));
            }
        }
        best.map(|(name, _)| name)
    }

    /// Run the river out to the sea: the nearest coast or delta settlement
    /// at or below the gulch, within the search radius. A delta terminus is
    /// promoted into its coast set, since the river now connects it to
    /// the sea.
    fn terminate_river(&mut self, gulch: &str) {
        let Some(gulch_pos) = self.positions.get(gulch).copied() else {
            return;
        };

        let mut candidates: BTreeSet<&String> = BTreeSet::new();
        candidates.extend(&self.west_coast);
        candidates.extend(&self.east_coast);
        candidates.extend(&self.west_delta);
        candidates.extend(&self.east_delta);

        let mut best: Option<(String, f64)> = None;
        for name in candidates {
            if name.as_str() == gulch {
                continue;
            }
            let pos = &self.positions[name.as_str()];
            if pos.z() > gulch_pos.z() {
                continue;
            }
            let d = pos.distance(&gulch_pos);
            if d > self.config.termination_radius {
                continue;
            }
            if best.as_ref().map_or(true, |(_, bd)| d < *bd) {
                best = Some((name.clone(), d));
            }
        }

        let Some((terminus, _)) = best else {
            debug!("river never reaches the sea");
            return;
        };
        self.river.insert(terminus.clone());
        if self.west_delta.contains(&terminus) {
            self.west_coast.insert(terminus.clone());
            self.delta_promotions.push(terminus.clone());
            info!("river reaches the west coast at {terminus}");
        } else if self.east_delta.contains(&terminus) {
            self.east_coast.insert(terminus.clone());
            self.delta_promotions.push(terminus.clone());
            info!("river reaches the east coast at {terminus}");
        } else {
            info!("river reaches the sea at {terminus}");
        }
    }

    /// True when the name sits in any of the six band sets.
    fn coastal_member(&self, name: &str) -> bool {
        self.west_isles.contains(name)
            || self.west_coast.contains(name)
            || self.west_delta.contains(name)
            || self.east_delta.contains(name)
            || self.east_coast.contains(name)
            || self.east_isles.contains(name)
    }
}

fn pick<'a, T>(rng: &mut ChaCha8Rng, options: &'a [T]) -> &'a T {
    &options[rng.gen_range(0..options.len())]
}
