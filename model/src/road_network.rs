use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::base_types::{Idx, LocationId, Seconds, TravelTime};
use crate::errors::ModelError;


type TravelTimeTable = Arc<HashMap<LocationId, TravelTime>>;

/// a type for the directed road network between all locations of an instance.
///
/// The location set is fixed up front (ids 1..=N) and never changes afterwards.
/// Roads are directed and weighted by travel time in seconds. Roads are keyed
/// by (origin, destination) with insert-if-absent semantics: inserting a road
/// for a pair that already has one keeps the original travel time, even if the
/// new one differs.
///
/// Shortest travel times are answered from per-origin tables that are computed
/// lazily on the first query for that origin and memoized. The whole table
/// cache is cleared whenever a genuinely new road is inserted; a duplicate
/// insert leaves it untouched.
#[derive(Debug)]
pub struct RoadNetwork {
    locations: BTreeSet<LocationId>,
    roads: BTreeMap<LocationId, BTreeMap<LocationId, Seconds>>,

    // per-origin shortest travel time tables, filled lazily. The Mutex makes
    // population an at-most-once critical section per origin, so the network
    // can be shared behind an Arc.
    shortest_travel_times: Mutex<HashMap<LocationId, TravelTimeTable>>,
}

// static functions
impl RoadNetwork {
    pub fn new() -> RoadNetwork {
        RoadNetwork {
            locations: BTreeSet::new(),
            roads: BTreeMap::new(),
            shortest_travel_times: Mutex::new(HashMap::new()),
        }
    }

    /// create a network with locations 1..=count registered and no roads.
    pub fn with_locations(count: Idx) -> RoadNetwork {
        let mut network = RoadNetwork::new();
        for id in 1..=count {
            network.add_location(LocationId::from(id));
        }
        network
    }
}

// methods
impl RoadNetwork {
    /// register a location; registering a location twice has no effect.
    pub fn add_location(&mut self, location: LocationId) {
        if self.locations.insert(location) {
            self.roads.insert(location, BTreeMap::new());
        }
    }

    /// insert a directed road. Returns true if a new road was inserted.
    ///
    /// An unknown origin is a silent no-op (the road is dropped), and a road
    /// for an (origin, destination) pair that already exists keeps the first
    /// travel time. Only a genuinely new road clears the shortest travel time
    /// cache.
    pub fn add_road(
        &mut self,
        origin: LocationId,
        destination: LocationId,
        travel_time: Seconds,
    ) -> bool {
        let Some(adjacent) = self.roads.get_mut(&origin) else {
            return false;
        };
        if adjacent.contains_key(&destination) {
            return false;
        }
        adjacent.insert(destination, travel_time);
        self.cache_lock().clear();
        true
    }

    pub fn contains_location(&self, location: LocationId) -> bool {
        self.locations.contains(&location)
    }

    /// the number of registered locations.
    pub fn size(&self) -> usize {
        self.locations.len()
    }

    pub fn number_of_roads(&self) -> usize {
        self.roads.values().map(|adjacent| adjacent.len()).sum()
    }

    pub fn locations_iter(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.locations.iter().copied()
    }

    /// the minimum total travel time over directed paths from origin to
    /// destination, or TravelTime::Infinity if destination cannot be reached.
    ///
    /// Fails with UnknownLocation if either endpoint was never registered.
    pub fn shortest_travel_time(
        &self,
        origin: LocationId,
        destination: LocationId,
    ) -> Result<TravelTime, ModelError> {
        if !self.locations.contains(&origin) {
            return Err(ModelError::UnknownLocation { location: origin });
        }
        if !self.locations.contains(&destination) {
            return Err(ModelError::UnknownLocation {
                location: destination,
            });
        }
        let table = self.travel_time_table(origin);
        Ok(table
            .get(&destination)
            .copied()
            .unwrap_or(TravelTime::Infinity))
    }

    /// like shortest_travel_time, but an unreachable destination is an
    /// explicit error instead of the Infinity sentinel.
    pub fn checked_shortest_travel_time(
        &self,
        origin: LocationId,
        destination: LocationId,
    ) -> Result<Seconds, ModelError> {
        match self.shortest_travel_time(origin, destination)? {
            TravelTime::Time(seconds) => Ok(seconds),
            TravelTime::Infinity => Err(ModelError::UnreachableDestination {
                origin,
                destination,
            }),
        }
    }

    /// the number of per-origin tables currently memoized.
    pub fn cached_table_count(&self) -> usize {
        self.cache_lock().len()
    }
}

// shortest path computation
impl RoadNetwork {
    fn cache_lock(&self) -> std::sync::MutexGuard<'_, HashMap<LocationId, TravelTimeTable>> {
        self.shortest_travel_times
            .lock()
            .expect("shortest travel time cache lock poisoned")
    }

    fn travel_time_table(&self, origin: LocationId) -> TravelTimeTable {
        let mut cache = self.cache_lock();
        if let Some(table) = cache.get(&origin) {
            return table.clone();
        }
        let table = Arc::new(self.single_origin_travel_times(origin));
        cache.insert(origin, table.clone());
        table
    }

    /// label-setting shortest path without a priority queue: settle the
    /// closest unsettled location by a linear scan over all locations, then
    /// relax its outgoing roads. O(V^2), fine for the small networks here.
    fn single_origin_travel_times(&self, origin: LocationId) -> HashMap<LocationId, TravelTime> {
        let mut travel_times: HashMap<LocationId, TravelTime> = self
            .locations
            .iter()
            .map(|&location| {
                let time = if location == origin {
                    TravelTime::ZERO
                } else {
                    TravelTime::Infinity
                };
                (location, time)
            })
            .collect();

        let mut settled: BTreeSet<LocationId> = BTreeSet::new();
        while let Some(closest) = self.closest_unsettled(&settled, &travel_times) {
            settled.insert(closest);
            let time_of_closest = travel_times
                .get(&closest)
                .copied()
                .unwrap_or(TravelTime::Infinity);
            let Some(adjacent) = self.roads.get(&closest) else {
                continue;
            };
            for (&next, &road_time) in adjacent {
                // roads ending at an unregistered location are ignored
                let Some(&time_so_far) = travel_times.get(&next) else {
                    continue;
                };
                // Infinity absorbs, so relaxing from an unreachable location
                // can never underbid anything
                let candidate = time_of_closest + TravelTime::Time(road_time);
                if candidate < time_so_far {
                    travel_times.insert(next, candidate);
                }
            }
        }

        travel_times
    }

    /// the unsettled location with minimum tentative travel time. Locations
    /// are scanned in ascending id order and only a strictly smaller time
    /// replaces the current minimum, so ties settle the smallest id first.
    fn closest_unsettled(
        &self,
        settled: &BTreeSet<LocationId>,
        travel_times: &HashMap<LocationId, TravelTime>,
    ) -> Option<LocationId> {
        let mut closest: Option<(LocationId, TravelTime)> = None;
        for &location in &self.locations {
            if settled.contains(&location) {
                continue;
            }
            let time = travel_times
                .get(&location)
                .copied()
                .unwrap_or(TravelTime::Infinity);
            match closest {
                Some((_, best)) if time >= best => {}
                _ => closest = Some((location, time)),
            }
        }
        closest.map(|(location, _)| location)
    }
}

impl Default for RoadNetwork {
    fn default() -> Self {
        RoadNetwork::new()
    }
}

impl fmt::Display for RoadNetwork {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (origin, adjacent) in &self.roads {
            for (destination, travel_time) in adjacent {
                writeln!(f, "{} -{}-> {}", origin, travel_time, destination)?;
            }
        }
        Ok(())
    }
}
