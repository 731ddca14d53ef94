use std::cmp::Reverse;
use std::sync::Arc;

use model::base_types::{DriverIdx, Idx, LocationId, Seconds, TravelTime};
use model::errors::ModelError;
use model::road_network::RoadNetwork;
use model::trips::Trip;
use solution::{DispatchPlan, DriverShift};

use crate::Solver;

#[cfg(test)]
mod tests;

/// Greedy trip-chaining dispatcher.
///
/// Trips are worked off earliest-requested first. Each spawned driver serves
/// its trip and is then kept busy by attaching the next pending trip whose
/// requested time coincides exactly with the driver's arrival at that trip's
/// origin (arrival at the current destination plus the shortest travel time
/// to the next origin). When no pending trip matches exactly, the chain ends
/// and the next pending trip spawns a fresh driver.
///
/// This reproduces one fixed deterministic heuristic. It is intentionally not
/// an optimal assignment: there is no slack, no lookahead and no matching
/// relaxation, and downstream consumers depend on this exact driver count.
pub struct GreedyChaining {
    network: Arc<RoadNetwork>,
    trips: Vec<Trip>,
}

impl Solver for GreedyChaining {
    fn initialize(network: Arc<RoadNetwork>, trips: Vec<Trip>) -> GreedyChaining {
        GreedyChaining { network, trips }
    }

    fn solve(&self) -> Result<DispatchPlan, ModelError> {
        // working list sorted by requested time, latest first; the tail is
        // always the earliest remaining trip. The sort is stable, so trips
        // with equal requested times keep their input order.
        let mut pending = self.trips.clone();
        pending.sort_by_key(|trip| Reverse(trip.requested_time()));

        let mut shifts: Vec<DriverShift> = Vec::new();

        while let Some(first_trip) = pending.pop() {
            let driver = DriverIdx::from(shifts.len() as Idx);
            let mut shift = DriverShift::new(driver, first_trip);

            let mut current_trip = first_trip;
            loop {
                let own_leg = self
                    .network
                    .shortest_travel_time(current_trip.origin(), current_trip.destination())?;
                let arrival_time = match own_leg {
                    TravelTime::Time(seconds) => current_trip.requested_time() + seconds,
                    // the trip itself cannot be completed, so nothing can be
                    // chained after it
                    TravelTime::Infinity => break,
                };

                match self.next_chainable(&pending, current_trip.destination(), arrival_time)? {
                    Some(index) => {
                        current_trip = pending.remove(index);
                        shift.append(current_trip);
                    }
                    None => break,
                }
            }

            shifts.push(shift);
        }

        Ok(DispatchPlan::new(shifts))
    }
}

impl GreedyChaining {
    /// scan the pending list from the earliest remaining trip towards the
    /// latest and return the index of the first trip whose requested time
    /// equals the driver's arrival at its origin exactly. An unreachable
    /// origin never matches (Infinity cannot equal a finite time).
    fn next_chainable(
        &self,
        pending: &[Trip],
        position: LocationId,
        arrival_time: Seconds,
    ) -> Result<Option<usize>, ModelError> {
        for index in (0..pending.len()).rev() {
            let trip = &pending[index];
            let approach = self.network.shortest_travel_time(position, trip.origin())?;
            if let TravelTime::Time(seconds) = approach {
                if arrival_time + seconds == trip.requested_time() {
                    return Ok(Some(index));
                }
            }
        }
        Ok(None)
    }
}
