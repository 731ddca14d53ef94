use std::fmt;

use itertools::Itertools;

use model::base_types::{DriverCount, DriverIdx};
use model::trips::Trip;

/// the chain of trips served consecutively by one driver, in service order.
/// A shift always contains at least the trip the driver was spawned for.
#[derive(Debug, Clone)]
pub struct DriverShift {
    driver: DriverIdx,
    trips: Vec<Trip>,
}

impl DriverShift {
    pub fn new(driver: DriverIdx, first_trip: Trip) -> DriverShift {
        DriverShift {
            driver,
            trips: vec![first_trip],
        }
    }

    /// append the next trip of the chain.
    pub fn append(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    pub fn driver(&self) -> DriverIdx {
        self.driver
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn trips_iter(&self) -> impl Iterator<Item = &Trip> + '_ {
        self.trips.iter()
    }

    pub fn first_trip(&self) -> &Trip {
        &self.trips[0]
    }

    pub fn last_trip(&self) -> &Trip {
        &self.trips[self.trips.len() - 1]
    }
}

impl fmt::Display for DriverShift {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.driver,
            self.trips.iter().map(|trip| trip.to_string()).join("; ")
        )
    }
}

/// the full result of one dispatch run: one shift per spawned driver, in
/// spawn order. The driver count of the plan is the single number the engine
/// is asked for.
#[derive(Debug, Clone, Default)]
pub struct DispatchPlan {
    shifts: Vec<DriverShift>,
}

impl DispatchPlan {
    pub fn new(shifts: Vec<DriverShift>) -> DispatchPlan {
        DispatchPlan { shifts }
    }

    pub fn number_of_drivers(&self) -> DriverCount {
        self.shifts.len() as DriverCount
    }

    pub fn shifts_iter(&self) -> impl Iterator<Item = &DriverShift> + '_ {
        self.shifts.iter()
    }

    pub fn number_of_trips(&self) -> usize {
        self.shifts.iter().map(|shift| shift.len()).sum()
    }
}

impl fmt::Display for DispatchPlan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "dispatch plan with {} drivers:", self.number_of_drivers())?;
        for shift in &self.shifts {
            writeln!(f, "  {}", shift)?;
        }
        Ok(())
    }
}
