use std::fmt;

use crate::base_types::{LocationId, Seconds, TripIdx};

/// a single trip request: travel from origin to destination, starting exactly
/// at the requested time. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip {
    idx: TripIdx,
    origin: LocationId,
    destination: LocationId,
    requested_time: Seconds,
}

impl Trip {
    pub fn new(
        idx: TripIdx,
        origin: LocationId,
        destination: LocationId,
        requested_time: Seconds,
    ) -> Trip {
        Trip {
            idx,
            origin,
            destination,
            requested_time,
        }
    }

    pub fn idx(&self) -> TripIdx {
        self.idx
    }

    pub fn origin(&self) -> LocationId {
        self.origin
    }

    pub fn destination(&self) -> LocationId {
        self.destination
    }

    pub fn requested_time(&self) -> Seconds {
        self.requested_time
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "t = {}, {} -> {}",
            self.requested_time, self.origin, self.destination
        )
    }
}
