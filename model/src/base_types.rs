use derive_more::Display;
use derive_more::From;

pub mod travel_time;

pub use travel_time::TravelTime;

pub type Idx = u32;

/// all times in the instance are plain integer seconds.
pub type Seconds = u64;

pub type DriverCount = u32;

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationId(pub Idx);

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "trip{}", _0)]
pub struct TripIdx(pub Idx);

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "driver{}", _0)]
pub struct DriverIdx(pub Idx);
