use super::Seconds;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Debug)] // care the ordering of the variants is important
pub enum TravelTime {
    Time(Seconds),
    Infinity, // always longer than all finite travel times
}

// methods:
impl TravelTime {
    pub fn in_sec(&self) -> Result<Seconds, &'static str> {
        match self {
            TravelTime::Time(t) => Ok(*t),
            TravelTime::Infinity => Err("TravelTime is infinity"),
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, TravelTime::Time(_))
    }
}

// static functions:
impl TravelTime {
    pub const ZERO: TravelTime = TravelTime::Time(0);

    pub fn from_seconds(seconds: Seconds) -> TravelTime {
        TravelTime::Time(seconds)
    }
}

impl Add for TravelTime {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match self {
            TravelTime::Infinity => TravelTime::Infinity,
            TravelTime::Time(t1) => match other {
                TravelTime::Infinity => TravelTime::Infinity,
                TravelTime::Time(t2) => TravelTime::Time(t1 + t2),
            },
        }
    }
}

impl Sum for TravelTime {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(TravelTime::ZERO, |a, b| a + b)
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TravelTime::Time(t) => write!(f, "{}s", t),
            TravelTime::Infinity => write!(f, "Inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinity_absorbs_under_addition() {
        assert_eq!(
            TravelTime::Infinity + TravelTime::Time(5),
            TravelTime::Infinity
        );
        assert_eq!(
            TravelTime::Time(5) + TravelTime::Infinity,
            TravelTime::Infinity
        );
        assert_eq!(TravelTime::Time(5) + TravelTime::Time(3), TravelTime::Time(8));
    }

    #[test]
    fn infinity_is_longer_than_any_finite_time() {
        assert!(TravelTime::Time(u64::MAX) < TravelTime::Infinity);
        assert!(TravelTime::ZERO < TravelTime::Time(1));
    }

    #[test]
    fn in_sec_fails_on_infinity() {
        assert_eq!(TravelTime::Time(42).in_sec(), Ok(42));
        assert!(TravelTime::Infinity.in_sec().is_err());
    }
}
