//! The `Time` value type.

use crate::iso::IsoTime;
use crate::parsers;
use crate::{KairosError, KairosResult};

/// An immutable civil time of day with nanosecond precision.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub(crate) IsoTime);

impl Time {
    /// Midnight.
    pub const MIDNIGHT: Self = Self(IsoTime {
        hour: 0,
        minute: 0,
        second: 0,
        millisecond: 0,
        microsecond: 0,
        nanosecond: 0,
    });

    /// Creates a `Time`, range-checking every field.
    pub fn try_new(hour: u8, minute: u8, second: u8, subsecond: u32) -> KairosResult<Self> {
        IsoTime::try_new(hour, minute, second, subsecond).map(Self)
    }

    #[inline]
    pub(crate) const fn from_iso(time: IsoTime) -> Self {
        Self(time)
    }

    #[inline]
    pub fn hour(&self) -> u8 {
        self.0.hour
    }

    #[inline]
    pub fn minute(&self) -> u8 {
        self.0.minute
    }

    #[inline]
    pub fn second(&self) -> u8 {
        self.0.second
    }

    /// The combined subsecond value in nanoseconds, 0..=999_999_999.
    #[inline]
    pub fn subsecond_nanoseconds(&self) -> u32 {
        self.0.subsecond_nanoseconds()
    }

    #[inline]
    pub(crate) fn iso_time(&self) -> IsoTime {
        self.0
    }
}

impl core::str::FromStr for Time {
    type Err = KairosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_time(s).map(Self)
    }
}

impl core::fmt::Display for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        parsers::write_iso_time(f, self.0)
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn boundary_values() {
        let max = Time::try_new(23, 59, 59, 999_999_999).unwrap();
        assert_eq!(max.subsecond_nanoseconds(), 999_999_999);
        assert!(Time::try_new(24, 0, 0, 0).is_err());
        assert!(Time::try_new(0, 60, 0, 0).is_err());
        assert!(Time::try_new(0, 0, 60, 0).is_err());
    }

    #[test]
    fn parse_and_display() {
        let time = Time::from_str("08:05:30").unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (8, 5, 30));
        assert_eq!(alloc::format!("{time}"), "08:05:30");

        let fractional = Time::from_str("23:59:59.25").unwrap();
        assert_eq!(fractional.subsecond_nanoseconds(), 250_000_000);

        assert!(Time::from_str("24:00:00").is_err());
    }
}
