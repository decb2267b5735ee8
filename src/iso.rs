//! The ISO field records and the rata die day count.
//!
//! The two building blocks of every calendrical type in this crate:
//!
//!   - [`RataDie`]: a signed linear day count, day 1 = 0001-01-01
//!     proleptic Gregorian. The universal interchange representation
//!     between calendar systems.
//!   - [`IsoDate`] / [`IsoTime`] / [`IsoDateTime`]: validated ISO field
//!     records.
//!
//! An `IsoDate` always round-trips through its rata die.

use crate::error::ErrorMessage;
use crate::options::Overflow;
use crate::utils;
use crate::{KairosError, KairosResult};

/// The inclusive extended-year bounds of the supported ISO range.
pub const MIN_ISO_YEAR: i32 = -271_821;
pub const MAX_ISO_YEAR: i32 = 275_760;

/// Maximum distance of a supported day from the Unix epoch.
const MAX_EPOCH_DAY_SPAN: i64 = 100_000_001;

/// A linear day count: day 1 = 0001-01-01 proleptic Gregorian.
///
/// `RataDie` is totally ordered and calendar-agnostic; every calendar in
/// this crate converts through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RataDie(i64);

impl RataDie {
    /// Creates a `RataDie` from a raw day count.
    #[inline]
    pub const fn new(day: i64) -> Self {
        Self(day)
    }

    /// The raw day count.
    #[inline]
    pub const fn to_i64(self) -> i64 {
        self.0
    }

    /// Whether this day count lies within the supported conversion range.
    #[inline]
    pub(crate) const fn is_in_supported_range(self) -> bool {
        (self.0 - utils::RD_UNIX_EPOCH).abs() <= MAX_EPOCH_DAY_SPAN
    }

    /// ISO day of week, Monday = 1 .. Sunday = 7.
    #[inline]
    pub const fn day_of_week(self) -> u8 {
        utils::iso_day_of_week(self.0)
    }
}

/// Converts ISO (extended year, month, day) fields to their rata die.
///
/// Exact integer arithmetic; total for in-range proleptic Gregorian input.
#[inline]
pub fn iso_to_rata_die(year: i32, month: u8, day: u8) -> RataDie {
    RataDie(utils::rata_die_from_gregorian(year, month, day))
}

/// Converts a rata die to ISO (extended year, month, day) fields.
///
/// The total inverse of [`iso_to_rata_die`] over the supported range.
#[inline]
pub fn rata_die_to_iso(rd: RataDie) -> (i32, u8, u8) {
    utils::gregorian_from_rata_die(rd.to_i64())
}

/// The Gregorian leap year rule: divisible by 4, and not by 100 unless by
/// 400. Valid over the full extended-year space.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    utils::is_leap_year(year)
}

/// An ISO (extended year, month, day) record. Always holds a valid
/// calendar date within the supported range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates an `IsoDate` without validating the fields.
    #[inline]
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a validated `IsoDate`; rejects out-of-range fields.
    pub fn try_new(year: i32, month: u8, day: u8) -> KairosResult<Self> {
        Self::regulate(year, i32::from(month), i32::from(day), Overflow::Reject)
    }

    /// Regulates potentially out-of-range fields per the overflow mode.
    pub(crate) fn regulate(
        year: i32,
        month: i32,
        day: i32,
        overflow: Overflow,
    ) -> KairosResult<Self> {
        if !(MIN_ISO_YEAR..=MAX_ISO_YEAR).contains(&year) {
            return Err(KairosError::range().with_enum(ErrorMessage::DateOutOfRange));
        }
        let date = match overflow {
            Overflow::Constrain => {
                let month = month.clamp(1, 12) as u8;
                let max_day = utils::iso_days_in_month(year, month);
                Self::new_unchecked(year, month, day.clamp(1, i32::from(max_day)) as u8)
            }
            Overflow::Reject => {
                if !(1..=12).contains(&month) {
                    return Err(KairosError::range().with_enum(ErrorMessage::DateOutOfRange));
                }
                let max_day = utils::iso_days_in_month(year, month as u8);
                if !(1..=i32::from(max_day)).contains(&day) {
                    return Err(KairosError::range().with_enum(ErrorMessage::DateOutOfRange));
                }
                Self::new_unchecked(year, month as u8, day as u8)
            }
        };
        if !date.to_rata_die().is_in_supported_range() {
            return Err(KairosError::range().with_enum(ErrorMessage::DateOutOfRange));
        }
        Ok(date)
    }

    /// Converts this date to its rata die.
    #[inline]
    pub fn to_rata_die(self) -> RataDie {
        iso_to_rata_die(self.year, self.month, self.day)
    }

    /// Reconstructs an `IsoDate` from a rata die; the only failure is an
    /// out-of-range day count.
    pub fn from_rata_die(rd: RataDie) -> KairosResult<Self> {
        if !rd.is_in_supported_range() {
            return Err(KairosError::range().with_enum(ErrorMessage::DateOutOfRange));
        }
        let (year, month, day) = rata_die_to_iso(rd);
        Ok(Self::new_unchecked(year, month, day))
    }

    /// ISO day of week, Monday = 1 .. Sunday = 7.
    #[inline]
    pub fn day_of_week(self) -> u8 {
        self.to_rata_die().day_of_week()
    }

    /// Ordinal day of the year, starting at 1.
    #[inline]
    pub fn day_of_year(self) -> u16 {
        utils::iso_day_of_year(self.year, self.month, self.day)
    }

    #[inline]
    pub fn days_in_month(self) -> u8 {
        utils::iso_days_in_month(self.year, self.month)
    }

    #[inline]
    pub fn days_in_year(self) -> u16 {
        utils::iso_days_in_year(self.year)
    }

    #[inline]
    pub fn in_leap_year(self) -> bool {
        utils::is_leap_year(self.year)
    }
}

/// Whether a parsed year/month pair is inside the supported window. Used
/// by the parsers before day-level validation.
pub(crate) fn year_month_within_limits(year: i32, _month: u8) -> bool {
    (MIN_ISO_YEAR..=MAX_ISO_YEAR).contains(&year)
}

/// An ISO time-of-day record. Subsecond precision is split across the
/// millisecond/microsecond/nanosecond fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,         // 0..=23
    pub minute: u8,       // 0..=59
    pub second: u8,       // 0..=59
    pub millisecond: u16, // 0..=999
    pub microsecond: u16, // 0..=999
    pub nanosecond: u16,  // 0..=999
}

impl IsoTime {
    pub(crate) const fn new_unchecked(
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        microsecond: u16,
        nanosecond: u16,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
        }
    }

    /// Creates a validated `IsoTime` from hour/minute/second fields and a
    /// combined subsecond-nanoseconds value.
    pub fn try_new(hour: u8, minute: u8, second: u8, subsecond: u32) -> KairosResult<Self> {
        if hour > 23 || minute > 59 || second > 59 || subsecond > 999_999_999 {
            return Err(KairosError::range().with_enum(ErrorMessage::TimeOutOfRange));
        }
        Ok(Self::new_unchecked(
            hour,
            minute,
            second,
            (subsecond / 1_000_000) as u16,
            (subsecond / 1_000 % 1_000) as u16,
            (subsecond % 1_000) as u16,
        ))
    }

    /// The combined subsecond value in nanoseconds.
    #[inline]
    pub const fn subsecond_nanoseconds(&self) -> u32 {
        self.millisecond as u32 * 1_000_000 + self.microsecond as u32 * 1_000 + self.nanosecond as u32
    }

    /// Seconds after local midnight, ignoring subseconds.
    #[inline]
    pub(crate) const fn seconds_of_day(&self) -> i32 {
        self.hour as i32 * 3600 + self.minute as i32 * 60 + self.second as i32
    }
}

/// The record pairing of an [`IsoDate`] and an [`IsoTime`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Applies a second-precision offset to this local date-time,
    /// rebalancing across day boundaries. Used for wall-clock/UTC
    /// conversions.
    pub(crate) fn add_seconds(&self, seconds: i64) -> KairosResult<Self> {
        let total = i64::from(self.time.seconds_of_day()) + seconds;
        let day_carry = total.div_euclid(86_400);
        let seconds_of_day = total.rem_euclid(86_400);

        let rd = RataDie::new(self.date.to_rata_die().to_i64() + day_carry);
        let date = IsoDate::from_rata_die(rd)?;
        let time = IsoTime::new_unchecked(
            (seconds_of_day / 3600) as u8,
            (seconds_of_day / 60 % 60) as u8,
            (seconds_of_day % 60) as u8,
            self.time.millisecond,
            self.time.microsecond,
            self.time.nanosecond,
        );
        Ok(Self::new_unchecked(date, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_date_round_trips_through_rata_die() {
        let date = IsoDate::try_new(2024, 2, 29).unwrap();
        assert_eq!(IsoDate::from_rata_die(date.to_rata_die()).unwrap(), date);
    }

    #[test]
    fn invalid_dates_are_rejected() {
        // 2023 is not a leap year.
        assert!(IsoDate::try_new(2023, 2, 29).is_err());
        assert!(IsoDate::try_new(2024, 0, 1).is_err());
        assert!(IsoDate::try_new(2024, 13, 1).is_err());
        assert!(IsoDate::try_new(2024, 4, 31).is_err());
    }

    #[test]
    fn constrain_clamps_fields() {
        let date = IsoDate::regulate(2023, 2, 29, Overflow::Constrain).unwrap();
        assert_eq!((date.month, date.day), (2, 28));
        let date = IsoDate::regulate(2023, 14, 40, Overflow::Constrain).unwrap();
        assert_eq!((date.month, date.day), (12, 31));
    }

    #[test]
    fn time_subsecond_split() {
        let time = IsoTime::try_new(23, 59, 59, 999_999_999).unwrap();
        assert_eq!(time.millisecond, 999);
        assert_eq!(time.microsecond, 999);
        assert_eq!(time.nanosecond, 999);
        assert_eq!(time.subsecond_nanoseconds(), 999_999_999);

        assert!(IsoTime::try_new(24, 0, 0, 0).is_err());
        assert!(IsoTime::try_new(0, 0, 0, 1_000_000_000).is_err());
    }

    #[test]
    fn add_seconds_balances_across_midnight() {
        let dt = IsoDateTime::new_unchecked(
            IsoDate::try_new(2024, 1, 1).unwrap(),
            IsoTime::try_new(0, 30, 0, 0).unwrap(),
        );
        let earlier = dt.add_seconds(-3600).unwrap();
        assert_eq!(earlier.date, IsoDate::try_new(2023, 12, 31).unwrap());
        assert_eq!((earlier.time.hour, earlier.time.minute), (23, 30));
    }
}
