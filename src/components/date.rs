//! The calendar-polymorphic `Date` value type.

use tinystr::TinyAsciiStr;

use crate::components::calendar::{Calendar, CalendarFields, CalendarKind, MonthCode};
use crate::iso::{IsoDate, RataDie};
use crate::options::Overflow;
use crate::parsers;
use crate::KairosResult;

/// An immutable calendar date: a rata die position paired with the
/// [`Calendar`] whose rules interpret it.
///
/// All calendar-native fields (era, year, month code, day …) are computed
/// on demand from the pair, never stored, so they cannot fall out of sync
/// with each other. Deriving operations return new values; nothing
/// mutates in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    iso: IsoDate,
    calendar: Calendar,
}

impl Date {
    #[inline]
    pub(crate) const fn new_unchecked(iso: IsoDate, calendar: Calendar) -> Self {
        Self { iso, calendar }
    }

    /// Pins an ISO date to a calendar. Fails only when the calendar's
    /// representable span (for data-driven calendars, its table coverage)
    /// does not include the day.
    pub fn from_iso(iso: IsoDate, calendar: Calendar) -> KairosResult<Self> {
        calendar.resolve_fields(iso.to_rata_die())?;
        Ok(Self::new_unchecked(iso, calendar))
    }

    /// Constructs a date at a rata die under the given calendar.
    pub fn from_rata_die(rd: RataDie, calendar: Calendar) -> KairosResult<Self> {
        let iso = IsoDate::from_rata_die(rd)?;
        Self::from_iso(iso, calendar)
    }

    /// Constructs a date from calendar-native (arithmetic year, ordinal
    /// month, day) fields.
    pub fn try_new(year: i32, month: u8, day: u8, calendar: Calendar) -> KairosResult<Self> {
        let rd = calendar.fields_to_rata_die(year, month, day)?;
        Self::from_rata_die(rd, calendar)
    }

    /// Constructs a date from a partial field record, regulating fields
    /// per the overflow mode.
    pub fn from_partial(
        fields: CalendarFields,
        calendar: Calendar,
        overflow: Overflow,
    ) -> KairosResult<Self> {
        calendar.date_from_fields(fields, overflow)
    }

    /// The underlying ISO record.
    #[inline]
    pub fn iso_date(&self) -> IsoDate {
        self.iso
    }

    /// The calendar this date is expressed in.
    #[inline]
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    #[inline]
    pub fn calendar_kind(&self) -> CalendarKind {
        self.calendar.kind()
    }

    /// The calendar-agnostic linear position of this date.
    #[inline]
    pub fn to_rata_die(&self) -> RataDie {
        self.iso.to_rata_die()
    }

    /// Re-expresses the same day under another calendar. The rata die is
    /// calendar-agnostic; the conversion fails only when the target
    /// calendar's representable span does not include it.
    pub fn to_calendar(&self, calendar: Calendar) -> KairosResult<Self> {
        Self::from_iso(self.iso, calendar)
    }

    /// The ISO view of this date. Total: every date has one.
    #[inline]
    pub fn to_iso(&self) -> IsoDate {
        self.iso
    }

    // ==== Derived fields, all pure functions of (rata die, calendar) ====

    pub fn era(&self) -> Option<TinyAsciiStr<16>> {
        self.calendar.era(&self.iso)
    }

    pub fn era_year(&self) -> Option<i32> {
        self.calendar.era_year(&self.iso)
    }

    /// The arithmetic (extended) year.
    pub fn year(&self) -> i32 {
        self.calendar.extended_year(&self.iso)
    }

    /// The ordinal month; positional, not a cross-year identity.
    pub fn month(&self) -> u8 {
        self.calendar.month(&self.iso)
    }

    /// The month code, the stable identity of the month.
    pub fn month_code(&self) -> MonthCode {
        self.calendar.month_code(&self.iso)
    }

    pub fn month_is_leap(&self) -> bool {
        self.calendar.month_is_leap(&self.iso)
    }

    pub fn day(&self) -> u8 {
        self.calendar.day(&self.iso)
    }

    /// ISO day of week, Monday = 1 .. Sunday = 7.
    pub fn day_of_week(&self) -> u8 {
        self.iso.day_of_week()
    }

    pub fn day_of_year(&self) -> u16 {
        self.calendar.day_of_year(&self.iso)
    }

    pub fn months_in_year(&self) -> u8 {
        self.calendar.months_in_year(&self.iso)
    }

    pub fn days_in_month(&self) -> u8 {
        self.calendar.days_in_month(&self.iso)
    }

    pub fn days_in_year(&self) -> u16 {
        self.calendar.days_in_year(&self.iso)
    }

    pub fn in_leap_year(&self) -> bool {
        self.calendar.in_leap_year(&self.iso)
    }
}

impl IsoDate {
    /// The calendar-polymorphic view of this ISO date. Total in both
    /// directions with [`Date::to_iso`].
    pub fn to_any(self) -> Date {
        Date::new_unchecked(self, Calendar::ISO)
    }
}

impl From<IsoDate> for Date {
    fn from(iso: IsoDate) -> Self {
        iso.to_any()
    }
}

impl core::str::FromStr for Date {
    type Err = crate::KairosError;

    /// Parses an RFC 9557 date, honoring a `[u-ca=…]` calendar
    /// annotation by re-expressing the parsed ISO date in that calendar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = parsers::parse_date(s)?;
        let calendar = match parsed.calendar {
            Some(kind) => Calendar::new(kind),
            None => Calendar::ISO,
        };
        Self::from_iso(parsed.date, calendar)
    }
}

impl core::str::FromStr for IsoDate {
    type Err = crate::KairosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parsers::parse_date(s)?.date)
    }
}

impl core::fmt::Display for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        parsers::write_date_with_calendar(f, self.iso, self.calendar.identifier())
    }
}

impl core::fmt::Display for IsoDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        parsers::write_iso_date(f, *self)
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn iso_and_any_round_trip() {
        let iso = IsoDate::try_new(2024, 2, 29).unwrap();
        let date = iso.to_any();
        assert_eq!(date.to_iso(), iso);
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 29);
    }

    #[test]
    fn cross_calendar_identity() {
        let iso = IsoDate::try_new(2024, 2, 29).unwrap();
        let date = iso.to_any();
        for calendar in [
            Calendar::GREGORIAN,
            Calendar::HEBREW,
            Calendar::COPTIC,
            Calendar::ISLAMIC_CIVIL,
            Calendar::PERSIAN,
            Calendar::INDIAN,
            Calendar::CHINESE,
            Calendar::JAPANESE,
        ] {
            let converted = date.to_calendar(calendar).unwrap();
            let back = converted.to_calendar(Calendar::ISO).unwrap();
            assert_eq!(back.to_rata_die(), date.to_rata_die(), "{}", calendar.identifier());
            assert_eq!(back.to_iso(), iso);
        }
    }

    #[test]
    fn hebrew_fields_for_leap_day() {
        let date = Date::from_iso(IsoDate::try_new(2024, 2, 29).unwrap(), Calendar::HEBREW).unwrap();
        assert_eq!(date.year(), 5784);
        assert!(date.in_leap_year());
    }

    #[test]
    fn parses_calendar_annotation() {
        let date = Date::from_str("2024-02-29[u-ca=hebrew]").unwrap();
        assert_eq!(date.calendar_kind(), CalendarKind::Hebrew);
        assert_eq!(date.to_iso(), IsoDate::try_new(2024, 2, 29).unwrap());
    }

    #[test]
    fn parse_rejects_invalid_leap_day() {
        assert!(IsoDate::from_str("2023-02-29").is_err());
        let parsed = IsoDate::from_str("2024-02-29").unwrap();
        // 2024-02-29 is a Thursday.
        assert_eq!(parsed.day_of_week(), 4);
    }

    #[test]
    fn display_round_trip() {
        let date = Date::from_str("2024-07-04[u-ca=japanese]").unwrap();
        assert_eq!(alloc::format!("{date}"), "2024-07-04[u-ca=japanese]");
        let iso = IsoDate::from_str("0001-01-01").unwrap();
        assert_eq!(alloc::format!("{iso}"), "0001-01-01");
    }
}
