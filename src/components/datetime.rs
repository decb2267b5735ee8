//! The composite `DateTime` value types.

use crate::components::calendar::Calendar;
use crate::components::date::Date;
use crate::components::time::Time;
use crate::iso::IsoDateTime;
use crate::parsers;
use crate::{KairosError, KairosResult};

/// A calendar-polymorphic date paired with a time of day. Owns both
/// components exclusively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    /// Pairs a date and a time.
    pub const fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    #[inline]
    pub fn date(&self) -> &Date {
        &self.date
    }

    #[inline]
    pub fn time(&self) -> &Time {
        &self.time
    }

    #[inline]
    pub fn calendar(&self) -> &Calendar {
        self.date.calendar()
    }

    /// The calendar-fixed ISO view.
    pub fn to_iso(&self) -> IsoDateTime {
        IsoDateTime::new_unchecked(self.date.to_iso(), self.time.iso_time())
    }

    /// Re-expresses the date component under another calendar.
    pub fn to_calendar(&self, calendar: Calendar) -> KairosResult<Self> {
        Ok(Self::new(self.date.to_calendar(calendar)?, self.time))
    }
}

impl core::str::FromStr for DateTime {
    type Err = KairosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = parsers::parse_date_time(s)?;
        let calendar = match parsed.calendar {
            Some(kind) => Calendar::new(kind),
            None => Calendar::ISO,
        };
        let date = Date::from_iso(parsed.iso.date, calendar)?;
        Ok(Self::new(date, Time::from_iso(parsed.iso.time)))
    }
}

impl core::fmt::Display for DateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        parsers::write_iso_date_time(f, self.to_iso())?;
        if !self.date.calendar().is_iso() {
            write!(f, "[u-ca={}]", self.date.calendar().identifier())?;
        }
        Ok(())
    }
}

impl IsoDateTime {
    /// Creates a validated ISO date-time pair.
    pub fn try_new(date: crate::iso::IsoDate, time: Time) -> KairosResult<Self> {
        Ok(Self::new_unchecked(date, time.iso_time()))
    }
}

impl core::str::FromStr for IsoDateTime {
    type Err = KairosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parsers::parse_date_time(s)?.iso)
    }
}

impl core::fmt::Display for IsoDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        parsers::write_iso_date_time(f, *self)
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;
    use crate::components::calendar::CalendarKind;
    use crate::iso::IsoDate;

    #[test]
    fn parse_date_time_string() {
        let dt = DateTime::from_str("2024-02-29T23:59:59.999999999").unwrap();
        assert_eq!(dt.date().to_iso(), IsoDate::try_new(2024, 2, 29).unwrap());
        assert_eq!(dt.time().subsecond_nanoseconds(), 999_999_999);
        assert_eq!(dt.calendar().kind(), CalendarKind::Iso);
    }

    #[test]
    fn parse_with_calendar_annotation() {
        let dt = DateTime::from_str("2024-02-29T12:00:00[u-ca=buddhist]").unwrap();
        assert_eq!(dt.calendar().kind(), CalendarKind::Buddhist);
        assert_eq!(dt.date().year(), 2567);
    }

    #[test]
    fn datetime_requires_time_component() {
        assert!(IsoDateTime::from_str("2024-02-29").is_err());
    }

    #[test]
    fn display_round_trip() {
        let dt = IsoDateTime::from_str("2024-07-04T09:30:00").unwrap();
        assert_eq!(alloc::format!("{dt}"), "2024-07-04T09:30:00");
    }
}
