//! `MonthCode` and the calendar field records.

use tinystr::{tinystr, TinyAsciiStr};

use super::Calendar;
use crate::error::ErrorMessage;
use crate::options::Overflow;
use crate::{KairosError, KairosResult};

/// A calendar-agnostic month identifier, e.g. `M01`, or `M05L` for a
/// leap month.
///
/// Month codes are the stable identity of a month. The ordinal month
/// number of the same code can differ between years in lunisolar
/// calendars, which is why the two are distinct throughout the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCode(pub(crate) TinyAsciiStr<4>);

impl MonthCode {
    /// Parses and shape-checks a month code from UTF-8 bytes.
    pub fn try_from_utf8(src: &[u8]) -> KairosResult<Self> {
        if !(3..=4).contains(&src.len()) {
            return Err(KairosError::range().with_enum(ErrorMessage::UnknownMonthCode));
        }
        let inner = TinyAsciiStr::<4>::try_from_utf8(src)
            .map_err(|_| KairosError::range().with_enum(ErrorMessage::UnknownMonthCode))?;
        let bytes = inner.all_bytes();
        if bytes[0] != b'M'
            || !bytes[1].is_ascii_digit()
            || !bytes[2].is_ascii_digit()
            || (src.len() == 4 && bytes[3] != b'L')
        {
            return Err(KairosError::range().with_enum(ErrorMessage::UnknownMonthCode));
        }
        Ok(Self(inner))
    }

    /// Builds the non-leap month code for a month number.
    pub(crate) fn from_month_number(month: u8) -> Self {
        debug_assert!((1..=13).contains(&month));
        let tinystr = TinyAsciiStr::<4>::try_from_raw([
            b'M',
            month / 10 + b'0',
            month % 10 + b'0',
            0,
        ])
        .unwrap_or(tinystr!(4, "M00"));
        Self(tinystr)
    }

    /// Builds the leap month code following the given month number.
    pub(crate) fn leap_for_month_number(month: u8) -> Self {
        debug_assert!((1..=12).contains(&month));
        let tinystr = TinyAsciiStr::<4>::try_from_raw([
            b'M',
            month / 10 + b'0',
            month % 10 + b'0',
            b'L',
        ])
        .unwrap_or(tinystr!(4, "M00L"));
        Self(tinystr)
    }

    /// The numeric part of the code.
    pub fn month_number(&self) -> u8 {
        let bytes = self.0.all_bytes();
        (bytes[1] - b'0') * 10 + (bytes[2] - b'0')
    }

    /// Whether this code names a leap month.
    pub fn is_leap_month(&self) -> bool {
        self.0.all_bytes()[3] == b'L'
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_tinystr(&self) -> TinyAsciiStr<4> {
        self.0
    }
}

impl core::str::FromStr for MonthCode {
    type Err = KairosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_utf8(s.as_bytes())
    }
}

impl core::fmt::Display for MonthCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A partial set of calendar-native date fields, used to construct dates
/// from era/year/month-code combinations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    pub era: Option<TinyAsciiStr<16>>,
    pub era_year: Option<i32>,
    /// The arithmetic (extended) year.
    pub year: Option<i32>,
    /// The ordinal month.
    pub month: Option<u8>,
    pub month_code: Option<MonthCode>,
    pub day: Option<u8>,
}

/// A fully resolved (arithmetic year, ordinal month, day) triple.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedCalendarFields {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) day: u8,
}

impl ResolvedCalendarFields {
    pub(crate) fn try_from_fields(
        calendar: &Calendar,
        fields: &CalendarFields,
        overflow: Overflow,
    ) -> KairosResult<Self> {
        let year = resolve_year(calendar, fields)?;
        let month = resolve_month(calendar, fields, year, overflow)?;
        let day = fields
            .day
            .ok_or(KairosError::r#type().with_enum(ErrorMessage::MissingDayField))?;
        let max_day = calendar.days_in_ordinal_month(year, month);
        let day = match overflow {
            Overflow::Constrain => day.clamp(1, max_day),
            Overflow::Reject => {
                super::rules::validate_day(day, max_day)?;
                day
            }
        };
        Ok(Self { year, month, day })
    }
}

/// Resolves the arithmetic year from year and/or era fields.
fn resolve_year(calendar: &Calendar, fields: &CalendarFields) -> KairosResult<i32> {
    match (fields.year, fields.era, fields.era_year) {
        (maybe_year, Some(era), Some(era_year)) => {
            let info = super::era::era_info(calendar.kind(), era.as_str())
                .ok_or(KairosError::range().with_enum(ErrorMessage::UnknownEra))?;
            if !info.range.contains(&era_year) {
                return Err(KairosError::range().with_enum(ErrorMessage::EraYearOutOfRange));
            }
            let arithmetic = info.arithmetic_year_for(era_year);
            if let Some(year) = maybe_year {
                if year != arithmetic {
                    return Err(KairosError::range().with_enum(ErrorMessage::ConflictingYearFields));
                }
            }
            Ok(arithmetic)
        }
        (Some(year), None, None) => Ok(year),
        _ => Err(KairosError::r#type().with_enum(ErrorMessage::MissingYearField)),
    }
}

/// Resolves the ordinal month from month and/or monthCode fields.
fn resolve_month(
    calendar: &Calendar,
    fields: &CalendarFields,
    year: i32,
    overflow: Overflow,
) -> KairosResult<u8> {
    match (fields.month_code, fields.month) {
        (Some(code), maybe_month) => {
            let ordinal = calendar.ordinal_for_month_code(year, code, overflow)?;
            if let Some(month) = maybe_month {
                if month != ordinal {
                    return Err(
                        KairosError::range().with_enum(ErrorMessage::ConflictingMonthFields)
                    );
                }
            }
            Ok(ordinal)
        }
        (None, Some(month)) => {
            let max = calendar.months_in_arithmetic_year(year);
            if overflow == Overflow::Constrain {
                return Ok(month.clamp(1, max));
            }
            if !(1..=max).contains(&month) {
                return Err(KairosError::range().with_enum(ErrorMessage::DateOutOfRange));
            }
            Ok(month)
        }
        (None, None) => Err(KairosError::r#type().with_enum(ErrorMessage::MissingMonthField)),
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn valid_month_codes() {
        let code = MonthCode::from_str("M01").unwrap();
        assert!(!code.is_leap_month());
        assert_eq!(code.month_number(), 1);

        let code = MonthCode::from_str("M12").unwrap();
        assert_eq!(code.month_number(), 12);

        let code = MonthCode::from_str("M05L").unwrap();
        assert!(code.is_leap_month());
        assert_eq!(code.month_number(), 5);
    }

    #[test]
    fn invalid_month_codes() {
        for bad in ["01", "N01", "M01R", "M1", "M1L", "M015"] {
            assert!(MonthCode::from_str(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn month_code_construction() {
        assert_eq!(MonthCode::from_month_number(1).as_str(), "M01");
        assert_eq!(MonthCode::from_month_number(13).as_str(), "M13");
        assert_eq!(MonthCode::leap_for_month_number(5).as_str(), "M05L");
    }
}
