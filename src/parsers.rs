//! RFC 9557 (IXDTF) parsing and serialization.
//!
//! The `ixdtf` crate handles the grammar; everything here is semantic
//! validation of the parsed records, plus the `Writeable` serializers
//! for the inverse direction.

use alloc::string::String;

use ixdtf::encoding::Utf8;
use ixdtf::parsers::{IxdtfParser, TimeZoneParser};
use ixdtf::records::{
    DateRecord, IxdtfParseRecord, TimeRecord, TimeZoneRecord, UtcOffsetRecord, UtcOffsetRecordOrZ,
};
use ixdtf::ParseError;
use writeable::Writeable;

use crate::components::calendar::CalendarKind;
use crate::error::ErrorMessage;
use crate::iso::{year_month_within_limits, IsoDate, IsoDateTime, IsoTime};
use crate::{KairosError, KairosResult};

/// Maps an ixdtf grammar error onto the crate error type, keeping
/// semantically-out-of-range fields distinct from syntax errors.
fn map_parse_error(err: ParseError) -> KairosError {
    let base = match err {
        ParseError::InvalidMonthRange | ParseError::InvalidDayRange => KairosError::range(),
        _ => KairosError::syntax(),
    };
    base.with_message(alloc::format!("{err:?}"))
}

fn parse_ixdtf(source: &str) -> KairosResult<IxdtfParseRecord<'_, Utf8>> {
    IxdtfParser::from_utf8(source.as_bytes())
        .parse()
        .map_err(map_parse_error)
}

/// Validates a date record against the supported year window.
fn validate_date_record(record: DateRecord) -> KairosResult<IsoDate> {
    if !year_month_within_limits(record.year, record.month) {
        return Err(KairosError::range().with_enum(ErrorMessage::DateOutOfRange));
    }
    IsoDate::try_new(record.year, record.month, record.day)
}

/// Builds an `IsoTime` from a time record, folding the fraction into
/// nanoseconds.
fn validate_time_record(record: TimeRecord) -> KairosResult<IsoTime> {
    let subsecond = match record.fraction {
        Some(fraction) => fraction
            .to_nanoseconds()
            .ok_or(KairosError::range().with_enum(ErrorMessage::FractionalTimeExceedsNineDigits))?,
        None => 0,
    };
    // An RFC 3339 leap second folds onto :59.
    let second = record.second.min(59);
    IsoTime::try_new(record.hour, record.minute, second, subsecond)
}

fn validate_calendar_annotation(annotation: Option<&[u8]>) -> KairosResult<Option<CalendarKind>> {
    annotation.map(CalendarKind::try_from_utf8).transpose()
}

fn offset_record_seconds(record: &UtcOffsetRecord) -> i32 {
    let sign = i32::from(record.sign() as i8);
    let magnitude = i32::from(record.hour()) * 3600
        + i32::from(record.minute()) * 60
        + i32::from(record.second().unwrap_or(0));
    // Sub-second offset precision is not representable and is truncated.
    sign * magnitude
}

/// A parsed date, with its calendar annotation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParsedDate {
    pub(crate) date: IsoDate,
    pub(crate) calendar: Option<CalendarKind>,
}

/// Parses a date string; a trailing time component is allowed and
/// ignored.
pub(crate) fn parse_date(source: &str) -> KairosResult<ParsedDate> {
    let record = parse_ixdtf(source)?;
    let date_record = record
        .date
        .ok_or(KairosError::syntax().with_message("a date component is required"))?;
    Ok(ParsedDate {
        date: validate_date_record(date_record)?,
        calendar: validate_calendar_annotation(record.calendar)?,
    })
}

/// A parsed date-time, with its calendar annotation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParsedDateTime {
    pub(crate) iso: IsoDateTime,
    pub(crate) calendar: Option<CalendarKind>,
}

/// Parses a date-time string; both components are required.
pub(crate) fn parse_date_time(source: &str) -> KairosResult<ParsedDateTime> {
    let record = parse_ixdtf(source)?;
    let date_record = record
        .date
        .ok_or(KairosError::syntax().with_message("a date component is required"))?;
    let time_record = record
        .time
        .ok_or(KairosError::syntax().with_message("a time component is required"))?;
    Ok(ParsedDateTime {
        iso: IsoDateTime::new_unchecked(
            validate_date_record(date_record)?,
            validate_time_record(time_record)?,
        ),
        calendar: validate_calendar_annotation(record.calendar)?,
    })
}

/// Parses a bare time string.
pub(crate) fn parse_time(source: &str) -> KairosResult<IsoTime> {
    let record = IxdtfParser::from_utf8(source.as_bytes())
        .parse_time()
        .map_err(map_parse_error)?;
    let time_record = record
        .time
        .ok_or(KairosError::syntax().with_message("a time component is required"))?;
    validate_time_record(time_record)
}

/// The bracketed time zone annotation of a zoned string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TimeZoneAnnotation {
    /// `[America/New_York]`
    Name(String),
    /// `[+05:30]`, seconds
    Offset(i32),
}

/// A parsed zoned date-time string, all facets optional beyond the
/// date-time itself; the entry points on `ZonedIsoDateTime` enforce
/// their required subsets.
#[derive(Debug, Clone)]
pub(crate) struct ParsedZonedDateTime {
    pub(crate) iso: IsoDateTime,
    pub(crate) calendar: Option<CalendarKind>,
    /// The offset between local time and UTC, in seconds.
    pub(crate) offset: Option<i32>,
    pub(crate) annotation: Option<TimeZoneAnnotation>,
}

pub(crate) fn parse_zoned_date_time(source: &str) -> KairosResult<ParsedZonedDateTime> {
    let record = parse_ixdtf(source)?;
    let date_record = record
        .date
        .ok_or(KairosError::syntax().with_message("a date component is required"))?;
    let time_record = record
        .time
        .ok_or(KairosError::syntax().with_message("a time component is required"))?;

    let offset = match record.offset {
        Some(UtcOffsetRecordOrZ::Z) => Some(0),
        Some(UtcOffsetRecordOrZ::Offset(offset_record)) => {
            Some(offset_record_seconds(&offset_record))
        }
        #[allow(unreachable_patterns)]
        Some(_) => return Err(KairosError::assert()),
        None => None,
    };

    let annotation = match record.tz {
        Some(annotation) => Some(match annotation.tz {
            TimeZoneRecord::Name(name) => {
                TimeZoneAnnotation::Name(String::from_utf8_lossy(name).into_owned())
            }
            TimeZoneRecord::Offset(minute_offset) => {
                let sign = i32::from(minute_offset.sign as i8);
                TimeZoneAnnotation::Offset(
                    sign * (i32::from(minute_offset.hour) * 3600
                        + i32::from(minute_offset.minute) * 60),
                )
            }
            _ => return Err(KairosError::assert()),
        }),
        None => None,
    };

    Ok(ParsedZonedDateTime {
        iso: IsoDateTime::new_unchecked(
            validate_date_record(date_record)?,
            validate_time_record(time_record)?,
        ),
        calendar: validate_calendar_annotation(record.calendar)?,
        offset,
        annotation,
    })
}

/// Parses a standalone `±HH:MM[:SS]` / `Z` offset string into seconds.
pub(crate) fn parse_utc_offset(source: &str) -> KairosResult<i32> {
    if source == "Z" || source == "z" {
        return Ok(0);
    }
    let record = TimeZoneParser::from_utf8(source.as_bytes())
        .parse_offset()
        .map_err(map_parse_error)?;
    Ok(offset_record_seconds(&record))
}

// ==== Serialization ====

/// An ISO date in `YYYY-MM-DD` / `±YYYYYY-MM-DD` form.
pub(crate) struct FormattableDate(pub(crate) IsoDate);

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let IsoDate { year, month, day } = self.0;
        if (0..=9999).contains(&year) {
            write_padded(sink, year as u32, 4)?;
        } else {
            sink.write_char(if year < 0 { '-' } else { '+' })?;
            write_padded(sink, year.unsigned_abs(), 6)?;
        }
        sink.write_char('-')?;
        write_padded(sink, u32::from(month), 2)?;
        sink.write_char('-')?;
        write_padded(sink, u32::from(day), 2)
    }
}

/// A time in `HH:MM:SS[.fff…]` form, trailing subsecond zeros trimmed.
pub(crate) struct FormattableTime(pub(crate) IsoTime);

impl Writeable for FormattableTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_padded(sink, u32::from(self.0.hour), 2)?;
        sink.write_char(':')?;
        write_padded(sink, u32::from(self.0.minute), 2)?;
        sink.write_char(':')?;
        write_padded(sink, u32::from(self.0.second), 2)?;
        let mut subsecond = self.0.subsecond_nanoseconds();
        if subsecond != 0 {
            let mut digits = 9;
            while subsecond % 10 == 0 {
                subsecond /= 10;
                digits -= 1;
            }
            sink.write_char('.')?;
            write_padded(sink, subsecond, digits)?;
        }
        Ok(())
    }
}

/// A UTC offset in `±HH:MM[:SS]` form.
pub(crate) struct FormattableOffset(pub(crate) i32);

impl Writeable for FormattableOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let seconds = self.0.unsigned_abs();
        sink.write_char(if self.0 < 0 { '-' } else { '+' })?;
        write_padded(sink, seconds / 3600, 2)?;
        sink.write_char(':')?;
        write_padded(sink, seconds / 60 % 60, 2)?;
        if seconds % 60 != 0 {
            sink.write_char(':')?;
            write_padded(sink, seconds % 60, 2)?;
        }
        Ok(())
    }
}

fn write_padded<W: core::fmt::Write + ?Sized>(
    sink: &mut W,
    value: u32,
    width: u8,
) -> core::fmt::Result {
    let mut digits = 1u8;
    let mut probe = value;
    while probe >= 10 {
        probe /= 10;
        digits += 1;
    }
    for _ in digits..width {
        sink.write_char('0')?;
    }
    let mut divisor = 1u32;
    for _ in 1..digits {
        divisor *= 10;
    }
    let mut rest = value;
    while divisor > 0 {
        sink.write_char((b'0' + (rest / divisor) as u8) as char)?;
        rest %= divisor;
        divisor /= 10;
    }
    Ok(())
}

pub(crate) fn write_iso_date(f: &mut core::fmt::Formatter<'_>, date: IsoDate) -> core::fmt::Result {
    FormattableDate(date).write_to(f)
}

pub(crate) fn write_date_with_calendar(
    f: &mut core::fmt::Formatter<'_>,
    date: IsoDate,
    calendar: &str,
) -> core::fmt::Result {
    FormattableDate(date).write_to(f)?;
    if calendar != "iso8601" {
        write!(f, "[u-ca={calendar}]")?;
    }
    Ok(())
}

pub(crate) fn write_iso_time(f: &mut core::fmt::Formatter<'_>, time: IsoTime) -> core::fmt::Result {
    FormattableTime(time).write_to(f)
}

pub(crate) fn write_iso_date_time(
    f: &mut core::fmt::Formatter<'_>,
    value: IsoDateTime,
) -> core::fmt::Result {
    FormattableDate(value.date).write_to(f)?;
    f.write_str("T")?;
    FormattableTime(value.time).write_to(f)
}

pub(crate) fn write_utc_offset(
    f: &mut core::fmt::Formatter<'_>,
    seconds: i32,
) -> core::fmt::Result {
    FormattableOffset(seconds).write_to(f)
}

#[cfg(test)]
mod tests {
    use writeable::Writeable;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parses_basic_date() {
        let parsed = parse_date("2024-02-29").unwrap();
        assert_eq!(parsed.date, IsoDate::try_new(2024, 2, 29).unwrap());
        assert!(parsed.calendar.is_none());
    }

    #[test]
    fn distinguishes_syntax_from_range_errors() {
        let syntax = parse_date("not a date").unwrap_err();
        assert_eq!(syntax.kind(), ErrorKind::Syntax);

        let range = parse_date("2023-02-29").unwrap_err();
        assert_eq!(range.kind(), ErrorKind::Range);
    }

    #[test]
    fn rejects_unknown_calendar_annotation() {
        assert!(parse_date("2024-01-01[u-ca=klingon]").is_err());
        assert_eq!(
            parse_date("2024-01-01[u-ca=hebrew]").unwrap().calendar,
            Some(crate::components::calendar::CalendarKind::Hebrew)
        );
    }

    #[test]
    fn zoned_facets_are_optional() {
        let parsed = parse_zoned_date_time("2024-01-01T00:00:00").unwrap();
        assert!(parsed.offset.is_none());
        assert!(parsed.annotation.is_none());

        let parsed = parse_zoned_date_time("2024-01-01T00:00:00Z[Etc/UTC]").unwrap();
        assert_eq!(parsed.offset, Some(0));
        assert_eq!(
            parsed.annotation,
            Some(TimeZoneAnnotation::Name("Etc/UTC".into()))
        );

        let parsed = parse_zoned_date_time("2024-01-01T00:00:00+05:30[+05:30]").unwrap();
        assert_eq!(parsed.offset, Some(19_800));
        assert_eq!(parsed.annotation, Some(TimeZoneAnnotation::Offset(19_800)));
    }

    #[test]
    fn fractional_seconds_fold_into_nanoseconds() {
        let parsed = parse_date_time("2024-01-01T00:00:00.123456789").unwrap();
        assert_eq!(parsed.iso.time.subsecond_nanoseconds(), 123_456_789);
    }

    #[test]
    fn serialization_forms() {
        assert_eq!(
            FormattableDate(IsoDate::try_new(2024, 7, 4).unwrap()).write_to_string(),
            "2024-07-04"
        );
        assert_eq!(
            FormattableDate(IsoDate::try_new(-43, 3, 15).unwrap()).write_to_string(),
            "-000043-03-15"
        );
        assert_eq!(
            FormattableTime(IsoTime::try_new(9, 5, 0, 250_000_000).unwrap()).write_to_string(),
            "09:05:00.25"
        );
        assert_eq!(FormattableOffset(19_800).write_to_string(), "+05:30");
        assert_eq!(FormattableOffset(-3_723).write_to_string(), "-01:02:03");
    }
}
