//! The zoned composite value types and their graduated-strictness
//! parse entry points.

use alloc::string::String;

use writeable::Writeable;

use crate::components::calendar::Calendar;
use crate::components::date::Date;
use crate::components::time::Time;
use crate::components::timezone::{TimeZoneInfo, UtcOffset, VariantOffsetsCalculator};
use crate::error::ErrorMessage;
use crate::iana::IanaParser;
use crate::iso::IsoDate;
use crate::options::{DisplayCalendar, DisplayOffset, DisplayTimeZone};
use crate::parsers::{self, TimeZoneAnnotation};
use crate::{KairosError, KairosResult};

/// How strictly a zoned parse treats the offset and zone annotation.
///
/// The four entry points are not redundant surface: stored strings and
/// wire formats legitimately carry different facet subsets, and the
/// caller knows which completeness level it needs.
#[derive(Debug, Clone, Copy)]
struct ParseConfig {
    require_offset: bool,
    require_annotation: bool,
    resolve_variant: bool,
}

/// A calendar-fixed zoned date-time: ISO date, time, and zone reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedIsoDateTime {
    date: IsoDate,
    time: Time,
    zone: TimeZoneInfo,
}

impl ZonedIsoDateTime {
    /// Assembles a zoned date-time from its three components.
    pub const fn new(date: IsoDate, time: Time, zone: TimeZoneInfo) -> Self {
        Self { date, time, zone }
    }

    #[inline]
    pub fn date(&self) -> IsoDate {
        self.date
    }

    #[inline]
    pub fn time(&self) -> Time {
        self.time
    }

    #[inline]
    pub fn zone(&self) -> &TimeZoneInfo {
        &self.zone
    }

    /// The UTC date-time this value designates, when the offset facet
    /// is present.
    pub fn to_utc_date_time(&self) -> KairosResult<crate::iso::IsoDateTime> {
        let offset = self
            .zone
            .offset()
            .ok_or(KairosError::r#type().with_enum(ErrorMessage::MissingOffset))?;
        crate::iso::IsoDateTime::new_unchecked(self.date, self.time.iso_time())
            .add_seconds(-i64::from(offset.seconds()))
    }

    /// The UTC epoch second of this value, when the offset facet is
    /// present.
    pub fn epoch_seconds(&self) -> Option<i64> {
        let offset = self.zone.offset()?;
        let local = self.date.to_rata_die().to_i64() * 86_400
            + i64::from(self.time.hour()) * 3600
            + i64::from(self.time.minute()) * 60
            + i64::from(self.time.second());
        Some(local - i64::from(offset.seconds()))
    }

    /// Orders this value against another by the instant designated;
    /// `None` when either lacks its offset facet.
    pub fn compare_instant(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.epoch_seconds()?.cmp(&other.epoch_seconds()?))
    }

    /// Serializes to RFC 9557, honoring the display options for the
    /// offset and the time zone annotation.
    pub fn to_ixdtf_string(
        &self,
        display_offset: DisplayOffset,
        display_zone: DisplayTimeZone,
    ) -> String {
        let mut out = String::new();
        let _ = parsers::FormattableDate(self.date).write_to(&mut out);
        out.push('T');
        let _ = parsers::FormattableTime(self.time.iso_time()).write_to(&mut out);
        if display_offset == DisplayOffset::Auto {
            if let Some(offset) = self.zone.offset() {
                let _ = parsers::FormattableOffset(offset.seconds()).write_to(&mut out);
            }
        }
        if display_zone != DisplayTimeZone::Never && !self.zone.id().is_unknown() {
            out.push('[');
            if display_zone == DisplayTimeZone::Critical {
                out.push('!');
            }
            match IanaParser::new().canonicalize(self.zone.id()) {
                Some(iana) => out.push_str(iana),
                None => out.push_str(self.zone.id().as_str()),
            }
            out.push(']');
        }
        out
    }

    /// Requires both offset and IANA zone, and resolves the variant
    /// against the zone data; the fully-populated form.
    pub fn full_from_string(source: &str) -> KairosResult<Self> {
        Self::from_string_with_config(
            source,
            ParseConfig {
                require_offset: true,
                require_annotation: true,
                resolve_variant: true,
            },
        )
    }

    /// Requires the IANA zone annotation; any offset in the string is
    /// not carried into the result.
    pub fn location_only_from_string(source: &str) -> KairosResult<Self> {
        Self::from_string_with_config(
            source,
            ParseConfig {
                require_offset: false,
                require_annotation: true,
                resolve_variant: false,
            },
        )
    }

    /// Requires the offset; the zone identity is left unknown.
    pub fn offset_only_from_string(source: &str) -> KairosResult<Self> {
        Self::from_string_with_config(
            source,
            ParseConfig {
                require_offset: true,
                require_annotation: false,
                resolve_variant: false,
            },
        )
    }

    /// Carries whichever facets the string has.
    pub fn lenient_from_string(source: &str) -> KairosResult<Self> {
        Self::from_string_with_config(
            source,
            ParseConfig {
                require_offset: false,
                require_annotation: false,
                resolve_variant: false,
            },
        )
    }

    fn from_string_with_config(source: &str, config: ParseConfig) -> KairosResult<Self> {
        let parsed = parsers::parse_zoned_date_time(source)?;

        let offset = match parsed.offset {
            Some(seconds) => Some(UtcOffset::from_seconds(seconds)?),
            None if config.require_offset => {
                return Err(KairosError::range().with_enum(ErrorMessage::MissingOffset));
            }
            None => None,
        };

        let id = match &parsed.annotation {
            Some(TimeZoneAnnotation::Name(name)) => IanaParser::new().parse(name),
            // A bracketed offset annotation names no zone.
            Some(TimeZoneAnnotation::Offset(_)) if config.require_annotation => {
                return Err(
                    KairosError::range().with_enum(ErrorMessage::MissingTimeZoneAnnotation)
                );
            }
            Some(TimeZoneAnnotation::Offset(_)) => crate::components::timezone::TimeZone::UNKNOWN,
            None if config.require_annotation => {
                return Err(
                    KairosError::range().with_enum(ErrorMessage::MissingTimeZoneAnnotation)
                );
            }
            None => crate::components::timezone::TimeZone::UNKNOWN,
        };

        let offset = if config.require_annotation && !config.require_offset {
            // Location-only: the zone identity is the payload.
            None
        } else {
            offset
        };

        let date = parsed.iso.date;
        let time = Time::from_iso(parsed.iso.time);
        let mut zone = TimeZoneInfo::from_parts(id, offset, None);

        if config.resolve_variant {
            zone = zone
                .at_date_time_iso(date, time)
                .infer_variant(&VariantOffsetsCalculator::new())?;
        }

        Ok(Self::new(date, time, zone))
    }
}

/// A calendar-polymorphic zoned date-time. Owns its date, time, and zone
/// reference exclusively; all three are destroyed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedDateTime {
    date: Date,
    time: Time,
    zone: TimeZoneInfo,
}

impl ZonedDateTime {
    pub const fn new(date: Date, time: Time, zone: TimeZoneInfo) -> Self {
        Self { date, time, zone }
    }

    #[inline]
    pub fn date(&self) -> &Date {
        &self.date
    }

    #[inline]
    pub fn time(&self) -> Time {
        self.time
    }

    #[inline]
    pub fn zone(&self) -> &TimeZoneInfo {
        &self.zone
    }

    #[inline]
    pub fn calendar(&self) -> &Calendar {
        self.date.calendar()
    }

    /// The calendar-fixed view of this value.
    pub fn to_iso(&self) -> ZonedIsoDateTime {
        ZonedIsoDateTime::new(self.date.to_iso(), self.time, self.zone)
    }

    /// Serializes to RFC 9557 with a calendar annotation per the display
    /// option.
    pub fn to_ixdtf_string(
        &self,
        display_offset: DisplayOffset,
        display_zone: DisplayTimeZone,
        display_calendar: DisplayCalendar,
    ) -> String {
        let mut out = self.to_iso().to_ixdtf_string(display_offset, display_zone);
        let show_calendar = match display_calendar {
            DisplayCalendar::Auto => !self.date.calendar().is_iso(),
            DisplayCalendar::Always | DisplayCalendar::Critical => true,
            DisplayCalendar::Never => false,
        };
        if show_calendar {
            out.push('[');
            if display_calendar == DisplayCalendar::Critical {
                out.push('!');
            }
            out.push_str("u-ca=");
            out.push_str(self.date.calendar().identifier());
            out.push(']');
        }
        out
    }

    /// See [`ZonedIsoDateTime::full_from_string`]; additionally honors a
    /// `[u-ca=…]` annotation.
    pub fn full_from_string(source: &str) -> KairosResult<Self> {
        Self::with_calendar(source, ZonedIsoDateTime::full_from_string(source)?)
    }

    /// See [`ZonedIsoDateTime::location_only_from_string`].
    pub fn location_only_from_string(source: &str) -> KairosResult<Self> {
        Self::with_calendar(source, ZonedIsoDateTime::location_only_from_string(source)?)
    }

    /// See [`ZonedIsoDateTime::offset_only_from_string`].
    pub fn offset_only_from_string(source: &str) -> KairosResult<Self> {
        Self::with_calendar(source, ZonedIsoDateTime::offset_only_from_string(source)?)
    }

    /// See [`ZonedIsoDateTime::lenient_from_string`].
    pub fn lenient_from_string(source: &str) -> KairosResult<Self> {
        Self::with_calendar(source, ZonedIsoDateTime::lenient_from_string(source)?)
    }

    fn with_calendar(source: &str, iso: ZonedIsoDateTime) -> KairosResult<Self> {
        let calendar = match parsers::parse_zoned_date_time(source)?.calendar {
            Some(kind) => Calendar::new(kind),
            None => Calendar::ISO,
        };
        Ok(Self::new(
            Date::from_iso(iso.date(), calendar)?,
            iso.time(),
            *iso.zone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::timezone::TimeZoneVariant;

    #[test]
    fn offset_only_accepts_bare_offset() {
        let zdt = ZonedIsoDateTime::offset_only_from_string("2024-01-01T00:00:00+05:30").unwrap();
        assert!(zdt.zone().id().is_unknown());
        assert_eq!(zdt.zone().offset().unwrap().seconds(), 19_800);
        assert!(zdt.zone().variant().is_none());
    }

    #[test]
    fn location_only_requires_annotation() {
        let err =
            ZonedIsoDateTime::location_only_from_string("2024-01-01T00:00:00+05:30").unwrap_err();
        assert!(err.matches(ErrorMessage::MissingTimeZoneAnnotation));

        let zdt = ZonedIsoDateTime::location_only_from_string(
            "2024-01-01T00:00:00+05:30[Asia/Kolkata]",
        )
        .unwrap();
        assert_eq!(zdt.zone().id().as_str(), "inccu");
        assert!(zdt.zone().offset().is_none());
    }

    #[test]
    fn full_resolves_the_variant() {
        let zdt =
            ZonedIsoDateTime::full_from_string("2024-07-04T12:00:00-04:00[America/New_York]")
                .unwrap();
        assert_eq!(zdt.zone().id().as_str(), "usnyc");
        assert_eq!(zdt.zone().variant(), Some(TimeZoneVariant::Daylight));

        let winter =
            ZonedIsoDateTime::full_from_string("2024-01-04T12:00:00-05:00[America/New_York]")
                .unwrap();
        assert_eq!(winter.zone().variant(), Some(TimeZoneVariant::Standard));
    }

    #[test]
    fn full_rejects_inconsistent_offset() {
        let err =
            ZonedIsoDateTime::full_from_string("2024-07-04T12:00:00-05:00[America/New_York]")
                .unwrap_err();
        assert!(err.matches(ErrorMessage::OffsetVariantMismatch));
    }

    #[test]
    fn full_requires_offset() {
        let err =
            ZonedIsoDateTime::full_from_string("2024-07-04T12:00:00[America/New_York]").unwrap_err();
        assert!(err.matches(ErrorMessage::MissingOffset));
    }

    #[test]
    fn lenient_takes_what_is_present() {
        let zdt = ZonedIsoDateTime::lenient_from_string("2024-07-04T12:00:00").unwrap();
        assert!(zdt.zone().id().is_unknown());
        assert!(zdt.zone().offset().is_none());

        let zdt =
            ZonedIsoDateTime::lenient_from_string("2024-07-04T12:00:00[Europe/Paris]").unwrap();
        assert_eq!(zdt.zone().id().as_str(), "frpar");
    }

    #[test]
    fn unrecognized_zone_is_lenient_outside_full() {
        let zdt =
            ZonedIsoDateTime::lenient_from_string("2024-07-04T12:00:00[Planet/Mars]").unwrap();
        assert!(zdt.zone().id().is_unknown());
    }

    #[test]
    fn zoned_datetime_carries_calendar() {
        let zdt = ZonedDateTime::full_from_string(
            "2024-07-04T12:00:00-04:00[America/New_York][u-ca=hebrew]",
        )
        .unwrap();
        assert_eq!(zdt.calendar().identifier(), "hebrew");
        assert_eq!(zdt.date().year(), 5784);
    }

    #[test]
    fn ixdtf_serialization_honors_display_options() {
        let zdt =
            ZonedIsoDateTime::full_from_string("2024-07-04T12:00:00-04:00[America/New_York]")
                .unwrap();
        assert_eq!(
            zdt.to_ixdtf_string(DisplayOffset::Auto, DisplayTimeZone::Auto),
            "2024-07-04T12:00:00-04:00[America/New_York]"
        );
        assert_eq!(
            zdt.to_ixdtf_string(DisplayOffset::Never, DisplayTimeZone::Critical),
            "2024-07-04T12:00:00[!America/New_York]"
        );

        let zoned = ZonedDateTime::full_from_string(
            "2024-07-04T12:00:00-04:00[America/New_York][u-ca=hebrew]",
        )
        .unwrap();
        assert_eq!(
            zoned.to_ixdtf_string(
                DisplayOffset::Auto,
                DisplayTimeZone::Auto,
                DisplayCalendar::Auto
            ),
            "2024-07-04T12:00:00-04:00[America/New_York][u-ca=hebrew]"
        );
    }

    #[test]
    fn instant_comparison_is_offset_aware() {
        let early = ZonedIsoDateTime::offset_only_from_string("2024-01-01T09:00:00+05:00").unwrap();
        let late = ZonedIsoDateTime::offset_only_from_string("2024-01-01T00:00:00-05:00").unwrap();
        assert_eq!(
            early.compare_instant(&late),
            Some(core::cmp::Ordering::Less)
        );
    }

    #[test]
    fn epoch_seconds_uses_the_offset() {
        let utc = ZonedIsoDateTime::offset_only_from_string("1970-01-01T00:00:00+00:00").unwrap();
        assert_eq!(utc.epoch_seconds(), Some(0));
        let east = ZonedIsoDateTime::offset_only_from_string("1970-01-01T05:30:00+05:30").unwrap();
        assert_eq!(east.epoch_seconds(), Some(0));
    }
}
