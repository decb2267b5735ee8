//! The time zone formatter.

use alloc::string::String;

use crate::components::timezone::{TimeZoneInfo, TimeZoneVariant};
use crate::error::ErrorMessage;
use crate::fmt::resolve_names;
use crate::locale::Locale;
use crate::provider::{CompiledProvider, DateTimeNames, TimeZoneProvider, ZoneRecord};
use crate::{KairosError, KairosResult};

/// Which rendering of a zone the formatter produces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TimeZoneStyle {
    /// `GMT+5:30`; needs only the offset facet.
    #[default]
    LocalizedOffset,
    /// `Eastern Time`; needs a recognized zone.
    GenericLong,
    /// `Eastern Daylight Time`; needs a recognized zone and a resolved
    /// variant.
    SpecificLong,
    /// `EDT`; needs a recognized zone and a resolved variant.
    SpecificShort,
    /// `New York`, the exemplar city.
    Location,
}

/// Formats [`TimeZoneInfo`] values under one locale and style.
///
/// Immutable once constructed; construction is the only fallible step
/// apart from value-level facet checks at format time.
#[derive(Debug, Clone)]
pub struct TimeZoneFormatter {
    locale: Locale,
    names: &'static DateTimeNames,
    style: TimeZoneStyle,
}

impl TimeZoneFormatter {
    /// Builds a zone formatter for a locale and style. Fails with a data
    /// error when the locale has no symbol data.
    pub fn try_new(locale: Locale, style: TimeZoneStyle) -> KairosResult<Self> {
        let names = resolve_names(&locale, &CompiledProvider)?;
        Ok(Self {
            locale,
            names,
            style,
        })
    }

    pub(crate) fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Renders a zone reference.
    ///
    /// Styles that need a facet the value does not carry fail with the
    /// matching diagnostic; they never guess. A name style on an
    /// unrecognized zone falls back to the localized offset form once
    /// its facet requirements are met.
    pub fn format(&self, zone: &TimeZoneInfo) -> KairosResult<String> {
        let record = CompiledProvider.zone(zone.id().as_str());
        match self.style {
            TimeZoneStyle::LocalizedOffset => self.localized_offset(zone),
            TimeZoneStyle::GenericLong => match record {
                Some(record) => Ok(String::from(record.names.generic_long)),
                None => self.localized_offset(zone),
            },
            TimeZoneStyle::Location => match record {
                Some(record) => Ok(String::from(record.names.location)),
                None => self.localized_offset(zone),
            },
            TimeZoneStyle::SpecificLong | TimeZoneStyle::SpecificShort => {
                let variant = zone
                    .variant()
                    .ok_or(KairosError::r#type().with_enum(ErrorMessage::MissingTimeZoneVariant))?;
                match record {
                    Some(record) => Ok(String::from(self.specific_name(record, variant))),
                    None => self.localized_offset(zone),
                }
            }
        }
    }

    fn specific_name(&self, record: &ZoneRecord, variant: TimeZoneVariant) -> &'static str {
        match (self.style, variant) {
            (TimeZoneStyle::SpecificLong, TimeZoneVariant::Standard) => record.names.standard_long,
            (TimeZoneStyle::SpecificLong, TimeZoneVariant::Daylight) => record.names.daylight_long,
            (_, TimeZoneVariant::Standard) => record.names.standard_short,
            (_, TimeZoneVariant::Daylight) => record.names.daylight_short,
        }
    }

    /// `GMT+5:30`; hour not zero padded, minutes omitted when zero.
    fn localized_offset(&self, zone: &TimeZoneInfo) -> KairosResult<String> {
        let offset = zone
            .offset()
            .ok_or(KairosError::r#type().with_enum(ErrorMessage::MissingOffset))?;
        let mut out = String::from(self.names.gmt_prefix);
        if offset.is_zero() {
            return Ok(out);
        }
        let seconds = offset.seconds();
        out.push(if seconds < 0 { '-' } else { '+' });
        let magnitude = seconds.unsigned_abs();
        push_decimal(&mut out, magnitude / 3600);
        let minutes = magnitude / 60 % 60;
        if minutes != 0 {
            out.push(':');
            if minutes < 10 {
                out.push('0');
            }
            push_decimal(&mut out, minutes);
        }
        Ok(out)
    }
}

fn push_decimal(out: &mut String, value: u32) {
    if value >= 10 {
        push_decimal(out, value / 10);
    }
    out.push((b'0' + (value % 10) as u8) as char);
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;
    use crate::components::time::Time;
    use crate::components::timezone::{TimeZone, UtcOffset, VariantOffsetsCalculator};
    use crate::iso::IsoDate;

    fn en_us() -> Locale {
        Locale::from_str("en-US").unwrap()
    }

    #[test]
    fn localized_offset_needs_only_the_offset() {
        let formatter = TimeZoneFormatter::try_new(en_us(), TimeZoneStyle::LocalizedOffset).unwrap();
        let info = TimeZoneInfo::from_offset(UtcOffset::from_seconds(19_800).unwrap());
        assert_eq!(formatter.format(&info).unwrap(), "GMT+5:30");

        let whole = TimeZoneInfo::from_offset(UtcOffset::from_seconds(-5 * 3600).unwrap());
        assert_eq!(formatter.format(&whole).unwrap(), "GMT-5");

        let zero = TimeZoneInfo::from_offset(UtcOffset::ZERO);
        assert_eq!(formatter.format(&zero).unwrap(), "GMT");
    }

    #[test]
    fn localized_offset_without_offset_fails() {
        let formatter = TimeZoneFormatter::try_new(en_us(), TimeZoneStyle::LocalizedOffset).unwrap();
        let info = TimeZoneInfo::from_id(TimeZone::from_bcp47("usnyc"));
        let err = formatter.format(&info).unwrap_err();
        assert!(err.matches(ErrorMessage::MissingOffset));
    }

    #[test]
    fn specific_styles_require_a_variant() {
        let formatter = TimeZoneFormatter::try_new(en_us(), TimeZoneStyle::SpecificLong).unwrap();
        let zone = TimeZone::from_bcp47("usnyc");
        let info = TimeZoneInfo::from_parts(
            zone,
            Some(UtcOffset::from_seconds(-4 * 3600).unwrap()),
            None,
        );
        let err = formatter.format(&info).unwrap_err();
        assert!(err.matches(ErrorMessage::MissingTimeZoneVariant));

        let resolved = info
            .at_date_time_iso(
                IsoDate::try_new(2024, 7, 4).unwrap(),
                Time::try_new(12, 0, 0, 0).unwrap(),
            )
            .infer_variant(&VariantOffsetsCalculator::new())
            .unwrap();
        assert_eq!(formatter.format(&resolved).unwrap(), "Eastern Daylight Time");

        let short = TimeZoneFormatter::try_new(en_us(), TimeZoneStyle::SpecificShort).unwrap();
        assert_eq!(short.format(&resolved).unwrap(), "EDT");
    }

    #[test]
    fn generic_and_location_styles() {
        let zone = TimeZone::from_bcp47("usnyc");
        let info = TimeZoneInfo::from_id(zone);

        let generic = TimeZoneFormatter::try_new(en_us(), TimeZoneStyle::GenericLong).unwrap();
        assert_eq!(generic.format(&info).unwrap(), "Eastern Time");

        let location = TimeZoneFormatter::try_new(en_us(), TimeZoneStyle::Location).unwrap();
        assert_eq!(location.format(&info).unwrap(), "New York");
    }

    #[test]
    fn unknown_zone_falls_back_to_offset() {
        let generic = TimeZoneFormatter::try_new(en_us(), TimeZoneStyle::GenericLong).unwrap();
        let info = TimeZoneInfo::from_offset(UtcOffset::from_seconds(3600).unwrap());
        assert_eq!(generic.format(&info).unwrap(), "GMT+1");

        // A specific style still needs the variant facet first, even on
        // an unrecognized zone.
        let specific = TimeZoneFormatter::try_new(en_us(), TimeZoneStyle::SpecificLong).unwrap();
        let err = specific.format(&info).unwrap_err();
        assert!(err.matches(ErrorMessage::MissingTimeZoneVariant));
    }
}
