//! The time zone model: zone identities, UTC offsets, the
//! graduated-completeness [`TimeZoneInfo`] record, and the
//! [`VariantOffsetsCalculator`].

use tinystr::TinyAsciiStr;

use crate::components::time::Time;
use crate::error::ErrorMessage;
use crate::iso::{IsoDate, IsoDateTime};
use crate::parsers;
use crate::provider::{CompiledProvider, DaylightRule, RuleDate, TimeZoneProvider, ZoneRecord};
use crate::utils;
use crate::{KairosError, KairosResult};

/// An interned BCP-47 time zone subtag, or the distinguished unknown
/// zone.
///
/// Unrecognized input maps to [`TimeZone::UNKNOWN`] rather than failing,
/// so downstream formatting can degrade gracefully while still being able
/// to tell "zone was unrecognized" apart from "zone was never supplied".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeZone(TinyAsciiStr<8>);

impl TimeZone {
    /// The distinguished unknown zone.
    pub const UNKNOWN: Self = Self(tinystr::tinystr!(8, "unk"));

    /// UTC.
    pub const UTC: Self = Self(tinystr::tinystr!(8, "utc"));

    /// Creates a `TimeZone` from a BCP-47 subtag, resolving against the
    /// compiled zone table. Infallible: unrecognized subtags become the
    /// unknown zone.
    pub fn from_bcp47(id: &str) -> Self {
        Self::from_bcp47_with_provider(id, &CompiledProvider)
    }

    /// As [`TimeZone::from_bcp47`], resolving against the given provider.
    pub fn from_bcp47_with_provider(id: &str, provider: &impl TimeZoneProvider) -> Self {
        match provider.zone(id) {
            Some(record) => Self::from_record(record),
            None => Self::UNKNOWN,
        }
    }

    pub(crate) fn from_record(record: &ZoneRecord) -> Self {
        match TinyAsciiStr::try_from_str(record.bcp47) {
            Ok(tag) => Self(tag),
            Err(_) => Self::UNKNOWN,
        }
    }

    /// The canonical BCP-47 subtag.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether this is the distinguished unknown zone.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

impl core::fmt::Display for TimeZone {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A signed offset from UTC in seconds, range-checked to the real-world
/// bound of eighteen hours either side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset(i32);

/// Offsets are bounded by ±18:00:00.
const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

impl UtcOffset {
    pub const ZERO: Self = Self(0);

    /// Creates an offset from signed seconds; fails outside ±18 hours.
    pub fn from_seconds(seconds: i32) -> KairosResult<Self> {
        if seconds.abs() > MAX_OFFSET_SECONDS {
            return Err(KairosError::range().with_enum(ErrorMessage::OffsetOutOfRange));
        }
        Ok(Self(seconds))
    }

    /// Parses a `±HH:MM[:SS]` or `Z` offset string.
    pub fn from_string(source: &str) -> KairosResult<Self> {
        let seconds = parsers::parse_utc_offset(source)?;
        Self::from_seconds(seconds)
    }

    #[inline]
    pub fn seconds(&self) -> i32 {
        self.0
    }

    #[inline]
    pub fn minutes(&self) -> i16 {
        (self.0 / 60) as i16
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl core::str::FromStr for UtcOffset {
    type Err = KairosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl core::fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        parsers::write_utc_offset(f, self.0)
    }
}

/// Which of a zone's standing offsets is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeZoneVariant {
    Standard,
    Daylight,
}

/// A zone's concrete offsets at some period: the standard offset always,
/// the daylight offset only where the zone observes daylight saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantOffsets {
    pub standard: UtcOffset,
    pub daylight: Option<UtcOffset>,
}

/// A time zone reference of graduated completeness: an identity, and
/// optionally the concrete offset, the variant in effect, and a reference
/// local time for display-name resolution.
///
/// Real-world inputs do not always carry every facet; formatting degrades
/// per facet (localized-offset styles need only the offset, specific-name
/// styles need the variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeZoneInfo {
    id: TimeZone,
    offset: Option<UtcOffset>,
    variant: Option<TimeZoneVariant>,
    local: Option<IsoDateTime>,
}

impl TimeZoneInfo {
    /// Assembles a `TimeZoneInfo` from whatever facets are known. Always
    /// succeeds; unknown facets stay unset.
    pub fn from_parts(
        id: TimeZone,
        offset: Option<UtcOffset>,
        variant: Option<TimeZoneVariant>,
    ) -> Self {
        Self {
            id,
            offset,
            variant,
            local: None,
        }
    }

    /// A location-only reference.
    pub fn from_id(id: TimeZone) -> Self {
        Self::from_parts(id, None, None)
    }

    /// An offset-only reference on the unknown zone.
    pub fn from_offset(offset: UtcOffset) -> Self {
        Self::from_parts(TimeZone::UNKNOWN, Some(offset), None)
    }

    #[inline]
    pub fn id(&self) -> TimeZone {
        self.id
    }

    #[inline]
    pub fn offset(&self) -> Option<UtcOffset> {
        self.offset
    }

    #[inline]
    pub fn variant(&self) -> Option<TimeZoneVariant> {
        self.variant
    }

    #[inline]
    pub fn reference_local(&self) -> Option<IsoDateTime> {
        self.local
    }

    /// Returns a new info carrying the given reference local time, used
    /// by subsequent display-name and variant resolution.
    #[must_use]
    pub fn at_date_time_iso(&self, date: IsoDate, time: Time) -> Self {
        Self {
            local: Some(IsoDateTime::new_unchecked(date, time.iso_time())),
            ..*self
        }
    }

    /// Returns a new info with the variant set.
    #[must_use]
    pub fn with_variant(&self, variant: TimeZoneVariant) -> Self {
        Self {
            variant: Some(variant),
            ..*self
        }
    }

    /// Determines which variant the stored offset matches at the stored
    /// reference time, returning a new info with the variant set.
    ///
    /// This is a consistency check, not a correction: it requires both
    /// the offset and the reference local time to be present, and fails
    /// when the offset matches neither the standard nor the daylight
    /// offset the calculator computes for this zone.
    pub fn infer_variant<P: TimeZoneProvider>(
        &self,
        calculator: &VariantOffsetsCalculator<P>,
    ) -> KairosResult<Self> {
        let offset = self
            .offset
            .ok_or(KairosError::r#type().with_enum(ErrorMessage::MissingOffset))?;
        let local = self
            .local
            .ok_or(KairosError::r#type().with_enum(ErrorMessage::MissingReferenceTime))?;
        let offsets = calculator
            .compute_offsets_from_time_zone_and_date_time(self.id, &local)
            .ok_or(KairosError::data().with_enum(ErrorMessage::MissingZoneData))?;
        let variant = if offset == offsets.standard {
            TimeZoneVariant::Standard
        } else if offsets.daylight == Some(offset) {
            TimeZoneVariant::Daylight
        } else {
            return Err(KairosError::range().with_enum(ErrorMessage::OffsetVariantMismatch));
        };
        Ok(self.with_variant(variant))
    }
}

impl From<TimeZone> for TimeZoneInfo {
    fn from(id: TimeZone) -> Self {
        Self::from_id(id)
    }
}

// ==== Variant offset computation ====

/// Computes a zone's standard and daylight offsets from the provider's
/// zone records and daylight rules.
#[derive(Debug, Clone, Copy)]
pub struct VariantOffsetsCalculator<P: TimeZoneProvider = CompiledProvider> {
    provider: P,
}

impl VariantOffsetsCalculator<CompiledProvider> {
    /// A calculator over the compiled zone tables.
    pub fn new() -> Self {
        Self {
            provider: CompiledProvider,
        }
    }
}

impl Default for VariantOffsetsCalculator<CompiledProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: TimeZoneProvider> VariantOffsetsCalculator<P> {
    pub fn from_provider(provider: P) -> Self {
        Self { provider }
    }

    /// The standard and (where observed) daylight offsets of a zone
    /// around the given local date-time. `None` when the zone is unknown
    /// or the provider has no record for it.
    pub fn compute_offsets_from_time_zone_and_date_time(
        &self,
        zone: TimeZone,
        _local: &IsoDateTime,
    ) -> Option<VariantOffsets> {
        if zone.is_unknown() {
            return None;
        }
        let record = self.provider.zone(zone.as_str())?;
        Some(VariantOffsets {
            standard: UtcOffset(record.std_offset_seconds),
            daylight: record
                .daylight
                .map(|rule| UtcOffset(record.std_offset_seconds + rule.delta_seconds)),
        })
    }

    /// The offset in effect for a local wall-clock date-time, resolved
    /// through the zone's daylight rule.
    pub(crate) fn offset_at_local(
        &self,
        zone: TimeZone,
        local: &IsoDateTime,
    ) -> Option<(UtcOffset, TimeZoneVariant)> {
        let record = self.provider.zone(zone.as_str())?;
        let Some(rule) = record.daylight else {
            return Some((UtcOffset(record.std_offset_seconds), TimeZoneVariant::Standard));
        };
        if daylight_active(&rule, local) {
            Some((
                UtcOffset(record.std_offset_seconds + rule.delta_seconds),
                TimeZoneVariant::Daylight,
            ))
        } else {
            Some((UtcOffset(record.std_offset_seconds), TimeZoneVariant::Standard))
        }
    }
}

/// Local wall-clock instant within its year, in seconds. Enough to order
/// a date-time against the year's transition instants.
fn wall_instant(local: &IsoDateTime) -> i64 {
    local.date.to_rata_die().to_i64() * 86_400 + i64::from(local.time.seconds_of_day())
}

/// The wall-clock instant at which a rule date fires in the given year.
fn rule_instant(year: i32, rule: &RuleDate) -> i64 {
    let first = utils::rata_die_from_gregorian(year, rule.month, 1);
    let rd = if rule.week <= 4 {
        let first_dow = utils::iso_day_of_week(first);
        let to_first_match = i64::from((rule.weekday + 7 - first_dow) % 7);
        first + to_first_match + 7 * (i64::from(rule.week) - 1)
    } else {
        let last = first + i64::from(utils::iso_days_in_month(year, rule.month)) - 1;
        let last_dow = utils::iso_day_of_week(last);
        last - i64::from((last_dow + 7 - rule.weekday) % 7)
    };
    rd * 86_400 + i64::from(rule.wall_seconds)
}

/// Whether daylight time is in effect at a local wall-clock date-time.
///
/// Transitions are compared in wall time. A rule whose start month
/// precedes its end month is a northern-hemisphere rule (daylight between
/// the two); otherwise daylight wraps the new year.
fn daylight_active(rule: &DaylightRule, local: &IsoDateTime) -> bool {
    let year = local.date.year;
    let t = wall_instant(local);
    let start = rule_instant(year, &rule.start);
    let end = rule_instant(year, &rule.end);
    if rule.start.month < rule.end.month {
        t >= start && t < end
    } else {
        t >= start || t < end
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    fn local(year: i32, month: u8, day: u8, hour: u8) -> IsoDateTime {
        IsoDateTime::new_unchecked(
            IsoDate::try_new(year, month, day).unwrap(),
            crate::iso::IsoTime::try_new(hour, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn bcp47_lookup_is_lenient() {
        let zone = TimeZone::from_bcp47("usnyc");
        assert_eq!(zone.as_str(), "usnyc");
        assert!(!zone.is_unknown());

        let unknown = TimeZone::from_bcp47("zzzzz");
        assert!(unknown.is_unknown());
    }

    #[test]
    fn offset_range_boundaries() {
        assert!(UtcOffset::from_seconds(18 * 3600).is_ok());
        assert!(UtcOffset::from_seconds(-18 * 3600).is_ok());
        assert!(UtcOffset::from_seconds(18 * 3600 + 1).is_err());
        assert!(UtcOffset::from_seconds(-(18 * 3600 + 1)).is_err());
    }

    #[test]
    fn offset_parsing() {
        assert_eq!(UtcOffset::from_str("+05:30").unwrap().seconds(), 19_800);
        assert_eq!(UtcOffset::from_str("-03:30").unwrap().seconds(), -12_600);
        assert_eq!(UtcOffset::from_str("Z").unwrap(), UtcOffset::ZERO);
        assert_eq!(UtcOffset::from_str("+01:02:03").unwrap().seconds(), 3_723);
        assert!(UtcOffset::from_str("05:30").is_err());
        assert!(UtcOffset::from_str("+19:00").is_err());
    }

    #[test]
    fn offset_display() {
        assert_eq!(alloc::format!("{}", UtcOffset::from_seconds(19_800).unwrap()), "+05:30");
        assert_eq!(alloc::format!("{}", UtcOffset::from_seconds(-12_600).unwrap()), "-03:30");
        assert_eq!(alloc::format!("{}", UtcOffset::ZERO), "+00:00");
    }

    #[test]
    fn new_york_variant_offsets() {
        let calc = VariantOffsetsCalculator::new();
        let zone = TimeZone::from_bcp47("usnyc");
        let offsets = calc
            .compute_offsets_from_time_zone_and_date_time(zone, &local(2024, 7, 1, 12))
            .unwrap();
        assert_eq!(offsets.standard.seconds(), -5 * 3600);
        assert_eq!(offsets.daylight.unwrap().seconds(), -4 * 3600);
    }

    #[test]
    fn phoenix_has_no_daylight_offset() {
        let calc = VariantOffsetsCalculator::new();
        let zone = TimeZone::from_bcp47("usphx");
        let offsets = calc
            .compute_offsets_from_time_zone_and_date_time(zone, &local(2024, 7, 1, 12))
            .unwrap();
        assert_eq!(offsets.standard.seconds(), -7 * 3600);
        assert!(offsets.daylight.is_none());
    }

    #[test]
    fn unknown_zone_has_no_offsets() {
        let calc = VariantOffsetsCalculator::new();
        assert!(calc
            .compute_offsets_from_time_zone_and_date_time(TimeZone::UNKNOWN, &local(2024, 7, 1, 0))
            .is_none());
    }

    #[test]
    fn daylight_rule_resolution() {
        let calc = VariantOffsetsCalculator::new();
        let zone = TimeZone::from_bcp47("usnyc");

        // July is daylight time, January standard time.
        let (offset, variant) = calc.offset_at_local(zone, &local(2024, 7, 1, 12)).unwrap();
        assert_eq!(variant, TimeZoneVariant::Daylight);
        assert_eq!(offset.seconds(), -4 * 3600);

        let (offset, variant) = calc.offset_at_local(zone, &local(2024, 1, 15, 12)).unwrap();
        assert_eq!(variant, TimeZoneVariant::Standard);
        assert_eq!(offset.seconds(), -5 * 3600);

        // 2024 transitions: March 10 02:00 and November 3 02:00.
        let (_, variant) = calc.offset_at_local(zone, &local(2024, 3, 10, 1)).unwrap();
        assert_eq!(variant, TimeZoneVariant::Standard);
        let (_, variant) = calc.offset_at_local(zone, &local(2024, 3, 10, 3)).unwrap();
        assert_eq!(variant, TimeZoneVariant::Daylight);
        let (_, variant) = calc.offset_at_local(zone, &local(2024, 11, 3, 3)).unwrap();
        assert_eq!(variant, TimeZoneVariant::Standard);
    }

    #[test]
    fn southern_hemisphere_rule_wraps_the_year() {
        let calc = VariantOffsetsCalculator::new();
        let zone = TimeZone::from_bcp47("ausyd");
        let (_, variant) = calc.offset_at_local(zone, &local(2024, 1, 15, 12)).unwrap();
        assert_eq!(variant, TimeZoneVariant::Daylight);
        let (_, variant) = calc.offset_at_local(zone, &local(2024, 6, 15, 12)).unwrap();
        assert_eq!(variant, TimeZoneVariant::Standard);
        let (_, variant) = calc.offset_at_local(zone, &local(2024, 11, 15, 12)).unwrap();
        assert_eq!(variant, TimeZoneVariant::Daylight);
    }

    #[test]
    fn infer_variant_consistency_check() {
        let calc = VariantOffsetsCalculator::new();
        let zone = TimeZone::from_bcp47("usnyc");
        let date = IsoDate::try_new(2024, 7, 4).unwrap();
        let time = Time::try_new(12, 0, 0, 0).unwrap();

        let info = TimeZoneInfo::from_parts(
            zone,
            Some(UtcOffset::from_seconds(-4 * 3600).unwrap()),
            None,
        )
        .at_date_time_iso(date, time);
        let resolved = info.infer_variant(&calc).unwrap();
        assert_eq!(resolved.variant(), Some(TimeZoneVariant::Daylight));

        let std_info = TimeZoneInfo::from_parts(
            zone,
            Some(UtcOffset::from_seconds(-5 * 3600).unwrap()),
            None,
        )
        .at_date_time_iso(date, time);
        let resolved = std_info.infer_variant(&calc).unwrap();
        assert_eq!(resolved.variant(), Some(TimeZoneVariant::Standard));

        // An offset matching neither variant is an error, not a silent
        // correction.
        let bogus = TimeZoneInfo::from_parts(
            zone,
            Some(UtcOffset::from_seconds(-3 * 3600).unwrap()),
            None,
        )
        .at_date_time_iso(date, time);
        let err = bogus.infer_variant(&calc).unwrap_err();
        assert!(err.matches(ErrorMessage::OffsetVariantMismatch));
    }

    #[test]
    fn infer_variant_requires_offset_and_reference_time() {
        let calc = VariantOffsetsCalculator::new();
        let zone = TimeZone::from_bcp47("usnyc");

        let no_offset = TimeZoneInfo::from_id(zone);
        assert!(no_offset.infer_variant(&calc).is_err());

        let no_local =
            TimeZoneInfo::from_parts(zone, Some(UtcOffset::from_seconds(-5 * 3600).unwrap()), None);
        assert!(no_local.infer_variant(&calc).is_err());
    }
}
