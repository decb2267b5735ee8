//! The data provider traits.
//!
//! Compiled calendar/zone/locale tables are consumed through these
//! traits. Every plain constructor in the crate resolves against
//! [`CompiledProvider`]; the `*_with_provider` constructors accept any
//! implementation. Provider data is read-only and `'static`: it is
//! loaded once and shared by every value constructed over it.

pub use kairos_provider::{DateTimeNames, DaylightRule, IanaEntry, LunarYear, RuleDate, ZoneRecord};

use crate::components::calendar::CalendarKind;

/// Supplies time zone records and the IANA identifier table.
pub trait TimeZoneProvider {
    /// Case-insensitive lookup of an IANA identifier.
    fn iana_entry(&self, ident: &str) -> Option<&'static IanaEntry>;

    /// Looks up a zone record by BCP-47 subtag.
    fn zone(&self, bcp47: &str) -> Option<&'static ZoneRecord>;

    /// All zone records, in the provider's canonical order.
    fn zones(&self) -> &'static [ZoneRecord];
}

/// Supplies year tables for the data-driven lunisolar calendars.
pub trait CalendarDataProvider {
    fn lunisolar_years(&self, kind: CalendarKind) -> Option<&'static [LunarYear]>;
}

/// Supplies date/time display names and patterns per locale tag.
pub trait DateTimeNamesProvider {
    /// Exact lookup of a normalized language tag; fallback is the
    /// caller's concern.
    fn datetime_names(&self, tag: &str) -> Option<&'static DateTimeNames>;
}

/// The compiled-in data tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct CompiledProvider;

impl TimeZoneProvider for CompiledProvider {
    fn iana_entry(&self, ident: &str) -> Option<&'static IanaEntry> {
        kairos_provider::iana_entry(ident)
    }

    fn zone(&self, bcp47: &str) -> Option<&'static ZoneRecord> {
        kairos_provider::zone_for_bcp47(bcp47)
    }

    fn zones(&self) -> &'static [ZoneRecord] {
        kairos_provider::ZONES
    }
}

impl CalendarDataProvider for CompiledProvider {
    fn lunisolar_years(&self, kind: CalendarKind) -> Option<&'static [LunarYear]> {
        match kind {
            CalendarKind::Chinese => Some(kairos_provider::CHINESE_YEARS),
            CalendarKind::Dangi => Some(kairos_provider::DANGI_YEARS),
            _ => None,
        }
    }
}

impl DateTimeNamesProvider for CompiledProvider {
    fn datetime_names(&self, tag: &str) -> Option<&'static DateTimeNames> {
        kairos_provider::DATETIME_NAMES.iter().find(|n| n.locale == tag)
    }
}

/// A provider that supplies nothing. Useful for exercising the
/// data-missing paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverProvider;

impl TimeZoneProvider for NeverProvider {
    fn iana_entry(&self, _: &str) -> Option<&'static IanaEntry> {
        None
    }

    fn zone(&self, _: &str) -> Option<&'static ZoneRecord> {
        None
    }

    fn zones(&self) -> &'static [ZoneRecord] {
        &[]
    }
}

impl CalendarDataProvider for NeverProvider {
    fn lunisolar_years(&self, _: CalendarKind) -> Option<&'static [LunarYear]> {
        None
    }
}

impl DateTimeNamesProvider for NeverProvider {
    fn datetime_names(&self, _: &str) -> Option<&'static DateTimeNames> {
        None
    }
}
