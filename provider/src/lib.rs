//! Compiled data tables for `kairos_rs`.
//!
//! This crate ships the static data the core library resolves against when
//! the `compiled_data` feature is active: time zone offsets and daylight
//! rules, the IANA identifier table, lunisolar year records for the
//! Chinese and Dangi calendars, and date/time display names for the baked
//! locales.
//!
//! The tables here are plain `&'static` records. Regenerating them from
//! tzdata/CLDR is a datagen concern and lives outside this workspace; the
//! core library only ever consumes them through its provider traits.
#![no_std]

mod datetime_names;
mod lunar;
mod names;
mod tzdb;

pub use datetime_names::{DateTimeNames, DATETIME_NAMES};
pub use lunar::{LunarYear, CHINESE_YEARS, DANGI_YEARS};
pub use names::{IanaEntry, IANA_IDENTIFIERS};
pub use tzdb::{DaylightRule, RuleDate, ZoneNames, ZoneRecord, ZONES};

/// Looks up a zone record by its BCP-47 subtag.
pub fn zone_for_bcp47(bcp47: &str) -> Option<&'static ZoneRecord> {
    ZONES.iter().find(|z| z.bcp47 == bcp47)
}

/// Looks up an IANA table entry by case-insensitive identifier.
pub fn iana_entry(ident: &str) -> Option<&'static IanaEntry> {
    // The table is sorted by its lowercased key; identifiers are short
    // enough that a stack buffer covers every real-world name.
    let mut buf = [0u8; 64];
    let bytes = ident.as_bytes();
    if bytes.len() > buf.len() {
        return None;
    }
    for (i, b) in bytes.iter().enumerate() {
        buf[i] = b.to_ascii_lowercase();
    }
    let key = &buf[..bytes.len()];
    IANA_IDENTIFIERS
        .binary_search_by(|entry| entry.lower.as_bytes().cmp(key))
        .ok()
        .map(|idx| &IANA_IDENTIFIERS[idx])
}
