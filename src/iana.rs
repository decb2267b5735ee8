//! The IANA identifier parser: bidirectional mapping between IANA zone
//! names and BCP-47 zone subtags.

use crate::components::timezone::TimeZone;
use crate::provider::{CompiledProvider, TimeZoneProvider};

/// Parses, normalizes, canonicalizes, and enumerates IANA time zone
/// identifiers against a provider's identifier table.
#[derive(Debug, Clone, Copy)]
pub struct IanaParser<P: TimeZoneProvider = CompiledProvider> {
    provider: P,
}

impl IanaParser<CompiledProvider> {
    /// A parser over the compiled identifier table.
    pub fn new() -> Self {
        Self {
            provider: CompiledProvider,
        }
    }
}

impl Default for IanaParser<CompiledProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: TimeZoneProvider> IanaParser<P> {
    pub fn from_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Resolves an IANA name (canonical or alias, any casing) to its
    /// BCP-47 zone. Unrecognized names become the unknown zone, the
    /// same lenient policy as [`TimeZone::from_bcp47`].
    pub fn parse(&self, iana_name: &str) -> TimeZone {
        match self.provider.iana_entry(iana_name) {
            Some(entry) => TimeZone::from_bcp47_with_provider(entry.bcp47, &self.provider),
            None => TimeZone::UNKNOWN,
        }
    }

    /// The case-normalized spelling of a recognized identifier.
    pub fn normalize(&self, iana_name: &str) -> Option<&'static str> {
        self.provider.iana_entry(iana_name).map(|entry| {
            // Aliases normalize to their own spelling, not the canonical
            // zone's; the table stores the canonical spelling for both.
            entry.canonical
        })
    }

    /// The canonical IANA name for a zone.
    pub fn canonicalize(&self, zone: TimeZone) -> Option<&'static str> {
        self.provider.zone(zone.as_str()).map(|record| record.iana)
    }

    /// Enumerates every known zone, in the provider's canonical order.
    /// The order is stable for a given data version.
    pub fn iter(&self) -> impl Iterator<Item = TimeZone> + '_ {
        self.provider.zones().iter().map(TimeZone::from_record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        let parser = IanaParser::new();
        assert_eq!(parser.parse("America/New_York").as_str(), "usnyc");
        assert_eq!(parser.parse("Etc/UTC").as_str(), "utc");
    }

    #[test]
    fn parsing_is_case_insensitive() {
        let parser = IanaParser::new();
        assert_eq!(parser.parse("america/new_york").as_str(), "usnyc");
        assert_eq!(parser.parse("AMERICA/CHICAGO").as_str(), "uschi");
    }

    #[test]
    fn aliases_canonicalize() {
        let parser = IanaParser::new();
        let zone = parser.parse("US/Eastern");
        assert_eq!(zone.as_str(), "usnyc");
        assert_eq!(parser.canonicalize(zone), Some("America/New_York"));
        assert_eq!(parser.parse("Asia/Calcutta").as_str(), "inccu");
        assert_eq!(parser.normalize("asia/calcutta"), Some("Asia/Kolkata"));
    }

    #[test]
    fn unknown_names_map_to_unknown_zone() {
        let parser = IanaParser::new();
        assert!(parser.parse("Not/A_Zone").is_unknown());
        assert_eq!(parser.normalize("Not/A_Zone"), None);
    }

    #[test]
    fn iteration_is_finite_and_restartable() {
        let parser = IanaParser::new();
        let first: alloc::vec::Vec<_> = parser.iter().collect();
        let second: alloc::vec::Vec<_> = parser.iter().collect();
        assert_eq!(first, second);
        assert!(first.len() > 20);
        assert!(first.iter().all(|z| !z.is_unknown()));
    }
}
