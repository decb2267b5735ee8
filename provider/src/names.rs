//! The IANA identifier table.
//!
//! One entry per recognized identifier, canonical names and aliases alike,
//! sorted by the lowercased key so lookups are a case-insensitive binary
//! search. Aliases point at the canonical spelling and the canonical
//! zone's BCP-47 subtag.

/// A single IANA identifier table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IanaEntry {
    /// Lowercased identifier, the sort/lookup key
    pub lower: &'static str,
    /// Canonical identifier spelling
    pub canonical: &'static str,
    /// BCP-47 subtag of the canonical zone
    pub bcp47: &'static str,
}

const fn entry(lower: &'static str, canonical: &'static str, bcp47: &'static str) -> IanaEntry {
    IanaEntry { lower, canonical, bcp47 }
}

/// All recognized IANA identifiers, sorted by `lower`.
pub static IANA_IDENTIFIERS: &[IanaEntry] = &[
    entry("america/anchorage", "America/Anchorage", "usanc"),
    entry("america/chicago", "America/Chicago", "uschi"),
    entry("america/denver", "America/Denver", "usden"),
    entry("america/los_angeles", "America/Los_Angeles", "uslax"),
    entry("america/mexico_city", "America/Mexico_City", "mxmex"),
    entry("america/new_york", "America/New_York", "usnyc"),
    entry("america/phoenix", "America/Phoenix", "usphx"),
    entry("america/sao_paulo", "America/Sao_Paulo", "brsao"),
    entry("america/st_johns", "America/St_Johns", "casjf"),
    entry("america/toronto", "America/Toronto", "cator"),
    entry("america/vancouver", "America/Vancouver", "cavan"),
    entry("asia/calcutta", "Asia/Kolkata", "inccu"),
    entry("asia/dubai", "Asia/Dubai", "aedxb"),
    entry("asia/hong_kong", "Asia/Hong_Kong", "hkhkg"),
    entry("asia/kathmandu", "Asia/Kathmandu", "npktm"),
    entry("asia/katmandu", "Asia/Kathmandu", "npktm"),
    entry("asia/kolkata", "Asia/Kolkata", "inccu"),
    entry("asia/singapore", "Asia/Singapore", "sgsin"),
    entry("asia/tehran", "Asia/Tehran", "irthr"),
    entry("asia/tokyo", "Asia/Tokyo", "jptyo"),
    entry("australia/nsw", "Australia/Sydney", "ausyd"),
    entry("australia/sydney", "Australia/Sydney", "ausyd"),
    entry("brazil/east", "America/Sao_Paulo", "brsao"),
    entry("canada/eastern", "America/Toronto", "cator"),
    entry("canada/newfoundland", "America/St_Johns", "casjf"),
    entry("canada/pacific", "America/Vancouver", "cavan"),
    entry("etc/gmt", "Etc/UTC", "utc"),
    entry("etc/universal", "Etc/UTC", "utc"),
    entry("etc/utc", "Etc/UTC", "utc"),
    entry("etc/zulu", "Etc/UTC", "utc"),
    entry("europe/berlin", "Europe/Berlin", "deber"),
    entry("europe/london", "Europe/London", "gblon"),
    entry("europe/madrid", "Europe/Madrid", "esmad"),
    entry("europe/moscow", "Europe/Moscow", "rumow"),
    entry("europe/paris", "Europe/Paris", "frpar"),
    entry("gb", "Europe/London", "gblon"),
    entry("gb-eire", "Europe/London", "gblon"),
    entry("gmt", "Etc/UTC", "utc"),
    entry("hongkong", "Asia/Hong_Kong", "hkhkg"),
    entry("iran", "Asia/Tehran", "irthr"),
    entry("japan", "Asia/Tokyo", "jptyo"),
    entry("mexico/general", "America/Mexico_City", "mxmex"),
    entry("nz", "Pacific/Auckland", "nzakl"),
    entry("pacific/auckland", "Pacific/Auckland", "nzakl"),
    entry("pacific/honolulu", "Pacific/Honolulu", "ushnl"),
    entry("singapore", "Asia/Singapore", "sgsin"),
    entry("universal", "Etc/UTC", "utc"),
    entry("us/alaska", "America/Anchorage", "usanc"),
    entry("us/arizona", "America/Phoenix", "usphx"),
    entry("us/central", "America/Chicago", "uschi"),
    entry("us/eastern", "America/New_York", "usnyc"),
    entry("us/hawaii", "Pacific/Honolulu", "ushnl"),
    entry("us/mountain", "America/Denver", "usden"),
    entry("us/pacific", "America/Los_Angeles", "uslax"),
    entry("utc", "Etc/UTC", "utc"),
    entry("w-su", "Europe/Moscow", "rumow"),
    entry("zulu", "Etc/UTC", "utc"),
];
