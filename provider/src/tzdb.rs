//! Compiled time zone records.
//!
//! Each record carries the zone's standard offset, its daylight rule (when
//! the zone currently observes one), and the display names consumed by the
//! zone formatter. Offsets and rules reflect current law, not the full
//! historical transition series; historical tzif resolution is a datagen
//! concern outside this crate.

/// A month/week/weekday rule date, the same shape tzdata POSIX strings use
/// (`Mm.w.d`). `week == 5` selects the last occurrence of the weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDate {
    /// Month, 1..=12
    pub month: u8,
    /// Occurrence of the weekday within the month, 1..=5 (5 = last)
    pub week: u8,
    /// ISO weekday, Monday = 1 .. Sunday = 7
    pub weekday: u8,
    /// Local wall-clock seconds after midnight at which the change occurs
    pub wall_seconds: i32,
}

/// A zone's current daylight saving rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaylightRule {
    /// Seconds added to the standard offset while daylight time is active
    pub delta_seconds: i32,
    /// Transition into daylight time, in standard wall time
    pub start: RuleDate,
    /// Transition back to standard time, in daylight wall time
    pub end: RuleDate,
}

/// Display names for a zone. This dataset carries the English (root)
/// names; per-locale zone name tables are a datagen concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneNames {
    pub generic_long: &'static str,
    pub standard_long: &'static str,
    pub daylight_long: &'static str,
    pub standard_short: &'static str,
    pub daylight_short: &'static str,
    /// Exemplar city
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneRecord {
    /// BCP-47 time zone subtag, e.g. `usnyc`
    pub bcp47: &'static str,
    /// Canonical IANA identifier, e.g. `America/New_York`
    pub iana: &'static str,
    /// Standard offset from UTC in seconds
    pub std_offset_seconds: i32,
    /// Current daylight rule, if the zone observes one
    pub daylight: Option<DaylightRule>,
    pub names: ZoneNames,
}

const HOUR: i32 = 3600;

// North America: second Sunday in March 02:00 -> first Sunday in November
// 02:00 (daylight wall time).
const US_RULE: DaylightRule = DaylightRule {
    delta_seconds: HOUR,
    start: RuleDate { month: 3, week: 2, weekday: 7, wall_seconds: 2 * HOUR },
    end: RuleDate { month: 11, week: 1, weekday: 7, wall_seconds: 2 * HOUR },
};

// EU: last Sunday in March -> last Sunday in October, 01:00 UTC. Expressed
// in wall time per zone below.
const fn eu_rule(start_wall: i32, end_wall: i32) -> DaylightRule {
    DaylightRule {
        delta_seconds: HOUR,
        start: RuleDate { month: 3, week: 5, weekday: 7, wall_seconds: start_wall },
        end: RuleDate { month: 10, week: 5, weekday: 7, wall_seconds: end_wall },
    }
}

// Southern hemisphere rules.
const AU_RULE: DaylightRule = DaylightRule {
    delta_seconds: HOUR,
    start: RuleDate { month: 10, week: 1, weekday: 7, wall_seconds: 2 * HOUR },
    end: RuleDate { month: 4, week: 1, weekday: 7, wall_seconds: 3 * HOUR },
};

const NZ_RULE: DaylightRule = DaylightRule {
    delta_seconds: HOUR,
    start: RuleDate { month: 9, week: 5, weekday: 7, wall_seconds: 2 * HOUR },
    end: RuleDate { month: 4, week: 1, weekday: 7, wall_seconds: 3 * HOUR },
};

const fn names(
    generic_long: &'static str,
    standard_long: &'static str,
    daylight_long: &'static str,
    standard_short: &'static str,
    daylight_short: &'static str,
    location: &'static str,
) -> ZoneNames {
    ZoneNames {
        generic_long,
        standard_long,
        daylight_long,
        standard_short,
        daylight_short,
        location,
    }
}

const fn fixed_names(long: &'static str, short: &'static str, location: &'static str) -> ZoneNames {
    names(long, long, long, short, short, location)
}

/// Every zone this provider knows, sorted by BCP-47 subtag.
pub static ZONES: &[ZoneRecord] = &[
    ZoneRecord {
        bcp47: "aedxb",
        iana: "Asia/Dubai",
        std_offset_seconds: 4 * HOUR,
        daylight: None,
        names: fixed_names("Gulf Standard Time", "GST", "Dubai"),
    },
    ZoneRecord {
        bcp47: "ausyd",
        iana: "Australia/Sydney",
        std_offset_seconds: 10 * HOUR,
        daylight: Some(AU_RULE),
        names: names(
            "Eastern Australia Time",
            "Australian Eastern Standard Time",
            "Australian Eastern Daylight Time",
            "AEST",
            "AEDT",
            "Sydney",
        ),
    },
    ZoneRecord {
        bcp47: "brsao",
        iana: "America/Sao_Paulo",
        std_offset_seconds: -3 * HOUR,
        daylight: None,
        names: fixed_names("Brasilia Standard Time", "BRT", "Sao Paulo"),
    },
    ZoneRecord {
        bcp47: "casjf",
        iana: "America/St_Johns",
        std_offset_seconds: -(3 * HOUR + 1800),
        daylight: Some(US_RULE),
        names: names(
            "Newfoundland Time",
            "Newfoundland Standard Time",
            "Newfoundland Daylight Time",
            "NST",
            "NDT",
            "St John's",
        ),
    },
    ZoneRecord {
        bcp47: "cator",
        iana: "America/Toronto",
        std_offset_seconds: -5 * HOUR,
        daylight: Some(US_RULE),
        names: names(
            "Eastern Time",
            "Eastern Standard Time",
            "Eastern Daylight Time",
            "EST",
            "EDT",
            "Toronto",
        ),
    },
    ZoneRecord {
        bcp47: "cavan",
        iana: "America/Vancouver",
        std_offset_seconds: -8 * HOUR,
        daylight: Some(US_RULE),
        names: names(
            "Pacific Time",
            "Pacific Standard Time",
            "Pacific Daylight Time",
            "PST",
            "PDT",
            "Vancouver",
        ),
    },
    ZoneRecord {
        bcp47: "deber",
        iana: "Europe/Berlin",
        std_offset_seconds: HOUR,
        daylight: Some(eu_rule(2 * HOUR, 3 * HOUR)),
        names: names(
            "Central European Time",
            "Central European Standard Time",
            "Central European Summer Time",
            "CET",
            "CEST",
            "Berlin",
        ),
    },
    ZoneRecord {
        bcp47: "esmad",
        iana: "Europe/Madrid",
        std_offset_seconds: HOUR,
        daylight: Some(eu_rule(2 * HOUR, 3 * HOUR)),
        names: names(
            "Central European Time",
            "Central European Standard Time",
            "Central European Summer Time",
            "CET",
            "CEST",
            "Madrid",
        ),
    },
    ZoneRecord {
        bcp47: "frpar",
        iana: "Europe/Paris",
        std_offset_seconds: HOUR,
        daylight: Some(eu_rule(2 * HOUR, 3 * HOUR)),
        names: names(
            "Central European Time",
            "Central European Standard Time",
            "Central European Summer Time",
            "CET",
            "CEST",
            "Paris",
        ),
    },
    ZoneRecord {
        bcp47: "gblon",
        iana: "Europe/London",
        std_offset_seconds: 0,
        daylight: Some(eu_rule(HOUR, 2 * HOUR)),
        names: names(
            "United Kingdom Time",
            "Greenwich Mean Time",
            "British Summer Time",
            "GMT",
            "BST",
            "London",
        ),
    },
    ZoneRecord {
        bcp47: "hkhkg",
        iana: "Asia/Hong_Kong",
        std_offset_seconds: 8 * HOUR,
        daylight: None,
        names: fixed_names("Hong Kong Standard Time", "HKT", "Hong Kong"),
    },
    ZoneRecord {
        bcp47: "inccu",
        iana: "Asia/Kolkata",
        std_offset_seconds: 5 * HOUR + 1800,
        daylight: None,
        names: fixed_names("India Standard Time", "IST", "Kolkata"),
    },
    ZoneRecord {
        bcp47: "irthr",
        iana: "Asia/Tehran",
        std_offset_seconds: 3 * HOUR + 1800,
        daylight: None,
        names: fixed_names("Iran Standard Time", "IRST", "Tehran"),
    },
    ZoneRecord {
        bcp47: "jptyo",
        iana: "Asia/Tokyo",
        std_offset_seconds: 9 * HOUR,
        daylight: None,
        names: fixed_names("Japan Standard Time", "JST", "Tokyo"),
    },
    ZoneRecord {
        bcp47: "mxmex",
        iana: "America/Mexico_City",
        std_offset_seconds: -6 * HOUR,
        daylight: None,
        names: fixed_names("Central Standard Time", "CST", "Mexico City"),
    },
    ZoneRecord {
        bcp47: "npktm",
        iana: "Asia/Kathmandu",
        std_offset_seconds: 5 * HOUR + 2700,
        daylight: None,
        names: fixed_names("Nepal Time", "NPT", "Kathmandu"),
    },
    ZoneRecord {
        bcp47: "nzakl",
        iana: "Pacific/Auckland",
        std_offset_seconds: 12 * HOUR,
        daylight: Some(NZ_RULE),
        names: names(
            "New Zealand Time",
            "New Zealand Standard Time",
            "New Zealand Daylight Time",
            "NZST",
            "NZDT",
            "Auckland",
        ),
    },
    ZoneRecord {
        bcp47: "rumow",
        iana: "Europe/Moscow",
        std_offset_seconds: 3 * HOUR,
        daylight: None,
        names: fixed_names("Moscow Standard Time", "MSK", "Moscow"),
    },
    ZoneRecord {
        bcp47: "sgsin",
        iana: "Asia/Singapore",
        std_offset_seconds: 8 * HOUR,
        daylight: None,
        names: fixed_names("Singapore Standard Time", "SGT", "Singapore"),
    },
    ZoneRecord {
        bcp47: "usanc",
        iana: "America/Anchorage",
        std_offset_seconds: -9 * HOUR,
        daylight: Some(US_RULE),
        names: names(
            "Alaska Time",
            "Alaska Standard Time",
            "Alaska Daylight Time",
            "AKST",
            "AKDT",
            "Anchorage",
        ),
    },
    ZoneRecord {
        bcp47: "uschi",
        iana: "America/Chicago",
        std_offset_seconds: -6 * HOUR,
        daylight: Some(US_RULE),
        names: names(
            "Central Time",
            "Central Standard Time",
            "Central Daylight Time",
            "CST",
            "CDT",
            "Chicago",
        ),
    },
    ZoneRecord {
        bcp47: "usden",
        iana: "America/Denver",
        std_offset_seconds: -7 * HOUR,
        daylight: Some(US_RULE),
        names: names(
            "Mountain Time",
            "Mountain Standard Time",
            "Mountain Daylight Time",
            "MST",
            "MDT",
            "Denver",
        ),
    },
    ZoneRecord {
        bcp47: "ushnl",
        iana: "Pacific/Honolulu",
        std_offset_seconds: -10 * HOUR,
        daylight: None,
        names: fixed_names("Hawaii-Aleutian Standard Time", "HST", "Honolulu"),
    },
    ZoneRecord {
        bcp47: "uslax",
        iana: "America/Los_Angeles",
        std_offset_seconds: -8 * HOUR,
        daylight: Some(US_RULE),
        names: names(
            "Pacific Time",
            "Pacific Standard Time",
            "Pacific Daylight Time",
            "PST",
            "PDT",
            "Los Angeles",
        ),
    },
    ZoneRecord {
        bcp47: "usnyc",
        iana: "America/New_York",
        std_offset_seconds: -5 * HOUR,
        daylight: Some(US_RULE),
        names: names(
            "Eastern Time",
            "Eastern Standard Time",
            "Eastern Daylight Time",
            "EST",
            "EDT",
            "New York",
        ),
    },
    ZoneRecord {
        bcp47: "usphx",
        iana: "America/Phoenix",
        std_offset_seconds: -7 * HOUR,
        daylight: None,
        names: fixed_names("Mountain Standard Time", "MST", "Phoenix"),
    },
    ZoneRecord {
        bcp47: "utc",
        iana: "Etc/UTC",
        std_offset_seconds: 0,
        daylight: None,
        names: fixed_names("Coordinated Universal Time", "UTC", "UTC"),
    },
];
