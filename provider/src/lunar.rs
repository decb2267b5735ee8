//! Lunisolar year records for the Chinese and Dangi calendars.
//!
//! The Chinese and Dangi calendars are observational; their month
//! structure is published per year rather than derived from a closed
//! formula, so the core library treats them as data-driven and resolves
//! year records through its `CalendarDataProvider` trait.
//!
//! This crate bakes a bounded demonstration window of years keyed by the
//! related ISO year (the ISO year in which the lunar new year falls).
//! Years outside the window surface as missing-data errors in the core
//! library. New-year epoch days are anchored on the published new-year
//! dates for the window.

/// One lunisolar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarYear {
    /// The ISO year the lunar new year falls in.
    pub related_iso: i32,
    /// Rata die (day 1 = 0001-01-01 ISO) of the lunar new year.
    pub new_year: i32,
    /// Month-length mask: bit `n` set means month `n + 1` (in ordinal
    /// order, leap month included) has 30 days, otherwise 29.
    pub month_mask: u16,
    /// Ordinal month after which the leap month is inserted; 0 = none.
    pub leap_month: u8,
}

impl LunarYear {
    /// Number of months in the year (13 when a leap month is present).
    pub const fn months_in_year(&self) -> u8 {
        if self.leap_month == 0 {
            12
        } else {
            13
        }
    }

    /// Length in days of the 1-based ordinal month.
    pub const fn days_in_month(&self, ordinal: u8) -> u8 {
        if self.month_mask & (1 << (ordinal - 1)) != 0 {
            30
        } else {
            29
        }
    }

    /// Total length of the year in days.
    pub const fn days_in_year(&self) -> u16 {
        let months = self.months_in_year() as u16;
        29 * months + (self.month_mask.count_ones() as u16)
    }

    /// Whether the 1-based ordinal month is the inserted leap month.
    pub const fn is_leap_ordinal(&self, ordinal: u8) -> bool {
        self.leap_month != 0 && ordinal == self.leap_month + 1
    }
}

const fn year(related_iso: i32, new_year: i32, month_mask: u16, leap_month: u8) -> LunarYear {
    LunarYear { related_iso, new_year, month_mask, leap_month }
}

/// Chinese calendar records, related ISO years 2019..=2025.
pub static CHINESE_YEARS: &[LunarYear] = &[
    // 2019-02-05, common year of 354 days
    year(2019, 737_095, 0x0555, 0),
    // 2020-01-25, leap month after month 4, 384 days
    year(2020, 737_449, 0x1555, 4),
    // 2021-02-12, common year of 354 days
    year(2021, 737_833, 0x0AAA, 0),
    // 2022-02-01, common year of 355 days
    year(2022, 738_187, 0x0AAB, 0),
    // 2023-01-22, leap month after month 2, 384 days
    year(2023, 738_542, 0x1555, 2),
    // 2024-02-10, common year of 354 days
    year(2024, 738_926, 0x0555, 0),
    // 2025-01-29, leap month after month 6, 384 days
    year(2025, 739_280, 0x1AAA, 6),
];

/// Dangi (Korean) calendar records for the same window. The Dangi
/// reckoning uses the Korean meridian; within this window its year
/// structure matches the Chinese records.
pub static DANGI_YEARS: &[LunarYear] = &[
    year(2019, 737_095, 0x0555, 0),
    year(2020, 737_449, 0x1555, 4),
    year(2021, 737_833, 0x0AAA, 0),
    year(2022, 738_187, 0x0AAB, 0),
    year(2023, 738_542, 0x1555, 2),
    year(2024, 738_926, 0x0555, 0),
    year(2025, 739_280, 0x1AAA, 6),
];
