//! Per-calendar arithmetic.
//!
//! Every calendar converts through the rata die. The solar calendars
//! (ISO reckoning and its era variants) use the Neri–Schneider equations
//! in `utils`; the families below implement the remaining arithmetic
//! rule sets. All functions are exact integer arithmetic and are total
//! over the supported day range, so field round-trips hold everywhere.

use kairos_provider::LunarYear;

use crate::error::ErrorMessage;
use crate::{KairosError, KairosResult};

/// A calendar-native (arithmetic year, ordinal month, day) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CalendarFieldsResolved {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) day: u8,
}

// ==== Coptic reckoning (Coptic, Ethiopian, Amete Alem) ====
//
// Twelve 30-day months plus a 5/6-day epagomenal thirteenth month; leap
// years are those with `year % 4 == 3`.

pub(crate) mod coptic {
    use super::CalendarFieldsResolved;

    /// Thoout 1, year 1 of the era of the martyrs: 284-08-29 Julian.
    pub(crate) const COPTIC_EPOCH: i64 = 103_605;
    /// Amete Mihret epoch: 8-08-29 Julian.
    pub(crate) const ETHIOPIC_EPOCH: i64 = 2_796;
    /// Amete Alem years offset from Amete Mihret.
    pub(crate) const AMETE_ALEM_OFFSET: i32 = 5_500;

    pub(crate) const fn is_leap(year: i32) -> bool {
        year.rem_euclid(4) == 3
    }

    pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
        if month < 13 {
            30
        } else if is_leap(year) {
            6
        } else {
            5
        }
    }

    pub(crate) const fn days_in_year(year: i32) -> u16 {
        if is_leap(year) {
            366
        } else {
            365
        }
    }

    pub(crate) const fn to_rata_die(epoch: i64, year: i32, month: u8, day: u8) -> i64 {
        epoch - 1
            + 365 * (year as i64 - 1)
            + (year as i64).div_euclid(4)
            + 30 * (month as i64 - 1)
            + day as i64
    }

    pub(crate) const fn from_rata_die(epoch: i64, rd: i64) -> CalendarFieldsResolved {
        let year = (4 * (rd - epoch) + 1463).div_euclid(1461) as i32;
        let month = ((rd - to_rata_die(epoch, year, 1, 1)).div_euclid(30)) as u8 + 1;
        let day = (rd - to_rata_die(epoch, year, month, 1)) as u8 + 1;
        CalendarFieldsResolved { year, month, day }
    }
}

// ==== Hebrew ====
//
// The classical molad arithmetic with the four postponement rules.
// Ordinal months use the civil (Tishri-first) ordering; in leap years the
// inserted month (Adar I) is ordinal 6.

pub(crate) mod hebrew {
    /// Tishri 1, AM 1: -3761-10-07 Julian.
    pub(crate) const EPOCH: i64 = -1_373_427;

    pub(crate) const fn is_leap(year: i32) -> bool {
        (7 * year as i64 + 1).rem_euclid(19) < 7
    }

    pub(crate) const fn months_in_year(year: i32) -> u8 {
        if is_leap(year) {
            13
        } else {
            12
        }
    }

    /// Days from the epoch to the molad-determined new year, before the
    /// year-length correction.
    const fn elapsed_days(year: i32) -> i64 {
        let months = (235 * year as i64 - 234).div_euclid(19);
        let parts = 12_084 + 13_753 * months;
        let days = 29 * months + parts.div_euclid(25_920);
        // First postponement: keep Rosh Hashanah off Sunday, Wednesday,
        // and Friday.
        if (3 * (days + 1)).rem_euclid(7) < 3 {
            days + 1
        } else {
            days
        }
    }

    /// Additional postponements that keep year lengths legal.
    const fn year_length_correction(year: i32) -> i64 {
        let ny0 = elapsed_days(year - 1);
        let ny1 = elapsed_days(year);
        let ny2 = elapsed_days(year + 1);
        if ny2 - ny1 == 356 {
            2
        } else if ny1 - ny0 == 382 {
            1
        } else {
            0
        }
    }

    pub(crate) const fn new_year(year: i32) -> i64 {
        EPOCH + elapsed_days(year) + year_length_correction(year)
    }

    pub(crate) const fn days_in_year(year: i32) -> u16 {
        (new_year(year + 1) - new_year(year)) as u16
    }

    const fn long_heshvan(year: i32) -> bool {
        days_in_year(year) % 10 == 5
    }

    const fn short_kislev(year: i32) -> bool {
        days_in_year(year) % 10 == 3
    }

    pub(crate) const fn days_in_month(year: i32, ordinal: u8) -> u8 {
        let leap = is_leap(year);
        // Ordinals in civil order; the leap month Adar I is ordinal 6 and
        // shifts everything after it.
        let identity = if leap && ordinal >= 6 { ordinal + 1 } else { ordinal + 2 };
        // identity: Tishri=3 .. Elul=14 in a common year, with the leap
        // month itself mapped onto 7 (30 days) below.
        match identity {
            3 => 30,                                      // Tishri
            4 => {
                if long_heshvan(year) {
                    30
                } else {
                    29
                }
            }
            5 => {
                if short_kislev(year) {
                    29
                } else {
                    30
                }
            }
            6 => 29,                                      // Tevet
            7 => 30,                                      // Shevat / Adar I
            8 => 29,                                      // Adar (II)
            9 => 30,                                      // Nisan
            10 => 29,                                     // Iyyar
            11 => 30,                                     // Sivan
            12 => 29,                                     // Tammuz
            13 => 30,                                     // Av
            _ => 29,                                      // Elul
        }
    }

    pub(crate) fn to_rata_die(year: i32, ordinal: u8, day: u8) -> i64 {
        let mut days = new_year(year);
        let mut m = 1u8;
        while m < ordinal {
            days += i64::from(days_in_month(year, m));
            m += 1;
        }
        days + i64::from(day) - 1
    }

    pub(crate) fn from_rata_die(rd: i64) -> super::CalendarFieldsResolved {
        // Mean year length is 365.2468 days; refine the estimate with the
        // exact new-year function.
        let mut year = ((rd - EPOCH) * 10_000).div_euclid(3_652_468) as i32 + 1;
        while new_year(year) > rd {
            year -= 1;
        }
        while new_year(year + 1) <= rd {
            year += 1;
        }
        let mut remaining = rd - new_year(year);
        let mut month = 1u8;
        loop {
            let len = i64::from(days_in_month(year, month));
            if remaining < len {
                break;
            }
            remaining -= len;
            month += 1;
        }
        super::CalendarFieldsResolved { year, month, day: remaining as u8 + 1 }
    }
}

// ==== Islamic tabular (civil and astronomical epochs) ====
//
// The 30-year intercalation cycle with 11 leap years.

pub(crate) mod islamic {
    use super::CalendarFieldsResolved;

    /// Muharram 1, AH 1 (civil reckoning): 622-07-16 Julian, a Friday.
    pub(crate) const CIVIL_EPOCH: i64 = 227_015;
    /// The astronomical (Thursday) epoch, one day earlier.
    pub(crate) const TABULAR_EPOCH: i64 = 227_014;

    pub(crate) const fn is_leap(year: i32) -> bool {
        (11 * year as i64 + 14).rem_euclid(30) < 11
    }

    pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
        if month % 2 == 1 || (month == 12 && is_leap(year)) {
            30
        } else {
            29
        }
    }

    pub(crate) const fn days_in_year(year: i32) -> u16 {
        if is_leap(year) {
            355
        } else {
            354
        }
    }

    pub(crate) const fn to_rata_die(epoch: i64, year: i32, month: u8, day: u8) -> i64 {
        let y = year as i64;
        let m = month as i64;
        epoch - 1 + 354 * (y - 1) + (3 + 11 * y).div_euclid(30) + 29 * (m - 1) + m.div_euclid(2)
            + day as i64
    }

    pub(crate) fn from_rata_die(epoch: i64, rd: i64) -> CalendarFieldsResolved {
        let mut year = ((30 * (rd - epoch) + 10_646).div_euclid(10_631)) as i32;
        while to_rata_die(epoch, year, 1, 1) > rd {
            year -= 1;
        }
        while to_rata_die(epoch, year + 1, 1, 1) <= rd {
            year += 1;
        }
        let mut remaining = rd - to_rata_die(epoch, year, 1, 1);
        let mut month = 1u8;
        loop {
            let len = i64::from(days_in_month(year, month));
            if remaining < len {
                break;
            }
            remaining -= len;
            month += 1;
        }
        CalendarFieldsResolved { year, month, day: remaining as u8 + 1 }
    }
}

// ==== Persian (Solar Hijri, 33-year arithmetic cycle) ====

pub(crate) mod persian {
    use super::CalendarFieldsResolved;

    /// Farvardin 1, AP 1, anchored so 1403-01-01 AP = 2024-03-20 ISO.
    pub(crate) const EPOCH: i64 = 226_895;

    pub(crate) const fn is_leap(year: i32) -> bool {
        (25 * year as i64 + 11).rem_euclid(33) < 8
    }

    const fn leaps_before(year: i32) -> i64 {
        (8 * year as i64 + 21).div_euclid(33)
    }

    pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
        if month <= 6 {
            31
        } else if month <= 11 || is_leap(year) {
            30
        } else {
            29
        }
    }

    pub(crate) const fn days_in_year(year: i32) -> u16 {
        if is_leap(year) {
            366
        } else {
            365
        }
    }

    const fn days_before_month(month: u8) -> i64 {
        if month <= 7 {
            31 * (month as i64 - 1)
        } else {
            30 * (month as i64 - 1) + 6
        }
    }

    pub(crate) const fn to_rata_die(year: i32, month: u8, day: u8) -> i64 {
        EPOCH - 1 + 365 * (year as i64 - 1) + leaps_before(year) + days_before_month(month)
            + day as i64
    }

    pub(crate) fn from_rata_die(rd: i64) -> CalendarFieldsResolved {
        // Mean year length is 365 + 8/33 days.
        let mut year = ((rd - EPOCH) * 33).div_euclid(12_053) as i32 + 1;
        while to_rata_die(year, 1, 1) > rd {
            year -= 1;
        }
        while to_rata_die(year + 1, 1, 1) <= rd {
            year += 1;
        }
        let day_of_year = (rd - to_rata_die(year, 1, 1)) as u16;
        let (month, day) = if day_of_year < 186 {
            ((day_of_year / 31) as u8 + 1, (day_of_year % 31) as u8 + 1)
        } else {
            (
                ((day_of_year - 186) / 30) as u8 + 7,
                ((day_of_year - 186) % 30) as u8 + 1,
            )
        };
        CalendarFieldsResolved { year, month, day }
    }
}

// ==== Indian national (Śaka civil) ====
//
// Anchored to the ISO year: the Śaka new year is always ISO day-of-year
// 81 (March 22, or March 21 in ISO leap years).

pub(crate) mod indian {
    use super::CalendarFieldsResolved;
    use crate::utils;

    pub(crate) const YEAR_OFFSET: i32 = 78;

    pub(crate) const fn is_leap(year: i32) -> bool {
        utils::is_leap_year(year + YEAR_OFFSET)
    }

    pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
        if month == 1 {
            if is_leap(year) {
                31
            } else {
                30
            }
        } else if month <= 6 {
            31
        } else {
            30
        }
    }

    pub(crate) const fn days_in_year(year: i32) -> u16 {
        if is_leap(year) {
            366
        } else {
            365
        }
    }

    const fn days_before_month(year: i32, month: u8) -> i64 {
        if month == 1 {
            return 0;
        }
        let chaitra = days_in_month(year, 1) as i64;
        let m = month as i64;
        let long_months = if m <= 7 { m - 2 } else { 5 };
        let short_months = if m > 7 { m - 7 } else { 0 };
        chaitra + 31 * long_months + 30 * short_months
    }

    const fn new_year(year: i32) -> i64 {
        utils::rata_die_from_gregorian(year + YEAR_OFFSET, 1, 1) + 80
    }

    pub(crate) const fn to_rata_die(year: i32, month: u8, day: u8) -> i64 {
        new_year(year) + days_before_month(year, month) + day as i64 - 1
    }

    pub(crate) fn from_rata_die(rd: i64) -> CalendarFieldsResolved {
        let (iso_year, _, _) = utils::gregorian_from_rata_die(rd);
        let mut year = iso_year - YEAR_OFFSET;
        if new_year(year) > rd {
            year -= 1;
        }
        let day_of_year = (rd - new_year(year)) as u16;
        let chaitra = u16::from(days_in_month(year, 1));
        let (month, day) = if day_of_year < chaitra {
            (1, day_of_year as u8 + 1)
        } else {
            let rest = day_of_year - chaitra;
            if rest < 155 {
                ((rest / 31) as u8 + 2, (rest % 31) as u8 + 1)
            } else {
                (((rest - 155) / 30) as u8 + 7, ((rest - 155) % 30) as u8 + 1)
            }
        };
        CalendarFieldsResolved { year, month, day }
    }
}

// ==== Lunisolar (Chinese, Dangi) ====
//
// Data-driven: per-year records from the calendar data provider. Years
// are identified by the related ISO year.

pub(crate) mod lunisolar {
    use super::{CalendarFieldsResolved, LunarYear};
    use crate::error::ErrorMessage;
    use crate::{KairosError, KairosResult};

    pub(crate) fn year_record(table: &[LunarYear], related_iso: i32) -> KairosResult<&LunarYear> {
        table
            .iter()
            .find(|y| y.related_iso == related_iso)
            .ok_or_else(|| KairosError::data().with_enum(ErrorMessage::MissingLunarTable))
    }

    pub(crate) fn year_for_rata_die(table: &[LunarYear], rd: i64) -> KairosResult<&LunarYear> {
        table
            .iter()
            .rev()
            .find(|y| i64::from(y.new_year) <= rd)
            .filter(|y| rd < i64::from(y.new_year) + i64::from(y.days_in_year()))
            .ok_or_else(|| KairosError::data().with_enum(ErrorMessage::MissingLunarTable))
    }

    pub(crate) fn to_rata_die(record: &LunarYear, ordinal: u8, day: u8) -> i64 {
        let mut days = i64::from(record.new_year);
        let mut m = 1u8;
        while m < ordinal {
            days += i64::from(record.days_in_month(m));
            m += 1;
        }
        days + i64::from(day) - 1
    }

    pub(crate) fn from_rata_die(record: &LunarYear, rd: i64) -> CalendarFieldsResolved {
        let mut remaining = rd - i64::from(record.new_year);
        let mut month = 1u8;
        loop {
            let len = i64::from(record.days_in_month(month));
            if remaining < len {
                break;
            }
            remaining -= len;
            month += 1;
        }
        CalendarFieldsResolved {
            year: record.related_iso,
            month,
            day: remaining as u8 + 1,
        }
    }
}

/// Checks a calendar-native day against the month length.
pub(crate) fn validate_day(day: u8, max: u8) -> KairosResult<()> {
    if day == 0 || day > max {
        return Err(KairosError::range().with_enum(ErrorMessage::DateOutOfRange));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::rata_die_from_gregorian;

    #[test]
    fn hebrew_new_year_anchors() {
        // Rosh Hashanah 5785 was 2024-10-03; 5784 was 2023-09-16.
        assert_eq!(hebrew::new_year(5785), rata_die_from_gregorian(2024, 10, 3));
        assert_eq!(hebrew::new_year(5784), rata_die_from_gregorian(2023, 9, 16));
    }

    #[test]
    fn hebrew_year_lengths_are_legal() {
        for year in 5700..5800 {
            let days = hebrew::days_in_year(year);
            assert!(
                matches!(days, 353..=355 | 383..=385),
                "year {year} has {days} days"
            );
            let is_long = days > 380;
            assert_eq!(is_long, hebrew::is_leap(year));
            // The months must sum to the year length.
            let sum: u16 = (1..=hebrew::months_in_year(year))
                .map(|m| u16::from(hebrew::days_in_month(year, m)))
                .sum();
            assert_eq!(sum, days, "year {year}");
        }
    }

    #[test]
    fn hebrew_round_trip() {
        for year in [5784, 5785, 5786] {
            for month in 1..=hebrew::months_in_year(year) {
                let rd = hebrew::to_rata_die(year, month, 10);
                let fields = hebrew::from_rata_die(rd);
                assert_eq!((fields.year, fields.month, fields.day), (year, month, 10));
            }
        }
    }

    #[test]
    fn islamic_cycle_has_eleven_leap_years() {
        let leaps = (1..=30).filter(|y| islamic::is_leap(*y)).count();
        assert_eq!(leaps, 11);
    }

    #[test]
    fn islamic_round_trip() {
        for year in [1440, 1445, 1446] {
            for month in 1..=12u8 {
                let rd = islamic::to_rata_die(islamic::CIVIL_EPOCH, year, month, 29);
                let fields = islamic::from_rata_die(islamic::CIVIL_EPOCH, rd);
                assert_eq!((fields.year, fields.month, fields.day), (year, month, 29));
            }
        }
    }

    #[test]
    fn islamic_epochs_are_offset_by_one_day() {
        let civil = islamic::to_rata_die(islamic::CIVIL_EPOCH, 1, 1, 1);
        let tabular = islamic::to_rata_die(islamic::TABULAR_EPOCH, 1, 1, 1);
        assert_eq!(civil, islamic::CIVIL_EPOCH);
        assert_eq!(tabular + 1, civil);
    }

    #[test]
    fn persian_cycle_has_eight_leap_years() {
        let leaps = (1..=33).filter(|y| persian::is_leap(*y)).count();
        assert_eq!(leaps, 8);
    }

    #[test]
    fn persian_nowruz_anchors() {
        // 1403 AP began 2024-03-20 and is a leap year; 1404 began
        // 2025-03-21.
        assert!(persian::is_leap(1403));
        assert_eq!(persian::to_rata_die(1403, 1, 1), rata_die_from_gregorian(2024, 3, 20));
        assert_eq!(persian::to_rata_die(1404, 1, 1), rata_die_from_gregorian(2025, 3, 21));
    }

    #[test]
    fn persian_round_trip() {
        for year in [1402, 1403, 1404] {
            for month in 1..=12u8 {
                let day = persian::days_in_month(year, month);
                let rd = persian::to_rata_die(year, month, day);
                let fields = persian::from_rata_die(rd);
                assert_eq!((fields.year, fields.month, fields.day), (year, month, day));
            }
        }
    }

    #[test]
    fn indian_new_year_is_day_81() {
        // 1946 Śaka began 2024-03-21 (ISO leap year); 1945 began
        // 2023-03-22.
        assert_eq!(indian::to_rata_die(1946, 1, 1), rata_die_from_gregorian(2024, 3, 21));
        assert_eq!(indian::to_rata_die(1945, 1, 1), rata_die_from_gregorian(2023, 3, 22));
    }

    #[test]
    fn indian_round_trip() {
        for year in [1944, 1945, 1946] {
            for month in 1..=12u8 {
                let rd = indian::to_rata_die(year, month, 15);
                let fields = indian::from_rata_die(rd);
                assert_eq!((fields.year, fields.month, fields.day), (year, month, 15));
            }
        }
    }

    #[test]
    fn coptic_round_trip() {
        for year in [1739, 1740, 1741] {
            for month in 1..=13u8 {
                let day = coptic::days_in_month(year, month);
                let rd = coptic::to_rata_die(coptic::COPTIC_EPOCH, year, month, day);
                let fields = coptic::from_rata_die(coptic::COPTIC_EPOCH, rd);
                assert_eq!((fields.year, fields.month, fields.day), (year, month, day));
            }
        }
    }

    #[test]
    fn coptic_epoch_is_day_one() {
        assert_eq!(coptic::to_rata_die(coptic::COPTIC_EPOCH, 1, 1, 1), coptic::COPTIC_EPOCH);
        let fields = coptic::from_rata_die(coptic::COPTIC_EPOCH, coptic::COPTIC_EPOCH);
        assert_eq!((fields.year, fields.month, fields.day), (1, 1, 1));
    }

    #[test]
    fn lunisolar_round_trip() {
        let table = kairos_provider::CHINESE_YEARS;
        for record in table {
            for month in 1..=record.months_in_year() {
                let rd = lunisolar::to_rata_die(record, month, 15);
                let fields = lunisolar::from_rata_die(record, rd);
                assert_eq!(
                    (fields.year, fields.month, fields.day),
                    (record.related_iso, month, 15)
                );
            }
        }
    }

    #[test]
    fn lunisolar_new_year_anchors() {
        let table = kairos_provider::CHINESE_YEARS;
        let y2024 = lunisolar::year_record(table, 2024).unwrap();
        assert_eq!(i64::from(y2024.new_year), rata_die_from_gregorian(2024, 2, 10));
        let y2023 = lunisolar::year_record(table, 2023).unwrap();
        assert_eq!(y2023.leap_month, 2);
        assert!(lunisolar::year_record(table, 1900).is_err());
    }
}
