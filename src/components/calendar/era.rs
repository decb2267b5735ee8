//! Calendar era tables.
//!
//! Era codes and their mapping onto arithmetic years, per calendar. The
//! code set follows the CLDR era identifiers.

use core::ops::RangeInclusive;

use tinystr::{tinystr, TinyAsciiStr};

use super::CalendarKind;

/// Era metadata: its canonical code, the valid era-year range, and the
/// mapping from era years onto arithmetic years.
pub(crate) struct EraInfo {
    pub(crate) name: TinyAsciiStr<16>,
    pub(crate) range: RangeInclusive<i32>,
    pub(crate) arithmetic_year: ArithmeticYear,
}

/// The way an era year maps to an arithmetic year.
pub(crate) enum ArithmeticYear {
    /// 1 era year = arithmetic year 1.
    DefaultEra,
    /// Era year 1 = the given arithmetic year (e.g. reiwa).
    Offset(i32),
    /// Counts backwards: era year 1 = arithmetic year 0 (e.g. bce).
    Inverse,
}

impl EraInfo {
    pub(crate) fn arithmetic_year_for(&self, era_year: i32) -> i32 {
        match self.arithmetic_year {
            ArithmeticYear::DefaultEra => era_year,
            ArithmeticYear::Offset(offset) => offset + era_year - 1,
            ArithmeticYear::Inverse => 1 - era_year,
        }
    }
}

macro_rules! valid_era {
    ($name:literal, $range:expr, $ext:expr ) => {
        EraInfo {
            name: tinystr!(16, $name),
            range: $range,
            arithmetic_year: $ext,
        }
    };
    ($name:literal, $range:expr ) => {
        valid_era!($name, $range, ArithmeticYear::DefaultEra)
    };
}

pub(crate) const BUDDHIST_ERA: EraInfo = valid_era!("be", i32::MIN..=i32::MAX);
pub(crate) const COPTIC_ERA: EraInfo = valid_era!("am", i32::MIN..=i32::MAX);
pub(crate) const ETHIOPIC_ERA: EraInfo = valid_era!("am", 1..=i32::MAX);
pub(crate) const ETHIOPIC_AA_ERA: EraInfo =
    valid_era!("aa", i32::MIN..=5500, ArithmeticYear::Offset(-5499));
pub(crate) const ETHIOAA_ERA: EraInfo = valid_era!("aa", i32::MIN..=i32::MAX);
pub(crate) const GREGORY_ERA: EraInfo = valid_era!("ce", 1..=i32::MAX);
pub(crate) const GREGORY_INVERSE_ERA: EraInfo =
    valid_era!("bce", 1..=i32::MAX, ArithmeticYear::Inverse);
pub(crate) const HEBREW_ERA: EraInfo = valid_era!("am", i32::MIN..=i32::MAX);
pub(crate) const INDIAN_ERA: EraInfo = valid_era!("shaka", i32::MIN..=i32::MAX);
pub(crate) const ISLAMIC_ERA: EraInfo = valid_era!("ah", i32::MIN..=i32::MAX);
pub(crate) const ISLAMIC_INVERSE_ERA: EraInfo =
    valid_era!("bh", 1..=i32::MAX, ArithmeticYear::Inverse);
pub(crate) const JAPANESE_ERA: EraInfo = valid_era!("ce", 1..=1868);
pub(crate) const JAPANESE_INVERSE_ERA: EraInfo =
    valid_era!("bce", 1..=i32::MAX, ArithmeticYear::Inverse);
pub(crate) const MEIJI_ERA: EraInfo = valid_era!("meiji", 1..=45, ArithmeticYear::Offset(1868));
pub(crate) const TAISHO_ERA: EraInfo = valid_era!("taisho", 1..=15, ArithmeticYear::Offset(1912));
pub(crate) const SHOWA_ERA: EraInfo = valid_era!("showa", 1..=64, ArithmeticYear::Offset(1926));
pub(crate) const HEISEI_ERA: EraInfo = valid_era!("heisei", 1..=31, ArithmeticYear::Offset(1989));
pub(crate) const REIWA_ERA: EraInfo =
    valid_era!("reiwa", 1..=i32::MAX, ArithmeticYear::Offset(2019));
pub(crate) const PERSIAN_ERA: EraInfo = valid_era!("ap", i32::MIN..=i32::MAX);
pub(crate) const ROC_ERA: EraInfo = valid_era!("roc", 1..=i32::MAX);
pub(crate) const ROC_INVERSE_ERA: EraInfo =
    valid_era!("broc", 1..=i32::MAX, ArithmeticYear::Inverse);

/// Accepted spellings per era code, beyond the canonical name.
fn era_matches(info: &EraInfo, era: &str) -> bool {
    if info.name.as_str() == era {
        return true;
    }
    match info.name.as_str() {
        "ce" => era == "ad",
        "bce" => era == "bc",
        "am" => era == "incar",
        "aa" => era == "mundi",
        _ => false,
    }
}

/// The eras a calendar recognizes, default era first.
pub(crate) fn eras_for_kind(kind: CalendarKind) -> &'static [EraInfo] {
    match kind {
        CalendarKind::Buddhist => &[BUDDHIST_ERA],
        CalendarKind::Coptic => &[COPTIC_ERA],
        CalendarKind::Ethiopian => &[ETHIOPIC_ERA, ETHIOPIC_AA_ERA],
        CalendarKind::EthiopianAmeteAlem => &[ETHIOAA_ERA],
        CalendarKind::Gregorian => &[GREGORY_ERA, GREGORY_INVERSE_ERA],
        CalendarKind::Hebrew => &[HEBREW_ERA],
        CalendarKind::Indian => &[INDIAN_ERA],
        CalendarKind::IslamicCivil | CalendarKind::IslamicTabular => {
            &[ISLAMIC_ERA, ISLAMIC_INVERSE_ERA]
        }
        CalendarKind::Japanese => &[
            REIWA_ERA,
            HEISEI_ERA,
            SHOWA_ERA,
            TAISHO_ERA,
            MEIJI_ERA,
            JAPANESE_ERA,
            JAPANESE_INVERSE_ERA,
        ],
        CalendarKind::Persian => &[PERSIAN_ERA],
        CalendarKind::Roc => &[ROC_ERA, ROC_INVERSE_ERA],
        CalendarKind::Iso | CalendarKind::Chinese | CalendarKind::Dangi => &[],
    }
}

/// Resolves an era code for a calendar, if recognized.
pub(crate) fn era_info(kind: CalendarKind, era: &str) -> Option<&'static EraInfo> {
    eras_for_kind(kind).iter().find(|info| era_matches(info, era))
}

/// Rata die boundaries of the Japanese eras, newest first.
pub(crate) const JAPANESE_ERA_STARTS: [(i64, &EraInfo); 5] = [
    (737_180, &REIWA_ERA),   // 2019-05-01
    (726_110, &HEISEI_ERA),  // 1989-01-08
    (703_450, &SHOWA_ERA),   // 1926-12-25
    (698_189, &TAISHO_ERA),  // 1912-07-30
    (682_203, &MEIJI_ERA),   // 1868-10-23
];
