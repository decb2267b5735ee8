//! The calendar engine: a closed set of calendar systems behind one
//! dispatch point.
//!
//! A [`Calendar`] is a stateless rule set selected by [`CalendarKind`].
//! Dates are stored as ISO records pinned to a rata die; every
//! calendar-native field is computed on demand from that position, so the
//! derived fields can never disagree with each other.

use kairos_provider::LunarYear;
use tinystr::TinyAsciiStr;

use crate::error::ErrorMessage;
use crate::iso::{IsoDate, RataDie};
use crate::options::Overflow;
use crate::provider::CalendarDataProvider;
use crate::utils;
use crate::{KairosError, KairosResult};

pub(crate) mod era;
pub(crate) mod rules;
pub(crate) mod types;

use rules::CalendarFieldsResolved;

pub use types::{CalendarFields, MonthCode};

use super::date::Date;

/// The closed enumeration of supported calendar systems.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CalendarKind {
    #[default]
    Iso,
    Gregorian,
    Buddhist,
    Roc,
    Japanese,
    Coptic,
    Ethiopian,
    EthiopianAmeteAlem,
    Hebrew,
    Indian,
    IslamicCivil,
    IslamicTabular,
    Persian,
    Chinese,
    Dangi,
}

impl CalendarKind {
    /// The BCP-47 calendar identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iso => "iso8601",
            Self::Gregorian => "gregory",
            Self::Buddhist => "buddhist",
            Self::Roc => "roc",
            Self::Japanese => "japanese",
            Self::Coptic => "coptic",
            Self::Ethiopian => "ethiopic",
            Self::EthiopianAmeteAlem => "ethioaa",
            Self::Hebrew => "hebrew",
            Self::Indian => "indian",
            Self::IslamicCivil => "islamic-civil",
            Self::IslamicTabular => "islamic-tbla",
            Self::Persian => "persian",
            Self::Chinese => "chinese",
            Self::Dangi => "dangi",
        }
    }

    /// Parses a calendar identifier, case-insensitively, accepting the
    /// CLDR aliases.
    pub fn try_from_utf8(bytes: &[u8]) -> KairosResult<Self> {
        let mut buf = [0u8; 24];
        if bytes.is_empty() || bytes.len() > buf.len() {
            return Err(KairosError::range().with_message("unknown calendar"));
        }
        for (i, b) in bytes.iter().enumerate() {
            buf[i] = b.to_ascii_lowercase();
        }
        Ok(match &buf[..bytes.len()] {
            b"iso8601" => Self::Iso,
            b"gregory" | b"gregorian" => Self::Gregorian,
            b"buddhist" => Self::Buddhist,
            b"roc" => Self::Roc,
            b"japanese" => Self::Japanese,
            b"coptic" => Self::Coptic,
            b"ethiopic" => Self::Ethiopian,
            b"ethioaa" | b"ethiopic-amete-alem" => Self::EthiopianAmeteAlem,
            b"hebrew" => Self::Hebrew,
            b"indian" => Self::Indian,
            b"islamic-civil" | b"islamicc" | b"islamic" => Self::IslamicCivil,
            b"islamic-tbla" => Self::IslamicTabular,
            b"persian" => Self::Persian,
            b"chinese" => Self::Chinese,
            b"dangi" => Self::Dangi,
            _ => return Err(KairosError::range().with_message("unknown calendar")),
        })
    }

    const fn is_lunisolar(self) -> bool {
        matches!(self, Self::Chinese | Self::Dangi)
    }
}

impl core::str::FromStr for CalendarKind {
    type Err = KairosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_utf8(s.as_bytes())
    }
}

/// A calendar rule set. Stateless with respect to individual dates;
/// create once and share freely.
#[derive(Debug, Clone, Copy)]
pub struct Calendar {
    kind: CalendarKind,
    /// Year records for the data-driven lunisolar calendars; empty for
    /// every other kind.
    lunar: &'static [LunarYear],
}

impl Default for Calendar {
    fn default() -> Self {
        Self::ISO
    }
}

impl PartialEq for Calendar {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Calendar {}

impl Calendar {
    pub const BUDDHIST: Self = Self::new(CalendarKind::Buddhist);
    pub const CHINESE: Self = Self::new(CalendarKind::Chinese);
    pub const COPTIC: Self = Self::new(CalendarKind::Coptic);
    pub const DANGI: Self = Self::new(CalendarKind::Dangi);
    pub const ETHIOPIAN: Self = Self::new(CalendarKind::Ethiopian);
    pub const ETHIOPIAN_AMETE_ALEM: Self = Self::new(CalendarKind::EthiopianAmeteAlem);
    pub const GREGORIAN: Self = Self::new(CalendarKind::Gregorian);
    pub const HEBREW: Self = Self::new(CalendarKind::Hebrew);
    pub const INDIAN: Self = Self::new(CalendarKind::Indian);
    pub const ISLAMIC_CIVIL: Self = Self::new(CalendarKind::IslamicCivil);
    pub const ISLAMIC_TABULAR: Self = Self::new(CalendarKind::IslamicTabular);
    pub const ISO: Self = Self::new(CalendarKind::Iso);
    pub const JAPANESE: Self = Self::new(CalendarKind::Japanese);
    pub const PERSIAN: Self = Self::new(CalendarKind::Persian);
    pub const ROC: Self = Self::new(CalendarKind::Roc);

    /// Creates a `Calendar` for the given kind, resolving the lunisolar
    /// calendars against the compiled-in tables.
    pub const fn new(kind: CalendarKind) -> Self {
        let lunar: &'static [LunarYear] = match kind {
            CalendarKind::Chinese => kairos_provider::CHINESE_YEARS,
            CalendarKind::Dangi => kairos_provider::DANGI_YEARS,
            _ => &[],
        };
        Self { kind, lunar }
    }

    /// Creates a `Calendar` resolving required calendar data through the
    /// given provider. Fails with a data error when the provider has no
    /// tables for a data-driven calendar.
    pub fn try_new_with_provider(
        kind: CalendarKind,
        provider: &impl CalendarDataProvider,
    ) -> KairosResult<Self> {
        if !kind.is_lunisolar() {
            return Ok(Self { kind, lunar: &[] });
        }
        let lunar = provider
            .lunisolar_years(kind)
            .ok_or(KairosError::data().with_enum(ErrorMessage::MissingLunarTable))?;
        Ok(Self { kind, lunar })
    }

    #[inline]
    pub fn kind(&self) -> CalendarKind {
        self.kind
    }

    #[inline]
    pub fn is_iso(&self) -> bool {
        matches!(self.kind, CalendarKind::Iso)
    }

    /// The BCP-47 identifier of this calendar.
    #[inline]
    pub fn identifier(&self) -> &'static str {
        self.kind.as_str()
    }
}

impl core::str::FromStr for Calendar {
    type Err = KairosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarKind::try_from_utf8(s.as_bytes()).map(Self::new)
    }
}

// ==== Internal field resolution ====

impl Calendar {
    /// Computes the calendar-native fields at a rata die.
    pub(crate) fn resolve_fields(&self, rd: RataDie) -> KairosResult<CalendarFieldsResolved> {
        let day = rd.to_i64();
        Ok(match self.kind {
            CalendarKind::Iso
            | CalendarKind::Gregorian
            | CalendarKind::Buddhist
            | CalendarKind::Roc
            | CalendarKind::Japanese => {
                let (year, month, day) = utils::gregorian_from_rata_die(day);
                let year = match self.kind {
                    CalendarKind::Buddhist => year + 543,
                    CalendarKind::Roc => year - 1911,
                    _ => year,
                };
                CalendarFieldsResolved { year, month, day }
            }
            CalendarKind::Coptic => rules::coptic::from_rata_die(rules::coptic::COPTIC_EPOCH, day),
            CalendarKind::Ethiopian => {
                rules::coptic::from_rata_die(rules::coptic::ETHIOPIC_EPOCH, day)
            }
            CalendarKind::EthiopianAmeteAlem => {
                let mut fields =
                    rules::coptic::from_rata_die(rules::coptic::ETHIOPIC_EPOCH, day);
                fields.year += rules::coptic::AMETE_ALEM_OFFSET;
                fields
            }
            CalendarKind::Hebrew => rules::hebrew::from_rata_die(day),
            CalendarKind::IslamicCivil => {
                rules::islamic::from_rata_die(rules::islamic::CIVIL_EPOCH, day)
            }
            CalendarKind::IslamicTabular => {
                rules::islamic::from_rata_die(rules::islamic::TABULAR_EPOCH, day)
            }
            CalendarKind::Persian => rules::persian::from_rata_die(day),
            CalendarKind::Indian => rules::indian::from_rata_die(day),
            CalendarKind::Chinese | CalendarKind::Dangi => {
                let record = rules::lunisolar::year_for_rata_die(self.lunar, day)?;
                rules::lunisolar::from_rata_die(record, day)
            }
        })
    }

    /// Field resolution for a date this calendar has already accepted.
    ///
    /// `Date` construction validates coverage, so this cannot fail for a
    /// live `Date`; a broken invariant degrades to the ISO fields.
    pub(crate) fn fields_for(&self, iso: &IsoDate) -> CalendarFieldsResolved {
        match self.resolve_fields(iso.to_rata_die()) {
            Ok(fields) => fields,
            Err(_) => {
                debug_assert!(false, "calendar fields resolved for unvalidated date");
                CalendarFieldsResolved { year: iso.year, month: iso.month, day: iso.day }
            }
        }
    }

    /// Converts calendar-native fields to their rata die.
    pub(crate) fn fields_to_rata_die(
        &self,
        year: i32,
        month: u8,
        day: u8,
    ) -> KairosResult<RataDie> {
        let months = self.months_in_arithmetic_year(year);
        if month == 0 || month > months {
            return Err(KairosError::range().with_enum(ErrorMessage::DateOutOfRange));
        }
        rules::validate_day(day, self.days_in_ordinal_month(year, month))?;
        let rd = match self.kind {
            CalendarKind::Iso
            | CalendarKind::Gregorian
            | CalendarKind::Buddhist
            | CalendarKind::Roc
            | CalendarKind::Japanese => {
                let iso_year = match self.kind {
                    CalendarKind::Buddhist => year - 543,
                    CalendarKind::Roc => year + 1911,
                    _ => year,
                };
                utils::rata_die_from_gregorian(iso_year, month, day)
            }
            CalendarKind::Coptic => {
                rules::coptic::to_rata_die(rules::coptic::COPTIC_EPOCH, year, month, day)
            }
            CalendarKind::Ethiopian => {
                rules::coptic::to_rata_die(rules::coptic::ETHIOPIC_EPOCH, year, month, day)
            }
            CalendarKind::EthiopianAmeteAlem => rules::coptic::to_rata_die(
                rules::coptic::ETHIOPIC_EPOCH,
                year - rules::coptic::AMETE_ALEM_OFFSET,
                month,
                day,
            ),
            CalendarKind::Hebrew => rules::hebrew::to_rata_die(year, month, day),
            CalendarKind::IslamicCivil => {
                rules::islamic::to_rata_die(rules::islamic::CIVIL_EPOCH, year, month, day)
            }
            CalendarKind::IslamicTabular => {
                rules::islamic::to_rata_die(rules::islamic::TABULAR_EPOCH, year, month, day)
            }
            CalendarKind::Persian => rules::persian::to_rata_die(year, month, day),
            CalendarKind::Indian => rules::indian::to_rata_die(year, month, day),
            CalendarKind::Chinese | CalendarKind::Dangi => {
                let record = rules::lunisolar::year_record(self.lunar, year)?;
                rules::lunisolar::to_rata_die(record, month, day)
            }
        };
        Ok(RataDie::new(rd))
    }

    /// The ISO year whose arithmetic the solar era variants share.
    fn iso_year_for(&self, year: i32) -> i32 {
        match self.kind {
            CalendarKind::Buddhist => year - 543,
            CalendarKind::Roc => year + 1911,
            _ => year,
        }
    }

    pub(crate) fn months_in_arithmetic_year(&self, year: i32) -> u8 {
        match self.kind {
            CalendarKind::Coptic | CalendarKind::Ethiopian | CalendarKind::EthiopianAmeteAlem => 13,
            CalendarKind::Hebrew => rules::hebrew::months_in_year(year),
            CalendarKind::Chinese | CalendarKind::Dangi => {
                match rules::lunisolar::year_record(self.lunar, year) {
                    Ok(record) => record.months_in_year(),
                    Err(_) => 12,
                }
            }
            _ => 12,
        }
    }

    pub(crate) fn days_in_ordinal_month(&self, year: i32, month: u8) -> u8 {
        match self.kind {
            CalendarKind::Iso
            | CalendarKind::Gregorian
            | CalendarKind::Buddhist
            | CalendarKind::Roc
            | CalendarKind::Japanese => utils::iso_days_in_month(self.iso_year_for(year), month),
            CalendarKind::Coptic | CalendarKind::Ethiopian => {
                rules::coptic::days_in_month(year, month)
            }
            CalendarKind::EthiopianAmeteAlem => {
                rules::coptic::days_in_month(year - rules::coptic::AMETE_ALEM_OFFSET, month)
            }
            CalendarKind::Hebrew => rules::hebrew::days_in_month(year, month),
            CalendarKind::IslamicCivil | CalendarKind::IslamicTabular => {
                rules::islamic::days_in_month(year, month)
            }
            CalendarKind::Persian => rules::persian::days_in_month(year, month),
            CalendarKind::Indian => rules::indian::days_in_month(year, month),
            CalendarKind::Chinese | CalendarKind::Dangi => {
                match rules::lunisolar::year_record(self.lunar, year) {
                    Ok(record) => record.days_in_month(month),
                    Err(_) => 29,
                }
            }
        }
    }

    pub(crate) fn days_in_arithmetic_year(&self, year: i32) -> u16 {
        match self.kind {
            CalendarKind::Iso
            | CalendarKind::Gregorian
            | CalendarKind::Buddhist
            | CalendarKind::Roc
            | CalendarKind::Japanese => utils::iso_days_in_year(self.iso_year_for(year)),
            CalendarKind::Coptic | CalendarKind::Ethiopian => rules::coptic::days_in_year(year),
            CalendarKind::EthiopianAmeteAlem => {
                rules::coptic::days_in_year(year - rules::coptic::AMETE_ALEM_OFFSET)
            }
            CalendarKind::Hebrew => rules::hebrew::days_in_year(year),
            CalendarKind::IslamicCivil | CalendarKind::IslamicTabular => {
                rules::islamic::days_in_year(year)
            }
            CalendarKind::Persian => rules::persian::days_in_year(year),
            CalendarKind::Indian => rules::indian::days_in_year(year),
            CalendarKind::Chinese | CalendarKind::Dangi => {
                match rules::lunisolar::year_record(self.lunar, year) {
                    Ok(record) => record.days_in_year(),
                    Err(_) => 354,
                }
            }
        }
    }

    pub(crate) fn in_leap_arithmetic_year(&self, year: i32) -> bool {
        match self.kind {
            CalendarKind::Iso
            | CalendarKind::Gregorian
            | CalendarKind::Buddhist
            | CalendarKind::Roc
            | CalendarKind::Japanese => utils::is_leap_year(self.iso_year_for(year)),
            CalendarKind::Coptic | CalendarKind::Ethiopian => rules::coptic::is_leap(year),
            CalendarKind::EthiopianAmeteAlem => {
                rules::coptic::is_leap(year - rules::coptic::AMETE_ALEM_OFFSET)
            }
            CalendarKind::Hebrew => rules::hebrew::is_leap(year),
            CalendarKind::IslamicCivil | CalendarKind::IslamicTabular => {
                rules::islamic::is_leap(year)
            }
            CalendarKind::Persian => rules::persian::is_leap(year),
            CalendarKind::Indian => rules::indian::is_leap(year),
            CalendarKind::Chinese | CalendarKind::Dangi => {
                match rules::lunisolar::year_record(self.lunar, year) {
                    Ok(record) => record.leap_month != 0,
                    Err(_) => false,
                }
            }
        }
    }

    /// The month code identifying an ordinal month of a year.
    pub(crate) fn month_code_for(&self, year: i32, ordinal: u8) -> MonthCode {
        match self.kind {
            CalendarKind::Hebrew if rules::hebrew::is_leap(year) => match ordinal {
                1..=5 => MonthCode::from_month_number(ordinal),
                6 => MonthCode::leap_for_month_number(5),
                _ => MonthCode::from_month_number(ordinal - 1),
            },
            CalendarKind::Chinese | CalendarKind::Dangi => {
                let leap = match rules::lunisolar::year_record(self.lunar, year) {
                    Ok(record) => record.leap_month,
                    Err(_) => 0,
                };
                if leap != 0 && ordinal == leap + 1 {
                    MonthCode::leap_for_month_number(leap)
                } else if leap != 0 && ordinal > leap {
                    MonthCode::from_month_number(ordinal - 1)
                } else {
                    MonthCode::from_month_number(ordinal)
                }
            }
            _ => MonthCode::from_month_number(ordinal),
        }
    }

    /// Resolves a month code into an ordinal month of a year.
    pub(crate) fn ordinal_for_month_code(
        &self,
        year: i32,
        code: MonthCode,
        overflow: Overflow,
    ) -> KairosResult<u8> {
        let number = code.month_number();
        let unknown = || KairosError::range().with_enum(ErrorMessage::UnknownMonthCode);
        if number == 0 {
            return Err(unknown());
        }
        if code.is_leap_month() {
            return match self.kind {
                CalendarKind::Hebrew if number == 5 => {
                    if rules::hebrew::is_leap(year) {
                        Ok(6)
                    } else if overflow == Overflow::Constrain {
                        Ok(5)
                    } else {
                        Err(KairosError::range().with_enum(ErrorMessage::DateOutOfRange))
                    }
                }
                CalendarKind::Chinese | CalendarKind::Dangi if number <= 12 => {
                    let record = rules::lunisolar::year_record(self.lunar, year)?;
                    if record.leap_month == number {
                        Ok(number + 1)
                    } else if overflow == Overflow::Constrain {
                        self.ordinal_for_month_code(
                            year,
                            MonthCode::from_month_number(number),
                            overflow,
                        )
                    } else {
                        Err(KairosError::range().with_enum(ErrorMessage::DateOutOfRange))
                    }
                }
                _ => Err(unknown()),
            };
        }
        let months = self.months_in_arithmetic_year(year);
        match self.kind {
            CalendarKind::Hebrew => {
                if number > 12 {
                    return Err(unknown());
                }
                if rules::hebrew::is_leap(year) && number >= 6 {
                    Ok(number + 1)
                } else {
                    Ok(number)
                }
            }
            CalendarKind::Chinese | CalendarKind::Dangi => {
                if number > 12 {
                    return Err(unknown());
                }
                let record = rules::lunisolar::year_record(self.lunar, year)?;
                if record.leap_month != 0 && number > record.leap_month {
                    Ok(number + 1)
                } else {
                    Ok(number)
                }
            }
            _ => {
                if number > months {
                    return Err(unknown());
                }
                Ok(number)
            }
        }
    }

    /// The era and era-relative year at a rata die, if the calendar has
    /// eras.
    fn era_and_year(&self, rd: RataDie, year: i32) -> Option<(TinyAsciiStr<16>, i32)> {
        match self.kind {
            CalendarKind::Iso | CalendarKind::Chinese | CalendarKind::Dangi => None,
            CalendarKind::Gregorian => Some(if year >= 1 {
                (era::GREGORY_ERA.name, year)
            } else {
                (era::GREGORY_INVERSE_ERA.name, 1 - year)
            }),
            CalendarKind::Roc => Some(if year >= 1 {
                (era::ROC_ERA.name, year)
            } else {
                (era::ROC_INVERSE_ERA.name, 1 - year)
            }),
            CalendarKind::IslamicCivil | CalendarKind::IslamicTabular => Some(if year >= 1 {
                (era::ISLAMIC_ERA.name, year)
            } else {
                (era::ISLAMIC_INVERSE_ERA.name, 1 - year)
            }),
            CalendarKind::Japanese => {
                let day = rd.to_i64();
                for (start, info) in era::JAPANESE_ERA_STARTS {
                    if day >= start {
                        return Some((info.name, year - info.arithmetic_year_for(1) + 1));
                    }
                }
                Some(if year >= 1 {
                    (era::JAPANESE_ERA.name, year)
                } else {
                    (era::JAPANESE_INVERSE_ERA.name, 1 - year)
                })
            }
            CalendarKind::Buddhist => Some((era::BUDDHIST_ERA.name, year)),
            CalendarKind::Coptic => Some((era::COPTIC_ERA.name, year)),
            CalendarKind::Ethiopian => Some((era::ETHIOPIC_ERA.name, year)),
            CalendarKind::EthiopianAmeteAlem => Some((era::ETHIOAA_ERA.name, year)),
            CalendarKind::Hebrew => Some((era::HEBREW_ERA.name, year)),
            CalendarKind::Indian => Some((era::INDIAN_ERA.name, year)),
            CalendarKind::Persian => Some((era::PERSIAN_ERA.name, year)),
        }
    }
}

// ==== Public derived-field queries ====

impl Calendar {
    /// The era code at the given ISO date, if this calendar has eras.
    pub fn era(&self, iso: &IsoDate) -> Option<TinyAsciiStr<16>> {
        let fields = self.fields_for(iso);
        self.era_and_year(iso.to_rata_die(), fields.year).map(|e| e.0)
    }

    /// The era-relative year at the given ISO date.
    pub fn era_year(&self, iso: &IsoDate) -> Option<i32> {
        let fields = self.fields_for(iso);
        self.era_and_year(iso.to_rata_die(), fields.year).map(|e| e.1)
    }

    /// The arithmetic (extended) year; for the lunisolar calendars this
    /// is the related ISO year.
    pub fn extended_year(&self, iso: &IsoDate) -> i32 {
        self.fields_for(iso).year
    }

    /// The ordinal month. Not a stable identity across years in
    /// lunisolar calendars; see [`Calendar::month_code`].
    pub fn month(&self, iso: &IsoDate) -> u8 {
        self.fields_for(iso).month
    }

    /// The month code, the calendar-agnostic identity of the month.
    pub fn month_code(&self, iso: &IsoDate) -> MonthCode {
        let fields = self.fields_for(iso);
        self.month_code_for(fields.year, fields.month)
    }

    /// Whether the date falls in an inserted leap month.
    pub fn month_is_leap(&self, iso: &IsoDate) -> bool {
        self.month_code(iso).is_leap_month()
    }

    /// The day of the month.
    pub fn day(&self, iso: &IsoDate) -> u8 {
        self.fields_for(iso).day
    }

    /// The ordinal day of the calendar year, starting at 1.
    pub fn day_of_year(&self, iso: &IsoDate) -> u16 {
        let fields = self.fields_for(iso);
        let year_start = match self.fields_to_rata_die(fields.year, 1, 1) {
            Ok(rd) => rd,
            Err(_) => return u16::from(fields.day),
        };
        (iso.to_rata_die().to_i64() - year_start.to_i64()) as u16 + 1
    }

    /// ISO day of week, Monday = 1 .. Sunday = 7.
    pub fn day_of_week(&self, iso: &IsoDate) -> u8 {
        iso.day_of_week()
    }

    pub fn months_in_year(&self, iso: &IsoDate) -> u8 {
        self.months_in_arithmetic_year(self.fields_for(iso).year)
    }

    pub fn days_in_month(&self, iso: &IsoDate) -> u8 {
        let fields = self.fields_for(iso);
        self.days_in_ordinal_month(fields.year, fields.month)
    }

    pub fn days_in_year(&self, iso: &IsoDate) -> u16 {
        self.days_in_arithmetic_year(self.fields_for(iso).year)
    }

    pub fn in_leap_year(&self, iso: &IsoDate) -> bool {
        self.in_leap_arithmetic_year(self.fields_for(iso).year)
    }
}

// ==== Date construction through a calendar ====

impl Calendar {
    /// Re-expresses an ISO field triple under this calendar.
    pub fn date_from_iso(&self, year: i32, month: u8, day: u8) -> KairosResult<Date> {
        let iso = IsoDate::try_new(year, month, day)?;
        Date::from_iso(iso, *self)
    }

    /// Constructs a date from calendar-native era/month-code fields.
    pub fn date_from_codes(
        &self,
        era: TinyAsciiStr<16>,
        era_year: i32,
        month_code: MonthCode,
        day: u8,
    ) -> KairosResult<Date> {
        self.date_from_fields(
            CalendarFields {
                era: Some(era),
                era_year: Some(era_year),
                month_code: Some(month_code),
                day: Some(day),
                ..Default::default()
            },
            Overflow::Reject,
        )
    }

    /// Constructs a date from a partial calendar field record.
    pub fn date_from_fields(
        &self,
        fields: CalendarFields,
        overflow: Overflow,
    ) -> KairosResult<Date> {
        // Era-less calendars resolve a bare year; era fields on them are
        // unknown-era errors.
        if fields.era.is_some() && era::eras_for_kind(self.kind).is_empty() {
            return Err(KairosError::range().with_enum(ErrorMessage::UnknownEra));
        }
        let resolved = types::ResolvedCalendarFields::try_from_fields(self, &fields, overflow)?;
        let rd = self.fields_to_rata_die(resolved.year, resolved.month, resolved.day)?;
        Date::from_rata_die(rd, *self)
    }

    /// Constructs a date at a rata die. The only failure is a day count
    /// outside this calendar's representable span.
    pub fn date_from_rata_die(&self, rd: RataDie) -> KairosResult<Date> {
        Date::from_rata_die(rd, *self)
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn calendar_from_str_is_case_insensitive() {
        let calendar = Calendar::from_str("iSo8601").unwrap();
        assert_eq!(calendar, Calendar::default());
        let calendar = Calendar::from_str("GREGORY").unwrap();
        assert_eq!(calendar, Calendar::GREGORIAN);
    }

    #[test]
    fn calendar_rejects_unknown_identifiers() {
        assert!(Calendar::from_str("julian-ish").is_err());
        assert!(Calendar::from_str("").is_err());
    }

    #[test]
    fn gregorian_eras() {
        let cal = Calendar::GREGORIAN;
        let ce = IsoDate::try_new(2024, 7, 4).unwrap();
        assert_eq!(cal.era(&ce).unwrap().as_str(), "ce");
        assert_eq!(cal.era_year(&ce), Some(2024));

        let bce = IsoDate::try_new(0, 1, 1).unwrap();
        assert_eq!(cal.era(&bce).unwrap().as_str(), "bce");
        assert_eq!(cal.era_year(&bce), Some(1));
        assert_eq!(cal.extended_year(&bce), 0);
    }

    #[test]
    fn japanese_era_resolution() {
        let cal = Calendar::JAPANESE;
        let reiwa = IsoDate::try_new(2025, 3, 3).unwrap();
        assert_eq!(cal.era(&reiwa).unwrap().as_str(), "reiwa");
        assert_eq!(cal.era_year(&reiwa), Some(7));

        let heisei = IsoDate::try_new(1989, 1, 8).unwrap();
        assert_eq!(cal.era(&heisei).unwrap().as_str(), "heisei");
        assert_eq!(cal.era_year(&heisei), Some(1));

        let showa = IsoDate::try_new(1989, 1, 7).unwrap();
        assert_eq!(cal.era(&showa).unwrap().as_str(), "showa");
        assert_eq!(cal.era_year(&showa), Some(64));
    }

    #[test]
    fn buddhist_year_offset() {
        let cal = Calendar::BUDDHIST;
        let iso = IsoDate::try_new(2024, 1, 1).unwrap();
        assert_eq!(cal.extended_year(&iso), 2567);
        assert_eq!(cal.era(&iso).unwrap().as_str(), "be");
    }

    #[test]
    fn hebrew_leap_month_codes() {
        let cal = Calendar::HEBREW;
        // 5784 is a Hebrew leap year; Adar I is ordinal 6 with code M05L.
        assert!(cal.in_leap_arithmetic_year(5784));
        assert_eq!(cal.month_code_for(5784, 6).as_str(), "M05L");
        assert_eq!(cal.month_code_for(5784, 7).as_str(), "M06");
        assert_eq!(cal.month_code_for(5785, 6).as_str(), "M06");

        assert_eq!(cal.ordinal_for_month_code(5784, MonthCode::from_str("M05L").unwrap(), Overflow::Reject).unwrap(), 6);
        assert_eq!(cal.ordinal_for_month_code(5784, MonthCode::from_str("M12").unwrap(), Overflow::Reject).unwrap(), 13);
        assert!(cal
            .ordinal_for_month_code(5785, MonthCode::from_str("M05L").unwrap(), Overflow::Reject)
            .is_err());
    }

    #[test]
    fn chinese_leap_month_codes() {
        let cal = Calendar::CHINESE;
        // Related ISO year 2023 has a leap month after month 2.
        assert_eq!(cal.month_code_for(2023, 2).as_str(), "M02");
        assert_eq!(cal.month_code_for(2023, 3).as_str(), "M02L");
        assert_eq!(cal.month_code_for(2023, 4).as_str(), "M03");
        assert_eq!(cal.months_in_arithmetic_year(2023), 13);

        let code = MonthCode::from_str("M02L").unwrap();
        assert_eq!(cal.ordinal_for_month_code(2023, code, Overflow::Reject).unwrap(), 3);
        assert!(cal.ordinal_for_month_code(2024, code, Overflow::Reject).is_err());
        assert_eq!(cal.ordinal_for_month_code(2024, code, Overflow::Constrain).unwrap(), 2);
    }

    #[test]
    fn chinese_outside_table_is_data_error() {
        let cal = Calendar::CHINESE;
        let iso = IsoDate::try_new(1900, 6, 1).unwrap();
        assert!(cal.resolve_fields(iso.to_rata_die()).is_err());
    }

    #[test]
    fn month_code_monotonicity_within_year() {
        // Enumerating months of a Chinese leap year skips an ordinal
        // exactly at the inserted month.
        let cal = Calendar::CHINESE;
        let mut seen = alloc::vec::Vec::new();
        for ordinal in 1..=cal.months_in_arithmetic_year(2023) {
            let code = cal.month_code_for(2023, ordinal);
            seen.push((code.month_number(), code.is_leap_month()));
        }
        assert_eq!(
            seen,
            alloc::vec![
                (1, false),
                (2, false),
                (2, true),
                (3, false),
                (4, false),
                (5, false),
                (6, false),
                (7, false),
                (8, false),
                (9, false),
                (10, false),
                (11, false),
                (12, false),
            ]
        );
    }
}
