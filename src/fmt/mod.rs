//! The locale-aware formatting engine.
//!
//! Formatter instances bind a locale, a calendar, and a field-set
//! configuration at construction, loading their symbol and pattern data
//! once. Construction is the only fallible state transition; a built
//! formatter formats unboundedly many values, the only value-level
//! failure being a calendar contract mismatch.

use alloc::string::String;
use alloc::vec::Vec;

use crate::components::calendar::{Calendar, CalendarKind};
use crate::components::date::Date;
use crate::components::datetime::DateTime;
use crate::components::time::Time;
use crate::components::zoneddatetime::{ZonedDateTime, ZonedIsoDateTime};
use crate::error::ErrorMessage;
use crate::iso::{IsoDate, IsoDateTime};
use crate::locale::Locale;
use crate::options::{Alignment, DateFields, Length, TimePrecision, YearStyle};
use crate::provider::{CompiledProvider, DateTimeNames, DateTimeNamesProvider};
use crate::{KairosError, KairosResult};

pub(crate) mod pattern;
mod zone;

pub use zone::{TimeZoneFormatter, TimeZoneStyle};

use pattern::{drop_field, render, tokenize, PatternValues, RenderOptions, Token};
use writeable::Writeable;

/// Resolves the symbol bundle for a locale, walking the fallback chain
/// down to `root`.
pub(crate) fn resolve_names(
    locale: &Locale,
    provider: &impl DateTimeNamesProvider,
) -> KairosResult<&'static DateTimeNames> {
    let base = locale.without_extensions();
    let full = base.write_to_string();
    if let Some(names) = provider.datetime_names(&full) {
        return Ok(names);
    }
    if let Some(region) = locale.region() {
        let mut tag = String::from(locale.language());
        tag.push('-');
        tag.push_str(region);
        if let Some(names) = provider.datetime_names(&tag) {
            return Ok(names);
        }
    }
    if let Some(names) = provider.datetime_names(locale.language()) {
        return Ok(names);
    }
    provider
        .datetime_names("root")
        .ok_or(KairosError::data().with_enum(ErrorMessage::MissingLocaleData))
}

/// A locale whose data resolution failed entirely is a construction
/// error, never a format-time one.
fn load_error() -> KairosError {
    KairosError::data().with_enum(ErrorMessage::MissingLocaleData)
}

/// Whether a formatter locale names a language this provider has real
/// (non-root) data for. A missing region falls back silently; a missing
/// language is a load error.
fn check_language_coverage(
    locale: &Locale,
    provider: &impl DateTimeNamesProvider,
) -> KairosResult<()> {
    if locale.language() == "und" || provider.datetime_names(locale.language()).is_some() {
        return Ok(());
    }
    let base = locale.without_extensions();
    if provider.datetime_names(&base.write_to_string()).is_some() {
        return Ok(());
    }
    Err(load_error())
}

/// Configuration for a [`DateFormatter`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DateFormatterOptions {
    pub length: Length,
    pub fields: DateFields,
    pub alignment: Alignment,
    pub year_style: YearStyle,
}

/// Configuration for a [`TimeFormatter`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeFormatterOptions {
    pub length: Length,
    pub alignment: Alignment,
    pub precision: TimePrecision,
}

/// Formats dates under one locale, calendar, and field-set selection.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    locale: Locale,
    calendar: Calendar,
    names: &'static DateTimeNames,
    tokens: Vec<Token>,
    options: DateFormatterOptions,
}

impl DateFormatter {
    /// Builds a date formatter. The calendar comes from the locale's
    /// `ca` keyword, defaulting to Gregorian. Fails when the locale's
    /// symbol data or the keyword calendar cannot be loaded.
    pub fn try_new(locale: Locale, options: DateFormatterOptions) -> KairosResult<Self> {
        let calendar = match locale.keyword("ca") {
            Some(id) => Calendar::new(CalendarKind::try_from_utf8(id.as_bytes())?),
            None => Calendar::GREGORIAN,
        };
        Self::try_new_with_calendar(locale, options, calendar)
    }

    fn try_new_with_calendar(
        locale: Locale,
        options: DateFormatterOptions,
        calendar: Calendar,
    ) -> KairosResult<Self> {
        check_language_coverage(&locale, &CompiledProvider)?;
        let names = resolve_names(&locale, &CompiledProvider)?;
        let tokens = date_tokens(names, options);
        Ok(Self {
            locale,
            calendar,
            names,
            tokens,
            options,
        })
    }

    /// The calendar values are rendered in.
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// The locale this formatter was built for.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Formats an ISO date, converting it into the formatter calendar.
    /// Always succeeds: ISO input is universally convertible; a
    /// data-coverage gap degrades to the ISO fields.
    pub fn format_iso(&self, iso: IsoDate) -> String {
        match Date::from_iso(iso, self.calendar) {
            Ok(date) => self.render(&date),
            Err(_) => self.render(&iso.to_any()),
        }
    }

    /// Formats a date of any calendar by converting it first.
    pub fn format(&self, date: &Date) -> String {
        self.format_iso(date.to_iso())
    }

    /// Formats a date that must already be in the formatter calendar.
    /// The failure is a caller-contract check, not a data problem.
    pub fn format_same_calendar(&self, date: &Date) -> KairosResult<String> {
        if date.calendar() != &self.calendar {
            return Err(KairosError::r#type().with_enum(ErrorMessage::MismatchedCalendar));
        }
        Ok(self.render(date))
    }

    fn render(&self, date: &Date) -> String {
        let mut out = String::new();
        self.render_into(date, &mut out);
        out
    }

    pub(crate) fn render_into(&self, date: &Date, out: &mut String) {
        let kind = date.calendar_kind();
        let month = date.month();
        let code = date.month_code();
        let symbol_months = matches!(
            kind,
            CalendarKind::Iso
                | CalendarKind::Gregorian
                | CalendarKind::Buddhist
                | CalendarKind::Roc
                | CalendarKind::Japanese
        );
        let (month_long, month_short) = if symbol_months && (1..=12).contains(&month) {
            (
                self.names.months_long[usize::from(month) - 1],
                self.names.months_short[usize::from(month) - 1],
            )
        } else {
            (code.as_str(), code.as_str())
        };

        let era_code = date.era();
        let era_display = era_code.as_ref().map(|era| match era.as_str() {
            "ce" | "ad" => self.names.eras.1,
            "bce" | "bc" => self.names.eras.0,
            other => other,
        });
        let style_era = match self.options.year_style {
            YearStyle::Full => false,
            YearStyle::WithEra => era_display.is_some(),
            YearStyle::Auto => match kind {
                CalendarKind::Japanese => era_display.is_some(),
                _ => era_display.is_some() && date.year() <= 0,
            },
        };
        let show_era = style_era && self.options.fields.has_year();

        let values = PatternValues {
            year: if show_era {
                date.era_year().unwrap_or_else(|| date.year())
            } else {
                date.year()
            },
            era: if show_era { era_display } else { None },
            month,
            month_long,
            month_short,
            day: date.day(),
            weekday: date.day_of_week(),
            ..Default::default()
        };
        let options = RenderOptions {
            alignment: self.options.alignment,
            precision: TimePrecision::Second,
        };
        render(&self.tokens, &values, self.names, &options, out);
    }
}

/// Derives the token stream for a field-set selection from the data
/// pattern.
fn date_tokens(names: &'static DateTimeNames, options: DateFormatterOptions) -> Vec<Token> {
    let mut tokens = tokenize(names.date_patterns[options.length.pattern_index()]);
    if !options.fields.has_year() {
        drop_field(&mut tokens, 'y', true);
        drop_field(&mut tokens, 'G', true);
    }
    if !options.fields.has_month() {
        drop_field(&mut tokens, 'M', true);
    }
    if !options.fields.has_day() {
        drop_field(&mut tokens, 'd', true);
    }
    if options.fields.has_weekday() {
        let width = if options.length == Length::Long { 4 } else { 3 };
        tokens.insert(0, Token::Literal(", ".into()));
        tokens.insert(0, Token::Field('E', width));
    }
    tokens
}

/// Formats times under one locale, length, and precision.
#[derive(Debug, Clone)]
pub struct TimeFormatter {
    locale: Locale,
    names: &'static DateTimeNames,
    tokens: Vec<Token>,
    options: TimeFormatterOptions,
}

impl TimeFormatter {
    pub fn try_new(locale: Locale, options: TimeFormatterOptions) -> KairosResult<Self> {
        check_language_coverage(&locale, &CompiledProvider)?;
        let names = resolve_names(&locale, &CompiledProvider)?;
        let tokens = time_tokens(names, options);
        Ok(Self {
            locale,
            names,
            tokens,
            options,
        })
    }

    /// The locale this formatter was built for.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Formats a time. No failure modes: every `Time` is renderable.
    pub fn format(&self, time: &Time) -> String {
        let mut out = String::new();
        self.render_into(time, &mut out);
        out
    }

    pub(crate) fn render_into(&self, time: &Time, out: &mut String) {
        let values = PatternValues {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
            subsecond: time.subsecond_nanoseconds(),
            ..Default::default()
        };
        let options = RenderOptions {
            alignment: self.options.alignment,
            precision: self.options.precision,
        };
        render(&self.tokens, &values, self.names, &options, out);
    }
}

fn time_tokens(names: &'static DateTimeNames, options: TimeFormatterOptions) -> Vec<Token> {
    let mut tokens = tokenize(names.time_patterns[options.length.pattern_index()]);
    match options.precision {
        TimePrecision::Hour => {
            drop_field(&mut tokens, 's', false);
            drop_field(&mut tokens, 'm', false);
        }
        TimePrecision::Minute => drop_field(&mut tokens, 's', false),
        TimePrecision::Second | TimePrecision::Subsecond(_) => {}
    }
    tokens
}

/// Configuration for a [`DateTimeFormatter`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DateTimeFormatterOptions {
    pub length: Length,
    pub fields: DateFields,
    pub alignment: Alignment,
    pub year_style: YearStyle,
    pub precision: TimePrecision,
}

impl DateTimeFormatterOptions {
    fn date_options(&self) -> DateFormatterOptions {
        DateFormatterOptions {
            length: self.length,
            fields: self.fields,
            alignment: self.alignment,
            year_style: self.year_style,
        }
    }

    fn time_options(&self) -> TimeFormatterOptions {
        TimeFormatterOptions {
            length: self.length,
            alignment: self.alignment,
            precision: self.precision,
        }
    }
}

/// Formats date-time pairs under one locale, joining the date and time
/// renderings through the locale's glue pattern.
#[derive(Debug, Clone)]
pub struct DateTimeFormatter {
    date: DateFormatter,
    time: TimeFormatter,
    glue: &'static str,
}

impl DateTimeFormatter {
    pub fn try_new(locale: Locale, options: DateTimeFormatterOptions) -> KairosResult<Self> {
        let date = DateFormatter::try_new(locale.clone(), options.date_options())?;
        let time = TimeFormatter::try_new(locale, options.time_options())?;
        let glue = date.names.glue_patterns[options.length.pattern_index()];
        Ok(Self { date, time, glue })
    }

    pub fn calendar(&self) -> &Calendar {
        self.date.calendar()
    }

    pub(crate) fn locale(&self) -> &Locale {
        self.date.locale()
    }

    /// Formats an ISO date-time; always succeeds.
    pub fn format_iso(&self, value: IsoDateTime) -> String {
        let mut date_part = String::new();
        self.date
            .render_into(&self.convert(value.date), &mut date_part);
        let time_part = self.time.format(&Time::from_iso(value.time));
        self.apply_glue(&date_part, &time_part)
    }

    /// Formats a date-time of any calendar by converting it first.
    pub fn format(&self, value: &DateTime) -> String {
        self.format_iso(value.to_iso())
    }

    /// Formats a date-time already in the formatter calendar.
    pub fn format_same_calendar(&self, value: &DateTime) -> KairosResult<String> {
        if value.calendar() != self.date.calendar() {
            return Err(KairosError::r#type().with_enum(ErrorMessage::MismatchedCalendar));
        }
        Ok(self.format_iso(value.to_iso()))
    }

    fn convert(&self, iso: IsoDate) -> Date {
        Date::from_iso(iso, *self.date.calendar()).unwrap_or_else(|_| iso.to_any())
    }

    fn apply_glue(&self, date: &str, time: &str) -> String {
        let mut out = String::new();
        let mut chars = self.glue.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let placeholder = chars.next();
                    if chars.peek() == Some(&'}') {
                        chars.next();
                    }
                    match placeholder {
                        Some('0') => out.push_str(time),
                        Some('1') => out.push_str(date),
                        _ => {}
                    }
                }
                '\'' => {
                    for q in chars.by_ref() {
                        if q == '\'' {
                            break;
                        }
                        out.push(q);
                    }
                }
                _ => out.push(c),
            }
        }
        out
    }
}

/// The calendar-fixed Gregorian date formatter: skips per-value calendar
/// dispatch entirely.
#[derive(Debug, Clone)]
pub struct GregorianDateFormatter {
    inner: DateFormatter,
}

impl GregorianDateFormatter {
    pub fn try_new(locale: Locale, options: DateFormatterOptions) -> KairosResult<Self> {
        DateFormatter::try_new_with_calendar(locale, options, Calendar::GREGORIAN)
            .map(|inner| Self { inner })
    }

    /// Formats an ISO date; infallible.
    pub fn format(&self, iso: IsoDate) -> String {
        self.inner.format_iso(iso)
    }
}

/// The calendar-fixed Gregorian date-time formatter.
#[derive(Debug, Clone)]
pub struct GregorianDateTimeFormatter {
    inner: DateTimeFormatter,
}

impl GregorianDateTimeFormatter {
    pub fn try_new(locale: Locale, options: DateTimeFormatterOptions) -> KairosResult<Self> {
        let date =
            DateFormatter::try_new_with_calendar(locale.clone(), options.date_options(), Calendar::GREGORIAN)?;
        let time = TimeFormatter::try_new(locale, options.time_options())?;
        let glue = date.names.glue_patterns[options.length.pattern_index()];
        Ok(Self {
            inner: DateTimeFormatter { date, time, glue },
        })
    }

    /// Formats an ISO date-time; infallible.
    pub fn format(&self, value: IsoDateTime) -> String {
        self.inner.format_iso(value)
    }
}

/// Formats zoned date-times: a date-time formatter paired with a zone
/// formatter over the same locale.
#[derive(Debug, Clone)]
pub struct ZonedDateTimeFormatter {
    inner: DateTimeFormatter,
    zone: TimeZoneFormatter,
}

impl ZonedDateTimeFormatter {
    /// Pairs the two formatters, checking that their locales agree.
    /// Construction is the cold path, so the agreement is verified here
    /// rather than left as a caller convention.
    pub fn try_new(inner: DateTimeFormatter, zone: TimeZoneFormatter) -> KairosResult<Self> {
        if inner.locale() != zone.locale() {
            return Err(KairosError::r#type().with_enum(ErrorMessage::MismatchedLocale));
        }
        Ok(Self { inner, zone })
    }

    /// Formats a calendar-fixed zoned value. Fails only on zone facets
    /// the configured zone style requires but the value lacks.
    pub fn format_iso(&self, value: &ZonedIsoDateTime) -> KairosResult<String> {
        let mut out = self.inner.format_iso(IsoDateTime::new_unchecked(
            value.date(),
            value.time().iso_time(),
        ));
        out.push(' ');
        out.push_str(&self.zone.format(value.zone())?);
        Ok(out)
    }

    /// Formats a calendar-polymorphic zoned value by converting the date
    /// into the formatter calendar.
    pub fn format(&self, value: &ZonedDateTime) -> KairosResult<String> {
        self.format_iso(&value.to_iso())
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;
    use crate::components::timezone::{TimeZoneInfo, UtcOffset};

    fn locale(tag: &str) -> Locale {
        Locale::from_str(tag).unwrap()
    }

    fn iso(year: i32, month: u8, day: u8) -> IsoDate {
        IsoDate::try_new(year, month, day).unwrap()
    }

    #[test]
    fn en_us_medium_date() {
        let formatter = DateFormatter::try_new(locale("en-US"), Default::default()).unwrap();
        assert_eq!(formatter.format_iso(iso(2024, 7, 4)), "Jul 4, 2024");
    }

    #[test]
    fn length_changes_only_verbosity() {
        let date = iso(2024, 7, 4);
        let long = DateFormatter::try_new(
            locale("en-US"),
            DateFormatterOptions {
                length: Length::Long,
                ..Default::default()
            },
        )
        .unwrap();
        let short = DateFormatter::try_new(
            locale("en-US"),
            DateFormatterOptions {
                length: Length::Short,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(long.format_iso(date), "July 4, 2024");
        assert_eq!(short.format_iso(date), "7/4/24");
    }

    #[test]
    fn locale_changes_pattern() {
        let date = iso(2024, 7, 4);
        let de = DateFormatter::try_new(locale("de-DE"), Default::default()).unwrap();
        assert_eq!(de.format_iso(date), "04.07.2024");
        let ja = DateFormatter::try_new(locale("ja-JP"), Default::default()).unwrap();
        assert_eq!(ja.format_iso(date), "2024/07/04");
        let ja_long = DateFormatter::try_new(
            locale("ja"),
            DateFormatterOptions {
                length: Length::Long,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(ja_long.format_iso(date), "2024年7月4日");
    }

    #[test]
    fn locale_fallback_and_load_errors() {
        // en-AU is not baked; it falls back to en.
        let fallback = DateFormatter::try_new(locale("en-AU"), Default::default()).unwrap();
        assert_eq!(fallback.format_iso(iso(2024, 7, 4)), "Jul 4, 2024");

        // An unknown language is a load error at construction.
        assert!(DateFormatter::try_new(locale("zz-ZZ"), Default::default()).is_err());
    }

    #[test]
    fn field_set_selection() {
        let md = DateFormatter::try_new(
            locale("en-US"),
            DateFormatterOptions {
                fields: DateFields::MD,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(md.format_iso(iso(2024, 7, 4)), "Jul 4");

        let ymde = DateFormatter::try_new(
            locale("en-US"),
            DateFormatterOptions {
                fields: DateFields::YMDE,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(ymde.format_iso(iso(2024, 7, 4)), "Thu, Jul 4, 2024");
    }

    #[test]
    fn year_styles() {
        let auto = DateFormatter::try_new(locale("en-US"), Default::default()).unwrap();
        assert_eq!(auto.format_iso(iso(2024, 7, 4)), "Jul 4, 2024");
        // Era appears automatically for non-positive years.
        assert_eq!(auto.format_iso(iso(0, 1, 1)), "Jan 1, 1 BC");

        let with_era = DateFormatter::try_new(
            locale("en-US"),
            DateFormatterOptions {
                year_style: YearStyle::WithEra,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(with_era.format_iso(iso(2024, 7, 4)), "Jul 4, 2024 AD");
    }

    #[test]
    fn calendar_keyword_selects_calendar() {
        let formatter =
            DateFormatter::try_new(locale("en-US-u-ca-buddhist"), Default::default()).unwrap();
        assert_eq!(formatter.calendar().identifier(), "buddhist");
        assert_eq!(formatter.format_iso(iso(2024, 7, 4)), "Jul 4, 2567");
    }

    #[test]
    fn format_same_calendar_checks_the_contract() {
        let formatter = DateFormatter::try_new(locale("en-US"), Default::default()).unwrap();
        let gregorian = Date::from_iso(iso(2024, 7, 4), Calendar::GREGORIAN).unwrap();
        assert_eq!(formatter.format_same_calendar(&gregorian).unwrap(), "Jul 4, 2024");

        let hebrew = Date::from_iso(iso(2024, 7, 4), Calendar::HEBREW).unwrap();
        let err = formatter.format_same_calendar(&hebrew).unwrap_err();
        assert!(err.matches(ErrorMessage::MismatchedCalendar));

        // The converting entry point accepts it.
        assert_eq!(formatter.format(&hebrew), "Jul 4, 2024");
    }

    #[test]
    fn time_formats_and_precision() {
        let time = Time::try_new(21, 5, 7, 250_000_000).unwrap();
        let en = TimeFormatter::try_new(locale("en-US"), Default::default()).unwrap();
        assert_eq!(en.format(&time), "9:05:07 PM");

        let de = TimeFormatter::try_new(locale("de"), Default::default()).unwrap();
        assert_eq!(de.format(&time), "21:05:07");

        let minute = TimeFormatter::try_new(
            locale("de"),
            TimeFormatterOptions {
                precision: TimePrecision::Minute,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(minute.format(&time), "21:05");

        let subsecond = TimeFormatter::try_new(
            locale("de"),
            TimeFormatterOptions {
                precision: TimePrecision::Subsecond(2),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(subsecond.format(&time), "21:05:07.25");
    }

    #[test]
    fn datetime_glue() {
        let formatter =
            DateTimeFormatter::try_new(locale("en-US"), Default::default()).unwrap();
        let value = IsoDateTime::new_unchecked(
            iso(2024, 7, 4),
            crate::iso::IsoTime::try_new(9, 30, 0, 0).unwrap(),
        );
        assert_eq!(formatter.format_iso(value), "Jul 4, 2024, 9:30:00 AM");

        let long = DateTimeFormatter::try_new(
            locale("en-US"),
            DateTimeFormatterOptions {
                length: Length::Long,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(long.format_iso(value), "July 4, 2024 at 9:30:00 AM");
    }

    #[test]
    fn gregorian_fixed_formatters() {
        let formatter =
            GregorianDateFormatter::try_new(locale("en-US"), Default::default()).unwrap();
        assert_eq!(formatter.format(iso(2024, 7, 4)), "Jul 4, 2024");
    }

    #[test]
    fn zoned_formatter_requires_matching_locales() {
        let inner = DateTimeFormatter::try_new(locale("en-US"), Default::default()).unwrap();
        let mismatched =
            TimeZoneFormatter::try_new(locale("de-DE"), TimeZoneStyle::LocalizedOffset).unwrap();
        let err = ZonedDateTimeFormatter::try_new(inner.clone(), mismatched).unwrap_err();
        assert!(err.matches(ErrorMessage::MismatchedLocale));

        let zone_fmt =
            TimeZoneFormatter::try_new(locale("en-US"), TimeZoneStyle::LocalizedOffset).unwrap();
        let zoned = ZonedDateTimeFormatter::try_new(inner, zone_fmt).unwrap();
        let value = ZonedIsoDateTime::new(
            iso(2024, 7, 4),
            Time::try_new(9, 30, 0, 0).unwrap(),
            TimeZoneInfo::from_offset(UtcOffset::from_seconds(-4 * 3600).unwrap()),
        );
        assert_eq!(
            zoned.format_iso(&value).unwrap(),
            "Jul 4, 2024, 9:30:00 AM GMT-4"
        );
    }
}
