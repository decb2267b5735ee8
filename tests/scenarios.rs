//! End-to-end scenarios across the public API.

use core::str::FromStr;

use kairos_rs::{
    Calendar, Date, DateFormatter, DateFormatterOptions, DateTimeFormatter, IsoDate, Locale,
    RataDie, Time, TimeZoneFormatter, TimeZoneStyle, ZonedDateTimeFormatter, ZonedIsoDateTime,
};
use kairos_rs::options::Length;

#[test]
fn rata_die_round_trip_identity() {
    for (year, month, day) in [
        (1, 1, 1),
        (0, 2, 29),
        (-400, 12, 31),
        (1582, 10, 15),
        (1970, 1, 1),
        (2024, 2, 29),
        (9999, 12, 31),
    ] {
        let date = IsoDate::try_new(year, month, day).unwrap();
        let rd = date.to_rata_die();
        assert_eq!(IsoDate::from_rata_die(rd).unwrap(), date);
    }
}

#[test]
fn calendar_round_trip_over_a_decade() {
    // Sweep a day every eleven days across several years and check the
    // field round-trip for every arithmetic calendar.
    let calendars = [
        Calendar::GREGORIAN,
        Calendar::BUDDHIST,
        Calendar::ROC,
        Calendar::JAPANESE,
        Calendar::COPTIC,
        Calendar::ETHIOPIAN,
        Calendar::ETHIOPIAN_AMETE_ALEM,
        Calendar::HEBREW,
        Calendar::INDIAN,
        Calendar::ISLAMIC_CIVIL,
        Calendar::ISLAMIC_TABULAR,
        Calendar::PERSIAN,
    ];
    let start = IsoDate::try_new(2015, 1, 1).unwrap().to_rata_die().to_i64();
    let end = IsoDate::try_new(2025, 12, 31).unwrap().to_rata_die().to_i64();
    let mut rd = start;
    while rd <= end {
        for calendar in &calendars {
            let date = Date::from_rata_die(RataDie::new(rd), *calendar).unwrap();
            let rebuilt =
                Date::try_new(date.year(), date.month(), date.day(), *calendar).unwrap();
            assert_eq!(
                rebuilt.to_rata_die().to_i64(),
                rd,
                "{} {}-{}-{}",
                calendar.identifier(),
                date.year(),
                date.month(),
                date.day()
            );
        }
        rd += 11;
    }
}

#[test]
fn chinese_round_trip_within_table_window() {
    let start = IsoDate::try_new(2020, 3, 1).unwrap().to_rata_die().to_i64();
    let end = IsoDate::try_new(2025, 3, 1).unwrap().to_rata_die().to_i64();
    let mut rd = start;
    while rd <= end {
        for calendar in [Calendar::CHINESE, Calendar::DANGI] {
            let date = Date::from_rata_die(RataDie::new(rd), calendar).unwrap();
            let rebuilt = Date::try_new(date.year(), date.month(), date.day(), calendar).unwrap();
            assert_eq!(rebuilt.to_rata_die().to_i64(), rd);
        }
        rd += 17;
    }
}

#[test]
fn parsing_leap_day_scenarios() {
    // 2023 is not a leap year.
    assert!(IsoDate::from_str("2023-02-29").is_err());
    let date = IsoDate::from_str("2024-02-29").unwrap();
    // Thursday.
    assert_eq!(date.day_of_week(), 4);
}

#[test]
fn hebrew_round_trip_of_a_leap_day() {
    let iso = IsoDate::try_new(2024, 2, 29).unwrap();
    let hebrew = iso.to_any().to_calendar(Calendar::HEBREW).unwrap();
    assert_eq!(hebrew.year(), 5784);
    let back = hebrew.to_calendar(Calendar::ISO).unwrap();
    assert_eq!(back.to_iso(), iso);
}

#[test]
fn time_boundary_scenarios() {
    assert!(Time::try_new(23, 59, 59, 999_999_999).is_ok());
    assert!(Time::try_new(24, 0, 0, 0).is_err());
}

#[test]
fn formatting_scenario_en_us_medium() {
    let locale = Locale::from_str("en-US").unwrap();
    let formatter = DateFormatter::try_new(locale, Default::default()).unwrap();
    let date = IsoDate::try_new(2024, 7, 4).unwrap();
    assert_eq!(formatter.format_iso(date), "Jul 4, 2024");
}

#[test]
fn length_never_changes_the_underlying_date() {
    let date = IsoDate::try_new(2024, 7, 4).unwrap();
    for length in [Length::Long, Length::Medium, Length::Short] {
        let formatter = DateFormatter::try_new(
            Locale::from_str("en-US").unwrap(),
            DateFormatterOptions {
                length,
                ..Default::default()
            },
        )
        .unwrap();
        let formatted = formatter.format_iso(date);
        // Whatever the verbosity, the day and year digits survive.
        assert!(formatted.contains('4'), "{formatted}");
        assert!(
            formatted.contains("2024") || formatted.contains("24"),
            "{formatted}"
        );
    }
}

#[test]
fn zoned_parse_entry_point_scenarios() {
    let offset_only =
        ZonedIsoDateTime::offset_only_from_string("2024-01-01T00:00:00+05:30").unwrap();
    assert!(offset_only.zone().id().is_unknown());
    assert_eq!(offset_only.zone().offset().unwrap().seconds(), 19_800);

    assert!(ZonedIsoDateTime::location_only_from_string("2024-01-01T00:00:00+05:30").is_err());
}

#[test]
fn ixdtf_round_trips() {
    for source in [
        "2024-02-29",
        "0001-01-01",
        "2024-07-04T09:30:00",
        "2024-07-04T09:30:00.25",
    ] {
        if source.contains('T') {
            let value = kairos_rs::IsoDateTime::from_str(source).unwrap();
            assert_eq!(format!("{value}"), source);
        } else {
            let value = IsoDate::from_str(source).unwrap();
            assert_eq!(format!("{value}"), source);
        }
    }
}

#[test]
fn full_zoned_formatting_pipeline() {
    // Parse a full zoned string, then format it with a specific-name
    // zone style: the variant resolved at parse time feeds the name
    // choice at format time.
    let value =
        ZonedIsoDateTime::full_from_string("2024-07-04T09:30:00-04:00[America/New_York]").unwrap();

    let locale = Locale::from_str("en-US").unwrap();
    let inner = DateTimeFormatter::try_new(locale.clone(), Default::default()).unwrap();
    let zone = TimeZoneFormatter::try_new(locale, TimeZoneStyle::SpecificShort).unwrap();
    let formatter = ZonedDateTimeFormatter::try_new(inner, zone).unwrap();

    assert_eq!(
        formatter.format_iso(&value).unwrap(),
        "Jul 4, 2024, 9:30:00 AM EDT"
    );
}

#[test]
fn locale_properties() {
    // Normalization idempotence.
    for tag in ["en-US", "DE", "ja-jp-u-ca-japanese", "und"] {
        let once = Locale::normalize(tag).unwrap();
        assert_eq!(Locale::normalize(&once).unwrap(), once);
    }
    // Normalizing equality vs exact comparison.
    let locale = Locale::from_str("en-US-u-nu-latn-ca-gregory").unwrap();
    assert!(locale.normalizing_eq("EN-us-u-ca-gregory-nu-latn"));
    assert_ne!(
        locale.compare_to_string("EN-us-u-ca-gregory-nu-latn"),
        core::cmp::Ordering::Equal
    );
}
