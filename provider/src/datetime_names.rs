//! Date/time display names and patterns for the baked locales.
//!
//! Pattern strings use the CLDR field symbols the core pattern walker
//! understands: `y`/`yy`, `M`/`MM`/`MMM`/`MMMM`, `d`/`dd`, `E`/`EEEE`,
//! `G`, `H`/`HH`, `h`/`hh`, `m`/`mm`, `s`/`ss`, `a`, with `'…'` quoting
//! for literal text.

/// The display-name and pattern bundle for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeNames {
    /// Normalized BCP-47 language tag this bundle belongs to.
    pub locale: &'static str,
    pub months_long: [&'static str; 12],
    pub months_short: [&'static str; 12],
    /// Monday-first, ISO weekday order.
    pub weekdays_long: [&'static str; 7],
    pub weekdays_short: [&'static str; 7],
    /// (era before epoch, era of epoch), abbreviated forms.
    pub eras: (&'static str, &'static str),
    /// (AM, PM)
    pub day_periods: (&'static str, &'static str),
    /// Date patterns indexed by length: [long, medium, short]
    pub date_patterns: [&'static str; 3],
    /// Time patterns indexed by length: [long, medium, short]
    pub time_patterns: [&'static str; 3],
    /// Date-time glue patterns, `{1}` = date, `{0}` = time.
    pub glue_patterns: [&'static str; 3],
    /// Prefix for the localized GMT offset format, e.g. `GMT`.
    pub gmt_prefix: &'static str,
}

/// All baked locale bundles, sorted by locale tag. The `root` bundle is
/// the terminal fallback.
pub static DATETIME_NAMES: &[DateTimeNames] = &[
    DateTimeNames {
        locale: "de",
        months_long: [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
            "Oktober", "November", "Dezember",
        ],
        months_short: [
            "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.",
            "Nov.", "Dez.",
        ],
        weekdays_long: [
            "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
        ],
        weekdays_short: ["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa.", "So."],
        eras: ("v. Chr.", "n. Chr."),
        day_periods: ("AM", "PM"),
        date_patterns: ["d. MMMM y", "dd.MM.y", "dd.MM.yy"],
        time_patterns: ["HH:mm:ss", "HH:mm:ss", "HH:mm"],
        glue_patterns: ["{1}, {0}", "{1}, {0}", "{1}, {0}"],
        gmt_prefix: "GMT",
    },
    DateTimeNames {
        locale: "en",
        months_long: [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ],
        months_short: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
        weekdays_long: [
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        ],
        weekdays_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        eras: ("BC", "AD"),
        day_periods: ("AM", "PM"),
        date_patterns: ["MMMM d, y", "MMM d, y", "M/d/yy"],
        time_patterns: ["h:mm:ss a", "h:mm:ss a", "h:mm a"],
        glue_patterns: ["{1} 'at' {0}", "{1}, {0}", "{1}, {0}"],
        gmt_prefix: "GMT",
    },
    DateTimeNames {
        locale: "en-GB",
        months_long: [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ],
        months_short: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
        weekdays_long: [
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        ],
        weekdays_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        eras: ("BC", "AD"),
        day_periods: ("am", "pm"),
        date_patterns: ["d MMMM y", "d MMM y", "dd/MM/y"],
        time_patterns: ["HH:mm:ss", "HH:mm:ss", "HH:mm"],
        glue_patterns: ["{1} 'at' {0}", "{1}, {0}", "{1}, {0}"],
        gmt_prefix: "GMT",
    },
    DateTimeNames {
        locale: "es",
        months_long: [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre",
        ],
        months_short: [
            "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
        ],
        weekdays_long: [
            "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
        ],
        weekdays_short: ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"],
        eras: ("a. C.", "d. C."),
        day_periods: ("a. m.", "p. m."),
        date_patterns: ["d 'de' MMMM 'de' y", "d MMM y", "d/M/yy"],
        time_patterns: ["HH:mm:ss", "HH:mm:ss", "HH:mm"],
        glue_patterns: ["{1}, {0}", "{1}, {0}", "{1}, {0}"],
        gmt_prefix: "GMT",
    },
    DateTimeNames {
        locale: "fr",
        months_long: [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
            "septembre", "octobre", "novembre", "décembre",
        ],
        months_short: [
            "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
            "nov.", "déc.",
        ],
        weekdays_long: [
            "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
        ],
        weekdays_short: ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."],
        eras: ("av. J.-C.", "ap. J.-C."),
        day_periods: ("AM", "PM"),
        date_patterns: ["d MMMM y", "d MMM y", "dd/MM/y"],
        time_patterns: ["HH:mm:ss", "HH:mm:ss", "HH:mm"],
        glue_patterns: ["{1}, {0}", "{1}, {0}", "{1}, {0}"],
        gmt_prefix: "UTC",
    },
    DateTimeNames {
        locale: "ja",
        months_long: [
            "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月",
            "12月",
        ],
        months_short: [
            "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月",
            "12月",
        ],
        weekdays_long: [
            "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日", "日曜日",
        ],
        weekdays_short: ["月", "火", "水", "木", "金", "土", "日"],
        eras: ("紀元前", "西暦"),
        day_periods: ("午前", "午後"),
        date_patterns: ["y'年'M'月'd'日'", "y/MM/dd", "y/MM/dd"],
        time_patterns: ["H:mm:ss", "H:mm:ss", "H:mm"],
        glue_patterns: ["{1} {0}", "{1} {0}", "{1} {0}"],
        gmt_prefix: "GMT",
    },
    DateTimeNames {
        locale: "root",
        months_long: [
            "M01", "M02", "M03", "M04", "M05", "M06", "M07", "M08", "M09", "M10", "M11", "M12",
        ],
        months_short: [
            "M01", "M02", "M03", "M04", "M05", "M06", "M07", "M08", "M09", "M10", "M11", "M12",
        ],
        weekdays_long: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        weekdays_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        eras: ("BCE", "CE"),
        day_periods: ("AM", "PM"),
        date_patterns: ["y MMMM d", "y MMM d", "y-MM-dd"],
        time_patterns: ["HH:mm:ss", "HH:mm:ss", "HH:mm"],
        glue_patterns: ["{1} {0}", "{1} {0}", "{1} {0}"],
        gmt_prefix: "GMT",
    },
];

/// Looks up the bundle for an exact normalized tag.
pub fn names_for_locale(tag: &str) -> Option<&'static DateTimeNames> {
    DATETIME_NAMES.iter().find(|n| n.locale == tag)
}
