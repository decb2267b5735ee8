//! `kairos_rs` is a calendrical date/time model with locale-aware
//! formatting.
//!
//! ```rust
//! use kairos_rs::{Calendar, Date, IsoDate};
//! use core::str::FromStr;
//!
//! // Create a date on the ISO calendar
//! let iso_date = IsoDate::try_new(2024, 2, 29).unwrap();
//!
//! // Re-express it on the Hebrew calendar
//! let hebrew_date = iso_date.to_any().to_calendar(Calendar::HEBREW).unwrap();
//! assert_eq!(hebrew_date.year(), 5784);
//! assert!(hebrew_date.in_leap_year());
//!
//! // And back: the rata die is calendar-agnostic
//! let round_trip = hebrew_date.to_calendar(Calendar::ISO).unwrap();
//! assert_eq!(round_trip.to_iso(), iso_date);
//! ```
//!
//! The crate models civil dates and times across a closed set of
//! calendar systems pinned to a shared linear day count, resolves time
//! zones and their standard/daylight offsets, parses and serializes the
//! RFC 9557 text format, and renders values to locale-correct strings
//! through compiled symbol and pattern data.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::option_if_let_else
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod fmt;
pub mod iana;
pub mod iso;
pub mod locale;
pub mod options;
pub mod provider;

mod components;
pub(crate) mod parsers;

#[doc(hidden)]
pub(crate) mod utils;

/// Re-export of `TinyAsciiStr` from `tinystr`, which the API surface
/// uses for month, era, and zone subtag codes.
pub use tinystr::TinyAsciiStr;

#[doc(inline)]
pub use error::{ErrorKind, ErrorMessage, KairosError};

/// The `kairos_rs` result type.
pub type KairosResult<T> = Result<T, KairosError>;

pub use crate::components::{
    Calendar, CalendarFields, CalendarKind, Date, DateTime, MonthCode, Time, TimeZone,
    TimeZoneInfo, TimeZoneVariant, UtcOffset, VariantOffsets, VariantOffsetsCalculator,
    ZonedDateTime, ZonedIsoDateTime,
};
pub use crate::fmt::{
    DateFormatter, DateFormatterOptions, DateTimeFormatter, DateTimeFormatterOptions,
    GregorianDateFormatter, GregorianDateTimeFormatter, TimeFormatter, TimeFormatterOptions,
    TimeZoneFormatter, TimeZoneStyle, ZonedDateTimeFormatter,
};
pub use crate::iana::IanaParser;
pub use crate::iso::{
    is_leap_year, iso_to_rata_die, rata_die_to_iso, IsoDate, IsoDateTime, RataDie,
};
pub use crate::locale::Locale;

/// A library specific trait for unwrapping assertions.
pub(crate) trait KairosUnwrap {
    type Output;

    /// Assertion-style unwrapping: panics in debug builds, surfaces an
    /// assert-kind error at runtime.
    #[allow(dead_code)]
    fn kairos_unwrap(self) -> KairosResult<Self::Output>;
}

impl<T> KairosUnwrap for Option<T> {
    type Output = T;

    fn kairos_unwrap(self) -> KairosResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(KairosError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! kairos_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::KairosError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::KairosError::assert());
        }
    };
}
