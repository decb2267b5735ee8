//! The error type for `kairos_rs`.
//!
//! Every fallible operation in this crate reports a [`KairosError`]: an
//! error kind paired with a diagnostic message. Kinds separate the error
//! families callers dispatch on; messages carry the precise diagnostic.

use alloc::borrow::Cow;
use core::fmt;

/// The category of an error.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Catch-all for internal error states.
    #[default]
    Generic,
    /// A caller violated a documented precondition.
    Type,
    /// A value was malformed or out of its domain.
    Range,
    /// An input string failed to parse.
    Syntax,
    /// Required provider data was missing.
    Data,
    /// An internal invariant failed. Not a normal runtime condition.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "Error",
            Self::Type => "TypeError",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
            Self::Data => "DataError",
            Self::Assert => "AssertionError",
        })
    }
}

/// Stable diagnostic messages for error states the library reports from
/// more than one place, or that callers are expected to dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorMessage {
    DateOutOfRange,
    TimeOutOfRange,
    OffsetOutOfRange,
    FractionalTimeExceedsNineDigits,
    UnknownEra,
    UnknownMonthCode,
    EraYearOutOfRange,
    ConflictingYearFields,
    ConflictingMonthFields,
    MissingYearField,
    MissingMonthField,
    MissingDayField,
    MissingTimeZoneAnnotation,
    MissingOffset,
    MissingTimeZoneVariant,
    MissingReferenceTime,
    OffsetVariantMismatch,
    MismatchedCalendar,
    MismatchedLocale,
    MissingLocaleData,
    MissingLunarTable,
    MissingZoneData,
}

impl ErrorMessage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateOutOfRange => "date fields are not within the representable range",
            Self::TimeOutOfRange => "time fields are not within the valid range",
            Self::OffsetOutOfRange => "UTC offset is outside the valid range",
            Self::FractionalTimeExceedsNineDigits => {
                "fractional seconds exceed nine digits of precision"
            }
            Self::UnknownEra => "era is not recognized by this calendar",
            Self::UnknownMonthCode => "month code is not recognized by this calendar",
            Self::EraYearOutOfRange => "era year is not valid for the provided era",
            Self::ConflictingYearFields => "year and eraYear fields could not be reconciled",
            Self::ConflictingMonthFields => "month and monthCode fields could not be reconciled",
            Self::MissingYearField => "required year fields are missing",
            Self::MissingMonthField => "a month or monthCode field is required",
            Self::MissingDayField => "a day field is required",
            Self::MissingTimeZoneAnnotation => "a time zone annotation is required",
            Self::MissingOffset => "a UTC offset is required",
            Self::MissingTimeZoneVariant => {
                "the requested format requires a resolved time zone variant"
            }
            Self::MissingReferenceTime => {
                "a reference local date-time is required to resolve the variant"
            }
            Self::OffsetVariantMismatch => {
                "the stored offset matches neither the standard nor the daylight offset"
            }
            Self::MismatchedCalendar => "the value's calendar does not match the formatter",
            Self::MismatchedLocale => "the zone formatter's locale does not match",
            Self::MissingLocaleData => "no date/time symbol data for the requested locale",
            Self::MissingLunarTable => "no lunisolar table data for the requested year",
            Self::MissingZoneData => "no compiled data for the requested time zone",
        }
    }
}

/// The `kairos_rs` error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KairosError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl KairosError {
    #[inline]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates a general error.
    #[inline]
    pub const fn general(msg: &'static str) -> Self {
        Self {
            kind: ErrorKind::Generic,
            msg: Cow::Borrowed(msg),
        }
    }

    /// Creates a range error.
    #[inline]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Creates a syntax error.
    #[inline]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates a type error.
    #[inline]
    pub const fn r#type() -> Self {
        Self::new(ErrorKind::Type)
    }

    /// Creates a missing-data error.
    #[inline]
    pub const fn data() -> Self {
        Self::new(ErrorKind::Data)
    }

    /// Creates an assertion error; this signals a broken library
    /// invariant, not bad input.
    #[inline]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Attaches a message to the error.
    #[must_use]
    pub fn with_message(mut self, msg: impl Into<Cow<'static, str>>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Attaches a stable [`ErrorMessage`] diagnostic.
    #[must_use]
    pub fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = Cow::Borrowed(msg.as_str());
        self
    }

    /// Returns this error's kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Consumes the error, returning its message.
    #[inline]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }

    /// Returns whether the error carries the given diagnostic.
    #[inline]
    pub fn matches(&self, msg: ErrorMessage) -> bool {
        self.msg == msg.as_str()
    }
}

impl fmt::Display for KairosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

impl core::error::Error for KairosError {}
