//! Option enums shared across construction, serialization, and the
//! formatting engine.

use core::fmt;
use core::str::FromStr;

use crate::KairosError;

/// The overflow behavior when constructing a value from potentially
/// out-of-range fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Clamp out-of-range fields into range.
    #[default]
    Constrain,
    /// Reject out-of-range fields with a range error.
    Reject,
}

impl FromStr for Overflow {
    type Err = KairosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constrain" => Ok(Self::Constrain),
            "reject" => Ok(Self::Reject),
            _ => Err(KairosError::range().with_message("invalid overflow option")),
        }
    }
}

/// Whether to include the calendar annotation when serializing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayCalendar {
    #[default]
    Auto,
    Always,
    Never,
    Critical,
}

/// Whether to include the offset when serializing a zoned value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOffset {
    #[default]
    Auto,
    Never,
}

/// Whether to include the time zone annotation when serializing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTimeZone {
    #[default]
    Auto,
    Never,
    Critical,
}

// ==== Formatting configuration ====

/// The length of a formatted representation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Long,
    #[default]
    Medium,
    Short,
}

impl Length {
    /// Index into the provider's `[long, medium, short]` pattern arrays.
    pub(crate) const fn pattern_index(self) -> usize {
        match self {
            Self::Long => 0,
            Self::Medium => 1,
            Self::Short => 2,
        }
    }
}

impl FromStr for Length {
    type Err = KairosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(Self::Long),
            "medium" => Ok(Self::Medium),
            "short" => Ok(Self::Short),
            _ => Err(KairosError::range().with_message("invalid length option")),
        }
    }
}

/// Column alignment pads numeric fields to a fixed width so stacked
/// values line up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Auto,
    Column,
}

/// Which rendering of the year a formatter chooses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum YearStyle {
    /// Era is rendered only when required for disambiguation (non-positive
    /// years, or a non-default era).
    #[default]
    Auto,
    /// Always render the full extended year without an era.
    Full,
    /// Always render the era alongside the era-relative year.
    WithEra,
}

/// How much of the time to render.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TimePrecision {
    Hour,
    Minute,
    #[default]
    Second,
    /// Seconds plus a fixed number of fractional digits (1..=9).
    Subsecond(u8),
}

/// The date fields a formatter renders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DateFields {
    /// Day of month only.
    D,
    /// Month and day.
    MD,
    /// Year, month, and day.
    #[default]
    YMD,
    /// Month, day, and weekday.
    MDE,
    /// Year, month, day, and weekday.
    YMDE,
    /// Month only.
    M,
    /// Year and month.
    YM,
    /// Year only.
    Y,
}

impl DateFields {
    pub(crate) const fn has_year(self) -> bool {
        matches!(self, Self::YMD | Self::YMDE | Self::YM | Self::Y)
    }

    pub(crate) const fn has_month(self) -> bool {
        matches!(self, Self::MD | Self::YMD | Self::MDE | Self::YMDE | Self::M | Self::YM)
    }

    pub(crate) const fn has_day(self) -> bool {
        matches!(self, Self::D | Self::MD | Self::YMD | Self::MDE | Self::YMDE)
    }

    pub(crate) const fn has_weekday(self) -> bool {
        matches!(self, Self::MDE | Self::YMDE)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Long => "long",
            Self::Medium => "medium",
            Self::Short => "short",
        })
    }
}
