//! The value types and the calendar/time zone engines behind them.

pub mod calendar;
pub mod date;
pub mod datetime;
pub mod time;
pub mod timezone;
pub mod zoneddatetime;

pub use calendar::{Calendar, CalendarFields, CalendarKind, MonthCode};
pub use date::Date;
pub use datetime::DateTime;
pub use time::Time;
pub use timezone::{
    TimeZone, TimeZoneInfo, TimeZoneVariant, UtcOffset, VariantOffsets, VariantOffsetsCalculator,
};
pub use zoneddatetime::{ZonedDateTime, ZonedIsoDateTime};
