//! Gregorian epoch-day equations.
//!
//! The conversions between a linear day count and (year, month, day)
//! triples use Cassio Neri and Lorenz Schneider's Euclidean affine
//! functions, [Euclidean affine functions and their application to
//! calendar algorithms][eaf-calendar-algorithms].
//!
//! The paper works on a "computational rata die" shifted so that all
//! intermediate values are non-negative. The supported day range here is
//! `|rata_die - RD_UNIX_EPOCH| <= 100_000_001`, which requires a cycle
//! shift constant well beyond the paper's 82; the same 3670-cycle shift
//! Neri recommends for this range is used below.
//!
//! [eaf-calendar-algorithms]: https://onlinelibrary.wiley.com/doi/full/10.1002/spe.3172

/// Rata die of 1970-01-01 (day 1 = 0001-01-01).
pub(crate) const RD_UNIX_EPOCH: i64 = 719_163;

pub(crate) const DAYS_IN_A_400Y_CYCLE: u32 = 146_097;

const SHIFT_CONSTANT: i64 = 3670;

/// Offset from a rata die to its computational rata die:
/// `719_468 - RD_UNIX_EPOCH + 146_097 * 3670`.
const COMPUTATIONAL_SHIFT: i64 =
    719_468 - RD_UNIX_EPOCH + DAYS_IN_A_400Y_CYCLE as i64 * SHIFT_CONSTANT;

const TWO_POWER_THIRTY_NINE: u64 = 549_755_813_888;
const TWO_POWER_SIXTEEN: u32 = 65_536;

/// Converts a proleptic Gregorian (year, month, day) to its rata die.
///
/// Pure integer arithmetic; valid for the full supported year range.
pub(crate) const fn rata_die_from_gregorian(year: i32, month: u8, day: u8) -> i64 {
    let j = (month <= 2) as i64;
    let comp_year = year as i64 + 400 * SHIFT_CONSTANT - j;
    let comp_month = month as i64 + 12 * j;
    let comp_day = day as i64 - 1;
    let century = comp_year.div_euclid(100);

    let y_star = (1461 * comp_year).div_euclid(4) - century + century.div_euclid(4);
    let m_star = (979 * comp_month - 2919).div_euclid(32);

    y_star + m_star + comp_day - COMPUTATIONAL_SHIFT
}

/// Converts a rata die to its proleptic Gregorian (year, month, day).
///
/// Total over the supported day range; the inverse of
/// [`rata_die_from_gregorian`].
pub(crate) const fn gregorian_from_rata_die(rata_die: i64) -> (i32, u8, u8) {
    // The shift guarantees the computational rata die is positive for the
    // entire supported range.
    let n = (rata_die + COMPUTATIONAL_SHIFT) as u64;

    let n_one = 4 * n + 3;
    let century = n_one / DAYS_IN_A_400Y_CYCLE as u64;
    let n_two = n_one % DAYS_IN_A_400Y_CYCLE as u64 | 3;
    let year_of_century = (376_287_347 * n_two) / TWO_POWER_THIRTY_NINE;
    let day_of_year = ((n_two - 1461 * year_of_century) / 4) as u32;
    let comp_year = 100 * century + year_of_century;

    let n_three = 2141 * day_of_year + 197_913;
    let comp_month = n_three / TWO_POWER_SIXTEEN;
    let comp_day = (n_three % TWO_POWER_SIXTEEN) / 2141;

    let j = (day_of_year >= 306) as u64;
    let year = (comp_year + j) as i64 - 400 * SHIFT_CONSTANT;
    let month = comp_month - 12 * j as u32;

    (year as i32, month as u8, comp_day as u8 + 1)
}

/// The Gregorian leap year rule.
pub(crate) const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub(crate) const fn iso_days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

pub(crate) const fn iso_days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Cumulative days before each month in a common year.
const DAYS_BEFORE_MONTH: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

pub(crate) const fn iso_day_of_year(year: i32, month: u8, day: u8) -> u16 {
    let leap_adjust = (month > 2 && is_leap_year(year)) as u16;
    DAYS_BEFORE_MONTH[month as usize - 1] + leap_adjust + day as u16
}

/// ISO day of week for a rata die, Monday = 1 .. Sunday = 7.
///
/// Rata die 1 (0001-01-01) is a Monday.
pub(crate) const fn iso_day_of_week(rata_die: i64) -> u8 {
    (rata_die - 1).rem_euclid(7) as u8 + 1
}
