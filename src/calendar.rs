//! Calendar arithmetic: leap years, month lengths and Zeller's weekday formula.
//!
//! Months are 0-indexed throughout (0 = January). Every function here is pure.

use chrono::Weekday;

use crate::types::ReferenceDate;

/// Gregorian rule: divisible by 4, except centuries unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in `month` (0-indexed) of `year`.
///
/// # Panics
/// If `month` is outside 0..=11.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 if is_leap_year(year) => 29,
        1 => 28,
        _ => panic!("month index out of range: {month}"),
    }
}

/// Weekday index of the 1st of the month, 0 = Sunday.
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    assert!(month < 12, "month index out of range: {month}");

    // Zeller counts March as month 3 and January/February as 13/14 of the previous year
    let m = (if month < 2 { month + 13 } else { month + 1 }) as i32;
    let year_i = if month < 2 { year - 1 } else { year };
    let k = year_i.rem_euclid(100);
    let j = year_i.div_euclid(100);

    let h = (1 + (13 * (m + 1)) / 5 + k + k / 4 + j.div_euclid(4) - 2 * j).rem_euclid(7);
    // h: 0=Sat, 1=Sun, ..., 6=Fri
    ((h + 6) % 7) as u32
}

/// Weekday of the 1st of the month.
pub fn first_weekday(year: i32, month: u32) -> Weekday {
    match first_weekday_offset(year, month) {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        _ => unreachable!(),
    }
}

pub fn is_same_day(a: ReferenceDate, b: ReferenceDate) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}
