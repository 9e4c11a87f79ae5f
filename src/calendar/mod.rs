//! Jalali (Persian) calendar conversion and formatting.
//!
//! Every date shown to an end user, stored on a transaction, or used to bucket
//! charges into monthly periods is a Jalali date. The Gregorian calendar only
//! appears at the boundary with [`chrono`]. Conversion goes through a single
//! Julian-day-number path in both directions, with leap years determined by
//! the 2820-year-cycle rule, so the round trip is exact over the whole civil
//! range.

pub mod digits;

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use digits::to_english_digits;

/// Persian month names, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

// Julian day number of 1 Farvardin 1 minus one day.
const JALALI_EPOCH: i64 = 1948320;

/// A calendar date in the Persian solar calendar.
///
/// Serialized as the canonical zero-padded `"YYYY/MM/DD"` string, the same
/// form transactions store and the dashboard displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    year: i32,
    month: u32,
    day: u32,
}

/// Failure to read a Jalali date out of a string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("malformed Jalali date `{0}`")]
    Malformed(String),
    #[error("Jalali date out of range `{0}`")]
    OutOfRange(String),
}

impl JalaliDate {
    /// Builds a date after validating the month and day against the Jalali
    /// month lengths (including the leap twelfth month).
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Converts a Gregorian civil date.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let jdn = gregorian_to_jdn(date.year(), date.month(), date.day());
        jdn_to_jalali(jdn)
    }

    /// Converts back to a Gregorian civil date. Inverse of
    /// [`JalaliDate::from_gregorian`].
    pub fn to_gregorian(&self) -> NaiveDate {
        let (gy, gm, gd) = jdn_to_gregorian(jalali_to_jdn(self.year, self.month, self.day));
        // jdn_to_gregorian only emits valid (month, day) pairs.
        NaiveDate::from_ymd_opt(gy, gm, gd).unwrap()
    }

    /// Today's date in the Jalali calendar, from the local clock.
    pub fn today() -> Self {
        Self::from_gregorian(chrono::Local::now().date_naive())
    }

    /// Canonical zero-padded `YYYY/MM/DD` form with ASCII digits.
    pub fn format(&self) -> String {
        format!("{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }

    /// The `YYYY/MM` month bucket used to group charges by period.
    pub fn period_key(&self) -> String {
        format!("{:04}/{:02}", self.year, self.month)
    }

    /// Persian name of this date's month.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Parses `YYYY/MM/DD` (also `YYYY-MM-DD`), tolerating Persian digits.
    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        let normalized = to_english_digits(input.trim());
        let parts: Vec<&str> = normalized.split(['/', '-']).collect();
        if parts.len() != 3 {
            return Err(DateParseError::Malformed(input.to_string()));
        }
        let numbers: Option<Vec<u32>> = parts.iter().map(|p| p.trim().parse().ok()).collect();
        let numbers = numbers.ok_or_else(|| DateParseError::Malformed(input.to_string()))?;
        let year =
            i32::try_from(numbers[0]).map_err(|_| DateParseError::OutOfRange(input.to_string()))?;
        Self::new(year, numbers[1], numbers[2])
            .ok_or_else(|| DateParseError::OutOfRange(input.to_string()))
    }

    /// Parses like [`JalaliDate::parse`], degrading to today's date on any
    /// failure. The dashboard never surfaces date-parse errors to the user;
    /// callers that need strict validation use `parse` directly.
    pub fn parse_or_today(input: &str) -> Self {
        match Self::parse(input) {
            Ok(date) => date,
            Err(error) => {
                tracing::warn!(%error, "falling back to today for unparseable date");
                Self::today()
            }
        }
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for JalaliDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for JalaliDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for JalaliDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

/// Leap-year test on the 2820-year cycle.
pub fn is_leap_jalali_year(year: i32) -> bool {
    let year = year as i64;
    let base = year - if year > 0 { 474 } else { 473 };
    ((base.rem_euclid(2820) + 474 + 38) * 682).rem_euclid(2816) < 682
}

/// Number of days in a Jalali month: 31 for months 1-6, 30 for 7-11, and 29
/// or 30 for Esfand depending on the leap year.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 => {
            if is_leap_jalali_year(year) {
                30
            } else {
                29
            }
        }
        _ => 0,
    }
}

/// Converts a Gregorian date. Convenience wrapper mirroring the dashboard's
/// conversion helper.
pub fn gregorian_to_jalali(year: i32, month: u32, day: u32) -> Option<JalaliDate> {
    NaiveDate::from_ymd_opt(year, month, day).map(JalaliDate::from_gregorian)
}

/// Converts a Jalali date to Gregorian `(year, month, day)`.
pub fn jalali_to_gregorian(year: i32, month: u32, day: u32) -> Option<(i32, u32, u32)> {
    let date = JalaliDate::new(year, month, day)?;
    let gregorian = date.to_gregorian();
    Some((gregorian.year(), gregorian.month(), gregorian.day()))
}

fn jalali_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let year = year as i64;
    let base = year - if year >= 0 { 474 } else { 473 };
    let cycle_year = 474 + base.rem_euclid(2820);
    let month_days = if month <= 7 {
        (month as i64 - 1) * 31
    } else {
        (month as i64 - 1) * 30 + 6
    };
    day as i64
        + month_days
        + (cycle_year * 682 - 110).div_euclid(2816)
        + (cycle_year - 1) * 365
        + base.div_euclid(2820) * 1_029_983
        + JALALI_EPOCH
}

fn jdn_to_jalali(jdn: i64) -> JalaliDate {
    let depoch = jdn - jalali_to_jdn(475, 1, 1);
    let cycle = depoch.div_euclid(1_029_983);
    let cycle_day = depoch.rem_euclid(1_029_983);
    let cycle_year = if cycle_day == 1_029_982 {
        2820
    } else {
        let aux1 = cycle_day / 366;
        let aux2 = cycle_day % 366;
        (2134 * aux1 + 2816 * aux2 + 2815) / 1_028_522 + aux1 + 1
    };
    let mut year = (cycle_year + 2820 * cycle + 474) as i32;
    if year <= 0 {
        year -= 1;
    }
    let year_day = jdn - jalali_to_jdn(year, 1, 1) + 1;
    let month = if year_day <= 186 {
        ((year_day + 30) / 31) as u32
    } else {
        ((year_day - 6 + 29) / 30) as u32
    };
    let day = (jdn - jalali_to_jdn(year, month, 1) + 1) as u32;
    JalaliDate { year, month, day }
}

fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

fn jdn_to_gregorian(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = (e - (153 * m + 2) / 5 + 1) as u32;
    let month = (m + 3 - 12 * (m / 10)) as u32;
    let year = (100 * b + d - 4800 + m / 10) as i32;
    (year, month, day)
}
