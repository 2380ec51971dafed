//! Proleptic Gregorian/Julian calendar types and Julian-day conversions.
//!
//! Dates before the Gregorian reform (JD 2299161) follow the Julian calendar
//! with astronomical leap counting; the conversion algorithms are the
//! integer-math forms from Numerical Recipes. A Julian day is a double whose
//! integer part counts days from the astronomical epoch and whose fraction
//! keeps noon as zero.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors raised by calendar conversions and parsers.
#[derive(Debug, Error)]
pub enum DateTimeError {
    /// A date or time string did not match any recognised grammar.
    #[error("unrecognised date/time string: {text:?}")]
    Unparseable {
        /// The rejected input.
        text: String,
    },
    /// The proleptic Julian-day conversion has no year zero.
    #[error("there is no year zero")]
    YearZero,
}

/// ISO-8601 date-time with optional zone offset.
pub static ISO8601_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([+\-]?\d+)[:\-](\d\d)[:\-](\d\d)T(\d?\d):(\d\d):(\d\d(?:\.\d*)?)(([+\-]\d?\d):(\d\d))?$",
    )
    .expect("iso8601 regex")
});

/// SpaceEngine date-time, `y.m.d h:m:s`.
pub static SE_DATE_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+\-]?\d+)[\./-](\d\d)[\./-](\d\d) (\d?\d):(\d\d):(\d\d(?:\.\d*)?)$")
        .expect("se date-time regex")
});

/// SpaceEngine date, `y.m.d`.
pub static SE_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+\-]?\d+)[\./-](\d\d)[\./-](\d\d)$").expect("se date regex"));

/// SpaceEngine time, `h:m:s`.
pub static SE_TIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d?\d):(\d\d):(\d\d(?:\.\d*)?)$").expect("se time regex"));

const JD_GREG_CAL: i64 = 2299161;

/// A proleptic calendar date.
///
/// ```
/// use cse_rs::datetime::CSEDate;
///
/// let d = CSEDate::new(2000, 1, 1).unwrap();
/// assert_eq!(d.to_julian_day().unwrap(), 2451545);
/// assert!(CSEDate::new(2001, 2, 29).is_none());
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CSEDate {
    year: i64,
    month: i64,
    day: i64,
}

impl CSEDate {
    /// Builds a validated date; `None` when the day does not exist.
    pub fn new(year: i64, month: i64, day: i64) -> Option<Self> {
        let d = CSEDate { year, month, day };
        d.is_valid().then_some(d)
    }

    /// The null (all-zero) date.
    pub fn null() -> Self {
        CSEDate::default()
    }

    /// Whether this is the null date.
    pub fn is_null(&self) -> bool {
        self.year == 0 && self.month == 0 && self.day == 0
    }

    /// Whether the (year, month, day) triple names a real day.
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && self.day > 0
            && self.day <= days_in_month(self.month, self.year)
    }

    /// The year.
    pub fn year(&self) -> i64 {
        self.year
    }

    /// The month, 1-12.
    pub fn month(&self) -> i64 {
        self.month
    }

    /// The day of month.
    pub fn day(&self) -> i64 {
        self.day
    }

    /// Leap-year rule: Gregorian after 1582, strict every-4th-year
    /// (astronomical counting) before.
    pub fn is_leap_year(year: i64) -> bool {
        if year > 1582 {
            if year % 100 == 0 {
                year % 400 == 0
            } else {
                year % 4 == 0
            }
        } else {
            year % 4 == 0
        }
    }

    /// This date shifted by whole days.
    pub fn add_days(&self, ndays: i64) -> Self {
        match self.to_julian_day() {
            Ok(jd) => Self::from_julian_day((jd + ndays) as f64),
            Err(_) => *self,
        }
    }

    /// This date shifted by months, clamping the day into the target month.
    pub fn add_months(&self, nmonths: i64) -> Self {
        let total = self.year * 12 + (self.month - 1) + nmonths;
        let mut year = total.div_euclid(12);
        let month = total.rem_euclid(12) + 1;
        // Skip over the nonexistent year zero.
        if self.year > 0 && year <= 0 {
            year -= 1;
        } else if self.year < 0 && year >= 0 {
            year += 1;
        }
        let day = self.day.min(days_in_month(month, year));
        CSEDate { year, month, day }
    }

    /// This date shifted by years, clamping 29 February when needed.
    pub fn add_years(&self, nyears: i64) -> Self {
        let mut year = self.year + nyears;
        if self.year > 0 && year <= 0 {
            year -= 1;
        } else if self.year < 0 && year >= 0 {
            year += 1;
        }
        let day = self.day.min(days_in_month(self.month, year));
        CSEDate {
            year,
            month: self.month,
            day,
        }
    }

    /// The day of week, 0 = Sunday.
    pub fn day_of_week(&self) -> i64 {
        match self.to_julian_day() {
            Ok(jd) => (jd as f64 + 1.5).rem_euclid(7.0).floor() as i64,
            Err(_) => 0,
        }
    }

    /// The Julian day number at noon of this date, by the Numerical Recipes
    /// conversion. Fails on year zero.
    pub fn to_julian_day(&self) -> Result<i64, DateTimeError> {
        const IGREG: i64 = 15 + 31 * (10 + 12 * 1582);
        let mut jy = self.year;
        if jy == 0 {
            return Err(DateTimeError::YearZero);
        }
        if jy < 0 {
            jy += 1;
        }
        let jm = if self.month > 2 {
            self.month + 1
        } else {
            jy -= 1;
            self.month + 13
        };
        let mut jul = (365.25 * jy as f64).floor() as i64 + (30.6001 * jm as f64).floor() as i64
            + self.day
            + 1720995;
        if self.day + 31 * (self.month + 12 * self.year) >= IGREG {
            let ja = jy / 100;
            jul += 2 - ja + ja / 4;
        }
        Ok(jul)
    }

    /// The date containing the given Julian day.
    pub fn from_julian_day(jd: f64) -> Self {
        let (yy, mm, dd) = date_from_julian_day(jd);
        CSEDate {
            year: yy,
            month: mm,
            day: dd,
        }
    }

    /// Today in UTC.
    pub fn current_date() -> Self {
        CSEDateTime::current_date_time_utc().date()
    }
}

impl fmt::Display for CSEDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Days in a month under the crate's leap rule.
fn days_in_month(month: i64, year: i64) -> i64 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if CSEDate::is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// A time of day with millisecond resolution.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CSETime {
    hour: i64,
    minute: i64,
    second: i64,
    msec: i64,
}

impl CSETime {
    /// Builds a validated time; `None` when a field is out of range.
    pub fn new(hour: i64, minute: i64, second: i64, msec: i64) -> Option<Self> {
        let t = CSETime {
            hour,
            minute,
            second,
            msec,
        };
        t.is_valid().then_some(t)
    }

    /// Whether every field is in range.
    pub fn is_valid(&self) -> bool {
        (0..24).contains(&self.hour)
            && (0..60).contains(&self.minute)
            && (0..60).contains(&self.second)
            && (0..1000).contains(&self.msec)
    }

    /// Whether this is exactly midnight.
    pub fn is_null(&self) -> bool {
        self.hour == 0 && self.minute == 0 && self.second == 0 && self.msec == 0
    }

    /// The hour.
    pub fn hour(&self) -> i64 {
        self.hour
    }

    /// The minute.
    pub fn minute(&self) -> i64 {
        self.minute
    }

    /// The second.
    pub fn second(&self) -> i64 {
        self.second
    }

    /// The millisecond.
    pub fn msec(&self) -> i64 {
        self.msec
    }

    /// Milliseconds since midnight.
    pub fn msecs_since_start_of_day(&self) -> i64 {
        ((self.hour * 60 + self.minute) * 60 + self.second) * 1000 + self.msec
    }

    /// This time shifted by milliseconds; `wrapped_days` reports how many
    /// day boundaries were crossed.
    pub fn add_msecs(&self, msecs: i64, wrapped_days: &mut i64) -> Self {
        let total = self.msecs_since_start_of_day() + msecs;
        *wrapped_days = total.div_euclid(86_400_000);
        let t = total.rem_euclid(86_400_000);
        CSETime {
            hour: t / 3_600_000,
            minute: t / 60_000 % 60,
            second: t / 1000 % 60,
            msec: t % 1000,
        }
    }

    /// This time shifted by whole seconds.
    pub fn add_secs(&self, secs: i64, wrapped_days: &mut i64) -> Self {
        self.add_msecs(secs * 1000, wrapped_days)
    }
}

impl fmt::Display for CSETime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour, self.minute, self.second, self.msec
        )
    }
}

/// A date, a time of day and an offset from UTC in seconds.
///
/// ```
/// use cse_rs::datetime::CSEDateTime;
///
/// let dt = CSEDateTime::parse("2024-05-17T12:30:00").unwrap();
/// assert_eq!(dt.date().year(), 2024);
/// assert_eq!(dt.time().hour(), 12);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CSEDateTime {
    date: CSEDate,
    time: CSETime,
    offset_secs: f64,
}

impl CSEDateTime {
    /// Assembles a date-time with a UTC offset in seconds.
    pub fn new(date: CSEDate, time: CSETime, offset_secs: f64) -> Self {
        CSEDateTime {
            date,
            time,
            offset_secs,
        }
    }

    /// A date at the start of the day, UTC.
    pub fn from_date(date: CSEDate) -> Self {
        CSEDateTime {
            date,
            time: CSETime::default(),
            offset_secs: 0.0,
        }
    }

    /// The date part.
    pub fn date(&self) -> CSEDate {
        self.date
    }

    /// The time part.
    pub fn time(&self) -> CSETime {
        self.time
    }

    /// Seconds east of UTC.
    pub fn offset_from_utc(&self) -> f64 {
        self.offset_secs
    }

    /// Replaces the UTC offset.
    pub fn set_offset_from_utc(&mut self, offset_secs: f64) {
        self.offset_secs = offset_secs;
    }

    /// Whether both parts are valid (the null date-time is not).
    pub fn is_valid(&self) -> bool {
        !(self.date.is_null() && self.time.is_null()) && self.date.is_valid() && self.time.is_valid()
    }

    /// This instant shifted by days.
    pub fn add_days(&self, ndays: i64) -> Self {
        CSEDateTime {
            date: self.date.add_days(ndays),
            ..*self
        }
    }

    /// This instant shifted by milliseconds.
    pub fn add_msecs(&self, msecs: i64) -> Self {
        let mut wrapped = 0;
        let time = self.time.add_msecs(msecs, &mut wrapped);
        CSEDateTime {
            date: self.date.add_days(wrapped),
            time,
            offset_secs: self.offset_secs,
        }
    }

    /// This instant shifted by seconds.
    pub fn add_secs(&self, secs: i64) -> Self {
        self.add_msecs(secs * 1000)
    }

    /// This instant shifted by months.
    pub fn add_months(&self, nmonths: i64) -> Self {
        CSEDateTime {
            date: self.date.add_months(nmonths),
            ..*self
        }
    }

    /// This instant shifted by years.
    pub fn add_years(&self, nyears: i64) -> Self {
        CSEDateTime {
            date: self.date.add_years(nyears),
            ..*self
        }
    }

    /// The same instant expressed with a zero UTC offset.
    pub fn to_utc(&self) -> Self {
        self.add_msecs(-(self.offset_secs * 1000.0) as i64)
            .with_offset(0.0)
    }

    fn with_offset(mut self, offset: f64) -> Self {
        self.offset_secs = offset;
        self
    }

    /// Parses any of the recognised grammars: ISO-8601 date-time, the
    /// SpaceEngine date-time, date-only and a bare year.
    pub fn parse(text: &str) -> Result<Self, DateTimeError> {
        let reject = || DateTimeError::Unparseable {
            text: text.to_string(),
        };
        let grab = |c: &regex::Captures<'_>, i: usize| -> i64 {
            c.get(i).map_or(0, |m| m.as_str().parse().unwrap_or(0))
        };
        if let Some(c) = ISO8601_TIME_REGEX.captures(text) {
            let sec: f64 = c[6].parse().map_err(|_| reject())?;
            let offset = if c.get(7).is_some() {
                let oh: f64 = grab(&c, 8) as f64;
                let om: f64 = grab(&c, 9) as f64;
                oh * 3600.0 + om.copysign(oh) * 60.0
            } else {
                0.0
            };
            let date = CSEDate::new(grab(&c, 1), grab(&c, 2), grab(&c, 3)).ok_or_else(reject)?;
            let time = CSETime::new(
                grab(&c, 4),
                grab(&c, 5),
                sec.trunc() as i64,
                (sec.fract() * 1000.0).round() as i64,
            )
            .ok_or_else(reject)?;
            return Ok(CSEDateTime::new(date, time, offset));
        }
        if let Some(c) = SE_DATE_TIME_REGEX.captures(text) {
            let sec: f64 = c[6].parse().map_err(|_| reject())?;
            let date = CSEDate::new(grab(&c, 1), grab(&c, 2), grab(&c, 3)).ok_or_else(reject)?;
            let time = CSETime::new(
                grab(&c, 4),
                grab(&c, 5),
                sec.trunc() as i64,
                (sec.fract() * 1000.0).round() as i64,
            )
            .ok_or_else(reject)?;
            return Ok(CSEDateTime::new(date, time, 0.0));
        }
        if let Some(c) = SE_DATE_REGEX.captures(text) {
            let date = CSEDate::new(grab(&c, 1), grab(&c, 2), grab(&c, 3)).ok_or_else(reject)?;
            return Ok(CSEDateTime::from_date(date));
        }
        if let Ok(year) = text.trim().parse::<i64>() {
            let date = CSEDate::new(year, 1, 1).ok_or_else(reject)?;
            return Ok(CSEDateTime::from_date(date));
        }
        Err(reject())
    }

    /// The current UTC date-time from the system clock.
    pub fn current_date_time_utc() -> Self {
        let epoch = hifitime::Epoch::now().unwrap_or(hifitime::Epoch::from_tai_seconds(0.0));
        let (y, m, d, hh, mm, ss, ns) = epoch.to_gregorian_utc();
        CSEDateTime {
            date: CSEDate {
                year: y as i64,
                month: m as i64,
                day: d as i64,
            },
            time: CSETime {
                hour: hh as i64,
                minute: mm as i64,
                second: ss as i64,
                msec: (ns / 1_000_000) as i64,
            },
            offset_secs: 0.0,
        }
    }
}

impl fmt::Display for CSEDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

/// Splits a Julian day into (year, month, day) by the Numerical Recipes
/// integer conversion.
fn date_from_julian_day(jd: f64) -> (i64, i64, i64) {
    const JB_MAX_WITHOUT_OVERFLOW: i64 = 107374182;
    let julian = (jd + 0.5).floor() as i64;

    let ta = if julian >= JD_GREG_CAL {
        let jalpha = (4 * (julian - 1867216) - 1) / 146097;
        julian + 1 + jalpha - jalpha / 4
    } else if julian < 0 {
        julian + 36525 * (1 - julian / 36525)
    } else {
        julian
    };

    let tb = ta + 1524;
    let tc = if tb <= JB_MAX_WITHOUT_OVERFLOW {
        (tb * 20 - 2442) / 7305
    } else {
        ((tb as i128 * 20 - 2442) / 7305) as i64
    };
    let td = 365 * tc + tc / 4;
    let te = (tb - td) * 10000 / 306001;

    let dd = tb - td - 306001 * te / 10000;
    let mut mm = te - 1;
    if mm > 12 {
        mm -= 12;
    }
    let mut yy = tc - 4715;
    if mm > 2 {
        yy -= 1;
    }
    if julian < 0 {
        yy -= 100 * (1 - julian / 36525);
    }
    (yy, mm, dd)
}

/// Splits a Julian day into wall-clock time; `wrap_day` reports whether the
/// time rolled past midnight relative to the day the integer part names.
fn time_from_julian_day(jd: f64) -> (i64, i64, i64, i64, bool) {
    let frac = jd - jd.floor();
    // The small bias absorbs the truncation error of the fraction.
    let secs = frac * 24.0 * 60.0 * 60.0 + 0.0001;
    let s = secs.floor() as i64;
    let mut hour = s / 3600 + 12;
    let mut wrap = false;
    if hour >= 24 {
        hour -= 24;
        wrap = true;
    }
    let minute = s / 60 % 60;
    let second = s % 60;
    let millis = ((secs - secs.floor()) * 1000.0).floor() as i64;
    (hour, minute, second, millis, wrap)
}

/// The full (year, month, day, hour, minute, second, millisecond) split of a
/// Julian day.
pub fn date_time_from_julian_day(jd: f64) -> (i64, i64, i64, i64, i64, i64, i64) {
    let (hour, minute, second, millis, wrap) = time_from_julian_day(jd);
    let (y, m, d) = if wrap {
        date_from_julian_day(jd + 0.1)
    } else {
        date_from_julian_day(jd)
    };
    (y, m, d, hour, minute, second, millis)
}

/// The Julian day of a calendar instant.
///
/// ```
/// use cse_rs::datetime::get_jd_from_date;
///
/// // J2000.0: 2000-01-01 12:00 TT.
/// let jd = get_jd_from_date(2000, 1, 1, 12, 0, 0.0).unwrap();
/// assert_eq!(jd, 2451545.0);
/// ```
pub fn get_jd_from_date(
    y: i64,
    m: i64,
    d: i64,
    h: i64,
    min: i64,
    s: f64,
) -> Result<f64, DateTimeError> {
    let date = CSEDate {
        year: y,
        month: m,
        day: d,
    };
    let delta = h as f64 / 24.0 + min as f64 / (24.0 * 60.0) + s / 86400.0 - 0.5;
    Ok(date.to_julian_day()? as f64 + delta)
}

/// The time-of-day fraction of a Julian day (noon is zero).
pub fn time_to_jd_fract(time: &CSETime) -> f64 {
    time.msecs_since_start_of_day() as f64 / 86_400_000.0 - 0.5
}

/// The wall-clock time of a Julian-day fraction.
pub fn jd_fract_to_time(jd: f64) -> CSETime {
    let (hour, minute, second, millis, _) = time_from_julian_day(jd);
    CSETime {
        hour,
        minute,
        second,
        msec: millis,
    }
}

/// The day of week of a Julian day, 0 = Sunday.
pub fn get_day_of_week(jd: f64) -> i64 {
    (jd + 1.5).rem_euclid(7.0).floor() as i64
}

/// The current Julian day from the system clock.
pub fn get_jd_from_system() -> f64 {
    hifitime::Epoch::now()
        .unwrap_or(hifitime::Epoch::from_tai_seconds(0.0))
        .to_jde_utc_days()
}

/// The Julian day of a Besselian epoch.
pub fn get_jd_from_bes_epoch(epoch: f64) -> f64 {
    2400000.5 + (15019.81352 + (epoch - 1900.0) * 365.242198781)
}

/// Formats a Julian day as an ISO-8601 string, optionally with milliseconds.
pub fn julian_day_to_iso8601_string(jd: f64, add_ms: bool) -> String {
    let (y, m, d, hh, mm, ss, ms) = date_time_from_julian_day(jd);
    let mut out = format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        y.abs(),
        m,
        d,
        hh,
        mm,
        ss
    );
    if add_ms {
        out.push_str(&format!(".{ms:03}"));
    }
    if y < 0 {
        out.insert(0, '-');
    }
    out
}
