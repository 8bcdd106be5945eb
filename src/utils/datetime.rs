//! XMP Date/Time utilities
//!
//! XMP dates are a profile of ISO 8601 that allows partial values:
//! - `YYYY`
//! - `YYYY-MM`
//! - `YYYY-MM-DD`
//! - `YYYY-MM-DDThh:mm[:ss[.s+]]TZD` where TZD is `Z`, `+hh:mm` or `-hh:mm`
//!
//! The time zone designator is optional here because producers routinely
//! omit it.

use crate::core::error::{XmpError, XmpResult};
use std::fmt;
use std::str::FromStr;

/// Time of day part of an XMP date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmpTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
    /// Offset from UTC in minutes, `None` when the value carries no zone
    pub offset_minutes: Option<i16>,
}

/// XMP Date/Time value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct XmpDateTime {
    pub year: i32,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub time: Option<XmpTime>,
}

impl XmpDateTime {
    /// Parse an XMP date/time string
    ///
    /// # Example
    ///
    /// ```rust
    /// use xmpsift::utils::datetime::XmpDateTime;
    ///
    /// let dt = XmpDateTime::parse("2023-12-25T10:30:00Z").unwrap();
    /// assert_eq!(dt.year, 2023);
    /// assert_eq!(dt.month, Some(12));
    /// assert_eq!(dt.time.unwrap().offset_minutes, Some(0));
    /// ```
    pub fn parse(s: &str) -> XmpResult<Self> {
        let mut cur = Cursor::new(s.trim());
        if cur.is_done() {
            return Err(XmpError::BadValue("Empty date/time string".to_string()));
        }

        let year = cur.number(4, "year")? as i32;
        let mut dt = Self {
            year,
            month: None,
            day: None,
            time: None,
        };
        if cur.is_done() {
            return Ok(dt);
        }

        cur.expect(b'-', "after year")?;
        let month = cur.number(2, "month")? as u8;
        if !(1..=12).contains(&month) {
            return Err(XmpError::BadValue(format!("Month out of range: {}", month)));
        }
        dt.month = Some(month);
        if cur.is_done() {
            return Ok(dt);
        }

        cur.expect(b'-', "after month")?;
        let day = cur.number(2, "day")? as u8;
        if day == 0 || day > days_in_month(year, month) {
            return Err(XmpError::BadValue(format!("Day out of range: {}", day)));
        }
        dt.day = Some(day);
        if cur.is_done() {
            return Ok(dt);
        }

        cur.expect(b'T', "between date and time")?;
        dt.time = Some(Self::parse_time(&mut cur)?);

        if !cur.is_done() {
            return Err(XmpError::BadValue(format!(
                "Trailing characters in date/time: {}",
                s
            )));
        }
        Ok(dt)
    }

    fn parse_time(cur: &mut Cursor<'_>) -> XmpResult<XmpTime> {
        let hour = cur.number(2, "hour")? as u8;
        cur.expect(b':', "after hour")?;
        let minute = cur.number(2, "minute")? as u8;
        if hour > 23 || minute > 59 {
            return Err(XmpError::BadValue(format!(
                "Time out of range: {:02}:{:02}",
                hour, minute
            )));
        }

        let mut time = XmpTime {
            hour,
            minute,
            second: 0,
            nanosecond: 0,
            offset_minutes: None,
        };

        if cur.eat(b':') {
            time.second = cur.number(2, "second")? as u8;
            if time.second > 59 {
                return Err(XmpError::BadValue(format!(
                    "Second out of range: {}",
                    time.second
                )));
            }
            if cur.eat(b'.') {
                time.nanosecond = cur.fraction()?;
            }
        }

        if cur.eat(b'Z') {
            time.offset_minutes = Some(0);
        } else if let Some(sign) = cur.sign() {
            let tz_hour = cur.number(2, "zone hour")? as i16;
            cur.expect(b':', "in zone offset")?;
            let tz_minute = cur.number(2, "zone minute")? as i16;
            if tz_hour > 23 || tz_minute > 59 {
                return Err(XmpError::BadValue("Zone offset out of range".to_string()));
            }
            time.offset_minutes = Some(sign * (tz_hour * 60 + tz_minute));
        }

        Ok(time)
    }
}

impl FromStr for XmpDateTime {
    type Err = XmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for XmpDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        let Some(month) = self.month else {
            return Ok(());
        };
        write!(f, "-{:02}", month)?;
        let Some(day) = self.day else {
            return Ok(());
        };
        write!(f, "-{:02}", day)?;
        let Some(time) = self.time else {
            return Ok(());
        };

        write!(f, "T{:02}:{:02}:{:02}", time.hour, time.minute, time.second)?;
        if time.nanosecond > 0 {
            let frac = format!("{:09}", time.nanosecond);
            write!(f, ".{}", frac.trim_end_matches('0'))?;
        }
        match time.offset_minutes {
            None => Ok(()),
            Some(0) => write!(f, "Z"),
            Some(offset) => {
                let sign = if offset < 0 { '-' } else { '+' };
                let abs = offset.abs();
                write!(f, "{}{:02}:{:02}", sign, abs / 60, abs % 60)
            }
        }
    }
}

impl From<XmpDateTime> for String {
    fn from(dt: XmpDateTime) -> Self {
        dt.to_string()
    }
}

impl TryFrom<String> for XmpDateTime {
    type Error = XmpError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            bytes: s.as_bytes(),
            pos: 0,
        }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.bytes.get(self.pos) == Some(&b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, b: u8, context: &str) -> XmpResult<()> {
        if self.eat(b) {
            Ok(())
        } else {
            Err(XmpError::BadValue(format!(
                "Expected '{}' {}",
                b as char, context
            )))
        }
    }

    fn sign(&mut self) -> Option<i16> {
        if self.eat(b'+') {
            Some(1)
        } else if self.eat(b'-') {
            Some(-1)
        } else {
            None
        }
    }

    /// Exactly `width` ASCII digits
    fn number(&mut self, width: usize, what: &str) -> XmpResult<u32> {
        let end = self.pos + width;
        let digits = self
            .bytes
            .get(self.pos..end)
            .filter(|d| d.iter().all(u8::is_ascii_digit))
            .ok_or_else(|| XmpError::BadValue(format!("Invalid {} in date string", what)))?;
        self.pos = end;
        Ok(digits
            .iter()
            .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0')))
    }

    /// Fractional seconds as nanoseconds; digits past the ninth are dropped
    fn fraction(&mut self) -> XmpResult<u32> {
        let start = self.pos;
        while self.bytes.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(XmpError::BadValue(
                "Missing fractional second digits".to_string(),
            ));
        }
        let mut nanos = 0u32;
        for i in 0..9 {
            let digit = self
                .bytes
                .get(start + i)
                .filter(|_| start + i < self.pos)
                .map_or(0, |d| u32::from(d - b'0'));
            nanos = nanos * 10 + digit;
        }
        Ok(nanos)
    }
}
