//! Departure clock times.
//!
//! Departures carry an "HH:MM" time. Only the hour and minute matter for
//! routing; the time is pinned to a service date so it forms a complete
//! timestamp.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A departure time of day placed on a service date, seconds zeroed.
///
/// # Examples
///
/// ```
/// use baggage_router::domain::DepartureTime;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let time = DepartureTime::parse_hhmm("08:05", date).unwrap();
/// assert_eq!(time.to_string(), "08:05");
/// assert_eq!(time.date(), date);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DepartureTime {
    date: NaiveDate,
    time: NaiveTime,
}

impl DepartureTime {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Parse "HH:MM" (or "H:MM") onto `date`.
    ///
    /// Hours run 0-23 and minutes 0-59; minutes always take two digits.
    ///
    /// ```
    /// use baggage_router::domain::DepartureTime;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    ///
    /// assert!(DepartureTime::parse_hhmm("00:00", date).is_ok());
    /// assert!(DepartureTime::parse_hhmm("9:30", date).is_ok());
    /// assert!(DepartureTime::parse_hhmm("23:59", date).is_ok());
    ///
    /// assert!(DepartureTime::parse_hhmm("0800", date).is_err());
    /// assert!(DepartureTime::parse_hhmm("24:00", date).is_err());
    /// assert!(DepartureTime::parse_hhmm("08:5", date).is_err());
    /// ```
    pub fn parse_hhmm(s: &str, date: NaiveDate) -> Result<Self, TimeError> {
        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected HH:MM format"))?;

        if hours.is_empty() || hours.len() > 2 {
            return Err(TimeError::new("hour must have one or two digits"));
        }
        if minutes.len() != 2 {
            return Err(TimeError::new("minute must have two digits"));
        }

        let hour = parse_digits(hours).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute =
            parse_digits(minutes).ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self { date, time })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn to_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

impl fmt::Debug for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DepartureTime({} {:02}:{:02})",
            self.date,
            self.hour(),
            self.minute()
        )
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse a run of ASCII digits.
fn parse_digits(s: &str) -> Option<u32> {
    s.chars().try_fold(0u32, |acc, c| Some(acc * 10 + c.to_digit(10)?))
}
