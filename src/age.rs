//! Exact age in years, months and days.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

/// Date format accepted for birth dates.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Elapsed calendar time between a birth date and a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    pub years: i32,
    pub months: u32,
    pub days: u32,
}

impl Age {
    /// Age on `today` for someone born on `birth`.
    ///
    /// A day deficit borrows the length of the month before `today`;
    /// a month deficit borrows a year.
    pub fn between(birth: NaiveDate, today: NaiveDate) -> Self {
        let mut years = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }

        let mut months = today.month() as i32 - birth.month() as i32;
        let mut days = today.day() as i32 - birth.day() as i32;

        if days < 0 {
            days += days_in_previous_month(today) as i32;
            months -= 1;
        }
        if months < 0 {
            months += 12;
        }

        Self {
            years,
            months: months as u32,
            days: days.max(0) as u32,
        }
    }

    /// Age today, by the local clock.
    pub fn today(birth: NaiveDate) -> Self {
        Self::between(birth, Local::now().date_naive())
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months, {} days",
            self.years, self.months, self.days
        )
    }
}

/// Parse a `YYYY-MM-DD` birth date.
pub fn parse_birth_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), BIRTH_DATE_FORMAT)
}

fn days_in_previous_month(date: NaiveDate) -> u32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}
