use crate::consts::{ALL, DAY_NAMES, MONTHS};
use crate::errors::SelectionParseError;
use crate::models::city::City;
use crate::models::trip::Trip;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// Calendar month, January = 1.
    Month(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    /// Index into `DAY_NAMES`, Monday = 0.
    Day(usize),
}

/// The city/month/day triple chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    /// Whether a loaded trip survives both the month and the day filter.
    pub fn matches(&self, trip: &Trip) -> bool {
        let month_ok = match self.month {
            MonthFilter::All => true,
            MonthFilter::Month(m) => trip.month == m,
        };
        let day_ok = match self.day {
            DayFilter::All => true,
            DayFilter::Day(d) => trip.day == DAY_NAMES[d],
        };
        month_ok && day_ok
    }
}

impl FromStr for MonthFilter {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        if wanted == ALL {
            return Ok(MonthFilter::All);
        }
        MONTHS
            .iter()
            .position(|m| *m == wanted)
            .map(|i| MonthFilter::Month(i as u32 + 1))
            .ok_or(SelectionParseError::UnknownMonth(wanted))
    }
}

impl FromStr for DayFilter {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        if wanted == ALL {
            return Ok(DayFilter::All);
        }
        DAY_NAMES
            .iter()
            .position(|d| d.to_lowercase() == wanted)
            .map(DayFilter::Day)
            .ok_or(SelectionParseError::UnknownDay(wanted))
    }
}

impl Display for MonthFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MonthFilter::All => f.write_str(ALL),
            MonthFilter::Month(m) => f.write_str(MONTHS[*m as usize - 1]),
        }
    }
}

impl Display for DayFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DayFilter::All => f.write_str(ALL),
            DayFilter::Day(d) => f.write_str(DAY_NAMES[*d]),
        }
    }
}
