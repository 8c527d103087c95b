use crate::consts::{DAY_NAMES, TIMESTAMP_FORMAT};
use crate::errors::{AppErrors, AppResult};
use crate::models::csv_models::trip_row::InputRow;
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt::{Display, Formatter};

/// A single bicycle trip together with the calendar fields derived from its
/// start timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// 0-based position in the backing file; survives filtering.
    pub row: usize,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
    pub month: u32,
    pub day: &'static str,
    pub hour: u32,
}

impl Trip {
    pub const HEADER: &'static str = "row | Start Time | End Time | Trip Duration | Start Station | End Station | User Type | Gender | Birth Year | month | day | hour";
}

fn parse_timestamp(row: usize, raw: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(|source| {
        AppErrors::Timestamp {
            row,
            value: raw.to_string(),
            source,
        }
    })
}

impl TryFrom<(usize, InputRow)> for Trip {
    type Error = AppErrors;

    fn try_from((row, input): (usize, InputRow)) -> AppResult<Self> {
        let start_time = parse_timestamp(row, &input.start_time)?;
        let end_time = parse_timestamp(row, &input.end_time)?;
        Ok(Self {
            row,
            start_time,
            end_time,
            duration_secs: input.trip_duration,
            start_station: input.start_station,
            end_station: input.end_station,
            user_type: input.user_type,
            gender: input.gender,
            birth_year: input.birth_year.filter(|y| !y.is_nan()),
            month: start_time.month(),
            day: DAY_NAMES[start_time.weekday().num_days_from_monday() as usize],
            hour: start_time.hour(),
        })
    }
}

impl Display for Trip {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let missing = "-";
        let birth = self
            .birth_year
            .map(|y| format!("{}", y as i32))
            .unwrap_or_else(|| missing.to_string());
        write!(
            f,
            "{} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {}",
            self.row,
            self.start_time,
            self.end_time,
            self.duration_secs,
            self.start_station,
            self.end_station,
            self.user_type.as_deref().unwrap_or(missing),
            self.gender.as_deref().unwrap_or(missing),
            birth,
            self.month,
            self.day,
            self.hour,
        )
    }
}
