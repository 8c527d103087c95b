use crate::errors::AppResult;
use crate::services::reports::traits::report_trait::{NO_TRIPS, ReportTrait};
use crate::services::stats::mode;
use crate::state::TripData;
use std::io::Write;

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub most_common_month: u32,
    pub most_common_day: &'static str,
    pub most_common_hour: u32,
}

/// Returns `None` when `data` holds no trips.
pub fn compute_time_stats(data: &TripData) -> Option<TimeStats> {
    Some(TimeStats {
        most_common_month: mode(data.trips.iter().map(|t| t.month))?,
        most_common_day: mode(data.trips.iter().map(|t| t.day))?,
        most_common_hour: mode(data.trips.iter().map(|t| t.hour))?,
    })
}

pub struct TimeReport;

impl ReportTrait for TimeReport {
    fn heading(&self) -> &'static str {
        "Calculating The Most Frequent Times of Travel..."
    }

    fn execute(&self, data: &TripData, out: &mut dyn Write) -> AppResult<()> {
        let Some(stats) = compute_time_stats(data) else {
            writeln!(out, "{NO_TRIPS}")?;
            return Ok(());
        };
        writeln!(out, "Most common month is: {}", stats.most_common_month)?;
        writeln!(out, "Most common day is: {}", stats.most_common_day)?;
        writeln!(out, "Most common start hour is: {}", stats.most_common_hour)?;
        Ok(())
    }
}
