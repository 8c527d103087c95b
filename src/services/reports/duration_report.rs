use crate::errors::AppResult;
use crate::services::reports::traits::report_trait::{NO_TRIPS, ReportTrait};
use crate::state::TripData;
use std::io::Write;

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total_secs: f64,
    /// `None` when there are no trips to average.
    pub mean_secs: Option<f64>,
}

pub fn compute_duration_stats(data: &TripData) -> DurationStats {
    let total_secs: f64 = data.trips.iter().map(|t| t.duration_secs).sum();
    let mean_secs = (!data.is_empty()).then(|| total_secs / data.len() as f64);
    DurationStats {
        total_secs,
        mean_secs,
    }
}

pub struct DurationReport;

impl ReportTrait for DurationReport {
    fn heading(&self) -> &'static str {
        "Calculating Trip Duration..."
    }

    fn execute(&self, data: &TripData, out: &mut dyn Write) -> AppResult<()> {
        let stats = compute_duration_stats(data);
        writeln!(out, "Total Travel Time: {} in seconds", stats.total_secs)?;
        match stats.mean_secs {
            Some(mean) => writeln!(out, "Mean Travel Time: {mean} in seconds")?,
            None => writeln!(out, "{NO_TRIPS}")?,
        }
        Ok(())
    }
}
