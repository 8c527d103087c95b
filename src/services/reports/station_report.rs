use crate::errors::AppResult;
use crate::services::reports::traits::report_trait::{NO_TRIPS, ReportTrait};
use crate::services::stats::{mode, mode_with_count};
use crate::state::TripData;
use std::io::Write;

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats<'a> {
    pub most_common_start: &'a str,
    pub most_common_end: &'a str,
    /// (start station, end station) and the number of trips between them.
    pub most_common_trip: ((&'a str, &'a str), usize),
}

pub fn compute_station_stats(data: &TripData) -> Option<StationStats<'_>> {
    let trips = &data.trips;
    Some(StationStats {
        most_common_start: mode(trips.iter().map(|t| t.start_station.as_str()))?,
        most_common_end: mode(trips.iter().map(|t| t.end_station.as_str()))?,
        most_common_trip: mode_with_count(
            trips
                .iter()
                .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
        )?,
    })
}

pub struct StationReport;

impl ReportTrait for StationReport {
    fn heading(&self) -> &'static str {
        "Calculating The Most Popular Stations and Trip..."
    }

    fn execute(&self, data: &TripData, out: &mut dyn Write) -> AppResult<()> {
        let Some(stats) = compute_station_stats(data) else {
            writeln!(out, "{NO_TRIPS}")?;
            return Ok(());
        };
        let ((from, to), count) = stats.most_common_trip;
        writeln!(out, "Most Commonly Used Start Station: {}", stats.most_common_start)?;
        writeln!(out, "Most Commonly Used End Station: {}", stats.most_common_end)?;
        writeln!(out, "Frequent Combination of Stations:")?;
        writeln!(out, "  {from} -> {to}: {count}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::city::City;
    use crate::models::filter::{DayFilter, MonthFilter};
    use crate::services::csv_service::load_from_reader;
    use crate::services::csv_service::tests::{CHICAGO_CSV, selection};

    fn chicago() -> TripData {
        let sel = selection(City::Chicago, MonthFilter::All, DayFilter::All);
        load_from_reader(CHICAGO_CSV.as_bytes(), &sel).unwrap()
    }

    #[test]
    fn finds_popular_stations_and_route() {
        // arrange
        let data = chicago();

        // act
        let stats = compute_station_stats(&data).unwrap();

        // assert
        assert_eq!(stats.most_common_start, "Clark St & Randolph St");
        assert_eq!(stats.most_common_end, "Desplaines St & Jackson Blvd");
        assert_eq!(
            stats.most_common_trip,
            (("Clark St & Randolph St", "Desplaines St & Jackson Blvd"), 3)
        );
    }

    #[test]
    fn single_trip_is_its_own_route() {
        let mut data = chicago();
        data.trips.truncate(1);

        let stats = compute_station_stats(&data).unwrap();

        assert_eq!(
            stats.most_common_trip,
            (("Wood St & Hubbard St", "Damen Ave & Chicago Ave"), 1)
        );
    }

    #[test]
    fn run_prints_route_with_count() {
        let mut out = Vec::new();

        StationReport.run(&chicago(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Most Commonly Used Start Station: Clark St & Randolph St\n"));
        assert!(text.contains("  Clark St & Randolph St -> Desplaines St & Jackson Blvd: 3\n"));
    }

    #[test]
    fn no_trips_means_no_stations() {
        assert_eq!(compute_station_stats(&TripData::default()), None);
    }
}
