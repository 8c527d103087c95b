use crate::errors::{AppErrors, AppResult};
use crate::services::console::Console;
use crate::services::csv_service::load_data;
use crate::services::filter_service::get_filters;
use crate::services::reports::duration_report::DurationReport;
use crate::services::reports::station_report::StationReport;
use crate::services::reports::time_report::TimeReport;
use crate::services::reports::traits::report_trait::ReportTrait;
use crate::services::reports::user_report::{UserReport, browse_trips};
use log::info;
use std::io::{BufRead, Write};
use std::path::Path;

/// Runs filter collection, loading and the four reports, then offers to start
/// over. Only an explicit "yes" restarts; nothing carries over between rounds.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    data_dir: &Path,
) -> AppResult<()> {
    let reports: [&dyn ReportTrait; 4] = [
        &TimeReport,
        &StationReport,
        &DurationReport,
        &UserReport,
    ];

    loop {
        let selection = match get_filters(console) {
            Ok(s) => s,
            Err(AppErrors::InputClosed) => return Ok(()),
            Err(e) => return Err(e),
        };
        let data = load_data(data_dir, &selection)?;

        for report in reports {
            report.run(&data, console.out())?;
        }
        browse_trips(console, &data)?;

        let restart = console.ask("\nWould you like to restart? Enter yes or no.\n")?;
        if restart.as_deref() != Some("yes") {
            info!("session finished");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::csv_service::tests::{CHICAGO_CSV, NEW_YORK_CITY_CSV, WASHINGTON_CSV};
    use tempfile::TempDir;

    fn data_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("chicago.csv"), CHICAGO_CSV).unwrap();
        std::fs::write(dir.path().join("new_york_city.csv"), NEW_YORK_CITY_CSV).unwrap();
        std::fs::write(dir.path().join("washington.csv"), WASHINGTON_CSV).unwrap();
        dir
    }

    fn session(script: &str) -> (AppResult<()>, String) {
        let dir = data_dir();
        let mut console = Console::new(script.as_bytes(), Vec::new());
        let res = run_session(&mut console, dir.path());
        (res, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn chicago_in_march_reports_march_as_most_common() {
        let (res, out) = session("chicago\nmarch\nall\nno\nno\n");

        assert!(res.is_ok());
        assert!(out.contains("Most common month is: 3\n"));
        assert!(out.contains("Most common day is: Monday\n"));
        assert!(out.contains("Total Travel Time: 925 in seconds\n"));
        assert!(out.contains("Counts of gender:\n  Male: 2\n"));
        assert_eq!(out.matches("Would you like to restart?").count(), 1);
    }

    #[test]
    fn yes_restarts_with_a_fresh_selection() {
        let script = "chicago\nall\nall\nno\nYES\nwashington\nall\nall\nno\nnope\n";

        let (res, out) = session(script);

        assert!(res.is_ok());
        assert_eq!(out.matches("Hello! Let's explore").count(), 2);
        assert!(out.contains("No information on gender."));
        assert_eq!(out.matches("Would you like to restart?").count(), 2);
    }

    #[test]
    fn padded_yes_does_not_restart() {
        let (res, out) = session("chicago\nall\nall\nno\n yes\nnew york city\nall\nall\n");

        assert!(res.is_ok());
        assert_eq!(out.matches("Hello! Let's explore").count(), 1);
        assert_eq!(out.matches("Would you like to restart?").count(), 1);
    }

    #[test]
    fn padded_city_is_asked_again() {
        // arrange
        let script = "  Chicago \nnew york city\njune\nall\nno\nno\n";

        // act
        let (res, out) = session(script);

        // assert
        assert!(res.is_ok());
        assert_eq!(out.matches("Invalid option").count(), 1);
        assert!(out.contains("Most common month is: 6\n"));
        assert!(out.contains("Most Commonly Used Start Station: Suffolk St & Stanton St\n"));
    }

    #[test]
    fn empty_selection_still_completes() {
        // no Chicago trips fall on a Sunday in the fixture
        let (res, out) = session("chicago\nall\nsunday\nyes\nno\n");

        assert!(res.is_ok());
        assert!(out.contains("No trips match the selected filters."));
        assert!(out.contains("No more trip data to display."));
    }

    #[test]
    fn missing_backing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = Console::new("new york city\nall\nall\n".as_bytes(), Vec::new());

        let res = run_session(&mut console, dir.path());

        assert!(matches!(res, Err(AppErrors::Io(msg)) if msg.contains("new_york_city.csv")));
    }

    #[test]
    fn closed_input_ends_session_quietly() {
        let (res, out) = session("");

        assert!(res.is_ok());
        assert!(out.starts_with("Hello!"));
    }
}
