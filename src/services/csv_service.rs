use crate::errors::{AppErrors, AppResult};
use crate::models::csv_models::trip_row::{BIRTH_YEAR_COLUMN, GENDER_COLUMN, InputRow};
use crate::models::filter::FilterSelection;
use crate::models::trip::Trip;
use crate::state::TripData;
use csv::ReaderBuilder;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Loads the selected city's trips from `data_dir` and narrows them to the
/// selected month and day.
///
/// # Arguments
/// * `data_dir` - Directory holding the per-city CSV files.
/// * `selection` - The validated city/month/day triple.
///
/// # Returns
/// * `AppResult<TripData>` - The filtered record set, or an `AppErrors` variant
///   if the file is missing or a row cannot be coerced.
pub fn load_data(data_dir: &Path, selection: &FilterSelection) -> AppResult<TripData> {
    let path = data_dir.join(selection.city.file_name());
    let file = File::open(&path)
        .map_err(|e| AppErrors::Io(format!("open {}: {e}", path.display())))?;
    let data = load_from_reader(BufReader::new(file), selection)?;
    info!(
        "loaded {} trips for {} (month={}, day={})",
        data.len(),
        selection.city,
        selection.month,
        selection.day
    );
    Ok(data)
}

/// Reads every row from `reader`, derives the calendar fields and keeps the
/// rows `selection` matches. The first malformed row aborts the load.
pub fn load_from_reader<R: Read>(reader: R, selection: &FilterSelection) -> AppResult<TripData> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?;
    let has_gender = headers.iter().any(|h| h == GENDER_COLUMN);
    let has_birth_year = headers.iter().any(|h| h == BIRTH_YEAR_COLUMN);

    let mut trips = Vec::new();
    let mut total = 0usize;
    for (row, rec) in rdr.deserialize::<InputRow>().enumerate() {
        let trip = Trip::try_from((row, rec?))?;
        total += 1;
        if selection.matches(&trip) {
            trips.push(trip);
        }
    }
    debug!("kept {} of {total} rows", trips.len());

    Ok(TripData {
        trips,
        has_gender,
        has_birth_year,
    })
}
