use crate::consts::PAGE_SIZE;
use crate::errors::AppResult;
use crate::models::trip::Trip;
use crate::services::console::Console;
use crate::services::reports::traits::report_trait::ReportTrait;
use crate::services::stats::{mode, value_counts};
use crate::state::TripData;
use std::io::{BufRead, Write};

/// Earliest, most recent and most common birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Counts and birth-year figures for the users behind the filtered trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats<'a> {
    pub user_types: Vec<(&'a str, usize)>,
    /// `None` when the backing file has no gender column.
    pub genders: Option<Vec<(&'a str, usize)>>,
    /// `None` when there is no column, or no filled-in cell, to report on.
    pub birth_years: Option<BirthYearStats>,
}

pub fn compute_user_stats(data: &TripData) -> UserStats<'_> {
    let user_types = value_counts(data.trips.iter().filter_map(|t| t.user_type.as_deref()));
    let genders = data
        .has_gender
        .then(|| value_counts(data.trips.iter().filter_map(|t| t.gender.as_deref())));
    let birth_years = if data.has_birth_year {
        birth_year_stats(data.trips.iter().filter_map(|t| t.birth_year))
    } else {
        None
    };
    UserStats {
        user_types,
        genders,
        birth_years,
    }
}

fn birth_year_stats<I: Iterator<Item = f64>>(years: I) -> Option<BirthYearStats> {
    let years: Vec<i32> = years.map(|y| y as i32).collect();
    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common: mode(years.iter().copied())?,
    })
}

pub struct UserReport;

impl ReportTrait for UserReport {
    fn heading(&self) -> &'static str {
        "Calculating User Stats..."
    }

    fn execute(&self, data: &TripData, out: &mut dyn Write) -> AppResult<()> {
        let stats = compute_user_stats(data);

        writeln!(out, "Counts of user types:")?;
        for (user_type, n) in &stats.user_types {
            writeln!(out, "  {user_type}: {n}")?;
        }

        match &stats.genders {
            Some(genders) => {
                writeln!(out, "\nCounts of gender:")?;
                for (gender, n) in genders {
                    writeln!(out, "  {gender}: {n}")?;
                }
            }
            None => writeln!(out, "\nNo information on gender.")?,
        }

        match stats.birth_years {
            Some(b) => {
                writeln!(out, "\nEarliest Year of Birth: {}", b.earliest)?;
                writeln!(out, "Most Recent Year of Birth: {}", b.most_recent)?;
                writeln!(out, "Most Common Year of Birth: {}", b.most_common)?;
            }
            None => writeln!(out, "\nNo information on users' year of birth.")?,
        }
        Ok(())
    }
}

/// Lets the operator page through the filtered trips `PAGE_SIZE` rows at a
/// time. Anything but "no" shows the next page; the loop also ends once every
/// row has been shown or input runs out.
pub fn browse_trips<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    data: &TripData,
) -> AppResult<()> {
    let mut answer =
        console.ask("\nWould you like to view 5 rows of individual trip data? Enter yes or no\n")?;
    let mut offset = 0;
    while answer.as_deref().is_some_and(|a| a != "no") {
        let page = data.page(offset, PAGE_SIZE);
        if !page.is_empty() {
            print_page(console.out(), page)?;
            offset += page.len();
        }
        if offset >= data.len() {
            writeln!(console.out(), "No more trip data to display.")?;
            break;
        }
        answer = console.ask("Do you wish to continue?: ")?;
    }
    Ok(())
}

fn print_page<W: Write>(out: &mut W, page: &[Trip]) -> AppResult<()> {
    writeln!(out, "{}", Trip::HEADER)?;
    for trip in page {
        writeln!(out, "{trip}")?;
    }
    Ok(())
}
