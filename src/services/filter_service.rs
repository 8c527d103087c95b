use crate::consts::SEPARATOR_WIDTH;
use crate::errors::{AppErrors, AppResult};
use crate::models::filter::FilterSelection;
use crate::services::console::Console;
use log::{debug, warn};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Asks the operator for a city, month and day, re-prompting until each answer
/// is one of the allowed values.
///
/// # Returns
/// * `AppResult<FilterSelection>` - The validated selection, or
///   `AppErrors::InputClosed` if input ends before all three are given.
pub fn get_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> AppResult<FilterSelection> {
    writeln!(console.out(), "Hello! Let's explore some US bikeshare data!")?;

    let city = ask_until_valid(
        console,
        "Choose one of the following cities; Chicago, New York City, or Washington: ",
        "Please choose again from one of the following cities; Chicago, New York City, or Washington: ",
    )?;
    let month = ask_until_valid(
        console,
        "Choose data from a month January to June, or input all for all monthly data: ",
        "Please choose again from a month between January to June, or 'all' for all monthly data: ",
    )?;
    let day = ask_until_valid(
        console,
        "Choose data from a day of the week, or input all for weekly data: ",
        "Please choose again from a day of the week, or 'all' for all weekly data: ",
    )?;

    writeln!(console.out(), "{}", "-".repeat(SEPARATOR_WIDTH))?;
    let selection = FilterSelection { city, month, day };
    debug!("selected city={city} month={month} day={day}");
    Ok(selection)
}

fn ask_until_valid<T, R, W>(console: &mut Console<R, W>, first: &str, retry: &str) -> AppResult<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    let mut prompt = first;
    loop {
        let Some(answer) = console.ask(prompt)? else {
            warn!("input closed while waiting for a selection");
            return Err(AppErrors::InputClosed);
        };
        match answer.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                writeln!(console.out(), "Invalid option")?;
                prompt = retry;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::city::City;
    use crate::models::filter::{DayFilter, MonthFilter};

    fn collect(script: &str) -> (AppResult<FilterSelection>, String) {
        let mut console = Console::new(script.as_bytes(), Vec::new());
        let res = get_filters(&mut console);
        (res, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn accepts_valid_answers_in_any_case() {
        let (res, out) = collect("New York City\nMARCH\nFriday\n");

        let sel = res.unwrap();
        assert_eq!(sel.city, City::NewYorkCity);
        assert_eq!(sel.city.name(), "new york city");
        assert_eq!(sel.month, MonthFilter::Month(3));
        assert_eq!(sel.day, DayFilter::Day(4));
        assert!(out.starts_with("Hello! Let's explore some US bikeshare data!\n"));
        assert!(!out.contains("Invalid option"));
    }

    #[test]
    fn reprompts_until_each_answer_is_valid() {
        // arrange
        let script = "boston\nnyc\nchicago\njuly\nall\nfunday\nall\n";

        // act
        let (res, out) = collect(script);

        // assert
        let sel = res.unwrap();
        assert_eq!(sel.city, City::Chicago);
        assert_eq!(sel.month, MonthFilter::All);
        assert_eq!(sel.day, DayFilter::All);
        assert_eq!(out.matches("Invalid option").count(), 4);
        assert_eq!(out.matches("Please choose again from one of the following cities").count(), 2);
        assert_eq!(out.matches("Please choose again from a month").count(), 1);
        assert_eq!(out.matches("Please choose again from a day").count(), 1);
    }

    #[test]
    fn end_of_input_aborts_collection() {
        let (res, _) = collect("washington\n");

        assert!(matches!(res, Err(AppErrors::InputClosed)));
    }
}
