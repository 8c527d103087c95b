/// Supported cities and the backing file each one is read from.
/// Names are the lower-case canonical form the operator types.
pub const CITY_DATA: [(&str, &str); 3] = [
    ("chicago", "chicago.csv"),
    ("new york city", "new_york_city.csv"),
    ("washington", "washington.csv"),
];

/// Months covered by the datasets, indexed from January.
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Weekday names in title form, indexed from Monday.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Answer accepted in place of a month or day to disable that filter.
pub const ALL: &str = "all";

/// Rows shown per page when browsing raw trip data.
pub const PAGE_SIZE: usize = 5;

pub const SEPARATOR_WIDTH: usize = 40;

/// Start/end timestamp layout; fractional seconds are optional.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
