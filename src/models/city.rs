use crate::consts::CITY_DATA;
use crate::errors::SelectionParseError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One of the cities a backing file exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case canonical name, as the operator types it.
    #[inline]
    pub fn name(self) -> &'static str {
        CITY_DATA[self as usize].0
    }

    /// File name of the city's trip table inside the data directory.
    #[inline]
    pub fn file_name(self) -> &'static str {
        CITY_DATA[self as usize].1
    }
}

impl FromStr for City {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or(SelectionParseError::UnknownCity(wanted))
    }
}

impl Display for City {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
